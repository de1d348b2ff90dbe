//! Codebase analysis for AI-assistant configuration generation.
//!
//! This crate walks a JavaScript/TypeScript project tree, classifies it
//! (project type, framework, dependency categories, structural patterns),
//! samples representative files under hard size budgets, and turns those
//! signals into ranked agent/skill recommendations with explainable reasons.
//!
//! The whole pass degrades gracefully: missing files, malformed manifests,
//! and I/O trouble all fold into the "unknown project" baseline instead of
//! failing, so [`Analyzer::analyze`] is infallible by design.

pub mod classify;
pub mod deps;
pub mod ignore;
pub mod manifest;
pub mod monorepo;
pub mod patterns;
pub mod recommend;
pub mod sample;
mod scan;
pub mod types;

pub use classify::{detect_framework, detect_project_type};
pub use deps::{catalog_dependencies, categorize, negative_constraints};
pub use ignore::{resolve_ignore_rules, IgnoreRules, DEFAULT_IGNORE_RULES, IGNORE_FILE_NAME};
pub use manifest::{read_package_json, PackageJson, WorkspaceDecl};
pub use monorepo::detect_monorepo;
pub use patterns::detect_patterns;
pub use recommend::recommend;
pub use sample::{
    FileSampler, MAX_SAMPLED_FILES, MAX_SAMPLED_FILE_BYTES, MAX_SAMPLED_FILE_LINES,
    TRUNCATION_MARKER,
};
pub use types::{
    CodebaseAnalysis, Confidence, Dependency, DependencyCategory, Framework, Language,
    MonorepoInfo, MonorepoPackage, MonorepoTool, NegativeConstraint, Pattern, PatternType,
    PackageManager, ProjectCommands, ProjectType, Recommendation, Recommendations, SampledFile,
};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Script keys probed for project commands, in output order.
const COMMAND_SCRIPT_KEYS: &[&str] = &["lint", "format", "test", "dev", "build"];

/// One-shot analyzer for a project root.
pub struct Analyzer {
    root: PathBuf,
}

impl Analyzer {
    /// Create an analyzer for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Run the full analysis pass and assemble the immutable record.
    ///
    /// The mutually independent probes (classifier, framework detector,
    /// monorepo detector) run concurrently; sampling and recommendation
    /// consume their combined output sequentially.
    #[must_use]
    pub fn analyze(&self) -> CodebaseAnalysis {
        let started = Instant::now();
        let root = self.root.as_path();

        let ignore = IgnoreRules::resolve(root);

        let ((project_type, framework), monorepo) = rayon::join(
            || {
                rayon::join(
                    || classify::detect_project_type(root),
                    || classify::detect_framework(root),
                )
            },
            || monorepo::detect_monorepo(root),
        );

        let language = if root.join("tsconfig.json").is_file() {
            Language::Typescript
        } else {
            Language::Javascript
        };

        let pkg = manifest::read_package_json(root);
        let (dependencies, dev_dependencies) = pkg
            .as_ref()
            .map(deps::catalog_dependencies)
            .unwrap_or_default();

        let detected_patterns = patterns::detect_patterns(root, &ignore);
        let sampled_files = FileSampler::sample(root, &ignore, project_type, &detected_patterns);
        let recommendations = recommend::recommend(
            project_type,
            framework,
            &detected_patterns,
            &dependencies,
            &dev_dependencies,
        );

        let package_manager = detect_package_manager(root);
        let commands = detect_commands(pkg.as_ref(), package_manager);
        let has_env_file = root.join(".env").is_file() || root.join(".env.local").is_file();
        let negative_constraints = deps::negative_constraints(&dependencies, &dev_dependencies);

        CodebaseAnalysis {
            project_root: self.root.clone(),
            project_type,
            language,
            framework,
            dependencies,
            dev_dependencies,
            detected_patterns,
            recommendations,
            monorepo,
            sampled_files,
            package_manager,
            commands,
            has_env_file,
            negative_constraints,
            analyzed_at: now_rfc3339(),
            analysis_time_ms: started.elapsed().as_millis() as u64,
        }
    }
}

/// Analyze `root` with default settings.
#[must_use]
pub fn analyze(root: &Path) -> CodebaseAnalysis {
    Analyzer::new(root).analyze()
}

/// Lockfile-based package manager detection, defaulting to npm.
#[must_use]
pub fn detect_package_manager(root: &Path) -> PackageManager {
    if root.join("pnpm-lock.yaml").is_file() {
        PackageManager::Pnpm
    } else if root.join("yarn.lock").is_file() {
        PackageManager::Yarn
    } else if root.join("bun.lockb").is_file() {
        PackageManager::Bun
    } else {
        PackageManager::Npm
    }
}

fn detect_commands(pkg: Option<&PackageJson>, manager: PackageManager) -> ProjectCommands {
    let mut commands = ProjectCommands::default();
    let Some(pkg) = pkg else {
        return commands;
    };

    for key in COMMAND_SCRIPT_KEYS {
        if pkg.script(key).is_none() {
            continue;
        }
        let rendered = Some(format!("{} run {key}", manager.as_str()));
        match *key {
            "lint" => commands.lint = rendered,
            "format" => commands.format = rendered,
            "test" => commands.test = rendered,
            "dev" => commands.dev = rendered,
            "build" => commands.build = rendered,
            _ => {}
        }
    }

    commands
}

fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}
