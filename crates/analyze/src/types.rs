//! Data model produced by a single analysis pass.
//!
//! Every type here is built fresh per [`crate::Analyzer::analyze`] call and is
//! immutable once returned; there is no cross-run identity or cache.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overall classification of a project, decided by marker files first and
/// manifest dependencies second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Next.js application (marker config file or `next` dependency).
    Nextjs,
    /// React project without Next.js markers.
    React,
    /// Vue project.
    Vue,
    /// Plain Node.js server project (`express`/`fastify`).
    Node,
    /// Python project (`requirements.txt`).
    Python,
    /// Go project (`go.mod`).
    Go,
    /// Rust project (`Cargo.toml`).
    Rust,
    /// No recognizable signal.
    #[default]
    Unknown,
}

impl ProjectType {
    /// Stable lowercase label, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nextjs => "nextjs",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Node => "node",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Unknown => "unknown",
        }
    }
}

/// Web framework detected from manifest dependencies only.
///
/// Deliberately independent from [`ProjectType`]: a project with no manifest
/// can still classify as `React` via marker files while the framework stays
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Nextjs,
    Nuxtjs,
    Vue,
    Angular,
    Svelte,
    Express,
    Fastify,
    Nestjs,
}

impl Framework {
    /// Stable lowercase label, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nextjs => "nextjs",
            Self::Nuxtjs => "nuxtjs",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Svelte => "svelte",
            Self::Express => "express",
            Self::Fastify => "fastify",
            Self::Nestjs => "nestjs",
        }
    }
}

/// Primary source language, from the static-typing marker file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Typescript,
    Javascript,
}

impl Language {
    /// Stable lowercase label, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typescript => "typescript",
            Self::Javascript => "javascript",
        }
    }
}

/// Category assigned to a declared dependency by the ordered rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyCategory {
    Framework,
    Ui,
    Database,
    Orm,
    Auth,
    Payments,
    Testing,
    Build,
    Other,
}

/// A declared dependency with its assigned category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    pub category: DependencyCategory,
}

/// Structural convention a pattern probe looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternType {
    ApiRoutes,
    Components,
    Services,
    Models,
    Controllers,
    Middleware,
    Hooks,
    Utils,
    Tests,
}

impl PatternType {
    /// Stable kebab-case label, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiRoutes => "api-routes",
            Self::Components => "components",
            Self::Services => "services",
            Self::Models => "models",
            Self::Controllers => "controllers",
            Self::Middleware => "middleware",
            Self::Hooks => "hooks",
            Self::Utils => "utils",
            Self::Tests => "tests",
        }
    }
}

/// Confidence weight clamped to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new confidence, clamping the value into range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the inner value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// One detected structural pattern. Only present when the probe matched at
/// least one path; `paths` preserve the scan order of the underlying walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(rename = "type")]
    pub kind: PatternType,
    pub paths: Vec<String>,
    pub confidence: Confidence,
    pub description: String,
}

/// A representative file selected for generation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledFile {
    /// Project-root-relative path.
    pub path: String,
    /// Raw text, truncated to the line cap with a marker when exceeded.
    pub content: String,
    /// Why this file was sampled.
    pub purpose: String,
}

/// Workspace tool in use for a multi-package repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonorepoTool {
    Npm,
    Yarn,
    Pnpm,
    Lerna,
    Turborepo,
    Nx,
}

impl MonorepoTool {
    /// Stable lowercase label, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Lerna => "lerna",
            Self::Turborepo => "turborepo",
            Self::Nx => "nx",
        }
    }
}

/// One package resolved from the workspace globs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonorepoPackage {
    /// Manifest-declared name, falling back to the directory basename.
    pub name: String,
    /// Absolute package directory.
    pub path: PathBuf,
    /// Path relative to the project root.
    pub relative_path: String,
    /// Whether the package carries its own manifest.
    pub has_manifest: bool,
}

/// Workspace layout of a multi-package repository.
///
/// Built only when a tool was detected and its globs resolved to at least one
/// package; otherwise monorepo detection yields `None` as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonorepoInfo {
    pub is_monorepo: bool,
    pub tool: MonorepoTool,
    pub root_manifest: PathBuf,
    pub packages: Vec<MonorepoPackage>,
    pub workspace_globs: Vec<String>,
}

/// Lockfile-derived package manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Stable lowercase label, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }
}

/// Project commands derived from manifest scripts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCommands {
    pub lint: Option<String>,
    pub format: Option<String>,
    pub test: Option<String>,
    pub dev: Option<String>,
    pub build: Option<String>,
}

/// A "use X, NOT Y" rule derived from which of two rival technologies is
/// actually installed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegativeConstraint {
    /// What is installed.
    pub technology: String,
    /// The rival that is not.
    pub alternative: String,
    /// Human-readable rule for generation prompts.
    pub rule: String,
}

/// One recommended agent or skill with its justification trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    /// Which signals triggered this item, in trigger order.
    pub reasons: Vec<String>,
    /// Accumulated signal weight; used for ranking only.
    pub score: f64,
}

/// Ranked agent and skill recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub agents: Vec<Recommendation>,
    pub skills: Vec<Recommendation>,
}

/// The single immutable record produced by one analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodebaseAnalysis {
    pub project_root: PathBuf,
    pub project_type: ProjectType,
    pub language: Language,
    pub framework: Option<Framework>,
    pub dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
    pub detected_patterns: Vec<Pattern>,
    pub recommendations: Recommendations,
    pub monorepo: Option<MonorepoInfo>,
    pub sampled_files: Vec<SampledFile>,
    pub package_manager: PackageManager,
    pub commands: ProjectCommands,
    pub has_env_file: bool,
    pub negative_constraints: Vec<NegativeConstraint>,
    /// RFC 3339 timestamp of the analysis.
    pub analyzed_at: String,
    pub analysis_time_ms: u64,
}
