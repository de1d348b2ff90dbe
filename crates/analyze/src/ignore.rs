//! Exclusion rules applied to every directory scan in an analysis pass.
//!
//! Built-in exclusions cover version control, the dependency cache, and
//! standard build output directories; a project may extend them with a
//! `.agentryignore` file (one glob per line, `#` comments, no negation).
//! The resolved set must be threaded through pattern detection and file
//! sampling alike; applying it to some scans and not others is a bug.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;

/// Exclusions applied regardless of project configuration, first in the
/// resolved order.
pub const DEFAULT_IGNORE_RULES: &[&str] = &[
    ".git/**",
    "node_modules/**",
    "dist/**",
    "build/**",
    ".next/**",
    "out/**",
    "coverage/**",
];

/// Name of the optional project-local ignore file.
pub const IGNORE_FILE_NAME: &str = ".agentryignore";

/// Directory names pruned outright during walks. Kept in sync with the
/// directory portion of [`DEFAULT_IGNORE_RULES`].
pub(crate) const PRUNED_DIR_NAMES: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    ".next",
    "out",
    "coverage",
];

/// The effective exclusion set for one analysis pass.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    patterns: Vec<String>,
    set: GlobSet,
}

impl IgnoreRules {
    /// Merge the built-in exclusions with the project's ignore file.
    ///
    /// An unreadable or missing ignore file contributes nothing; this never
    /// fails.
    #[must_use]
    pub fn resolve(root: &Path) -> Self {
        Self::from_patterns(&resolve_ignore_rules(root))
    }

    /// Compile an explicit pattern list. Invalid globs are skipped.
    #[must_use]
    pub fn from_patterns(patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                    kept.push(pattern.clone());
                }
                Err(err) => {
                    tracing::debug!(pattern = %pattern, error = %err, "skipping invalid ignore glob");
                }
            }
        }
        let set = builder.build().unwrap_or_else(|err| {
            tracing::debug!(error = %err, "ignore set failed to compile; ignoring nothing");
            GlobSet::empty()
        });
        Self { patterns: kept, set }
    }

    /// Whether a root-relative path is excluded.
    #[must_use]
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.set.is_match(relative)
    }

    /// The resolved pattern list, built-ins first.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Resolve the ordered exclusion pattern list for a project root:
/// built-in rules first, then the lines of the project ignore file.
#[must_use]
pub fn resolve_ignore_rules(root: &Path) -> Vec<String> {
    let mut rules: Vec<String> = DEFAULT_IGNORE_RULES.iter().map(|s| (*s).to_string()).collect();

    match fs::read_to_string(root.join(IGNORE_FILE_NAME)) {
        Ok(content) => {
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                rules.push(line.to_string());
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::debug!(error = %err, "ignore file unreadable; using built-in rules only");
        }
    }

    rules
}
