//! Probe for already-generated configuration.
//!
//! This is a distinct, deliberately small read: it only answers "is there a
//! config here and what is it called", and it is not part of the analysis
//! record.

use serde::Serialize;
use std::fs;
use std::path::Path;

/// What already exists under a project root.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExistingConfig {
    pub has_claude_dir: bool,
    pub has_guidance: bool,
    pub agents: Vec<String>,
    pub skills: Vec<String>,
}

impl ExistingConfig {
    /// Whether anything would be clobbered by a fresh write.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.has_claude_dir || self.has_guidance
    }
}

/// Probe `root` for an existing `.claude/` tree and guidance document.
#[must_use]
pub fn probe_existing_config(root: &Path) -> ExistingConfig {
    let claude_dir = root.join(".claude");

    ExistingConfig {
        has_claude_dir: claude_dir.is_dir(),
        has_guidance: root.join("CLAUDE.md").is_file(),
        agents: markdown_stems(&claude_dir.join("agents")),
        skills: subdirectory_names(&claude_dir.join("skills")),
    }
}

/// Stems of `*.md` files directly under `dir`, sorted.
fn markdown_stems(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut stems: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|stem| stem.to_str().map(str::to_string))
        })
        .collect();
    stems.sort();
    stems
}

/// Names of subdirectories of `dir` that contain a `SKILL.md`, sorted.
fn subdirectory_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().join("SKILL.md").is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();
    names
}
