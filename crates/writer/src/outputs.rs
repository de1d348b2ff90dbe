//! Generated output bundles and write results.

use serde::Serialize;
use std::path::PathBuf;

/// One generated agent config.
#[derive(Debug, Clone)]
pub struct GeneratedAgent {
    pub name: String,
    pub content: String,
}

/// One generated skill file.
#[derive(Debug, Clone)]
pub struct GeneratedSkill {
    pub name: String,
    pub content: String,
}

/// Everything one generation run produced, ready to write.
#[derive(Debug, Clone, Default)]
pub struct GeneratedOutputs {
    /// Root guidance document content.
    pub guidance: String,
    pub agents: Vec<GeneratedAgent>,
    pub skills: Vec<GeneratedSkill>,
}

impl GeneratedOutputs {
    /// Total number of files a writer will produce for this bundle
    /// (agents + skills + the guidance document).
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.agents.len() + self.skills.len() + 1
    }
}

/// What a writer actually put on disk.
#[derive(Debug, Clone, Serialize)]
pub struct WriteSummary {
    pub total_files: usize,
    pub agents: Vec<String>,
    pub skills: Vec<String>,
    pub output_dir: PathBuf,
}
