//! Writer for the `.cursor/rules/` output tree.

use crate::adapter::{agent_globs, skill_globs, to_cursor_format, RuleMeta};
use crate::outputs::{GeneratedOutputs, WriteSummary};
use crate::WriteError;
use std::fs;
use std::path::PathBuf;

/// Writes the generated bundle as Cursor `.mdc` rules: a main project rule
/// plus one rule per agent and skill.
pub struct CursorWriter {
    root: PathBuf,
    overwrite: bool,
}

impl CursorWriter {
    /// Create a writer for a project root. Refuses to touch an existing
    /// `.cursor/` tree unless `overwrite` is set.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            root: root.into(),
            overwrite,
        }
    }

    /// The output directory this writer targets.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(".cursor").join("rules")
    }

    /// Write `project.mdc` plus `agents/` and `skills/` rule files.
    pub fn write_all(&self, outputs: &GeneratedOutputs) -> Result<WriteSummary, WriteError> {
        let cursor_dir = self.root.join(".cursor");
        let rules_dir = self.output_dir();

        if cursor_dir.exists() {
            if !self.overwrite {
                return Err(WriteError::AlreadyExists(cursor_dir));
            }
            if rules_dir.exists() {
                fs::remove_dir_all(&rules_dir)?;
            }
        }

        let agents_dir = rules_dir.join("agents");
        let skills_dir = rules_dir.join("skills");
        fs::create_dir_all(&agents_dir)?;
        fs::create_dir_all(&skills_dir)?;

        let project_meta = RuleMeta {
            name: "Project Context".to_string(),
            description: Some("Main project guidelines and context".to_string()),
            globs: Vec::new(),
        };
        fs::write(
            rules_dir.join("project.mdc"),
            to_cursor_format(&outputs.guidance, &project_meta),
        )?;

        for agent in &outputs.agents {
            let meta = RuleMeta {
                name: agent.name.clone(),
                description: Some(format!("{} agent rules", agent.name)),
                globs: agent_globs(&agent.name),
            };
            fs::write(
                agents_dir.join(format!("{}.mdc", agent.name)),
                to_cursor_format(&agent.content, &meta),
            )?;
        }

        for skill in &outputs.skills {
            let meta = RuleMeta {
                name: skill.name.clone(),
                description: Some(format!("{} knowledge", skill.name)),
                globs: skill_globs(&skill.name),
            };
            fs::write(
                skills_dir.join(format!("{}.mdc", skill.name)),
                to_cursor_format(&skill.content, &meta),
            )?;
        }

        tracing::debug!(dir = %rules_dir.display(), files = outputs.file_count(), "wrote cursor rules");

        Ok(WriteSummary {
            total_files: outputs.file_count(),
            agents: outputs.agents.iter().map(|a| a.name.clone()).collect(),
            skills: outputs.skills.iter().map(|s| s.name.clone()).collect(),
            output_dir: rules_dir,
        })
    }
}
