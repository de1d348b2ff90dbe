//! Writer for the `.claude/` output tree.

use crate::outputs::{GeneratedOutputs, WriteSummary};
use crate::WriteError;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes agents, skills, and the root guidance document in the layout
/// Claude Code consumes.
pub struct ClaudeWriter {
    root: PathBuf,
    overwrite: bool,
}

impl ClaudeWriter {
    /// Create a writer for a project root. Refuses to touch an existing
    /// `.claude/` tree unless `overwrite` is set.
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
        self.root.join(".claude")
    }

    /// Write the full bundle: `.claude/agents/<name>.md`,
    /// `.claude/skills/<name>/SKILL.md`, and `CLAUDE.md` at the root.
    pub fn write_all(&self, outputs: &GeneratedOutputs) -> Result<WriteSummary, WriteError> {
        let claude_dir = self.output_dir();

        if claude_dir.exists() {
            if !self.overwrite {
                return Err(WriteError::AlreadyExists(claude_dir));
            }
            remove_if_present(&claude_dir.join("agents"))?;
            remove_if_present(&claude_dir.join("skills"))?;
        }

        let agents_dir = claude_dir.join("agents");
        let skills_dir = claude_dir.join("skills");
        fs::create_dir_all(&agents_dir)?;
        fs::create_dir_all(&skills_dir)?;

        for agent in &outputs.agents {
            fs::write(agents_dir.join(format!("{}.md", agent.name)), &agent.content)?;
        }

        for skill in &outputs.skills {
            let skill_dir = skills_dir.join(&skill.name);
            fs::create_dir_all(&skill_dir)?;
            fs::write(skill_dir.join("SKILL.md"), &skill.content)?;
        }

        fs::write(self.root.join("CLAUDE.md"), &outputs.guidance)?;

        tracing::debug!(dir = %claude_dir.display(), files = outputs.file_count(), "wrote claude config");

        Ok(WriteSummary {
            total_files: outputs.file_count(),
            agents: outputs.agents.iter().map(|a| a.name.clone()).collect(),
            skills: outputs.skills.iter().map(|s| s.name.clone()).collect(),
            output_dir: claude_dir,
        })
    }
}

fn remove_if_present(dir: &Path) -> std::io::Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::{GeneratedAgent, GeneratedSkill};
    use tempfile::tempdir;

    fn bundle() -> GeneratedOutputs {
        GeneratedOutputs {
            guidance: "# Project\n".to_string(),
            agents: vec![GeneratedAgent {
                name: "code-reviewer".to_string(),
                content: "---\nname: code-reviewer\n---\n".to_string(),
            }],
            skills: vec![GeneratedSkill {
                name: "nextjs".to_string(),
                content: "---\nname: nextjs\n---\n".to_string(),
            }],
        }
    }

    #[test]
    fn writes_expected_layout() {
        let tmp = tempdir().unwrap();
        let summary = ClaudeWriter::new(tmp.path(), false).write_all(&bundle()).unwrap();

        assert!(tmp.path().join(".claude/agents/code-reviewer.md").is_file());
        assert!(tmp.path().join(".claude/skills/nextjs/SKILL.md").is_file());
        assert!(tmp.path().join("CLAUDE.md").is_file());
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.agents, ["code-reviewer"]);
        assert_eq!(summary.skills, ["nextjs"]);
    }

    #[test]
    fn refuses_existing_tree_without_overwrite() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join(".claude")).unwrap();

        let err = ClaudeWriter::new(tmp.path(), false).write_all(&bundle()).unwrap_err();
        assert!(matches!(err, WriteError::AlreadyExists(_)));
    }

    #[test]
    fn overwrite_replaces_stale_outputs() {
        let tmp = tempdir().unwrap();
        let stale = tmp.path().join(".claude/agents/old-agent.md");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        ClaudeWriter::new(tmp.path(), true).write_all(&bundle()).unwrap();

        assert!(!stale.exists());
        assert!(tmp.path().join(".claude/agents/code-reviewer.md").is_file());
    }
}
