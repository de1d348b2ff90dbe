//! Output rendering for generated assistant configuration.
//!
//! Takes a [`GeneratedOutputs`] bundle and writes it for one of two targets:
//! the `.claude/` tree (plus root guidance document) or Cursor's
//! `.cursor/rules/` `.mdc` format. Also hosts the custom-template renderer
//! and the probe for configuration that already exists.

mod adapter;
mod claude;
mod cursor;
mod existing;
mod outputs;
mod template;

pub use adapter::{agent_globs, skill_globs, to_cursor_format, RuleMeta};
pub use claude::ClaudeWriter;
pub use cursor::CursorWriter;
pub use existing::{probe_existing_config, ExistingConfig};
pub use outputs::{GeneratedAgent, GeneratedOutputs, GeneratedSkill, WriteSummary};
pub use template::{
    custom_templates_dir, has_custom_template, load_custom_template, render_template, TemplateKind,
};

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by a writer.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory exists and overwrite was not confirmed.
    #[error("output directory {0} already exists (confirm overwrite to replace it)")]
    AlreadyExists(PathBuf),

    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
