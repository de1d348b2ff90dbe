//! Command-line interface definition.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output target for generated configuration.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum TargetIde {
    /// Claude Code (`.claude/` tree plus CLAUDE.md).
    #[default]
    Claude,
    /// Cursor (`.cursor/rules/` `.mdc` files).
    Cursor,
}

/// Command-line interface for the `agentry` application.
#[derive(Debug, Parser)]
#[command(
    name = "agentry",
    about = "Generates AI coding assistant configuration from codebase analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `agentry` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyzes the project and generates agents, skills, and guidance.
    Init {
        /// Project root to analyze.
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,
        /// Output target.
        #[arg(long, value_enum, default_value_t = TargetIde::Claude)]
        ide: TargetIde,
        /// Generation model (overrides `AGENTRY_MODEL` and the config file).
        #[arg(long, env = "AGENTRY_MODEL")]
        model: Option<String>,
        /// Describes the project goal non-interactively.
        #[arg(long, value_name = "TEXT")]
        goal: Option<String>,
        /// Accepts every recommendation without prompting.
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
        /// Overwrites an existing configuration without asking.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Runs the codebase analysis and prints the result.
    Analyze {
        /// Project root to analyze.
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,
        /// Prints the raw analysis record as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Shows roadmap progress from ROADMAP.md.
    Status {
        /// Project root containing ROADMAP.md.
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,
    },
}
