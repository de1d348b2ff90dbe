//! Library backing the `agentry` binary.
//!
//! Wires the analysis core, prompt builders, generator, and writers into the
//! command surface: `init` (full generation flow), `analyze` (inspection),
//! and `status` (roadmap progress).

pub mod cli;
pub mod commands;
pub mod config;

use clap::Parser;

/// Parse arguments and dispatch the selected command.
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    if let Err(err) = config::apply_config_defaults() {
        tracing::warn!(error = %err, "could not apply config file defaults");
    }

    let parsed = cli::Cli::parse();
    match parsed.command {
        cli::Commands::Init {
            root,
            ide,
            model,
            goal,
            yes,
            force,
        } => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(commands::init::run(commands::init::InitOptions {
                root,
                ide,
                model,
                goal,
                yes,
                force,
            }))
        }
        cli::Commands::Analyze { root, json } => commands::analyze::run(&root, json),
        cli::Commands::Status { root } => commands::status::run(&root),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
