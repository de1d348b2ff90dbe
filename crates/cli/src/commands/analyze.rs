//! The `analyze` command: run the core pass and print the result.

use agentry_analyze::CodebaseAnalysis;
use anyhow::Result;
use console::style;
use std::path::Path;

/// Run the analysis and print either a human summary or raw JSON.
pub fn run(root: &Path, json: bool) -> Result<()> {
    let analysis = agentry_analyze::analyze(root);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", render_summary(&analysis));
    }
    Ok(())
}

/// Render the human-readable analysis summary.
#[must_use]
pub fn render_summary(analysis: &CodebaseAnalysis) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        style("Project:").bold(),
        analysis.project_root.display()
    ));
    lines.push(format!(
        "  type: {}  language: {}  framework: {}  package manager: {}",
        analysis.project_type.as_str(),
        analysis.language.as_str(),
        analysis
            .framework
            .map(|f| f.as_str())
            .unwrap_or("none"),
        analysis.package_manager.as_str(),
    ));
    lines.push(format!(
        "  dependencies: {} runtime, {} dev",
        analysis.dependencies.len(),
        analysis.dev_dependencies.len()
    ));

    if let Some(monorepo) = &analysis.monorepo {
        lines.push(format!(
            "  monorepo: {} ({} packages)",
            monorepo.tool.as_str(),
            monorepo.packages.len()
        ));
    }

    if !analysis.detected_patterns.is_empty() {
        lines.push(format!("{}", style("Patterns:").bold()));
        for pattern in &analysis.detected_patterns {
            lines.push(format!(
                "  {} ({} files, confidence {})",
                pattern.kind.as_str(),
                pattern.paths.len(),
                pattern.confidence
            ));
        }
    }

    lines.push(format!("{}", style("Recommended agents:").bold()));
    for agent in &analysis.recommendations.agents {
        lines.push(format!(
            "  {} - {}",
            agent.name,
            agent.reasons.first().map(String::as_str).unwrap_or("")
        ));
    }

    if !analysis.recommendations.skills.is_empty() {
        lines.push(format!("{}", style("Recommended skills:").bold()));
        for skill in &analysis.recommendations.skills {
            lines.push(format!(
                "  {} - {}",
                skill.name,
                skill.reasons.first().map(String::as_str).unwrap_or("")
            ));
        }
    }

    lines.push(format!(
        "Sampled {} files in {} ms",
        analysis.sampled_files.len(),
        analysis.analysis_time_ms
    ));

    lines.join("\n")
}
