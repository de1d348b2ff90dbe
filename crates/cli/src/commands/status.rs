//! The `status` command: roadmap progress.

use agentry_status::{parse_roadmap, progress, RoadmapProgress};
use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::path::Path;

const BAR_WIDTH: usize = 24;

/// Parse `ROADMAP.md` under `root` and print progress.
pub fn run(root: &Path) -> Result<()> {
    let path = root.join("ROADMAP.md");
    let content = fs::read_to_string(&path)
        .with_context(|| format!("no roadmap found at {}", path.display()))?;

    let phases = parse_roadmap(&content);
    println!("{}", render_progress(&progress(&phases)));
    Ok(())
}

/// Render a textual progress report with one bar per phase.
#[must_use]
pub fn render_progress(summary: &RoadmapProgress) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}/{} tasks ({:.0}%)",
        style("Roadmap:").bold(),
        summary.done,
        summary.total,
        summary.percent
    ));
    lines.push(bar(summary.done, summary.total));

    for phase in &summary.phases {
        lines.push(format!(
            "  Phase {}: {} - {}/{}",
            phase.number, phase.name, phase.done, phase.total
        ));
    }

    lines.join("\n")
}

fn bar(done: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        done * BAR_WIDTH / total
    };
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}
