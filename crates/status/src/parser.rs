//! Phase and task extraction from roadmap markdown.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static PHASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## Phase (\d+):\s*(.+)").expect("phase regex"));
static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[([ xX])\]\s+(.+)").expect("task regex"));

/// One roadmap phase with its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub number: u32,
    pub name: String,
    pub tasks: Vec<Task>,
}

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub title: String,
    pub done: bool,
}

/// Parse roadmap content into structured phases.
///
/// Task lines outside any phase are dropped; phase headers with unparseable
/// numbers are ignored as ordinary markdown.
#[must_use]
pub fn parse_roadmap(content: &str) -> Vec<Phase> {
    let mut phases: Vec<Phase> = Vec::new();
    let mut current: Option<Phase> = None;

    for line in content.lines() {
        if let Some(captures) = PHASE_RE.captures(line) {
            let Ok(number) = captures[1].parse::<u32>() else {
                continue;
            };
            if let Some(finished) = current.take() {
                phases.push(finished);
            }
            current = Some(Phase {
                number,
                name: captures[2].trim().to_string(),
                tasks: Vec::new(),
            });
            continue;
        }

        if let (Some(captures), Some(phase)) = (TASK_RE.captures(line), current.as_mut()) {
            phase.tasks.push(Task {
                title: captures[2].trim().to_string(),
                done: captures[1].eq_ignore_ascii_case("x"),
            });
        }
    }

    if let Some(finished) = current {
        phases.push(finished);
    }

    phases
}

/// Completion summary across one phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseProgress {
    pub number: u32,
    pub name: String,
    pub done: usize,
    pub total: usize,
}

/// Completion summary across a whole roadmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoadmapProgress {
    pub done: usize,
    pub total: usize,
    pub percent: f64,
    pub phases: Vec<PhaseProgress>,
}

/// Summarize completion across phases. An empty roadmap reports 0/0 at 0%.
#[must_use]
pub fn progress(phases: &[Phase]) -> RoadmapProgress {
    let mut summary = RoadmapProgress::default();

    for phase in phases {
        let done = phase.tasks.iter().filter(|t| t.done).count();
        summary.done += done;
        summary.total += phase.tasks.len();
        summary.phases.push(PhaseProgress {
            number: phase.number,
            name: phase.name.clone(),
            done,
            total: phase.tasks.len(),
        });
    }

    if summary.total > 0 {
        summary.percent = summary.done as f64 / summary.total as f64 * 100.0;
    }

    summary
}
