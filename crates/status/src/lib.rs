//! Roadmap progress parsing.
//!
//! Extracts phases and tasks from a `ROADMAP.md`-style document: `## Phase
//! N: Name` headers followed by `- [x]` / `- [ ]` task lines. Anything else
//! in the document is ignored, and tasks before the first phase header are
//! dropped.

mod parser;

pub use parser::{parse_roadmap, progress, Phase, PhaseProgress, RoadmapProgress, Task};
