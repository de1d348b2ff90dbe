//! Prompt construction for AI-assisted configuration generation.
//!
//! This crate turns an analysis record and a user goal into the prompts fed
//! to the text generator: compact context/sample sections, per-agent and
//! per-skill generation prompts, and the root guidance document prompt.

pub mod builder;
pub mod goal;
pub mod summarize;

pub use builder::{
    build_agent_prompt, build_context_section, build_guidance_prompt, build_samples_section,
    build_skill_prompt, GenerationContext,
};
pub use goal::{categorize_goal, GoalCategory, ProjectGoal};
pub use summarize::summarize_file;
