//! Build compact generation prompts from analysis output.
//!
//! Templates are deliberately terse: the generation budget goes to sampled
//! code, not prose. Placeholders use `{name}` substitution.

use crate::goal::ProjectGoal;
use crate::summarize::summarize_file;
use agentry_analyze::{CodebaseAnalysis, SampledFile};

/// Everything the prompt builders need for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub goal: &'a ProjectGoal,
    pub analysis: &'a CodebaseAnalysis,
    pub selected_agents: &'a [String],
    pub selected_skills: &'a [String],
}

const AGENT_PROMPT: &str = r#"Generate an AI coding assistant agent config for "{name}".

{context}

Skills available to this agent: {skills}
{samples}

Requirements:
1. Start with YAML frontmatter containing:
   - name: (the agent identifier)
   - description: (one sentence, when to delegate to this agent)
2. Write focused instructions for the agent's specialty
3. Reference the project's actual stack and conventions
4. Keep it under 150 lines

Output ONLY the complete agent markdown, starting with the --- frontmatter delimiter."#;

const SKILL_PROMPT: &str = r#"Generate an AI coding assistant skill file (SKILL.md) for "{name}".

{context}
{samples}

Requirements:
1. Start with YAML frontmatter containing:
   - name: (max 100 characters, the skill identifier)
   - description: (max 500 characters, what the skill does)
2. Write clear, actionable instructions grounded in this project's conventions
3. Include practical examples where helpful
4. Keep the skill focused on a single, well-defined purpose

Output ONLY the complete SKILL.md content, starting with the --- frontmatter delimiter."#;

const GUIDANCE_PROMPT: &str = r#"Generate the root guidance document for an AI coding assistant working in this repository.

{context}

Commands:
{commands}

Rules:
{constraints}
{samples}

Requirements:
1. Describe what the project is and how it is structured
2. List the exact commands for linting, testing, and building
3. State the technology rules verbatim
4. Keep it under 200 lines; no marketing prose

Output ONLY the document markdown."#;

/// Build the compact `## Context` block shared by every prompt.
#[must_use]
pub fn build_context_section(ctx: &GenerationContext<'_>) -> String {
    let analysis = ctx.analysis;
    let deps: Vec<&str> = analysis
        .dependencies
        .iter()
        .take(8)
        .map(|d| d.name.as_str())
        .collect();
    let patterns: Vec<String> = analysis
        .detected_patterns
        .iter()
        .map(|p| format!("{}({})", p.kind.as_str(), p.paths.len()))
        .collect();

    let framework = analysis
        .framework
        .map(|f| f.as_str())
        .unwrap_or("none");

    format!(
        "## Context\nGoal: {}\nCategory: {}\nStack: {}/{}\nDeps: {}\nPatterns: {}",
        ctx.goal.description,
        ctx.goal.category.as_str(),
        analysis.language.as_str(),
        framework,
        if deps.is_empty() { "none".to_string() } else { deps.join(", ") },
        if patterns.is_empty() { "none".to_string() } else { patterns.join(", ") },
    )
}

/// Build the `## Code Samples` block from summarized sampled files.
/// Empty when there are no samples.
#[must_use]
pub fn build_samples_section(files: &[SampledFile], max_files: usize) -> String {
    if files.is_empty() {
        return String::new();
    }
    let samples: Vec<String> = files
        .iter()
        .take(max_files)
        .map(|f| {
            format!(
                "**{}**:\n```\n{}\n```",
                f.path,
                summarize_file(&f.content, &f.path)
            )
        })
        .collect();
    format!("## Code Samples\n{}", samples.join("\n\n"))
}

/// Prompt for generating one agent config.
#[must_use]
pub fn build_agent_prompt(agent_name: &str, ctx: &GenerationContext<'_>) -> String {
    AGENT_PROMPT
        .replace("{name}", agent_name)
        .replace("{context}", &build_context_section(ctx))
        .replace("{skills}", &join_or_none(ctx.selected_skills))
        .replace("{samples}", &build_samples_section(&ctx.analysis.sampled_files, 2))
}

/// Prompt for generating one skill file.
#[must_use]
pub fn build_skill_prompt(skill_name: &str, ctx: &GenerationContext<'_>) -> String {
    SKILL_PROMPT
        .replace("{name}", skill_name)
        .replace("{context}", &build_context_section(ctx))
        .replace("{samples}", &build_samples_section(&ctx.analysis.sampled_files, 2))
}

/// Prompt for generating the root guidance document.
#[must_use]
pub fn build_guidance_prompt(ctx: &GenerationContext<'_>) -> String {
    let analysis = ctx.analysis;
    let commands = [
        ("lint", &analysis.commands.lint),
        ("format", &analysis.commands.format),
        ("test", &analysis.commands.test),
        ("dev", &analysis.commands.dev),
        ("build", &analysis.commands.build),
    ]
    .iter()
    .filter_map(|(label, cmd)| cmd.as_ref().map(|c| format!("- {label}: `{c}`")))
    .collect::<Vec<_>>();

    let constraints: Vec<String> = analysis
        .negative_constraints
        .iter()
        .map(|c| format!("- {}", c.rule))
        .collect();

    let commands_block = if commands.is_empty() {
        "- none detected".to_string()
    } else {
        commands.join("\n")
    };
    let constraints_block = if constraints.is_empty() {
        "- none".to_string()
    } else {
        constraints.join("\n")
    };

    GUIDANCE_PROMPT
        .replace("{context}", &build_context_section(ctx))
        .replace("{commands}", &commands_block)
        .replace("{constraints}", &constraints_block)
        .replace("{samples}", &build_samples_section(&analysis.sampled_files, 3))
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
