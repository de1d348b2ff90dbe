//! The `init` command: analyze, recommend, select, generate, write.

use crate::cli::TargetIde;
use crate::commands::analyze::render_summary;
use agentry_analyze::{Analyzer, CodebaseAnalysis, Recommendations};
use agentry_generate::{extract_markdown, AnthropicGenerator, TextGenerator};
use agentry_prompts::{
    build_agent_prompt, build_guidance_prompt, build_skill_prompt, categorize_goal,
    GenerationContext, GoalCategory, ProjectGoal,
};
use agentry_writer::{
    load_custom_template, probe_existing_config, ClaudeWriter, CursorWriter, GeneratedAgent,
    GeneratedOutputs, GeneratedSkill, TemplateKind, WriteSummary,
};
use anyhow::{bail, Result};
use console::style;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

const ALL_CATEGORIES: &[GoalCategory] = &[
    GoalCategory::SaasDashboard,
    GoalCategory::Ecommerce,
    GoalCategory::ContentPlatform,
    GoalCategory::ApiService,
    GoalCategory::MobileApp,
    GoalCategory::CliTool,
    GoalCategory::DataPipeline,
    GoalCategory::AuthService,
    GoalCategory::Custom,
];

/// Options collected from the command line.
#[derive(Debug)]
pub struct InitOptions {
    pub root: PathBuf,
    pub ide: TargetIde,
    pub model: Option<String>,
    pub goal: Option<String>,
    pub yes: bool,
    pub force: bool,
}

/// Run the full init flow.
pub async fn run(options: InitOptions) -> Result<()> {
    let overwrite = confirm_overwrite(&options)?;

    let goal = collect_goal(&options)?;

    let spinner = ProgressBar::new_spinner().with_message("Analyzing codebase...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let analysis = Analyzer::new(&options.root).analyze();
    spinner.finish_and_clear();

    println!("{}", render_summary(&analysis));

    if let Some(monorepo) = &analysis.monorepo {
        println!(
            "{} {} workspace with {} packages; generating for the root",
            style("Note:").bold().yellow(),
            monorepo.tool.as_str(),
            monorepo.packages.len()
        );
    }

    let (agents, skills) = select_recommendations(&analysis.recommendations, options.yes)?;
    if agents.is_empty() && skills.is_empty() {
        bail!("nothing selected; aborting");
    }

    let generator = AnthropicGenerator::from_env(options.model.clone())?;
    let outputs = generate_outputs(&generator, &goal, &analysis, &agents, &skills).await?;

    let summary = write_outputs(&options, overwrite, &outputs)?;

    println!(
        "{} wrote {} files to {} ({} agents, {} skills)",
        style("Done:").bold().green(),
        summary.total_files,
        summary.output_dir.display(),
        summary.agents.len(),
        summary.skills.len()
    );

    Ok(())
}

/// Refuse to clobber an existing configuration unless forced or confirmed.
fn confirm_overwrite(options: &InitOptions) -> Result<bool> {
    let existing = probe_existing_config(&options.root);
    if !existing.is_present() {
        return Ok(false);
    }
    if options.force {
        return Ok(true);
    }
    if options.yes {
        bail!("configuration already exists; pass --force to overwrite");
    }
    let confirmed = Confirm::new()
        .with_prompt("A configuration already exists here. Overwrite?")
        .default(false)
        .interact()?;
    if !confirmed {
        bail!("aborted: existing configuration left untouched");
    }
    Ok(true)
}

fn collect_goal(options: &InitOptions) -> Result<ProjectGoal> {
    if let Some(description) = &options.goal {
        return Ok(ProjectGoal {
            description: description.clone(),
            category: categorize_goal(description),
        });
    }
    if options.yes {
        return Ok(ProjectGoal {
            description: "Improve and extend this codebase".to_string(),
            category: GoalCategory::Custom,
        });
    }

    let description: String = Input::new()
        .with_prompt("What are you building?")
        .validate_with(|input: &String| {
            if input.trim().len() < 10 {
                Err("please provide more detail (at least 10 characters)")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let suggested = categorize_goal(&description);
    let labels: Vec<String> = ALL_CATEGORIES
        .iter()
        .map(|c| {
            if *c == suggested {
                format!("{} (detected)", c.label())
            } else {
                c.label().to_string()
            }
        })
        .collect();
    let default_index = ALL_CATEGORIES
        .iter()
        .position(|c| *c == suggested)
        .unwrap_or(ALL_CATEGORIES.len() - 1);
    let chosen = Select::new()
        .with_prompt("Project category")
        .items(&labels)
        .default(default_index)
        .interact()?;

    Ok(ProjectGoal {
        description,
        category: ALL_CATEGORIES[chosen],
    })
}

/// Let the user trim the recommendation lists; `--yes` takes everything.
fn select_recommendations(
    recommendations: &Recommendations,
    yes: bool,
) -> Result<(Vec<String>, Vec<String>)> {
    let agents = pick(
        "Select agents to include",
        &recommendations.agents,
        yes,
    )?;
    let skills = pick(
        "Select skills to include",
        &recommendations.skills,
        yes,
    )?;
    Ok((agents, skills))
}

fn pick(
    prompt: &str,
    items: &[agentry_analyze::Recommendation],
    yes: bool,
) -> Result<Vec<String>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    if yes {
        return Ok(items.iter().map(|r| r.name.clone()).collect());
    }

    let labels: Vec<String> = items
        .iter()
        .map(|r| {
            format!(
                "{} - {}",
                r.name,
                r.reasons.first().map(String::as_str).unwrap_or("")
            )
        })
        .collect();
    let defaults = vec![true; items.len()];
    let chosen = MultiSelect::new()
        .with_prompt(prompt)
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|i| items[i].name.clone()).collect())
}

/// Generate every selected item plus the guidance document.
///
/// A custom template under `~/.agentry/templates/` replaces the generation
/// call for that name.
pub async fn generate_outputs(
    generator: &dyn TextGenerator,
    goal: &ProjectGoal,
    analysis: &CodebaseAnalysis,
    agents: &[String],
    skills: &[String],
) -> Result<GeneratedOutputs> {
    let ctx = GenerationContext {
        goal,
        analysis,
        selected_agents: agents,
        selected_skills: skills,
    };
    let vars = template_vars(goal, analysis, agents, skills);

    let bar = ProgressBar::new((agents.len() + skills.len() + 1) as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:24} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut outputs = GeneratedOutputs::default();

    for name in agents {
        bar.set_message(format!("agent: {name}"));
        let content = match load_custom_template(TemplateKind::Agent, name, &vars) {
            Some(content) => content,
            None => extract_markdown(&generator.generate(&build_agent_prompt(name, &ctx)).await?),
        };
        outputs.agents.push(GeneratedAgent {
            name: name.clone(),
            content,
        });
        bar.inc(1);
    }

    for name in skills {
        bar.set_message(format!("skill: {name}"));
        let content = match load_custom_template(TemplateKind::Skill, name, &vars) {
            Some(content) => content,
            None => extract_markdown(&generator.generate(&build_skill_prompt(name, &ctx)).await?),
        };
        outputs.skills.push(GeneratedSkill {
            name: name.clone(),
            content,
        });
        bar.inc(1);
    }

    bar.set_message("guidance document");
    outputs.guidance = extract_markdown(&generator.generate(&build_guidance_prompt(&ctx)).await?);
    bar.inc(1);
    bar.finish_and_clear();

    Ok(outputs)
}

/// Variables available to custom templates.
fn template_vars(
    goal: &ProjectGoal,
    analysis: &CodebaseAnalysis,
    agents: &[String],
    skills: &[String],
) -> Vec<(&'static str, String)> {
    vec![
        ("goal", goal.description.clone()),
        ("category", goal.category.as_str().to_string()),
        (
            "framework",
            analysis
                .framework
                .map(|f| f.as_str().to_string())
                .unwrap_or_else(|| "none".to_string()),
        ),
        ("language", analysis.language.as_str().to_string()),
        (
            "dependencies",
            analysis
                .dependencies
                .iter()
                .take(10)
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        (
            "patterns",
            analysis
                .detected_patterns
                .iter()
                .map(|p| format!("{}: {}", p.kind.as_str(), p.description))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        ("agents", agents.join(", ")),
        ("skills", skills.join(", ")),
    ]
}

fn write_outputs(
    options: &InitOptions,
    overwrite: bool,
    outputs: &GeneratedOutputs,
) -> Result<WriteSummary> {
    let summary = match options.ide {
        TargetIde::Claude => ClaudeWriter::new(&options.root, overwrite).write_all(outputs)?,
        TargetIde::Cursor => CursorWriter::new(&options.root, overwrite).write_all(outputs)?,
    };
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_vars_cover_goal_and_stack() {
        let fixture = agentry_test_utils::ProjectFixture::new().unwrap();
        fixture.manifest(r#"{ "dependencies": { "next": "^14.0.0" } }"#);
        let analysis = agentry_analyze::analyze(fixture.root());
        let goal = ProjectGoal {
            description: "a shop".to_string(),
            category: GoalCategory::Ecommerce,
        };

        let vars = template_vars(
            &goal,
            &analysis,
            &["code-reviewer".to_string()],
            &["nextjs".to_string()],
        );
        let get = |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("goal"), "a shop");
        assert_eq!(get("category"), "ecommerce");
        assert_eq!(get("framework"), "nextjs");
        assert_eq!(get("agents"), "code-reviewer");
    }
}
