//! User-provided custom templates with `{{var}}` substitution.
//!
//! Templates live under `~/.agentry/templates/{agents,skills}/<name>.md`.
//! When one exists for a requested agent/skill name it replaces the AI
//! generation step entirely.

use std::fs;
use std::path::PathBuf;

/// Which template family to look in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Agent,
    Skill,
}

impl TemplateKind {
    fn subdir(self) -> &'static str {
        match self {
            Self::Agent => "agents",
            Self::Skill => "skills",
        }
    }
}

/// The custom templates directory, when a home directory is resolvable.
#[must_use]
pub fn custom_templates_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".agentry").join("templates"))
}

fn template_path(kind: TemplateKind, name: &str) -> Option<PathBuf> {
    Some(
        custom_templates_dir()?
            .join(kind.subdir())
            .join(format!("{}.md", name.to_lowercase())),
    )
}

/// Whether a custom template exists for `name`.
#[must_use]
pub fn has_custom_template(kind: TemplateKind, name: &str) -> bool {
    template_path(kind, name).is_some_and(|path| path.is_file())
}

/// Load and render a custom template, or `None` when there is none.
#[must_use]
pub fn load_custom_template(
    kind: TemplateKind,
    name: &str,
    vars: &[(&str, String)],
) -> Option<String> {
    let path = template_path(kind, name)?;
    let template = match fs::read_to_string(&path) {
        Ok(template) => template,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %err, "custom template unreadable");
            }
            return None;
        }
    };
    Some(render_template(&template, vars))
}

/// Replace every `{{key}}` placeholder with its value.
///
/// Unknown placeholders are left intact so a typo in a template stays
/// visible in the output instead of disappearing.
#[must_use]
pub fn render_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vars_replaced_globally() {
        let rendered = render_template(
            "Goal: {{goal}}\nAgain: {{goal}}\nStack: {{framework}}",
            &[
                ("goal", "a shop".to_string()),
                ("framework", "nextjs".to_string()),
            ],
        );
        assert_eq!(rendered, "Goal: a shop\nAgain: a shop\nStack: nextjs");
    }

    #[test]
    fn unknown_vars_are_left_intact() {
        let rendered = render_template("Hello {{nobody}}", &[("goal", "x".to_string())]);
        assert_eq!(rendered, "Hello {{nobody}}");
    }

    #[test]
    fn kind_maps_to_subdir() {
        assert_eq!(TemplateKind::Agent.subdir(), "agents");
        assert_eq!(TemplateKind::Skill.subdir(), "skills");
    }
}
