//! Convert generated markdown into Cursor's `.mdc` rule format.
//!
//! Cursor rules carry YAML frontmatter with a name, an optional description,
//! and glob patterns scoping where the rule applies. The glob tables are
//! fixed per agent/skill name, falling back to match-everything.

use serde::Serialize;

/// Metadata for one `.mdc` rule file.
#[derive(Debug, Clone, Serialize)]
pub struct RuleMeta {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub globs: Vec<String>,
}

/// Wrap markdown content in `.mdc` frontmatter.
#[must_use]
pub fn to_cursor_format(content: &str, meta: &RuleMeta) -> String {
    let yaml = serde_yaml::to_string(meta).unwrap_or_default();
    format!("---\n{yaml}---\n{content}")
}

const SKILL_GLOBS: &[(&str, &[&str])] = &[
    ("typescript", &["**/*.ts", "**/*.tsx"]),
    ("javascript", &["**/*.js", "**/*.jsx"]),
    ("nodejs", &["**/*.js", "**/*.ts", "package.json"]),
    ("react", &["**/*.tsx", "**/*.jsx", "src/components/**/*"]),
    ("nextjs", &["**/*.tsx", "**/*.ts", "app/**/*", "pages/**/*"]),
    ("vue", &["**/*.vue", "src/**/*"]),
    ("tailwind", &["**/*.css", "tailwind.config.*"]),
    ("prisma", &["prisma/**/*", "**/*.prisma"]),
    ("drizzle", &["drizzle/**/*", "db/**/*"]),
    ("vitest", &["**/*.test.ts", "**/*.spec.ts", "vitest.config.*"]),
    ("express", &["**/*.ts", "**/*.js", "routes/**/*", "middleware/**/*"]),
    ("supabase", &["supabase/**/*", "**/*.sql"]),
    ("stripe", &["**/*.ts", "**/*.js"]),
];

const AGENT_GLOBS: &[(&str, &[&str])] = &[
    ("backend-engineer", &["src/**/*", "lib/**/*", "api/**/*"]),
    ("frontend-specialist", &["src/components/**/*", "src/pages/**/*", "public/**/*"]),
    ("code-reviewer", &["**/*"]),
    ("debugger", &["**/*"]),
    ("database-specialist", &["**/*.sql", "prisma/**/*", "drizzle/**/*", "migrations/**/*"]),
    ("testing-specialist", &["**/*.test.*", "**/*.spec.*", "tests/**/*"]),
    ("docs-writer", &["**/*.md", "docs/**/*"]),
];

fn lookup(table: &[(&str, &[&str])], name: &str) -> Vec<String> {
    let name = name.to_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, globs)| globs.iter().map(|g| (*g).to_string()).collect())
        .unwrap_or_else(|| vec!["**/*".to_string()])
}

/// Default rule globs for a skill name.
#[must_use]
pub fn skill_globs(name: &str) -> Vec<String> {
    lookup(SKILL_GLOBS, name)
}

/// Default rule globs for an agent name.
#[must_use]
pub fn agent_globs(name: &str) -> Vec<String> {
    lookup(AGENT_GLOBS, name)
}
