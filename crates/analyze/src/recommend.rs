//! Agent and skill recommendations.
//!
//! Independent signals (project type, detected patterns, declared
//! dependencies) each contribute a weighted vote for a named agent or skill.
//! Votes for the same name merge: reasons accumulate in trigger order and
//! weights sum into the ranking score, so a name never appears twice.

use crate::types::{
    Dependency, Framework, Pattern, PatternType, ProjectType, Recommendation, Recommendations,
};

/// Agents included for every project.
const BASE_AGENTS: &[&str] = &["code-reviewer", "debugger"];

/// Project types that imply a UI-centric codebase.
const UI_CENTRIC_TYPES: &[ProjectType] =
    &[ProjectType::Nextjs, ProjectType::React, ProjectType::Vue];

/// Patterns that suggest backend/full-stack support is useful.
const BACKEND_TRIGGER_PATTERNS: &[PatternType] =
    &[PatternType::Components, PatternType::ApiRoutes];

/// Dependency-to-skill rules; `prefix` switches between exact and
/// starts-with matching.
struct SkillRule {
    dependency: &'static str,
    skill: &'static str,
    prefix: bool,
}

const SKILL_RULES: &[SkillRule] = &[
    SkillRule { dependency: "typescript", skill: "typescript", prefix: false },
    SkillRule { dependency: "tailwindcss", skill: "tailwind", prefix: false },
    SkillRule { dependency: "@supabase/supabase-js", skill: "supabase", prefix: false },
    SkillRule { dependency: "stripe", skill: "stripe", prefix: false },
    SkillRule { dependency: "prisma", skill: "prisma", prefix: true },
    SkillRule { dependency: "drizzle-orm", skill: "drizzle", prefix: false },
];

const BASE_AGENT_WEIGHT: f64 = 1.0;
const PROJECT_TYPE_WEIGHT: f64 = 2.0;
const PATTERN_WEIGHT: f64 = 1.5;
const FRAMEWORK_SKILL_WEIGHT: f64 = 2.0;
const DEPENDENCY_SKILL_WEIGHT: f64 = 1.0;

/// Insertion-ordered accumulator with set semantics per name.
#[derive(Default)]
struct RecommendationSet {
    items: Vec<Recommendation>,
}

impl RecommendationSet {
    fn add(&mut self, name: &str, reason: String, weight: f64) {
        if let Some(existing) = self.items.iter_mut().find(|r| r.name == name) {
            if !existing.reasons.contains(&reason) {
                existing.reasons.push(reason);
            }
            existing.score += weight;
        } else {
            self.items.push(Recommendation {
                name: name.to_string(),
                reasons: vec![reason],
                score: weight,
            });
        }
    }

    /// Rank by accumulated score, stable across equal scores.
    fn into_ranked(mut self) -> Vec<Recommendation> {
        self.items
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        self.items
    }
}

/// Combine classifier, pattern, and dependency output into ranked agent and
/// skill suggestions, each carrying its justification trail.
#[must_use]
pub fn recommend(
    project_type: ProjectType,
    framework: Option<Framework>,
    patterns: &[Pattern],
    dependencies: &[Dependency],
    dev_dependencies: &[Dependency],
) -> Recommendations {
    Recommendations {
        agents: recommend_agents(project_type, patterns),
        skills: recommend_skills(framework, dependencies, dev_dependencies),
    }
}

fn recommend_agents(project_type: ProjectType, patterns: &[Pattern]) -> Vec<Recommendation> {
    let mut agents = RecommendationSet::default();

    for agent in BASE_AGENTS {
        agents.add(agent, "Useful for any project".to_string(), BASE_AGENT_WEIGHT);
    }

    if UI_CENTRIC_TYPES.contains(&project_type) {
        agents.add(
            "backend-engineer",
            format!(
                "{} projects benefit from dedicated backend support",
                project_type.as_str()
            ),
            PROJECT_TYPE_WEIGHT,
        );
    }

    for pattern in patterns {
        if BACKEND_TRIGGER_PATTERNS.contains(&pattern.kind) {
            agents.add(
                "backend-engineer",
                format!(
                    "Detected {} ({} matching files)",
                    pattern.kind.as_str(),
                    pattern.paths.len()
                ),
                PATTERN_WEIGHT,
            );
        }
    }

    agents.into_ranked()
}

fn recommend_skills(
    framework: Option<Framework>,
    dependencies: &[Dependency],
    dev_dependencies: &[Dependency],
) -> Vec<Recommendation> {
    let mut skills = RecommendationSet::default();

    if let Some(framework) = framework {
        skills.add(
            framework.as_str(),
            format!("Detected {} framework", framework.as_str()),
            FRAMEWORK_SKILL_WEIGHT,
        );
    }

    for dependency in dependencies.iter().chain(dev_dependencies) {
        for rule in SKILL_RULES {
            let matched = if rule.prefix {
                dependency.name.starts_with(rule.dependency)
            } else {
                dependency.name == rule.dependency
            };
            if matched {
                skills.add(
                    rule.skill,
                    format!("Depends on {}", dependency.name),
                    DEPENDENCY_SKILL_WEIGHT,
                );
            }
        }
    }

    skills.into_ranked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Confidence;

    fn dep(name: &str) -> Dependency {
        Dependency {
            name: name.to_string(),
            version: "^1.0.0".to_string(),
            category: crate::deps::categorize(name),
        }
    }

    fn pattern(kind: PatternType, count: usize) -> Pattern {
        Pattern {
            kind,
            paths: (0..count).map(|i| format!("src/x{i}.ts")).collect(),
            confidence: Confidence::new(1.0),
            description: String::new(),
        }
    }

    #[test]
    fn base_agents_always_present() {
        let recs = recommend(ProjectType::Unknown, None, &[], &[], &[]);
        let names: Vec<&str> = recs.agents.iter().map(|a| a.name.as_str()).collect();
        assert!(names.contains(&"code-reviewer"));
        assert!(names.contains(&"debugger"));
        assert!(!names.contains(&"backend-engineer"));
    }

    #[test]
    fn multiple_triggers_merge_into_one_agent() {
        let patterns = vec![
            pattern(PatternType::Components, 4),
            pattern(PatternType::ApiRoutes, 2),
        ];
        let recs = recommend(ProjectType::Nextjs, None, &patterns, &[], &[]);

        let backend: Vec<&Recommendation> = recs
            .agents
            .iter()
            .filter(|a| a.name == "backend-engineer")
            .collect();
        assert_eq!(backend.len(), 1, "agent must not be listed twice");
        assert_eq!(backend[0].reasons.len(), 3);
        assert!((backend[0].score - (2.0 + 1.5 + 1.5)).abs() < f64::EPSILON);
    }

    #[test]
    fn highest_scored_agent_ranks_first() {
        let patterns = vec![pattern(PatternType::ApiRoutes, 1)];
        let recs = recommend(ProjectType::React, None, &patterns, &[], &[]);
        assert_eq!(recs.agents[0].name, "backend-engineer");
    }

    #[test]
    fn framework_becomes_a_skill() {
        let recs = recommend(ProjectType::Nextjs, Some(Framework::Nextjs), &[], &[], &[]);
        assert_eq!(recs.skills[0].name, "nextjs");
        assert_eq!(recs.skills[0].reasons, ["Detected nextjs framework"]);
    }

    #[test]
    fn dependency_rules_cover_exact_and_prefix() {
        let deps = vec![dep("prisma"), dep("stripe")];
        let dev = vec![dep("typescript")];
        let recs = recommend(ProjectType::Node, None, &[], &deps, &dev);

        let names: Vec<&str> = recs.skills.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"prisma"));
        assert!(names.contains(&"stripe"));
        assert!(names.contains(&"typescript"));
    }

    #[test]
    fn every_recommendation_carries_a_reason() {
        let recs = recommend(
            ProjectType::Nextjs,
            Some(Framework::Nextjs),
            &[pattern(PatternType::Components, 2)],
            &[dep("tailwindcss")],
            &[],
        );
        for item in recs.agents.iter().chain(recs.skills.iter()) {
            assert!(!item.reasons.is_empty(), "{} has no reasons", item.name);
        }
    }
}
