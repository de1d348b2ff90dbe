//! Project goal types collected from the user.

use serde::{Deserialize, Serialize};

/// What the user says they are building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectGoal {
    /// Free-form description.
    pub description: String,
    /// Coarse category, suggested from the description and confirmable by
    /// the user.
    pub category: GoalCategory,
}

/// Goal categories offered during setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalCategory {
    SaasDashboard,
    Ecommerce,
    ContentPlatform,
    ApiService,
    MobileApp,
    CliTool,
    DataPipeline,
    AuthService,
    #[default]
    Custom,
}

impl GoalCategory {
    /// Stable kebab-case label, matching the serialized form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SaasDashboard => "saas-dashboard",
            Self::Ecommerce => "ecommerce",
            Self::ContentPlatform => "content-platform",
            Self::ApiService => "api-service",
            Self::MobileApp => "mobile-app",
            Self::CliTool => "cli-tool",
            Self::DataPipeline => "data-pipeline",
            Self::AuthService => "auth-service",
            Self::Custom => "custom",
        }
    }

    /// Human-readable label for selection menus.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SaasDashboard => "SaaS Dashboard",
            Self::Ecommerce => "E-Commerce Platform",
            Self::ContentPlatform => "Content Platform",
            Self::ApiService => "API Service",
            Self::MobileApp => "Mobile App",
            Self::CliTool => "CLI Tool",
            Self::DataPipeline => "Data Pipeline",
            Self::AuthService => "Auth Service",
            Self::Custom => "Custom",
        }
    }
}

/// Keyword tables probed in order; the first category with a matching
/// keyword wins.
const CATEGORY_KEYWORDS: &[(GoalCategory, &[&str])] = &[
    (GoalCategory::SaasDashboard, &["saas", "dashboard", "analytics", "metrics", "admin", "panel"]),
    (GoalCategory::Ecommerce, &["ecommerce", "e-commerce", "shop", "store", "marketplace", "cart"]),
    (GoalCategory::ContentPlatform, &["blog", "cms", "content", "articles", "posts", "publishing"]),
    (GoalCategory::ApiService, &["api", "rest", "graphql", "microservice", "backend", "service"]),
    (GoalCategory::MobileApp, &["mobile", "app", "ios", "android", "react native", "flutter"]),
    (GoalCategory::CliTool, &["cli", "command line", "terminal", "tool", "utility"]),
    (GoalCategory::DataPipeline, &["pipeline", "etl", "data processing", "batch", "warehouse"]),
    (GoalCategory::AuthService, &["authentication", "auth", "login", "identity", "sso", "oauth"]),
];

/// Suggest a category from a free-form goal description.
#[must_use]
pub fn categorize_goal(description: &str) -> GoalCategory {
    if description.is_empty() {
        return GoalCategory::Custom;
    }
    let lower = description.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *category;
        }
    }
    GoalCategory::Custom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_categories() {
        assert_eq!(
            categorize_goal("A SaaS analytics dashboard with charts"),
            GoalCategory::SaasDashboard
        );
        assert_eq!(
            categorize_goal("An online store with a cart"),
            GoalCategory::Ecommerce
        );
        assert_eq!(categorize_goal("a terminal utility"), GoalCategory::CliTool);
    }

    #[test]
    fn first_matching_table_wins() {
        // "dashboard" (saas) appears before "api" (api-service) in rule order.
        assert_eq!(
            categorize_goal("dashboard over a REST api"),
            GoalCategory::SaasDashboard
        );
    }

    #[test]
    fn unmatched_or_empty_descriptions_are_custom() {
        assert_eq!(categorize_goal(""), GoalCategory::Custom);
        assert_eq!(categorize_goal("something else entirely"), GoalCategory::Custom);
    }
}
