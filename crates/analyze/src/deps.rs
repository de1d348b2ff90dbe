//! Dependency cataloging.
//!
//! Each declared dependency name runs through an ordered rule chain; the
//! first matching rule assigns the category. Some categories match exactly,
//! others by substring. That mixture is per-category and load-bearing, so the
//! chain is written out rule by rule rather than unified behind one matcher.

use crate::manifest::{version_string, PackageJson};
use crate::types::{Dependency, DependencyCategory, NegativeConstraint};
use serde_json::Value;

const FRAMEWORK_EXACT: &[&str] = &["react", "vue", "@angular/core", "svelte"];
const UI_EXACT: &[&str] = &["tailwindcss", "@shadcn/ui", "styled-components"];
const DATABASE_CONTAINS: &[&str] = &["postgres", "mysql", "mongodb", "redis"];
const ORM_EXACT: &[&str] = &["prisma", "drizzle-orm", "typeorm", "sequelize"];
const AUTH_CONTAINS: &[&str] = &["next-auth", "@clerk/nextjs", "@supabase/auth"];
const PAYMENTS_CONTAINS: &[&str] = &["stripe", "@stripe/stripe-js", "paypal"];
const TESTING_EXACT: &[&str] = &["vitest", "jest", "playwright", "cypress"];
const BUILD_EXACT: &[&str] = &["vite", "webpack", "esbuild", "turbo"];

/// Rival technology pairs: when the first is installed and the second is
/// not, a "use X, NOT Y" constraint is emitted for generation prompts.
const RIVAL_PAIRS: &[(&str, &str, &str, &str)] = &[
    ("prisma", "drizzle-orm", "Prisma", "Drizzle"),
    ("drizzle-orm", "prisma", "Drizzle", "Prisma"),
    ("next-auth", "@clerk/nextjs", "NextAuth", "Clerk"),
    ("@clerk/nextjs", "next-auth", "Clerk", "NextAuth"),
    ("tailwindcss", "styled-components", "Tailwind CSS", "styled-components"),
    ("styled-components", "tailwindcss", "styled-components", "Tailwind CSS"),
];

/// Assign a category to a dependency name. First matching rule wins;
/// unmatched names fall through to [`DependencyCategory::Other`].
#[must_use]
pub fn categorize(name: &str) -> DependencyCategory {
    if FRAMEWORK_EXACT.contains(&name) {
        return DependencyCategory::Framework;
    }
    if UI_EXACT.contains(&name) {
        return DependencyCategory::Ui;
    }
    if DATABASE_CONTAINS.iter().any(|db| name.contains(db)) {
        return DependencyCategory::Database;
    }
    if ORM_EXACT.contains(&name) {
        return DependencyCategory::Orm;
    }
    if AUTH_CONTAINS.iter().any(|auth| name.contains(auth)) {
        return DependencyCategory::Auth;
    }
    if PAYMENTS_CONTAINS.iter().any(|pay| name.contains(pay)) {
        return DependencyCategory::Payments;
    }
    if TESTING_EXACT.contains(&name) {
        return DependencyCategory::Testing;
    }
    if BUILD_EXACT.contains(&name) {
        return DependencyCategory::Build;
    }
    DependencyCategory::Other
}

fn catalog(entries: &serde_json::Map<String, Value>) -> Vec<Dependency> {
    entries
        .iter()
        .map(|(name, version)| Dependency {
            name: name.clone(),
            version: version_string(version),
            category: categorize(name),
        })
        .collect()
}

/// Catalog the manifest's runtime and dev dependencies separately, applying
/// identical categorization rules to both.
#[must_use]
pub fn catalog_dependencies(pkg: &PackageJson) -> (Vec<Dependency>, Vec<Dependency>) {
    (catalog(&pkg.dependencies), catalog(&pkg.dev_dependencies))
}

/// Derive negative constraints from the rival-pair table.
#[must_use]
pub fn negative_constraints(
    dependencies: &[Dependency],
    dev_dependencies: &[Dependency],
) -> Vec<NegativeConstraint> {
    let has = |name: &str| {
        dependencies.iter().any(|d| d.name == name)
            || dev_dependencies.iter().any(|d| d.name == name)
    };

    RIVAL_PAIRS
        .iter()
        .filter(|(present, absent, _, _)| has(present) && !has(absent))
        .map(|(_, _, technology, alternative)| NegativeConstraint {
            technology: (*technology).to_string(),
            alternative: (*alternative).to_string(),
            rule: format!("Use {technology}, NOT {alternative}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_rules_do_not_match_substrings() {
        assert_eq!(categorize("react"), DependencyCategory::Framework);
        assert_eq!(categorize("react-dom"), DependencyCategory::Other);
        assert_eq!(categorize("prisma"), DependencyCategory::Orm);
        assert_eq!(categorize("@prisma/client"), DependencyCategory::Other);
    }

    #[test]
    fn contains_rules_match_substrings() {
        assert_eq!(categorize("pg-postgres"), DependencyCategory::Database);
        assert_eq!(categorize("ioredis"), DependencyCategory::Database);
        assert_eq!(categorize("@auth/next-auth-helpers"), DependencyCategory::Auth);
        assert_eq!(categorize("@stripe/stripe-js"), DependencyCategory::Payments);
    }

    #[test]
    fn rule_order_is_load_bearing() {
        // `stripe` would also substring-match nothing earlier in the chain;
        // payments is reached before testing/build.
        assert_eq!(categorize("stripe"), DependencyCategory::Payments);
        // The database contains-rule fires before the orm exact-rule would.
        assert_eq!(categorize("mysql2"), DependencyCategory::Database);
    }

    #[test]
    fn unmatched_names_are_other() {
        assert_eq!(categorize("left-pad"), DependencyCategory::Other);
    }

    #[test]
    fn runtime_and_dev_catalogued_separately() {
        let pkg: PackageJson = serde_json::from_str(
            r#"{
  "dependencies": { "react": "^18.0.0", "stripe": "^14.0.0" },
  "devDependencies": { "vitest": "^1.0.0" }
}"#,
        )
        .unwrap();

        let (deps, dev_deps) = catalog_dependencies(&pkg);
        assert_eq!(deps.len(), 2);
        assert_eq!(dev_deps.len(), 1);

        let react = deps.iter().find(|d| d.name == "react").unwrap();
        assert_eq!(react.category, DependencyCategory::Framework);
        assert_eq!(react.version, "^18.0.0");

        assert_eq!(dev_deps[0].category, DependencyCategory::Testing);
    }

    #[test]
    fn rival_pair_emits_constraint_only_one_way() {
        let deps = vec![Dependency {
            name: "prisma".to_string(),
            version: "^5".to_string(),
            category: DependencyCategory::Orm,
        }];
        let constraints = negative_constraints(&deps, &[]);
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].technology, "Prisma");
        assert_eq!(constraints[0].rule, "Use Prisma, NOT Drizzle");
    }

    #[test]
    fn both_rivals_installed_yields_no_constraint() {
        let mk = |name: &str| Dependency {
            name: name.to_string(),
            version: String::new(),
            category: categorize(name),
        };
        let deps = vec![mk("prisma"), mk("drizzle-orm")];
        assert!(negative_constraints(&deps, &[])
            .iter()
            .all(|c| c.technology != "Prisma" && c.technology != "Drizzle"));
    }
}
