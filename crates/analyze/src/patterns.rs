//! Structural pattern detection.
//!
//! A fixed battery of glob probes, one per pattern type, each run as an
//! independent best-effort scan. A pattern appears in the result only when
//! its probe matched at least one path; probe failures collapse to zero
//! matches without aborting the pass.

use crate::ignore::IgnoreRules;
use crate::scan::{matching_files, run_probe};
use crate::types::{Confidence, Pattern, PatternType};
use globset::{Glob, GlobSetBuilder};
use std::path::Path;

struct PatternProbe {
    kind: PatternType,
    glob: &'static str,
    /// Fixed weight: 1.0 for exact framework conventions, lower for generic
    /// naming conventions. Calibration knobs, not measured precision.
    confidence: f64,
    description: &'static str,
}

const PATTERN_PROBES: &[PatternProbe] = &[
    PatternProbe {
        kind: PatternType::ApiRoutes,
        glob: "**/app/**/route.{ts,js}",
        confidence: 1.0,
        description: "Next.js App Router API routes",
    },
    PatternProbe {
        kind: PatternType::Components,
        glob: "**/components/**/*.{tsx,jsx}",
        confidence: 1.0,
        description: "React components",
    },
    PatternProbe {
        kind: PatternType::Services,
        glob: "**/{services,service}/**/*.{ts,js}",
        confidence: 0.9,
        description: "Service layer modules",
    },
    PatternProbe {
        kind: PatternType::Models,
        glob: "**/{models,entities,schemas}/**/*.{ts,js}",
        confidence: 0.9,
        description: "Data models and schemas",
    },
    PatternProbe {
        kind: PatternType::Controllers,
        glob: "**/{controllers,controller}/**/*.{ts,js}",
        confidence: 0.9,
        description: "Request controllers",
    },
    PatternProbe {
        kind: PatternType::Middleware,
        glob: "**/{middleware,middlewares}/**/*.{ts,js}",
        confidence: 0.9,
        description: "Middleware modules",
    },
    PatternProbe {
        kind: PatternType::Tests,
        glob: "**/*.{test,spec}.{ts,tsx,js,jsx}",
        confidence: 0.9,
        description: "Test files",
    },
    PatternProbe {
        kind: PatternType::Hooks,
        glob: "**/{hooks,composables}/**/*.{ts,tsx,js}",
        confidence: 0.8,
        description: "Reusable hooks",
    },
    PatternProbe {
        kind: PatternType::Utils,
        glob: "**/{utils,helpers,lib}/**/*.{ts,js}",
        confidence: 0.7,
        description: "Utility modules",
    },
];

/// Run every pattern probe against `root`, applying the resolved ignore set.
#[must_use]
pub fn detect_patterns(root: &Path, ignore: &IgnoreRules) -> Vec<Pattern> {
    let mut patterns = Vec::new();

    for probe in PATTERN_PROBES {
        let paths = run_probe(probe.kind.as_str(), || {
            let mut builder = GlobSetBuilder::new();
            builder.add(Glob::new(probe.glob)?);
            let set = builder.build()?;
            matching_files(root, &set, ignore)
        });

        if !paths.is_empty() {
            patterns.push(Pattern {
                kind: probe.kind,
                paths,
                confidence: Confidence::new(probe.confidence),
                description: probe.description.to_string(),
            });
        }
    }

    patterns
}
