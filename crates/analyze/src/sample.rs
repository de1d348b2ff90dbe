//! Representative file sampling for generation context.
//!
//! Selection is deliberately sequential and short-circuiting: earlier probes
//! are higher priority and the cap is small. Admission is best-effort all the
//! way down; a file that is missing, ignored, or oversized is skipped without
//! a trace in the output.

use crate::classify::NEXT_CONFIG_FILES;
use crate::ignore::IgnoreRules;
use crate::types::{Pattern, ProjectType, SampledFile};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of sampled files per analysis.
pub const MAX_SAMPLED_FILES: usize = 20;
/// Files larger than this are skipped entirely.
pub const MAX_SAMPLED_FILE_BYTES: u64 = 100_000;
/// Files longer than this are truncated with [`TRUNCATION_MARKER`].
pub const MAX_SAMPLED_FILE_LINES: usize = 500;
/// Appended as the final line of truncated content.
pub const TRUNCATION_MARKER: &str = "[... truncated ...]";

/// How many matched paths to sample per detected pattern.
const PATTERN_SAMPLE_LIMIT: usize = 3;

/// Conventional entry points, probed last, in priority order.
const ENTRY_POINT_FILES: &[&str] = &[
    "src/index.ts",
    "src/index.js",
    "src/main.ts",
    "src/main.js",
    "index.ts",
    "index.js",
    "app/layout.tsx",
    "app/page.tsx",
];

/// Bounded, ordered, deduplicated file sampler.
pub struct FileSampler<'a> {
    root: &'a Path,
    ignore: &'a IgnoreRules,
    files: Vec<SampledFile>,
}

impl<'a> FileSampler<'a> {
    /// Sample representative files for one analysis pass.
    #[must_use]
    pub fn sample(
        root: &'a Path,
        ignore: &'a IgnoreRules,
        project_type: ProjectType,
        patterns: &[Pattern],
    ) -> Vec<SampledFile> {
        let mut sampler = Self {
            root,
            ignore,
            files: Vec::new(),
        };
        sampler.run(project_type, patterns);
        sampler.files
    }

    fn run(&mut self, project_type: ProjectType, patterns: &[Pattern]) {
        self.try_add("package.json", "Project dependencies and scripts");
        self.try_add("tsconfig.json", "TypeScript configuration");

        if project_type == ProjectType::Nextjs {
            for config in NEXT_CONFIG_FILES {
                self.try_add(config, "Next.js configuration");
            }
        }

        for pattern in patterns {
            for path in pattern.paths.iter().take(PATTERN_SAMPLE_LIMIT) {
                if self.full() {
                    return;
                }
                self.try_add(path, &format!("Example {}", pattern.kind.as_str()));
            }
        }

        for entry_point in ENTRY_POINT_FILES {
            if self.full() {
                return;
            }
            self.try_add(entry_point, "Entry point file");
        }
    }

    fn full(&self) -> bool {
        self.files.len() >= MAX_SAMPLED_FILES
    }

    /// Admit one file, silently skipping anything missing, duplicate,
    /// ignored, oversized, or unreadable.
    fn try_add(&mut self, relative: &str, purpose: &str) {
        if self.full() || self.files.iter().any(|f| f.path == relative) {
            return;
        }
        if self.ignore.is_ignored(relative) {
            return;
        }

        let path: PathBuf = self.root.join(relative);
        let Ok(metadata) = fs::metadata(&path) else {
            return;
        };
        if !metadata.is_file() || metadata.len() > MAX_SAMPLED_FILE_BYTES {
            return;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "skipping unreadable sample");
                return;
            }
        };

        self.files.push(SampledFile {
            path: relative.to_string(),
            content: truncate_lines(&content),
            purpose: purpose.to_string(),
        });
    }
}

/// Truncate content to the line cap, appending the marker as its own final
/// line. Content at or under the cap is returned unchanged.
fn truncate_lines(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() <= MAX_SAMPLED_FILE_LINES {
        return content.to_string();
    }
    let mut truncated = lines[..MAX_SAMPLED_FILE_LINES].join("\n");
    truncated.push('\n');
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, PatternType};
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn pattern(kind: PatternType, paths: &[&str]) -> Pattern {
        Pattern {
            kind,
            paths: paths.iter().map(|p| (*p).to_string()).collect(),
            confidence: Confidence::new(1.0),
            description: String::new(),
        }
    }

    #[test]
    fn manifest_and_tsconfig_sampled_first() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", "{}");
        write(tmp.path(), "tsconfig.json", "{}");

        let files = FileSampler::sample(
            tmp.path(),
            &IgnoreRules::from_patterns(&[]),
            ProjectType::Unknown,
            &[],
        );
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["package.json", "tsconfig.json"]);
    }

    #[test]
    fn nextjs_config_sampled_for_nextjs_projects() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "next.config.mjs", "export default {}");

        let files = FileSampler::sample(
            tmp.path(),
            &IgnoreRules::from_patterns(&[]),
            ProjectType::Nextjs,
            &[],
        );
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "next.config.mjs");
        assert_eq!(files[0].purpose, "Next.js configuration");
    }

    #[test]
    fn at_most_three_paths_per_pattern() {
        let tmp = tempdir().unwrap();
        for name in ["A", "B", "C", "D", "E"] {
            write(tmp.path(), &format!("components/{name}.tsx"), "export {}");
        }
        let paths = ["components/A.tsx", "components/B.tsx", "components/C.tsx", "components/D.tsx", "components/E.tsx"];

        let files = FileSampler::sample(
            tmp.path(),
            &IgnoreRules::from_patterns(&[]),
            ProjectType::Unknown,
            &[pattern(PatternType::Components, &paths)],
        );
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].purpose, "Example components");
    }

    #[test]
    fn never_exceeds_cap_and_never_duplicates() {
        let tmp = tempdir().unwrap();
        let mut paths = Vec::new();
        for i in 0..30 {
            let rel = format!("components/C{i:02}.tsx");
            write(tmp.path(), &rel, "export {}");
            paths.push(rel);
        }
        // Many patterns pointing at overlapping path sets.
        let path_refs: Vec<&str> = paths.iter().map(String::as_str).collect();
        let patterns: Vec<Pattern> = (0..12)
            .map(|_| pattern(PatternType::Components, &path_refs))
            .collect();

        write(tmp.path(), "package.json", "{}");
        let files = FileSampler::sample(
            tmp.path(),
            &IgnoreRules::from_patterns(&[]),
            ProjectType::Unknown,
            &patterns,
        );

        assert!(files.len() <= MAX_SAMPLED_FILES);
        let mut seen = std::collections::HashSet::new();
        for file in &files {
            assert!(seen.insert(file.path.clone()), "duplicate path {}", file.path);
        }
    }

    #[test]
    fn oversized_files_are_skipped_silently() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", &"x".repeat(200_000));
        write(tmp.path(), "tsconfig.json", "{}");

        let files = FileSampler::sample(
            tmp.path(),
            &IgnoreRules::from_patterns(&[]),
            ProjectType::Unknown,
            &[],
        );
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "tsconfig.json");
    }

    #[test]
    fn long_files_truncate_to_exactly_the_cap_plus_marker() {
        let tmp = tempdir().unwrap();
        let content: String = (0..800).map(|i| format!("line {i}\n")).collect();
        write(tmp.path(), "src/index.ts", &content);

        let files = FileSampler::sample(
            tmp.path(),
            &IgnoreRules::from_patterns(&[]),
            ProjectType::Unknown,
            &[],
        );
        assert_eq!(files.len(), 1);

        let lines: Vec<&str> = files[0].content.lines().collect();
        assert_eq!(lines.len(), MAX_SAMPLED_FILE_LINES + 1);
        assert_eq!(*lines.last().unwrap(), TRUNCATION_MARKER);
        assert_eq!(lines[MAX_SAMPLED_FILE_LINES - 1], "line 499");
    }

    #[test]
    fn ignored_paths_are_not_sampled() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "vendor/legacy.ts", "export {}");

        let ignore = IgnoreRules::from_patterns(&["vendor/**".to_string()]);
        let files = FileSampler::sample(
            tmp.path(),
            &ignore,
            ProjectType::Unknown,
            &[pattern(PatternType::Components, &["vendor/legacy.ts"])],
        );
        assert!(files.is_empty());
    }

    #[test]
    fn entry_points_fill_remaining_slots() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "src/index.ts", "console.log('hi')\n");
        write(tmp.path(), "app/page.tsx", "export default function Page() {}\n");

        let files = FileSampler::sample(
            tmp.path(),
            &IgnoreRules::from_patterns(&[]),
            ProjectType::Unknown,
            &[],
        );
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["src/index.ts", "app/page.tsx"]);
        assert!(files.iter().all(|f| f.purpose == "Entry point file"));
    }
}
