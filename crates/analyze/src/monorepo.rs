//! Multi-package workspace detection.
//!
//! Tools are probed in a fixed order; a later marker overrides the tool flag
//! but keeps previously resolved workspace globs unless the tool redefines
//! them (turborepo and nx never do). Detection only reports a monorepo when a
//! tool is found AND its globs resolve to at least one package; a marker file
//! whose globs match nothing yields no monorepo at all.

use crate::manifest::{read_package_json, MANIFEST_FILE_NAME};
use crate::scan::{matching_dirs, run_probe};
use crate::types::{MonorepoInfo, MonorepoPackage, MonorepoTool};
use globset::{Glob, GlobSetBuilder};
use std::fs;
use std::path::Path;

const PNPM_WORKSPACE_FILE: &str = "pnpm-workspace.yaml";
const LERNA_CONFIG_FILE: &str = "lerna.json";
const TURBO_MARKER_FILE: &str = "turbo.json";
const NX_MARKER_FILE: &str = "nx.json";

const LERNA_DEFAULT_GLOBS: &[&str] = &["packages/*"];

/// Detect the workspace layout of `root`, if any.
#[must_use]
pub fn detect_monorepo(root: &Path) -> Option<MonorepoInfo> {
    let manifest_path = root.join(MANIFEST_FILE_NAME);
    if !manifest_path.is_file() {
        return None;
    }

    let mut tool: Option<MonorepoTool> = None;
    let mut globs: Vec<String> = Vec::new();

    // npm/yarn workspaces field; yarn specifically when its lockfile exists.
    if let Some(pkg) = read_package_json(root) {
        if let Some(workspaces) = &pkg.workspaces {
            globs = workspaces.globs().to_vec();
            tool = Some(if root.join("yarn.lock").is_file() {
                MonorepoTool::Yarn
            } else {
                MonorepoTool::Npm
            });
        }
    }

    // pnpm workspace file redefines the glob list when its `packages:` block
    // is present.
    let pnpm_path = root.join(PNPM_WORKSPACE_FILE);
    if pnpm_path.is_file() {
        match fs::read_to_string(&pnpm_path) {
            Ok(content) => {
                tool = Some(MonorepoTool::Pnpm);
                if let Some(parsed) = parse_pnpm_packages(&content) {
                    globs = parsed;
                }
            }
            Err(err) => {
                tracing::debug!(path = %pnpm_path.display(), error = %err, "pnpm workspace file unreadable");
            }
        }
    }

    // lerna redefines globs, defaulting when the field is absent. A malformed
    // config is treated as an absent marker.
    let lerna_path = root.join(LERNA_CONFIG_FILE);
    if lerna_path.is_file() {
        match read_lerna_globs(&lerna_path) {
            Some(lerna_globs) => {
                tool = Some(MonorepoTool::Lerna);
                globs = lerna_globs;
            }
            None => {
                tracing::debug!(path = %lerna_path.display(), "lerna config unreadable; ignoring marker");
            }
        }
    }

    // Tool-flag-only markers: do not alter globs.
    if root.join(TURBO_MARKER_FILE).is_file() {
        tool = Some(MonorepoTool::Turborepo);
    }
    if root.join(NX_MARKER_FILE).is_file() {
        tool = Some(MonorepoTool::Nx);
    }

    let tool = tool?;
    if globs.is_empty() {
        return None;
    }

    let packages = resolve_packages(root, &globs);
    if packages.is_empty() {
        return None;
    }

    Some(MonorepoInfo {
        is_monorepo: true,
        tool,
        root_manifest: manifest_path,
        packages,
        workspace_globs: globs,
    })
}

/// Extract the list items of the `packages:` block.
///
/// The file is YAML-like but only this one block is consumed, so the parse is
/// line-based: list items until the next top-level key, punctuation and
/// quotes stripped. Returns `None` when no `packages:` key exists.
fn parse_pnpm_packages(content: &str) -> Option<Vec<String>> {
    let mut lines = content.lines();
    lines.by_ref().find(|line| line.trim_end() == "packages:")?;

    let mut globs = Vec::new();
    for line in lines {
        if !line.is_empty() && !line.starts_with([' ', '\t', '-']) {
            break;
        }
        let item = line.trim();
        let Some(item) = item.strip_prefix('-') else {
            continue;
        };
        let item = item.trim().trim_matches(['\'', '"']);
        if !item.is_empty() && !item.starts_with('#') {
            globs.push(item.to_string());
        }
    }
    Some(globs)
}

/// `packages` field of lerna.json, defaulting to `packages/*`. `None` when
/// the file is unreadable or malformed.
fn read_lerna_globs(path: &Path) -> Option<Vec<String>> {
    let content = fs::read_to_string(path).ok()?;
    let config: serde_json::Value = serde_json::from_str(&content).ok()?;
    match config.get("packages") {
        Some(packages) => {
            let globs: Vec<String> = packages
                .as_array()?
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
            Some(globs)
        }
        None => Some(LERNA_DEFAULT_GLOBS.iter().map(|s| (*s).to_string()).collect()),
    }
}

/// Resolve each workspace glob independently to concrete package directories.
fn resolve_packages(root: &Path, globs: &[String]) -> Vec<MonorepoPackage> {
    let mut packages = Vec::new();

    for workspace_glob in globs {
        let dirs = run_probe("workspace-glob", || {
            let mut builder = GlobSetBuilder::new();
            builder.add(Glob::new(workspace_glob)?);
            let set = builder.build()?;
            matching_dirs(root, &set)
        });

        for relative in dirs {
            let package_path = root.join(&relative);
            let has_manifest = package_path.join(MANIFEST_FILE_NAME).is_file();

            let basename = relative
                .rsplit('/')
                .next()
                .unwrap_or(relative.as_str())
                .to_string();
            let name = if has_manifest {
                read_package_json(&package_path)
                    .and_then(|pkg| pkg.name)
                    .unwrap_or(basename)
            } else {
                basename
            };

            packages.push(MonorepoPackage {
                name,
                path: package_path,
                relative_path: relative,
                has_manifest,
            });
        }
    }

    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn yarn_workspaces_with_mixed_packages() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", r#"{ "workspaces": ["packages/*"] }"#);
        write(tmp.path(), "yarn.lock", "");
        write(tmp.path(), "packages/a/package.json", r#"{ "name": "@x/a" }"#);
        fs::create_dir_all(tmp.path().join("packages/b")).unwrap();

        let info = detect_monorepo(tmp.path()).unwrap();
        assert_eq!(info.tool, MonorepoTool::Yarn);
        assert!(info.is_monorepo);
        assert_eq!(info.packages.len(), 2);

        let a = info.packages.iter().find(|p| p.relative_path == "packages/a").unwrap();
        assert_eq!(a.name, "@x/a");
        assert!(a.has_manifest);

        let b = info.packages.iter().find(|p| p.relative_path == "packages/b").unwrap();
        assert_eq!(b.name, "b");
        assert!(!b.has_manifest);
    }

    #[test]
    fn workspaces_without_yarn_lock_is_npm() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", r#"{ "workspaces": ["packages/*"] }"#);
        write(tmp.path(), "packages/a/package.json", r#"{ "name": "a" }"#);

        let info = detect_monorepo(tmp.path()).unwrap();
        assert_eq!(info.tool, MonorepoTool::Npm);
    }

    #[test]
    fn workspaces_object_shape_is_accepted() {
        let tmp = tempdir().unwrap();
        write(
            tmp.path(),
            "package.json",
            r#"{ "workspaces": { "packages": ["libs/*"] } }"#,
        );
        fs::create_dir_all(tmp.path().join("libs/core")).unwrap();

        let info = detect_monorepo(tmp.path()).unwrap();
        assert_eq!(info.workspace_globs, ["libs/*"]);
        assert_eq!(info.packages[0].name, "core");
    }

    #[test]
    fn pnpm_workspace_file_overrides_globs() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", r#"{ "workspaces": ["packages/*"] }"#);
        write(
            tmp.path(),
            "pnpm-workspace.yaml",
            "packages:\n  - 'apps/*'\n  - \"libs/*\"\n",
        );
        fs::create_dir_all(tmp.path().join("apps/web")).unwrap();

        let info = detect_monorepo(tmp.path()).unwrap();
        assert_eq!(info.tool, MonorepoTool::Pnpm);
        assert_eq!(info.workspace_globs, ["apps/*", "libs/*"]);
        assert_eq!(info.packages.len(), 1);
    }

    #[test]
    fn lerna_defaults_to_packages_glob() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", "{}");
        write(tmp.path(), "lerna.json", r#"{ "version": "1.0.0" }"#);
        fs::create_dir_all(tmp.path().join("packages/a")).unwrap();

        let info = detect_monorepo(tmp.path()).unwrap();
        assert_eq!(info.tool, MonorepoTool::Lerna);
        assert_eq!(info.workspace_globs, ["packages/*"]);
    }

    #[test]
    fn turbo_marker_keeps_earlier_globs() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", r#"{ "workspaces": ["packages/*"] }"#);
        write(tmp.path(), "turbo.json", "{}");
        fs::create_dir_all(tmp.path().join("packages/a")).unwrap();

        let info = detect_monorepo(tmp.path()).unwrap();
        assert_eq!(info.tool, MonorepoTool::Turborepo);
        assert_eq!(info.workspace_globs, ["packages/*"]);
    }

    #[test]
    fn marker_without_globs_is_not_a_monorepo() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", "{}");
        write(tmp.path(), "turbo.json", "{}");

        assert!(detect_monorepo(tmp.path()).is_none());
    }

    #[test]
    fn globs_resolving_to_nothing_yield_none() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "package.json", r#"{ "workspaces": ["packages/*"] }"#);

        assert!(detect_monorepo(tmp.path()).is_none());
    }

    #[test]
    fn no_manifest_means_no_monorepo() {
        let tmp = tempdir().unwrap();
        write(
            tmp.path(),
            "pnpm-workspace.yaml",
            "packages:\n  - 'apps/*'\n",
        );
        fs::create_dir_all(tmp.path().join("apps/web")).unwrap();

        assert!(detect_monorepo(tmp.path()).is_none());
    }

    #[test]
    fn parse_pnpm_block_stops_at_next_key() {
        let content = "packages:\n  - 'apps/*'\n  # a comment\n  - libs/*\ncatalog:\n  - ignored\n";
        let globs = parse_pnpm_packages(content).unwrap();
        assert_eq!(globs, ["apps/*", "libs/*"]);
    }

    #[test]
    fn parse_pnpm_without_packages_key_is_none() {
        assert!(parse_pnpm_packages("catalog:\n  - x\n").is_none());
    }
}
