//! Project type and framework classification.
//!
//! The two detectors are deliberately asymmetric: project type falls back
//! through marker files and other-ecosystem probes, while the framework is
//! read from manifest dependencies alone. Their rule lists are defined
//! independently and must not be derived from one another.

use crate::manifest::read_package_json;
use crate::types::{Framework, ProjectType};
use std::path::Path;

/// Marker config files probed before the manifest, in priority order.
pub(crate) const NEXT_CONFIG_FILES: &[&str] =
    &["next.config.js", "next.config.mjs", "next.config.ts"];

/// Manifest dependency rules for project type, first match wins.
const TYPE_DEPENDENCY_RULES: &[(&str, ProjectType)] = &[
    ("next", ProjectType::Nextjs),
    ("react", ProjectType::React),
    ("vue", ProjectType::Vue),
    ("express", ProjectType::Node),
    ("fastify", ProjectType::Node),
];

/// Other-ecosystem marker files, probed last, first match wins.
const ECOSYSTEM_MARKER_FILES: &[(&str, ProjectType)] = &[
    ("requirements.txt", ProjectType::Python),
    ("go.mod", ProjectType::Go),
    ("Cargo.toml", ProjectType::Rust),
];

/// Manifest dependency rules for framework, first match wins.
///
/// Independent from [`TYPE_DEPENDENCY_RULES`]: `react` classifies the
/// project type but is intentionally not a framework here.
const FRAMEWORK_DEPENDENCY_RULES: &[(&str, Framework)] = &[
    ("next", Framework::Nextjs),
    ("@nuxt/core", Framework::Nuxtjs),
    ("vue", Framework::Vue),
    ("@angular/core", Framework::Angular),
    ("svelte", Framework::Svelte),
    ("express", Framework::Express),
    ("fastify", Framework::Fastify),
    ("@nestjs/core", Framework::Nestjs),
];

/// Determine the project type for `root`.
///
/// Probes marker files, then merged manifest dependencies, then
/// other-ecosystem markers; defaults to [`ProjectType::Unknown`].
#[must_use]
pub fn detect_project_type(root: &Path) -> ProjectType {
    for marker in NEXT_CONFIG_FILES {
        if root.join(marker).is_file() {
            return ProjectType::Nextjs;
        }
    }

    if let Some(pkg) = read_package_json(root) {
        for (name, project_type) in TYPE_DEPENDENCY_RULES {
            if pkg.has_dependency(name) {
                return *project_type;
            }
        }
    }

    for (marker, project_type) in ECOSYSTEM_MARKER_FILES {
        if root.join(marker).is_file() {
            return *project_type;
        }
    }

    ProjectType::Unknown
}

/// Determine the framework for `root` from manifest dependencies alone.
///
/// Without a (readable) manifest there is no framework signal at all, even
/// when marker files would classify the project type.
#[must_use]
pub fn detect_framework(root: &Path) -> Option<Framework> {
    let pkg = read_package_json(root)?;
    FRAMEWORK_DEPENDENCY_RULES
        .iter()
        .find(|(name, _)| pkg.has_dependency(name))
        .map(|(_, framework)| *framework)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_manifest(root: &Path, body: &str) {
        fs::write(root.join("package.json"), body).unwrap();
    }

    #[test]
    fn marker_file_wins_over_dependencies() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("next.config.mjs"), "export default {}").unwrap();
        write_manifest(tmp.path(), r#"{ "dependencies": { "vue": "^3" } }"#);
        assert_eq!(detect_project_type(tmp.path()), ProjectType::Nextjs);
    }

    #[test]
    fn next_dependency_beats_react() {
        let tmp = tempdir().unwrap();
        write_manifest(
            tmp.path(),
            r#"{ "dependencies": { "next": "^14.0.0", "react": "^18.0.0" } }"#,
        );
        assert_eq!(detect_project_type(tmp.path()), ProjectType::Nextjs);
        assert_eq!(detect_framework(tmp.path()), Some(Framework::Nextjs));
    }

    #[test]
    fn dev_dependencies_count_toward_type() {
        let tmp = tempdir().unwrap();
        write_manifest(tmp.path(), r#"{ "devDependencies": { "react": "^18" } }"#);
        assert_eq!(detect_project_type(tmp.path()), ProjectType::React);
    }

    #[test]
    fn react_type_without_framework() {
        let tmp = tempdir().unwrap();
        write_manifest(tmp.path(), r#"{ "dependencies": { "react": "^18.0.0" } }"#);
        assert_eq!(detect_project_type(tmp.path()), ProjectType::React);
        assert_eq!(detect_framework(tmp.path()), None);
    }

    #[test]
    fn framework_requires_manifest() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("next.config.js"), "module.exports = {}").unwrap();
        assert_eq!(detect_project_type(tmp.path()), ProjectType::Nextjs);
        assert_eq!(detect_framework(tmp.path()), None);
    }

    #[test]
    fn ecosystem_markers_probe_in_order() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("go.mod"), "module demo").unwrap();
        fs::write(tmp.path().join("Cargo.toml"), "[package]").unwrap();
        assert_eq!(detect_project_type(tmp.path()), ProjectType::Go);
    }

    #[test]
    fn empty_root_is_unknown() {
        let tmp = tempdir().unwrap();
        assert_eq!(detect_project_type(tmp.path()), ProjectType::Unknown);
        assert_eq!(detect_framework(tmp.path()), None);
    }

    #[test]
    fn malformed_manifest_degrades_to_markers() {
        let tmp = tempdir().unwrap();
        write_manifest(tmp.path(), "{ broken");
        fs::write(tmp.path().join("requirements.txt"), "flask\n").unwrap();
        assert_eq!(detect_project_type(tmp.path()), ProjectType::Python);
        assert_eq!(detect_framework(tmp.path()), None);
    }

    #[test]
    fn express_maps_to_node_type_and_express_framework() {
        let tmp = tempdir().unwrap();
        write_manifest(tmp.path(), r#"{ "dependencies": { "express": "^4.18.2" } }"#);
        assert_eq!(detect_project_type(tmp.path()), ProjectType::Node);
        assert_eq!(detect_framework(tmp.path()), Some(Framework::Express));
    }
}
