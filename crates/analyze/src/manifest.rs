//! The project manifest (`package.json`) as the analysis sees it.
//!
//! A malformed manifest is treated exactly like a missing one: every reader
//! degrades to "no signal" rather than failing the analysis.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Manifest filename probed at the project root and in workspace packages.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Subset of `package.json` consumed by the analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: serde_json::Map<String, Value>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: serde_json::Map<String, Value>,
    #[serde(default)]
    pub scripts: serde_json::Map<String, Value>,
    pub workspaces: Option<WorkspaceDecl>,
}

/// The `workspaces` field is either a bare glob list or an object carrying a
/// `packages` list. Resolved explicitly here rather than duck-typed at use
/// sites.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WorkspaceDecl {
    List(Vec<String>),
    Packages { packages: Vec<String> },
}

impl WorkspaceDecl {
    /// The declared workspace globs, whichever shape carried them.
    #[must_use]
    pub fn globs(&self) -> &[String] {
        match self {
            Self::List(globs) => globs,
            Self::Packages { packages } => packages,
        }
    }
}

impl PackageJson {
    /// Whether `name` is declared as a runtime or dev dependency.
    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Script value for `key`, when declared as a string.
    #[must_use]
    pub fn script(&self, key: &str) -> Option<&str> {
        self.scripts.get(key).and_then(Value::as_str)
    }
}

/// Read and parse the manifest under `dir`.
///
/// Returns `None` when the file is absent, unreadable, or malformed; the
/// parse failure is logged at debug level and otherwise swallowed.
#[must_use]
pub fn read_package_json(dir: &Path) -> Option<PackageJson> {
    let path = dir.join(MANIFEST_FILE_NAME);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %err, "manifest unreadable");
            }
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(pkg) => Some(pkg),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "manifest malformed; treating as absent");
            None
        }
    }
}

/// Render a dependency version value as a string. Workspace placeholders
/// (`null`) become empty.
#[must_use]
pub fn version_string(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}
