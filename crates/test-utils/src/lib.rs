//! Shared test utilities for agentry crates.
//!
//! Provides a tempdir-backed project fixture so integration tests can build
//! realistic project trees without repeating filesystem boilerplate.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original
/// on drop.
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// A throwaway project tree rooted in a tempdir.
///
/// The tempdir is cleaned up when the fixture is dropped.
pub struct ProjectFixture {
    tempdir: tempfile::TempDir,
}

impl ProjectFixture {
    /// Create an empty project root.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            tempdir: tempfile::tempdir()?,
        })
    }

    /// The project root path.
    pub fn root(&self) -> &Path {
        self.tempdir.path()
    }

    /// Write a file at a root-relative path, creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dirs");
        }
        fs::write(path, content).expect("write fixture file");
        self
    }

    /// Create an empty marker file at a root-relative path.
    pub fn marker(&self, relative: &str) -> &Self {
        self.file(relative, "")
    }

    /// Create a directory at a root-relative path.
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.root().join(relative)).expect("create fixture dir");
        self
    }

    /// Write a root `package.json` with the given body.
    pub fn manifest(&self, body: &str) -> &Self {
        self.file("package.json", body)
    }

    /// Absolute path for a root-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_builds_nested_files() {
        let fixture = ProjectFixture::new().unwrap();
        fixture
            .manifest(r#"{ "name": "demo" }"#)
            .file("src/components/Button.tsx", "export {}")
            .marker("yarn.lock");

        assert!(fixture.path("package.json").is_file());
        assert!(fixture.path("src/components/Button.tsx").is_file());
        assert!(fixture.path("yarn.lock").is_file());
    }

    #[test]
    fn env_var_guard_restores_previous_value() {
        let _serial = env_guard();
        std::env::set_var("AGENTRY_FIXTURE_TEST", "before");
        {
            let _guard = set_env_var("AGENTRY_FIXTURE_TEST", Some("after"));
            assert_eq!(std::env::var("AGENTRY_FIXTURE_TEST").unwrap(), "after");
        }
        assert_eq!(std::env::var("AGENTRY_FIXTURE_TEST").unwrap(), "before");
        std::env::remove_var("AGENTRY_FIXTURE_TEST");
    }
}
