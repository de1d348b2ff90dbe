//! Best-effort directory scan helpers.
//!
//! All probes in the analysis share one failure policy: any error inside a
//! probe collapses to "no matches" via [`run_probe`], so the pass as a whole
//! never aborts on filesystem trouble.

use crate::ignore::{IgnoreRules, PRUNED_DIR_NAMES};
use anyhow::Result;
use globset::GlobSet;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Maximum directory depth for any scan.
pub(crate) const MAX_SCAN_DEPTH: usize = 8;

/// Run a probe, converting any failure into an empty result.
pub(crate) fn run_probe<T>(label: &str, probe: impl FnOnce() -> Result<Vec<T>>) -> Vec<T> {
    match probe() {
        Ok(matches) => matches,
        Err(err) => {
            tracing::debug!(probe = label, error = %err, "probe failed; treating as no matches");
            Vec::new()
        }
    }
}

/// Root-relative slash-separated path for a walk entry.
pub(crate) fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

fn keep_entry(entry: &walkdir::DirEntry, pruned: &[&str]) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    entry
        .file_name()
        .to_str()
        .map(|name| !pruned.contains(&name))
        .unwrap_or(false)
}

/// Files under `root` matching `set`, excluding ignored paths, in scan order.
///
/// The walk is sorted by file name so the order is deterministic for an
/// unmodified tree; match lists must never be re-sorted afterwards.
pub(crate) fn matching_files(root: &Path, set: &GlobSet, ignore: &IgnoreRules) -> Result<Vec<String>> {
    let mut matches = Vec::new();
    for entry in WalkDir::new(root)
        .max_depth(MAX_SCAN_DEPTH)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep_entry(e, PRUNED_DIR_NAMES))
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(relative) = relative_str(root, entry.path()) else {
            continue;
        };
        if set.is_match(&relative) && !ignore.is_ignored(&relative) {
            matches.push(relative);
        }
    }
    Ok(matches)
}

/// Directories under `root` matching `set`, in scan order.
///
/// Workspace globs are root-relative package locations, so only the
/// dependency cache is excluded here, not the full ignore set.
pub(crate) fn matching_dirs(root: &Path, set: &GlobSet) -> Result<Vec<String>> {
    let mut matches = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(MAX_SCAN_DEPTH)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| keep_entry(e, &["node_modules"]))
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let Some(relative) = relative_str(root, entry.path()) else {
            continue;
        };
        if set.is_match(&relative) {
            matches.push(relative);
        }
    }
    Ok(matches)
}
