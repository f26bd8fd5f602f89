//! Recursive folder scanning.
//!
//! Walks one folder's subtree and flattens every image it finds into a single
//! ordered sequence. Ordering comes from [`naming::order_key`]: files sort by
//! the first digit run in their own name, and a nested folder's entire
//! contribution sorts by the digit run in the *folder* name, keeping its
//! internal order. A tree like
//!
//! ```text
//! Ch1/
//! ├── b.png          # key 0 (no digits)
//! ├── a1.png         # key 1
//! └── 3_extra/       # key 3
//!     └── x.png      # key 0 inside 3_extra
//! ```
//!
//! flattens to `b.png`, `a1.png`, `3_extra/x.png`.
//!
//! ## Determinism
//!
//! `read_dir` yields entries in platform order, so every listing is sorted by
//! name before bucketing; entries sharing a key keep that listing order.
//!
//! ## Failure containment
//!
//! Only the scanned folder's own listing failure is an error. A nested folder
//! that cannot be listed is recorded in [`ScanReport::skipped`] and its branch
//! contributes no images; sibling branches proceed.

use crate::naming;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("cannot list {path}: {source}")]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// One image inside a scanned folder's subtree.
///
/// Holds the path segments from the scanned folder down to the file, deepest
/// last: a top-level file is one segment, a file one folder down is two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    segments: Vec<String>,
}

impl ImageRef {
    fn file(name: &str) -> Self {
        Self {
            segments: vec![name.to_string()],
        }
    }

    /// Prefix a directory name, used when a recursive scan's results are
    /// folded into the parent folder's sequence.
    fn under(mut self, dir: &str) -> Self {
        self.segments.insert(0, dir.to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The image's base filename, independent of nesting depth.
    pub fn label(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn as_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Segments joined with forward slashes.
    pub fn slash_path(&self) -> String {
        self.segments.join("/")
    }
}

/// A nested folder whose listing failed; its branch was dropped.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning one folder's subtree.
#[derive(Debug)]
pub struct ScanReport {
    /// Flattened image sequence, ascending order key, listing order on ties.
    pub images: Vec<ImageRef>,
    /// Nested folders that could not be listed.
    pub skipped: Vec<SkippedDir>,
}

/// Scan `folder` recursively and return its ordered image sequence.
///
/// A folder with no images at any depth returns an empty report, not an
/// error. Each call owns its buckets and returns a fresh report; nothing is
/// shared across recursion levels.
pub fn scan(folder: &Path) -> Result<ScanReport, ScanError> {
    let entries = list_entries(folder)?;

    let mut buckets: BTreeMap<u64, Vec<ImageRef>> = BTreeMap::new();
    let mut skipped = Vec::new();

    for path in entries {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if naming::is_excluded(&name) {
            continue;
        }

        if path.is_dir() {
            match scan(&path) {
                Ok(sub) => {
                    skipped.extend(sub.skipped);
                    let bucket = buckets.entry(naming::order_key(&name)).or_default();
                    bucket.extend(sub.images.into_iter().map(|img| img.under(&name)));
                }
                Err(err) => skipped.push(SkippedDir {
                    reason: err.to_string(),
                    path,
                }),
            }
        } else if path.is_file() && naming::is_image(&name) {
            buckets
                .entry(naming::order_key(&name))
                .or_default()
                .push(ImageRef::file(&name));
        }
    }

    Ok(ScanReport {
        images: buckets.into_values().flatten().collect(),
        skipped,
    })
}

/// List a folder's immediate entries, sorted by name.
fn list_entries(folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let dir = fs::read_dir(folder).map_err(|source| ScanError {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<PathBuf> = dir.filter_map(|e| e.ok()).map(|e| e.path()).collect();
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{slash_paths, touch};
    use tempfile::TempDir;

    #[test]
    fn files_ordered_by_ascending_key() {
        let tmp = TempDir::new().unwrap();
        // listing order (a, b, c) disagrees with key order (3, 1, 2)
        touch(tmp.path().join("a3.png"));
        touch(tmp.path().join("b1.png"));
        touch(tmp.path().join("c2.png"));

        let report = scan(tmp.path()).unwrap();
        assert_eq!(slash_paths(&report.images), ["b1.png", "c2.png", "a3.png"]);
    }

    #[test]
    fn equal_keys_keep_listing_order() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("c.png"));
        touch(tmp.path().join("a.png"));
        touch(tmp.path().join("b.png"));

        let report = scan(tmp.path()).unwrap();
        assert_eq!(slash_paths(&report.images), ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn digitless_names_sort_under_key_zero() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("b.png"));
        touch(tmp.path().join("a1.png"));

        let report = scan(tmp.path()).unwrap();
        assert_eq!(slash_paths(&report.images), ["b.png", "a1.png"]);
    }

    #[test]
    fn nested_folder_sorts_by_its_own_key() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("1.png"));
        touch(tmp.path().join("3.png"));
        touch(tmp.path().join("2_chapter/x.png"));

        let report = scan(tmp.path()).unwrap();
        assert_eq!(
            slash_paths(&report.images),
            ["1.png", "2_chapter/x.png", "3.png"]
        );

        let nested = &report.images[1];
        assert_eq!(nested.segments(), ["2_chapter", "x.png"]);
        assert_eq!(nested.label(), "x.png");
    }

    #[test]
    fn subtree_keeps_internal_order_under_folder_key() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("3.png"));
        touch(tmp.path().join("5_x/2.png"));
        touch(tmp.path().join("5_x/1.png"));

        let report = scan(tmp.path()).unwrap();
        assert_eq!(
            slash_paths(&report.images),
            ["3.png", "5_x/1.png", "5_x/2.png"]
        );
    }

    #[test]
    fn two_levels_of_nesting() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("2_outer/1_inner/a.png"));
        touch(tmp.path().join("1.png"));

        let report = scan(tmp.path()).unwrap();
        assert_eq!(
            slash_paths(&report.images),
            ["1.png", "2_outer/1_inner/a.png"]
        );
        assert_eq!(report.images[1].segments().len(), 3);
    }

    #[test]
    fn image_count_matches_classified_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("1.png"));
        touch(tmp.path().join("2.jpg"));
        touch(tmp.path().join("notes.txt"));
        touch(tmp.path().join("sub/3.gif"));
        touch(tmp.path().join("sub/readme.md"));

        let report = scan(tmp.path()).unwrap();
        assert_eq!(report.images.len(), 3);
    }

    #[test]
    fn artifact_directories_contribute_nothing() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("__MACOSX/1.png"));
        touch(tmp.path().join("sub/__MACOSX/2.png"));
        touch(tmp.path().join("sub/real.png"));

        let report = scan(tmp.path()).unwrap();
        assert_eq!(slash_paths(&report.images), ["sub/real.png"]);
    }

    #[test]
    fn artifact_files_contribute_nothing() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("__MACOSX.png"));

        let report = scan(tmp.path()).unwrap();
        assert!(report.images.is_empty());
    }

    #[test]
    fn empty_folder_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let report = scan(tmp.path()).unwrap();
        assert!(report.images.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn missing_folder_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let err = scan(&missing).unwrap_err();
        assert_eq!(err.path, missing);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subfolder_skipped_siblings_survive() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("1.png"));
        let locked = tmp.path().join("2_locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Running as root, the directory stays listable and the skip branch
        // is unreachable; nothing to assert in that case.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let report = scan(tmp.path()).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(slash_paths(&report.images), ["1.png"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, locked);
    }
}
