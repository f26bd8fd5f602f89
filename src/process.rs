//! Folder orchestration and the top-level walk.
//!
//! [`run`] walks the root's immediate entries in file-name order and drives
//! each subfolder through the full pipeline: scan → relocate → render →
//! write. The document for `parent/sub` lands at `parent/sub.html`,
//! overwriting any previous build.
//!
//! Failure policy, narrow to broad:
//! - an image that cannot be relocated is dropped, the folder proceeds
//! - a folder that cannot be scanned or written becomes a `Failed` outcome,
//!   sibling folders proceed
//! - only a walk error on the root itself aborts the run
//!
//! Execution is strictly sequential; each folder builds its own state and
//! nothing survives between invocations. The whole run is summarized in a
//! serializable [`RunReport`].

use crate::generate;
use crate::naming;
use crate::relocate::{self, DroppedImage, RelocateError};
use crate::scan::{self, ScanError, SkippedDir};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Relocate(#[from] RelocateError),
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The root itself could not be walked. Fatal for the whole run.
#[derive(Error, Debug)]
#[error("cannot walk {root}: {source}")]
pub struct WalkError {
    pub root: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

/// What happened to one subfolder.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// A document was produced (or would be, under `--check`).
    Written {
        document: PathBuf,
        images: usize,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        skipped: Vec<SkippedDir>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        dropped: Vec<DroppedImage>,
    },
    /// No images at any depth; no document.
    Empty {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        skipped: Vec<SkippedDir>,
    },
    /// The folder could not be processed; siblings were unaffected.
    Failed { reason: String },
}

#[derive(Debug, Serialize)]
pub struct FolderReport {
    pub folder: PathBuf,
    pub outcome: Outcome,
}

/// Summary of one full run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub check: bool,
    pub folders: Vec<FolderReport>,
}

impl RunReport {
    pub fn documents_written(&self) -> usize {
        self.folders
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Written { .. }))
            .count()
    }
}

/// Drive one subfolder end-to-end. With `check` set, everything runs except
/// the final write.
pub fn process_folder(folder: &Path, check: bool) -> Result<Outcome, ProcessError> {
    let document = relocate::document_path(folder)?;

    let report = scan::scan(folder)?;
    if report.images.is_empty() {
        return Ok(Outcome::Empty {
            skipped: report.skipped,
        });
    }

    let relocated = relocate::relocate(folder, &report.images)?;

    let title = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let markup = generate::render_document(&title, &relocated.entries);

    if !check {
        fs::write(&document, markup.into_string()).map_err(|source| ProcessError::Write {
            path: document.clone(),
            source,
        })?;
    }

    Ok(Outcome::Written {
        document,
        images: relocated.entries.len(),
        skipped: report.skipped,
        dropped: relocated.dropped,
    })
}

/// Process every image-bearing subfolder directly under `root`.
///
/// Entries are visited in file-name order. Files and excluded names under
/// the root are ignored; nested folders are reached through the scanner,
/// not the walk.
pub fn run(root: &Path, check: bool) -> Result<RunReport, WalkError> {
    let mut folders = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| WalkError {
            root: root.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy();
        if naming::is_excluded(&name) || !entry.file_type().is_dir() {
            continue;
        }

        let folder = entry.into_path();
        let outcome = match process_folder(&folder, check) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failed {
                reason: err.to_string(),
            },
        };
        folders.push(FolderReport { folder, outcome });
    }

    Ok(RunReport {
        root: root.to_path_buf(),
        check,
        folders,
    })
}
