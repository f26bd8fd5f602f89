//! Path relocation for gallery documents.
//!
//! The scanner hands back paths relative to the scanned folder, but the
//! document is written next to the folder, not inside it. For a folder
//! `Book/Ch1` the document lands at `Book/Ch1.html`, so every href must gain
//! the folder's own name as a leading segment:
//!
//! ```text
//! scanned ref      document        href
//! a1.png           Book/Ch1.html   Ch1/a1.png
//! 3_extra/x.png    Book/Ch1.html   Ch1/3_extra/x.png
//! ```
//!
//! Hrefs always use forward slashes; browsers require them regardless of
//! platform. An entry whose relative path cannot be computed is dropped and
//! recorded, the rest of the folder proceeds.

use crate::scan::ImageRef;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("{0} has no folder name to derive a document name from")]
    NoFolderName(PathBuf),
    #[error("{0} has no parent directory to place the document in")]
    NoDocumentDir(PathBuf),
}

/// One image as the emitter consumes it: an href relative to the output
/// document plus a display label (the image's base filename).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub href: String,
    pub label: String,
}

/// An image dropped because its relative path could not be computed.
#[derive(Debug, Clone, Serialize)]
pub struct DroppedImage {
    pub image: String,
    pub reason: String,
}

/// Relocation result for one folder.
#[derive(Debug)]
pub struct Relocated {
    pub entries: Vec<GalleryEntry>,
    pub dropped: Vec<DroppedImage>,
}

/// Where `folder`'s gallery document is written: a sibling file named after
/// the folder with an `.html` suffix.
pub fn document_path(folder: &Path) -> Result<PathBuf, RelocateError> {
    let name = folder
        .file_name()
        .ok_or_else(|| RelocateError::NoFolderName(folder.to_path_buf()))?;
    let parent = folder
        .parent()
        .ok_or_else(|| RelocateError::NoDocumentDir(folder.to_path_buf()))?;

    let mut document = name.to_os_string();
    document.push(".html");
    Ok(parent.join(document))
}

/// Rewrite each scanned ref into a [`GalleryEntry`] addressed from the
/// document's directory. Order is preserved; a ref that fails is dropped
/// with a recorded reason instead of aborting the folder.
pub fn relocate(folder: &Path, images: &[ImageRef]) -> Result<Relocated, RelocateError> {
    let document_dir = folder
        .parent()
        .ok_or_else(|| RelocateError::NoDocumentDir(folder.to_path_buf()))?;

    let mut entries = Vec::with_capacity(images.len());
    let mut dropped = Vec::new();

    for image in images {
        let full = folder.join(image.as_path());
        match full.strip_prefix(document_dir) {
            Ok(rel) => entries.push(GalleryEntry {
                href: slash_path(rel),
                label: image.label().to_string(),
            }),
            Err(err) => dropped.push(DroppedImage {
                image: image.slash_path(),
                reason: err.to_string(),
            }),
        }
    }

    Ok(Relocated { entries, dropped })
}

/// Join path components with forward slashes.
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
