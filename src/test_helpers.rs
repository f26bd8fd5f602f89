//! Shared test utilities for the print-gal test suite.
//!
//! Fixture trees are built programmatically — the scan classifies by
//! extension only, so a few bytes of placeholder content stand in for real
//! images.

use crate::scan::ImageRef;
use std::fs;
use std::path::Path;

/// Create a placeholder file at `path`, creating parent directories.
pub fn touch(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "fake image").unwrap();
}

/// Slash-joined ref paths, in sequence order.
pub fn slash_paths(images: &[ImageRef]) -> Vec<String> {
    images.iter().map(ImageRef::slash_path).collect()
}
