//! Centralized filename classification for the scan.
//!
//! Scanned and downloaded image sets carry no manifest; the only ordering
//! signal is whatever numbers the scanner or uploader left in the names
//! (`page_012.jpg`, `3_extra/`, `IMG4711.png`). This module extracts that
//! signal and decides which entries participate in a gallery at all:
//!
//! - [`is_image`] — extension allow-list, no content sniffing
//! - [`order_key`] — first run of decimal digits, `0` when absent
//! - [`is_excluded`] — platform metadata folders (`__MACOSX`) at any depth

use std::path::Path;

/// Name fragment identifying platform-generated metadata entries.
///
/// Zip archives produced on macOS ship a parallel `__MACOSX/` tree full of
/// resource forks named like the real images. Matched case-sensitively.
pub const SYSTEM_ARTIFACT_MARKER: &str = "__MACOSX";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// True if `name` contains the system-artifact marker.
///
/// Applied to every path component the scan touches, files and directories
/// alike, so an artifact tree contributes nothing at any depth.
pub fn is_excluded(name: &str) -> bool {
    name.contains(SYSTEM_ARTIFACT_MARKER)
}

/// True if `name` has a supported image extension (case-insensitive).
pub fn is_image(name: &str) -> bool {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Ordering key for a file or directory name.
///
/// Takes the first maximal run of ASCII decimal digits and folds it into a
/// `u64`; names without digits sort under key `0`. Runs longer than a `u64`
/// saturate instead of failing — a digit-less or oversized name is a normal
/// input here, never an error.
///
/// ```
/// # use print_gal::naming::order_key;
/// assert_eq!(order_key("img12b34.png"), 12);
/// assert_eq!(order_key("cover.png"), 0);
/// ```
pub fn order_key(name: &str) -> u64 {
    name.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .fold(0u64, |key, digit| {
            key.saturating_mul(10)
                .saturating_add(u64::from(digit as u8 - b'0'))
        })
}
