//! Console output for a run.
//!
//! Information-first display: each folder leads with its positional index
//! and name, then `→` and the document it produced. Skipped branches and
//! dropped images appear as indented context lines under their folder.
//!
//! ```text
//! 001 Ch1 (3 images) → Book/Ch1.html
//!     skipped: Book/Ch1/9_locked (cannot list ...)
//! 002 Ch2 (no images)
//! 003 Ch3 → failed: cannot list Book/Ch3: ...
//!
//! Wrote 1 document
//! ```
//!
//! Each format function is pure and returns display lines; `print_*`
//! wrappers write them to stdout.

use crate::process::{FolderReport, Outcome, RunReport};
use crate::relocate::DroppedImage;
use crate::scan::SkippedDir;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn folder_name(report: &FolderReport) -> String {
    report
        .folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.folder.display().to_string())
}

fn push_skipped(lines: &mut Vec<String>, skipped: &[SkippedDir]) {
    for skip in skipped {
        lines.push(format!("    skipped: {} ({})", skip.path.display(), skip.reason));
    }
}

fn push_dropped(lines: &mut Vec<String>, dropped: &[DroppedImage]) {
    for drop in dropped {
        lines.push(format!("    dropped: {} ({})", drop.image, drop.reason));
    }
}

/// Format the full run report as display lines.
pub fn format_run_report(report: &RunReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, folder) in report.folders.iter().enumerate() {
        let header = format!("{} {}", format_index(i + 1), folder_name(folder));
        match &folder.outcome {
            Outcome::Written {
                document,
                images,
                skipped,
                dropped,
            } => {
                lines.push(format!(
                    "{} ({} {}) \u{2192} {}",
                    header,
                    images,
                    if *images == 1 { "image" } else { "images" },
                    document.display()
                ));
                push_skipped(&mut lines, skipped);
                push_dropped(&mut lines, dropped);
            }
            Outcome::Empty { skipped } => {
                lines.push(format!("{} (no images)", header));
                push_skipped(&mut lines, skipped);
            }
            Outcome::Failed { reason } => {
                lines.push(format!("{} \u{2192} failed: {}", header, reason));
            }
        }
    }

    let written = report.documents_written();
    lines.push(String::new());
    lines.push(format!(
        "{} {} {}",
        if report.check { "Would write" } else { "Wrote" },
        written,
        if written == 1 { "document" } else { "documents" }
    ));

    lines
}

/// Print the run report to stdout.
pub fn print_run_report(report: &RunReport) {
    for line in format_run_report(report) {
        println!("{}", line);
    }
}
