//! # Print Gal
//!
//! Printable HTML galleries from folders of scanned images. Your filesystem
//! is the data source: each image-bearing subfolder becomes one
//! self-contained HTML document written next to it, images ordered by the
//! numbers embedded in their names — no manual renaming, no manifest.
//!
//! # Pipeline
//!
//! Each subfolder of the root flows through the same stages:
//!
//! ```text
//! 1. Scan      Ch1/       →  ordered image refs   (tree → flat sequence)
//! 2. Relocate  refs       →  gallery entries      (document-relative hrefs)
//! 3. Render    entries    →  Ch1.html             (one printable sheet per image)
//! ```
//!
//! Data flows strictly downward and no stage holds state across folders, so
//! every stage unit-tests in isolation and a re-run over an unchanged tree
//! is byte-identical.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Name classification: image allow-list, digit-run order keys, `__MACOSX` exclusion |
//! | [`scan`] | Recursive folder scan — flattens a subtree into one ordered image sequence |
//! | [`relocate`] | Rewrites scanned refs into paths relative to the output document |
//! | [`generate`] | Renders the ordered entries into a print-oriented HTML document using Maud |
//! | [`process`] | Per-folder orchestration, the top-level walk, and the run report |
//! | [`output`] | CLI output formatting — tree-based display of run results |
//!
//! # Design Decisions
//!
//! ## Ordering by Digit Run
//!
//! A single numeric token per name is the lightest convention that survives
//! scanner and camera naming noise (`IMG_0042 copy.png`, `page-3-final.jpg`).
//! [`naming::order_key`] takes the first run of decimal digits; names
//! without digits sort under key `0`. Nested folders order by the digit run
//! in the *folder* name, keeping their internal order — so `3_extra/` slots
//! its whole contents at position 3.
//!
//! ## Explicit Ordering, Twice
//!
//! Nothing relies on incidental iteration order. Directory listings are
//! sorted by name at every level (the filesystem's order is
//! platform-dependent), and key buckets live in a `BTreeMap` so the flatten
//! step walks keys ascending. Ties break by listing order.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed HTML
//! is a build error, template variables are Rust expressions, and every
//! interpolation is auto-escaped — filenames are the only untrusted input
//! here and they ride through attributes and captions untouched.
//!
//! ## Failure Containment
//!
//! A branch that cannot be listed is skipped, an image that cannot be
//! relocated is dropped, a folder that cannot be written is reported; each
//! failure is contained one level up and siblings always proceed. Only
//! failing to walk the root aborts a run. Nothing is retried — every
//! failure cause here (permissions, missing directories) is permanent.

pub mod generate;
pub mod naming;
pub mod output;
pub mod process;
pub mod relocate;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
