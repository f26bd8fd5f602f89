//! Printable gallery rendering.
//!
//! Renders an ordered entry list into one self-contained HTML document:
//! a `figure.sheet` per image, each filling one page when printed (the
//! embedded stylesheet puts a page break after every sheet and caps images
//! at a 900×630 box). No filesystem access — rendering is a pure function
//! of the entry list, so it unit-tests without any setup.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): templates are
//! compile-time checked and every interpolation is auto-escaped, which is
//! all the escaping filenames need to keep the output well-formed.

use crate::relocate::GalleryEntry;
use maud::{DOCTYPE, Markup, html};

const CSS: &str = include_str!("../static/print.css");

/// Render the complete gallery document for one folder.
pub fn render_document(title: &str, entries: &[GalleryEntry]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                @for entry in entries {
                    (render_sheet(entry))
                }
            }
        }
    }
}

/// One full-page sheet: the image plus its caption.
fn render_sheet(entry: &GalleryEntry) -> Markup {
    html! {
        figure.sheet {
            img src=(entry.href) alt=(entry.label) title=(entry.label);
            figcaption { (entry.label) }
        }
    }
}
