//! Fallback collection derived from hyperlink scanning.
//!
//! # Responsibility
//! - Extract note entries from anchor tags whose target ends in `.md`.
//!
//! # Invariants
//! - The designated index entry (`README`) is excluded.
//! - Every scanned entry gets the fixed placeholder excerpt and no cached
//!   body.

use crate::model::note::{Note, NoteCollection};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

/// Excerpt shown for scanned entries until their body is fetched.
pub const SCANNED_EXCERPT: &str = "Open to view the note body...";

/// Index/readme stem never surfaced as a note.
const INDEX_STEM: &str = "README";

static NOTE_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<a\s[^>]*href="([^"]+)\.md"[^>]*>([^<]*)</a>"#).expect("valid note link regex")
});

/// Scans HTML for markdown-file links and derives a degraded collection.
///
/// Used when the manifest is unavailable. The link target stem becomes the
/// note id; the link text becomes the title, falling back to the stem when
/// blank.
pub fn scan_note_links(html: &str) -> NoteCollection {
    let mut notes = Vec::new();
    for caps in NOTE_LINK_RE.captures_iter(html) {
        let stem = &caps[1];
        if stem == INDEX_STEM {
            continue;
        }
        let label = caps[2].trim();
        let title = if label.is_empty() { stem } else { label };
        notes.push(Note::new(stem, title, SCANNED_EXCERPT));
    }
    info!(
        "event=link_scan module=loader status=ok notes={}",
        notes.len()
    );
    NoteCollection::from_notes(notes)
}
