//! Display-region contract and HTML fragment building.
//!
//! # Responsibility
//! - Define the seam through which the controller hands output to the host.
//! - Build list-entry and placeholder fragments with escaped metadata.
//!
//! # Invariants
//! - The core emits fragments and signals; the host owns how they are
//!   painted.
//! - Titles, excerpts and ids are HTML-escaped in list fragments; note bodies
//!   are trusted and pass through the renderer unescaped.

use crate::model::note::Note;

/// Fragment shown instead of an empty list when no note matches the query.
pub const NO_MATCHES_PLACEHOLDER: &str = r#"<div class="loading">No matching notes found</div>"#;

/// Fragment shown in the note region when a body fetch fails.
pub const LOAD_FAILED_PLACEHOLDER: &str = r#"<div class="loading">Failed to load note</div>"#;

/// Target region receiving controller output.
///
/// Implemented by the host UI; the controller takes it as a constructor
/// dependency and never reaches for ambient page state.
pub trait DisplayRegion {
    /// Receives the HTML fragment for the visible note list.
    fn set_list_html(&mut self, html: &str);
    /// Receives the rendered HTML of the active note.
    fn set_note_html(&mut self, html: &str);
    /// Receives the active note's title, committed together with its body.
    fn set_title(&mut self, title: &str);
    /// Signals whether the clear-query affordance should be shown.
    fn set_clear_visible(&mut self, visible: bool);
}

/// Escapes text for safe interpolation into HTML fragments.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Builds one list entry for a note, marking the active one.
pub fn note_list_entry(note: &Note, active: bool) -> String {
    let class = if active { "note-item active" } else { "note-item" };
    format!(
        concat!(
            r#"<a class="{class}" data-note="{id}">"#,
            r#"<div class="note-item-title">{title}</div>"#,
            r#"<div class="note-item-excerpt">{excerpt}</div>"#,
            "</a>"
        ),
        class = class,
        id = escape_html(&note.id),
        title = escape_html(&note.title),
        excerpt = escape_html(&note.excerpt),
    )
}

/// Builds the list fragment for the visible set.
///
/// An empty visible set yields exactly one placeholder entry, never an empty
/// list.
pub fn note_list_html(notes: &[&Note], active_id: Option<&str>) -> String {
    if notes.is_empty() {
        return NO_MATCHES_PLACEHOLDER.to_string();
    }
    notes
        .iter()
        .map(|note| note_list_entry(note, active_id == Some(note.id.as_str())))
        .collect()
}
