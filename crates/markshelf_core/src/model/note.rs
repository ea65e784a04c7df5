//! Note record and session collection.
//!
//! # Responsibility
//! - Define the canonical note shape shared by loader, controller and view.
//! - Provide fill-once content caching for lazily fetched note bodies.
//!
//! # Invariants
//! - `id` is the source-file stem and uniquely identifies a note within a
//!   collection; duplicates on load keep the first occurrence.
//! - `content` is `None` until the first successful body fetch, then cached
//!   for the collection's lifetime and never overwritten.
//! - Collection order is insertion order and is the default display order.

use log::warn;
use serde::{Deserialize, Serialize};

/// Stable identifier for a note: the source-file stem, as provided by the
/// loader. Kept as a type alias to make semantic intent explicit in
/// signatures.
pub type NoteId = String;

/// A single markdown document with identifying metadata and a lazily
/// populated body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique key, also the stem of the note's source file.
    pub id: NoteId,
    /// Human-readable title shown in list entries and the title region.
    #[serde(default)]
    pub title: String,
    /// Short summary shown in list entries.
    #[serde(default)]
    pub excerpt: String,
    /// Raw markdown body. Absent until the first successful fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Note {
    /// Creates a note with no cached body.
    pub fn new(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            content: None,
        }
    }

    /// Returns whether the markdown body has been fetched and cached.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Returns whether `needle` occurs in the title, cached content or
    /// excerpt.
    ///
    /// `needle` must already be normalized (trimmed, lowercased); the note's
    /// own fields are case-folded here so matching is case-insensitive.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .content
                .as_deref()
                .is_some_and(|body| body.to_lowercase().contains(needle))
            || self.excerpt.to_lowercase().contains(needle)
    }
}

/// Ordered, session-scoped sequence of notes.
///
/// Owned exclusively by the browse controller. Mutated only by full
/// replacement on load and by [`NoteCollection::cache_content`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection preserving input order.
    ///
    /// # Invariants
    /// - A duplicate `id` keeps the first occurrence; later ones are dropped
    ///   with a warning.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut unique: Vec<Note> = Vec::with_capacity(notes.len());
        for note in notes {
            if unique.iter().any(|existing| existing.id == note.id) {
                warn!(
                    "event=note_dropped module=model status=duplicate_id note_id={}",
                    note.id
                );
                continue;
            }
            unique.push(note);
        }
        Self { notes: unique }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterates notes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Looks up a note by stable id.
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Caches a fetched markdown body onto the identified note.
    ///
    /// Fill-once semantics: returns `true` when the body was stored, `false`
    /// when the id is unknown or a body is already cached (the existing body
    /// is never overwritten).
    pub fn cache_content(&mut self, id: &str, body: String) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) if note.content.is_none() => {
                note.content = Some(body);
                true
            }
            _ => false,
        }
    }
}
