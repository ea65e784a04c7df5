//! Browse controller: incremental search plus selection/fetch lifecycle.
//!
//! # Responsibility
//! - Filter the collection against the live query and emit list fragments.
//! - Run the per-selection state machine `Idle -> Fetching -> {Rendered |
//!   Failed}` and commit rendered output to the display region.
//!
//! # Invariants
//! - The visible set is always a subsequence of the collection in original
//!   order.
//! - Title and body are committed together, never before a fetch resolves.
//! - A superseded fetch result is discarded; the latest selection wins.
//! - A failed fetch leaves the content cache unset so re-selection retries.

use crate::model::note::{Note, NoteCollection, NoteId};
use crate::render::markdown::render_markdown;
use crate::view::{self, DisplayRegion};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Host-reported failure to retrieve one note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    /// Note whose body could not be retrieved.
    pub note_id: NoteId,
    /// Host-provided diagnostic, logged but never shown to the user.
    pub message: String,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to fetch note `{}`: {}", self.note_id, self.message)
    }
}

impl Error for FetchError {}

/// Pending body fetch handed to the host for resolution.
///
/// Carries the selection sequence number used to detect superseded results;
/// the host treats it as opaque and passes it back to
/// [`BrowseController::complete_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    /// Note whose raw markdown body should be fetched.
    pub note_id: NoteId,
}

/// Result of resolving a fetch ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Body cached, rendered and committed to the display.
    Committed,
    /// Failure placeholder shown; cache left unset for retry.
    Failed,
    /// Ticket was superseded by a newer selection; display untouched.
    Stale,
}

/// Search/render controller owning the session's note collection.
///
/// Constructed from its dependencies; holds no ambient state.
pub struct BrowseController<D: DisplayRegion> {
    notes: NoteCollection,
    display: D,
    active_id: Option<NoteId>,
    /// Normalized (trimmed, lowercased) form of the last query.
    query: String,
    /// Monotonically increasing; bumped on every selection so older fetch
    /// results can be recognized and discarded.
    selection_seq: u64,
}

impl<D: DisplayRegion> BrowseController<D> {
    /// Creates a controller and renders the initial, unfiltered list.
    pub fn new(notes: NoteCollection, display: D) -> Self {
        let mut controller = Self {
            notes,
            display,
            active_id: None,
            query: String::new(),
            selection_seq: 0,
        };
        controller.display.set_clear_visible(false);
        controller.render_list();
        info!(
            "event=browse_init module=browse status=ok note_count={}",
            controller.notes.len()
        );
        controller
    }

    /// Re-evaluates the visible set for a new query.
    ///
    /// The query is trimmed and case-folded; an empty result restores the
    /// full collection. The clear affordance is shown exactly when the
    /// normalized query is non-empty.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        self.display.set_clear_visible(!self.query.is_empty());
        self.render_list();
        debug!(
            "event=set_query module=browse status=ok query_len={} visible={}",
            self.query.len(),
            self.visible_notes().len()
        );
    }

    /// Clears the query and restores the full collection.
    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Marks a note active and either renders it from cache or asks the host
    /// to fetch its body.
    ///
    /// Unknown ids are a no-op returning `None`. A returned ticket must be
    /// resolved through [`BrowseController::complete_fetch`]; until then the
    /// title and note regions keep their previous content.
    pub fn select_note(&mut self, id: &str) -> Option<FetchTicket> {
        let Some(note) = self.notes.get(id) else {
            debug!("event=select_note module=browse status=unknown_id note_id={id}");
            return None;
        };
        let title = note.title.clone();
        let cached = note.content.clone();

        self.active_id = Some(id.to_string());
        self.selection_seq += 1;
        self.render_list();

        match cached {
            Some(body) => {
                self.commit(&title, &body);
                info!("event=select_note module=browse status=cached note_id={id}");
                None
            }
            None => {
                info!(
                    "event=select_note module=browse status=fetching note_id={id} seq={}",
                    self.selection_seq
                );
                Some(FetchTicket {
                    seq: self.selection_seq,
                    note_id: id.to_string(),
                })
            }
        }
    }

    /// Resolves a pending fetch with the host-supplied outcome.
    ///
    /// A ticket issued before a newer selection is discarded without touching
    /// the display. On success the body is cached fill-once and committed; on
    /// failure the fixed placeholder is shown and the cache stays empty.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        body: Result<String, FetchError>,
    ) -> FetchOutcome {
        if ticket.seq != self.selection_seq {
            info!(
                "event=fetch_result module=browse status=stale note_id={} seq={} latest={}",
                ticket.note_id, ticket.seq, self.selection_seq
            );
            return FetchOutcome::Stale;
        }

        match body {
            Ok(markdown) => {
                if !self.notes.cache_content(&ticket.note_id, markdown.clone()) {
                    debug!(
                        "event=cache_fill module=browse status=refused note_id={}",
                        ticket.note_id
                    );
                }
                let title = self
                    .notes
                    .get(&ticket.note_id)
                    .map(|note| note.title.clone())
                    .unwrap_or_default();
                self.commit(&title, &markdown);
                info!(
                    "event=fetch_result module=browse status=ok note_id={}",
                    ticket.note_id
                );
                FetchOutcome::Committed
            }
            Err(err) => {
                warn!(
                    "event=fetch_result module=browse status=error note_id={} error={}",
                    ticket.note_id, err.message
                );
                self.display.set_note_html(view::LOAD_FAILED_PLACEHOLDER);
                FetchOutcome::Failed
            }
        }
    }

    /// Replaces the whole collection (initial load or reload).
    ///
    /// Selection state and any in-flight fetches are invalidated.
    pub fn replace_notes(&mut self, notes: NoteCollection) {
        self.notes = notes;
        self.active_id = None;
        self.selection_seq += 1;
        self.render_list();
        info!(
            "event=notes_replaced module=browse status=ok note_count={}",
            self.notes.len()
        );
    }

    /// Id of the currently active note, if any.
    pub fn active_note(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Read access to the owned collection.
    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    /// Read access to the display handle, mainly for hosts and tests.
    pub fn display(&self) -> &D {
        &self.display
    }

    fn visible_notes(&self) -> Vec<&Note> {
        if self.query.is_empty() {
            self.notes.iter().collect()
        } else {
            self.notes
                .iter()
                .filter(|note| note.matches(&self.query))
                .collect()
        }
    }

    fn render_list(&mut self) {
        let html = {
            let visible = self.visible_notes();
            view::note_list_html(&visible, self.active_id.as_deref())
        };
        self.display.set_list_html(&html);
    }

    /// Commits title and rendered body together so a slow fetch can never
    /// show a mismatched pair.
    fn commit(&mut self, title: &str, markdown: &str) {
        let html = render_markdown(markdown);
        self.display.set_title(title);
        self.display.set_note_html(&html);
    }
}
