//! Note source input handling.
//!
//! # Responsibility
//! - Decode the notes manifest into the canonical collection shape.
//! - Provide the degraded link-scan fallback when no manifest is available.
//!
//! # Invariants
//! - Both input shapes produce an insertion-ordered [`NoteCollection`].
//! - Retrieval itself (HTTP, filesystem) stays with the host; this module
//!   only interprets what the host hands over.
//!
//! [`NoteCollection`]: crate::model::note::NoteCollection

pub mod manifest;
pub mod scan;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to interpret the initial note collection input.
///
/// Recoverable: the host falls back to [`scan::scan_note_links`] on a
/// degraded source.
#[derive(Debug)]
pub enum LoadError {
    /// Manifest text is not valid JSON of the expected shape.
    Manifest(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manifest(err) => write!(f, "failed to parse notes manifest: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Manifest(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Manifest(value)
    }
}
