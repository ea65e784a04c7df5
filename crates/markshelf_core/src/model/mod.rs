//! Domain model for the note browser.
//!
//! # Responsibility
//! - Define the canonical note record and the session-scoped collection.
//! - Keep one in-memory shape shared by loading, filtering and rendering.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` unique in its collection.
//! - Collection order is insertion order as received from the loader.

pub mod note;
