//! Search and render orchestration.
//!
//! # Responsibility
//! - Own the note collection for the page session.
//! - Drive list filtering, note selection and body-fetch completion.
//!
//! # Invariants
//! - At most one note is active at a time.
//! - Only the most recently initiated selection may commit to the display.

pub mod controller;
