//! Core domain logic for the markshelf note browser.
//! This crate is the single source of truth for search and render behavior.

pub mod browse;
pub mod loader;
pub mod logging;
pub mod model;
pub mod render;
pub mod theme;
pub mod view;

pub use browse::controller::{BrowseController, FetchError, FetchOutcome, FetchTicket};
pub use loader::manifest::{parse_manifest, Manifest};
pub use loader::scan::scan_note_links;
pub use loader::LoadError;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteCollection, NoteId};
pub use render::markdown::render_markdown;
pub use theme::{Theme, ThemeStore, ThemeToggle};
pub use view::{escape_html, DisplayRegion};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
