//! Notes manifest decoding.
//!
//! # Responsibility
//! - Parse the `{ "total": n, "notes": [...] }` manifest shape.
//!
//! # Invariants
//! - A missing `notes` array decodes as empty rather than failing.
//! - The collection length, not `total`, is authoritative for the core;
//!   `total` is carried through for the host's stats display.

use super::LoadError;
use crate::model::note::{Note, NoteCollection};
use log::info;
use serde::Deserialize;

/// Decoded notes manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Host-reported note count, for stats display only.
    #[serde(default)]
    pub total: u64,
    /// Note records in display order.
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Manifest {
    /// Consumes the manifest into the session collection.
    pub fn into_collection(self) -> NoteCollection {
        NoteCollection::from_notes(self.notes)
    }
}

/// Parses manifest JSON text.
pub fn parse_manifest(json: &str) -> Result<Manifest, LoadError> {
    let manifest: Manifest = serde_json::from_str(json)?;
    info!(
        "event=manifest_load module=loader status=ok total={} notes={}",
        manifest.total,
        manifest.notes.len()
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::parse_manifest;

    #[test]
    fn manifest_without_notes_field_decodes_empty() {
        let manifest = parse_manifest(r#"{"total": 3}"#).unwrap();
        assert_eq!(manifest.total, 3);
        assert!(manifest.notes.is_empty());
    }

    #[test]
    fn manifest_rejects_non_json_input() {
        let err = parse_manifest("<html>not json</html>").unwrap_err();
        assert!(err.to_string().contains("manifest"));
    }
}
