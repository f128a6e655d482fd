//! File manifest produced by the graph walk
//!
//! The manifest carries addressing metadata only (hash, relative path, mode),
//! never decoded blob content. Materialization re-fetches every blob by hash,
//! trading a second round trip per file for bounded walk-time memory.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::PathBuf;

/// One file reachable from the walked commit
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ManifestEntry {
    pub oid: ObjectId,
    /// Path relative to the repository root, in traversal order
    pub path: PathBuf,
    /// Octal mode string from the tree entry; recorded but not applied to
    /// filesystem permissions on write
    pub mode: String,
}

/// Ordered collection of manifest entries
///
/// Ordering is an artifact of traversal order, not a contract.
#[derive(Debug, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
