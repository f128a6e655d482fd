//! Git tree object
//!
//! Trees are directory listings. Each entry on the wire is:
//!
//! ```text
//! [1]<5 octal digits> <name>\0<20-byte-sha1>
//! ```
//!
//! The leading `1` marker byte is present for blobs only, so a six-digit mode
//! denotes a blob (`100644`, `100755`, `120000`, ...) and a five-digit mode
//! denotes a subtree (`40000`). Entries are kept in wire order; git already
//! writes them name-sorted and this parser never re-sorts.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::io::BufRead;

/// Number of mode digits carried by a subtree entry
const TREE_MODE_DIGITS: usize = 5;

/// What a tree entry points at, derived from its mode digit count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Tree,
    Blob,
}

/// One `(mode, name, child hash)` entry of a tree object
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    /// Octal mode string exactly as it appeared on the wire
    pub mode: String,
    /// Path segment, relative to the containing tree
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn kind(&self) -> EntryKind {
        if self.mode.len() == TREE_MODE_DIGITS {
            EntryKind::Tree
        } else {
            EntryKind::Blob
        }
    }
}

/// Git tree object as an ordered sequence of entries
#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }
}

impl Unpackable for Tree {
    /// Parse the binary entry stream
    ///
    /// A tail that stops matching the entry pattern ends the scan; entries
    /// parsed up to that point are kept and no error is raised. This is a
    /// deliberate leniency: a truncated or padded tail costs at most the
    /// entries behind it, while the rest of the snapshot stays usable.
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = Vec::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if *mode_bytes.last().unwrap() != b' ' {
                break; // unterminated mode: malformed tail
            }
            mode_bytes.pop(); // drop the space
            if !is_entry_mode(&mode_bytes) {
                break;
            }
            // all-octal-digit bytes are valid UTF-8
            let mode = String::from_utf8(mode_bytes.clone())?;

            name_bytes.clear();
            let n = reader.read_until(b'\0', &mut name_bytes)?;
            if n == 0 || *name_bytes.last().unwrap() != b'\0' {
                break; // unterminated name: malformed tail
            }
            name_bytes.pop(); // drop the NUL
            // tree names are raw bytes on the wire; non-UTF-8 names degrade lossily
            let name = String::from_utf8_lossy(&name_bytes).into_owned();

            let Ok(oid) = ObjectId::read_binary_from(&mut reader) else {
                break; // truncated hash: malformed tail
            };

            entries.push(TreeEntry::new(mode, name, oid));
        }

        Ok(Tree { entries })
    }
}

/// A mode is five octal digits, optionally preceded by the `1` blob marker
fn is_entry_mode(bytes: &[u8]) -> bool {
    let digits_ok = bytes.iter().all(|b| (b'0'..=b'7').contains(b));
    match bytes.len() {
        n if n == TREE_MODE_DIGITS => digits_ok,
        n if n == TREE_MODE_DIGITS + 1 => digits_ok && bytes[0] == b'1',
        _ => false,
    }
}
