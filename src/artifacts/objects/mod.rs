//! Git object types and their wire formats
//!
//! Loose objects inflate to `{type} {length}\0{payload}`. The payload layout
//! depends on the type:
//!
//! - `blob`: raw file content, no further structure
//! - `tree`: binary entry stream of `(mode, name, 20-byte SHA-1)` triples
//! - `commit`: text header lines, of which only `tree <hash>` matters here
//! - `tag`: acknowledged placeholder, never dereferenced

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of an object ID in hex characters
pub const OBJECT_ID_LENGTH: usize = 40;
