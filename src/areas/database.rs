//! Remote object database
//!
//! Loads loose objects by hash from the exposed `.git` directory: fetch the
//! raw bytes, inflate them, verify the content address and dispatch on the
//! header type. The database is read-only; nothing is ever stored.

use crate::areas::remote::{FetchOutcome, ObjectFetcher};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::error::DumpError;
use bytes::Bytes;
use std::io::{Cursor, Read};
use std::sync::Arc;

/// Number of leading raw bytes included in an inflate failure report
const INFLATE_SAMPLE_LEN: usize = 32;

/// Result of loading one object
///
/// `Missing` and `Failed` are soft outcomes the walker skips over; only
/// structurally broken data (inflate failure, unparsable header) is a hard
/// error.
#[derive(Debug)]
pub enum Loaded<T> {
    Found(T),
    Missing,
    /// Transport failure or integrity failure, with detail for diagnostics
    Failed(String),
}

pub struct RemoteDatabase {
    fetcher: Arc<dyn ObjectFetcher>,
}

impl RemoteDatabase {
    pub fn new(fetcher: Arc<dyn ObjectFetcher>) -> Self {
        RemoteDatabase { fetcher }
    }

    /// Fetch, inflate, verify and parse the object at `oid`
    ///
    /// The inflated bytes are re-hashed and compared against the requested
    /// ID; a mismatch means the server returned something else than the
    /// object asked for, which degrades to `Failed` rather than poisoning
    /// the walk.
    pub fn load(&self, oid: &ObjectId) -> anyhow::Result<Loaded<ObjectBox>> {
        let raw = match self.fetcher.fetch_bytes(&oid.to_remote_path()) {
            FetchOutcome::Found(raw) => raw,
            FetchOutcome::Missing => return Ok(Loaded::Missing),
            FetchOutcome::TransportError(detail) => return Ok(Loaded::Failed(detail)),
        };

        let object_content = Self::decompress(raw)?;

        if &ObjectId::of_content(&object_content)? != oid {
            return Ok(Loaded::Failed(format!(
                "content of object {oid} does not match its hash"
            )));
        }

        let mut object_reader = Cursor::new(object_content);
        let object_type = ObjectType::parse_object_type(&mut object_reader)?;

        Ok(Loaded::Found(match object_type {
            ObjectType::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?)),
            ObjectType::Tree => ObjectBox::Tree(Box::new(Tree::deserialize(object_reader)?)),
            ObjectType::Commit => ObjectBox::Commit(Box::new(Commit::deserialize(object_reader)?)),
            ObjectType::Tag => ObjectBox::Tag,
        }))
    }

    /// Load the object at `oid` expecting a blob
    ///
    /// Used by materialization, which re-fetches blob content by hash since
    /// the manifest never retains it.
    pub fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<Loaded<Blob>> {
        Ok(match self.load(oid)? {
            Loaded::Found(ObjectBox::Blob(blob)) => Loaded::Found(*blob),
            Loaded::Found(_) => Loaded::Failed(format!("object {oid} is not a blob")),
            Loaded::Missing => Loaded::Missing,
            Loaded::Failed(detail) => Loaded::Failed(detail),
        })
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();

        if decoder.read_to_end(&mut decompressed_content).is_err() {
            anyhow::bail!(DumpError::Inflate {
                sample: hex_sample(&data),
            });
        }

        Ok(decompressed_content.into())
    }
}

/// Hex dump of the leading bytes, safe to embed in an error message
fn hex_sample(data: &[u8]) -> String {
    data.iter()
        .take(INFLATE_SAMPLE_LEN)
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
