//! Remote reference resolution
//!
//! HEAD in an exposed `.git` directory is almost always a symbolic ref:
//! a text file of the form `ref: refs/heads/<branch>`. The referenced file
//! in turn holds the 40-character commit hash. Resolution is two fetches:
//! `HEAD` → ref path → hash.
//!
//! An absent ref and a malformed ref are not distinguished: both degrade to
//! content that fails to parse, which is a hard error. Scraping cannot
//! proceed without a root hash.

use crate::areas::remote::{FetchOutcome, ObjectFetcher};
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::DumpError;
use std::sync::Arc;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

pub struct RemoteRefs {
    fetcher: Arc<dyn ObjectFetcher>,
}

impl RemoteRefs {
    pub fn new(fetcher: Arc<dyn ObjectFetcher>) -> Self {
        RemoteRefs { fetcher }
    }

    /// Resolve HEAD down to the commit hash it points at
    pub fn resolve_head(&self) -> anyhow::Result<ObjectId> {
        let ref_path = self.resolve_head_ref()?;
        self.resolve_ref_hash(&ref_path)
    }

    /// Fetch HEAD and extract the symbolic ref path
    ///
    /// # Errors
    ///
    /// `DumpError::MalformedHead` when the content does not match
    /// `ref: <path>` (including when HEAD could not be fetched at all).
    pub fn resolve_head_ref(&self) -> anyhow::Result<String> {
        let head = self.read_text(HEAD_REF_NAME);

        let symref_match = regex::Regex::new(SYMREF_REGEX)?
            .captures(head.trim())
            .map(|symref_match| symref_match[1].to_string());

        symref_match.ok_or_else(|| DumpError::MalformedHead(head).into())
    }

    /// Fetch a ref file and parse its content as a commit hash
    ///
    /// The entire trimmed content must be exactly 40 lowercase hex
    /// characters.
    ///
    /// # Errors
    ///
    /// `DumpError::MalformedHash` otherwise (including when the ref could
    /// not be fetched at all).
    pub fn resolve_ref_hash(&self, ref_path: &str) -> anyhow::Result<ObjectId> {
        let content = self.read_text(ref_path);
        ObjectId::try_parse(content.trim().to_string())
    }

    fn read_text(&self, relative_path: &str) -> String {
        match self.fetcher.fetch_bytes(relative_path) {
            FetchOutcome::Found(raw) => String::from_utf8_lossy(&raw).into_owned(),
            // unfetchable degrades to empty content, which fails the parse
            FetchOutcome::Missing | FetchOutcome::TransportError(_) => String::new(),
        }
    }
}
