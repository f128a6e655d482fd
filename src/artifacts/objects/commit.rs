//! Git commit object
//!
//! A commit header is a sequence of text lines (`tree`, `parent`, `author`,
//! ...) followed by a blank line and the message. The scraper only needs the
//! root tree pointer; everything else is skipped.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::DumpError;
use std::io::BufRead;

/// Regex pattern for the root tree line of a commit header
const TREE_LINE_REGEX: &str = r"^tree ([0-9a-f]{40})$";

/// Git commit object, reduced to its root tree pointer
///
/// A commit points to exactly one root tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    tree_oid: ObjectId,
}

impl Commit {
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let tree_line = regex::Regex::new(TREE_LINE_REGEX)?;

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                // header ends here; the message never holds the tree pointer
                break;
            }
            if let Some(tree_match) = tree_line.captures(&line) {
                return Ok(Commit {
                    tree_oid: ObjectId::try_parse(tree_match[1].to_string())?,
                });
            }
        }

        anyhow::bail!(DumpError::MissingTreeLine)
    }
}
