//! Recursive object-graph traversal
//!
//! Walks commit→tree→{tree,blob} depth-first in pre-order, producing the
//! flat file manifest. The accumulating path is threaded through the
//! recursion as a parameter, pushed on tree descent and popped
//! unconditionally on exit, so no frame leaks past a failing branch.
//!
//! Repeated hashes are walked again rather than de-duplicated: content
//! addressing makes the graph a DAG, so revisiting shared subtrees is
//! wasteful but never unsafe, and a scrape runs once.

use crate::areas::database::Loaded;
use crate::areas::repository::RemoteRepository;
use crate::artifacts::manifest::{Manifest, ManifestEntry};
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::EntryKind;
use crate::error::DumpError;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

/// Upper bound on tree nesting, guarding against pathological graphs
pub const MAX_TRAVERSAL_DEPTH: usize = 128;

pub struct GraphWalker<'r> {
    repository: &'r RemoteRepository,
}

impl<'r> GraphWalker<'r> {
    pub fn new(repository: &'r RemoteRepository) -> Self {
        GraphWalker { repository }
    }

    /// Walk the graph rooted at `oid` and collect the file manifest
    pub fn walk(&self, oid: &ObjectId) -> anyhow::Result<Manifest> {
        let mut manifest = Manifest::default();
        let mut current_path = PathBuf::new();

        self.walk_object(oid, &mut current_path, &mut manifest, 0)?;

        Ok(manifest)
    }

    fn walk_object(
        &self,
        oid: &ObjectId,
        current_path: &mut PathBuf,
        manifest: &mut Manifest,
        depth: usize,
    ) -> anyhow::Result<()> {
        if depth > MAX_TRAVERSAL_DEPTH {
            anyhow::bail!(DumpError::DepthExceeded(MAX_TRAVERSAL_DEPTH));
        }

        let object = match self.repository.database().load(oid)? {
            Loaded::Found(object) => object,
            // a missing object leaves a hole; the rest of the tree is still worth scraping
            Loaded::Missing => return Ok(()),
            Loaded::Failed(detail) => {
                writeln!(
                    self.repository.writer(),
                    "{}",
                    format!("skipping object {oid}: {detail}").yellow()
                )?;
                return Ok(());
            }
        };

        match object {
            ObjectBox::Commit(commit) => {
                self.walk_object(commit.tree_oid(), current_path, manifest, depth + 1)
            }
            ObjectBox::Tree(tree) => {
                for entry in tree.entries() {
                    match entry.kind() {
                        EntryKind::Blob => manifest.push(ManifestEntry::new(
                            entry.oid.clone(),
                            current_path.join(&entry.name),
                            entry.mode.clone(),
                        )),
                        EntryKind::Tree => {
                            current_path.push(&entry.name);
                            let outcome =
                                self.walk_object(&entry.oid, current_path, manifest, depth + 1);
                            // restore the path even when the nested walk failed
                            current_path.pop();
                            outcome?;
                        }
                    }
                }
                Ok(())
            }
            // a blob at the top level has no path to record
            ObjectBox::Blob(_) => Ok(()),
            // annotated tags are not dereferenced
            ObjectBox::Tag => Ok(()),
        }
    }
}
