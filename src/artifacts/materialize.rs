//! Writing manifest entries to a target directory
//!
//! Blob content is never retained from the walk; each entry is re-fetched by
//! hash and written below the target root, mirroring the manifest's relative
//! paths. Mode bits recorded in the manifest are not applied to the written
//! files; reconstructing content is the goal, not permissions.

use crate::areas::database::Loaded;
use crate::areas::repository::RemoteRepository;
use crate::areas::workspace::Workspace;
use crate::artifacts::manifest::Manifest;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

pub struct Materializer<'r> {
    repository: &'r RemoteRepository,
}

impl<'r> Materializer<'r> {
    pub fn new(repository: &'r RemoteRepository) -> Self {
        Materializer { repository }
    }

    /// Write every manifest entry below `target_root`
    ///
    /// Pre-flight fails with `DumpError::TargetDir` when the root is missing
    /// or not a directory. Entries whose blob can no longer be fetched are
    /// skipped with a warning; the rest of the tree is still written.
    pub fn materialize(&self, manifest: &Manifest, target_root: &Path) -> anyhow::Result<()> {
        let workspace = Workspace::open(target_root)?;

        for entry in manifest.entries() {
            match self.repository.database().load_blob(&entry.oid)? {
                Loaded::Found(blob) => {
                    workspace.write_file(&entry.path, blob.content())?;
                    writeln!(self.repository.writer(), "{}", entry.path.display())?;
                }
                Loaded::Missing => {
                    writeln!(
                        self.repository.writer(),
                        "{}",
                        format!("skipping {}: blob {} is gone", entry.path.display(), entry.oid)
                            .yellow()
                    )?;
                }
                Loaded::Failed(detail) => {
                    writeln!(
                        self.repository.writer(),
                        "{}",
                        format!("skipping {}: {detail}", entry.path.display()).yellow()
                    )?;
                }
            }
        }

        Ok(())
    }
}
