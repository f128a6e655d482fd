//! High-level scrape operations
//!
//! `RemoteRepository` coordinates ref resolution, the object-graph walk and
//! materialization against one remote `.git` directory. Progress and warning
//! lines go through an injected writer so callers control where output ends
//! up.

use crate::areas::database::RemoteDatabase;
use crate::areas::refs::RemoteRefs;
use crate::areas::remote::{HttpFetcher, ObjectFetcher};
use crate::artifacts::locator::RepositoryLocator;
use crate::artifacts::manifest::Manifest;
use crate::artifacts::materialize::Materializer;
use crate::artifacts::walker::GraphWalker;
use crate::error::DumpError;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;

pub struct RemoteRepository {
    locator: RepositoryLocator,
    database: RemoteDatabase,
    refs: RemoteRefs,
    writer: RefCell<Box<dyn std::io::Write>>,
    /// Populated by a successful `fetch`, consumed by `files`/`download`
    manifest: Option<Manifest>,
}

impl RemoteRepository {
    /// Construct against a raw URL, using the blocking HTTP fetcher
    pub fn new(url: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let locator = RepositoryLocator::try_parse(url)?;
        let fetcher: Arc<dyn ObjectFetcher> = Arc::new(HttpFetcher::new(locator.clone())?);

        Ok(Self::with_fetcher(locator, fetcher, writer))
    }

    /// Construct with an explicit fetcher (tests, alternative transports)
    pub fn with_fetcher(
        locator: RepositoryLocator,
        fetcher: Arc<dyn ObjectFetcher>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        RemoteRepository {
            locator,
            database: RemoteDatabase::new(fetcher.clone()),
            refs: RemoteRefs::new(fetcher),
            writer: RefCell::new(writer),
            manifest: None,
        }
    }

    pub fn locator(&self) -> &RepositoryLocator {
        &self.locator
    }

    pub fn database(&self) -> &RemoteDatabase {
        &self.database
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Resolve HEAD and walk the object graph, populating the manifest
    ///
    /// Structural parse/decode failures abort; missing objects merely leave
    /// holes in the manifest.
    pub fn fetch(&mut self) -> anyhow::Result<()> {
        let head_oid = self.refs.resolve_head()?;
        let manifest = GraphWalker::new(self).walk(&head_oid)?;

        self.manifest = Some(manifest);
        Ok(())
    }

    /// Borrow the manifest produced by `fetch`
    ///
    /// # Errors
    ///
    /// `DumpError::EmptyManifest` before a successful `fetch` or when the
    /// walk found no files.
    pub fn files(&self) -> anyhow::Result<&Manifest> {
        match &self.manifest {
            Some(manifest) if !manifest.is_empty() => Ok(manifest),
            _ => anyhow::bail!(DumpError::EmptyManifest),
        }
    }

    /// Materialize every manifest entry below `target_root`
    pub fn download(&self, target_root: &Path) -> anyhow::Result<()> {
        let manifest = self.files()?;
        Materializer::new(self).materialize(manifest, target_root)
    }
}
