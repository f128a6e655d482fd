//! Error taxonomy for remote repository scraping
//!
//! Fatal failures abort the whole run and carry enough context to identify
//! the failing stage. Soft outcomes (a missing or unfetchable object) are not
//! errors at all; they are modeled by `FetchOutcome`/`Loaded` in `areas` and
//! skipped by the walker.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure kinds surfaced by the scraper
///
/// Everything here bubbles up to the top-level caller uncaught; there is no
/// retry and no checkpoint/resume.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The input does not look like an `http(s)://host[/path]` repository URL
    #[error("invalid repository URL: {0}")]
    InvalidUrl(String),

    /// HEAD did not contain a `ref: <path>` symbolic reference
    #[error("no head reference found in: {0:?}")]
    MalformedHead(String),

    /// A value expected to be a 40-character lowercase hex hash was not one
    #[error("hash could not be parsed: {0:?}")]
    MalformedHash(String),

    /// A loose-object header carried an unrecognized type token
    #[error("unknown object type: {0:?}")]
    UnknownObjectType(String),

    /// A commit object had no `tree <hash>` line in its header
    #[error("commit object has no tree line")]
    MissingTreeLine,

    /// Zlib inflation failed; `sample` holds a hex dump of the leading bytes
    #[error("cannot decode object data, leading bytes: {sample}")]
    Inflate { sample: String },

    /// The materialization target is missing or not a directory
    #[error("target directory does not exist or is not a directory: {}", .0.display())]
    TargetDir(PathBuf),

    /// The object graph nests deeper than the traversal bound
    #[error("tree nesting exceeds {0} levels")]
    DepthExceeded(usize),

    /// `files()`/`download()` called before a successful fetch, or the walk
    /// produced no entries
    #[error("no files have been fetched yet")]
    EmptyManifest,
}
