//! Raw byte retrieval from the exposed `.git` directory
//!
//! The fetcher is the transport seam of the scraper: everything above it
//! addresses content by a path relative to the `.git` base and never sees
//! HTTP. Transport failures are data, not errors; the outcome distinguishes
//! a genuinely absent object from a failed transfer so callers can choose
//! their own policy for each.

use crate::artifacts::locator::RepositoryLocator;
use anyhow::Context;
use bytes::Bytes;

/// Result of fetching one relative path
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Found(Bytes),
    /// The server answered and the content is not there (404 or empty body)
    Missing,
    /// The transfer itself failed; the object may or may not exist
    TransportError(String),
}

/// Byte retrieval for paths relative to the `.git` base
///
/// Implementations must never return an `Err`-like outcome for ordinary
/// absence; `fetch_bytes` is infallible by contract.
pub trait ObjectFetcher {
    fn fetch_bytes(&self, relative_path: &str) -> FetchOutcome;
}

/// Blocking HTTP fetcher for a remote repository
pub struct HttpFetcher {
    locator: RepositoryLocator,
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(locator: RepositoryLocator) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("gitdump/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Unable to build HTTP client")?;

        Ok(HttpFetcher { locator, client })
    }
}

impl ObjectFetcher for HttpFetcher {
    fn fetch_bytes(&self, relative_path: &str) -> FetchOutcome {
        let url = self.locator.join(relative_path);

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(err) => return FetchOutcome::TransportError(err.to_string()),
        };

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return FetchOutcome::Missing;
        }
        if !response.status().is_success() {
            return FetchOutcome::TransportError(format!("{} for {}", response.status(), url));
        }

        match response.bytes() {
            // an empty body carries no object either way
            Ok(body) if body.is_empty() => FetchOutcome::Missing,
            Ok(body) => FetchOutcome::Found(body),
            Err(err) => FetchOutcome::TransportError(err.to_string()),
        }
    }
}
