//! Repository URL validation and canonicalization
//!
//! Accepted shapes: `scheme://host`, `scheme://host/path`, with or without a
//! trailing `.git` and/or slash. All of them canonicalize to
//! `scheme://host[/path]/.git`, which is the base every remote request is
//! resolved against.

use crate::error::DumpError;

/// Regex pattern for accepted repository URLs
///
/// Captures scheme, host and optional path; trailing `.git` and slashes are
/// matched but discarded so the canonical suffix can be re-appended exactly
/// once.
const GIT_URL_REGEX: &str = r"(?i)^(https?)://([^/\s]+?)(?:/|$)(.*?)/?(?:\.git)?/?$";

/// Canonical base URL of a remote `.git` directory
///
/// Produced once by `try_parse` and immutable thereafter. Always ends in
/// `/.git`; scheme is restricted to `http`/`https` and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator(String);

impl RepositoryLocator {
    /// Validate and canonicalize a raw repository URL
    ///
    /// Idempotent: parsing an already-canonical locator yields the same
    /// value.
    ///
    /// # Errors
    ///
    /// `DumpError::InvalidUrl` when the input does not match a URL of the
    /// accepted shape.
    pub fn try_parse(raw_url: &str) -> anyhow::Result<Self> {
        let raw_url = raw_url.trim();

        let url_match = regex::Regex::new(GIT_URL_REGEX)?
            .captures(raw_url)
            .ok_or_else(|| DumpError::InvalidUrl(raw_url.to_string()))?;

        let scheme = url_match[1].to_lowercase();
        let host = &url_match[2];
        let path = &url_match[3];

        let mut base = format!("{scheme}://{host}");
        if !path.is_empty() {
            base.push('/');
            base.push_str(path);
        }
        base.push_str("/.git");

        Ok(RepositoryLocator(base))
    }

    /// Resolve a relative path (e.g. `HEAD`, `objects/ab/cd...`) against the
    /// locator
    pub fn join(&self, relative_path: &str) -> String {
        format!("{}/{}", self.0, relative_path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
