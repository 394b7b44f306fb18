//! Manifest error types.

use thiserror::Error;

/// Errors that can occur while fetching or patching a repos manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No entry for the requested package.
    #[error("Package '{package}' does not exist in the repos file")]
    PackageNotFound { package: String },

    /// The manifest ends before the entry's url and version lines.
    #[error("Manifest entry for '{package}' is truncated")]
    TruncatedEntry { package: String },

    /// Non-success HTTP status while downloading the manifest.
    #[error("Failed to fetch repos file from '{url}': HTTP {status}")]
    FetchError {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The manifest download could not be completed.
    #[error("Failed to fetch repos file from '{url}': {source}")]
    RequestError {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
