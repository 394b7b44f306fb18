//! Pull request error types.

use thiserror::Error;

/// Errors that can occur while resolving a pull request.
#[derive(Debug, Error)]
pub enum PrError {
    /// The pull request URL does not have the expected shape.
    #[error("Malformed pull request URL '{url}': {message}")]
    MalformedUrl { url: String, message: String },

    /// The GitHub API answered with a failure.
    #[error("GitHub API error for '{path}': {source}")]
    ApiError {
        path: String,
        #[source]
        source: octocrab::Error,
    },

    /// The API response is missing an expected field.
    #[error("Malformed API response: missing field '{field}'")]
    MalformedResponse { field: String },
}
