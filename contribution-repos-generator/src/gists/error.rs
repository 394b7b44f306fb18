//! Gist error types.

use thiserror::Error;

/// Errors that can occur while publishing a gist.
#[derive(Debug, Error)]
pub enum GistError {
    /// The gist API answered with a failure.
    #[error("Failed to create gist via '{path}': {source}")]
    PublishError {
        path: String,
        #[source]
        source: octocrab::Error,
    },

    /// The API response is missing an expected field.
    #[error("Malformed API response: missing field '{field}'")]
    MalformedResponse { field: String },
}
