//! Runner error types.

/// Errors that can occur while generating a repos file.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Credential resolution errors.
    #[error(transparent)]
    Credential(#[from] crate::credentials::CredentialError),

    /// Pull request lookup errors.
    #[error(transparent)]
    Pr(#[from] crate::pull_requests::PrError),

    /// Repos file fetching and patching errors.
    #[error(transparent)]
    Manifest(#[from] crate::manifest::ManifestError),

    /// Gist publishing errors.
    #[error(transparent)]
    Gist(#[from] crate::gists::GistError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// HTTP client initialization errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
