use thiserror::Error;

/// Errors that can occur while resolving GitHub credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Reading credentials from the terminal failed.
    #[error("Failed to read credentials: {0}")]
    PromptError(#[from] dialoguer::Error),
}
