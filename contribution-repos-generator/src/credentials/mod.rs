//! GitHub credential resolution.
//!
//! Credentials are resolved once per run. A personal access token is used
//! when available, otherwise the user is prompted for basic auth details on
//! the terminal.

mod error;

pub use error::CredentialError;

use dialoguer::{Input, Password};

/// Credentials used to authenticate against the GitHub API.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// A personal access token with the `gist` scope.
    Token(String),

    /// Username and password for basic auth.
    Basic {
        /// GitHub account name.
        username: String,
        /// Password for the account.
        password: String,
    },
}

impl Credentials {
    /// Resolves credentials from an optional token.
    ///
    /// # Arguments
    ///
    /// * `token` - Personal access token, if one is configured
    ///
    /// # Returns
    ///
    /// Token credentials when a token is supplied, otherwise basic auth
    /// details read interactively from the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::PromptError`] if the interactive prompt
    /// fails.
    pub fn resolve(token: Option<String>) -> Result<Self, CredentialError> {
        match token {
            Some(token) => Ok(Self::Token(token)),
            None => Self::prompt_basic_auth(),
        }
    }

    /// Reads basic auth details from the terminal.
    fn prompt_basic_auth() -> Result<Self, CredentialError> {
        let username: String = Input::new().with_prompt("github username").interact_text()?;
        let password = Password::new().with_prompt("password").interact()?;
        Ok(Self::Basic { username, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_supplied_token() {
        let credentials = Credentials::resolve(Some("secret".to_string())).unwrap();

        assert!(matches!(credentials, Credentials::Token(token) if token == "secret"));
    }
}
