//! Orchestrates repos file generation for contribution pull requests.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::credentials::Credentials;
use crate::gists::create_gist;
use crate::manifest::{fetch_manifest, patch_manifest};
use crate::pull_requests::{fetch_pr_head, PrReference};
use octocrab::Octocrab;
use tracing::info;

/// Generates repos files for contribution pull requests.
pub struct Runner {
    /// Configuration for this run.
    config: RunnerConfig,
    /// Authenticated GitHub client.
    octocrab: Octocrab,
    /// HTTP client for fetching the baseline repos file.
    http: reqwest::Client,
}

impl Runner {
    /// Creates a new runner from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Octocrab`] or [`RunnerError::Http`] if a
    /// client cannot be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let builder = Octocrab::builder();
        let builder = match config.credentials() {
            Credentials::Token(token) => builder.personal_token(token.clone()),
            Credentials::Basic { username, password } => {
                builder.basic_auth(username.clone(), password.clone())
            }
        };
        let builder = match config.api_base() {
            Some(api_base) => builder.base_uri(api_base)?,
            None => builder,
        };
        let octocrab = builder.build()?;
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            config,
            octocrab,
            http,
        })
    }

    /// Generates a repos file for the configured pull request and publishes
    /// it as a public gist.
    ///
    /// Looks up the pull request's head fork and branch, fetches the
    /// baseline repos file, rewrites the entry for the pull request's
    /// package, and uploads the result.
    ///
    /// # Returns
    ///
    /// The raw content URL of the published repos file.
    ///
    /// # Errors
    ///
    /// Returns the first error hit along the way; nothing is retried and
    /// partial progress is discarded.
    pub async fn run(&self) -> Result<String, RunnerError> {
        let reference = PrReference::parse(self.config.pr_url())?;
        info!(
            repo = %reference.full_name(),
            number = reference.number,
            "Generating repos file"
        );

        let head = fetch_pr_head(&self.octocrab, &reference).await?;
        let manifest = fetch_manifest(&self.http, self.config.manifest_url()).await?;
        let patched = patch_manifest(&manifest, &head.package, &head.fork_url, &head.branch)?;
        let raw_url = create_gist(&self.octocrab, &patched).await?;

        info!(url = %raw_url, "Repos file published");
        Ok(raw_url)
    }
}
