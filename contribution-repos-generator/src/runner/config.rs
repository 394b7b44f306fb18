//! Runner configuration.

use crate::credentials::Credentials;
use crate::manifest::DEFAULT_MANIFEST_URL;

/// Configuration for generating a contribution repos file.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// URL of the pull request to generate the repos file for.
    pr_url: String,
    /// Credentials used for GitHub API calls.
    credentials: Credentials,
    /// URL of the baseline repos file.
    manifest_url: String,
    /// Alternate GitHub API base URL (e.g. for GitHub Enterprise).
    api_base: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(pr_url: String, credentials: Credentials) -> Self {
        Self {
            pr_url,
            credentials,
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            api_base: None,
        }
    }

    /// Replaces the baseline repos file URL.
    pub fn with_manifest_url(mut self, manifest_url: String) -> Self {
        self.manifest_url = manifest_url;
        self
    }

    /// Replaces the GitHub API base URL.
    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = Some(api_base);
        self
    }

    /// Returns the pull request URL.
    pub fn pr_url(&self) -> &str {
        &self.pr_url
    }

    /// Returns the configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the baseline repos file URL.
    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    /// Returns the GitHub API base URL, if one is configured.
    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunnerConfig {
        RunnerConfig::new(
            "https://github.com/osrf/demo/pull/42".to_string(),
            Credentials::Token("test-token".to_string()),
        )
    }

    #[test]
    fn new_defaults_to_public_manifest() {
        let config = config();

        assert_eq!(config.manifest_url(), DEFAULT_MANIFEST_URL);
        assert!(config.api_base().is_none());
    }

    #[test]
    fn with_manifest_url_overrides_default() {
        let config = config().with_manifest_url("https://example.com/custom.repos".to_string());

        assert_eq!(config.manifest_url(), "https://example.com/custom.repos");
    }
}
