//! Pull request URL parsing.

use crate::pull_requests::PrError;
use tracing::debug;

/// A pull request identified by owner, repository, and number.
///
/// Parsed from a web URL of the form
/// `https://github.com/<owner>/<repo>/pull/<number>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrReference {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Pull request number.
    pub number: u64,
}

impl PrReference {
    /// Parses a pull request web URL.
    ///
    /// The URL is split on `/` and the owner, repository, and number are read
    /// from fixed positions; trailing segments beyond the number are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PrError::MalformedUrl`] if the URL has too few segments, if
    /// the owner or repository segment is empty, or if the number segment is
    /// not composed entirely of decimal digits.
    pub fn parse(pr_url: &str) -> Result<Self, PrError> {
        let segments: Vec<&str> = pr_url.split('/').collect();
        if segments.len() < 7 {
            return Err(PrError::MalformedUrl {
                url: pr_url.to_string(),
                message: "expected https://<host>/<owner>/<repo>/pull/<number>".to_string(),
            });
        }

        let owner = segments[3];
        let repo = segments[4];
        let number = segments[6];

        if owner.is_empty() {
            return Err(PrError::MalformedUrl {
                url: pr_url.to_string(),
                message: "could not find any github organization".to_string(),
            });
        }
        if repo.is_empty() {
            return Err(PrError::MalformedUrl {
                url: pr_url.to_string(),
                message: "could not find any github repository".to_string(),
            });
        }
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(PrError::MalformedUrl {
                url: pr_url.to_string(),
                message: "could not find any pull request id".to_string(),
            });
        }

        let number = number.parse::<u64>().map_err(|_| PrError::MalformedUrl {
            url: pr_url.to_string(),
            message: "pull request id out of range".to_string(),
        })?;

        debug!(owner = %owner, repo = %repo, number = number, "Parsed pull request url");

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        })
    }

    /// Full repository name in "owner/repo" format.
    ///
    /// This doubles as the package name of the upstream repository in the
    /// repos manifest.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// API path of the pull request endpoint.
    #[must_use]
    pub fn pulls_path(&self) -> String {
        format!("/repos/{}/{}/pulls/{}", self.owner, self.repo, self.number)
    }
}
