//! Pull request metadata lookup.
//!
//! This module parses pull request URLs and queries the GitHub API for the
//! contribution's head branch and fork repository.

mod error;
mod head;
mod reference;

pub use error::PrError;
pub use head::PrHead;
pub use reference::PrReference;

use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{info, info_span, Instrument};

/// Pull request fields read from the API response.
#[derive(Debug, Deserialize)]
struct ApiPullRequest {
    head: Option<ApiHead>,
}

/// Head branch fields of a pull request.
#[derive(Debug, Deserialize)]
struct ApiHead {
    #[serde(rename = "ref")]
    ref_name: Option<String>,
    repo: Option<ApiRepository>,
}

/// Repository fields of a head branch.
#[derive(Debug, Deserialize)]
struct ApiRepository {
    html_url: Option<String>,
}

/// Fetches the head branch and fork of a pull request.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `reference` - Pull request to look up
///
/// # Returns
///
/// A [`PrHead`] naming the package to patch, the fork's clone URL, and the
/// contribution branch.
///
/// # Errors
///
/// Returns [`PrError::ApiError`] if the lookup fails, or
/// [`PrError::MalformedResponse`] if the response is missing head metadata
/// (e.g. the fork repository has been deleted).
pub async fn fetch_pr_head(
    octocrab: &Octocrab,
    reference: &PrReference,
) -> Result<PrHead, PrError> {
    let span = info_span!(
        "fetch_pr_head",
        repo = %reference.full_name(),
        number = reference.number
    );

    async {
        info!("Fetching pull request metadata");

        let path = reference.pulls_path();
        let pull: ApiPullRequest = octocrab
            .get(&path, None::<&()>)
            .await
            .map_err(|source| PrError::ApiError {
                path: path.clone(),
                source,
            })?;

        let head = pull.head.ok_or_else(|| PrError::MalformedResponse {
            field: "head".to_string(),
        })?;
        let branch = head.ref_name.ok_or_else(|| PrError::MalformedResponse {
            field: "head.ref".to_string(),
        })?;
        let fork = head.repo.ok_or_else(|| PrError::MalformedResponse {
            field: "head.repo".to_string(),
        })?;
        let html_url = fork.html_url.ok_or_else(|| PrError::MalformedResponse {
            field: "head.repo.html_url".to_string(),
        })?;

        let fork_url = format!("{html_url}.git");
        info!(fork = %fork_url, branch = %branch, "Resolved contribution head");

        Ok(PrHead {
            package: reference.full_name(),
            fork_url,
            branch,
        })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_client(server: &MockServer) -> Octocrab {
        Octocrab::builder()
            .personal_token("test-token".to_string())
            .base_uri(server.uri())
            .unwrap()
            .build()
            .unwrap()
    }

    fn demo_reference() -> PrReference {
        PrReference {
            owner: "osrf".to_string(),
            repo: "demo".to_string(),
            number: 42,
        }
    }

    #[tokio::test]
    async fn fetch_pr_head_resolves_fork_and_branch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/osrf/demo/pulls/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "head": {
                    "ref": "feature-x",
                    "repo": { "html_url": "https://github.com/alice/demo" }
                }
            })))
            .mount(&server)
            .await;

        let octocrab = mock_client(&server).await;
        let head = fetch_pr_head(&octocrab, &demo_reference()).await.unwrap();

        assert_eq!(head.package, "osrf/demo");
        assert_eq!(head.fork_url, "https://github.com/alice/demo.git");
        assert_eq!(head.branch, "feature-x");
    }

    #[tokio::test]
    async fn fetch_pr_head_missing_fork_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/osrf/demo/pulls/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "head": { "ref": "feature-x", "repo": null }
            })))
            .mount(&server)
            .await;

        let octocrab = mock_client(&server).await;
        let error = fetch_pr_head(&octocrab, &demo_reference()).await.unwrap_err();

        assert!(matches!(
            error,
            PrError::MalformedResponse { field } if field == "head.repo"
        ));
    }

    #[tokio::test]
    async fn fetch_pr_head_failure_names_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/osrf/demo/pulls/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&server)
            .await;

        let octocrab = mock_client(&server).await;
        let error = fetch_pr_head(&octocrab, &demo_reference()).await.unwrap_err();

        assert!(matches!(error, PrError::ApiError { .. }));
        assert!(error.to_string().contains("/repos/osrf/demo/pulls/42"));
    }
}
