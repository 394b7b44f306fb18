//! Gist publishing for generated manifests.
//!
//! This module uploads the patched repos file through the gist REST API and
//! returns the raw content URL that CI jobs can consume.

mod error;

pub use error::GistError;

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, info_span, Instrument};

/// File name under which the manifest is stored in the gist.
pub const GIST_FILE_NAME: &str = "external_contribution_repos.txt";

/// Description attached to created gists.
pub const GIST_DESCRIPTION: &str = "external contribution repos file";

/// Endpoint for creating gists.
const GIST_PATH: &str = "/gists";

/// Request body for the gist creation endpoint.
#[derive(Debug, Serialize)]
struct CreateGistRequest {
    description: String,
    public: bool,
    files: BTreeMap<String, GistFileContent>,
}

/// A single file of a gist creation request.
#[derive(Debug, Serialize)]
struct GistFileContent {
    content: String,
}

/// Gist fields read from the creation response.
#[derive(Debug, Deserialize)]
struct CreateGistResponse {
    files: Option<BTreeMap<String, CreatedGistFile>>,
}

/// Hosted file fields of a created gist.
#[derive(Debug, Deserialize)]
struct CreatedGistFile {
    raw_url: Option<String>,
}

/// Publishes manifest text as a public gist.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `content` - Manifest text to upload
///
/// # Returns
///
/// The raw content URL of the uploaded file.
///
/// # Errors
///
/// Returns [`GistError::PublishError`] if the creation call fails, or
/// [`GistError::MalformedResponse`] if the response does not name the
/// uploaded file's raw URL.
pub async fn create_gist(octocrab: &Octocrab, content: &str) -> Result<String, GistError> {
    let span = info_span!("create_gist", file = GIST_FILE_NAME);

    async {
        info!(bytes = content.len(), "Creating gist");

        let request = CreateGistRequest {
            description: GIST_DESCRIPTION.to_string(),
            public: true,
            files: BTreeMap::from([(
                GIST_FILE_NAME.to_string(),
                GistFileContent {
                    content: content.to_string(),
                },
            )]),
        };

        let response: CreateGistResponse = octocrab
            .post(GIST_PATH, Some(&request))
            .await
            .map_err(|source| GistError::PublishError {
                path: GIST_PATH.to_string(),
                source,
            })?;

        let mut files = response.files.ok_or_else(|| GistError::MalformedResponse {
            field: "files".to_string(),
        })?;
        let file = files
            .remove(GIST_FILE_NAME)
            .ok_or_else(|| GistError::MalformedResponse {
                field: format!("files.{GIST_FILE_NAME}"),
            })?;
        let raw_url = file.raw_url.ok_or_else(|| GistError::MalformedResponse {
            field: format!("files.{GIST_FILE_NAME}.raw_url"),
        })?;

        info!(url = %raw_url, "Gist created");
        Ok(raw_url)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_client(server: &MockServer) -> Octocrab {
        Octocrab::builder()
            .personal_token("test-token".to_string())
            .base_uri(server.uri())
            .unwrap()
            .build()
            .unwrap()
    }

    fn created_response(raw_url: &str) -> ResponseTemplate {
        ResponseTemplate::new(201).set_body_json(json!({
            "id": "abc123",
            "files": {
                "external_contribution_repos.txt": { "raw_url": raw_url }
            }
        }))
    }

    #[tokio::test]
    async fn create_gist_returns_raw_url() {
        let server = MockServer::start().await;
        let raw_url =
            "https://gist.githubusercontent.com/raw/abc123/external_contribution_repos.txt";
        Mock::given(method("POST"))
            .and(path("/gists"))
            .respond_with(created_response(raw_url))
            .mount(&server)
            .await;

        let octocrab = mock_client(&server).await;
        let url = create_gist(&octocrab, "repositories:").await.unwrap();

        assert_eq!(url, raw_url);
    }

    #[tokio::test]
    async fn create_gist_sends_expected_payload() {
        let server = MockServer::start().await;
        let raw_url =
            "https://gist.githubusercontent.com/raw/abc123/external_contribution_repos.txt";
        Mock::given(method("POST"))
            .and(path("/gists"))
            .and(body_partial_json(json!({
                "description": "external contribution repos file",
                "public": true,
                "files": {
                    "external_contribution_repos.txt": { "content": "repositories:" }
                }
            })))
            .respond_with(created_response(raw_url))
            .mount(&server)
            .await;

        let octocrab = mock_client(&server).await;
        let url = create_gist(&octocrab, "repositories:").await.unwrap();

        assert_eq!(url, raw_url);
    }

    #[tokio::test]
    async fn create_gist_failure_names_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gists"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&server)
            .await;

        let octocrab = mock_client(&server).await;
        let error = create_gist(&octocrab, "repositories:").await.unwrap_err();

        assert!(matches!(error, GistError::PublishError { .. }));
        assert!(error.to_string().contains("/gists"));
    }

    #[tokio::test]
    async fn create_gist_missing_raw_url_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gists"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "abc123",
                "files": {
                    "external_contribution_repos.txt": {}
                }
            })))
            .mount(&server)
            .await;

        let octocrab = mock_client(&server).await;
        let error = create_gist(&octocrab, "repositories:").await.unwrap_err();

        assert!(matches!(error, GistError::MalformedResponse { .. }));
    }
}
