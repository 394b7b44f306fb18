//! Repos manifest download and patching.
//!
//! This module fetches the baseline ros2.repos manifest and rewrites a single
//! package entry to point at a contributor's fork and branch.

mod error;

pub use error::ManifestError;

use std::borrow::Cow;
use tracing::{debug, info};

/// Baseline manifest listing the repositories of a full ros2 checkout.
pub const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/ros2/ros2/master/ros2.repos";

/// Downloads a repos manifest as text.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `url` - Location of the manifest
///
/// # Errors
///
/// Returns [`ManifestError::FetchError`] if the server answers with a
/// non-success status, or [`ManifestError::RequestError`] if the request
/// cannot be completed at all.
pub async fn fetch_manifest(client: &reqwest::Client, url: &str) -> Result<String, ManifestError> {
    debug!(url = %url, "Downloading repos file");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ManifestError::RequestError {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ManifestError::FetchError {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| ManifestError::RequestError {
            url: url.to_string(),
            source,
        })?;

    info!(url = %url, bytes = body.len(), "Fetched repos file");
    Ok(body)
}

/// Rewrites one package entry of a manifest to point at a fork.
///
/// Scans from the top for the first line whose content, with leading
/// whitespace stripped, equals `"<package>:"`. The line two positions below
/// the match is overwritten with a `url:` field and the line three positions
/// below with a `version:` field, both at a fixed 3-space indent; every other
/// line is returned byte for byte. Scanning stops at the first match, so
/// later entries with the same name are ignored.
///
/// The entry layout is assumed to be exactly one name line followed by two
/// content lines before the `url:` and `version:` fields. The two overwritten
/// lines are replaced without inspecting their prior content, so a manifest
/// that deviates from this layout produces wrong output rather than an error.
///
/// # Arguments
///
/// * `manifest` - Raw manifest text
/// * `package` - Package name, e.g. `"osrf/demo"`
/// * `url` - Replacement source URL
/// * `branch` - Replacement branch or version
///
/// # Errors
///
/// Returns [`ManifestError::PackageNotFound`] if no line matches the package
/// name, or [`ManifestError::TruncatedEntry`] if the manifest ends before the
/// entry's `url:` and `version:` lines.
pub fn patch_manifest(
    manifest: &str,
    package: &str,
    url: &str,
    branch: &str,
) -> Result<String, ManifestError> {
    let mut lines: Vec<Cow<'_, str>> = manifest.split('\n').map(Cow::Borrowed).collect();
    let needle = format!("{package}:");

    let position = lines
        .iter()
        .position(|line| line.trim_start() == needle)
        .ok_or_else(|| ManifestError::PackageNotFound {
            package: package.to_string(),
        })?;

    if position + 3 >= lines.len() {
        return Err(ManifestError::TruncatedEntry {
            package: package.to_string(),
        });
    }

    debug!(package = %package, line = position, "Found package entry to replace");
    lines[position + 2] = Cow::Owned(format!("   url: {url}"));
    lines[position + 3] = Cow::Owned(format!("   version: {branch}"));

    Ok(lines.join("\n"))
}
