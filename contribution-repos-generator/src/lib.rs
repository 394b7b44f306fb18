#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod credentials;
pub mod gists;
pub mod manifest;
pub mod pull_requests;
pub mod runner;

pub use credentials::{CredentialError, Credentials};
pub use gists::{create_gist, GistError, GIST_DESCRIPTION, GIST_FILE_NAME};
pub use manifest::{fetch_manifest, patch_manifest, ManifestError, DEFAULT_MANIFEST_URL};
pub use pull_requests::{fetch_pr_head, PrError, PrHead, PrReference};
pub use runner::{Runner, RunnerConfig, RunnerError};
