//! Pull request head metadata.

/// Where a contribution comes from, resolved via the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrHead {
    /// Package name of the upstream repository ("owner/repo").
    pub package: String,

    /// Clone URL of the contributor's fork.
    pub fork_url: String,

    /// Branch the contribution lives on.
    pub branch: String,
}
