//! Core types for gh-multi-merge-prs

use serde::{Deserialize, Serialize};

/// A candidate pull request, as returned by the search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Head (source) branch name
    pub head_ref_name: String,
    /// Web URL for the PR
    pub url: String,
}

impl std::fmt::Display for PullRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} - {} - {}", self.number, self.title, self.url)
    }
}

/// The integration branch that accumulates merges for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedBranch {
    /// Branch name, derived from the combined title
    pub name: String,
    /// Default branch the combined branch was created from
    pub base_branch: String,
}

/// A PR that merged cleanly into the combined branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPullRequest {
    /// The source PR
    pub pr: PullRequest,
    /// One-line summary as displayed by the hosting service
    pub summary: String,
}

/// Arguments for creating the combined PR
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrRequest {
    /// Base branch the PR targets
    pub base: String,
    /// Head reference (`owner:branch`)
    pub head: String,
    /// PR title
    pub title: String,
    /// PR body
    pub body: String,
    /// Label applied to the PR
    pub label: String,
}
