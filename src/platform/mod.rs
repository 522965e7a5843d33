//! Hosting platform access
//!
//! Every query and mutation against the code-hosting platform goes through
//! [`HostingService`]. The production implementation shells out to `gh`.

mod gh;

pub use gh::GhCli;

use crate::error::Result;
use crate::types::{CreatePrRequest, PullRequest};
use async_trait::async_trait;

/// Hosting service trait for PR operations
///
/// Abstracts the code-hosting CLI so the combine workflow can be exercised
/// against an in-memory double.
#[async_trait]
pub trait HostingService: Send + Sync {
    /// Search open PRs matching `query`, at most `limit` of them
    async fn search_pull_requests(&self, query: &str, limit: usize) -> Result<Vec<PullRequest>>;

    /// Line-oriented check-run report for a PR
    async fn pr_checks(&self, pr_number: u64) -> Result<String>;

    /// Check out the PR head locally
    async fn checkout_pr(&self, pr_number: u64) -> Result<()>;

    /// One-line display summary of a PR (title, number, author)
    async fn view_pr_summary(&self, pr_number: u64) -> Result<String>;

    /// Create a PR
    async fn create_pr(&self, request: &CreatePrRequest) -> Result<()>;

    /// Name of the repository default branch
    async fn default_branch(&self) -> Result<String>;

    /// Login of the authenticated user
    async fn current_user_login(&self) -> Result<String>;

    /// `OWNER/NAME` of the repository being operated on
    async fn repository(&self) -> Result<String>;

    /// Owner of the current repository (the fork owner when run from a fork)
    async fn fork_owner(&self) -> Result<String>;
}
