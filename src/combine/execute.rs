//! Combined branch construction - effectful operations
//!
//! Creates the combined branch from the freshly updated default branch and
//! merges every confirmed PR into it, one at a time. A PR that fails to merge
//! is aborted and skipped; the rest of the batch carries on.

use crate::combine::title::{combine_titles, combined_branch_name};
use crate::error::{Error, Result};
use crate::platform::HostingService;
use crate::progress::ProgressCallback;
use crate::submit::render_body;
use crate::types::{CombinedBranch, MergedPullRequest, PullRequest};
use crate::vcs::VcsService;
use tracing::debug;

/// Remote the default branch is updated from
pub const ORIGIN: &str = "origin";

/// Fallback remote for fork workflows
pub const UPSTREAM: &str = "upstream";

/// Result of building the combined branch
#[derive(Debug, Clone)]
pub struct CombineResult {
    /// The combined branch
    pub branch: CombinedBranch,
    /// Combined title the branch name was derived from
    pub title: String,
    /// PRs merged into the branch, in input order
    pub merged: Vec<MergedPullRequest>,
    /// PRs that failed to merge, with the failure message
    pub skipped: Vec<(PullRequest, String)>,
    /// Generated body for the combined PR
    pub body: String,
}

impl CombineResult {
    /// Check if at least one PR merged
    #[must_use]
    pub const fn has_merges(&self) -> bool {
        !self.merged.is_empty()
    }

    /// Numbers of the merged PRs
    pub fn merged_numbers(&self) -> Vec<u64> {
        self.merged.iter().map(|m| m.pr.number).collect()
    }
}

/// Build the combined branch from `confirmed` PRs
///
/// # Arguments
/// * `confirmed` - PRs that passed the check filter, in merge order
/// * `platform` - Hosting service (default branch, checkout, summaries)
/// * `vcs` - Local repository service
/// * `progress` - Progress callback for status lines and skip warnings
/// * `invocation` - Command line quoted into the generated body
///
/// Fails only on setup errors (default branch, local update, branch
/// creation, PR checkout). Merge failures are per-PR. A run
/// where nothing merges still succeeds, with an empty `merged` list.
pub async fn combine(
    confirmed: &[PullRequest],
    platform: &dyn HostingService,
    vcs: &dyn VcsService,
    progress: &dyn ProgressCallback,
    invocation: &str,
) -> Result<CombineResult> {
    let default_branch = platform
        .default_branch()
        .await
        .map_err(|e| Error::DefaultBranch(e.to_string()))?;
    if default_branch.is_empty() {
        return Err(Error::DefaultBranch("hosting service returned an empty name".to_string()));
    }
    debug!(default_branch = %default_branch, "resolved default branch");

    update_branch(vcs, progress, &default_branch).await?;

    let title = combine_titles(confirmed);
    let branch = CombinedBranch {
        name: combined_branch_name(&title),
        base_branch: default_branch,
    };

    create_combined_branch(vcs, progress, &branch).await?;

    let mut merged = Vec::new();
    let mut skipped = Vec::new();

    for pr in confirmed {
        platform
            .checkout_pr(pr.number)
            .await
            .map_err(|e| Error::LocalSync(format!("failed to check out #{}: {e}", pr.number)))?;

        match merge_pr(vcs, &branch.name, pr).await {
            Ok(()) => {
                let summary = platform
                    .view_pr_summary(pr.number)
                    .await
                    .map_err(|e| Error::Query(format!("failed to view #{}: {e}", pr.number)))?;
                progress
                    .on_message(&format!("Merged {} into {}", pr.head_ref_name, branch.name))
                    .await;
                merged.push(MergedPullRequest {
                    pr: pr.clone(),
                    summary,
                });
            }
            Err(Error::MergeConflict { message, .. }) => {
                progress
                    .on_warning(&format!(
                        "Pull request #{} failed to merge into {}. Skipping PR",
                        pr.number, branch.name
                    ))
                    .await;
                skipped.push((pr.clone(), message));
            }
            Err(e) => return Err(e),
        }
    }

    let body = render_body(invocation, &merged);

    Ok(CombineResult {
        branch,
        title,
        merged,
        skipped,
        body,
    })
}

/// Check out `branch` and fast-forward it from origin, falling back to upstream
async fn update_branch(
    vcs: &dyn VcsService,
    progress: &dyn ProgressCallback,
    branch: &str,
) -> Result<()> {
    debug!(branch, "updating branch");

    vcs.checkout(branch)
        .await
        .map_err(|e| Error::LocalSync(format!("failed to check out {branch}: {e}")))?;

    if let Err(origin_err) = vcs.pull(ORIGIN, branch, true).await {
        debug!(error = %origin_err, "failed to pull from origin, trying upstream");
        vcs.pull(UPSTREAM, branch, true).await.map_err(|e| {
            Error::LocalSync(format!(
                "failed to update {branch} from {ORIGIN} ({origin_err}) or {UPSTREAM} ({e})"
            ))
        })?;
    }

    progress.on_message(&format!("Branch {branch} updated")).await;
    Ok(())
}

/// Recreate the combined branch from its base
async fn create_combined_branch(
    vcs: &dyn VcsService,
    progress: &dyn ProgressCallback,
    branch: &CombinedBranch,
) -> Result<()> {
    // Usually absent; nothing to clean up then
    if let Err(e) = vcs.delete_branch(&branch.name).await {
        debug!(branch = %branch.name, error = %e, "failed to delete branch, ignoring");
    }

    vcs.create_branch(&branch.name, &branch.base_branch)
        .await
        .map_err(|e| Error::LocalSync(format!("failed to create {}: {e}", branch.name)))?;

    progress
        .on_message(&format!(
            "Branch {} created from {}",
            branch.name, branch.base_branch
        ))
        .await;
    Ok(())
}

/// Merge one PR's head into the combined branch
///
/// On failure the merge is aborted once and the failure is returned as
/// [`Error::MergeConflict`]. The abort itself may fail when the merge never
/// started (missing head, checkout refused); that is only logged.
async fn merge_pr(vcs: &dyn VcsService, branch: &str, pr: &PullRequest) -> Result<()> {
    debug!(source = %pr.head_ref_name, target = branch, "merging");

    let Err(merge_err) = vcs.merge(branch, &pr.head_ref_name).await else {
        return Ok(());
    };

    if let Err(e) = vcs.abort_merge().await {
        debug!(pr_number = pr.number, error = %e, "failed to abort merge, ignoring");
    }

    Err(Error::MergeConflict {
        number: pr.number,
        message: merge_err.to_string(),
    })
}
