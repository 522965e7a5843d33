//! End-to-end combine run
//!
//! Select → check filter → combine → submit, strictly in sequence. Setup
//! failures abort the run; per-PR failures (checks, merges) only skip the PR.

use crate::combine::{CombineResult, combine, filter_passing, select_pull_requests};
use crate::config::Config;
use crate::error::Result;
use crate::platform::HostingService;
use crate::progress::ProgressCallback;
use crate::prompt::Prompter;
use crate::submit::{Submission, submit};
use crate::vcs::VcsService;
use tracing::debug;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The query (or the interactive selection) matched no PRs
    NothingSelected,
    /// The combined branch was built; the PR was submitted or declined
    Combined {
        /// Combined branch and merge results
        combined: CombineResult,
        /// Submission outcome
        submission: Submission,
    },
}

/// Run the whole workflow for `config`
pub async fn run(
    config: &Config,
    platform: &dyn HostingService,
    vcs: &dyn VcsService,
    prompter: &dyn Prompter,
    progress: &dyn ProgressCallback,
) -> Result<RunOutcome> {
    debug!(dry_run = config.dry_run, query = %config.query, "starting");
    match platform.current_user_login().await {
        Ok(login) => debug!(login = %login, "running as"),
        Err(e) => debug!(error = %e, "could not resolve current user"),
    }
    match platform.repository().await {
        Ok(repository) => {
            progress
                .on_message(&format!("Current repository is {repository}"))
                .await;
        }
        Err(e) => debug!(error = %e, "could not resolve current repository"),
    }

    let selected = select_pull_requests(
        platform,
        prompter,
        &config.query,
        config.limit,
        config.interactive,
    )
    .await?;

    if selected.is_empty() {
        progress.on_message("No PRs selected to merge").await;
        return Ok(RunOutcome::NothingSelected);
    }

    progress.on_message("Selected PRs:").await;
    let filtered = filter_passing(platform, progress, selected, config.skip_pr_check).await?;

    let combined = combine(
        &filtered.passing,
        platform,
        vcs,
        progress,
        &config.invocation,
    )
    .await?;

    if !combined.has_merges() {
        progress
            .on_warning("No pull request merged cleanly; the combined branch has no changes")
            .await;
    }

    let submission = submit(&combined, &config.base, platform, vcs, prompter, progress).await?;

    Ok(RunOutcome::Combined {
        combined,
        submission,
    })
}
