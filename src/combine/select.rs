//! Candidate selection and check-status filtering

use crate::error::{Error, Result};
use crate::platform::HostingService;
use crate::progress::ProgressCallback;
use crate::prompt::Prompter;
use crate::types::PullRequest;
use tracing::debug;

/// Search for candidate PRs, optionally narrowed by a multi-select prompt
///
/// Interactive selection is a filter: the returned PRs keep the order the
/// hosting service listed them in, whatever order the user picked them in.
pub async fn select_pull_requests(
    platform: &dyn HostingService,
    prompter: &dyn Prompter,
    query: &str,
    limit: usize,
    interactive: bool,
) -> Result<Vec<PullRequest>> {
    debug!(query, limit, "fetching pull requests");

    let prs = platform
        .search_pull_requests(query, limit)
        .await
        .map_err(|e| Error::Query(e.to_string()))?;

    if !interactive {
        return Ok(prs);
    }

    let options: Vec<String> = prs.iter().map(ToString::to_string).collect();
    let mut chosen = prompter.multi_select("Please select the PRs to combine", &options)?;
    chosen.sort_unstable();
    chosen.dedup();

    Ok(chosen
        .into_iter()
        .filter_map(|index| prs.get(index).cloned())
        .collect())
}

/// Whether a check report shows every check passing
///
/// Any line mentioning `fail` or `pending` (case-sensitive) marks the PR as
/// not passing. This is a textual scan of the report, so a check whose name
/// contains either word counts against the PR too.
pub fn checks_passing(report: &str) -> bool {
    !report
        .lines()
        .any(|line| line.contains("fail") || line.contains("pending"))
}

/// Outcome of the check-status filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckFilterResult {
    /// PRs cleared for combining, in input order
    pub passing: Vec<PullRequest>,
    /// PRs dropped, with the reason
    pub dropped: Vec<(PullRequest, String)>,
}

/// Keep only PRs whose checks pass
///
/// A PR whose checks cannot be queried is dropped, not assumed passing. With
/// `skip_check` set every PR passes without querying. Fails with
/// [`Error::NoPassingPullRequests`] when a non-empty selection is dropped
/// entirely.
pub async fn filter_passing(
    platform: &dyn HostingService,
    progress: &dyn ProgressCallback,
    prs: Vec<PullRequest>,
    skip_check: bool,
) -> Result<CheckFilterResult> {
    if skip_check {
        for pr in &prs {
            progress.on_message(&pr.to_string()).await;
        }
        return Ok(CheckFilterResult {
            passing: prs,
            dropped: Vec::new(),
        });
    }

    let mut result = CheckFilterResult::default();

    for pr in prs {
        match check_pr(platform, pr.number).await {
            Ok(true) => {
                progress.on_message(&pr.to_string()).await;
                result.passing.push(pr);
            }
            Ok(false) => {
                let reason = format!("Not all checks are passing for #{}, skipping PR", pr.number);
                progress.on_warning(&reason).await;
                result.dropped.push((pr, reason));
            }
            Err(e) => {
                let reason = format!("{e}, skipping PR");
                progress.on_warning(&reason).await;
                result.dropped.push((pr, reason));
            }
        }
    }

    if result.passing.is_empty() && !result.dropped.is_empty() {
        return Err(Error::NoPassingPullRequests);
    }

    Ok(result)
}

async fn check_pr(platform: &dyn HostingService, pr_number: u64) -> Result<bool> {
    debug!(pr_number, "checking if PR is passing checks");
    let report = platform
        .pr_checks(pr_number)
        .await
        .map_err(|e| Error::CheckStatus {
            number: pr_number,
            message: e.to_string(),
        })?;
    Ok(checks_passing(&report))
}
