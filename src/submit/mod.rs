//! Submitting the combined branch as a pull request
//!
//! The user confirms, may adjust the title and base branch, and picks the
//! head owner when working from a fork. Only then is the branch pushed and
//! the PR created.

mod body;

pub use body::render_body;

use crate::combine::{CombineResult, ORIGIN};
use crate::error::{Error, Result};
use crate::platform::HostingService;
use crate::progress::ProgressCallback;
use crate::prompt::Prompter;
use crate::types::CreatePrRequest;
use crate::vcs::VcsService;
use tracing::debug;

/// Label applied to every combined PR
pub const PR_LABEL: &str = "dependencies";

/// Owner used for the head reference when the user login is unavailable
const FALLBACK_OWNER: &str = "origin";

/// What happened at submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The user declined; nothing was pushed or created
    Declined,
    /// The branch was pushed and the PR requested
    Created(CreatePrRequest),
}

/// Push the combined branch and open the combined PR
///
/// Push or create failures are [`Error::Submission`]. The local branch and
/// its merges are left in place either way.
pub async fn submit(
    combined: &CombineResult,
    default_base: &str,
    platform: &dyn HostingService,
    vcs: &dyn VcsService,
    prompter: &dyn Prompter,
    progress: &dyn ProgressCallback,
) -> Result<Submission> {
    let branch = &combined.branch.name;

    if !prompter.confirm("Do you want to submit the combined PR?", false)? {
        progress.on_message("Combined PR not submitted").await;
        return Ok(Submission::Declined);
    }

    let title = prompter.input("Do you want to change the PR title?", &combined.title)?;
    let base = prompter.input(
        "Which branch do you want to send the PR against?",
        default_base,
    )?;

    vcs.push(ORIGIN, branch)
        .await
        .map_err(|e| Error::Submission(format!("failed to push {branch}: {e}")))?;
    progress
        .on_message(&format!("Branch {branch} pushed to {ORIGIN}"))
        .await;

    let head = choose_head(platform, prompter, progress, branch).await?;

    let request = CreatePrRequest {
        base,
        head,
        title,
        body: combined.body.clone(),
        label: PR_LABEL.to_string(),
    };

    debug!(
        head = %request.head,
        base = %request.base,
        title = %request.title,
        "creating combined PR"
    );
    platform
        .create_pr(&request)
        .await
        .map_err(|e| Error::Submission(e.to_string()))?;

    progress
        .on_message("Done! The combined PR has been sent")
        .await;
    Ok(Submission::Created(request))
}

/// Pick the `owner:branch` head for the PR
///
/// Offers the repository (fork) owner and the current user; the current
/// user is the default. No prompt when both are the same.
async fn choose_head(
    platform: &dyn HostingService,
    prompter: &dyn Prompter,
    progress: &dyn ProgressCallback,
    branch: &str,
) -> Result<String> {
    let fork = platform
        .fork_owner()
        .await
        .map_err(|e| Error::Submission(format!("failed to detect fork owner: {e}")))?;

    let login = match platform.current_user_login().await {
        Ok(login) if !login.is_empty() => login,
        Ok(_) => FALLBACK_OWNER.to_string(),
        Err(e) => {
            progress
                .on_warning(&format!("Failed to resolve current user, using {FALLBACK_OWNER}: {e}"))
                .await;
            FALLBACK_OWNER.to_string()
        }
    };

    let own_head = format!("{login}:{branch}");
    if fork == login {
        return Ok(own_head);
    }

    let options = vec![format!("{fork}:{branch}"), own_head];
    let index = prompter.select(
        "Which remote do you want to send the PR against?",
        &options,
        1,
    )?;

    options
        .into_iter()
        .nth(index)
        .ok_or_else(|| Error::Prompt(format!("selection {index} out of range")))
}
