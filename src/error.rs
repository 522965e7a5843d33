//! Error types for gh-multi-merge-prs

use thiserror::Error;

/// Errors raised while combining pull requests
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid invocation (e.g. missing `--query`)
    #[error("{0}")]
    Usage(String),

    /// Searching or decoding candidate pull requests failed
    #[error("failed to fetch pull requests: {0}")]
    Query(String),

    /// The repository default branch could not be resolved
    #[error("failed to resolve default branch: {0}")]
    DefaultBranch(String),

    /// The local working copy could not be brought into the expected state
    #[error("local repository error: {0}")]
    LocalSync(String),

    /// Check status of a single PR could not be queried
    #[error("failed to fetch checks for #{number}: {message}")]
    CheckStatus {
        /// PR number
        number: u64,
        /// Underlying failure
        message: String,
    },

    /// A single PR could not be merged into the combined branch
    #[error("#{number} failed to merge: {message}")]
    MergeConflict {
        /// PR number
        number: u64,
        /// Underlying failure
        message: String,
    },

    /// Every selected PR was dropped by the check-status filter
    #[error("none of the selected pull requests are passing checks")]
    NoPassingPullRequests,

    /// Pushing the combined branch or creating the PR failed
    #[error("failed to submit combined PR: {0}")]
    Submission(String),

    /// An external command failed to spawn or exited non-zero
    #[error("`{program} {}` failed: {message}", args.join(" "))]
    Command {
        /// Executable name
        program: String,
        /// Arguments passed
        args: Vec<String>,
        /// Captured stderr or spawn error
        message: String,
    },

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Response decoding failed
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
