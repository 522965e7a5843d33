//! Run configuration
//!
//! Built once from the command line and passed by reference to every
//! component. Nothing reads flags from global state.

use crate::error::{Error, Result};

/// Default number of PRs fetched by the search query
pub const DEFAULT_LIMIT: usize = 50;

/// Default base branch proposed when submitting
pub const DEFAULT_BASE: &str = "main";

/// Immutable settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Search filter for candidate PRs
    pub query: String,
    /// Maximum number of PRs fetched
    pub limit: usize,
    /// Narrow the fetched PRs with a multi-select prompt
    pub interactive: bool,
    /// Combine PRs regardless of their check status
    pub skip_pr_check: bool,
    /// Skip every mutating external call
    pub dry_run: bool,
    /// Detailed logging (always on for dry runs)
    pub verbose: bool,
    /// `OWNER/REPO` override forwarded to the hosting CLI
    pub repo: Option<String>,
    /// Base branch proposed at the submission prompt
    pub base: String,
    /// The command line as typed, quoted for display in the PR body
    pub invocation: String,
}

impl Config {
    /// Create a configuration for `query` with every other setting at its default
    ///
    /// Fails with [`Error::Usage`] if the query is empty.
    pub fn new(query: impl Into<String>) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(Error::Usage("--query is required".to_string()));
        }
        let invocation = render_invocation(&["--query", &query]);
        Ok(Self {
            query,
            limit: DEFAULT_LIMIT,
            interactive: false,
            skip_pr_check: false,
            dry_run: false,
            verbose: false,
            repo: None,
            base: DEFAULT_BASE.to_string(),
            invocation,
        })
    }

    /// Set the search limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable or disable interactive selection
    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Enable or disable the check-status filter bypass
    #[must_use]
    pub fn with_skip_pr_check(mut self, skip: bool) -> Self {
        self.skip_pr_check = skip;
        self
    }

    /// Enable or disable dry-run mode. Dry runs are always verbose.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self.verbose = self.verbose || dry_run;
        self
    }

    /// Enable or disable verbose logging. Ignored when dry-run is on.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose || self.dry_run;
        self
    }

    /// Set the repository override
    #[must_use]
    pub fn with_repo(mut self, repo: Option<String>) -> Self {
        self.repo = repo.filter(|r| !r.trim().is_empty());
        self
    }

    /// Set the base branch proposed at submission
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Record the arguments the tool was invoked with
    #[must_use]
    pub fn with_invocation_args<S: AsRef<str>>(mut self, args: &[S]) -> Self {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        self.invocation = render_invocation(&args);
        self
    }
}

/// Name the tool is invoked by as a `gh` extension
pub const INVOCATION_NAME: &str = "gh multi-merge-prs";

fn render_invocation(args: &[&str]) -> String {
    let quoted = shlex::try_join(args.iter().copied())
        .unwrap_or_else(|_| args.join(" "));
    if quoted.is_empty() {
        INVOCATION_NAME.to_string()
    } else {
        format!("{INVOCATION_NAME} {quoted}")
    }
}
