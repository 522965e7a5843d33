//! `gh` CLI implementation of [`HostingService`]

use crate::error::Result;
use crate::platform::HostingService;
use crate::process;
use crate::types::{CreatePrRequest, PullRequest};
use async_trait::async_trait;
use tracing::debug;

const GH: &str = "gh";

/// Fields requested from `gh pr list`
const PR_FIELDS: &str = "number,headRefName,title,url";

/// Template rendering a PR as `title (#number) @author`
const SUMMARY_TEMPLATE: &str = "{{.title}} (#{{.number}}) @{{.author.login}}";

/// Hosting service backed by the `gh` CLI
#[derive(Debug, Clone, Default)]
pub struct GhCli {
    /// `OWNER/REPO` override appended to every `gh pr` call
    repo: Option<String>,
    /// Skip `gh pr checkout` and `gh pr create`
    dry_run: bool,
}

impl GhCli {
    /// Create a `gh` adapter
    pub const fn new(repo: Option<String>, dry_run: bool) -> Self {
        Self { repo, dry_run }
    }

    /// Arguments for a `gh pr <subcommand>` call, with the repo override applied
    fn pr_args(&self, args: &[&str]) -> Vec<String> {
        let mut full: Vec<String> = std::iter::once("pr")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        if let Some(ref repo) = self.repo {
            full.push("--repo".to_string());
            full.push(repo.clone());
        }
        full
    }

    /// Arguments for `gh repo view`, which takes the repository positionally
    fn repo_view_args(&self, json: &str, jq: &str) -> Vec<String> {
        let mut full = vec!["repo".to_string(), "view".to_string()];
        if let Some(ref repo) = self.repo {
            full.push(repo.clone());
        }
        full.extend(["--json", json, "--jq", jq].map(String::from));
        full
    }

    fn search_args(&self, query: &str, limit: usize) -> Vec<String> {
        let limit = limit.to_string();
        self.pr_args(&[
            "list", "--search", query, "--limit", &limit, "--json", PR_FIELDS,
        ])
    }

    fn create_args(&self, request: &CreatePrRequest) -> Vec<String> {
        self.pr_args(&[
            "create",
            "-B",
            &request.base,
            "--head",
            &request.head,
            "--title",
            &request.title,
            "--body",
            &request.body,
            "--label",
            &request.label,
        ])
    }
}

#[async_trait]
impl HostingService for GhCli {
    async fn search_pull_requests(&self, query: &str, limit: usize) -> Result<Vec<PullRequest>> {
        debug!(query, limit, "searching pull requests");
        let stdout = process::run(GH, &self.search_args(query, limit)).await?;
        let prs: Vec<PullRequest> = serde_json::from_str(&stdout)?;
        debug!(count = prs.len(), "found pull requests");
        Ok(prs)
    }

    async fn pr_checks(&self, pr_number: u64) -> Result<String> {
        debug!(pr_number, "fetching checks");
        process::run(GH, &self.pr_args(&["checks", &pr_number.to_string()])).await
    }

    async fn checkout_pr(&self, pr_number: u64) -> Result<()> {
        debug!(pr_number, dry_run = self.dry_run, "checking out PR");
        if self.dry_run {
            return Ok(());
        }
        process::run(GH, &self.pr_args(&["checkout", &pr_number.to_string()])).await?;
        Ok(())
    }

    async fn view_pr_summary(&self, pr_number: u64) -> Result<String> {
        debug!(pr_number, "viewing PR");
        let args = self.pr_args(&[
            "view",
            &pr_number.to_string(),
            "--json",
            "title,author,number",
            "--template",
            SUMMARY_TEMPLATE,
        ]);
        let stdout = process::run(GH, &args).await?;
        Ok(stdout.trim().to_string())
    }

    async fn create_pr(&self, request: &CreatePrRequest) -> Result<()> {
        debug!(
            head = %request.head,
            base = %request.base,
            dry_run = self.dry_run,
            "creating PR"
        );
        if self.dry_run {
            return Ok(());
        }
        process::run(GH, &self.create_args(request)).await?;
        debug!("created PR");
        Ok(())
    }

    async fn default_branch(&self) -> Result<String> {
        let args = self.repo_view_args("defaultBranchRef", ".defaultBranchRef.name");
        let stdout = process::run(GH, &args).await?;
        Ok(stdout.trim().to_string())
    }

    async fn current_user_login(&self) -> Result<String> {
        let args = ["api", "user", "--jq", ".login"].map(String::from);
        let stdout = process::run(GH, &args).await?;
        Ok(stdout.trim().to_string())
    }

    async fn repository(&self) -> Result<String> {
        let args = self.repo_view_args("nameWithOwner", ".nameWithOwner");
        let stdout = process::run(GH, &args).await?;
        Ok(stdout.trim().to_string())
    }

    async fn fork_owner(&self) -> Result<String> {
        let args = self.repo_view_args("owner", ".owner.login");
        let stdout = process::run(GH, &args).await?;
        let owner = stdout.trim().to_string();
        debug!(owner = %owner, "fork detected");
        Ok(owner)
    }
}
