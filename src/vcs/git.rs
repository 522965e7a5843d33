//! `git` CLI implementation of [`VcsService`]

use crate::error::Result;
use crate::process;
use crate::vcs::VcsService;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

const GIT: &str = "git";

/// Version-control service backed by the `git` CLI
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    /// Repository to operate on (`git -C`), current directory when `None`
    repo_path: Option<PathBuf>,
    /// Log commands instead of running them
    dry_run: bool,
}

impl GitCli {
    /// Create a `git` adapter operating on the current directory
    pub const fn new(dry_run: bool) -> Self {
        Self {
            repo_path: None,
            dry_run,
        }
    }

    /// Operate on the repository at `path` instead of the current directory
    #[must_use]
    pub fn with_repo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.repo_path = Some(path.into());
        self
    }

    async fn exec(&self, args: &[&str]) -> Result<()> {
        debug!(?args, dry_run = self.dry_run, "git");
        if self.dry_run {
            return Ok(());
        }

        let mut full = Vec::with_capacity(args.len() + 2);
        if let Some(ref path) = self.repo_path {
            full.push("-C".to_string());
            full.push(path.to_string_lossy().into_owned());
        }
        full.extend(args.iter().map(|a| (*a).to_string()));

        process::run(GIT, &full).await?;
        Ok(())
    }
}

#[async_trait]
impl VcsService for GitCli {
    async fn checkout(&self, branch: &str) -> Result<()> {
        self.exec(&["checkout", branch]).await
    }

    async fn create_branch(&self, name: &str, base: &str) -> Result<()> {
        self.exec(&["checkout", "-b", name, base]).await
    }

    async fn delete_branch(&self, name: &str) -> Result<()> {
        self.exec(&["branch", "-D", name]).await
    }

    async fn merge(&self, target: &str, source: &str) -> Result<()> {
        self.checkout(target).await?;
        self.exec(&["merge", source, "--no-edit"]).await
    }

    async fn abort_merge(&self) -> Result<()> {
        self.exec(&["merge", "--abort"]).await
    }

    async fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.exec(&["push", remote, branch]).await
    }

    async fn pull(&self, remote: &str, branch: &str, fast_forward_only: bool) -> Result<()> {
        if fast_forward_only {
            self.exec(&["pull", remote, branch, "--ff-only"]).await
        } else {
            self.exec(&["pull", remote, branch]).await
        }
    }
}
