//! Local repository mutations
//!
//! The combine workflow never touches the working copy directly; it goes
//! through [`VcsService`]. The production implementation shells out to `git`.

mod git;

pub use git::GitCli;

use crate::error::Result;
use async_trait::async_trait;

/// Version-control service trait for local branch operations
#[async_trait]
pub trait VcsService: Send + Sync {
    /// Check out an existing branch
    async fn checkout(&self, branch: &str) -> Result<()>;

    /// Create `name` from `base` and check it out
    async fn create_branch(&self, name: &str, base: &str) -> Result<()>;

    /// Force-delete a local branch
    async fn delete_branch(&self, name: &str) -> Result<()>;

    /// Merge `source` into `target` without opening an editor
    async fn merge(&self, target: &str, source: &str) -> Result<()>;

    /// Abort an in-progress merge, restoring the pre-merge state
    async fn abort_merge(&self) -> Result<()>;

    /// Push `branch` to `remote`
    async fn push(&self, remote: &str, branch: &str) -> Result<()>;

    /// Pull `branch` from `remote`
    async fn pull(&self, remote: &str, branch: &str, fast_forward_only: bool) -> Result<()>;
}
