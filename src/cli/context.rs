//! Shared command context
//!
//! Builds the production adapters from the run configuration.

use multi_merge_prs::config::Config;
use multi_merge_prs::platform::GhCli;
use multi_merge_prs::prompt::DialoguerPrompter;
use multi_merge_prs::vcs::GitCli;

/// Adapters used by a CLI run
///
/// Dry-run is applied here, at the adapter level: the workflow itself never
/// checks the flag before calling a mutating operation.
pub struct CommandContext {
    /// `gh` CLI adapter
    pub platform: GhCli,
    /// `git` CLI adapter (current directory)
    pub vcs: GitCli,
    /// Terminal prompts
    pub prompter: DialoguerPrompter,
}

impl CommandContext {
    /// Create the context for `config`
    pub fn new(config: &Config) -> Self {
        Self {
            platform: GhCli::new(config.repo.clone(), config.dry_run),
            vcs: GitCli::new(config.dry_run),
            prompter: DialoguerPrompter,
        }
    }
}
