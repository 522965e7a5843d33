//! CLI front end: progress rendering and the combine command

mod context;
mod style;

use anstream::{eprintln, println};
use async_trait::async_trait;
use context::CommandContext;
use multi_merge_prs::config::Config;
use multi_merge_prs::error::{Error, Result};
use multi_merge_prs::progress::ProgressCallback;
use multi_merge_prs::submit::Submission;
use multi_merge_prs::workflow::{self, RunOutcome};
use style::{Stylize, arrow, check};

/// Prints workflow progress to the terminal
///
/// Step messages only show in verbose mode; warnings always show.
pub struct CliProgress {
    verbose: bool,
}

impl CliProgress {
    /// Create a progress printer
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_message(&self, message: &str) {
        if self.verbose {
            println!("{message}");
        }
    }

    async fn on_warning(&self, message: &str) {
        println!("{} {}", ">> Warn:".warn(), message);
    }
}

/// Run the combine workflow with the production adapters
pub async fn run_combine(config: &Config) -> Result<()> {
    let ctx = CommandContext::new(config);
    let progress = CliProgress::new(config.verbose);

    if config.dry_run {
        println!(
            "{}",
            "Dry-run mode: nothing will be checked out, merged, pushed or created".muted()
        );
    }

    let outcome = workflow::run(
        config,
        &ctx.platform,
        &ctx.vcs,
        &ctx.prompter,
        &progress,
    )
    .await?;

    print_summary(&outcome);
    Ok(())
}

/// Print a fatal error and what was left behind
pub fn print_error(error: &Error) {
    eprintln!("{} {error}", ">> Error:".error());
    match error {
        Error::Submission(_) => {
            eprintln!(
                "{}",
                "   The combined branch and its merges were left in place for manual recovery."
                    .muted()
            );
        }
        Error::LocalSync(_) => {
            eprintln!(
                "{}",
                "   The local repository may be on an intermediate branch; check `git status`."
                    .muted()
            );
        }
        _ => {}
    }
}

fn print_summary(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::NothingSelected => {
            println!("{}", "No PRs selected to merge. Exiting".muted());
        }
        RunOutcome::Combined {
            combined,
            submission,
        } => {
            println!();
            println!(
                "{} {}",
                "Combined branch:".emphasis(),
                combined.branch.name.accent()
            );
            for merged in &combined.merged {
                println!("  {} {}", check(), merged.summary);
            }
            for (pr, reason) in &combined.skipped {
                println!("  {} #{} {}", "✗".warn(), pr.number, reason.muted());
            }

            match submission {
                Submission::Declined => {
                    println!("{}", "Combined PR not submitted".muted());
                }
                Submission::Created(request) => {
                    println!(
                        "{} {} {} {}",
                        "Submitted:".success(),
                        request.head.accent(),
                        arrow(),
                        request.base.accent()
                    );
                }
            }
        }
    }
}
