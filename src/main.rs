//! gh-multi-merge-prs - combine open pull requests into a single PR

mod cli;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use multi_merge_prs::config::{Config, DEFAULT_BASE, DEFAULT_LIMIT};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Combine multiple open pull requests into a single branch and PR
#[derive(Debug, Parser)]
#[command(name = "gh-multi-merge-prs", version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Query used to find combinable PRs, e.g. "author:app/dependabot"
    #[arg(long, default_value = "")]
    query: String,

    /// Maximum number of PRs that will be combined
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Prompt for selecting the PRs to combine
    #[arg(long)]
    interactive: bool,

    /// Combine matching PRs even if they are not passing checks
    #[arg(long)]
    skip_pr_check: bool,

    /// Do not check out, merge, push or create anything; implies --verbose
    #[arg(long)]
    dry_run: bool,

    /// Print verbose output
    #[arg(long)]
    verbose: bool,

    /// Repository to operate on, as OWNER/REPO
    #[arg(long, env = "GH_REPO")]
    repo: Option<String>,

    /// Base branch proposed for the combined PR
    #[arg(long, default_value = DEFAULT_BASE)]
    base: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::new(&cli.query) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {e}");
            let _ = Cli::command().write_help(&mut std::io::stderr());
            return ExitCode::FAILURE;
        }
    };

    let invocation_args: Vec<String> = std::env::args().skip(1).collect();
    let config = config
        .with_limit(cli.limit)
        .with_interactive(cli.interactive)
        .with_skip_pr_check(cli.skip_pr_check)
        .with_dry_run(cli.dry_run)
        .with_verbose(cli.verbose)
        .with_repo(cli.repo)
        .with_base(cli.base)
        .with_invocation_args(&invocation_args);

    if let Err(e) = init_logging(config.verbose) {
        eprintln!("warning: {e:#}");
    }

    match cli::run_combine(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_directive = if verbose {
        "warn,multi_merge_prs=debug,gh_multi_merge_prs=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
