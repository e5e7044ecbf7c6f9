//! gh-merge-pr - merge a GitHub pull request through the REST API

mod cli;

use anyhow::Context;
use clap::Parser;
use gh_merge_pr::config::{ConfigOverrides, resolve_config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gh-merge-pr")]
#[command(about = "Merge a GitHub pull request through the REST API")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Repository owner (user or organization)
    #[arg(long)]
    owner: Option<String>,

    /// Repository name
    #[arg(long)]
    repo: Option<String>,

    /// Pull request number
    #[arg(long = "pr")]
    pr_number: Option<u64>,

    /// Merge commit title
    #[arg(long = "title")]
    commit_title: Option<String>,

    /// Merge commit message
    #[arg(long = "message")]
    commit_message: Option<String>,

    /// GitHub API base URL
    #[arg(long)]
    api_base: Option<String>,

    /// Environment variable holding the GitHub token
    #[arg(long)]
    token_env: Option<String>,

    /// Print the request that would be sent, without sending it
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            pr_number: self.pr_number,
            commit_title: self.commit_title.clone(),
            commit_message: self.commit_message.clone(),
            api_base: self.api_base.clone(),
            token_env: self.token_env.clone(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config =
        resolve_config(cli.config.as_deref(), cli.overrides()).context("failed to load config")?;

    if cli.dry_run {
        cli::print_dry_run(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = cli::run_merge(config)
        .await
        .context("merge request failed")?;

    Ok(if outcome.is_merged() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
