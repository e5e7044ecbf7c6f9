//! Merge command - merge the configured PR

use crate::cli::style::{CHECK, CROSS, Stylize};
use anstream::println;
use gh_merge_pr::auth::Credential;
use gh_merge_pr::config::MergeConfig;
use gh_merge_pr::error::{Error, Result};
use gh_merge_pr::merge::{MergeInvoker, build_merge_request};
use gh_merge_pr::platform::GitHubTransport;
use gh_merge_pr::types::MergeOutcome;
use tracing::warn;

/// Run the merge command
///
/// Sends the merge request once and prints the outcome. A missing token is
/// logged but does not stop the request.
pub async fn run_merge(config: MergeConfig) -> Result<MergeOutcome> {
    let credential = Credential::from_env(&config.token_env);
    if !credential.is_present() {
        warn!(
            var = %config.token_env,
            "token variable is not set, sending the request without a token"
        );
    }

    let transport = GitHubTransport::new()?;
    let invoker = MergeInvoker::new(config, credential, transport);
    let outcome = match invoker.invoke().await {
        Ok(outcome) => outcome,
        Err(e @ Error::RejectedBody { status, .. }) => {
            // Report the status before the body fault propagates
            println!("{} {}", CROSS.warn(), format!("Merge failed: {status}").warn());
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    print_outcome(&outcome);
    Ok(outcome)
}

/// Print what would be sent, with the token redacted
pub fn print_dry_run(config: &MergeConfig) -> Result<()> {
    let credential = Credential::from_env(&config.token_env);
    let request = build_merge_request(config, &credential)?;

    let token_state = if credential.is_present() {
        format!("token <{}>", config.token_env)
    } else {
        format!("token (empty, {} is not set)", config.token_env)
    };

    println!("{}:", "Merge request".emphasis());
    println!();
    println!("  {} {}", "PUT".accent(), request.url);
    println!("  Authorization: {}", token_state.muted());
    println!("  Accept: {}", request.accept);
    println!("  {}", request.body);
    println!();
    println!("{}", "Run without --dry-run to send it.".muted());
    Ok(())
}

fn print_outcome(outcome: &MergeOutcome) {
    match outcome {
        MergeOutcome::Merged { sha, message, .. } => {
            println!("{} {}", CHECK.success(), outcome.headline().success());
            if let Some(sha) = sha {
                println!("   Commit: {}", sha.accent());
            }
            if let Some(message) = message {
                println!("   {}", message.muted());
            }
        }
        MergeOutcome::Rejected { body, .. } => {
            println!("{} {}", CROSS.warn(), outcome.headline().warn());
            println!("{body}");
        }
    }
}
