//! CLI for the Contribution Repos Generator.
//!
//! This tool generates a ros2.repos file pointing at a contribution pull
//! request's fork and branch, publishes it as a public gist, and prints the
//! raw content URL.

use clap::Parser;
use contribution_repos_generator::{Credentials, Runner, RunnerConfig, RunnerError};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Contribution Repos Generator - Generate a repos file for a contribution pull request.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the pull request to generate the repos file for.
    pr_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(raw_url) => {
            println!("{raw_url}");
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<String, RunnerError> {
    let token = std::env::var("GITHUB_TOKEN").ok();
    let credentials = Credentials::resolve(token)?;
    let config = RunnerConfig::new(args.pr_url, credentials);
    let runner = Runner::new(config)?;
    runner.run().await
}
