//! CLI for the CODEOWNERS checker.
//!
//! Lists the repositories of a GitHub account and prints one line per
//! repository stating whether it has a CODEOWNERS file.

use clap::Parser;
use codeowners_check::{ProbeMode, RunSummary, Runner, RunnerConfig, RunnerError, DEFAULT_API_URL};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// CODEOWNERS Check - Report which repositories of an account lack a CODEOWNERS file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Account whose repositories are checked.
    #[arg(long, env = "GITHUB_USER")]
    user: String,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Base URL of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: Url,

    /// Repositories requested in the single listing call (API default when unset).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    per_page: Option<u8>,

    /// Only treat 404 as "no file"; report other failures as indeterminate.
    #[arg(long)]
    strict: bool,

    /// Print totals after the report.
    #[arg(long)]
    summary: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // octocrab talks TLS through rustls; pin the provider before building the client
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();
    let show_summary = args.summary;

    match run(args).await {
        Ok(summary) => {
            if show_summary {
                print_summary(&summary);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout carries only the report.
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the runner configuration from parsed arguments.
fn build_config(args: Args) -> RunnerConfig {
    let mode = if args.strict {
        ProbeMode::Strict
    } else {
        ProbeMode::Lenient
    };
    let mut config = RunnerConfig::new(args.user, args.token)
        .with_api_url(args.api_url.as_str().trim_end_matches('/'))
        .with_mode(mode);
    if let Some(per_page) = args.per_page {
        config = config.with_per_page(per_page);
    }
    config
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let runner = Runner::new(build_config(args))?;
    let mut stdout = std::io::stdout().lock();
    runner.run(&mut stdout).await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Repositories checked: {}", summary.repositories_checked);
    println!("  With CODEOWNERS: {}", summary.with_codeowners);
    println!("  Without CODEOWNERS: {}", summary.without_codeowners);
    if summary.indeterminate > 0 {
        println!("  Indeterminate: {}", summary.indeterminate);
    }
    if summary.repositories_checked > 0 && summary.all_covered() {
        println!("  Every repository has a CODEOWNERS file.");
    }
}
