//! Orchestrates a CODEOWNERS check run.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_API_URL};
pub use error::{ConfigError, RunnerError};

use crate::client::{GitHubTransport, OctocrabTransport};
use crate::listing::list_repositories;
use crate::ownership::check_ownership;
use crate::report::report_line;
use crate::summary::RunSummary;
use std::io::Write;
use tracing::{info, warn};

/// Lists an account's repositories and reports CODEOWNERS coverage.
pub struct Runner<T = OctocrabTransport> {
    config: RunnerConfig,
    transport: T,
}

impl Runner<OctocrabTransport> {
    /// Builds a runner talking to the configured GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the configuration is invalid and
    /// [`RunnerError::Client`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let transport = OctocrabTransport::new(config.token(), config.api_url())?;
        Ok(Self { config, transport })
    }
}

impl<T: GitHubTransport> Runner<T> {
    /// Builds a runner over an existing transport.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the configuration is invalid.
    pub fn with_transport(config: RunnerConfig, transport: T) -> Result<Self, RunnerError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Executes the run, writing one report line per repository to `out`.
    ///
    /// Repositories are checked one at a time in listing order.
    ///
    /// # Errors
    ///
    /// Fails if the listing cannot be obtained, a probe cannot be completed,
    /// or `out` cannot be written.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, RunnerError> {
        let account = self.config.account().trim();
        info!(account = %account, "Listing repositories");

        let repositories =
            list_repositories(&self.transport, account, self.config.per_page()).await?;
        if repositories.is_empty() {
            warn!(account = %account, "No repositories found");
        }

        let mut summary = RunSummary::new();
        for repository in &repositories {
            let status =
                check_ownership(&self.transport, &repository.full_name, self.config.mode())
                    .await?;
            info!(repo = %repository.full_name, status = status.as_str(), "Checked repository");

            writeln!(out, "{}", report_line(&repository.full_name, &status))?;
            summary.record(&status);
        }

        out.flush()?;
        Ok(summary)
    }
}
