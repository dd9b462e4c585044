//! Runner error types.

use thiserror::Error;

/// Errors in the supplied run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was missing or blank.
    #[error("Missing required value: {field}")]
    Missing { field: &'static str },

    /// A value was present but unusable.
    #[error("Invalid value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Errors that can occur while running the checker.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Configuration validation errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Client(#[from] octocrab::Error),

    /// The repository listing could not be obtained.
    #[error(transparent)]
    Listing(#[from] crate::listing::ListingError),

    /// A CODEOWNERS probe could not be completed.
    #[error(transparent)]
    Transport(#[from] crate::client::TransportError),

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
