//! Repository listing error types.

use crate::client::TransportError;
use thiserror::Error;

/// Errors that can occur while listing an account's repositories.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The request itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// GitHub answered with a non-success status.
    #[error("Repository listing failed with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The body was not valid JSON.
    #[error("Repository listing is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The body was JSON but not an array of repositories.
    #[error("Repository listing is not a JSON array")]
    UnexpectedShape,

    /// An entry could not be decoded as a repository record.
    #[error("Malformed repository record at index {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// An entry carried a `full_name` that is not `owner/repo`.
    #[error("Invalid repository full name at index {index}: '{full_name}'")]
    InvalidFullName { index: usize, full_name: String },
}
