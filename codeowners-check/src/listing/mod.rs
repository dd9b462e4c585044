//! Repository listing for a GitHub account.
//!
//! A single request to `/users/{account}/repos` is issued. Pagination links
//! are not followed, so accounts with more repositories than fit in one page
//! are truncated to the first page.

mod error;
mod repository;

pub use error::ListingError;
pub use repository::Repository;

use crate::client::GitHubTransport;
use serde::Deserialize;
use tracing::{info, info_span, warn, Instrument};

/// Body GitHub returns alongside error statuses.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Lists the repositories owned by `account`.
///
/// # Arguments
///
/// * `transport` - Authenticated GitHub transport
/// * `account` - User whose repositories are listed
/// * `per_page` - Optional page size; the API default applies when `None`
///
/// # Errors
///
/// Returns [`ListingError::Rejected`] on a non-success status, and one of the
/// decoding variants when the body is not an array of repository records.
pub async fn list_repositories<T>(
    transport: &T,
    account: &str,
    per_page: Option<u8>,
) -> Result<Vec<Repository>, ListingError>
where
    T: GitHubTransport + ?Sized,
{
    let span = info_span!("list_repositories", account = %account);

    async {
        let route = listing_route(account, per_page);
        let response = transport.fetch(&route).await?;

        if !response.is_success() {
            let message = error_message(&response.body);
            warn!(status = response.status, message = %message, "Listing rejected");
            return Err(ListingError::Rejected {
                status: response.status,
                message,
            });
        }

        let repositories = parse_repositories(&response.body)?;
        info!(count = repositories.len(), "Listed repositories");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Builds the listing route for an account.
fn listing_route(account: &str, per_page: Option<u8>) -> String {
    match per_page {
        Some(per_page) => format!("/users/{account}/repos?per_page={per_page}"),
        None => format!("/users/{account}/repos"),
    }
}

/// Extracts GitHub's `message` field, falling back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(error) => error.message,
        Err(_) => body.trim().to_string(),
    }
}

/// Decodes a listing body into validated repository records.
///
/// # Errors
///
/// Rejects the whole listing on the first malformed entry.
pub fn parse_repositories(body: &str) -> Result<Vec<Repository>, ListingError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(ListingError::InvalidJson)?;
    let serde_json::Value::Array(entries) = value else {
        return Err(ListingError::UnexpectedShape);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let repository: Repository = serde_json::from_value(entry)
                .map_err(|source| ListingError::MalformedRecord { index, source })?;
            if !repository.has_valid_full_name() {
                return Err(ListingError::InvalidFullName {
                    index,
                    full_name: repository.full_name,
                });
            }
            Ok(repository)
        })
        .collect()
}
