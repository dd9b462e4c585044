//! HTTP access to the GitHub REST API.
//!
//! Every request made by the checker goes through [`GitHubTransport`]. The
//! production implementation wraps an authenticated [`Octocrab`] client and
//! returns raw statuses, leaving the interpretation of non-success responses
//! to the callers.

mod error;

pub use error::TransportError;

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// A raw API response: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, decoded as UTF-8.
    pub body: String,
}

impl HostResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET-only view of the GitHub API.
///
/// Routes are relative to the API base URL (e.g. `/users/octocat/repos`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubTransport: Send + Sync {
    /// Issues a GET and returns the status together with the body.
    async fn fetch(&self, route: &str) -> Result<HostResponse, TransportError>;

    /// Issues a GET and returns only the status code.
    async fn probe(&self, route: &str) -> Result<u16, TransportError>;
}

/// [`GitHubTransport`] backed by an authenticated octocrab client.
#[derive(Clone)]
pub struct OctocrabTransport {
    octocrab: Octocrab,
}

impl OctocrabTransport {
    /// Builds a transport authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not a valid base URI or the client
    /// cannot be constructed.
    pub fn new(token: &str, api_url: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(api_url)?
            .build()?;
        Ok(Self { octocrab })
    }
}

#[async_trait]
impl GitHubTransport for OctocrabTransport {
    async fn fetch(&self, route: &str) -> Result<HostResponse, TransportError> {
        // `_get` leaves non-success statuses to us instead of mapping them to errors.
        let response = self.octocrab._get(route).await?;
        let status = response.status().as_u16();
        let body = self.octocrab.body_to_string(response).await?;
        debug!(route, status, "GET");
        Ok(HostResponse { status, body })
    }

    async fn probe(&self, route: &str) -> Result<u16, TransportError> {
        let response = self.octocrab._get(route).await?;
        let status = response.status().as_u16();
        debug!(route, status, "GET");
        Ok(status)
    }
}
