//! CODEOWNERS detection.
//!
//! GitHub honours a CODEOWNERS file at the repository root, under `docs/` or
//! under `.github/`. Each location is probed through the contents API in a
//! fixed order and the first success wins.

mod status;

pub use status::{OwnershipStatus, ProbeMode};

use crate::client::{GitHubTransport, TransportError};
use tracing::{debug, info_span, Instrument};

/// Locations probed for a CODEOWNERS file, in order.
pub const CANDIDATE_PATHS: [&str; 3] = ["CODEOWNERS", "docs/CODEOWNERS", ".github/CODEOWNERS"];

const NOT_FOUND: u16 = 404;

/// Checks a repository for a CODEOWNERS file.
///
/// Probing stops at the first candidate path that answers with a success
/// status, so at most [`CANDIDATE_PATHS`]`.len()` requests are made.
///
/// # Arguments
///
/// * `transport` - Authenticated GitHub transport
/// * `full_name` - Repository in "owner/name" format
/// * `mode` - How non-success statuses are classified
///
/// # Errors
///
/// Returns [`TransportError`] if a request cannot be completed.
pub async fn check_ownership<T>(
    transport: &T,
    full_name: &str,
    mode: ProbeMode,
) -> Result<OwnershipStatus, TransportError>
where
    T: GitHubTransport + ?Sized,
{
    let span = info_span!("check_ownership", repo = %full_name);

    async {
        let mut indeterminate = None;

        for path in CANDIDATE_PATHS {
            let status = transport.probe(&contents_route(full_name, path)).await?;

            if (200..300).contains(&status) {
                debug!(path, "CODEOWNERS found");
                return Ok(OwnershipStatus::Present { path });
            }

            debug!(path, status, "CODEOWNERS not found");
            if mode == ProbeMode::Strict && status != NOT_FOUND && indeterminate.is_none() {
                indeterminate = Some(status);
            }
        }

        Ok(match indeterminate {
            Some(status) => OwnershipStatus::Indeterminate { status },
            None => OwnershipStatus::Absent,
        })
    }
    .instrument(span)
    .await
}

/// Returns true if any candidate path has a CODEOWNERS file.
///
/// Every non-success status counts as "not there".
///
/// # Errors
///
/// Returns [`TransportError`] if a request cannot be completed.
pub async fn has_codeowners<T>(transport: &T, full_name: &str) -> Result<bool, TransportError>
where
    T: GitHubTransport + ?Sized,
{
    let status = check_ownership(transport, full_name, ProbeMode::Lenient).await?;
    Ok(status.is_present())
}

/// Builds the contents API route for a file in a repository.
fn contents_route(full_name: &str, path: &str) -> String {
    format!("/repos/{full_name}/contents/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockGitHubTransport;
    use mockall::Sequence;

    /// Expects one probe per `(path, status)` pair, in order.
    fn scripted(full_name: &str, responses: &[(&str, u16)]) -> MockGitHubTransport {
        let mut transport = MockGitHubTransport::new();
        let mut seq = Sequence::new();

        for &(path, status) in responses {
            let route = contents_route(full_name, path);
            transport
                .expect_probe()
                .once()
                .in_sequence(&mut seq)
                .withf(move |r| r == route)
                .returning(move |_| Ok(status));
        }

        transport
    }

    #[test]
    fn builds_contents_route() {
        assert_eq!(
            contents_route("org/a", ".github/CODEOWNERS"),
            "/repos/org/a/contents/.github/CODEOWNERS"
        );
    }

    #[tokio::test]
    async fn stops_at_first_success() {
        let transport = scripted("org/a", &[("CODEOWNERS", 200)]);

        let status = check_ownership(&transport, "org/a", ProbeMode::Lenient)
            .await
            .unwrap();

        assert_eq!(status, OwnershipStatus::Present { path: "CODEOWNERS" });
    }

    #[tokio::test]
    async fn finds_file_in_last_location() {
        let transport = scripted(
            "org/a",
            &[
                ("CODEOWNERS", 404),
                ("docs/CODEOWNERS", 404),
                (".github/CODEOWNERS", 200),
            ],
        );

        assert!(has_codeowners(&transport, "org/a").await.unwrap());
    }

    #[tokio::test]
    async fn absent_after_three_probes() {
        let transport = scripted(
            "org/b",
            &[
                ("CODEOWNERS", 404),
                ("docs/CODEOWNERS", 404),
                (".github/CODEOWNERS", 404),
            ],
        );

        assert!(!has_codeowners(&transport, "org/b").await.unwrap());
    }

    #[tokio::test]
    async fn lenient_collapses_failures_into_absent() {
        let transport = scripted(
            "org/b",
            &[
                ("CODEOWNERS", 403),
                ("docs/CODEOWNERS", 500),
                (".github/CODEOWNERS", 404),
            ],
        );

        let status = check_ownership(&transport, "org/b", ProbeMode::Lenient)
            .await
            .unwrap();

        assert_eq!(status, OwnershipStatus::Absent);
    }

    #[tokio::test]
    async fn strict_reports_first_non_404_failure() {
        let transport = scripted(
            "org/b",
            &[
                ("CODEOWNERS", 404),
                ("docs/CODEOWNERS", 502),
                (".github/CODEOWNERS", 403),
            ],
        );

        let status = check_ownership(&transport, "org/b", ProbeMode::Strict)
            .await
            .unwrap();

        assert_eq!(status, OwnershipStatus::Indeterminate { status: 502 });
    }

    #[tokio::test]
    async fn strict_prefers_later_success() {
        let transport = scripted(
            "org/a",
            &[("CODEOWNERS", 500), ("docs/CODEOWNERS", 200)],
        );

        let status = check_ownership(&transport, "org/a", ProbeMode::Strict)
            .await
            .unwrap();

        assert_eq!(
            status,
            OwnershipStatus::Present {
                path: "docs/CODEOWNERS"
            }
        );
    }

    #[tokio::test]
    async fn strict_treats_404_as_absent() {
        let transport = scripted(
            "org/b",
            &[
                ("CODEOWNERS", 404),
                ("docs/CODEOWNERS", 404),
                (".github/CODEOWNERS", 404),
            ],
        );

        let status = check_ownership(&transport, "org/b", ProbeMode::Strict)
            .await
            .unwrap();

        assert_eq!(status, OwnershipStatus::Absent);
    }
}
