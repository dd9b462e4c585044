#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod listing;
pub mod ownership;
pub mod report;
pub mod runner;
pub mod summary;

pub use client::{GitHubTransport, HostResponse, OctocrabTransport, TransportError};
pub use listing::{list_repositories, parse_repositories, ListingError, Repository};
pub use ownership::{check_ownership, has_codeowners, OwnershipStatus, ProbeMode, CANDIDATE_PATHS};
pub use report::report_line;
pub use runner::{ConfigError, Runner, RunnerConfig, RunnerError, DEFAULT_API_URL};
pub use summary::RunSummary;
