//! Repository record returned by the listing endpoint.

use serde::Deserialize;

/// A repository owned by the scanned account.
///
/// Only `full_name` is read from the API response; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// Full repository name in "owner/name" format.
    pub full_name: String,
}

impl Repository {
    /// Creates a record from a full name without validating it.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }

    /// Returns true if `full_name` is exactly two non-empty `/`-separated segments.
    #[must_use]
    pub fn has_valid_full_name(&self) -> bool {
        match self.full_name.split_once('/') {
            Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
            None => false,
        }
    }
}
