//! Ownership check outcomes.

/// How non-success probe statuses are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProbeMode {
    /// Every non-success status means the file does not exist.
    #[default]
    Lenient,

    /// Only 404 means the file does not exist; other failures make the
    /// outcome indeterminate unless another candidate path succeeds.
    Strict,
}

/// Result of checking a repository for a CODEOWNERS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipStatus {
    /// A CODEOWNERS file exists.
    Present {
        /// Candidate path that answered with success.
        path: &'static str,
    },

    /// No candidate path has a CODEOWNERS file.
    Absent,

    /// A probe failed for a reason other than "not found".
    Indeterminate {
        /// First non-404 failure status seen.
        status: u16,
    },
}

impl OwnershipStatus {
    /// Returns true if a CODEOWNERS file was found.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// Returns the status as a string for logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present { .. } => "present",
            Self::Absent => "absent",
            Self::Indeterminate { .. } => "indeterminate",
        }
    }
}
