//! Run summary types.

use crate::ownership::OwnershipStatus;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of repositories returned by the listing.
    pub repositories_checked: usize,

    /// Repositories with a CODEOWNERS file.
    pub with_codeowners: usize,

    /// Repositories without a CODEOWNERS file.
    pub without_codeowners: usize,

    /// Repositories whose status could not be determined (strict mode only).
    pub indeterminate: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with one repository's outcome.
    pub fn record(&mut self, status: &OwnershipStatus) {
        self.repositories_checked += 1;
        match status {
            OwnershipStatus::Present { .. } => self.with_codeowners += 1,
            OwnershipStatus::Absent => self.without_codeowners += 1,
            OwnershipStatus::Indeterminate { .. } => self.indeterminate += 1,
        }
    }

    /// Returns true if every checked repository has a CODEOWNERS file.
    #[must_use]
    pub fn all_covered(&self) -> bool {
        self.with_codeowners == self.repositories_checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_status() {
        let mut summary = RunSummary::new();

        summary.record(&OwnershipStatus::Present {
            path: ".github/CODEOWNERS",
        });
        summary.record(&OwnershipStatus::Absent);
        summary.record(&OwnershipStatus::Indeterminate { status: 500 });

        assert_eq!(summary.repositories_checked, 3);
        assert_eq!(summary.with_codeowners, 1);
        assert_eq!(summary.without_codeowners, 1);
        assert_eq!(summary.indeterminate, 1);
        assert!(!summary.all_covered());
    }

    #[test]
    fn empty_run_is_covered() {
        assert!(RunSummary::new().all_covered());
    }
}
