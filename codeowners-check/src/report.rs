//! Console report lines.

use crate::ownership::OwnershipStatus;

/// Formats the report line for one repository.
#[must_use]
pub fn report_line(full_name: &str, status: &OwnershipStatus) -> String {
    match status {
        OwnershipStatus::Present { .. } => format!("{full_name} has a CODEOWNERS file"),
        OwnershipStatus::Absent => format!("No CODEOWNERS file in {full_name}"),
        OwnershipStatus::Indeterminate { status } => {
            format!("Could not determine CODEOWNERS status for {full_name} (HTTP {status})")
        }
    }
}
