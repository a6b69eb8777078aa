// ============================================================================
// Everest Core - Record Status
// File: crates/everest-core/src/domain/record_status.rs
// Description: Soft-delete lifecycle status for flights and customers
// ============================================================================

use serde::{Deserialize, Serialize};

/// Lifecycle status for records that support soft deletion.
///
/// Soft-deleted records stay in storage and are retrievable through the
/// "all" queries, but are excluded from default listings and from
/// new-booking eligibility. Physical removal is a separate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    SoftDeleted,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::SoftDeleted => "deleted",
        }
    }

    pub fn from_deleted_flag(deleted: bool) -> Self {
        if deleted {
            RecordStatus::SoftDeleted
        } else {
            RecordStatus::Active
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, RecordStatus::SoftDeleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_flag_round_trip() {
        assert!(RecordStatus::from_deleted_flag(true).is_deleted());
        assert!(!RecordStatus::from_deleted_flag(false).is_deleted());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(RecordStatus::Active.as_str(), "active");
        assert_eq!(RecordStatus::SoftDeleted.as_str(), "deleted");
    }
}
