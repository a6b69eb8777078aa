// ============================================================================
// Everest Core - Customer Entity
// File: crates/everest-core/src/domain/customer.rs
// Description: Customer account with contact details and credentials
// ============================================================================

use everest_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RecordStatus;

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Customer {
    pub id: EntityId,

    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Phone must not be empty"))]
    pub phone: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Opaque credential, compared for equality only. Hashing is out of
    /// scope for this system.
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,

    pub status: RecordStatus,
}

impl Customer {
    pub fn new(
        id: EntityId,
        name: String,
        phone: String,
        email: String,
        password: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let customer = Self {
            id,
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            password,
            status: RecordStatus::Active,
        };

        customer.validate()?;
        Ok(customer)
    }

    /// Synthetic customer standing in for a hard-deleted record so that
    /// orphaned bookings still display.
    pub fn placeholder(id: EntityId) -> Self {
        Self {
            id,
            name: "N/A".to_string(),
            phone: "N/A".to_string(),
            email: "N/A".to_string(),
            password: String::new(),
            status: RecordStatus::SoftDeleted,
        }
    }

    /// Overwrite the four mutable fields in place, re-validating the result.
    pub fn update_details(
        &mut self,
        name: String,
        phone: String,
        email: String,
        password: String,
    ) -> Result<(), validator::ValidationErrors> {
        let updated = Self {
            id: self.id,
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            password,
            status: self.status,
        };
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn soft_delete(&mut self) {
        self.status = RecordStatus::SoftDeleted;
    }

    pub fn is_deleted(&self) -> bool {
        self.status.is_deleted()
    }

    pub fn details_short(&self) -> String {
        format!(
            "Customer #{} - {} - {} - {}",
            self.id, self.name, self.phone, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_customer() {
        let customer = Customer::new(
            1,
            "Asha Gurung".to_string(),
            "+977-1-5551234".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
        );
        assert!(customer.is_ok());
    }

    #[test]
    fn test_rejects_bad_email() {
        let customer = Customer::new(
            1,
            "Asha Gurung".to_string(),
            "+977-1-5551234".to_string(),
            "not-an-email".to_string(),
            "secret1".to_string(),
        );
        assert!(customer.is_err());
    }

    #[test]
    fn test_update_details_keeps_status() {
        let mut customer = Customer::new(
            1,
            "Asha Gurung".to_string(),
            "+977-1-5551234".to_string(),
            "asha@example.com".to_string(),
            "secret1".to_string(),
        )
        .unwrap();
        customer.soft_delete();
        customer
            .update_details(
                "Asha G.".to_string(),
                "+977-1-5559999".to_string(),
                "asha.g@example.com".to_string(),
                "secret2".to_string(),
            )
            .unwrap();
        assert!(customer.is_deleted());
        assert_eq!(customer.name, "Asha G.");
    }
}
