//! Domain errors

use everest_shared::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Flight not found: {0}")]
    FlightNotFound(EntityId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(EntityId),

    #[error("Booking not found: {0}")]
    BookingNotFound(EntityId),

    #[error("Flight {0} is fully booked")]
    CapacityExceeded(EntityId),

    #[error("Customer {customer_id} already holds an active booking on flight {flight_id}")]
    DuplicateBooking {
        customer_id: EntityId,
        flight_id: EntityId,
    },

    #[error("Booking {0} is already cancelled")]
    AlreadyCancelled(EntityId),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}
