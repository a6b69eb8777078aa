//! # Everest Core - Domain Module
//!
//! Domain entities for the booking system.

pub mod booking;
pub mod customer;
pub mod flight;
pub mod record_status;

// Re-export all entities and enums
pub use booking::Booking;
pub use customer::Customer;
pub use flight::Flight;
pub use record_status::RecordStatus;
