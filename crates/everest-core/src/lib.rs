//! # Everest Core
//!
//! Domain entities, booking ledger, and pricing for the Everest Airlines
//! booking system.

pub mod domain;
pub mod error;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use services::ledger::BookingLedger;
