//! Domain services (business logic)

pub mod auth_service;
pub mod ledger;
pub mod pricing;

pub use auth_service::{Authenticator, Role, UserAccount};
pub use ledger::BookingLedger;
