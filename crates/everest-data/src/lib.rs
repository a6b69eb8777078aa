//! # Everest Data
//!
//! Flat-file persistence boundary for the booking ledger. Each entity type
//! lives in its own line-oriented text file; this crate loads them into a
//! [`everest_core::BookingLedger`] at startup (repairing or discarding
//! dangling references) and serializes the full ledger state back on save.
//!
//! This is the only crate that performs I/O.

pub mod error;
pub mod flatfile;
pub mod store;

pub use error::DataError;
pub use store::LedgerStore;
