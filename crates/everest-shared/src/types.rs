//! Common types

/// Identifier type shared by flights, customers, and bookings.
///
/// Identifiers are unique per collection, immutable, and always >= 1.
/// The ledger allocates them as `max existing id + 1`.
pub type EntityId = u32;
