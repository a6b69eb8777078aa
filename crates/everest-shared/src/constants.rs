//! Application-wide constants

/// Base price assumed when a stored flight row omits the field.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;
/// Capacity assumed when a stored flight row omits the field.
pub const DEFAULT_CAPACITY: u32 = 150;
/// Password assumed when a stored customer row omits the field.
pub const DEFAULT_PASSWORD: &str = "default123";

/// Caller-side cancellation fee policy: share of the original booking fee.
pub const CANCELLATION_FEE_RATE: f64 = 0.15;

/// Field separator used in the data files.
pub const RECORD_SEPARATOR: &str = "::";

pub const FLIGHTS_FILE: &str = "flights.txt";
pub const CUSTOMERS_FILE: &str = "customers.txt";
pub const BOOKINGS_FILE: &str = "bookings.txt";
