// ============================================================================
// Everest Core - Dynamic Pricing
// File: crates/everest-core/src/services/pricing.rs
// ============================================================================
//! Dynamic pricing for bookings.
//!
//! The fee rises as the flight approaches departure and as occupancy
//! increases, and never drops below the base price. The curve is a policy:
//! the coefficients below may be tuned, but the function must stay
//! monotonic in both inputs. The function is pure so the GUI/shell can
//! preview a fee before committing a booking.

use chrono::NaiveDate;
use everest_shared::constants::CANCELLATION_FEE_RATE;

/// Bookings inside this window before departure pay an urgency premium.
pub const URGENCY_WINDOW_DAYS: i64 = 30;
/// Premium at zero days to departure, as a fraction of base price.
pub const URGENCY_WEIGHT: f64 = 1.0;
/// Premium at full occupancy, as a fraction of base price.
pub const DEMAND_WEIGHT: f64 = 1.0;

/// Quote the fee for booking a seat on a flight as of a given date.
///
/// `active_bookings` is the flight's current active-booking count, before
/// the booking being priced.
pub fn quote(
    base_price: f64,
    departure_date: NaiveDate,
    as_of: NaiveDate,
    active_bookings: usize,
    capacity: u32,
) -> f64 {
    let days_to_departure = (departure_date - as_of).num_days().max(0);
    let urgency_days = (URGENCY_WINDOW_DAYS - days_to_departure).max(0) as f64;
    let urgency_factor = 1.0 + URGENCY_WEIGHT * urgency_days / URGENCY_WINDOW_DAYS as f64;

    let occupancy_ratio = if capacity == 0 {
        1.0
    } else {
        active_bookings as f64 / capacity as f64
    };
    let demand_factor = 1.0 + DEMAND_WEIGHT * occupancy_ratio;

    base_price * urgency_factor * demand_factor
}

/// Default caller-side cancellation fee policy: a flat share of the
/// original booking fee. This is not a ledger invariant; the ledger takes
/// whatever fee the caller passes in.
pub fn cancellation_fee_for(booking_fee: f64) -> f64 {
    CANCELLATION_FEE_RATE * booking_fee
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fee_never_below_base_price() {
        let departure = date(2026, 12, 24);
        for days_before in [0, 5, 30, 90, 365] {
            let as_of = departure - chrono::Duration::days(days_before);
            let fee = quote(100.0, departure, as_of, 0, 150);
            assert!(fee >= 100.0, "fee {fee} below base at {days_before} days out");
        }
    }

    #[test]
    fn test_monotonic_in_approaching_departure() {
        let departure = date(2026, 12, 24);
        let mut last = 0.0;
        for days_before in (0..=60).rev() {
            let as_of = departure - chrono::Duration::days(days_before);
            let fee = quote(100.0, departure, as_of, 10, 150);
            assert!(fee >= last, "fee dropped at {days_before} days out");
            last = fee;
        }
    }

    #[test]
    fn test_monotonic_in_occupancy() {
        let departure = date(2026, 12, 24);
        let as_of = date(2026, 10, 1);
        let mut last = 0.0;
        for active in 0..=150 {
            let fee = quote(100.0, departure, as_of, active, 150);
            assert!(fee >= last, "fee dropped at occupancy {active}");
            last = fee;
        }
    }

    #[test]
    fn test_after_departure_floors_at_zero_days() {
        let departure = date(2026, 6, 1);
        let at_departure = quote(100.0, departure, departure, 0, 150);
        let after = quote(100.0, departure, date(2026, 6, 10), 0, 150);
        assert_eq!(at_departure, after);
    }

    #[test]
    fn test_cancellation_fee_policy() {
        assert!((cancellation_fee_for(200.0) - 30.0).abs() < f64::EPSILON);
    }
}
