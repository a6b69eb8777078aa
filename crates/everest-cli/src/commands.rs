//! Shell commands and their execution against the ledger.
//!
//! Each command translates one user action into ledger operations and
//! renders the result for display. Commands never touch the data files;
//! persistence happens in `main` at startup and shutdown.

use std::fmt::Write as _;

use chrono::NaiveDate;
use everest_core::services::{pricing, Authenticator};
use everest_core::{BookingLedger, DomainError};
use everest_shared::EntityId;

pub const HELP_TEXT: &str = "\
Commands:
  listflights                          list active flights
  listcustomers                        list active customers
  showflight <flight id>               show flight details and passengers
  showcustomer <customer id>           show customer details and bookings
  addflight                            add a new flight (interactive)
  addcustomer                          add a new customer (interactive)
  addbooking <customer id> <flight id> book a customer onto a flight
  updatebooking <booking id> <flight id> rebook onto another flight
  cancelbooking <booking id>           cancel a booking
  deleteflight <flight id>             permanently delete a flight
  deletecustomer <customer id>         permanently delete a customer
  updatecustomer <customer id>         update customer details (interactive)
  login                                authenticate (interactive)
  help                                 show this help
  exit / quit                          save and close";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ListFlights,
    ListCustomers,
    ShowFlight(EntityId),
    ShowCustomer(EntityId),
    AddFlight {
        flight_number: String,
        origin: String,
        destination: String,
        departure_date: NaiveDate,
        base_price: f64,
        capacity: u32,
    },
    AddCustomer {
        name: String,
        phone: String,
        email: String,
        password: String,
    },
    AddBooking {
        customer_id: EntityId,
        flight_id: EntityId,
        date: NaiveDate,
    },
    UpdateBooking {
        booking_id: EntityId,
        new_flight_id: EntityId,
    },
    CancelBooking {
        booking_id: EntityId,
        /// Explicit fee, or the default policy (15% of the booking fee).
        fee: Option<f64>,
    },
    DeleteFlight(EntityId),
    DeleteCustomer(EntityId),
    UpdateCustomer {
        customer_id: EntityId,
        name: String,
        phone: String,
        email: String,
        password: String,
    },
    Login {
        username: String,
        password: String,
    },
    Help,
}

impl Command {
    pub fn execute(
        self,
        ledger: &mut BookingLedger,
        auth: &Authenticator,
    ) -> Result<String, DomainError> {
        match self {
            Command::ListFlights => {
                let flights = ledger.flights();
                let mut out = String::new();
                for flight in &flights {
                    let _ = writeln!(out, "{}", flight.details_short());
                }
                let _ = write!(out, "{} flight(s)", flights.len());
                Ok(out)
            }
            Command::ListCustomers => {
                let customers = ledger.customers();
                let mut out = String::new();
                for customer in &customers {
                    let _ = writeln!(out, "{}", customer.details_short());
                }
                let _ = write!(out, "{} customer(s)", customers.len());
                Ok(out)
            }
            Command::ShowFlight(id) => {
                let flight = ledger.flight_by_id(id)?;
                let mut out = String::new();
                let _ = writeln!(out, "{}", flight.details_short());
                let _ = writeln!(
                    out,
                    "Status: {}, base price: ${:.2}, capacity: {}, booked: {}",
                    flight.status.as_str(),
                    flight.base_price,
                    flight.capacity,
                    ledger.active_booking_count(id)
                );
                let passengers = ledger.passengers_of(id);
                if passengers.is_empty() {
                    let _ = write!(out, "No passengers.");
                } else {
                    let _ = writeln!(out, "Passengers:");
                    for passenger in &passengers {
                        let _ = writeln!(out, "  {}", passenger.details_short());
                    }
                }
                Ok(out.trim_end().to_string())
            }
            Command::ShowCustomer(id) => {
                let customer = ledger.customer_by_id(id)?;
                let mut out = String::new();
                let _ = writeln!(out, "{}", customer.details_short());
                let _ = writeln!(out, "Status: {}", customer.status.as_str());
                let bookings = ledger.bookings_of(id);
                if bookings.is_empty() {
                    let _ = write!(out, "No active bookings.");
                } else {
                    let _ = writeln!(out, "Bookings:");
                    for booking in &bookings {
                        let flight = ledger.resolve_flight(booking.flight_id);
                        let _ = writeln!(
                            out,
                            "  Booking #{} on flight {} ({}), Fee: ${:.2}",
                            booking.id, flight.flight_number, booking.booking_date, booking.fee
                        );
                    }
                }
                Ok(out.trim_end().to_string())
            }
            Command::AddFlight {
                flight_number,
                origin,
                destination,
                departure_date,
                base_price,
                capacity,
            } => {
                let flight = ledger.add_flight(
                    flight_number,
                    origin,
                    destination,
                    departure_date,
                    base_price,
                    capacity,
                )?;
                Ok(format!("Flight #{} added.", flight.id))
            }
            Command::AddCustomer {
                name,
                phone,
                email,
                password,
            } => {
                let customer = ledger.add_customer(name, phone, email, password)?;
                Ok(format!("Customer #{} added.", customer.id))
            }
            Command::AddBooking {
                customer_id,
                flight_id,
                date,
            } => {
                let booking = ledger.add_booking(customer_id, flight_id, date)?;
                Ok(format!("Booking added: {}", booking.details_short()))
            }
            Command::UpdateBooking {
                booking_id,
                new_flight_id,
            } => {
                let rebooked = ledger.update_booking(booking_id, new_flight_id)?;
                Ok(format!(
                    "Booking {} updated to new flight {} as booking #{}.",
                    booking_id, new_flight_id, rebooked.id
                ))
            }
            Command::CancelBooking { booking_id, fee } => {
                let fee = match fee {
                    Some(fee) => fee,
                    None => pricing::cancellation_fee_for(ledger.booking_by_id(booking_id)?.fee),
                };
                ledger.cancel_booking(booking_id, fee)?;
                Ok(format!(
                    "Booking {booking_id} cancelled with cancellation fee: ${fee:.2}"
                ))
            }
            Command::DeleteFlight(id) => {
                ledger.remove_flight(id)?;
                Ok(format!("Flight #{id} deleted."))
            }
            Command::DeleteCustomer(id) => {
                ledger.remove_customer(id)?;
                Ok(format!("Customer #{id} deleted."))
            }
            Command::UpdateCustomer {
                customer_id,
                name,
                phone,
                email,
                password,
            } => {
                ledger.update_customer(customer_id, name, phone, email, password)?;
                Ok(format!("Customer #{customer_id} updated."))
            }
            Command::Login { username, password } => {
                let account = auth.login(&username, &password)?;
                Ok(format!(
                    "Logged in as {} ({})",
                    account.username,
                    account.role.as_str()
                ))
            }
            Command::Help => Ok(HELP_TEXT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger() -> BookingLedger {
        let mut ledger = BookingLedger::new();
        ledger
            .add_flight(
                "EV101".to_string(),
                "Kathmandu".to_string(),
                "London".to_string(),
                date(2026, 12, 24),
                100.0,
                150,
            )
            .unwrap();
        ledger
            .add_customer(
                "Asha Gurung".to_string(),
                "+977-1-5551234".to_string(),
                "asha@example.com".to_string(),
                "secret1".to_string(),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_cancel_without_fee_uses_default_policy() {
        let mut ledger = ledger();
        let auth = Authenticator::new();
        let booking = ledger.add_booking(1, 1, date(2026, 10, 1)).unwrap();
        let (id, fee) = (booking.id, booking.fee);

        let output = Command::CancelBooking {
            booking_id: id,
            fee: None,
        }
        .execute(&mut ledger, &auth)
        .unwrap();
        assert!(output.contains(&format!("{:.2}", pricing::cancellation_fee_for(fee))));
        assert!(ledger.booking_by_id(id).unwrap().is_cancelled());
    }

    #[test]
    fn test_show_flight_lists_passengers() {
        let mut ledger = ledger();
        let auth = Authenticator::new();
        ledger.add_booking(1, 1, date(2026, 10, 1)).unwrap();

        let output = Command::ShowFlight(1).execute(&mut ledger, &auth).unwrap();
        assert!(output.contains("Asha Gurung"));
    }

    #[test]
    fn test_show_flight_reports_deleted_status() {
        let mut ledger = ledger();
        let auth = Authenticator::new();
        ledger.soft_delete_flight(1).unwrap();

        let output = Command::ShowFlight(1).execute(&mut ledger, &auth).unwrap();
        assert!(output.contains("Status: deleted"));
    }

    #[test]
    fn test_errors_surface_to_caller() {
        let mut ledger = ledger();
        let auth = Authenticator::new();
        let err = Command::ShowFlight(42)
            .execute(&mut ledger, &auth)
            .unwrap_err();
        assert!(matches!(err, DomainError::FlightNotFound(42)));
    }
}
