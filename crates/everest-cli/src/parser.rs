//! Turns input lines into [`Command`]s.
//!
//! Single-word commands carry their arguments on the line; the add/update
//! commands prompt for their fields on the parser's input stream, which
//! keeps the parser testable with scripted input.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use everest_shared::EntityId;

use crate::commands::Command;

/// Attempts the user gets to enter a well-formed date.
const DATE_ATTEMPTS: usize = 3;

pub struct CommandParser<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CommandParser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn parse(&mut self, line: &str) -> Result<Command> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let invalid = || anyhow!("Invalid command.");

        match parts.as_slice() {
            ["listflights"] => Ok(Command::ListFlights),
            ["listcustomers"] => Ok(Command::ListCustomers),
            ["showflight", id] => Ok(Command::ShowFlight(parse_id(id)?)),
            ["showcustomer", id] => Ok(Command::ShowCustomer(parse_id(id)?)),
            ["addflight"] => self.parse_add_flight(),
            ["addcustomer"] => self.parse_add_customer(),
            ["addbooking", customer_id, flight_id] => Ok(Command::AddBooking {
                customer_id: parse_id(customer_id)?,
                flight_id: parse_id(flight_id)?,
                date: chrono::Local::now().date_naive(),
            }),
            ["updatebooking", booking_id, flight_id] => Ok(Command::UpdateBooking {
                booking_id: parse_id(booking_id)?,
                new_flight_id: parse_id(flight_id)?,
            }),
            ["cancelbooking", booking_id] => {
                let booking_id = parse_id(booking_id)?;
                let raw = self.prompt("Cancellation Fee (blank for the standard fee): ")?;
                let fee = if raw.is_empty() {
                    None
                } else {
                    Some(raw.parse().map_err(|_| invalid())?)
                };
                Ok(Command::CancelBooking { booking_id, fee })
            }
            ["deleteflight", id] => Ok(Command::DeleteFlight(parse_id(id)?)),
            ["deletecustomer", id] => Ok(Command::DeleteCustomer(parse_id(id)?)),
            ["updatecustomer", id] => {
                let customer_id = parse_id(id)?;
                let name = self.prompt("Customer Name: ")?;
                let phone = self.prompt("Phone: ")?;
                let email = self.prompt("Email: ")?;
                let password = self.prompt("Password: ")?;
                Ok(Command::UpdateCustomer {
                    customer_id,
                    name,
                    phone,
                    email,
                    password,
                })
            }
            ["login"] => {
                let username = self.prompt("Username: ")?;
                let password = self.prompt("Password: ")?;
                Ok(Command::Login { username, password })
            }
            ["help"] => Ok(Command::Help),
            _ => Err(invalid()),
        }
    }

    fn parse_add_flight(&mut self) -> Result<Command> {
        let flight_number = self.prompt("Flight Number: ")?;
        let origin = self.prompt("Origin: ")?;
        let destination = self.prompt("Destination: ")?;
        let departure_date = self.prompt_date()?;
        let base_price = self
            .prompt("Base Price: ")?
            .parse()
            .map_err(|_| anyhow!("Base price must be a number."))?;
        let capacity = self
            .prompt("Capacity: ")?
            .parse()
            .map_err(|_| anyhow!("Capacity must be a positive integer."))?;
        Ok(Command::AddFlight {
            flight_number,
            origin,
            destination,
            departure_date,
            base_price,
            capacity,
        })
    }

    fn parse_add_customer(&mut self) -> Result<Command> {
        let name = self.prompt("Customer Name: ")?;
        let phone = self.prompt("Phone: ")?;
        let email = self.prompt("Email: ")?;
        let password = self.prompt("Password: ")?;
        Ok(Command::AddCustomer {
            name,
            phone,
            email,
            password,
        })
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Re-prompts until a well-formed date arrives or the attempts run out.
    fn prompt_date(&mut self) -> Result<NaiveDate> {
        let mut attempts = DATE_ATTEMPTS;
        while attempts > 0 {
            attempts -= 1;
            let raw = self.prompt("Departure Date (YYYY-MM-DD): ")?;
            match raw.parse::<NaiveDate>() {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(
                    self.output,
                    "Date must be in YYYY-MM-DD format. {attempts} attempts remaining..."
                )?,
            }
        }
        bail!("Incorrect departure date provided. Cannot create flight.")
    }
}

fn parse_id(raw: &str) -> Result<EntityId> {
    let id: EntityId = raw.parse().map_err(|_| anyhow!("Invalid command."))?;
    if id == 0 {
        bail!("Invalid command.");
    }
    Ok(id)
}
