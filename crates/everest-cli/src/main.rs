//! Everest Airlines command shell.
//!
//! Loads the ledger from the configured data files, runs the interactive
//! command loop, and stores the ledger back on exit. Every ledger error is
//! displayed and the loop keeps running; no ledger error is fatal.

mod commands;
mod parser;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use everest_core::services::Authenticator;
use everest_data::LedgerStore;
use everest_shared::config::AppConfig;
use everest_shared::telemetry;

use crate::commands::Command;
use crate::parser::CommandParser;

#[derive(Parser, Debug)]
#[command(name = "everest", version, about = "Everest Airlines - Flight Booking System")]
struct Args {
    /// Directory holding flights.txt, customers.txt, and bookings.txt
    /// (overrides the configured location)
    #[arg(long, env = "EVEREST_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    telemetry::init_telemetry("info");
    let args = Args::parse();

    let mut config = AppConfig::load()?;
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }

    let store = LedgerStore::new(&config.data);
    let mut ledger = store.load();
    let auth = Authenticator::new();

    println!("Welcome to {}", config.app.name);
    println!("Type 'help' for available commands, or 'exit'/'quit' to close the application.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            println!("Exiting...");
            break;
        }

        let parsed = CommandParser::new(&mut input, io::stdout()).parse(&line);
        let outcome = parsed.and_then(|command: Command| {
            command
                .execute(&mut ledger, &auth)
                .map_err(anyhow::Error::from)
        });
        match outcome {
            Ok(output) => println!("{output}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    store.store(&ledger)?;
    Ok(())
}
