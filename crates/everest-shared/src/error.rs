//! Application error types

use thiserror::Error;

/// Errors raised while bootstrapping the shell, before the ledger exists.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
