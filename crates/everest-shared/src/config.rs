//! Configuration management

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub data: DataSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub dir: PathBuf,
}

impl DataSettings {
    pub fn flights_path(&self) -> PathBuf {
        self.dir.join(crate::constants::FLIGHTS_FILE)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.dir.join(crate::constants::CUSTOMERS_FILE)
    }

    pub fn bookings_path(&self) -> PathBuf {
        self.dir.join(crate::constants::BOOKINGS_FILE)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "Everest Airlines")?
            .set_default("data.dir", "./resources/data")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let cfg = AppConfig::load().expect("default config should load");
        assert_eq!(cfg.app.name, "Everest Airlines");
        assert!(cfg.data.flights_path().ends_with("flights.txt"));
    }
}
