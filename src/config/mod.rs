use crate::core::{AppError, Result};
use crate::modules::commissions::CommissionRates;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub commission: CommissionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    /// YAML rate table replacing the built-in rates
    pub rates_file: Option<PathBuf>,
}

impl CommissionConfig {
    /// Rate table to run with: the configured file, or the built-in defaults
    pub fn load_rates(&self) -> Result<CommissionRates> {
        match &self.rates_file {
            Some(path) => CommissionRates::from_yaml_file(path),
            None => Ok(CommissionRates::default()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            commission: CommissionConfig {
                rates_file: env::var("COMMISSION_RATES_FILE")
                    .ok()
                    .filter(|path| !path.trim().is_empty())
                    .map(PathBuf::from),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if let Some(path) = &self.commission.rates_file {
            if !path.is_file() {
                return Err(AppError::Configuration(format!(
                    "COMMISSION_RATES_FILE {} does not exist",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
