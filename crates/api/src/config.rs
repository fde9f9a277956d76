//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Slotbook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `WORK_START_HOUR`: First bookable hour (default: 9)
//! - `WORK_END_HOUR`: Closing hour, exclusive (default: 17)
//! - `SLOT_DURATION_MINUTES`: Length of one slot (default: 30)
//! - `BOOKING_DAY`: Initially selected day as `YYYY-MM-DD` (default: today)

use chrono::{Local, NaiveDate};
use eyre::{Result, WrapErr};
use slotbook_core::config::WorkingHoursConfig;
use std::env;
use tracing::Level;

/// Configuration for the Slotbook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use slotbook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Bookable window and slot length, validated at load time
    pub working_hours: WorkingHoursConfig,

    /// Day selected when the server starts
    pub initial_day: NaiveDate,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - Any working-hours variable is not a number
    /// - The working hours violate their invariants
    /// - BOOKING_DAY is not a `YYYY-MM-DD` date
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Scheduling settings
        let defaults = WorkingHoursConfig::default();
        let working_hours = WorkingHoursConfig::new(
            env_u32("WORK_START_HOUR", defaults.start_hour)?,
            env_u32("WORK_END_HOUR", defaults.end_hour)?,
            env_u32("SLOT_DURATION_MINUTES", defaults.slot_duration_minutes)?,
        )
        .wrap_err("Invalid working hours configuration")?;

        let initial_day = match env::var("BOOKING_DAY") {
            Ok(day) => NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d")
                .wrap_err("Invalid BOOKING_DAY value, expected YYYY-MM-DD")?,
            Err(_) => Local::now().date_naive(),
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            working_hours,
            initial_day,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_log_level(level: &str) -> Level {
    match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn env_u32(key: &str, default: u32) -> Result<u32> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value", key)),
        Err(_) => Ok(default),
    }
}
