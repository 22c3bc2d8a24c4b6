use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::env;
use tracing::{info, warn};

use crate::clock::{Clock, FixedClock, LocalClock};
use crate::sm2_scheduler::parse_review_date;

// Import logging macros
use crate::{log_system_event, log_validation};

/// Complete application configuration loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scheduler: SchedulerConfig,
    pub logging: LoggingConfig,
}

/// Where the deck lives and which day counts as "today"
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    pub deck_path: String,
    pub today_override: Option<NaiveDate>,
}

/// Logging system configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_enabled: bool,
    pub console_enabled: bool,
    pub log_directory: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Result<Self> {
        log_system_event!(config, "Loading application configuration from environment variables");

        let scheduler_config = SchedulerConfig::from_env()?;
        let logging_config = LoggingConfig::from_env()?;

        let config = Config {
            scheduler: scheduler_config,
            logging: logging_config,
        };

        log_system_event!(config, "Configuration loaded successfully");
        config.log_configuration_summary();

        Ok(config)
    }

    fn log_configuration_summary(&self) {
        info!(
            deck_path = %self.scheduler.deck_path,
            today_override = ?self.scheduler.today_override,
            log_level = %self.logging.level,
            log_directory = %self.logging.log_directory,
            "Configuration summary"
        );
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.scheduler.deck_path.trim().is_empty() {
            return Err(anyhow!("DECK_PATH must not be empty"));
        }

        if !self.logging.file_enabled && !self.logging.console_enabled {
            warn!("Both console and file logging are disabled - no log output will be produced");
        }

        // RUST_LOG may be a directive list, only the leading level is checked
        let leading_level = self
            .logging
            .level
            .split(',')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        if !leading_level.contains('=')
            && !["trace", "debug", "info", "warn", "error", "off"].contains(&leading_level.as_str())
        {
            warn!("Invalid log level '{}', using 'info' as fallback", self.logging.level);
        }

        log_validation!(success, "configuration", "Configuration validation completed successfully");
        Ok(())
    }
}

impl SchedulerConfig {
    fn from_env() -> Result<Self> {
        let deck_path = env::var("DECK_PATH").unwrap_or_else(|_| "deck.json".to_string());

        let today_override = match env::var("SCHEDULER_TODAY") {
            Ok(value) => Some(parse_review_date(&value).ok_or_else(|| {
                anyhow!("Invalid SCHEDULER_TODAY value: '{}'. Expected YYYY-MM-DD", value)
            })?),
            Err(_) => None,
        };

        Ok(SchedulerConfig {
            deck_path,
            today_override,
        })
    }

    /// The fixed override date when one is configured, otherwise local time.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today_override {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(LocalClock),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self> {
        let level = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info,flashcard_scheduler=debug".to_string());

        let file_enabled = env::var("LOG_FILE_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let console_enabled = env::var("LOG_CONSOLE_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let log_directory = env::var("LOG_DIRECTORY").unwrap_or_else(|_| "logs".to_string());

        Ok(LoggingConfig {
            level,
            file_enabled,
            console_enabled,
            log_directory,
        })
    }
}
