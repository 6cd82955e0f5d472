//! Layered configuration: built-in defaults, an optional TOML/JSON/YAML file,
//! then `FUNNEL__*` environment variables.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SharedError, SharedResult};

pub const DEFAULT_CURRENCY: &str = "EGP";
pub const DEFAULT_CONFIG_FILE: &str = "funnel";
pub const ENV_PREFIX: &str = "FUNNEL";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Used when the raw currency field is blank.
    pub currency: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Media-buyer pay rules, applied per CPP scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationConfig {
    pub profit_share_rate: f64,
    pub ad_spend_share_rate: f64,
    pub profit_share_with_fixed_rate: f64,
    pub fixed_salary: f64,
    pub sales_share_rate: f64,
}

impl Default for CompensationConfig {
    fn default() -> Self {
        Self {
            profit_share_rate: 0.30,
            ad_spend_share_rate: 0.30,
            profit_share_with_fixed_rate: 0.10,
            fixed_salary: 9000.0,
            sales_share_rate: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub defaults: DefaultsConfig,
    pub compensation: CompensationConfig,
}

impl AppConfig {
    /// Loads configuration. With no explicit path, `funnel.{toml,json,yaml}`
    /// in the working directory is read if present.
    pub fn load(path: Option<&Path>) -> SharedResult<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: AppConfig = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> SharedResult<()> {
        let level = self.logging.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SharedError::invalid(
                "logging.level",
                format!("expected one of {:?}, got `{}`", LOG_LEVELS, self.logging.level),
            ));
        }

        if self.defaults.currency.trim().is_empty() {
            return Err(SharedError::invalid("defaults.currency", "must not be blank"));
        }

        let c = &self.compensation;
        for (key, value) in [
            ("compensation.profit_share_rate", c.profit_share_rate),
            ("compensation.ad_spend_share_rate", c.ad_spend_share_rate),
            ("compensation.profit_share_with_fixed_rate", c.profit_share_with_fixed_rate),
            ("compensation.fixed_salary", c.fixed_salary),
            ("compensation.sales_share_rate", c.sales_share_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SharedError::invalid(
                    key,
                    format!("must be a finite non-negative number, got {}", value),
                ));
            }
        }

        Ok(())
    }
}
