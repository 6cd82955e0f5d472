pub mod config;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use config::{AppConfig, CompensationConfig, DefaultsConfig, LogFormat, LoggingConfig};
pub use error::{SharedError, SharedResult};
pub use logger::init_logger;
