use thiserror::Error;

/// Failures of the ambient layer. The projection engine itself never fails.
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid setting `{key}`: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("logger initialization failed: {0}")]
    Logger(String),
}

impl SharedError {
    pub fn invalid(key: &str, reason: impl Into<String>) -> Self {
        SharedError::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
