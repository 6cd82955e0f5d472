//! Tests for the shared configuration and logging layer

use std::io::Write;

use crate::config::{AppConfig, CompensationConfig, LogFormat, DEFAULT_CURRENCY};
use crate::error::SharedError;
use crate::logger::init_logger;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_config_values() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.defaults.currency, DEFAULT_CURRENCY);
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.logging.format, LogFormat::Pretty);
    assert_eq!(cfg.compensation.profit_share_rate, 0.30);
    assert_eq!(cfg.compensation.ad_spend_share_rate, 0.30);
    assert_eq!(cfg.compensation.profit_share_with_fixed_rate, 0.10);
    assert_eq!(cfg.compensation.fixed_salary, 9000.0);
    assert_eq!(cfg.compensation.sales_share_rate, 0.05);
}

#[test]
fn test_default_config_is_valid() {
    assert!(AppConfig::default().validate().is_ok());
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn test_load_partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[defaults]
currency = "USD"

[compensation]
fixed_salary = 12000.0
"#,
    );

    let cfg = AppConfig::load(Some(file.path())).expect("config should load");
    assert_eq!(cfg.defaults.currency, "USD");
    assert_eq!(cfg.compensation.fixed_salary, 12000.0);
    assert_eq!(cfg.compensation.sales_share_rate, 0.05);
    assert_eq!(cfg.logging, crate::config::LoggingConfig::default());
}

#[test]
fn test_load_json_log_format() {
    let file = write_config(
        r#"
[logging]
level = "debug"
format = "json"
"#,
    );

    let cfg = AppConfig::load(Some(file.path())).expect("config should load");
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.format, LogFormat::Json);
}

#[test]
fn test_load_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let result = AppConfig::load(Some(&missing));
    assert!(matches!(result, Err(SharedError::Config(_))));
}

#[test]
fn test_load_unknown_log_format_is_error() {
    let file = write_config(
        r#"
[logging]
format = "xml"
"#,
    );
    assert!(AppConfig::load(Some(file.path())).is_err());
}

#[test]
fn test_load_rejects_negative_compensation() {
    let file = write_config(
        r#"
[compensation]
sales_share_rate = -0.5
"#,
    );

    match AppConfig::load(Some(file.path())) {
        Err(SharedError::InvalidSetting { key, .. }) => {
            assert_eq!(key, "compensation.sales_share_rate");
        }
        other => panic!("expected InvalidSetting, got {:?}", other),
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_rejects_blank_currency() {
    let mut cfg = AppConfig::default();
    cfg.defaults.currency = "   ".to_string();
    assert!(matches!(
        cfg.validate(),
        Err(SharedError::InvalidSetting { ref key, .. }) if key == "defaults.currency"
    ));
}

#[test]
fn test_validate_rejects_unknown_level() {
    let mut cfg = AppConfig::default();
    cfg.logging.level = "verbose".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_validate_accepts_uppercase_level() {
    let mut cfg = AppConfig::default();
    cfg.logging.level = "WARN".to_string();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_rejects_non_finite_salary() {
    let cfg = AppConfig {
        compensation: CompensationConfig {
            fixed_salary: f64::NAN,
            ..CompensationConfig::default()
        },
        ..AppConfig::default()
    };
    assert!(cfg.validate().is_err());
}

// ============================================================================
// Logger
// ============================================================================

#[test]
fn test_logger_second_init_is_error_not_panic() {
    let cfg = AppConfig::default();
    let _ = init_logger(&cfg.logging);
    let second = init_logger(&cfg.logging);
    assert!(matches!(second, Err(SharedError::Logger(_))));
}
