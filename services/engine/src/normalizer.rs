//! Permissive input normalization.
//!
//! Nothing here fails: a field that does not read as a finite number becomes
//! 0, rates are clamped into [0, 1], and unusable CPP entries are dropped.

use shared::config::DEFAULT_CURRENCY;
use tracing::debug;

use crate::inputs::{FunnelInputs, RawFields};

/// Map non-finite values to 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn clamp01(value: f64) -> f64 {
    finite_or_zero(value).clamp(0.0, 1.0)
}

/// Reads the longest leading `[+-]digits[.digits][e[+-]digits]` prefix after
/// leading whitespace. `None` if there is no numeric prefix or the value is
/// not finite.
pub fn read_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let is_digit = |i: usize| i < len && bytes[i].is_ascii_digit();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Like [`read_number`] but degrades to 0.
pub fn parse_number(raw: &str) -> f64 {
    read_number(raw).unwrap_or(0.0)
}

/// Values above 1 are percentages: `85` and `0.85` both mean 85%.
/// Negative values are treated as fractions and clamp to 0.
pub fn parse_rate(raw: f64) -> f64 {
    let raw = finite_or_zero(raw);
    let normalized = if raw > 1.0 { raw / 100.0 } else { raw };
    clamp01(normalized)
}

/// Round to the nearest integer (half away from zero), floor at 0.
pub fn parse_target_qty(raw: f64) -> u64 {
    let rounded = finite_or_zero(raw).round();
    if rounded <= 0.0 {
        0
    } else {
        // saturating cast
        rounded as u64
    }
}

/// Comma-separated CPP values. Keeps finite entries `>= 0` in order,
/// duplicates included.
pub fn parse_cpp_list(raw: &str) -> Vec<f64> {
    raw.split(',')
        .filter_map(|token| read_number(token.trim()))
        .filter(|value| *value >= 0.0)
        .collect()
}

#[derive(Debug, Clone)]
pub struct InputNormalizer {
    default_currency: String,
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl InputNormalizer {
    pub fn new(default_currency: &str) -> Self {
        Self {
            default_currency: default_currency.trim().to_string(),
        }
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub fn normalize(&self, raw: &RawFields) -> FunnelInputs {
        let currency = match raw.currency.trim() {
            "" => self.default_currency.clone(),
            code => code.to_string(),
        };

        let cpp_values = parse_cpp_list(&raw.cpp_list);
        if cpp_values.is_empty() {
            debug!(raw = %raw.cpp_list, "no usable CPP values, evaluation falls back to [0]");
        }

        FunnelInputs {
            product_name: raw.product_name.trim().to_string(),
            currency,
            unit_cost: amount_field("cost", &raw.cost),
            unit_sell_price: amount_field("sellPrice", &raw.sell_price),
            ship_cost_delivered: amount_field("shipDelivered", &raw.ship_delivered),
            ship_cost_returned: amount_field("shipReturned", &raw.ship_returned),
            target_qty: parse_target_qty(numeric_field("targetQty", &raw.target_qty)),
            confirm_rate: parse_rate(numeric_field("confirmRate", &raw.confirm_rate)),
            delivery_rate: parse_rate(numeric_field("deliveryRate", &raw.delivery_rate)),
            cpp_values,
        }
    }
}

/// Normalize with the default currency.
pub fn normalize(raw: &RawFields) -> FunnelInputs {
    InputNormalizer::default().normalize(raw)
}

/// Monetary amounts are floored at 0.
fn amount_field(field: &str, raw: &str) -> f64 {
    numeric_field(field, raw).max(0.0)
}

fn numeric_field(field: &str, raw: &str) -> f64 {
    match read_number(raw) {
        Some(value) => value,
        None => {
            if !raw.trim().is_empty() {
                debug!(field, raw, "unreadable number, using 0");
            }
            0.0
        }
    }
}
