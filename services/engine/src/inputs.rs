use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw form fields before normalization. Every field is free text; empty
/// means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFields {
    #[serde(alias = "productName")]
    pub product_name: String,
    pub currency: String,
    pub cost: String,
    #[serde(alias = "sellPrice")]
    pub sell_price: String,
    #[serde(alias = "shipDelivered")]
    pub ship_delivered: String,
    #[serde(alias = "shipReturned")]
    pub ship_returned: String,
    #[serde(alias = "targetQty")]
    pub target_qty: String,
    #[serde(alias = "confirmRate")]
    pub confirm_rate: String,
    #[serde(alias = "deliveryRate")]
    pub delivery_rate: String,
    #[serde(alias = "cppList")]
    pub cpp_list: String,
}

impl RawFields {
    /// Build from a field map keyed by form id (`sellPrice`) or by field name
    /// (`sell_price`). Unknown keys are ignored.
    pub fn from_map(fields: &HashMap<String, String>) -> Self {
        let mut raw = RawFields::default();
        for (key, value) in fields {
            if let Some(slot) = raw.slot_mut(key) {
                *slot = value.clone();
            }
        }
        raw
    }

    /// Overwrite a single field by form id or field name. Returns false for
    /// unknown keys.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        let slot = match key {
            "productName" | "product_name" => &mut self.product_name,
            "currency" => &mut self.currency,
            "cost" => &mut self.cost,
            "sellPrice" | "sell_price" => &mut self.sell_price,
            "shipDelivered" | "ship_delivered" => &mut self.ship_delivered,
            "shipReturned" | "ship_returned" => &mut self.ship_returned,
            "targetQty" | "target_qty" => &mut self.target_qty,
            "confirmRate" | "confirm_rate" => &mut self.confirm_rate,
            "deliveryRate" | "delivery_rate" => &mut self.delivery_rate,
            "cppList" | "cpp_list" => &mut self.cpp_list,
            _ => return None,
        };
        Some(slot)
    }
}

/// Validated funnel inputs. Constructed once per render cycle by the
/// normalizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelInputs {
    /// Display only.
    pub product_name: String,
    /// Display only.
    pub currency: String,
    pub unit_cost: f64,
    pub unit_sell_price: f64,
    pub ship_cost_delivered: f64,
    pub ship_cost_returned: f64,
    pub target_qty: u64,
    /// Fraction of target orders confirmed, in [0, 1].
    pub confirm_rate: f64,
    /// Fraction of confirmed orders delivered, in [0, 1].
    pub delivery_rate: f64,
    /// Finite, non-negative, in entry order. May be empty.
    pub cpp_values: Vec<f64>,
}

impl FunnelInputs {
    /// The CPP list to evaluate: the parsed values, or `[0]` when none survived.
    pub fn effective_cpp_values(&self) -> Vec<f64> {
        effective_cpp_values(&self.cpp_values)
    }
}

pub fn effective_cpp_values(cpp_values: &[f64]) -> Vec<f64> {
    if cpp_values.is_empty() {
        vec![0.0]
    } else {
        cpp_values.to_vec()
    }
}
