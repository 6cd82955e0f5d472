//! Shared fixtures for the cross-crate tests.

use funnel_engine::RawFields;

/// Raw form fields for the reference product: 1000 targeted orders, 80%
/// confirmation, 75% delivery.
pub fn reference_raw_fields() -> RawFields {
    RawFields {
        product_name: "Desk Lamp".to_string(),
        currency: String::new(),
        cost: "50".to_string(),
        sell_price: "120".to_string(),
        ship_delivered: "20".to_string(),
        ship_returned: "15".to_string(),
        target_qty: "1000".to_string(),
        confirm_rate: "80".to_string(),
        delivery_rate: "75".to_string(),
        cpp_list: "5,10,15".to_string(),
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}
