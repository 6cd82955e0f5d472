use serde::{Deserialize, Serialize};

use crate::inputs::FunnelInputs;
use crate::normalizer::{clamp01, finite_or_zero};

/// Projection for one `(inputs, cpp)` pair.
///
/// Order counts and every sales/shipping field depend only on the inputs;
/// `total_ads_spent`, `startup_capital` and `net_profit` also depend on `cpp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub cpp: f64,

    pub confirmed_orders: u64,
    pub delivered_orders: u64,
    pub returned_orders: u64,

    pub gross_profit_per_unit: f64,
    pub gross_sales: f64,
    pub total_product_cost: f64,
    pub target_purchase_cost: f64,
    pub delivered_shipping_cost: f64,
    pub returned_shipping_cost: f64,
    pub total_shipping_cost: f64,
    pub profit_after_product_cost: f64,
    pub profit_after_shipping: f64,
    pub total_ads_spent: f64,
    pub startup_capital: f64,
    pub net_profit: f64,

    /// Delivered over target, 0 when target is 0.
    pub delivery_from_target_rate: f64,
    /// Returned over confirmed, 0 when nothing was confirmed.
    pub return_rate: f64,
}

/// Round half away from zero and convert to an order count. Negative and
/// non-finite products count as 0.
fn round_orders(value: f64) -> u64 {
    value.round() as u64
}

/// Evaluate the funnel for a single CPP value. Pure and total.
pub fn evaluate(inputs: &FunnelInputs, cpp: f64) -> ScenarioResult {
    let cpp = finite_or_zero(cpp);
    let target = inputs.target_qty as f64;

    let gross_profit_per_unit = inputs.unit_sell_price - inputs.unit_cost;

    let confirmed_orders = round_orders(target * clamp01(inputs.confirm_rate));
    let delivered_orders =
        round_orders(confirmed_orders as f64 * clamp01(inputs.delivery_rate)).min(confirmed_orders);
    let returned_orders = confirmed_orders - delivered_orders;

    let delivered = delivered_orders as f64;
    let returned = returned_orders as f64;

    let delivered_shipping_cost = delivered * inputs.ship_cost_delivered;
    let returned_shipping_cost = returned * inputs.ship_cost_returned;
    let total_shipping_cost = delivered_shipping_cost + returned_shipping_cost;

    let gross_sales = delivered * inputs.unit_sell_price;
    let total_product_cost = delivered * inputs.unit_cost;
    let target_purchase_cost = target * inputs.unit_cost;

    let profit_after_product_cost = gross_sales - total_product_cost;
    let profit_after_shipping = profit_after_product_cost - total_shipping_cost;

    let total_ads_spent = target * cpp;
    let startup_capital = target_purchase_cost + total_ads_spent;
    let net_profit = profit_after_shipping - total_ads_spent;

    let delivery_from_target_rate = if inputs.target_qty > 0 {
        delivered / target
    } else {
        0.0
    };
    let return_rate = if confirmed_orders > 0 {
        returned / confirmed_orders as f64
    } else {
        0.0
    };

    ScenarioResult {
        cpp,
        confirmed_orders,
        delivered_orders,
        returned_orders,
        gross_profit_per_unit,
        gross_sales,
        total_product_cost,
        target_purchase_cost,
        delivered_shipping_cost,
        returned_shipping_cost,
        total_shipping_cost,
        profit_after_product_cost,
        profit_after_shipping,
        total_ads_spent,
        startup_capital,
        net_profit,
        delivery_from_target_rate,
        return_rate,
    }
}
