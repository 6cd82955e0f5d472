use serde::Serialize;

use crate::inputs::FunnelInputs;
use crate::normalizer::clamp01;
use crate::scenario::ScenarioResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateKind {
    Confirmation,
    DeliveryOfConfirmed,
    DeliveryOfTarget,
    ReturnOfConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    SellPrice,
    UnitCost,
    DeliveredShipping,
    ReturnedShipping,
}

/// A labelled value with a progress-bar fill in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric<K> {
    pub kind: K,
    pub value: f64,
    pub fill: f64,
}

pub type RateMetric = Metric<RateKind>;
pub type CostMetric = Metric<CostKind>;

pub fn rate_metrics(inputs: &FunnelInputs, base: &ScenarioResult) -> Vec<RateMetric> {
    [
        (RateKind::Confirmation, inputs.confirm_rate),
        (RateKind::DeliveryOfConfirmed, inputs.delivery_rate),
        (RateKind::DeliveryOfTarget, base.delivery_from_target_rate),
        (RateKind::ReturnOfConfirmed, base.return_rate),
    ]
    .into_iter()
    .map(|(kind, value)| Metric {
        kind,
        value,
        fill: clamp01(value),
    })
    .collect()
}

/// Per-unit amounts scaled against the largest of them (at least 1).
pub fn cost_metrics(inputs: &FunnelInputs) -> Vec<CostMetric> {
    let entries = [
        (CostKind::SellPrice, inputs.unit_sell_price),
        (CostKind::UnitCost, inputs.unit_cost),
        (CostKind::DeliveredShipping, inputs.ship_cost_delivered),
        (CostKind::ReturnedShipping, inputs.ship_cost_returned),
    ];
    let scale = entries.iter().fold(1.0_f64, |acc, (_, v)| acc.max(*v));

    entries
        .into_iter()
        .map(|(kind, value)| Metric {
            kind,
            value,
            fill: clamp01(value / scale),
        })
        .collect()
}
