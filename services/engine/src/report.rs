//! The full projection for one set of inputs, ready for any renderer.

use serde::Serialize;

use crate::aggregate::{CppOutcome, ScenarioSet, ScenarioSummary};
use crate::charts::ChartSet;
use crate::compensation::{CompensationPlan, CompensationRow};
use crate::inputs::FunnelInputs;
use crate::metrics::{cost_metrics, rate_metrics, CostMetric, RateMetric};
use crate::scenario::ScenarioResult;

/// First and last CPP scenarios, shown side by side as "first | last".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CppRange {
    pub first: CppOutcome,
    pub last: CppOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionReport {
    pub inputs: FunnelInputs,
    /// The CPP list actually evaluated (`[0]` when none was usable).
    pub cpp_values: Vec<f64>,
    /// First scenario; source of every CPP-independent figure.
    pub base: ScenarioResult,
    pub range: CppRange,
    pub analysis: ScenarioSummary,
    pub ads_table: Vec<CppOutcome>,
    pub compensation: Vec<CompensationRow>,
    pub charts: ChartSet,
    pub rate_metrics: Vec<RateMetric>,
    pub cost_metrics: Vec<CostMetric>,
}

pub fn build_report(inputs: &FunnelInputs, plan: &CompensationPlan) -> ProjectionReport {
    let scenarios = ScenarioSet::from_inputs(inputs);
    build_report_from(inputs, &scenarios, plan)
}

/// Assemble a report from scenarios that were already evaluated.
pub fn build_report_from(
    inputs: &FunnelInputs,
    scenarios: &ScenarioSet,
    plan: &CompensationPlan,
) -> ProjectionReport {
    let base = scenarios.base().clone();

    ProjectionReport {
        inputs: inputs.clone(),
        cpp_values: scenarios.iter().map(|r| r.cpp).collect(),
        range: CppRange {
            first: CppOutcome::from(scenarios.first()),
            last: CppOutcome::from(scenarios.last()),
        },
        analysis: scenarios.summary(),
        ads_table: scenarios.iter().map(CppOutcome::from).collect(),
        compensation: plan.schedule(scenarios),
        charts: ChartSet::build(scenarios),
        rate_metrics: rate_metrics(inputs, &base),
        cost_metrics: cost_metrics(inputs),
        base,
    }
}
