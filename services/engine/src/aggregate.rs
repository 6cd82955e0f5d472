//! Multi-scenario scan over a CPP list, with comparative statistics.

use serde::Serialize;
use tracing::debug;

use crate::inputs::{effective_cpp_values, FunnelInputs};
use crate::scenario::{evaluate, ScenarioResult};

/// Ordered scenario results plus derived aggregates. Never empty: an empty
/// CPP list is evaluated as `[0]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSet {
    results: Vec<ScenarioResult>,
    best_index: usize,
    worst_index: usize,
    positive_count: usize,
    average_net_profit: f64,
}

/// Evaluate every CPP value in order.
pub fn evaluate_all(inputs: &FunnelInputs, cpp_values: &[f64]) -> ScenarioSet {
    let results: Vec<ScenarioResult> = effective_cpp_values(cpp_values)
        .into_iter()
        .map(|cpp| evaluate(inputs, cpp))
        .collect();
    let set = ScenarioSet::from_results(results);

    debug!(
        scenarios = set.len(),
        best_cpp = set.best().cpp,
        worst_cpp = set.worst().cpp,
        positive = set.positive_count(),
        average_net_profit = set.average_net_profit(),
        "evaluated CPP scenarios"
    );
    set
}

impl ScenarioSet {
    /// Evaluate the CPP list carried by the inputs.
    pub fn from_inputs(inputs: &FunnelInputs) -> Self {
        evaluate_all(inputs, &inputs.cpp_values)
    }

    fn from_results(results: Vec<ScenarioResult>) -> Self {
        debug_assert!(!results.is_empty());

        // Strict comparisons keep the earliest scenario on ties.
        let mut best_index = 0;
        let mut worst_index = 0;
        for (i, result) in results.iter().enumerate().skip(1) {
            if result.net_profit > results[best_index].net_profit {
                best_index = i;
            }
            if result.net_profit < results[worst_index].net_profit {
                worst_index = i;
            }
        }

        let positive_count = results.iter().filter(|r| r.net_profit >= 0.0).count();
        let average_net_profit =
            results.iter().map(|r| r.net_profit).sum::<f64>() / results.len() as f64;

        Self {
            results,
            best_index,
            worst_index,
            positive_count,
            average_net_profit,
        }
    }

    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioResult> {
        self.results.iter()
    }

    /// Highest net profit, earliest on ties.
    pub fn best(&self) -> &ScenarioResult {
        &self.results[self.best_index]
    }

    /// Lowest net profit, earliest on ties.
    pub fn worst(&self) -> &ScenarioResult {
        &self.results[self.worst_index]
    }

    /// Scenarios with `net_profit >= 0`.
    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    pub fn average_net_profit(&self) -> f64 {
        self.average_net_profit
    }

    pub fn first(&self) -> &ScenarioResult {
        &self.results[0]
    }

    /// Same scenario as [`first`](Self::first) when only one CPP was given.
    pub fn last(&self) -> &ScenarioResult {
        &self.results[self.results.len() - 1]
    }

    /// Scenario for the CPP-independent figures; the first one.
    pub fn base(&self) -> &ScenarioResult {
        self.first()
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            best: CppOutcome::from(self.best()),
            worst: CppOutcome::from(self.worst()),
            positive_count: self.positive_count,
            scenario_count: self.len(),
            average_net_profit: self.average_net_profit,
            first: CppOutcome::from(self.first()),
            last: CppOutcome::from(self.last()),
        }
    }
}

impl<'a> IntoIterator for &'a ScenarioSet {
    type Item = &'a ScenarioResult;
    type IntoIter = std::slice::Iter<'a, ScenarioResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// The ad-spend-dependent slice of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CppOutcome {
    pub cpp: f64,
    pub total_ads_spent: f64,
    pub net_profit: f64,
}

impl From<&ScenarioResult> for CppOutcome {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            cpp: result.cpp,
            total_ads_spent: result.total_ads_spent,
            net_profit: result.net_profit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub best: CppOutcome,
    pub worst: CppOutcome,
    pub positive_count: usize,
    pub scenario_count: usize,
    pub average_net_profit: f64,
    pub first: CppOutcome,
    pub last: CppOutcome,
}
