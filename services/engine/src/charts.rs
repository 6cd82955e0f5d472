//! Chart datasets keyed by CPP. Only the data and the value-axis domain live
//! here; drawing is up to the consumer.

use serde::Serialize;

use crate::aggregate::ScenarioSet;
use crate::normalizer::finite_or_zero;
use crate::scenario::ScenarioResult;

pub const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    NetProfit,
    TotalAdsSpent,
    GrossSales,
}

impl ChartMetric {
    pub fn value(&self, result: &ScenarioResult) -> f64 {
        let raw = match self {
            ChartMetric::NetProfit => result.net_profit,
            ChartMetric::TotalAdsSpent => result.total_ads_spent,
            ChartMetric::GrossSales => result.gross_sales,
        };
        finite_or_zero(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub cpp: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    /// Bars always include the zero baseline. A flat domain is widened by 1
    /// on each side.
    pub fn for_values(values: &[f64], kind: ChartKind) -> Self {
        let seed = match kind {
            ChartKind::Bar => (0.0, 0.0),
            ChartKind::Line => (f64::INFINITY, f64::NEG_INFINITY),
        };
        let (mut min, mut max) = values
            .iter()
            .fold(seed, |(lo, hi), v| (lo.min(*v), hi.max(*v)));

        if values.is_empty() && kind == ChartKind::Line {
            min = 0.0;
            max = 0.0;
        }
        if min == max {
            min -= 1.0;
            max += 1.0;
        }
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Gridline values from top to bottom.
    pub fn ticks(&self) -> [f64; TICK_COUNT] {
        let step = self.span() / (TICK_COUNT - 1) as f64;
        let mut ticks = [0.0; TICK_COUNT];
        for (i, tick) in ticks.iter_mut().enumerate() {
            *tick = self.max - i as f64 * step;
        }
        ticks
    }

    /// Whether a zero reference line falls strictly inside the domain.
    pub fn crosses_zero(&self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub metric: ChartMetric,
    pub points: Vec<ChartPoint>,
    pub domain: AxisDomain,
    pub ticks: [f64; TICK_COUNT],
}

impl ChartSeries {
    pub fn build(scenarios: &ScenarioSet, metric: ChartMetric, kind: ChartKind) -> Self {
        let points: Vec<ChartPoint> = scenarios
            .iter()
            .map(|result| ChartPoint {
                cpp: result.cpp,
                value: metric.value(result),
            })
            .collect();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let domain = AxisDomain::for_values(&values, kind);

        Self {
            kind,
            metric,
            points,
            domain,
            ticks: domain.ticks(),
        }
    }

    pub fn crosses_zero(&self) -> bool {
        self.domain.crosses_zero()
    }
}

/// The three standard charts: net profit bars, ad spend and sales lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub net_profit: ChartSeries,
    pub ads_spent: ChartSeries,
    pub gross_sales: ChartSeries,
}

impl ChartSet {
    pub fn build(scenarios: &ScenarioSet) -> Self {
        Self {
            net_profit: ChartSeries::build(scenarios, ChartMetric::NetProfit, ChartKind::Bar),
            ads_spent: ChartSeries::build(scenarios, ChartMetric::TotalAdsSpent, ChartKind::Line),
            gross_sales: ChartSeries::build(scenarios, ChartMetric::GrossSales, ChartKind::Line),
        }
    }
}
