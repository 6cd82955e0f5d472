//! Deterministic profit projection for a single-product fulfillment funnel.
//!
//! Raw form fields go through [`InputNormalizer`] into [`FunnelInputs`];
//! [`evaluate`] projects one CPP scenario and [`evaluate_all`] scans a CPP
//! list into a [`ScenarioSet`] with best/worst/average statistics.

pub mod aggregate;
pub mod charts;
pub mod compensation;
pub mod inputs;
pub mod metrics;
pub mod normalizer;
pub mod report;
pub mod scenario;


pub use aggregate::{evaluate_all, CppOutcome, ScenarioSet, ScenarioSummary};
pub use charts::{AxisDomain, ChartKind, ChartMetric, ChartSeries, ChartSet};
pub use compensation::{CompensationPlan, CompensationRow};
pub use inputs::{FunnelInputs, RawFields};
pub use normalizer::{normalize, parse_cpp_list, parse_rate, InputNormalizer};
pub use report::{build_report, ProjectionReport};
pub use scenario::{evaluate, ScenarioResult};
