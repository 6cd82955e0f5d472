//! Funnel projection driver
//!
//! Reads raw fields from a JSON file and/or flags, normalizes them, runs every
//! CPP scenario and prints the projection report as JSON on stdout.
//!
//! Usage:
//!   funnel --input product.json --cpp-list "5,10,15" --pretty

mod input;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use funnel_engine::{build_report, CompensationPlan, InputNormalizer, ProjectionReport, RawFields};
use serde::Serialize;
use shared::{init_logger, AppConfig};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::input::{apply_overrides, read_raw_fields};

#[derive(Parser, Debug)]
#[command(name = "funnel")]
#[command(about = "Profit projection for a single-product fulfillment funnel")]
struct Args {
    /// Configuration file (TOML, JSON or YAML). Defaults to ./funnel.* if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON object with raw input fields
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long)]
    product_name: Option<String>,

    /// Currency code, display only
    #[arg(long)]
    currency: Option<String>,

    /// Unit cost
    #[arg(long)]
    cost: Option<String>,

    /// Unit sell price
    #[arg(long)]
    sell_price: Option<String>,

    /// Shipping cost per delivered order
    #[arg(long)]
    ship_delivered: Option<String>,

    /// Shipping cost per returned order
    #[arg(long)]
    ship_returned: Option<String>,

    /// Number of orders the funnel is sized for
    #[arg(long)]
    target_qty: Option<String>,

    /// Confirmation rate, as a fraction (0.8) or percentage (80)
    #[arg(long)]
    confirm_rate: Option<String>,

    /// Delivery rate of confirmed orders, as a fraction or percentage
    #[arg(long)]
    delivery_rate: Option<String>,

    /// Comma-separated cost-per-purchase scenarios, e.g. "5,10,15"
    #[arg(long)]
    cpp_list: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn raw_fields(&self) -> Result<RawFields> {
        let mut raw = match &self.input {
            Some(path) => read_raw_fields(path)?,
            None => RawFields::default(),
        };

        apply_overrides(
            &mut raw,
            [
                ("productName", self.product_name.as_ref()),
                ("currency", self.currency.as_ref()),
                ("cost", self.cost.as_ref()),
                ("sellPrice", self.sell_price.as_ref()),
                ("shipDelivered", self.ship_delivered.as_ref()),
                ("shipReturned", self.ship_returned.as_ref()),
                ("targetQty", self.target_qty.as_ref()),
                ("confirmRate", self.confirm_rate.as_ref()),
                ("deliveryRate", self.delivery_rate.as_ref()),
                ("cppList", self.cpp_list.as_ref()),
            ],
        );
        Ok(raw)
    }
}

#[derive(Debug, Serialize)]
struct Output {
    generated_at: DateTime<Utc>,
    report: ProjectionReport,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    init_logger(&config.logging)?;
    debug!(?config, "configuration loaded");

    let raw = args.raw_fields()?;
    let inputs = InputNormalizer::new(&config.defaults.currency).normalize(&raw);
    let plan = CompensationPlan::from(&config.compensation);
    let report = build_report(&inputs, &plan);

    info!(
        product = %report.inputs.product_name,
        scenarios = report.analysis.scenario_count,
        best_cpp = report.analysis.best.cpp,
        worst_cpp = report.analysis.worst.cpp,
        positive = report.analysis.positive_count,
        "projection ready"
    );

    let output = Output {
        generated_at: Utc::now(),
        report,
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
