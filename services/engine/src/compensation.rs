//! Media-buyer pay options derived from each CPP scenario.

use serde::Serialize;
use shared::config::CompensationConfig;

use crate::aggregate::ScenarioSet;
use crate::scenario::ScenarioResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompensationPlan {
    pub profit_share_rate: f64,
    pub ad_spend_share_rate: f64,
    pub profit_share_with_fixed_rate: f64,
    pub fixed_salary: f64,
    pub sales_share_rate: f64,
}

impl Default for CompensationPlan {
    fn default() -> Self {
        Self::from(&CompensationConfig::default())
    }
}

impl From<&CompensationConfig> for CompensationPlan {
    fn from(config: &CompensationConfig) -> Self {
        Self {
            profit_share_rate: config.profit_share_rate,
            ad_spend_share_rate: config.ad_spend_share_rate,
            profit_share_with_fixed_rate: config.profit_share_with_fixed_rate,
            fixed_salary: config.fixed_salary,
            sales_share_rate: config.sales_share_rate,
        }
    }
}

/// One row of the pay table. Shares follow the sign of their base, so a
/// losing scenario yields a negative profit share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompensationRow {
    pub cpp: f64,
    pub total_ads_spent: f64,
    pub net_profit: f64,
    pub profit_share: f64,
    pub ad_spend_share: f64,
    pub profit_share_plus_fixed: f64,
    pub sales_share: f64,
}

impl CompensationPlan {
    pub fn row(&self, result: &ScenarioResult) -> CompensationRow {
        CompensationRow {
            cpp: result.cpp,
            total_ads_spent: result.total_ads_spent,
            net_profit: result.net_profit,
            profit_share: result.net_profit * self.profit_share_rate,
            ad_spend_share: result.total_ads_spent * self.ad_spend_share_rate,
            profit_share_plus_fixed: result.net_profit * self.profit_share_with_fixed_rate
                + self.fixed_salary,
            sales_share: result.gross_sales * self.sales_share_rate,
        }
    }

    pub fn schedule(&self, scenarios: &ScenarioSet) -> Vec<CompensationRow> {
        scenarios.iter().map(|result| self.row(result)).collect()
    }
}
