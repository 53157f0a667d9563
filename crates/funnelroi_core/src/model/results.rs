//! Projection and evaluation output types.

use serde::{Deserialize, Serialize};

use super::levers::LeverSet;

/// Absolute funnel-stage counts and derived revenue over a horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelTotals {
    pub visits: f64,
    pub forms: f64,
    pub sqls: f64,
    pub opps: f64,
    pub wins: f64,
    pub revenue: f64,
    pub gross_profit: f64,
    /// Lifetime value per won customer (monthly ARPU x lifespan).
    pub ltv: f64,
}

/// Financial outcome of one scenario against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub name: String,
    pub totals: FunnelTotals,
    pub incremental_revenue: f64,
    pub incremental_gp: f64,
    pub total_cost: f64,
    /// `Some(f64::INFINITY)` when there is no cost to recoup but positive
    /// incremental profit; `None` when ROI is undefined.
    pub roi: Option<f64>,
    /// First month where cumulative incremental gross profit covers
    /// cumulative cost. `None` when no payback is possible or the horizon
    /// is exhausted without crossing.
    pub payback: Option<u32>,
    pub levers: LeverSet,
}

/// Baseline totals plus scenario results, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSet {
    pub baseline_totals: FunnelTotals,
    pub scenarios: Vec<ScenarioResult>,
}
