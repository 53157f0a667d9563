//! Financial evaluation: baseline vs. scenario projections into ROI and
//! payback figures.

use crate::deriver::{OverrideFactors, derive};
use crate::model::{
    EvaluationSet, FunnelTotals, InputPeriod, LeverSet, MetricSet, Scenario, ScenarioFamily,
    ScenarioResult,
};
use crate::projector::project;

/// Total scenario cost over the horizon.
pub fn total_cost(levers: &LeverSet, horizon: u32) -> f64 {
    levers.cost_one_time + levers.cost_monthly * f64::from(horizon)
}

/// ROI over the horizon: (incremental gross profit - cost) / cost.
///
/// With no cost to recoup, ROI is `+infinity` when incremental profit is
/// positive and undefined otherwise.
pub fn calc_roi(incremental_gp: f64, total_cost: f64) -> Option<f64> {
    if total_cost > 0.0 {
        Some((incremental_gp - total_cost) / total_cost)
    } else if incremental_gp > 0.0 {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Month-by-month cumulative payback simulation.
///
/// Returns the first month where cumulative incremental gross profit meets
/// or exceeds cumulative cost. `None` when the monthly incremental profit is
/// non-positive (the cost can never be recouped) or when the horizon is
/// exhausted without crossing.
pub fn calc_payback(
    base_monthly_gp: f64,
    scenario_monthly_gp: f64,
    cost_one_time: f64,
    cost_monthly: f64,
    horizon: u32,
) -> Option<u32> {
    let incremental = scenario_monthly_gp - base_monthly_gp;
    if incremental <= 0.0 {
        return None;
    }

    let mut cumulative_profit = 0.0;
    let mut cumulative_cost = cost_one_time;
    for month in 1..=horizon {
        cumulative_profit += incremental;
        cumulative_cost += cost_monthly;
        if cumulative_profit >= cumulative_cost {
            return Some(month);
        }
    }
    None
}

/// Evaluate one scenario with sensitivity overrides applied to its derived
/// factors. Used by the sensitivity analyzer; plain evaluation passes the
/// default (all 1.0) overrides.
pub fn evaluate_with_overrides(
    baseline: &MetricSet,
    scenario: &Scenario,
    family: ScenarioFamily,
    horizon: u32,
    period: InputPeriod,
    overrides: &OverrideFactors,
) -> ScenarioResult {
    let baseline_totals = project(baseline, horizon, period);
    let baseline_monthly = project(baseline, 1, period);
    evaluate_against(
        &baseline_totals,
        &baseline_monthly,
        baseline,
        scenario,
        family,
        horizon,
        period,
        overrides,
    )
}

#[allow(clippy::too_many_arguments)]
fn evaluate_against(
    baseline_totals: &FunnelTotals,
    baseline_monthly: &FunnelTotals,
    baseline: &MetricSet,
    scenario: &Scenario,
    family: ScenarioFamily,
    horizon: u32,
    period: InputPeriod,
    overrides: &OverrideFactors,
) -> ScenarioResult {
    let derived = derive(family, baseline, &scenario.levers, overrides);
    let totals = project(&derived, horizon, period);
    let monthly = project(&derived, 1, period);

    let total_cost = total_cost(&scenario.levers, horizon);
    let incremental_gp = totals.gross_profit - baseline_totals.gross_profit;
    let roi = calc_roi(incremental_gp, total_cost);
    let payback = calc_payback(
        baseline_monthly.gross_profit,
        monthly.gross_profit,
        scenario.levers.cost_one_time,
        scenario.levers.cost_monthly,
        horizon,
    );

    ScenarioResult {
        name: scenario.name.clone(),
        totals,
        incremental_revenue: totals.revenue - baseline_totals.revenue,
        incremental_gp,
        total_cost,
        roi,
        payback,
        levers: scenario.levers,
    }
}

/// Evaluate one scenario against the baseline.
pub fn evaluate(
    baseline: &MetricSet,
    scenario: &Scenario,
    family: ScenarioFamily,
    horizon: u32,
    period: InputPeriod,
) -> ScenarioResult {
    evaluate_with_overrides(
        baseline,
        scenario,
        family,
        horizon,
        period,
        &OverrideFactors::default(),
    )
}

/// Evaluate an ordered scenario list, preserving input order.
pub fn evaluate_all(
    baseline: &MetricSet,
    family: ScenarioFamily,
    scenarios: &[Scenario],
    horizon: u32,
    period: InputPeriod,
) -> EvaluationSet {
    let baseline_totals = project(baseline, horizon, period);
    let baseline_monthly = project(baseline, 1, period);

    let scenarios = scenarios
        .iter()
        .map(|scenario| {
            evaluate_against(
                &baseline_totals,
                &baseline_monthly,
                baseline,
                scenario,
                family,
                horizon,
                period,
                &OverrideFactors::default(),
            )
        })
        .collect();

    EvaluationSet {
        baseline_totals,
        scenarios,
    }
}
