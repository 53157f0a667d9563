//! Sensitivity analysis: +/-10% single-lever perturbations.

use crate::deriver::OverrideFactors;
use crate::evaluate::{evaluate, evaluate_with_overrides};
use crate::model::{InputPeriod, MetricSet, Scenario, ScenarioFamily};

/// Downside and upside multipliers applied to a single lever's derived
/// factor.
const DOWNSIDE: f64 = 0.9;
const UPSIDE: f64 = 1.1;

/// The levers the analyzer perturbs, in fixed output order, for any
/// scenario family.
pub const SENSITIVITY_LEVERS: [SensitivityLever; 3] = [
    SensitivityLever::Traffic,
    SensitivityLever::Cvr,
    SensitivityLever::Win,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitivityLever {
    Traffic,
    Cvr,
    Win,
}

impl SensitivityLever {
    pub fn label(&self) -> &'static str {
        match self {
            SensitivityLever::Traffic => "Traffic",
            SensitivityLever::Cvr => "Conversion",
            SensitivityLever::Win => "Win rate",
        }
    }

    fn overrides(&self, multiplier: f64) -> OverrideFactors {
        let mut overrides = OverrideFactors::default();
        match self {
            SensitivityLever::Traffic => overrides.traffic = multiplier,
            SensitivityLever::Cvr => overrides.cvr = multiplier,
            SensitivityLever::Win => overrides.win = multiplier,
        }
        overrides
    }
}

/// One row of the sensitivity table: scenario revenue with the lever's
/// factor scaled down, unchanged, and scaled up.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityRow {
    pub scenario: String,
    pub lever: SensitivityLever,
    pub minus_revenue: f64,
    pub base_revenue: f64,
    pub plus_revenue: f64,
}

/// Analyze one scenario. Always produces exactly three rows, in the order
/// traffic, conversion, win rate.
pub fn analyze(
    baseline: &MetricSet,
    family: ScenarioFamily,
    scenario: &Scenario,
    horizon: u32,
    period: InputPeriod,
) -> Vec<SensitivityRow> {
    let base = evaluate(baseline, scenario, family, horizon, period);

    SENSITIVITY_LEVERS
        .iter()
        .map(|lever| {
            let minus = evaluate_with_overrides(
                baseline,
                scenario,
                family,
                horizon,
                period,
                &lever.overrides(DOWNSIDE),
            );
            let plus = evaluate_with_overrides(
                baseline,
                scenario,
                family,
                horizon,
                period,
                &lever.overrides(UPSIDE),
            );
            SensitivityRow {
                scenario: scenario.name.clone(),
                lever: *lever,
                minus_revenue: minus.totals.revenue,
                base_revenue: base.totals.revenue,
                plus_revenue: plus.totals.revenue,
            }
        })
        .collect()
}

/// Analyze an ordered scenario list, flattening rows in scenario order.
pub fn analyze_all(
    baseline: &MetricSet,
    family: ScenarioFamily,
    scenarios: &[Scenario],
    horizon: u32,
    period: InputPeriod,
) -> Vec<SensitivityRow> {
    scenarios
        .iter()
        .flat_map(|scenario| analyze(baseline, family, scenario, horizon, period))
        .collect()
}
