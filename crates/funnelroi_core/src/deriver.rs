//! Scenario derivation: applies lever deltas to a baseline metric set.

use crate::model::{LeverSet, MetricSet, ScenarioFamily};
use crate::projector::bounded;

/// Ceiling on the derived visit -> form rate, tighter than the projector's
/// raw funnel cap.
pub const MAX_DERIVED_CVR: f64 = 0.7;

/// Multipliers the sensitivity analyzer layers on top of the lever-derived
/// factors. The override scales the already-`1 + delta` factor, not the
/// delta itself. Defaults to 1.0 everywhere (no perturbation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverrideFactors {
    pub traffic: f64,
    pub cvr: f64,
    pub win: f64,
}

impl Default for OverrideFactors {
    fn default() -> Self {
        Self {
            traffic: 1.0,
            cvr: 1.0,
            win: 1.0,
        }
    }
}

fn factor(delta: f64) -> f64 {
    1.0 + if delta.is_finite() { delta } else { 0.0 }
}

/// Compute a scenario's effective metric set from the baseline.
///
/// CRO scenarios only adjust traffic, conversion rate, and win rate; the
/// mid-funnel rates pass through untouched. Redesign scenarios additionally
/// adjust the form -> SQL and SQL -> opportunity rates. ARPU, lifespan, and
/// gross margin always pass through unclamped (the projector bounds them
/// later). Pure function: same inputs always yield the same output.
pub fn derive(
    family: ScenarioFamily,
    baseline: &MetricSet,
    levers: &LeverSet,
    overrides: &OverrideFactors,
) -> MetricSet {
    let traffic = baseline.traffic * factor(levers.traffic) * overrides.traffic;
    let cvr = bounded(
        baseline.cvr * factor(levers.cvr) * overrides.cvr,
        0.0,
        MAX_DERIVED_CVR,
    );
    let win = bounded(baseline.win * factor(levers.win) * overrides.win, 0.0, 1.0);

    let (fsql, s2o) = match family {
        ScenarioFamily::Cro => (baseline.fsql, baseline.s2o),
        ScenarioFamily::Redesign => (
            bounded(baseline.fsql * factor(levers.fsql), 0.0, 1.0),
            bounded(baseline.s2o * factor(levers.s2o), 0.0, 1.0),
        ),
    };

    MetricSet {
        traffic,
        cvr,
        fsql,
        s2o,
        win,
        arpu: baseline.arpu,
        lifespan_months: baseline.lifespan_months,
        gm: baseline.gm,
    }
}
