//! Default baseline metrics and the shipped default scenarios.

use crate::model::{LeverSet, MetricSet, Scenario, ScenarioFamily, ValueKind, lever_defs};

/// The default baseline funnel. Percent-kind fields are fractions.
pub fn default_baseline() -> MetricSet {
    MetricSet {
        traffic: 45_000.0,
        cvr: 0.016,
        fsql: 0.35,
        s2o: 0.45,
        win: 0.28,
        arpu: 3_500.0,
        lifespan_months: 36.0,
        gm: 0.75,
    }
}

/// Scale factors for the three shipped scenarios. "Conservative" keeps the
/// unscaled lever defaults while "Base" halves them; the inverted naming is
/// preserved from the shipped defaults.
const SCENARIO_SCALES: [(&str, f64); 3] =
    [("Base", 0.5), ("Conservative", 1.0), ("Aggressive", 1.5)];

/// The three default scenarios for a family. Percent levers take the
/// family's lever default scaled per scenario, clamped to the lever's
/// bounds; currency levers take the default unscaled.
pub fn default_scenarios(family: ScenarioFamily) -> Vec<Scenario> {
    SCENARIO_SCALES
        .iter()
        .map(|(name, scale)| {
            let mut levers = LeverSet::default();
            for def in lever_defs(family) {
                let value = match def.kind {
                    ValueKind::Percent => {
                        let scaled = def.default * scale;
                        match def.max {
                            Some(max) => scaled.clamp(def.min, max),
                            None => scaled.max(def.min),
                        }
                    }
                    _ => def.default,
                };
                levers.set(def.id, value);
            }
            Scenario {
                name: (*name).to_string(),
                levers,
            }
        })
        .collect()
}
