//! Serialized snapshot of the last-edited inputs.
//!
//! Persistence is best-effort: on load, any missing field falls back to a
//! versioned default. The baseline merges field-wise over the defaults;
//! scenario lists merge positionally by index against the default
//! scenarios, never by name; lever sets merge key-wise.

use serde::{Deserialize, Serialize};

use funnelroi_core::{
    InputPeriod, LeverSet, MetricSet, Scenario, ScenarioFamily, default_baseline,
    default_scenarios,
};

use crate::state::AppState;

/// The shape written to `state.json`. Always fully populated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub tab: ScenarioFamily,
    pub horizon: u32,
    pub input_period: InputPeriod,
    pub baseline: MetricSet,
    pub scenarios: FamilyScenarios,
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyScenarios {
    pub cro: Vec<Scenario>,
    pub redesign: Vec<Scenario>,
}

impl StateSnapshot {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            tab: state.family(),
            horizon: state.horizon,
            input_period: state.input_period,
            baseline: state.baseline,
            scenarios: FamilyScenarios {
                cro: state.cro_scenarios.clone(),
                redesign: state.redesign_scenarios.clone(),
            },
        }
    }
}

// ============================================================================
// Tolerant stored shapes (every field optional)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredSnapshot {
    pub tab: Option<String>,
    pub horizon: Option<f64>,
    pub input_period: Option<String>,
    pub baseline: StoredMetricSet,
    pub scenarios: StoredFamilyScenarios,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoredFamilyScenarios {
    pub cro: Vec<StoredScenario>,
    pub redesign: Vec<StoredScenario>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredMetricSet {
    pub traffic: Option<f64>,
    pub cvr: Option<f64>,
    pub fsql: Option<f64>,
    pub s2o: Option<f64>,
    pub win: Option<f64>,
    pub arpu: Option<f64>,
    pub lifespan_months: Option<f64>,
    pub gm: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoredScenario {
    pub name: Option<String>,
    pub levers: StoredLeverSet,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredLeverSet {
    pub traffic: Option<f64>,
    pub cvr: Option<f64>,
    pub fsql: Option<f64>,
    pub s2o: Option<f64>,
    pub win: Option<f64>,
    pub cost_one_time: Option<f64>,
    pub cost_monthly: Option<f64>,
}

/// A stored snapshot resolved against the defaults.
#[derive(Debug, Clone)]
pub struct ResolvedSnapshot {
    pub tab: ScenarioFamily,
    pub horizon: u32,
    pub input_period: InputPeriod,
    pub baseline: MetricSet,
    pub cro: Vec<Scenario>,
    pub redesign: Vec<Scenario>,
}

impl StoredSnapshot {
    /// Resolve against versioned defaults. Unknown tab strings fall back to
    /// cro, any horizon other than 24 to 12, any period other than annual
    /// to monthly.
    pub fn resolve(self) -> ResolvedSnapshot {
        let tab = match self.tab.as_deref() {
            Some("redesign") => ScenarioFamily::Redesign,
            _ => ScenarioFamily::Cro,
        };
        let horizon = if self.horizon == Some(24.0) { 24 } else { 12 };
        let input_period = match self.input_period.as_deref() {
            Some("annual") => InputPeriod::Annual,
            _ => InputPeriod::Monthly,
        };

        ResolvedSnapshot {
            tab,
            horizon,
            input_period,
            baseline: self.baseline.merge_over(default_baseline()),
            cro: merge_scenarios(default_scenarios(ScenarioFamily::Cro), self.scenarios.cro),
            redesign: merge_scenarios(
                default_scenarios(ScenarioFamily::Redesign),
                self.scenarios.redesign,
            ),
        }
    }
}

impl StoredMetricSet {
    fn merge_over(self, mut base: MetricSet) -> MetricSet {
        if let Some(v) = self.traffic {
            base.traffic = v;
        }
        if let Some(v) = self.cvr {
            base.cvr = v;
        }
        if let Some(v) = self.fsql {
            base.fsql = v;
        }
        if let Some(v) = self.s2o {
            base.s2o = v;
        }
        if let Some(v) = self.win {
            base.win = v;
        }
        if let Some(v) = self.arpu {
            base.arpu = v;
        }
        if let Some(v) = self.lifespan_months {
            base.lifespan_months = v;
        }
        if let Some(v) = self.gm {
            base.gm = v;
        }
        base
    }
}

impl StoredLeverSet {
    fn merge_over(self, mut base: LeverSet) -> LeverSet {
        if let Some(v) = self.traffic {
            base.traffic = v;
        }
        if let Some(v) = self.cvr {
            base.cvr = v;
        }
        if let Some(v) = self.fsql {
            base.fsql = v;
        }
        if let Some(v) = self.s2o {
            base.s2o = v;
        }
        if let Some(v) = self.win {
            base.win = v;
        }
        if let Some(v) = self.cost_one_time {
            base.cost_one_time = v;
        }
        if let Some(v) = self.cost_monthly {
            base.cost_monthly = v;
        }
        base
    }
}

/// Positional merge: the i-th stored scenario overlays the i-th default.
/// Extra stored entries are dropped; missing entries keep the default. An
/// empty stored name also keeps the default name.
fn merge_scenarios(defaults: Vec<Scenario>, stored: Vec<StoredScenario>) -> Vec<Scenario> {
    let mut stored = stored.into_iter();
    defaults
        .into_iter()
        .map(|default| match stored.next() {
            None => default,
            Some(overlay) => Scenario {
                name: overlay
                    .name
                    .filter(|name| !name.is_empty())
                    .unwrap_or(default.name),
                levers: overlay.levers.merge_over(default.levers),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use funnelroi_core::LeverId;

    #[test]
    fn test_empty_snapshot_resolves_to_defaults() {
        let resolved = StoredSnapshot::default().resolve();

        assert_eq!(resolved.tab, ScenarioFamily::Cro);
        assert_eq!(resolved.horizon, 12);
        assert_eq!(resolved.input_period, InputPeriod::Monthly);
        assert_eq!(resolved.baseline, default_baseline());
        assert_eq!(resolved.cro, default_scenarios(ScenarioFamily::Cro));
        assert_eq!(resolved.redesign, default_scenarios(ScenarioFamily::Redesign));
    }

    #[test]
    fn test_invalid_fields_fall_back() {
        let stored = StoredSnapshot {
            tab: Some("portfolio".to_string()),
            horizon: Some(18.0),
            input_period: Some("weekly".to_string()),
            ..StoredSnapshot::default()
        };
        let resolved = stored.resolve();

        assert_eq!(resolved.tab, ScenarioFamily::Cro);
        assert_eq!(resolved.horizon, 12);
        assert_eq!(resolved.input_period, InputPeriod::Monthly);
    }

    #[test]
    fn test_baseline_merges_field_wise() {
        let stored = StoredSnapshot {
            baseline: StoredMetricSet {
                traffic: Some(60_000.0),
                ..StoredMetricSet::default()
            },
            ..StoredSnapshot::default()
        };
        let resolved = stored.resolve();

        assert_eq!(resolved.baseline.traffic, 60_000.0);
        assert_eq!(resolved.baseline.cvr, default_baseline().cvr);
    }

    #[test]
    fn test_scenarios_merge_positionally() {
        let stored = StoredSnapshot {
            scenarios: StoredFamilyScenarios {
                cro: vec![
                    StoredScenario::default(),
                    StoredScenario {
                        name: Some("Renamed".to_string()),
                        levers: StoredLeverSet {
                            cvr: Some(0.42),
                            ..StoredLeverSet::default()
                        },
                    },
                ],
                redesign: Vec::new(),
            },
            ..StoredSnapshot::default()
        };
        let resolved = stored.resolve();
        let defaults = default_scenarios(ScenarioFamily::Cro);

        // First entry had nothing stored, so it stays the default.
        assert_eq!(resolved.cro[0], defaults[0]);
        // Second entry overlays name and one lever, keeps the rest.
        assert_eq!(resolved.cro[1].name, "Renamed");
        assert_eq!(resolved.cro[1].levers.get(LeverId::Cvr), 0.42);
        assert_eq!(
            resolved.cro[1].levers.get(LeverId::CostOneTime),
            defaults[1].levers.get(LeverId::CostOneTime)
        );
        // Missing third entry keeps the default.
        assert_eq!(resolved.cro[2], defaults[2]);
    }

    #[test]
    fn test_empty_stored_name_keeps_default() {
        let stored = StoredSnapshot {
            scenarios: StoredFamilyScenarios {
                cro: vec![StoredScenario {
                    name: Some(String::new()),
                    levers: StoredLeverSet::default(),
                }],
                redesign: Vec::new(),
            },
            ..StoredSnapshot::default()
        };
        let resolved = stored.resolve();
        assert_eq!(resolved.cro[0].name, "Base");
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let state = AppState::default();
        let snapshot = StateSnapshot::from_state(&state);
        let json = serde_json::to_string(&snapshot).expect("serialize");

        let stored: StoredSnapshot = serde_json::from_str(&json).expect("parse");
        let resolved = stored.resolve();

        assert_eq!(resolved.horizon, state.horizon);
        assert_eq!(resolved.baseline, state.baseline);
        assert_eq!(resolved.cro, state.cro_scenarios);
        assert_eq!(resolved.redesign, state.redesign_scenarios);
    }
}
