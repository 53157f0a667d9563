//! Tests for shipped defaults
//!
//! These tests verify:
//! - The default baseline values (fractions, not display percents)
//! - The three default scenarios and their percent-lever scaling
//! - Currency levers are never scaled

use crate::defaults::{default_baseline, default_scenarios};
use crate::model::{LeverId, ScenarioFamily};

use super::assert_close;

#[test]
fn test_default_baseline_is_fractional() {
    let baseline = default_baseline();
    assert_close(baseline.traffic, 45_000.0, "traffic");
    assert_close(baseline.cvr, 0.016, "cvr");
    assert_close(baseline.gm, 0.75, "gm");
    assert!(baseline.cvr < 1.0 && baseline.gm <= 1.0, "stored as fractions");
}

/// Each family ships Base / Conservative / Aggressive, with percent levers
/// scaled 0.5x / 1.0x / 1.5x. "Conservative" carries the unscaled default;
/// the inverted naming is intentional.
#[test]
fn test_default_scenario_scaling() {
    for family in ScenarioFamily::ALL {
        let scenarios = default_scenarios(family);
        let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Base", "Conservative", "Aggressive"]);

        let conservative = scenarios[1].levers.get(LeverId::Cvr);
        assert_close(
            scenarios[0].levers.get(LeverId::Cvr),
            conservative * 0.5,
            "base is half",
        );
        assert_close(
            scenarios[2].levers.get(LeverId::Cvr),
            conservative * 1.5,
            "aggressive is 1.5x",
        );
    }
}

#[test]
fn test_currency_levers_unscaled() {
    let scenarios = default_scenarios(ScenarioFamily::Redesign);
    for scenario in &scenarios {
        assert_close(
            scenario.levers.get(LeverId::CostOneTime),
            120_000.0,
            "one-time cost",
        );
        assert_close(
            scenario.levers.get(LeverId::CostMonthly),
            15_000.0,
            "monthly cost",
        );
    }
}

/// CRO scenarios carry no mid-funnel lever deltas.
#[test]
fn test_cro_defaults_leave_mid_funnel_levers_zero() {
    for scenario in default_scenarios(ScenarioFamily::Cro) {
        assert_close(scenario.levers.get(LeverId::Fsql), 0.0, "fsql");
        assert_close(scenario.levers.get(LeverId::S2o), 0.0, "s2o");
    }
}
