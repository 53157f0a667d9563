//! Tests for the sensitivity analyzer
//!
//! These tests verify:
//! - Exactly three rows per scenario, in the fixed lever order
//! - Downside/base/upside revenue ordering for a positive funnel
//! - The base column matches the unperturbed evaluation

use crate::defaults::{default_baseline, default_scenarios};
use crate::evaluate::evaluate;
use crate::model::{InputPeriod, ScenarioFamily};
use crate::sensitivity::{SENSITIVITY_LEVERS, SensitivityLever, analyze, analyze_all};

use super::assert_close;

/// Three rows in the order traffic, conversion, win rate, for both
/// families.
#[test]
fn test_row_shape_and_order() {
    let baseline = default_baseline();

    for family in ScenarioFamily::ALL {
        let scenario = &default_scenarios(family)[0];
        let rows = analyze(&baseline, family, scenario, 12, InputPeriod::Monthly);

        assert_eq!(rows.len(), 3, "exactly three rows for {family:?}");
        let order: Vec<SensitivityLever> = rows.iter().map(|row| row.lever).collect();
        assert_eq!(order, SENSITIVITY_LEVERS.to_vec());
    }
}

/// Perturbing a lever down never raises revenue, and up never lowers it.
#[test]
fn test_perturbation_direction() {
    let baseline = default_baseline();
    let scenario = &default_scenarios(ScenarioFamily::Cro)[1];
    let rows = analyze(&baseline, ScenarioFamily::Cro, scenario, 12, InputPeriod::Monthly);

    for row in rows {
        assert!(
            row.minus_revenue <= row.base_revenue && row.base_revenue <= row.plus_revenue,
            "revenue ordering for {:?}",
            row.lever
        );
    }
}

/// The base column is the scenario's unperturbed revenue.
#[test]
fn test_base_column_matches_evaluation() {
    let baseline = default_baseline();
    let scenario = &default_scenarios(ScenarioFamily::Redesign)[2];

    let rows = analyze(
        &baseline,
        ScenarioFamily::Redesign,
        scenario,
        24,
        InputPeriod::Monthly,
    );
    let result = evaluate(
        &baseline,
        scenario,
        ScenarioFamily::Redesign,
        24,
        InputPeriod::Monthly,
    );

    for row in rows {
        assert_close(row.base_revenue, result.totals.revenue, "base revenue");
    }
}

/// Flattened analysis keeps scenario order, three rows each.
#[test]
fn test_analyze_all_flattens_in_order() {
    let baseline = default_baseline();
    let scenarios = default_scenarios(ScenarioFamily::Cro);

    let rows = analyze_all(
        &baseline,
        ScenarioFamily::Cro,
        &scenarios,
        12,
        InputPeriod::Monthly,
    );

    assert_eq!(rows.len(), 9);
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row.scenario, scenarios[index / 3].name);
    }
}
