//! Tests for the funnel projection pipeline
//!
//! These tests verify:
//! - The worked reference example produces the expected stage counts
//! - Visits scale linearly with the horizon
//! - Stage outputs are monotone in their inputs within clamp bounds
//! - Safety clamps and non-finite coercion

use crate::defaults::default_baseline;
use crate::model::{InputPeriod, MetricSet};
use crate::projector::{MAX_CVR, project};

use super::assert_close;

/// Reference example: default baseline over 12 months, monthly ARPU.
#[test]
fn test_reference_projection() {
    let totals = project(&default_baseline(), 12, InputPeriod::Monthly);

    assert_close(totals.visits, 540_000.0, "visits");
    assert_close(totals.forms, 8_640.0, "forms");
    assert_close(totals.sqls, 3_024.0, "sqls");
    assert_close(totals.opps, 1_360.8, "opps");
    assert_close(totals.wins, 381.024, "wins");
    assert_close(totals.ltv, 126_000.0, "ltv");
    assert_close(totals.revenue, 48_009_024.0, "revenue");
    assert_close(totals.gross_profit, 36_006_768.0, "gross profit");
}

/// Visits at horizon 1, scaled by the horizon, equal visits at the full
/// horizon.
#[test]
fn test_visits_linear_in_horizon() {
    let metrics = default_baseline();
    for horizon in [12_u32, 24] {
        let monthly = project(&metrics, 1, InputPeriod::Monthly);
        let full = project(&metrics, horizon, InputPeriod::Monthly);
        assert_close(
            monthly.visits * f64::from(horizon),
            full.visits,
            "visits linearity",
        );
    }
}

/// Raising any rate input (within clamp bounds) never lowers downstream
/// totals.
#[test]
fn test_monotone_in_inputs() {
    let base = default_baseline();
    let baseline_totals = project(&base, 12, InputPeriod::Monthly);

    let bumps: [(&str, MetricSet); 6] = [
        ("traffic", MetricSet { traffic: base.traffic + 1_000.0, ..base }),
        ("cvr", MetricSet { cvr: base.cvr + 0.005, ..base }),
        ("fsql", MetricSet { fsql: base.fsql + 0.05, ..base }),
        ("s2o", MetricSet { s2o: base.s2o + 0.05, ..base }),
        ("win", MetricSet { win: base.win + 0.05, ..base }),
        ("gm", MetricSet { gm: base.gm + 0.05, ..base }),
    ];

    for (label, bumped) in bumps {
        let totals = project(&bumped, 12, InputPeriod::Monthly);
        assert!(
            totals.gross_profit >= baseline_totals.gross_profit,
            "gross profit should not decrease when {label} increases"
        );
    }
}

/// Annual ARPU is divided by 12 before the lifespan multiplication.
#[test]
fn test_annual_arpu_interpretation() {
    let metrics = MetricSet {
        arpu: 12_000.0,
        ..default_baseline()
    };
    let totals = project(&metrics, 12, InputPeriod::Annual);
    assert_close(totals.ltv, 1_000.0 * 36.0, "annual ltv");
}

/// The visit -> form rate is hard-capped at 80% regardless of the input.
#[test]
fn test_cvr_safety_cap() {
    let metrics = MetricSet {
        cvr: 0.95,
        ..default_baseline()
    };
    let totals = project(&metrics, 1, InputPeriod::Monthly);
    assert_close(totals.forms, totals.visits * MAX_CVR, "capped forms");
}

/// Non-finite and negative inputs coerce to their floors instead of
/// propagating.
#[test]
fn test_input_coercion() {
    let metrics = MetricSet {
        traffic: f64::NAN,
        cvr: -0.5,
        lifespan_months: 0.0,
        ..default_baseline()
    };
    let totals = project(&metrics, 12, InputPeriod::Monthly);

    assert_close(totals.visits, 0.0, "nan traffic");
    assert_close(totals.forms, 0.0, "negative cvr");
    // Lifespan floors at one month.
    assert_close(totals.ltv, metrics.arpu, "lifespan floor");
}

/// Projection is a pure function: identical inputs give identical outputs.
#[test]
fn test_projection_is_deterministic() {
    let metrics = default_baseline();
    let first = project(&metrics, 24, InputPeriod::Annual);
    let second = project(&metrics, 24, InputPeriod::Annual);
    assert_eq!(first, second);
}
