//! Funnel projection: input metrics to absolute stage counts over a horizon.

use crate::model::{FunnelTotals, InputPeriod, MetricSet};

/// Hard cap on the visit -> form rate. Conversion-rate-type metrics are
/// always capped below 1 regardless of upstream lever math, preventing
/// runaway compounding from extreme lever inputs.
pub const MAX_CVR: f64 = 0.8;

/// Clamp with a non-finite guard: invalid inputs coerce to the floor.
pub(crate) fn bounded(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() { value.clamp(min, max) } else { min }
}

/// Floor with a non-finite guard.
pub(crate) fn floored(value: f64, min: f64) -> f64 {
    if value.is_finite() { value.max(min) } else { min }
}

/// Project a metric set over `horizon_months`.
///
/// All inputs are coerced via floors and clamps, never rejected. The clamps
/// here are safety bounds independent of any lever's own UI bounds.
pub fn project(metrics: &MetricSet, horizon_months: u32, period: InputPeriod) -> FunnelTotals {
    let visits = floored(metrics.traffic, 0.0) * f64::from(horizon_months);
    let forms = visits * bounded(metrics.cvr, 0.0, MAX_CVR);
    let sqls = forms * bounded(metrics.fsql, 0.0, 1.0);
    let opps = sqls * bounded(metrics.s2o, 0.0, 1.0);
    let wins = opps * bounded(metrics.win, 0.0, 1.0);

    let arpu = if metrics.arpu.is_finite() { metrics.arpu } else { 0.0 };
    let monthly_arpu = match period {
        InputPeriod::Annual => arpu / 12.0,
        InputPeriod::Monthly => arpu,
    };
    let ltv = monthly_arpu * floored(metrics.lifespan_months, 1.0);

    let revenue = wins * ltv;
    let gross_profit = revenue * bounded(metrics.gm, 0.0, 1.0);

    FunnelTotals {
        visits,
        forms,
        sqls,
        opps,
        wins,
        revenue,
        gross_profit,
        ltv,
    }
}
