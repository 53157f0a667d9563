//! Marketing-funnel ROI projection engine
//!
//! This crate turns baseline funnel metrics and per-scenario lever deltas
//! into projected revenue, gross profit, ROI, and payback figures. It
//! supports:
//! - Funnel projection over a month horizon (visits -> forms -> SQLs ->
//!   opportunities -> wins -> revenue -> gross profit)
//! - Two scenario families (CRO program, site redesign) with their own
//!   lever tables and bounds
//! - ROI and payback derivation via a month-by-month cumulative simulation
//! - A +/-10% single-lever sensitivity analysis
//! - A delimited-text (CSV) rendering of an evaluation
//!
//! Every operation here is a pure, deterministic function of its inputs.
//! The engine holds no state, performs no I/O, and never errors: invalid
//! numeric inputs are coerced to safe bounds instead of being rejected.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod defaults;
pub mod deriver;
pub mod evaluate;
pub mod export;
pub mod projector;
pub mod sensitivity;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use defaults::{default_baseline, default_scenarios};
pub use deriver::{OverrideFactors, derive};
pub use evaluate::{calc_payback, calc_roi, evaluate, evaluate_all, total_cost};
pub use model::{
    EvaluationSet, FunnelTotals, InputPeriod, LeverDef, LeverId, LeverSet, MetricDef, MetricId,
    MetricSet, Scenario, ScenarioFamily, ScenarioResult, ValueKind, lever_defs, metric_defs,
};
pub use projector::project;
pub use sensitivity::{SENSITIVITY_LEVERS, SensitivityLever, SensitivityRow, analyze, analyze_all};
