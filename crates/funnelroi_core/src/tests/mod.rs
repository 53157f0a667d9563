//! Unit tests for the funnel engine
//!
//! Tests are organized by topic:
//! - `projector` - Funnel projection pipeline and clamps
//! - `deriver` - Lever application and family-specific rules
//! - `evaluate` - Cost, ROI, and payback derivation
//! - `sensitivity` - Perturbation table shape and direction
//! - `defaults` - Shipped baseline and scenario defaults
//! - `export` - CSV rendering

mod defaults;
mod projector;
mod sensitivity;

/// Assert two floats agree to within a relative tolerance.
pub(crate) fn assert_close(actual: f64, expected: f64, label: &str) {
    let tolerance = expected.abs().max(1.0) * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "{label}: expected {expected}, got {actual}"
    );
}
