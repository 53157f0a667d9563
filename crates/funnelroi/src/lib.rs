//! Terminal UI for the marketing-funnel ROI calculator
//!
//! The engine lives in `funnelroi_core`; this crate owns all mutable input
//! state (baseline metrics, scenario levers, horizon, tab selection),
//! re-runs the engine on demand, renders the result tables, persists the
//! last-edited inputs as JSON, and exports evaluations as CSV.

#![warn(clippy::all)]

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
