mod levers;
mod metrics;
mod results;

pub use levers::{
    CRO_LEVERS, LeverDef, LeverId, LeverSet, REDESIGN_LEVERS, Scenario, ScenarioFamily, lever_defs,
};
pub use metrics::{
    BASELINE_METRICS, InputPeriod, MetricDef, MetricId, MetricSet, ValueKind, metric_defs,
};
pub use results::{EvaluationSet, FunnelTotals, ScenarioResult};
