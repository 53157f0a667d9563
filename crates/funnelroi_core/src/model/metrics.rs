//! Funnel input parameters and their field descriptors.

use serde::{Deserialize, Serialize};

/// How the revenue-per-customer input should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPeriod {
    #[default]
    Monthly,
    Annual,
}

impl InputPeriod {
    pub fn toggled(self) -> Self {
        match self {
            InputPeriod::Monthly => InputPeriod::Annual,
            InputPeriod::Annual => InputPeriod::Monthly,
        }
    }
}

/// The funnel's input parameters.
///
/// Percent-kind fields are stored as fractions in 0-1, never as 0-100
/// display values; conversion to display percentages is a presentation
/// concern only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSet {
    /// Sessions per month.
    pub traffic: f64,
    /// Visit -> form rate.
    pub cvr: f64,
    /// Form -> SQL rate.
    pub fsql: f64,
    /// SQL -> opportunity rate.
    pub s2o: f64,
    /// Opportunity -> closed-won rate.
    pub win: f64,
    /// Revenue per customer per period (see [`InputPeriod`]).
    pub arpu: f64,
    /// Average customer lifespan in months.
    pub lifespan_months: f64,
    /// Gross margin fraction.
    pub gm: f64,
}

impl MetricSet {
    pub fn get(&self, id: MetricId) -> f64 {
        match id {
            MetricId::Traffic => self.traffic,
            MetricId::Cvr => self.cvr,
            MetricId::Fsql => self.fsql,
            MetricId::S2o => self.s2o,
            MetricId::Win => self.win,
            MetricId::Arpu => self.arpu,
            MetricId::LifespanMonths => self.lifespan_months,
            MetricId::Gm => self.gm,
        }
    }

    pub fn set(&mut self, id: MetricId, value: f64) {
        match id {
            MetricId::Traffic => self.traffic = value,
            MetricId::Cvr => self.cvr = value,
            MetricId::Fsql => self.fsql = value,
            MetricId::S2o => self.s2o = value,
            MetricId::Win => self.win = value,
            MetricId::Arpu => self.arpu = value,
            MetricId::LifespanMonths => self.lifespan_months = value,
            MetricId::Gm => self.gm = value,
        }
    }
}

/// Identifiers for the baseline metric fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricId {
    Traffic,
    Cvr,
    Fsql,
    S2o,
    Win,
    Arpu,
    LifespanMonths,
    Gm,
}

/// The unit kind of an input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Percent,
    Currency,
}

/// Descriptor for a baseline metric field: label, kind, and input bounds.
///
/// Bounds for percent-kind fields are in fraction space. `max` of `None`
/// means the field is only floored at `min`.
#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub id: MetricId,
    pub label: &'static str,
    pub kind: ValueKind,
    pub min: f64,
    pub max: Option<f64>,
    pub step: f64,
    pub hint: &'static str,
}

/// Baseline metric descriptors, in display order.
pub const BASELINE_METRICS: [MetricDef; 8] = [
    MetricDef {
        id: MetricId::Traffic,
        label: "Monthly traffic (sessions)",
        kind: ValueKind::Number,
        min: 0.0,
        max: None,
        step: 100.0,
        hint: "Pull from GA4: Reports -> Engagement -> Pages & screens.",
    },
    MetricDef {
        id: MetricId::Cvr,
        label: "Primary CTA conversion rate",
        kind: ValueKind::Percent,
        min: 0.0,
        max: Some(0.50),
        step: 0.001,
        hint: "Visit -> form rate. Most teams land between 0.5% and 3%.",
    },
    MetricDef {
        id: MetricId::Fsql,
        label: "Form -> SQL rate",
        kind: ValueKind::Percent,
        min: 0.0,
        max: Some(1.0),
        step: 0.01,
        hint: "How many form fills qualify for sales.",
    },
    MetricDef {
        id: MetricId::S2o,
        label: "SQL -> Opportunity rate",
        kind: ValueKind::Percent,
        min: 0.0,
        max: Some(1.0),
        step: 0.01,
        hint: "Sales acceptance rate from CRM.",
    },
    MetricDef {
        id: MetricId::Win,
        label: "Win rate (Opp -> Closed Won)",
        kind: ValueKind::Percent,
        min: 0.0,
        max: Some(1.0),
        step: 0.01,
        hint: "Calculated from opportunities forecast.",
    },
    MetricDef {
        id: MetricId::Arpu,
        label: "Avg revenue per customer",
        kind: ValueKind::Currency,
        min: 0.0,
        max: None,
        step: 100.0,
        hint: "Monthly or annual recurring revenue per customer.",
    },
    MetricDef {
        id: MetricId::LifespanMonths,
        label: "Avg customer lifespan",
        kind: ValueKind::Number,
        min: 1.0,
        max: Some(120.0),
        step: 1.0,
        hint: "How long customers typically stay (in months).",
    },
    MetricDef {
        id: MetricId::Gm,
        label: "Gross margin %",
        kind: ValueKind::Percent,
        min: 0.0,
        max: Some(1.0),
        step: 0.01,
        hint: "Needed for ROI math. SaaS averages 70-85%.",
    },
];

/// All baseline metric descriptors.
pub fn metric_defs() -> &'static [MetricDef] {
    &BASELINE_METRICS
}
