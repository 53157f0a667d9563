//! Scenario families, lever identifiers, and per-family lever tables.

use serde::{Deserialize, Serialize};

use super::metrics::ValueKind;

/// The two scenario families. Each defines its own fixed lever list and
/// bound table; the family is a flat lookup key, not a hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioFamily {
    #[default]
    Cro,
    Redesign,
}

impl ScenarioFamily {
    pub const ALL: [ScenarioFamily; 2] = [ScenarioFamily::Cro, ScenarioFamily::Redesign];

    pub fn key(&self) -> &'static str {
        match self {
            ScenarioFamily::Cro => "cro",
            ScenarioFamily::Redesign => "redesign",
        }
    }
}

/// Identifiers for the scenario levers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeverId {
    Traffic,
    Cvr,
    Fsql,
    S2o,
    Win,
    CostOneTime,
    CostMonthly,
}

/// Per-scenario lever values.
///
/// Percent-kind levers hold fractional deltas (0.10 = +10% on the baseline
/// metric); currency-kind levers hold absolute amounts. Levers that do not
/// apply to a family stay at zero and are ignored by the deriver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeverSet {
    pub traffic: f64,
    pub cvr: f64,
    pub fsql: f64,
    pub s2o: f64,
    pub win: f64,
    pub cost_one_time: f64,
    pub cost_monthly: f64,
}

impl LeverSet {
    pub fn get(&self, id: LeverId) -> f64 {
        match id {
            LeverId::Traffic => self.traffic,
            LeverId::Cvr => self.cvr,
            LeverId::Fsql => self.fsql,
            LeverId::S2o => self.s2o,
            LeverId::Win => self.win,
            LeverId::CostOneTime => self.cost_one_time,
            LeverId::CostMonthly => self.cost_monthly,
        }
    }

    pub fn set(&mut self, id: LeverId, value: f64) {
        match id {
            LeverId::Traffic => self.traffic = value,
            LeverId::Cvr => self.cvr = value,
            LeverId::Fsql => self.fsql = value,
            LeverId::S2o => self.s2o = value,
            LeverId::Win => self.win = value,
            LeverId::CostOneTime => self.cost_one_time = value,
            LeverId::CostMonthly => self.cost_monthly = value,
        }
    }
}

/// A named scenario. The math never depends on the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub levers: LeverSet,
}

/// Descriptor for a scenario lever: label, kind, bounds, and default.
///
/// Bounds and defaults for percent-kind levers are in fraction space.
#[derive(Debug, Clone, Copy)]
pub struct LeverDef {
    pub id: LeverId,
    pub label: &'static str,
    pub kind: ValueKind,
    pub min: f64,
    pub max: Option<f64>,
    pub step: f64,
    pub default: f64,
    pub tip: Option<&'static str>,
}

/// Levers applicable to CRO-program scenarios. Form -> SQL and SQL -> Opp
/// rates are not adjustable here.
pub const CRO_LEVERS: [LeverDef; 5] = [
    LeverDef {
        id: LeverId::Traffic,
        label: "Traffic uplift",
        kind: ValueKind::Percent,
        min: -0.20,
        max: Some(1.50),
        step: 0.01,
        default: 0.10,
        tip: Some("Content velocity, technical SEO, IA."),
    },
    LeverDef {
        id: LeverId::Cvr,
        label: "On-page conversion uplift",
        kind: ValueKind::Percent,
        min: -0.10,
        max: Some(1.50),
        step: 0.01,
        default: 0.15,
        tip: Some("Messaging clarity, forms, offer testing."),
    },
    LeverDef {
        id: LeverId::Win,
        label: "Sales close-rate uplift",
        kind: ValueKind::Percent,
        min: 0.0,
        max: Some(1.00),
        step: 0.01,
        default: 0.05,
        tip: Some("Demo quality, proof, better qualification."),
    },
    LeverDef {
        id: LeverId::CostOneTime,
        label: "Project cost (one-time)",
        kind: ValueKind::Currency,
        min: 0.0,
        max: None,
        step: 1000.0,
        default: 30_000.0,
        tip: None,
    },
    LeverDef {
        id: LeverId::CostMonthly,
        label: "Ongoing monthly cost",
        kind: ValueKind::Currency,
        min: 0.0,
        max: None,
        step: 500.0,
        default: 6_000.0,
        tip: None,
    },
];

/// Levers applicable to site-redesign scenarios.
pub const REDESIGN_LEVERS: [LeverDef; 7] = [
    LeverDef {
        id: LeverId::Traffic,
        label: "Organic traffic growth",
        kind: ValueKind::Percent,
        min: -0.10,
        max: Some(2.00),
        step: 0.01,
        default: 0.35,
        tip: Some("Foundational IA + SEO lifts."),
    },
    LeverDef {
        id: LeverId::Cvr,
        label: "Sitewide conversion uplift",
        kind: ValueKind::Percent,
        min: -0.10,
        max: Some(1.50),
        step: 0.01,
        default: 0.25,
        tip: Some("UX, offer clarity, speed."),
    },
    LeverDef {
        id: LeverId::Fsql,
        label: "Form -> SQL rate change",
        kind: ValueKind::Percent,
        min: -0.10,
        max: Some(1.00),
        step: 0.01,
        default: 0.10,
        tip: Some("Routing, better questions."),
    },
    LeverDef {
        id: LeverId::S2o,
        label: "SQL -> Opp rate change",
        kind: ValueKind::Percent,
        min: -0.10,
        max: Some(1.00),
        step: 0.01,
        default: 0.08,
        tip: Some("ICP clarity, qualification."),
    },
    LeverDef {
        id: LeverId::Win,
        label: "Opp -> Win rate change",
        kind: ValueKind::Percent,
        min: -0.10,
        max: Some(1.00),
        step: 0.01,
        default: 0.05,
        tip: Some("Proof, case studies, urgency."),
    },
    LeverDef {
        id: LeverId::CostOneTime,
        label: "One-time redesign investment",
        kind: ValueKind::Currency,
        min: 0.0,
        max: None,
        step: 1000.0,
        default: 120_000.0,
        tip: None,
    },
    LeverDef {
        id: LeverId::CostMonthly,
        label: "Monthly operating cost",
        kind: ValueKind::Currency,
        min: 0.0,
        max: None,
        step: 500.0,
        default: 15_000.0,
        tip: None,
    },
];

/// The fixed lever table for a scenario family.
pub fn lever_defs(family: ScenarioFamily) -> &'static [LeverDef] {
    match family {
        ScenarioFamily::Cro => &CRO_LEVERS,
        ScenarioFamily::Redesign => &REDESIGN_LEVERS,
    }
}
