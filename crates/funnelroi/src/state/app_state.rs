//! Application state: all mutable inputs plus cached engine results.
//!
//! The engine is stateless; this struct owns the baseline, the scenario
//! lists for both families, and the horizon/period/tab selection, and
//! passes snapshots into the engine on every recalculation.

use funnelroi_core::{
    EvaluationSet, InputPeriod, MetricSet, Scenario, ScenarioFamily, SensitivityRow,
    analyze_all, default_baseline, default_scenarios, evaluate_all,
};

use crate::data::snapshot::ResolvedSnapshot;

use super::panels::DashboardState;
use super::tabs::TabId;

pub struct AppState {
    pub active_tab: TabId,
    /// Projection horizon in months; 12 or 24.
    pub horizon: u32,
    pub input_period: InputPeriod,
    pub baseline: MetricSet,
    pub cro_scenarios: Vec<Scenario>,
    pub redesign_scenarios: Vec<Scenario>,
    pub dashboard: DashboardState,

    /// Engine output for the active tab, refreshed by `recalculate`.
    pub results: Option<EvaluationSet>,
    pub sensitivity: Vec<SensitivityRow>,
    /// Inputs changed since the last recalculation.
    pub needs_recalc: bool,
    /// Inputs changed since the last persist.
    pub dirty: bool,

    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            active_tab: TabId::Cro,
            horizon: 12,
            input_period: InputPeriod::Monthly,
            baseline: default_baseline(),
            cro_scenarios: default_scenarios(ScenarioFamily::Cro),
            redesign_scenarios: default_scenarios(ScenarioFamily::Redesign),
            dashboard: DashboardState::default(),
            results: None,
            sensitivity: Vec::new(),
            needs_recalc: true,
            dirty: false,
            error_message: None,
            status_message: None,
            exit: false,
        };
        state.recalculate();
        state
    }
}

impl AppState {
    /// Build state from a resolved persisted snapshot.
    pub fn from_resolved(resolved: ResolvedSnapshot) -> Self {
        let mut state = Self {
            active_tab: TabId::from_family(resolved.tab),
            horizon: resolved.horizon,
            input_period: resolved.input_period,
            baseline: resolved.baseline,
            cro_scenarios: resolved.cro,
            redesign_scenarios: resolved.redesign,
            ..Self::default()
        };
        state.recalculate();
        state
    }

    pub fn family(&self) -> ScenarioFamily {
        self.active_tab.family()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        match self.active_tab {
            TabId::Cro => &self.cro_scenarios,
            TabId::Redesign => &self.redesign_scenarios,
        }
    }

    pub fn scenarios_mut(&mut self) -> &mut Vec<Scenario> {
        match self.active_tab {
            TabId::Cro => &mut self.cro_scenarios,
            TabId::Redesign => &mut self.redesign_scenarios,
        }
    }

    /// Re-run the engine on the current inputs for the active tab.
    pub fn recalculate(&mut self) {
        let family = self.family();
        let scenarios = self.scenarios().to_vec();
        self.results = Some(evaluate_all(
            &self.baseline,
            family,
            &scenarios,
            self.horizon,
            self.input_period,
        ));
        self.sensitivity = analyze_all(
            &self.baseline,
            family,
            &scenarios,
            self.horizon,
            self.input_period,
        );
        self.needs_recalc = false;
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        if self.active_tab == tab {
            return;
        }
        self.active_tab = tab;
        self.dashboard.scenarios_cursor = 0;
        self.dirty = true;
        self.recalculate();
    }

    pub fn toggle_horizon(&mut self) {
        self.horizon = if self.horizon == 24 { 12 } else { 24 };
        self.dirty = true;
        self.recalculate();
    }

    pub fn toggle_period(&mut self) {
        self.input_period = self.input_period.toggled();
        self.dirty = true;
        self.recalculate();
    }

    /// Mark results stale after an input edit; the user recalculates
    /// explicitly.
    pub fn mark_stale(&mut self) {
        self.needs_recalc = true;
        self.dirty = true;
    }

    pub fn set_error(&mut self, message: String) {
        self.status_message = None;
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_status(&mut self, message: String) {
        self.error_message = None;
        self.status_message = Some(message);
    }
}
