//! Panel focus and selection state for the dashboard screen.

/// The focusable input panels. Result tables are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    Baseline,
    Scenarios,
}

impl DashboardPanel {
    pub fn toggled(self) -> Self {
        match self {
            DashboardPanel::Baseline => DashboardPanel::Scenarios,
            DashboardPanel::Scenarios => DashboardPanel::Baseline,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub focus: DashboardPanel,
    /// Selected row in the baseline panel.
    pub baseline_index: usize,
    /// Selected row in the scenarios panel, flattened over
    /// scenario blocks (name row followed by the family's levers).
    pub scenarios_cursor: usize,
    pub editing: bool,
    pub edit_buffer: String,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            focus: DashboardPanel::Baseline,
            baseline_index: 0,
            scenarios_cursor: 0,
            editing: false,
            edit_buffer: String::new(),
        }
    }
}
