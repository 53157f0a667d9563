//! The dashboard screen: baseline inputs and scenario levers on the left,
//! KPI summary, funnel waterfall, and sensitivity tables on the right.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table},
};

use funnelroi_core::{
    InputPeriod, LeverDef, MetricDef, ValueKind, lever_defs, metric_defs,
};

use crate::components::{Component, EventResult};
use crate::state::{AppState, DashboardPanel};
use crate::util::format::{
    edit_text, format_compact_currency, format_delta, format_input, format_lever, format_number,
    format_payback, format_roi,
};

/// Maximum scenario name length, matching the persisted format's limit.
const MAX_NAME_LEN: usize = 30;

pub struct DashboardScreen;

impl DashboardScreen {
    pub fn new() -> Self {
        Self
    }

    /// Rows per scenario block in the scenarios panel: the name row plus
    /// one row per family lever.
    fn block_len(state: &AppState) -> usize {
        lever_defs(state.family()).len() + 1
    }

    /// Decode the flattened scenarios cursor into (scenario, row). Row 0 is
    /// the name; row n is the (n-1)-th lever.
    fn decode_cursor(state: &AppState) -> (usize, usize) {
        let block = Self::block_len(state);
        (
            state.dashboard.scenarios_cursor / block,
            state.dashboard.scenarios_cursor % block,
        )
    }

    fn is_name_edit(state: &AppState) -> bool {
        state.dashboard.focus == DashboardPanel::Scenarios && Self::decode_cursor(state).1 == 0
    }

    fn move_cursor(&self, state: &mut AppState, delta: isize) {
        match state.dashboard.focus {
            DashboardPanel::Baseline => {
                let len = metric_defs().len() as isize;
                let index = state.dashboard.baseline_index as isize + delta;
                state.dashboard.baseline_index = index.clamp(0, len - 1) as usize;
            }
            DashboardPanel::Scenarios => {
                let len = (state.scenarios().len() * Self::block_len(state)) as isize;
                let cursor = state.dashboard.scenarios_cursor as isize + delta;
                state.dashboard.scenarios_cursor = cursor.clamp(0, len - 1) as usize;
            }
        }
    }

    fn begin_edit(&self, state: &mut AppState) {
        let buffer = match state.dashboard.focus {
            DashboardPanel::Baseline => {
                let def = &metric_defs()[state.dashboard.baseline_index];
                edit_text(def.kind, state.baseline.get(def.id))
            }
            DashboardPanel::Scenarios => {
                let (scenario_idx, row) = Self::decode_cursor(state);
                let Some(scenario) = state.scenarios().get(scenario_idx) else {
                    return;
                };
                if row == 0 {
                    scenario.name.clone()
                } else {
                    let def = &lever_defs(state.family())[row - 1];
                    edit_text(def.kind, scenario.levers.get(def.id))
                }
            }
        };
        state.dashboard.editing = true;
        state.dashboard.edit_buffer = buffer;
    }

    fn handle_edit_key(&self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Esc => {
                state.dashboard.editing = false;
                state.dashboard.edit_buffer.clear();
            }
            KeyCode::Enter => self.commit_edit(state),
            KeyCode::Backspace => {
                state.dashboard.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                if Self::is_name_edit(state) {
                    if state.dashboard.edit_buffer.len() < MAX_NAME_LEN {
                        state.dashboard.edit_buffer.push(c);
                    }
                } else if c.is_ascii_digit() || c == '.' || c == '-' {
                    state.dashboard.edit_buffer.push(c);
                }
            }
            _ => {}
        }
        EventResult::Handled
    }

    /// Coerce a baseline input: percent values clamp to the field bounds,
    /// others floor at the field minimum; unparseable input takes the
    /// floor.
    fn coerce_metric(def: &MetricDef, parsed: Option<f64>) -> f64 {
        match def.kind {
            ValueKind::Percent => {
                let fraction = parsed.map(|v| v / 100.0).filter(|v| v.is_finite());
                let max = def.max.unwrap_or(1.0);
                fraction.unwrap_or(0.0).clamp(def.min, max)
            }
            _ => {
                let value = parsed.filter(|v| v.is_finite()).unwrap_or(def.min);
                match def.max {
                    Some(max) => value.clamp(def.min, max),
                    None => value.max(def.min),
                }
            }
        }
    }

    /// Coerce a lever input against its family definition.
    fn coerce_lever(def: &LeverDef, parsed: Option<f64>) -> f64 {
        match def.kind {
            ValueKind::Percent => {
                let fraction = parsed.map(|v| v / 100.0).filter(|v| v.is_finite());
                let max = def.max.unwrap_or(2.0);
                fraction.unwrap_or(0.0).clamp(def.min, max)
            }
            _ => {
                let value = parsed.filter(|v| v.is_finite()).unwrap_or(def.min);
                value.max(def.min)
            }
        }
    }

    fn commit_edit(&self, state: &mut AppState) {
        let buffer = state.dashboard.edit_buffer.clone();
        state.dashboard.editing = false;
        state.dashboard.edit_buffer.clear();

        match state.dashboard.focus {
            DashboardPanel::Baseline => {
                let def = metric_defs()[state.dashboard.baseline_index];
                let value = Self::coerce_metric(&def, buffer.trim().parse().ok());
                state.baseline.set(def.id, value);
                state.mark_stale();
            }
            DashboardPanel::Scenarios => {
                let (scenario_idx, row) = Self::decode_cursor(state);
                let family = state.family();
                let Some(scenario) = state.scenarios_mut().get_mut(scenario_idx) else {
                    return;
                };
                if row == 0 {
                    let name = buffer.trim();
                    scenario.name = if name.is_empty() {
                        "Scenario".to_string()
                    } else {
                        name.to_string()
                    };
                    // Names appear in the result tables; refresh them.
                    state.dirty = true;
                    state.recalculate();
                } else {
                    let def = lever_defs(family)[row - 1];
                    let value = Self::coerce_lever(&def, buffer.trim().parse().ok());
                    scenario.levers.set(def.id, value);
                    state.mark_stale();
                }
            }
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn panel_border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    }

    fn selected_style(selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    fn value_text(state: &AppState, selected: bool, fallback: String) -> String {
        if selected && state.dashboard.editing {
            format!("{}_", state.dashboard.edit_buffer)
        } else {
            fallback
        }
    }

    fn render_baseline(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.dashboard.focus == DashboardPanel::Baseline;
        let period = match state.input_period {
            InputPeriod::Monthly => "monthly ARPU",
            InputPeriod::Annual => "annual ARPU",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Self::panel_border(focused))
            .title(format!(" BASELINE | {} mo | {} ", state.horizon, period));

        let items: Vec<ListItem> = metric_defs()
            .iter()
            .enumerate()
            .map(|(idx, def)| {
                let selected = focused && idx == state.dashboard.baseline_index;
                let style = Self::selected_style(selected);
                let prefix = if selected { "> " } else { "  " };
                let value = Self::value_text(
                    state,
                    selected,
                    format_input(def.kind, state.baseline.get(def.id)),
                );
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}{:<28}", prefix, def.label), style),
                    Span::styled(value, style),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_scenarios(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.dashboard.focus == DashboardPanel::Scenarios;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Self::panel_border(focused))
            .title(" SCENARIOS ");

        let defs = lever_defs(state.family());
        let (selected_scenario, selected_row) = Self::decode_cursor(state);

        let mut items: Vec<ListItem> = Vec::new();
        for (scenario_idx, scenario) in state.scenarios().iter().enumerate() {
            let name_selected = focused && scenario_idx == selected_scenario && selected_row == 0;
            let name = Self::value_text(state, name_selected, scenario.name.clone());
            items.push(ListItem::new(Line::from(Span::styled(
                format!("{}{}", if name_selected { "> " } else { "  " }, name),
                Self::selected_style(name_selected).add_modifier(Modifier::UNDERLINED),
            ))));

            for (lever_idx, def) in defs.iter().enumerate() {
                let selected = focused
                    && scenario_idx == selected_scenario
                    && selected_row == lever_idx + 1;
                let style = Self::selected_style(selected);
                let prefix = if selected { "  > " } else { "    " };
                let value = Self::value_text(
                    state,
                    selected,
                    format_lever(def.kind, scenario.levers.get(def.id)),
                );
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!("{}{:<26}", prefix, def.label), style),
                    Span::styled(value, style),
                ])));
            }
        }

        frame.render_widget(List::new(items).block(block), area);
    }

    fn stale_title(state: &AppState, title: &str) -> String {
        if state.needs_recalc {
            format!(" {} (stale) ", title)
        } else {
            format!(" {} ", title)
        }
    }

    fn render_kpis(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Self::stale_title(state, "KPI SUMMARY"));

        let Some(results) = &state.results else {
            frame.render_widget(Paragraph::new("No results yet.").block(block), area);
            return;
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{:<16}", "Baseline"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "revenue {}  gross profit {}",
                format_compact_currency(results.baseline_totals.revenue),
                format_compact_currency(results.baseline_totals.gross_profit),
            )),
        ])];

        for result in &results.scenarios {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<16}", result.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "revenue {}  dRev {}  ROI {}  payback {}",
                    format_compact_currency(result.totals.revenue),
                    format_delta(result.incremental_revenue),
                    format_roi(result.roi),
                    format_payback(result.payback),
                )),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_waterfall(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Self::stale_title(state, "FUNNEL WATERFALL"));

        let Some(results) = &state.results else {
            frame.render_widget(Paragraph::new("No results yet.").block(block), area);
            return;
        };

        let mut header = vec!["Stage".to_string(), "Baseline".to_string()];
        header.extend(results.scenarios.iter().map(|s| s.name.clone()));

        type Accessor = fn(&funnelroi_core::FunnelTotals) -> f64;
        let stages: [(&str, Accessor, bool); 6] = [
            ("Visits", |t| t.visits, false),
            ("Form fills", |t| t.forms, false),
            ("SQLs", |t| t.sqls, false),
            ("Opportunities", |t| t.opps, false),
            ("Wins", |t| t.wins, false),
            ("Revenue", |t| t.revenue, true),
        ];

        let rows: Vec<Row> = stages
            .iter()
            .map(|(label, accessor, currency)| {
                let fmt = |value: f64| {
                    if *currency {
                        format_compact_currency(value)
                    } else {
                        format_number(value)
                    }
                };
                let mut cells = vec![label.to_string(), fmt(accessor(&results.baseline_totals))];
                cells.extend(
                    results
                        .scenarios
                        .iter()
                        .map(|s| fmt(accessor(&s.totals))),
                );
                Row::new(cells)
            })
            .collect();

        let mut widths = vec![Constraint::Length(14)];
        widths.extend(std::iter::repeat_n(Constraint::Min(10), header.len() - 1));

        let table = Table::new(rows, widths)
            .header(Row::new(header).style(Style::default().add_modifier(Modifier::BOLD)))
            .block(block);

        frame.render_widget(table, area);
    }

    fn render_sensitivity(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Self::stale_title(state, "SENSITIVITY (+/-10%)"));

        if state.sensitivity.is_empty() {
            frame.render_widget(Paragraph::new("No results yet.").block(block), area);
            return;
        }

        let rows: Vec<Row> = state
            .sensitivity
            .iter()
            .map(|row| {
                Row::new(vec![
                    row.scenario.clone(),
                    row.lever.label().to_string(),
                    format_compact_currency(row.minus_revenue),
                    format_compact_currency(row.base_revenue),
                    format_compact_currency(row.plus_revenue),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(12),
            Constraint::Min(10),
            Constraint::Min(9),
            Constraint::Min(9),
            Constraint::Min(9),
        ];

        let table = Table::new(rows, widths)
            .header(
                Row::new(vec!["Scenario", "Lever", "-10%", "Base", "+10%"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(block);

        frame.render_widget(table, area);
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DashboardScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.dashboard.editing {
            return self.handle_edit_key(key, state);
        }

        match key.code {
            KeyCode::Tab => {
                state.dashboard.focus = state.dashboard.focus.toggled();
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor(state, 1);
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor(state, -1);
                EventResult::Handled
            }
            KeyCode::Enter => {
                self.begin_edit(state);
                EventResult::Handled
            }
            KeyCode::Char('h') => {
                state.toggle_horizon();
                EventResult::Handled
            }
            KeyCode::Char('p') => {
                state.toggle_period();
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                state.recalculate();
                state.set_status("Recalculated".to_string());
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[0]);
        self.render_baseline(frame, left[0], state);
        self.render_scenarios(frame, left[1], state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(9),
                Constraint::Min(0),
            ])
            .split(columns[1]);
        self.render_kpis(frame, right[0], state);
        self.render_waterfall(frame, right[1], state);
        self.render_sensitivity(frame, right[2], state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use funnelroi_core::{LeverId, MetricId};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_value(screen: &mut DashboardScreen, state: &mut AppState, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), state);
        }
        screen.handle_key(key(KeyCode::Enter), state);
    }

    #[test]
    fn test_edit_baseline_percent_field() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();

        // Move to the CVR field (index 1) and enter 2.5 (display percent).
        screen.handle_key(key(KeyCode::Char('j')), &mut state);
        screen.handle_key(key(KeyCode::Enter), &mut state);
        state.dashboard.edit_buffer.clear();
        type_value(&mut screen, &mut state, "2.5");

        assert_eq!(state.baseline.get(MetricId::Cvr), 0.025);
        assert!(state.needs_recalc, "edit marks results stale");
        assert!(state.dirty, "edit marks state dirty");
    }

    #[test]
    fn test_edit_clamps_to_field_bounds() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();

        // CVR display max is 50%.
        screen.handle_key(key(KeyCode::Char('j')), &mut state);
        screen.handle_key(key(KeyCode::Enter), &mut state);
        state.dashboard.edit_buffer.clear();
        type_value(&mut screen, &mut state, "95");

        assert_eq!(state.baseline.get(MetricId::Cvr), 0.50);
    }

    #[test]
    fn test_unparseable_input_takes_floor() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();

        // Lifespan floors at 1.
        for _ in 0..6 {
            screen.handle_key(key(KeyCode::Char('j')), &mut state);
        }
        screen.handle_key(key(KeyCode::Enter), &mut state);
        state.dashboard.edit_buffer.clear();
        type_value(&mut screen, &mut state, "-");

        assert_eq!(state.baseline.get(MetricId::LifespanMonths), 1.0);
    }

    #[test]
    fn test_edit_scenario_lever() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();
        state.dashboard.focus = DashboardPanel::Scenarios;

        // Row 1 of the first block is the traffic lever.
        screen.handle_key(key(KeyCode::Char('j')), &mut state);
        screen.handle_key(key(KeyCode::Enter), &mut state);
        state.dashboard.edit_buffer.clear();
        type_value(&mut screen, &mut state, "20");

        assert_eq!(state.cro_scenarios[0].levers.get(LeverId::Traffic), 0.20);
    }

    #[test]
    fn test_lever_edit_clamps_to_family_bounds() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();
        state.dashboard.focus = DashboardPanel::Scenarios;

        // CRO traffic lever bottoms out at -20%.
        screen.handle_key(key(KeyCode::Char('j')), &mut state);
        screen.handle_key(key(KeyCode::Enter), &mut state);
        state.dashboard.edit_buffer.clear();
        type_value(&mut screen, &mut state, "-80");

        assert_eq!(state.cro_scenarios[0].levers.get(LeverId::Traffic), -0.20);
    }

    #[test]
    fn test_rename_scenario_refreshes_results() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();
        state.dashboard.focus = DashboardPanel::Scenarios;

        screen.handle_key(key(KeyCode::Enter), &mut state);
        state.dashboard.edit_buffer.clear();
        type_value(&mut screen, &mut state, "Q3 push");

        assert_eq!(state.cro_scenarios[0].name, "Q3 push");
        let results = state.results.as_ref().expect("results");
        assert_eq!(results.scenarios[0].name, "Q3 push");
        assert!(!state.needs_recalc, "rename recalculates immediately");
    }

    #[test]
    fn test_empty_name_falls_back() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();
        state.dashboard.focus = DashboardPanel::Scenarios;

        screen.handle_key(key(KeyCode::Enter), &mut state);
        state.dashboard.edit_buffer.clear();
        screen.handle_key(key(KeyCode::Enter), &mut state);

        assert_eq!(state.cro_scenarios[0].name, "Scenario");
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();
        let before = state.baseline.get(MetricId::Traffic);

        screen.handle_key(key(KeyCode::Enter), &mut state);
        screen.handle_key(key(KeyCode::Char('9')), &mut state);
        screen.handle_key(key(KeyCode::Esc), &mut state);

        assert!(!state.dashboard.editing);
        assert_eq!(state.baseline.get(MetricId::Traffic), before);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut screen = DashboardScreen::new();
        let mut state = AppState::default();

        screen.handle_key(key(KeyCode::Char('k')), &mut state);
        assert_eq!(state.dashboard.baseline_index, 0);

        for _ in 0..50 {
            screen.handle_key(key(KeyCode::Char('j')), &mut state);
        }
        assert_eq!(state.dashboard.baseline_index, metric_defs().len() - 1);
    }
}
