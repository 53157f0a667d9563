use super::{Component, EventResult};
use crate::state::{AppState, DashboardPanel};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        if state.dashboard.editing {
            return "type a value | Enter: commit | Esc: cancel";
        }
        match state.dashboard.focus {
            DashboardPanel::Baseline => {
                "1-2: tabs | Tab: panel | j/k: nav | Enter: edit | h: horizon | p: period | r: recalc | e: export | q: quit"
            }
            DashboardPanel::Scenarios => {
                "1-2: tabs | Tab: panel | j/k: nav | Enter: edit value/name | r: recalc | e: export | q: quit"
            }
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else if state.needs_recalc {
            Line::from(vec![
                Span::styled(
                    "Inputs changed, press r to recalculate | ",
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    Self::get_help_text(state),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
