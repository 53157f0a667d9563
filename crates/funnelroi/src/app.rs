use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use funnelroi_core::export::to_csv;

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::data::snapshot::StateSnapshot;
use crate::data::storage::DataDirectory;
use crate::screens::dashboard::DashboardScreen;
use crate::state::AppState;

pub struct App {
    state: AppState,
    storage: DataDirectory,
    tab_bar: TabBar,
    status_bar: StatusBar,
    dashboard: DashboardScreen,
}

impl App {
    /// Create the app rooted at a data directory, loading the persisted
    /// snapshot when one exists. Load failures fall back to defaults with
    /// a warning rather than refusing to start.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let storage = DataDirectory::new(data_dir);
        if let Err(e) = storage.init() {
            tracing::warn!("failed to create data directory: {e}");
        }

        let state = match storage.load_snapshot() {
            Ok(Some(stored)) => AppState::from_resolved(stored.resolve()),
            Ok(None) => AppState::default(),
            Err(e) => {
                tracing::warn!("failed to load saved state, using defaults: {e}");
                let mut state = AppState::default();
                state.set_error(format!("Could not load saved state: {e}"));
                state
            }
        };

        Self {
            state,
            storage,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
            dashboard: DashboardScreen::new(),
        }
    }

    /// Runs the application's main loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            self.persist_if_dirty();
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Dashboard
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.dashboard.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Inline edits capture every key until committed or cancelled.
        if self.state.dashboard.editing {
            self.dashboard.handle_key(key_event, &mut self.state);
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('s') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_now();
                return;
            }
            KeyCode::Char('e') if key_event.modifiers.is_empty() => {
                self.export_csv();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        let result = self.dashboard.handle_key(key_event, &mut self.state);
        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }

    /// Write the current inputs to disk if anything changed since the
    /// last persist. Runs after every handled event.
    fn persist_if_dirty(&mut self) {
        if !self.state.dirty {
            return;
        }
        let snapshot = StateSnapshot::from_state(&self.state);
        match self.storage.save_snapshot(&snapshot) {
            Ok(()) => self.state.dirty = false,
            Err(e) => {
                tracing::warn!("failed to persist state: {e}");
                self.state.set_error(format!("Save failed: {e}"));
            }
        }
    }

    fn save_now(&mut self) {
        let snapshot = StateSnapshot::from_state(&self.state);
        match self.storage.save_snapshot(&snapshot) {
            Ok(()) => {
                self.state.dirty = false;
                self.state
                    .set_status(format!("Saved to {}", self.storage.state_path().display()));
            }
            Err(e) => self.state.set_error(format!("Save failed: {e}")),
        }
    }

    /// Export the active tab's results as CSV, recalculating first if the
    /// inputs changed since the last run.
    fn export_csv(&mut self) {
        if self.state.needs_recalc {
            self.state.recalculate();
        }
        let Some(results) = &self.state.results else {
            self.state.set_error("Nothing to export yet".to_string());
            return;
        };

        let csv = to_csv(self.state.horizon, results);
        match self.storage.write_export(self.state.family(), &csv) {
            Ok(path) => {
                tracing::info!("exported results to {}", path.display());
                self.state
                    .set_status(format!("Exported {}", path.display()));
            }
            Err(e) => self.state.set_error(format!("Export failed: {e}")),
        }
    }
}
