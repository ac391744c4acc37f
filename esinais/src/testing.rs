use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::settings::Settings;
use crate::state::{AppState, DashboardView, TopLevelView};

/// Synchronous handler: applies every command to the state right away and
/// never spawns tasks. Background results are injected with
/// [`TestApp::send_data_event`].
#[derive(Default)]
pub struct MockDataHandler {
    executed: Vec<AppCommand>,
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        self.executed.push(command.clone());
        executor::execute_command_sync(command, state);
    }
}

/// Drives [`AppCore`] with key presses the way a user would.
pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Test app over the bundled seed data with default settings
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        let state = match AppState::seeded(settings) {
            Ok(state) => state,
            Err(e) => panic!("bundled seed should parse: {e}"),
        };
        Self {
            core: AppCore::new(state, MockDataHandler::default()),
        }
    }

    /// Test app already past the auth modal, on the dashboard overview
    pub fn logged_in() -> Self {
        let mut app = Self::new();
        app.send_key(Key::Char('L'));
        app.type_text("admin@esinais.com");
        app.send_key(Key::Tab);
        app.type_text("senha");
        app.send_key(Key::Enter);
        app.assert_top_level(TopLevelView::Dashboard);
        app
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Key press carrying modifiers, e.g. Ctrl+C
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        keys.iter().for_each(|key| self.send_key(*key));
    }

    /// Type each character as its own key press
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    pub fn send_command(&mut self, command: AppCommand) {
        self.core.handle_command(command);
    }

    /// Stand-in for a background task reporting back
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Every command handed to the handler so far, oldest first
    pub fn executed_commands(&self) -> &[AppCommand] {
        &self.core.handler().executed
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn assert_top_level(&self, expected: TopLevelView) {
        assert_eq!(
            self.state().view.top_level,
            expected,
            "top-level view mismatch, view state: {:?}",
            self.state().view
        );
    }

    pub fn assert_dashboard_view(&self, expected: DashboardView) {
        assert_eq!(
            self.state().view.dashboard_view,
            expected,
            "dashboard view mismatch, view state: {:?}",
            self.state().view
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "expected quit, view state: {:?}",
            self.state().view
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "unexpected quit, view state: {:?}",
            self.state().view
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
