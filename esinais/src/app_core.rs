use crate::background::{profile_saver::ProfileSaver, BackgroundTaskManager};
use crate::commands::{executor, handlers};
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Where commands go once the key map produced them.
///
/// The terminal app spawns the simulated profile save; tests apply every
/// command synchronously and inject [`DataEvent`]s by hand.
pub trait DataEventHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);

    /// Called once when the event loop stops
    fn shutdown(&mut self) {}
}

/// Production handler owning the background tasks
pub struct TaskHandler {
    task_manager: BackgroundTaskManager,
    profile_saver: ProfileSaver,
}

impl TaskHandler {
    pub fn new(profile_saver: ProfileSaver) -> Self {
        Self {
            task_manager: BackgroundTaskManager::new(),
            profile_saver,
        }
    }
}

impl DataEventHandler for TaskHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command(command, state, &mut self.task_manager, &self.profile_saver);
    }

    fn shutdown(&mut self) {
        self.task_manager.cancel_all();
    }
}

/// Application state plus the handler that executes commands, without any
/// terminal.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(ui_state: AppState, handler: H) -> Self {
        Self { ui_state, handler }
    }

    /// Translate a key press to a command and execute it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            tracing::debug!("Executing command: {:?}", command);
            self.handler
                .execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Execute a command directly, bypassing the key map
    pub fn handle_command(&mut self, command: AppCommand) {
        self.handler
            .execute_with_context(command, &mut self.ui_state);
    }

    /// Apply the result of a background task
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    /// Advance the save spinner, if one is showing
    pub fn tick(&mut self) {
        if let Some(throbber_state) = self.ui_state.loading_state() {
            throbber_state.calc_next();
        }
    }

    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }

    pub fn shutdown(&mut self) {
        self.handler.shutdown();
    }
}
