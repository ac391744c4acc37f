use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app_core::{AppCore, TaskHandler};
use crate::background::profile_saver::ProfileSaver;
use crate::input::KeyEvent;
use crate::logging::init_logging;
use crate::settings::Settings;
use crate::state::AppState;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_path = init_logging(&self.settings.log_level)?;

        tracing::info!("esinais starting, logging to {}", log_path.display());

        // Parse the seed before touching the terminal so errors print normally
        let ui_state = AppState::seeded(&self.settings)?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();
        let profile_saver = ProfileSaver::new(data_tx, self.settings.profile_save_delay());
        let mut core = AppCore::new(ui_state, TaskHandler::new(profile_saver));

        let mut terminal = self.init()?;
        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(self.settings.tick_rate());
        while !core.should_quit() {
            terminal.draw(|f| crate::ui::render_app(f, core.state()))?;

            tokio::select! {
                _ = interval.tick() => core.tick(),
                Some(Ok(event)) = event_stream.next() => {
                    // Resize and other events only trigger a redraw
                    if let Event::Key(key) = event {
                        if let Some(key) = KeyEvent::from_terminal(key) {
                            tracing::debug!("Key press: {:?}", key);
                            core.handle_key(key);
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }
        }

        tracing::info!("Quit requested, cleaning up");
        core.shutdown();

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}
