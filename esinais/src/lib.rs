mod app;
pub mod app_core;
mod background;
pub mod commands;
pub mod events;
pub mod input;
pub mod logging;
pub mod settings;
pub mod state;
pub mod ui;

pub use app::App;
pub use settings::Settings;

// Always expose testing module (integration tests need it)
pub mod testing;
