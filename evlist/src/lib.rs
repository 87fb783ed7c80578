mod app;
pub mod app_core;
pub mod behaviors;
pub mod commands;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod input;
pub mod listing;
pub mod logging;
pub mod notify;
pub mod page;
pub mod state;
pub mod timers;
pub mod ui;

pub use app::App;
pub use error::{EvlistError, Result};

// Always expose testing module (integration tests need it)
pub mod testing;
