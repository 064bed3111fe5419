//! Command implementations

pub mod add_words;
pub mod play;

pub use add_words::run_add_words;
pub use play::{GameConfig, SessionSummary, run_session};
