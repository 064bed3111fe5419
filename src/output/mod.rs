//! Terminal output formatting
//!
//! Scoreboard rendering and end-of-session reporting.

pub mod display;
pub mod formatters;

pub use display::{TerminalDisplay, print_session_summary};
