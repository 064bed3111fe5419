//! Core domain types for hangman
//!
//! Words, reveal patterns, round state and session accounting. Nothing in here
//! touches the terminal or the filesystem.

mod pattern;
mod round;
mod session;
mod word;

pub use pattern::{PLACEHOLDER, RevealPattern};
pub use round::{GuessOutcome, MIN_ATTEMPTS, RoundState, RoundStatus, initial_attempts};
pub use session::{DEFAULT_LIVES, POINTS_PER_WIN, Scoreboard, SessionTracker};
pub use word::{Word, WordError};
