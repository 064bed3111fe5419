//! Word lists for hangman rounds
//!
//! Words live in a flat text file, one per line, and are reloaded before every
//! round.

pub mod loader;

pub use loader::{StartupError, WordListError};

/// File used when no word list path is given
pub const DEFAULT_WORDS_PATH: &str = "words.txt";
