//! Hangman
//!
//! A terminal word-guessing game. Each round hides a word with its first half
//! already shown; the player reveals the rest letter by letter before the
//! attempt budget runs out. Lives and points carry over between rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{RoundState, RoundStatus, Word};
//!
//! let mut round = RoundState::new(Word::new("go").unwrap());
//! assert_eq!(round.pattern().to_string(), "g_");
//!
//! round.apply_guess('o');
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round turn loop
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Prompts and display hooks
pub mod interactive;

// Logger setup
pub mod logging;
