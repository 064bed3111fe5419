//! Play command
//!
//! Runs rounds back to back until the player declines to continue.

use crate::core::{DEFAULT_LIVES, SessionTracker};
use crate::game::RoundEngine;
use crate::interactive::{Prompter, RoundObserver};
use crate::wordlists::loader::{load_or_empty, select_random};
use log::info;
use rand::Rng;
use std::path::PathBuf;

/// Configuration for a play session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub words_path: PathBuf,
    pub starting_lives: u32,
    pub clear_screen: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new(words_path: impl Into<PathBuf>) -> Self {
        Self {
            words_path: words_path.into(),
            starting_lives: DEFAULT_LIVES,
            clear_screen: true,
        }
    }
}

/// Final standing of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub lives: u32,
    pub points: u32,
}

/// Play rounds until the player says no
///
/// The word list is reloaded before every round. Running out of lives is
/// announced by the engine but the player is still asked whether to play
/// again.
///
/// # Errors
///
/// Returns an error if:
/// - The word list is empty or missing when a round should start
/// - Reading input or writing output fails
pub fn run_session<P, O, R>(
    config: &GameConfig,
    prompter: &mut P,
    observer: &mut O,
    rng: &mut R,
) -> anyhow::Result<SessionSummary>
where
    P: Prompter + ?Sized,
    O: RoundObserver + ?Sized,
    R: Rng + ?Sized,
{
    let mut session = SessionTracker::new(config.starting_lives, 0);
    let mut rounds_played = 0;
    let mut rounds_won = 0;

    loop {
        let words = load_or_empty(&config.words_path);
        let word = select_random(&words, rng)?.clone();

        let result = RoundEngine::new(word).play(&mut session, prompter, observer)?;
        rounds_played += 1;
        if result.won() {
            rounds_won += 1;
        }

        observer.on_game_over()?;
        if !session.ask_replay(prompter)? {
            break;
        }
    }

    info!("Session finished after {rounds_played} rounds");

    Ok(SessionSummary {
        rounds_played,
        rounds_won,
        lives: session.lives(),
        points: session.points(),
    })
}
