//! Display hooks for a running round

use crate::core::{RoundStatus, Scoreboard, Word};
use std::io;

/// Receives what the player should see as a round progresses
///
/// The round engine only emits payloads; how they are drawn is up to the
/// implementation.
pub trait RoundObserver {
    /// Called before every guess with the current standing
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn on_turn(&mut self, board: &Scoreboard) -> io::Result<()>;

    /// Called after a letter that is not in the word
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn on_miss(&mut self, letter: char) -> io::Result<()>;

    /// Called once when the round is won or lost
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn on_round_end(&mut self, board: &Scoreboard, status: RoundStatus, word: &Word)
    -> io::Result<()>;

    /// Called after a loss that left the session with no lives
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn on_lives_exhausted(&mut self) -> io::Result<()>;

    /// Called after every round, right before the replay question
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn on_game_over(&mut self) -> io::Result<()>;
}

/// Observer that shows nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl RoundObserver for SilentObserver {
    fn on_turn(&mut self, _board: &Scoreboard) -> io::Result<()> {
        Ok(())
    }

    fn on_miss(&mut self, _letter: char) -> io::Result<()> {
        Ok(())
    }

    fn on_round_end(
        &mut self,
        _board: &Scoreboard,
        _status: RoundStatus,
        _word: &Word,
    ) -> io::Result<()> {
        Ok(())
    }

    fn on_lives_exhausted(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn on_game_over(&mut self) -> io::Result<()> {
        Ok(())
    }
}
