//! Lives and points carried across rounds

use super::RoundState;
use crate::interactive::Prompter;
use std::io;

/// Lives a new session starts with
pub const DEFAULT_LIVES: u32 = 3;

/// Points awarded for each round won
pub const POINTS_PER_WIN: u32 = 10;

/// Tracks the player's standing over a whole session
///
/// Running out of lives does not end the session by itself; the replay loop
/// still asks the player whether to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTracker {
    lives: u32,
    points: u32,
}

impl SessionTracker {
    #[must_use]
    pub const fn new(lives: u32, points: u32) -> Self {
        Self { lives, points }
    }

    pub fn apply_win(&mut self) {
        self.points += POINTS_PER_WIN;
    }

    /// Take a life, never going below zero
    pub fn apply_loss(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.lives == 0
    }

    /// Ask the player whether to play another round
    ///
    /// # Errors
    ///
    /// Returns an error if the prompter cannot read an answer.
    pub fn ask_replay<P: Prompter + ?Sized>(&self, prompter: &mut P) -> io::Result<bool> {
        prompter.ask_yes_no("Play again? [S/N]: ")
    }

    /// Snapshot of everything the scoreboard shows for `round`
    #[must_use]
    pub fn scoreboard(&self, round: &RoundState) -> Scoreboard {
        Scoreboard {
            lives: self.lives,
            correct_letters: round.correct_letters(),
            wrong_letters: round.wrong_letters(),
            attempts_remaining: round.attempts_remaining(),
            points: self.points,
            pattern: round.pattern().to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES, 0)
    }
}

/// Display payload emitted before each guess and at round end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub lives: u32,
    pub correct_letters: u32,
    pub wrong_letters: u32,
    pub attempts_remaining: u32,
    pub points: u32,
    pub pattern: String,
}
