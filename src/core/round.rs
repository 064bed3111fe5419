//! Round state and the single-guess transition
//!
//! A round starts `Playing` and leaves it exactly once: to `Won` when the last
//! placeholder is revealed, or to `Lost` when the attempt budget hits zero.

use super::{RevealPattern, Word};

/// Fewest wrong guesses any round allows
pub const MIN_ATTEMPTS: u32 = 2;

/// Wrong guesses allowed for a word: `max(2, len / 3)`
///
/// # Examples
/// ```
/// use hangman::core::{Word, initial_attempts};
///
/// assert_eq!(initial_attempts(&Word::new("cat").unwrap()), 2);
/// assert_eq!(initial_attempts(&Word::new("abcdefghijkl").unwrap()), 4);
/// ```
#[must_use]
pub fn initial_attempts(word: &Word) -> u32 {
    let by_length = u32::try_from(word.len() / 3).unwrap_or(u32::MAX);
    by_length.max(MIN_ATTEMPTS)
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// What a single guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; `revealed` new positions were uncovered (may be 0)
    Hit { revealed: u32 },
    /// Letter is not in the word; one attempt was spent
    Miss,
    /// The round had already ended; nothing changed
    RoundOver,
}

/// State of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    word: Word,
    pattern: RevealPattern,
    attempts_remaining: u32,
    correct_letters: u32,
    wrong_letters: u32,
    status: RoundStatus,
}

impl RoundState {
    /// Start a round: hinted pattern, full budget, zeroed counters
    #[must_use]
    pub fn new(word: Word) -> Self {
        let pattern = RevealPattern::initial(&word);
        let attempts_remaining = initial_attempts(&word);

        Self {
            word,
            pattern,
            attempts_remaining,
            correct_letters: 0,
            wrong_letters: 0,
            status: RoundStatus::Playing,
        }
    }

    /// Apply one lowercase letter guess
    ///
    /// Hits reveal every hidden occurrence at once and count each one. Misses
    /// are never deduplicated: guessing the same wrong letter twice costs two
    /// attempts.
    pub fn apply_guess(&mut self, letter: char) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::RoundOver;
        }

        if self.word.has_letter(letter) {
            let revealed = self.pattern.reveal(&self.word, letter);
            self.correct_letters += revealed;

            if self.pattern.is_complete() {
                self.status = RoundStatus::Won;
            }

            return GuessOutcome::Hit { revealed };
        }

        self.wrong_letters += 1;
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        if self.attempts_remaining == 0 {
            self.status = RoundStatus::Lost;
        }

        GuessOutcome::Miss
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &RevealPattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn correct_letters(&self) -> u32 {
        self.correct_letters
    }

    #[inline]
    #[must_use]
    pub const fn wrong_letters(&self) -> u32 {
        self.wrong_letters
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::Playing
    }
}
