//! Round turn loop
//!
//! Feeds letters from a prompter into a [`RoundState`] until the round leaves
//! `Playing`, then settles the outcome on the session.

use crate::core::{GuessOutcome, RoundState, RoundStatus, SessionTracker, Word};
use crate::interactive::{Prompter, RoundObserver};
use log::{debug, info};
use std::io;

/// Result of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub word: String,
    pub status: RoundStatus,
    pub guesses: Vec<char>,
    pub correct_letters: u32,
    pub wrong_letters: u32,
}

impl RoundResult {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == RoundStatus::Won
    }
}

/// Drives one round from the first guess to a win or loss
pub struct RoundEngine {
    state: RoundState,
    guesses: Vec<char>,
}

impl RoundEngine {
    /// Start a round for `word` with fresh counters
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self {
            state: RoundState::new(word),
            guesses: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    /// Play the round to the end
    ///
    /// Shows the scoreboard before every guess. A win adds points to the
    /// session, a loss takes a life. Losing the last life is announced but
    /// does not stop anything; the caller decides what happens next.
    ///
    /// # Errors
    ///
    /// Returns an error if reading a guess or writing to the observer fails.
    pub fn play<P, O>(
        mut self,
        session: &mut SessionTracker,
        prompter: &mut P,
        observer: &mut O,
    ) -> io::Result<RoundResult>
    where
        P: Prompter + ?Sized,
        O: RoundObserver + ?Sized,
    {
        info!(
            "Round started: {} letters, {} attempts",
            self.state.word().len(),
            self.state.attempts_remaining()
        );

        while self.state.status() == RoundStatus::Playing {
            observer.on_turn(&session.scoreboard(&self.state))?;

            let letter = prompter.read_letter("Type a letter: ")?;
            let outcome = self.state.apply_guess(letter);
            self.guesses.push(letter);
            debug!(
                "Guess '{letter}': {outcome:?}, {} attempts left",
                self.state.attempts_remaining()
            );

            if outcome == GuessOutcome::Miss {
                observer.on_miss(letter)?;
            }
        }

        self.settle(session, observer)
    }

    fn settle<O>(self, session: &mut SessionTracker, observer: &mut O) -> io::Result<RoundResult>
    where
        O: RoundObserver + ?Sized,
    {
        let status = self.state.status();
        match status {
            RoundStatus::Won => session.apply_win(),
            RoundStatus::Lost => session.apply_loss(),
            RoundStatus::Playing => unreachable!("settle is only called after the round ends"),
        }

        observer.on_round_end(&session.scoreboard(&self.state), status, self.state.word())?;

        if status == RoundStatus::Lost && session.is_exhausted() {
            info!("All lives exhausted");
            observer.on_lives_exhausted()?;
        }

        info!(
            "Round ended: {status:?} after {} guesses (lives {}, points {})",
            self.guesses.len(),
            session.lives(),
            session.points()
        );

        Ok(RoundResult {
            word: self.state.word().text().to_string(),
            status,
            guesses: self.guesses,
            correct_letters: self.state.correct_letters(),
            wrong_letters: self.state.wrong_letters(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scoreboard;
    use crate::interactive::LinePrompter;
    use std::io::Cursor;

    #[derive(Default)]
    struct Recorder {
        turns: Vec<Scoreboard>,
        misses: Vec<char>,
        ends: Vec<(Scoreboard, RoundStatus, String)>,
        exhausted: usize,
    }

    impl RoundObserver for Recorder {
        fn on_turn(&mut self, board: &Scoreboard) -> io::Result<()> {
            self.turns.push(board.clone());
            Ok(())
        }

        fn on_miss(&mut self, letter: char) -> io::Result<()> {
            self.misses.push(letter);
            Ok(())
        }

        fn on_round_end(
            &mut self,
            board: &Scoreboard,
            status: RoundStatus,
            word: &Word,
        ) -> io::Result<()> {
            self.ends.push((board.clone(), status, word.text().to_string()));
            Ok(())
        }

        fn on_lives_exhausted(&mut self) -> io::Result<()> {
            self.exhausted += 1;
            Ok(())
        }

        fn on_game_over(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn play(word: &str, input: &str, session: &mut SessionTracker) -> (RoundResult, Recorder) {
        let mut prompter = LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut recorder = Recorder::default();
        let result = RoundEngine::new(Word::new(word).unwrap())
            .play(session, &mut prompter, &mut recorder)
            .unwrap();
        (result, recorder)
    }

    #[test]
    fn go_won_with_single_guess() {
        let mut session = SessionTracker::default();
        let (result, recorder) = play("go", "o\n", &mut session);

        assert!(result.won());
        assert_eq!(result.guesses, vec!['o']);
        assert_eq!(session.points(), 10);
        assert_eq!(session.lives(), 3);

        assert_eq!(recorder.turns.len(), 1);
        assert_eq!(recorder.turns[0].pattern, "g_");
        assert_eq!(recorder.ends.len(), 1);
        assert_eq!(recorder.ends[0].0.pattern, "go");
        assert_eq!(recorder.ends[0].0.points, 10);
        assert_eq!(recorder.ends[0].1, RoundStatus::Won);
    }

    #[test]
    fn sun_lost_after_two_misses() {
        let mut session = SessionTracker::default();
        let (result, recorder) = play("sun", "x\ny\n", &mut session);

        assert_eq!(result.status, RoundStatus::Lost);
        assert_eq!(result.wrong_letters, 2);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.points(), 0);
        assert_eq!(recorder.misses, vec!['x', 'y']);
        assert_eq!(recorder.ends[0].0.attempts_remaining, 0);
        assert_eq!(recorder.exhausted, 0);
    }

    #[test]
    fn loss_takes_exactly_one_life() {
        let mut session = SessionTracker::new(3, 20);
        play("sun", "x\nx\n", &mut session);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.points(), 20);
    }

    #[test]
    fn losing_last_life_is_announced() {
        let mut session = SessionTracker::new(1, 0);
        let (_, recorder) = play("sun", "a\nb\n", &mut session);

        assert!(session.is_exhausted());
        assert_eq!(recorder.exhausted, 1);
    }

    #[test]
    fn repeated_letters_revealed_together() {
        let mut session = SessionTracker::default();
        let (result, recorder) = play("banana", "a\nn\n", &mut session);

        assert!(result.won());
        assert_eq!(result.correct_letters, 3);
        assert_eq!(recorder.turns[1].pattern, "bana_a");
        assert_eq!(recorder.turns[1].correct_letters, 2);
    }

    #[test]
    fn space_in_word_can_be_guessed() {
        let mut session = SessionTracker::default();
        let (result, recorder) = play("abcde fg", "e\nf\ng\n \n", &mut session);

        assert!(result.won());
        assert_eq!(result.guesses, vec!['e', 'f', 'g', ' ']);
        assert!(recorder.misses.is_empty());
        assert_eq!(session.points(), 10);
    }

    #[test]
    fn counters_reset_between_rounds() {
        let mut session = SessionTracker::default();
        play("sun", "x\ny\n", &mut session);
        let (_, recorder) = play("sun", "u\nn\n", &mut session);

        assert_eq!(recorder.turns[0].wrong_letters, 0);
        assert_eq!(recorder.turns[0].attempts_remaining, 2);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.points(), 10);
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut session = SessionTracker::default();
        let mut prompter = LinePrompter::new(Cursor::new(b"x\n".to_vec()), Vec::new());
        let err = RoundEngine::new(Word::new("sun").unwrap())
            .play(&mut session, &mut prompter, &mut Recorder::default())
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(session.lives(), 3);
    }
}
