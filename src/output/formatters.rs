//! Formatting utilities for terminal output

use crate::core::Scoreboard;

/// Game title shown above every scoreboard
pub const HEADER: &str = "***** HANGMAN *****";

/// Scoreboard lines, without colour
#[must_use]
pub fn scoreboard_lines(board: &Scoreboard) -> [String; 4] {
    [
        format!(
            "Lives: {} | Correct letters: {} | Wrong letters: {}",
            board.lives, board.correct_letters, board.wrong_letters
        ),
        format!(
            "Attempts left: {} | Points: {}",
            board.attempts_remaining, board.points
        ),
        "GUESS THE WORD BELOW".to_string(),
        board.pattern.clone(),
    ]
}

/// Hearts for the remaining lives
#[must_use]
pub fn lives_bar(lives: u32, max: u32) -> String {
    let full = lives.min(max) as usize;
    format!("{}{}", "♥".repeat(full), "♡".repeat(max as usize - full))
}
