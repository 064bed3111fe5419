//! Terminal rendering of rounds and sessions

use super::formatters::{HEADER, lives_bar, scoreboard_lines};
use crate::commands::SessionSummary;
use crate::core::{RoundStatus, Scoreboard, Word};
use crate::interactive::RoundObserver;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Draws the scoreboard and round results on a terminal
pub struct TerminalDisplay<W: Write> {
    out: W,
    clear_screen: bool,
    max_lives: u32,
}

impl<W: Write> TerminalDisplay<W> {
    /// `max_lives` only sizes the hearts bar
    pub const fn new(out: W, clear_screen: bool, max_lives: u32) -> Self {
        Self {
            out,
            clear_screen,
            max_lives,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Print the game title
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", HEADER.bright_cyan().bold())
    }

    fn scoreboard(&mut self, board: &Scoreboard) -> io::Result<()> {
        self.header()?;
        let [lives, attempts, banner, pattern] = scoreboard_lines(board);
        writeln!(
            self.out,
            "{lives}  {}",
            lives_bar(board.lives, self.max_lives).red()
        )?;
        writeln!(self.out, "{attempts}")?;
        writeln!(self.out, "{}", banner.bright_white())?;
        writeln!(self.out, "{}", pattern.bright_yellow().bold())?;
        self.out.flush()
    }
}

impl<W: Write> RoundObserver for TerminalDisplay<W> {
    fn on_turn(&mut self, board: &Scoreboard) -> io::Result<()> {
        self.clear()?;
        self.scoreboard(board)
    }

    fn on_miss(&mut self, letter: char) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("The letter '{letter}' is not in the word.").red()
        )
    }

    fn on_round_end(
        &mut self,
        board: &Scoreboard,
        status: RoundStatus,
        word: &Word,
    ) -> io::Result<()> {
        self.scoreboard(board)?;
        let line = match status {
            RoundStatus::Won => format!("You won! The word was: {word}").green().bold(),
            RoundStatus::Lost => format!("You lost! The word was: {word}").red().bold(),
            RoundStatus::Playing => return Ok(()),
        };
        writeln!(self.out, "{line}")
    }

    fn on_lives_exhausted(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "Out of lives. Game Over!".red().bold())
    }

    fn on_game_over(&mut self) -> io::Result<()> {
        let rule = "========".bright_black();
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{}", "GAME OVER".bright_red().bold())?;
        writeln!(self.out, "{rule}")?;
        self.out.flush()
    }
}

/// Print the final standing once the player stops
pub fn print_session_summary(summary: &SessionSummary) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "SESSION SUMMARY".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!("   Rounds played: {}", summary.rounds_played);
    println!(
        "   Rounds won:    {}",
        summary.rounds_won.to_string().green()
    );
    println!("   Lives left:    {}", summary.lives);
    println!(
        "   Points:        {}",
        summary.points.to_string().bright_yellow().bold()
    );
}
