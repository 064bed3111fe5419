//! Line-based prompts
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so the
//! same code drives stdin/stdout and in-memory test buffers.

use std::io::{self, BufRead, Write};

/// Source of player input
pub trait Prompter {
    /// Read a single guessed letter, already lowercased
    ///
    /// # Errors
    /// Returns an error if input cannot be read or has ended.
    fn read_letter(&mut self, prompt: &str) -> io::Result<char>;

    /// Ask a yes/no question
    ///
    /// # Errors
    /// Returns an error if input cannot be read or has ended.
    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool>;

    /// Read a free-form word, trimmed and lowercased
    ///
    /// # Errors
    /// Returns an error if input cannot be read or has ended.
    fn read_word(&mut self, prompt: &str) -> io::Result<String>;

    /// Show an informational line to the player
    ///
    /// # Errors
    /// Returns an error if the message cannot be written.
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Prompter over a reader/writer pair
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line with only the line terminator removed
    fn ask_raw(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }

        let line = input.trim_end_matches(['\n', '\r']);
        Ok(line.to_string())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.ask_raw(prompt)?.trim().to_string())
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_letter(&mut self, prompt: &str) -> io::Result<char> {
        loop {
            // Untrimmed, so a space is a valid guess
            let input = self.ask_raw(prompt)?;
            if let Some(first) = input.chars().next() {
                // Lowercasing can expand to several chars; the first one is the letter
                return Ok(first.to_lowercase().next().unwrap_or(first));
            }
            self.notify("Make sure to type a value.")?;
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            match self.ask(question)?.to_uppercase().as_str() {
                "S" => return Ok(true),
                "N" => return Ok(false),
                _ => self.notify("Type S for yes and N for no")?,
            }
        }
    }

    fn read_word(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.ask(prompt)?.to_lowercase())
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }
}
