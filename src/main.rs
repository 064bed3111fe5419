//! Hangman - CLI
//!
//! Play rounds of hangman in the terminal, or add words to the word list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{GameConfig, run_add_words, run_session},
    interactive::LinePrompter,
    logging::init_logging,
    output::{TerminalDisplay, print_session_summary},
    wordlists::DEFAULT_WORDS_PATH,
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time before your attempts run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Lives at the start of the session
    #[arg(short, long, global = true, default_value_t = hangman::core::DEFAULT_LIVES)]
    lives: u32,

    /// Do not clear the terminal between turns
    #[arg(long, global = true)]
    no_clear: bool,

    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds until you choose to stop (default)
    Play,

    /// Type in new words and save them to the word list
    AddWords {
        /// Keep the words already in the file instead of replacing them
        #[arg(short, long)]
        append: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.words, cli.lives, !cli.no_clear),
        Commands::AddWords { append } => run_add_words_command(&cli.words, append),
    }
}

fn run_play_command(words: &Path, lives: u32, clear_screen: bool) -> Result<()> {
    let mut config = GameConfig::new(words);
    config.starting_lives = lives;
    config.clear_screen = clear_screen;

    let mut prompter = LinePrompter::stdio();
    let mut display = TerminalDisplay::new(io::stdout(), config.clear_screen, lives);

    let summary = run_session(&config, &mut prompter, &mut display, &mut rand::rng())?;
    print_session_summary(&summary);
    Ok(())
}

fn run_add_words_command(words: &Path, append: bool) -> Result<()> {
    let mut prompter = LinePrompter::stdio();
    run_add_words(words, append, &mut prompter)?;
    Ok(())
}
