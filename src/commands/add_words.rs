//! Word collection command
//!
//! Lets the player type in new words and stores them in the word list file.

use crate::interactive::Prompter;
use crate::output::formatters::HEADER;
use crate::wordlists::loader::collect_and_save;
use std::path::Path;

/// Collect words interactively and save them to `path`
///
/// Returns how many words the file holds afterwards.
///
/// # Errors
///
/// Returns an error if input cannot be read or the file cannot be written.
pub fn run_add_words<P: Prompter + ?Sized>(
    path: &Path,
    append: bool,
    prompter: &mut P,
) -> anyhow::Result<usize> {
    prompter.notify(HEADER)?;

    let words = collect_and_save(path, prompter, append)?;
    prompter.notify(&format!(
        "Saved {} words to {}",
        words.len(),
        path.display()
    ))?;

    Ok(words.len())
}
