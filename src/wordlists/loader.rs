//! Word list loading, saving and selection
//!
//! Word lists are plain text files with one word per line.

use crate::core::{PLACEHOLDER, Word};
use crate::interactive::Prompter;
use log::{debug, info};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Error type for word list files
#[derive(Debug)]
pub enum WordListError {
    NotFound(PathBuf),
    Io(PathBuf, io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Word list file '{}' not found.", path.display()),
            Self::Io(path, e) => write!(f, "Could not access '{}': {e}", path.display()),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(_, e) => Some(e),
        }
    }
}

impl WordListError {
    fn from_io(path: &Path, e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io(path.to_path_buf(), e)
        }
    }
}

/// Error that prevents a round from starting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    EmptyWordList,
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => {
                write!(f, "The word list is empty; add words before starting a round")
            }
        }
    }
}

impl std::error::Error for StartupError {}

/// Load words from a file
///
/// Lines are trimmed and lowercased. Blank lines and lines that are not valid
/// words are skipped.
///
/// # Errors
///
/// Returns `WordListError::NotFound` if the file does not exist, or
/// `WordListError::Io` if it cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| WordListError::from_io(path, e))?;

    Ok(words_from_text(&content))
}

/// Parse a word list from text, one word per line
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    debug!("Skipping word list entry '{trimmed}': {e}");
                    None
                }
            }
        })
        .collect()
}

/// Load words, falling back to an empty list on failure
///
/// The failure is reported once on stderr. An empty list cannot start a
/// round, so the caller will hit [`StartupError::EmptyWordList`] later.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Vec<Word> {
    match load_from_file(path) {
        Ok(words) => {
            debug!("Loaded {} words", words.len());
            words
        }
        Err(e) => {
            debug!("Falling back to an empty word list: {e:?}");
            eprintln!("{e}");
            Vec::new()
        }
    }
}

/// Write words to a file, one per line, replacing its previous content
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be created or written.
pub fn save<P: AsRef<Path>>(path: P, words: &[Word]) -> Result<(), WordListError> {
    let path = path.as_ref();
    let write_all = || -> io::Result<()> {
        let mut file = io::BufWriter::new(fs::File::create(path)?);
        for word in words {
            writeln!(file, "{word}")?;
        }
        file.flush()
    };

    write_all().map_err(|e| WordListError::Io(path.to_path_buf(), e))?;
    info!("Saved {} words to {}", words.len(), path.display());
    Ok(())
}

/// Ask the player for words until they decline to add another
///
/// Words containing the placeholder are refused and asked for again; refused
/// entries do not count toward anything.
///
/// # Errors
///
/// Returns an error if the prompter cannot read input.
pub fn collect_from_user<P: Prompter + ?Sized>(prompter: &mut P) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();

    loop {
        let entry = prompter.read_word("Type a word: ")?;

        if entry.contains(PLACEHOLDER) {
            prompter.notify("Underscores are not allowed in game words!")?;
            continue;
        }

        let Ok(word) = Word::new(entry) else {
            prompter.notify("Make sure to type a value.")?;
            continue;
        };

        words.push(word);

        if !prompter.ask_yes_no("Add another word? [S/N]: ")? {
            break;
        }
    }

    Ok(words)
}

/// Collect words from the player and write them to `path`
///
/// Without `append` the file is replaced by the new words only. With `append`
/// the new words follow the existing ones, skipping duplicates.
///
/// # Errors
///
/// Returns an error if input cannot be read, or if the file cannot be read
/// (other than not existing yet) or written.
pub fn collect_and_save<P, Q>(path: Q, prompter: &mut P, append: bool) -> anyhow::Result<Vec<Word>>
where
    P: Prompter + ?Sized,
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let collected = collect_from_user(prompter)?;

    let mut words = if append {
        match load_from_file(path) {
            Ok(existing) => existing,
            Err(WordListError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e.into()),
        }
    } else {
        Vec::new()
    };

    for word in collected {
        if !words.contains(&word) {
            words.push(word);
        }
    }

    save(path, &words)?;
    Ok(words)
}

/// Pick a word uniformly at random
///
/// # Errors
///
/// Returns `StartupError::EmptyWordList` if `words` is empty.
pub fn select_random<'a, R: Rng + ?Sized>(
    words: &'a [Word],
    rng: &mut R,
) -> Result<&'a Word, StartupError> {
    words.choose(rng).ok_or(StartupError::EmptyWordList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::LinePrompter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hangman-loader-{}-{name}.txt", std::process::id()))
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn words_from_text_normalizes() {
        let words = words_from_text("  Apple\nBANANA  \n\n\tcherry\n");
        assert_eq!(texts(&words), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn words_from_text_skips_placeholder_lines() {
        let words = words_from_text("good\nbad_word\nfine\n");
        assert_eq!(texts(&words), vec!["good", "fine"]);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        assert!(matches!(
            load_from_file(&path),
            Err(WordListError::NotFound(_))
        ));
        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let words = words_from_text("sun\nelephant\ngo\n");

        save(&path, &words).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "sun\nelephant\ngo\n");
        assert_eq!(load_from_file(&path).unwrap(), words);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_overwrites_previous_content() {
        let path = temp_path("overwrite");
        save(&path, &words_from_text("old\nwords\n")).unwrap();
        save(&path, &words_from_text("new\n")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn collect_stops_on_no() {
        let mut p = prompter("Rust\ns\ncrab\nn\n");
        let words = collect_from_user(&mut p).unwrap();
        assert_eq!(texts(&words), vec!["rust", "crab"]);
    }

    #[test]
    fn collect_rejects_underscores_without_counting() {
        let mut p = prompter("snake_case\n_\nsnake\nn\n");
        let words = collect_from_user(&mut p).unwrap();
        assert_eq!(texts(&words), vec!["snake"]);

        let out = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(
            out.matches("Underscores are not allowed in game words!").count(),
            2
        );
    }

    #[test]
    fn collect_and_save_overwrites() {
        let path = temp_path("collect-overwrite");
        save(&path, &words_from_text("old\n")).unwrap();

        let mut p = prompter("fresh\nn\n");
        let words = collect_and_save(&path, &mut p, false).unwrap();

        assert_eq!(texts(&words), vec!["fresh"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn collect_and_save_appends_without_duplicates() {
        let path = temp_path("collect-append");
        save(&path, &words_from_text("old\nkept\n")).unwrap();

        let mut p = prompter("kept\ns\nnew\nn\n");
        let words = collect_and_save(&path, &mut p, true).unwrap();

        assert_eq!(texts(&words), vec!["old", "kept", "new"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nkept\nnew\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn select_random_from_empty_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_random(&[], &mut rng),
            Err(StartupError::EmptyWordList)
        );
    }

    #[test]
    fn select_random_is_deterministic_with_seed() {
        let words = words_from_text("alpha\nbeta\ngamma\ndelta\n");

        let first = select_random(&words, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = select_random(&words, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
        assert!(words.contains(first));
    }

    #[test]
    fn select_random_covers_every_word() {
        let words = words_from_text("alpha\nbeta\ngamma\n");
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(select_random(&words, &mut rng).unwrap().text());
        }
        assert_eq!(seen.len(), 3);
    }
}
