//! Revealed-letter pattern for a hangman round
//!
//! Every position holds either the true letter or the placeholder `_`.
//! A fresh pattern starts with the first half of the word already revealed:
//! - 6 letters → 3 revealed
//! - 7 letters → 3 revealed
//! - 1 letter  → 0 revealed

use super::Word;
use std::fmt;

/// Marker shown in place of an unrevealed letter
pub const PLACEHOLDER: char = '_';

/// The player's view of the hidden word
///
/// Length always equals the length of the word it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPattern(Vec<char>);

impl RevealPattern {
    /// Build the starting pattern with a contiguous revealed prefix
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{RevealPattern, Word};
    ///
    /// let word = Word::new("banana").unwrap();
    /// let pattern = RevealPattern::initial(&word);
    /// assert_eq!(pattern.to_string(), "ban___");
    /// ```
    #[must_use]
    pub fn initial(word: &Word) -> Self {
        let hinted = word.len() / 2;
        let slots = word
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &ch)| if i < hinted { ch } else { PLACEHOLDER })
            .collect();
        Self(slots)
    }

    /// Reveal every hidden position where `letter` occurs in `word`
    ///
    /// Returns how many positions were newly revealed. Positions that are
    /// already revealed are left alone and not counted.
    /// Positions past the end of the pattern are ignored.
    pub(crate) fn reveal(&mut self, word: &Word, letter: char) -> u32 {
        let mut revealed = 0;
        for &i in word.positions_of(letter) {
            if let Some(slot) = self.0.get_mut(i)
                && *slot == PLACEHOLDER
            {
                *slot = letter;
                revealed += 1;
            }
        }
        revealed
    }

    /// True once no placeholder is left
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&PLACEHOLDER)
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.0.iter().filter(|&&ch| ch == PLACEHOLDER).count()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[char] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RevealPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}
