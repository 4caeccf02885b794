//! Validated puzzle words.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Letter;

/// An error that occurs when parsing a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseWordError {
    /// The input string was empty.
    #[display("word is empty")]
    Empty,
    /// The input contained a character that is not an ASCII letter.
    #[display("invalid character in word: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

/// An immutable, uppercase puzzle word.
///
/// Words are validated at construction: they must be non-empty and consist
/// only of ASCII letters. Lowercase input is normalized to uppercase, so the
/// stored form always matches the letters written to the grid.
///
/// Word length versus grid size is a generator-level concern and is not
/// checked here.
///
/// # Examples
///
/// ```
/// use wordlace_core::Word;
///
/// let word: Word = "swift".parse().unwrap();
/// assert_eq!(word.as_str(), "SWIFT");
/// assert_eq!(word.len(), 5);
///
/// assert!("".parse::<Word>().is_err());
/// assert!("C++".parse::<Word>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Creates a word from a string, normalizing it to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`ParseWordError::Empty`] for an empty string and
    /// [`ParseWordError::InvalidCharacter`] when the input contains anything
    /// other than ASCII letters.
    pub fn new(text: &str) -> Result<Self, ParseWordError> {
        if text.is_empty() {
            return Err(ParseWordError::Empty);
        }
        if let Some(ch) = text.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(ParseWordError::InvalidCharacter(ch));
        }
        Ok(Self(text.to_ascii_uppercase()))
    }

    /// Returns the word as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of letters in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the word has no letters.
    ///
    /// Always `false` for a validated word; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the word's letters in reading order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{Letter, Word};
    ///
    /// let word: Word = "cat".parse().unwrap();
    /// let letters: Vec<char> = word.letters().map(Letter::as_char).collect();
    /// assert_eq!(letters, vec!['C', 'A', 'T']);
    /// ```
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        // Validation guarantees every character is an ASCII letter
        self.0.chars().filter_map(Letter::from_char)
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
