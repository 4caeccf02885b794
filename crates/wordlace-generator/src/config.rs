//! Generator configuration.

use wordlace_core::{Letter, Word};

/// Default cap on random placement attempts per word.
///
/// The random sampler virtually always succeeds well inside this bound on
/// boards that fit their word list; the cap exists so saturated boards fail
/// over to the exhaustive scan instead of spinning forever.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// An error in the generator configuration, detected before any placement.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The grid size was zero.
    #[display("grid size must be at least 1")]
    ZeroSize,
    /// A word is longer than the grid side and can never fit.
    #[display("word {word} does not fit a {size}x{size} grid")]
    WordTooLong {
        /// The offending word.
        word: Word,
        /// The configured grid size.
        size: u8,
    },
    /// The same word appears twice in the input list.
    #[display("duplicate word in list: {word}")]
    DuplicateWord {
        /// The repeated word.
        word: Word,
    },
    /// The filler alphabet was empty.
    #[display("filler alphabet must not be empty")]
    EmptyAlphabet,
}

/// Validated inputs for board generation.
///
/// Construction performs all statically checkable validation, so a
/// configuration that exists can only fail generation through genuine board
/// saturation. Word-list order is preserved: it determines both the placement
/// order and the one-based label tags of the answer index.
///
/// # Examples
///
/// ```
/// use wordlace_generator::GeneratorConfig;
///
/// let words = ["swift", "kotlin", "java"]
///     .iter()
///     .map(|word| word.parse().unwrap())
///     .collect();
/// let config = GeneratorConfig::new(10, words).unwrap();
/// assert_eq!(config.size(), 10);
/// assert_eq!(config.alphabet().len(), 26); // full alphabet by default
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    size: u8,
    words: Vec<Word>,
    alphabet: Vec<Letter>,
    max_attempts: u32,
}

impl GeneratorConfig {
    /// Creates a configuration with the full A-Z filler alphabet and the
    /// default attempt cap.
    ///
    /// An empty word list is allowed; it produces an all-filler board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSize`] for a zero grid size,
    /// [`ConfigError::WordTooLong`] if any word is longer than the grid side,
    /// and [`ConfigError::DuplicateWord`] if the list repeats a word.
    pub fn new(size: u8, words: Vec<Word>) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        for (i, word) in words.iter().enumerate() {
            if word.len() > usize::from(size) {
                return Err(ConfigError::WordTooLong {
                    word: word.clone(),
                    size,
                });
            }
            if words[..i].contains(word) {
                return Err(ConfigError::DuplicateWord { word: word.clone() });
            }
        }
        Ok(Self {
            size,
            words,
            alphabet: Letter::ALL.to_vec(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        })
    }

    /// Replaces the filler alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAlphabet`] if `alphabet` is empty.
    pub fn with_alphabet(mut self, alphabet: Vec<Letter>) -> Result<Self, ConfigError> {
        if alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        self.alphabet = alphabet;
        Ok(self)
    }

    /// Replaces the cap on random placement attempts per word.
    ///
    /// A cap of 0 skips random sampling entirely and goes straight to the
    /// exhaustive scan.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the grid side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the words to place, in input-list order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the filler alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &[Letter] {
        &self.alphabet
    }

    /// Returns the cap on random placement attempts per word.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|word| word.parse().unwrap()).collect()
    }

    #[test]
    fn test_new_accepts_valid_input() {
        let config = GeneratorConfig::new(10, words(&["cat", "dog"])).unwrap();
        assert_eq!(config.size(), 10);
        assert_eq!(config.words().len(), 2);
        assert_eq!(config.alphabet().len(), 26);
        assert_eq!(config.max_attempts(), DEFAULT_MAX_ATTEMPTS);

        // Empty word list produces an all-filler board
        assert!(GeneratorConfig::new(10, Vec::new()).is_ok());

        // A word of exactly the grid size fits
        assert!(GeneratorConfig::new(3, words(&["cat"])).is_ok());
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(
            GeneratorConfig::new(0, Vec::new()),
            Err(ConfigError::ZeroSize)
        );
    }

    #[test]
    fn test_new_rejects_over_long_word() {
        let result = GeneratorConfig::new(3, words(&["mobile"]));
        assert_eq!(
            result,
            Err(ConfigError::WordTooLong {
                word: "mobile".parse().unwrap(),
                size: 3,
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicate_words() {
        // Case differences do not make words distinct
        let result = GeneratorConfig::new(10, words(&["cat", "dog", "CAT"]));
        assert_eq!(
            result,
            Err(ConfigError::DuplicateWord {
                word: "cat".parse().unwrap(),
            })
        );
    }

    #[test]
    fn test_with_alphabet_rejects_empty() {
        let config = GeneratorConfig::new(10, Vec::new()).unwrap();
        assert_eq!(
            config.with_alphabet(Vec::new()),
            Err(ConfigError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_builders_update_fields() {
        let config = GeneratorConfig::new(10, Vec::new())
            .unwrap()
            .with_alphabet(vec![Letter::ALL[0], Letter::ALL[1]])
            .unwrap()
            .with_max_attempts(50);
        assert_eq!(config.alphabet().len(), 2);
        assert_eq!(config.max_attempts(), 50);
    }
}
