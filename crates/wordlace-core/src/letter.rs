//! Uppercase letter representation.

use std::fmt::{self, Display};

/// An uppercase ASCII letter in the range A-Z.
///
/// This type provides type-safe representation of grid letters, preventing
/// non-letter characters from ever reaching a board. Lowercase input is
/// folded to uppercase at construction.
///
/// # Examples
///
/// ```
/// use wordlace_core::Letter;
///
/// let letter = Letter::from_char('k').unwrap();
/// assert_eq!(letter.as_char(), 'K');
///
/// // Non-letters are rejected
/// assert!(Letter::from_char('3').is_none());
///
/// // Iterate over the full alphabet
/// for letter in Letter::ALL {
///     assert!(letter.as_char().is_ascii_uppercase());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Array containing all 26 letters from A to Z.
    ///
    /// This is the default filler alphabet for board generation.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Letter;
    ///
    /// assert_eq!(Letter::ALL.len(), 26);
    /// assert_eq!(Letter::ALL[0].as_char(), 'A');
    /// assert_eq!(Letter::ALL[25].as_char(), 'Z');
    /// ```
    pub const ALL: [Self; 26] = {
        let mut all = [Self(b'A'); 26];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 26 {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from a character, folding lowercase to uppercase.
    ///
    /// Returns `None` if `ch` is not an ASCII letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Letter;
    ///
    /// assert_eq!(Letter::from_char('A'), Letter::from_char('a'));
    /// assert!(Letter::from_char('ä').is_none());
    /// assert!(Letter::from_char(' ').is_none());
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Returns this letter as an uppercase character.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Letter;
    ///
    /// let letter = Letter::from_char('q').unwrap();
    /// assert_eq!(letter.as_char(), 'Q');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // from_char folds case
        assert_eq!(Letter::from_char('a'), Letter::from_char('A'));
        assert_eq!(Letter::from_char('z').unwrap().as_char(), 'Z');

        // Non-letters rejected
        assert!(Letter::from_char('0').is_none());
        assert!(Letter::from_char('#').is_none());
        assert!(Letter::from_char('é').is_none());

        // ALL covers A-Z in order
        assert_eq!(Letter::ALL.len(), 26);
        assert_eq!(Letter::ALL[0].as_char(), 'A');
        assert_eq!(Letter::ALL[25].as_char(), 'Z');
        for (i, letter) in Letter::ALL.iter().enumerate() {
            assert_eq!(Letter::from_char(letter.as_char()), Some(*letter));
            assert_eq!(letter.as_char() as usize - 'A' as usize, i);
        }

        // Display and conversion
        assert_eq!(format!("{}", Letter::ALL[7]), "H");
        let ch: char = Letter::ALL[7].into();
        assert_eq!(ch, 'H');
    }

    #[test]
    fn test_ordering_follows_alphabet() {
        let a = Letter::from_char('A').unwrap();
        let b = Letter::from_char('B').unwrap();
        assert!(a < b);
        let mut shuffled = vec![Letter::ALL[3], Letter::ALL[0], Letter::ALL[1]];
        shuffled.sort();
        assert_eq!(shuffled, vec![Letter::ALL[0], Letter::ALL[1], Letter::ALL[3]]);
    }
}
