//! Board seeds for reproducible generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// An error that occurs when parsing a [`BoardSeed`] from a hex string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardSeedError {
    /// The input was not exactly 64 hex digits.
    #[display("seed must be 64 hex digits, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contained a non-hex character.
    #[display("invalid hex digit in seed: {_0:?}")]
    InvalidHexDigit(#[error(not(source))] char),
}

/// A 32-byte seed that fully determines a generated board.
///
/// The same seed together with the same configuration always reproduces the
/// same board, which is what benchmarks and bug reports rely on. Seeds
/// display as 64 lowercase hex digits and parse back from the same form.
///
/// # Examples
///
/// ```
/// use wordlace_generator::BoardSeed;
///
/// let seed = BoardSeed::from_phrase("daily puzzle 2026-08-27");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<BoardSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from fresh thread-RNG entropy.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// Handy for human-memorable reproducible boards ("daily puzzle" style).
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        Self(digest.into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic RNG this seed drives.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = ParseBoardSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParseBoardSeedError::InvalidLength(s.chars().count()));
        }
        let digits = s
            .chars()
            .map(|ch| {
                ch.to_digit(16)
                    .and_then(|digit| u8::try_from(digit).ok())
                    .ok_or(ParseBoardSeedError::InvalidHexDigit(ch))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
