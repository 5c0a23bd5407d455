//! The fixed-length word value the whole engine deals in.
//!
//! A [`Word`] is always exactly [`WORD_LENGTH`](crate::WORD_LENGTH) ascii
//! letters, stored lowercase. Construction is the single validation point:
//! once a `Word` exists it can be compared, hashed, and simulated against
//! without rechecking anything.

use crate::error::SolverError;
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// A five-letter word over `a`-`z`. Cheap to copy, order and hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, lowercasing it first so `"CRANE"` and `"crane"`
    /// construct the same value.
    ///
    /// Fails with [`SolverError::InvalidWordLength`] when the input is not
    /// exactly five characters and [`SolverError::InvalidCharacter`] when a
    /// character falls outside `a`-`z`.
    pub fn new(s: &str) -> Result<Self, SolverError> {
        let mut letters = [0u8; WORD_LENGTH];
        let mut count = 0;
        for c in s.chars() {
            let lower = c.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(SolverError::InvalidCharacter(c));
            }
            if count == WORD_LENGTH {
                return Err(SolverError::InvalidWordLength {
                    expected: WORD_LENGTH,
                    actual: s.chars().count(),
                });
            }
            letters[count] = lower as u8;
            count += 1;
        }
        if count != WORD_LENGTH {
            return Err(SolverError::InvalidWordLength {
                expected: WORD_LENGTH,
                actual: count,
            });
        }
        Ok(Word(letters))
    }

    /// The letters as lowercase ascii bytes.
    pub const fn bytes(self) -> [u8; WORD_LENGTH] {
        self.0
    }

    /// How many different letters the word uses, between 1 and 5.
    pub fn distinct_letters(self) -> usize {
        let mut seen = [false; 26];
        for b in self.0 {
            seen[(b - b'a') as usize] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}
