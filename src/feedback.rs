//! Feedback simulation for guesses.
//!
//! This module reproduces the game's letter-matching rule, including its
//! duplicate-letter behavior: exact matches are consumed first, then each
//! remaining code-word occurrence can account for at most one
//! present-elsewhere mark. Everything here is pure and deterministic.

use crate::error::SolverError;
use crate::word::Word;
use crate::WORD_LENGTH;
use std::fmt;

/// The verdict for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter in the right position (green).
    Correct,
    /// Letter occurs elsewhere in the code word (yellow).
    Present,
    /// Letter not in the code word, or all occurrences already accounted
    /// for (gray).
    Absent,
}

impl LetterStatus {
    /// Tile character for display.
    pub fn to_char(self) -> char {
        match self {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, x/b=gray, or 2/1/0).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(LetterStatus::Correct),
            'y' | '1' => Some(LetterStatus::Present),
            'x' | 'b' | '0' => Some(LetterStatus::Absent),
            _ => None,
        }
    }
}

/// A complete response for one guess, positional: the i-th status describes
/// the i-th guessed letter.
///
/// Encoded as a single base-3 `u8` (0..=242), each position contributing
/// 0 (absent), 1 (present), or 2 (correct) at its power of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// The winning response: every position correct.
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81);

    /// Pack individual statuses into a feedback value.
    pub fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        let mut packed: u8 = 0;
        let mut multiplier: u8 = 1;
        for status in statuses {
            let value = match status {
                LetterStatus::Absent => 0,
                LetterStatus::Present => 1,
                LetterStatus::Correct => 2,
            };
            packed += value * multiplier;
            multiplier *= 3;
        }
        Self(packed)
    }

    /// Compute the response the game would give for `guess` if `code` were
    /// the hidden word.
    ///
    /// Exact matches are consumed in a first pass; the second pass walks the
    /// remaining positions left to right and marks a letter present only
    /// while unconsumed occurrences of it remain in the code word. A letter
    /// guessed twice against a code word containing it once therefore earns
    /// exactly one non-absent mark.
    pub fn simulate(code: Word, guess: Word) -> Self {
        let code = code.bytes();
        let guess = guess.bytes();

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut leftover = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == code[i] {
                statuses[i] = LetterStatus::Correct;
            } else {
                leftover[(code[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if statuses[i] != LetterStatus::Correct {
                let idx = (guess[i] - b'a') as usize;
                if leftover[idx] > 0 {
                    statuses[i] = LetterStatus::Present;
                    leftover[idx] -= 1;
                }
            }
        }

        Self::new(statuses)
    }

    /// Unpack into per-position statuses.
    pub fn statuses(self) -> [LetterStatus; WORD_LENGTH] {
        let mut packed = self.0;
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        for status in statuses.iter_mut() {
            *status = match packed % 3 {
                0 => LetterStatus::Absent,
                1 => LetterStatus::Present,
                _ => LetterStatus::Correct,
            };
            packed /= 3;
        }
        statuses
    }

    /// Whether this response wins the game.
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a response typed as five marks, e.g. `"gyxxg"` or `"21002"`.
    pub fn parse(s: &str) -> Result<Self, SolverError> {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut count = 0;
        for c in s.chars() {
            if count == WORD_LENGTH {
                return Err(SolverError::InvalidWordLength {
                    expected: WORD_LENGTH,
                    actual: s.chars().count(),
                });
            }
            statuses[count] = LetterStatus::from_char(c).ok_or(SolverError::InvalidCharacter(c))?;
            count += 1;
        }
        if count != WORD_LENGTH {
            return Err(SolverError::InvalidWordLength {
                expected: WORD_LENGTH,
                actual: count,
            });
        }
        Ok(Self::new(statuses))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.statuses() {
            write!(f, "{}", status.to_char())?;
        }
        Ok(())
    }
}
