//! # Wordle Autopilot
//!
//! A Wordle solver that plays the game end to end. The solver never sees
//! the hidden word: it proposes guesses, receives the colored responses
//! through a pluggable feedback channel, filters the word list down to the
//! candidates consistent with everything observed so far, and repeats until
//! the game is won, the attempt limit runs out, or no candidate remains.
//!
//! Guess selection favors words with distinct letters and common words,
//! driven by a bundled popularity ranking.

pub mod corpus;
pub mod error;
pub mod feedback;
pub mod session;
pub mod solver;
pub mod word;

pub use corpus::Corpus;
pub use error::SolverError;
pub use feedback::{Feedback, LetterStatus};
pub use session::{
    benchmark, simulated_opponent, Attempt, Benchmark, Session, SessionResult, SessionStatus,
};
pub use solver::{filter_candidates, select_guess, ScoringWeights, OPENING_GUESS};
pub use word::Word;

/// Letters per word.
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed before a game is lost.
pub const MAX_ATTEMPTS: usize = 6;
