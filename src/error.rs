//! Structured failures reported by the solver.
//!
//! Every fallible operation returns one of these as an ordinary `Result`
//! value. `NoCandidates` is the only kind a running session expects to see;
//! it becomes the terminal `Failed` state instead of crossing the session
//! boundary as an error.

use crate::word::Word;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The search space is empty: either the code word is missing from the
    /// corpus or some feedback was recorded wrong.
    #[error("no words remain consistent with the recorded feedback")]
    NoCandidates,

    /// A word or feedback string had the wrong number of characters.
    /// Inputs are never truncated or padded to fit.
    #[error("expected {expected} characters, got {actual}")]
    InvalidWordLength { expected: usize, actual: usize },

    /// A character outside the accepted alphabet for the input being parsed.
    #[error("unrecognized character `{0}`")]
    InvalidCharacter(char),

    /// A guess or code word that the corpus does not contain; rejected
    /// before any simulation runs against it.
    #[error("word `{0}` is not in the corpus")]
    UnknownWord(Word),
}
