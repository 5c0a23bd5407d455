//! Candidate filtering and guess selection.
//!
//! Filtering replays the recorded attempts against every corpus word and
//! keeps the words that would have produced identical responses. Selection
//! scores each remaining candidate by how much its letters repeat and how
//! popular it is, then takes the minimum score over the candidate list in
//! parallel.

use crate::corpus::Corpus;
use crate::error::SolverError;
use crate::feedback::Feedback;
use crate::session::Attempt;
use crate::word::Word;
use crate::WORD_LENGTH;
use rayon::prelude::*;

/// The fixed first guess, used whenever the corpus contains it.
pub const OPENING_GUESS: &str = "aeros";

/// Relative weight of each scoring component.
///
/// Scores are minimized, so raising `popularity` pushes selection toward
/// common words and raising `entropy` pushes it toward words with five
/// distinct letters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight of the duplicate-letter penalty.
    pub entropy: f64,
    /// Weight of the normalized popularity rank.
    pub popularity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            entropy: 1.0,
            popularity: 0.5,
        }
    }
}

/// All corpus words still consistent with every recorded attempt.
///
/// A word is consistent with an attempt when simulating that attempt's
/// guess against the word reproduces the recorded response exactly. Words
/// that were already guessed are excluded.
pub fn filter_candidates(corpus: &Corpus, history: &[Attempt]) -> Vec<Word> {
    corpus
        .words()
        .iter()
        .copied()
        .filter(|&word| {
            history.iter().all(|attempt| {
                attempt.guess != word
                    && Feedback::simulate(word, attempt.guess) == attempt.response
            })
        })
        .collect()
}

/// Pick the next guess for the given attempt history.
///
/// The first guess of a session is the fixed opener when the corpus
/// contains it. Every later guess (and the first, when the opener is
/// missing) is the minimum-score candidate; ties go to the lower popularity
/// rank, then to the lexicographically smaller word, so the result does not
/// depend on evaluation order.
pub fn select_guess(
    corpus: &Corpus,
    history: &[Attempt],
    weights: ScoringWeights,
) -> Result<Word, SolverError> {
    if history.is_empty() {
        if let Some(opener) = opening_guess(corpus) {
            log::debug!("opening with {opener}");
            return Ok(opener);
        }
    }

    let candidates = filter_candidates(corpus, history);
    log::debug!(
        "{} candidates remain after {} attempts",
        candidates.len(),
        history.len()
    );

    let (best_score, _, best) = candidates
        .par_iter()
        .map(|&word| (score(corpus, word, weights), corpus.rank(word), word))
        .min_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.2.cmp(&b.2))
        })
        .ok_or(SolverError::NoCandidates)?;

    log::debug!("selected {best} with score {best_score:.4}");
    Ok(best)
}

fn opening_guess(corpus: &Corpus) -> Option<Word> {
    let opener = Word::new(OPENING_GUESS).ok()?;
    corpus.contains(opener).then_some(opener)
}

/// Lower is better. Duplicity is word length over distinct letters, so a
/// word with all-distinct letters scores 1.0 on that component; popularity
/// is the word's rank normalized by corpus size.
fn score(corpus: &Corpus, word: Word, weights: ScoringWeights) -> f64 {
    let duplicity = WORD_LENGTH as f64 / word.distinct_letters() as f64;
    let popularity = corpus.rank(word) as f64 / corpus.len() as f64;
    duplicity * weights.entropy + popularity * weights.popularity
}
