//! Game sessions against an external feedback channel.
//!
//! A session owns the attempt history and drives the solver through a game:
//! pick a guess, hand it to the channel, record the response, repeat until
//! the game is decided. The channel is any `FnMut(Word) -> Feedback`, so a
//! real opponent, a terminal relay and the built-in simulator all plug in
//! the same way.

use crate::corpus::Corpus;
use crate::error::SolverError;
use crate::feedback::Feedback;
use crate::solver::{filter_candidates, select_guess, ScoringWeights};
use crate::word::Word;
use crate::MAX_ATTEMPTS;
use rayon::prelude::*;

/// One guess and the response it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub response: Feedback,
}

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Attempts remain and candidates remain.
    InProgress,
    /// The last response marked every position correct.
    Won,
    /// The attempt limit was reached without a win.
    Lost,
    /// No corpus word is consistent with the recorded responses.
    Failed,
}

/// A finished session with its full attempt history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResult {
    Won(Vec<Attempt>),
    Lost(Vec<Attempt>),
    Failed(Vec<Attempt>),
}

impl SessionResult {
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            SessionResult::Won(attempts)
            | SessionResult::Lost(attempts)
            | SessionResult::Failed(attempts) => attempts,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, SessionResult::Won(_))
    }
}

/// The feedback channel for a code word the program knows, for tests and
/// benchmarking.
pub fn simulated_opponent(code: Word) -> impl FnMut(Word) -> Feedback {
    move |guess| Feedback::simulate(code, guess)
}

/// A single game in progress.
///
/// The session never learns the code word. Everything it knows arrives
/// through recorded responses, and every state transition is derived from
/// the history those responses accumulate into.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    corpus: &'a Corpus,
    weights: ScoringWeights,
    history: Vec<Attempt>,
    failed: bool,
}

impl<'a> Session<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self::with_weights(corpus, ScoringWeights::default())
    }

    pub fn with_weights(corpus: &'a Corpus, weights: ScoringWeights) -> Self {
        Self {
            corpus,
            weights,
            history: Vec::new(),
            failed: false,
        }
    }

    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Derive the session state from the recorded history.
    ///
    /// A win on the final attempt is still a win; running out of candidates
    /// only counts as failure while attempts remain.
    pub fn status(&self) -> SessionStatus {
        if let Some(last) = self.history.last() {
            if last.response.is_win() {
                return SessionStatus::Won;
            }
        }
        if self.history.len() >= MAX_ATTEMPTS {
            return SessionStatus::Lost;
        }
        if self.failed {
            return SessionStatus::Failed;
        }
        SessionStatus::InProgress
    }

    pub fn won(&self) -> bool {
        self.status() == SessionStatus::Won
    }

    /// The guess the solver would play next for the current history.
    pub fn next_guess(&self) -> Result<Word, SolverError> {
        select_guess(self.corpus, &self.history, self.weights)
    }

    /// Record a guess and the response it received.
    ///
    /// The guess must be a corpus word. On a session that is already
    /// decided this records nothing.
    pub fn record_attempt(&mut self, guess: Word, response: Feedback) -> Result<(), SolverError> {
        if self.status() != SessionStatus::InProgress {
            return Ok(());
        }
        if !self.corpus.contains(guess) {
            return Err(SolverError::UnknownWord(guess));
        }
        self.push_attempt(Attempt { guess, response });
        Ok(())
    }

    /// Play one turn: select a guess, obtain its response from the channel,
    /// record it. On a session that is already decided this does nothing.
    pub fn play_turn<F>(&mut self, channel: &mut F) -> SessionStatus
    where
        F: FnMut(Word) -> Feedback,
    {
        if self.status() != SessionStatus::InProgress {
            return self.status();
        }
        let guess = match self.next_guess() {
            Ok(guess) => guess,
            Err(_) => {
                self.failed = true;
                return self.status();
            }
        };
        let response = channel(guess);
        self.push_attempt(Attempt { guess, response });
        self.status()
    }

    /// Play the session to completion against the given channel.
    pub fn run<F>(mut self, mut channel: F) -> SessionResult
    where
        F: FnMut(Word) -> Feedback,
    {
        loop {
            match self.play_turn(&mut channel) {
                SessionStatus::InProgress => continue,
                SessionStatus::Won => return SessionResult::Won(self.history),
                SessionStatus::Lost => return SessionResult::Lost(self.history),
                SessionStatus::Failed => return SessionResult::Failed(self.history),
            }
        }
    }

    /// Play the session to completion against a simulated opponent holding
    /// `code`, which must be a corpus word.
    pub fn run_against(self, code: Word) -> Result<SessionResult, SolverError> {
        if !self.corpus.contains(code) {
            return Err(SolverError::UnknownWord(code));
        }
        Ok(self.run(simulated_opponent(code)))
    }

    fn push_attempt(&mut self, attempt: Attempt) {
        self.history.push(attempt);
        if !attempt.response.is_win() && filter_candidates(self.corpus, &self.history).is_empty() {
            self.failed = true;
        }
    }
}

/// Outcome counts from running every corpus word as the code of a
/// simulated session.
#[derive(Debug, Clone, Default)]
pub struct Benchmark {
    /// `(attempts, sessions won in that many attempts)`, ascending, zero
    /// counts omitted.
    pub distribution: Vec<(usize, usize)>,
    pub lost: usize,
    pub failed: usize,
}

impl Benchmark {
    pub fn solved(&self) -> usize {
        self.distribution.iter().map(|&(_, count)| count).sum()
    }

    pub fn sessions(&self) -> usize {
        self.solved() + self.lost + self.failed
    }

    /// Mean attempts over won sessions, 0.0 when none were won.
    pub fn average_attempts(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let total: usize = self
            .distribution
            .iter()
            .map(|&(attempts, count)| attempts * count)
            .sum();
        total as f64 / solved as f64
    }
}

/// Run one simulated session per corpus word in parallel and tally the
/// outcomes.
pub fn benchmark(corpus: &Corpus, weights: ScoringWeights) -> Benchmark {
    let results: Vec<SessionResult> = corpus
        .words()
        .par_iter()
        .map(|&code| Session::with_weights(corpus, weights).run(simulated_opponent(code)))
        .collect();

    let mut counts = vec![0usize; MAX_ATTEMPTS + 1];
    let mut lost = 0;
    let mut failed = 0;
    for result in &results {
        match result {
            SessionResult::Won(attempts) => counts[attempts.len()] += 1,
            SessionResult::Lost(_) => lost += 1,
            SessionResult::Failed(_) => failed += 1,
        }
    }

    Benchmark {
        distribution: counts
            .into_iter()
            .enumerate()
            .filter(|&(_, count)| count > 0)
            .collect(),
        lost,
        failed,
    }
}
