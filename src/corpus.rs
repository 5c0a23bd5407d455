//! Word list and popularity ranking.
//!
//! A corpus pairs the playable word list with a popularity rank per word.
//! Loading is forgiving: lines that do not parse as five-letter words are
//! skipped rather than failing the whole load, so a corpus built from any
//! input text is always usable.

use crate::word::Word;
use std::collections::{HashMap, HashSet};

/// The bundled playable word list, one word per line.
pub const BUNDLED_WORDS: &str = include_str!("../data/words.txt");

/// The bundled popularity list, most popular first.
pub const BUNDLED_POPULARITY: &str = include_str!("../data/popularity.txt");

/// The full word list plus a popularity rank per word.
///
/// Ranks are 0-based positions in the popularity list, so lower means more
/// popular. Words missing from that list all share the worst rank, one past
/// the last listed entry.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    ranks: HashMap<Word, usize>,
    unranked: usize,
}

impl Corpus {
    /// Build a corpus from raw word-list and popularity text, one word per
    /// line.
    ///
    /// Word-list duplicates keep their first position. Popularity entries
    /// each consume one rank even when they never appear in the word list,
    /// and a word repeated in the popularity list keeps its last rank.
    pub fn from_lists(words: &str, popularity: &str) -> Self {
        let mut list = Vec::new();
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for line in words.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Word::new(line) {
                Ok(word) => {
                    if seen.insert(word) {
                        list.push(word);
                    }
                }
                Err(_) => skipped += 1,
            }
        }

        let mut ranks = HashMap::new();
        let mut next_rank = 0usize;

        for line in popularity.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Word::new(line) {
                Ok(word) => {
                    ranks.insert(word, next_rank);
                    next_rank += 1;
                }
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("skipped {skipped} malformed lines");
        }
        log::debug!(
            "loaded {} words and {} popularity entries",
            list.len(),
            next_rank
        );

        Self {
            words: list,
            ranks,
            unranked: next_rank,
        }
    }

    /// The corpus shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_lists(BUNDLED_WORDS, BUNDLED_POPULARITY)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: Word) -> bool {
        self.words.contains(&word)
    }

    /// The popularity rank for `word`, 0-based, lower is more popular.
    pub fn rank(&self, word: Word) -> usize {
        self.ranks.get(&word).copied().unwrap_or(self.unranked)
    }

    /// Every word in the corpus, in word-list order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
