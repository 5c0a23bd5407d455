use wordle_autopilot::{Corpus, Word};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn test_from_lists_basic() {
    let corpus = Corpus::from_lists("crane\nslate\n", "slate\n");
    assert_eq!(corpus.len(), 2);
    assert!(corpus.contains(word("crane")));
    assert!(corpus.contains(word("slate")));
    assert_eq!(corpus.rank(word("slate")), 0);
    assert_eq!(corpus.rank(word("crane")), 1);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let corpus = Corpus::from_lists("crane\ntoolong\nxx\n\n  slate  \n", "bad!x\nslate\n");
    assert_eq!(corpus.len(), 2);
    assert!(corpus.contains(word("slate")));
    assert_eq!(corpus.rank(word("slate")), 0);
    assert_eq!(corpus.rank(word("crane")), 1);
}

#[test]
fn test_duplicate_words_keep_first_position() {
    let corpus = Corpus::from_lists("crane\nslate\ncrane\n", "");
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.words()[0], word("crane"));
    assert_eq!(corpus.words()[1], word("slate"));
}

#[test]
fn test_popularity_duplicates_keep_last_rank() {
    let corpus = Corpus::from_lists("crane\nslate\ntrace\n", "crane\nslate\ncrane\n");
    assert_eq!(corpus.rank(word("crane")), 2);
    assert_eq!(corpus.rank(word("slate")), 1);
    assert_eq!(corpus.rank(word("trace")), 3);
}

#[test]
fn test_popularity_entries_outside_word_list_consume_ranks() {
    let corpus = Corpus::from_lists("crane\nslate\n", "gonna\ncrane\n");
    assert_eq!(corpus.rank(word("crane")), 1);
    assert_eq!(corpus.rank(word("slate")), 2);
}

#[test]
fn test_unranked_words_share_worst_rank() {
    let corpus = Corpus::from_lists("crane\nslate\ntrace\n", "slate\n");
    assert_eq!(corpus.rank(word("crane")), corpus.rank(word("trace")));
    assert!(corpus.rank(word("crane")) > corpus.rank(word("slate")));
}

#[test]
fn test_empty_sources() {
    let corpus = Corpus::from_lists("", "");
    assert!(corpus.is_empty());
    assert_eq!(corpus.len(), 0);
}

#[test]
fn test_bundled_corpus() {
    let corpus = Corpus::bundled();
    assert!(corpus.len() > 1000);
    assert!(corpus.contains(word("crane")));
    assert!(corpus.contains(word("aeros")));
    assert_eq!(corpus.rank(word("about")), 0);
    assert!(corpus.rank(word("aeros")) > corpus.rank(word("crane")));
}
