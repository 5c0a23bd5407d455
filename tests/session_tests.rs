use wordle_autopilot::LetterStatus::{Absent, Correct, Present};
use wordle_autopilot::{
    benchmark, simulated_opponent, Benchmark, Corpus, Feedback, ScoringWeights, Session,
    SessionResult, SessionStatus, SolverError, Word, MAX_ATTEMPTS, OPENING_GUESS,
};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn ills_corpus() -> Corpus {
    Corpus::from_lists(
        "bills\nfills\ngills\nhills\nkills\nmills\npills\nsills\ntills\nwills\n",
        "",
    )
}

#[test]
fn test_two_turn_win() {
    let corpus = Corpus::from_lists("crane\nslate\nbrick\ngrown\nmound\n", "slate\ncrane\n");
    let result = Session::new(&corpus).run_against(word("crane")).unwrap();

    assert!(result.is_win());
    let attempts = result.attempts();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].guess, word("slate"));
    assert_eq!(attempts[1].guess, word("crane"));
    assert!(attempts[1].response.is_win());
}

#[test]
fn test_lost_after_attempt_limit() {
    let corpus = ills_corpus();
    let result = Session::new(&corpus).run_against(word("wills")).unwrap();

    assert!(matches!(result, SessionResult::Lost(_)));
    let attempts = result.attempts();
    assert_eq!(attempts.len(), MAX_ATTEMPTS);

    let guesses: Vec<Word> = attempts.iter().map(|a| a.guess).collect();
    let expected: Vec<Word> = ["bills", "fills", "gills", "hills", "kills", "mills"]
        .iter()
        .map(|s| word(s))
        .collect();
    assert_eq!(guesses, expected);
    assert!(attempts.iter().all(|a| !a.response.is_win()));
}

#[test]
fn test_failed_on_contradictory_response() {
    let corpus = Corpus::from_lists("abbey\nbobby\nboxer\n", "");
    let mut session = Session::new(&corpus);

    session
        .record_attempt(
            word("boxer"),
            Feedback::new([Absent, Absent, Absent, Absent, Correct]),
        )
        .unwrap();

    assert_eq!(session.status(), SessionStatus::Failed);
    assert!(!session.won());
}

#[test]
fn test_record_attempt_rejects_unknown_word() {
    let corpus = Corpus::from_lists("abbey\nbobby\nboxer\n", "");
    let mut session = Session::new(&corpus);

    let err = session
        .record_attempt(word("crane"), Feedback::ALL_CORRECT)
        .unwrap_err();
    assert_eq!(err, SolverError::UnknownWord(word("crane")));
    assert!(session.history().is_empty());
}

#[test]
fn test_record_attempt_is_noop_once_decided() {
    let corpus = Corpus::from_lists("abbey\nbobby\nboxer\n", "");
    let mut session = Session::new(&corpus);

    session
        .record_attempt(
            word("boxer"),
            Feedback::new([Absent, Absent, Absent, Absent, Correct]),
        )
        .unwrap();
    assert_eq!(session.status(), SessionStatus::Failed);

    session
        .record_attempt(word("abbey"), Feedback::ALL_CORRECT)
        .unwrap();
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.status(), SessionStatus::Failed);
}

#[test]
fn test_win_on_final_attempt_counts_as_won() {
    let corpus = ills_corpus();
    let code = word("wills");
    let mut session = Session::new(&corpus);

    for guess in ["bills", "fills", "gills", "hills", "kills"] {
        let guess = word(guess);
        session
            .record_attempt(guess, Feedback::simulate(code, guess))
            .unwrap();
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    session.record_attempt(code, Feedback::ALL_CORRECT).unwrap();
    assert_eq!(session.history().len(), MAX_ATTEMPTS);
    assert_eq!(session.status(), SessionStatus::Won);
}

#[test]
fn test_run_against_rejects_unknown_code() {
    let corpus = Corpus::from_lists("crane\n", "");
    let err = Session::new(&corpus).run_against(word("slate")).unwrap_err();
    assert_eq!(err, SolverError::UnknownWord(word("slate")));
}

#[test]
fn test_play_turn_is_noop_once_decided() {
    let corpus = Corpus::from_lists("crane\n", "");
    let mut session = Session::new(&corpus);
    let mut channel = simulated_opponent(word("crane"));

    assert_eq!(session.play_turn(&mut channel), SessionStatus::Won);
    assert_eq!(session.history().len(), 1);

    assert_eq!(session.play_turn(&mut channel), SessionStatus::Won);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_session_terminates_against_dishonest_channel() {
    let corpus = Corpus::bundled();
    let all_absent = Feedback::new([Absent, Absent, Absent, Absent, Absent]);
    let result = Session::new(&corpus).run(|_| all_absent);

    assert!(!result.is_win());
    assert!(result.attempts().len() <= MAX_ATTEMPTS);
}

#[test]
fn test_solves_against_bundled_corpus() {
    let corpus = Corpus::bundled();
    let result = Session::new(&corpus).run_against(word("crane")).unwrap();

    let attempts = result.attempts();
    assert!(!attempts.is_empty());
    assert!(attempts.len() <= MAX_ATTEMPTS);
    assert_eq!(attempts[0].guess, word(OPENING_GUESS));
    assert_eq!(
        attempts[0].response,
        Feedback::new([Present, Present, Present, Absent, Absent])
    );
    assert!(!matches!(result, SessionResult::Failed(_)));
}

#[test]
fn test_benchmark_small_corpus() {
    let corpus = Corpus::from_lists("crane\nslate\nbrick\ngrown\nmound\n", "slate\ncrane\n");
    let results = benchmark(&corpus, ScoringWeights::default());

    assert_eq!(results.sessions(), corpus.len());
    assert_eq!(results.solved(), corpus.len());
    assert_eq!(results.lost, 0);
    assert_eq!(results.failed, 0);
    assert!(results.average_attempts() >= 1.0);
    assert!(results.average_attempts() <= MAX_ATTEMPTS as f64);
}

#[test]
fn test_benchmark_empty_is_zero() {
    let results = Benchmark::default();
    assert_eq!(results.sessions(), 0);
    assert_eq!(results.solved(), 0);
    assert_eq!(results.average_attempts(), 0.0);
}
