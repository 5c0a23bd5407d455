//! Wordle Autopilot CLI
//!
//! Command-line driver for the solver: simulated solves, an interactive
//! relay against a real game, and a whole-corpus benchmark.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;
use wordle_autopilot::corpus::{BUNDLED_POPULARITY, BUNDLED_WORDS};
use wordle_autopilot::{
    benchmark, filter_candidates, Attempt, Corpus, Feedback, ScoringWeights, Session,
    SessionResult, SessionStatus, Word,
};

/// Wordle Autopilot CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a newline-delimited word list replacing the bundled one
    #[arg(long)]
    words: Option<String>,

    /// Path to a popularity list (most popular first) replacing the bundled one
    #[arg(long)]
    popularity: Option<String>,

    /// Weight of the popularity component when scoring guesses
    #[arg(long, default_value_t = ScoringWeights::default().popularity)]
    popularity_weight: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve for a known code word with a simulated opponent
    Solve {
        /// The hidden word the simulated opponent holds
        code: String,
    },
    /// Relay a live game: guesses are printed, responses are typed back
    Play,
    /// Print the guess a fresh session would open with
    Suggest,
    /// Run a simulated session for every corpus word and print the outcomes
    Benchmark,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let corpus = match load_corpus(&cli) {
        Ok(corpus) => corpus,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let weights = ScoringWeights {
        popularity: cli.popularity_weight,
        ..ScoringWeights::default()
    };

    let outcome = match cli.command {
        Command::Solve { ref code } => run_solve(&corpus, weights, code),
        Command::Play => run_play(&corpus, weights),
        Command::Suggest => run_suggest(&corpus, weights),
        Command::Benchmark => {
            run_benchmark(&corpus, weights);
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn load_corpus(cli: &Cli) -> Result<Corpus, String> {
    let words = match &cli.words {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("cannot read word list {path}: {e}"))?
        }
        None => BUNDLED_WORDS.to_string(),
    };
    let popularity = match &cli.popularity {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read popularity list {path}: {e}"))?,
        None => BUNDLED_POPULARITY.to_string(),
    };

    let corpus = Corpus::from_lists(&words, &popularity);
    if corpus.is_empty() {
        return Err("word list is empty".to_string());
    }
    Ok(corpus)
}

fn run_solve(corpus: &Corpus, weights: ScoringWeights, code: &str) -> Result<(), String> {
    let code = Word::new(code).map_err(|e| e.to_string())?;

    println!("Solving for: {}", code.to_string().to_uppercase());
    println!();

    let result = Session::with_weights(corpus, weights)
        .run_against(code)
        .map_err(|e| e.to_string())?;

    print_attempts(result.attempts());
    println!();
    match &result {
        SessionResult::Won(attempts) => println!("Solved in {} guesses.", attempts.len()),
        SessionResult::Lost(_) => println!("Out of guesses."),
        SessionResult::Failed(_) => println!("No candidates remained."),
    }
    Ok(())
}

fn run_play(corpus: &Corpus, weights: ScoringWeights) -> Result<(), String> {
    println!("Relaying a live game. Answer each guess with five marks:");
    println!("g=green, y=yellow, x=gray (e.g. gyxxg).");
    println!();

    let stdin = io::stdin();
    let mut session = Session::with_weights(corpus, weights);

    loop {
        match session.status() {
            SessionStatus::InProgress => {}
            SessionStatus::Won => {
                println!("Solved in {} guesses.", session.history().len());
                return Ok(());
            }
            SessionStatus::Lost => {
                println!("Out of guesses.");
                return Ok(());
            }
            SessionStatus::Failed => {
                println!("No candidates remain. A response was probably mistyped.");
                return Ok(());
            }
        }

        let guess = match session.next_guess() {
            Ok(guess) => guess,
            Err(e) => return Err(e.to_string()),
        };
        println!(
            "Guess {}: {}",
            session.history().len() + 1,
            guess.to_string().to_uppercase()
        );

        let response = read_response(&stdin)?;
        session
            .record_attempt(guess, response)
            .map_err(|e| e.to_string())?;

        if session.status() == SessionStatus::InProgress {
            let remaining = filter_candidates(corpus, session.history()).len();
            println!("{remaining} candidates remain.");
            println!();
        }
    }
}

fn read_response(stdin: &io::Stdin) -> Result<Feedback, String> {
    loop {
        print!("Response: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            return Err("input closed before the game finished".to_string());
        }

        match Feedback::parse(line.trim()) {
            Ok(response) => return Ok(response),
            Err(e) => println!("{e}"),
        }
    }
}

fn run_suggest(corpus: &Corpus, weights: ScoringWeights) -> Result<(), String> {
    let session = Session::with_weights(corpus, weights);
    let guess = session.next_guess().map_err(|e| e.to_string())?;
    println!("Opening guess: {}", guess.to_string().to_uppercase());
    Ok(())
}

fn run_benchmark(corpus: &Corpus, weights: ScoringWeights) {
    println!("Running every one of the {} corpus words...", corpus.len());

    let start = Instant::now();
    let results = benchmark(corpus, weights);
    let elapsed = start.elapsed();

    let sessions = results.sessions();
    println!();
    println!("Attempt distribution:");
    for &(attempts, count) in &results.distribution {
        let pct = count as f64 / sessions as f64 * 100.0;
        let bar = "█".repeat((count * 40 / sessions).max(1));
        println!("  {} attempts: {:>5} ({:>5.1}%) {}", attempts, count, pct, bar);
    }
    println!();
    println!("Average attempts: {:.3}", results.average_attempts());
    println!(
        "Solve rate: {:.1}% of {} sessions",
        results.solved() as f64 / sessions as f64 * 100.0,
        sessions
    );
    if results.lost > 0 {
        println!("Lost: {}", results.lost);
    }
    if results.failed > 0 {
        println!("Failed: {}", results.failed);
    }
    println!("Time elapsed: {:.2?}", elapsed);
}

fn print_attempts(attempts: &[Attempt]) {
    for (i, attempt) in attempts.iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            attempt.guess.to_string().to_uppercase(),
            attempt.response
        );
    }
}
