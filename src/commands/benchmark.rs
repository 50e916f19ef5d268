//! Benchmark command
//!
//! Plays the solver against many target words and measures how often it wins.

use crate::core::Word;
use crate::game::{GameSession, MAX_WRONG, NullTranscript};
use crate::solver::{Move, Solver, Strategy};
use crate::wordlists::SelectedWord;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a single simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedGame {
    pub won: bool,
    pub score: u32,
    pub wrong_guesses: u32,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: String,
    pub category: String,
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_score: u64,
    pub total_wrong: u64,
    /// Wins bucketed by wrong-guess count
    pub wrong_distribution: [usize; MAX_WRONG as usize],
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins as f64 * 100.0, self.total_words)
    }

    #[must_use]
    pub fn average_score(&self) -> f64 {
        ratio(self.total_score as f64, self.total_words)
    }

    #[must_use]
    pub fn average_wrong(&self) -> f64 {
        ratio(self.total_wrong as f64, self.total_words)
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.total_words as f64 / secs
        } else {
            0.0
        }
    }
}

fn ratio(value: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { value / count as f64 }
}

/// Play one full game against `target` with the solver making every move
///
/// Uses a discarding transcript, so nothing is written to disk.
#[must_use]
pub fn simulate_game<S: Strategy>(solver: &Solver<'_, S>, target: &Word) -> SimulatedGame {
    let selection = SelectedWord {
        word: target.clone(),
        length: target.length(),
        category: "Benchmark".to_string(),
    };
    let mut session = GameSession::new(0, selection, NullTranscript);

    while !session.state().is_terminal() {
        let guess = match solver.next_move(&session.board()) {
            Some(Move::Letter(letter)) => session.guess_letter(&letter.to_string()),
            Some(Move::Word(word)) => session.guess_word(&word),
            None => break,
        };
        if guess.is_err() {
            break;
        }
    }

    SimulatedGame {
        won: session.is_won(),
        score: session.compute_score(),
        wrong_guesses: session.wrong_guesses(),
    }
}

/// Run benchmark on a set of target words
///
/// Games are played in parallel. `show_progress` draws a progress bar on stderr.
#[must_use]
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<'_, S>,
    targets: &[&Word],
    strategy: &str,
    category: &str,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let games: Vec<SimulatedGame> = targets
        .par_iter()
        .map(|target| {
            let game = simulate_game(solver, target);
            pb.inc(1);
            game
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut result = BenchmarkResult {
        strategy: strategy.to_string(),
        category: category.to_string(),
        total_words: games.len(),
        wins: 0,
        losses: 0,
        total_score: 0,
        total_wrong: 0,
        wrong_distribution: [0; MAX_WRONG as usize],
        duration: start.elapsed(),
    };

    for game in &games {
        result.total_score += u64::from(game.score);
        result.total_wrong += u64::from(game.wrong_guesses);
        if game.won {
            result.wins += 1;
            result.wrong_distribution[game.wrong_guesses as usize] += 1;
        } else {
            result.losses += 1;
        }
    }

    debug!(
        games = result.total_words,
        wins = result.wins,
        elapsed_ms = result.duration.as_millis() as u64,
        "benchmark finished"
    );
    result
}
