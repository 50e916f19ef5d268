//! Display functions for the text game and command results

use super::formatters::{create_progress_bar, format_guessed, format_hints, pluralize};
use super::gallows::gallows;
use crate::commands::{BenchmarkResult, CategorySummary};
use crate::game::{GameSession, MAX_WRONG, Stats, Transcript};
use colored::Colorize;
use std::io::{self, Write};

/// Maximum hint words listed under a new word
pub const HINT_LIMIT: usize = 12;

/// Boxed title banner
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_header(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(40).cyan())?;
    writeln!(out, "{}", text.bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(40).cyan())
}

/// Numbered category menu
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_category_menu(out: &mut impl Write, categories: &[&str]) -> io::Result<()> {
    writeln!(out, "Choose a category (or press Enter for random):")?;
    for (i, name) in categories.iter().enumerate() {
        writeln!(out, "  {}. {name}", i + 1)?;
    }
    Ok(())
}

/// Announcement of a freshly drawn word with its hint list
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_new_word(
    out: &mut impl Write,
    category: &str,
    length: usize,
    hints: &[&str],
) -> io::Result<()> {
    writeln!(
        out,
        "\nNew word selected from '{}' (length {length})",
        category.bright_yellow()
    )?;
    if hints.is_empty() {
        writeln!(out, "No hints available for this length.")?;
    } else {
        writeln!(
            out,
            "Hint: possible {} word(s) with {length} letters -> {}",
            category.to_lowercase(),
            format_hints(hints, HINT_LIMIT).bright_black()
        )?;
    }
    writeln!(out)
}

/// Progress, guessed letters, remaining attempts and the gallows
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_state<T: Transcript>(out: &mut impl Write, session: &GameSession<T>) -> io::Result<()> {
    writeln!(out, "\n{}\n", session.progress().bright_white().bold())?;
    writeln!(
        out,
        "Guessed letters: {}",
        format_guessed(session.guessed_letters())
    )?;

    let remaining = session.remaining_attempts();
    let remaining_text = format!("{remaining}/{MAX_WRONG}");
    let remaining_text = if remaining <= 2 {
        remaining_text.red().bold()
    } else {
        remaining_text.yellow()
    };
    writeln!(out, "Remaining attempts: {remaining_text}")?;
    writeln!(out, "{}", gallows(session.wrong_guesses()))
}

/// Feedback for one guess
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_message(out: &mut impl Write, message: &str, good: bool) -> io::Result<()> {
    if good {
        writeln!(out, "{}", message.green())
    } else {
        writeln!(out, "{}", message.red())
    }
}

/// Win banner
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_win(out: &mut impl Write, word: &str, score: u32) -> io::Result<()> {
    writeln!(
        out,
        "\n{} The word was '{}'. Score: {}",
        "🎉 You win!".bright_green().bold(),
        word.bright_white().bold(),
        score.to_string().bright_yellow().bold()
    )
}

/// Loss banner
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_loss(out: &mut impl Write, word: &str) -> io::Result<()> {
    writeln!(
        out,
        "\n{} The word was '{}'.",
        "💀 You lost!".bright_red().bold(),
        word.bright_white().bold()
    )
}

/// One-line cumulative stats summary
#[must_use]
pub fn stats_line(stats: &Stats) -> String {
    format!(
        "Games: {} | Wins: {} | Losses: {} | WinRate: {:.2}% | Avg: {:.2}",
        stats.games_played,
        stats.wins,
        stats.losses,
        stats.win_rate(),
        stats.average_score()
    )
}

/// Cumulative stats summary line
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_stats(out: &mut impl Write, stats: &Stats) -> io::Result<()> {
    writeln!(out, "\n{}", stats_line(stats).bright_cyan())
}

/// Print the full stats report
pub fn print_stats_report(stats: &Stats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HANGMAN STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Games played:  {}", stats.games_played);
    println!(
        "   Wins:          {}",
        stats.wins.to_string().green().bold()
    );
    println!("   Losses:        {}", stats.losses.to_string().red());
    println!(
        "   Win rate:      [{}] {}",
        create_progress_bar(stats.win_rate(), 100.0, 30).green(),
        format!("{:.1}%", stats.win_rate()).bright_yellow()
    );
    println!("   Total score:   {}", stats.total_score);
    println!("   Average score: {:.2}", stats.average_score());
}

/// Print the category list
pub fn print_categories(categories: &[CategorySummary]) {
    println!("\n{}", "Available categories".bright_cyan().bold());
    for (i, summary) in categories.iter().enumerate() {
        println!(
            "  {}. {:<14} {}",
            i + 1,
            summary.name.bright_white(),
            pluralize(summary.words as u64, "word").bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Pool:             {}", result.category);
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Average score:    {:.2}", result.average_score());
    println!("   Average wrong:    {:.2}", result.average_wrong());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second());

    println!("\n📈 {}", "Wrong guesses (wins):".bright_cyan().bold());
    for (wrong, &count) in result.wrong_distribution.iter().enumerate() {
        let pct = if result.total_words == 0 {
            0.0
        } else {
            count as f64 / result.total_words as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {wrong}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
    println!(
        "   {}: {} {:5}",
        "lost".red(),
        " ".repeat(40),
        result.losses
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::MemoryTranscript;
    use crate::wordlists::SelectedWord;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn new_word_with_hints() {
        let text = render(|out| write_new_word(out, "Animals", 3, &["cat", "dog"]));
        assert!(text.contains("New word selected from 'Animals' (length 3)"));
        assert!(text.contains("Hint: possible animals word(s) with 3 letters -> cat, dog"));
    }

    #[test]
    fn new_word_without_hints() {
        let text = render(|out| write_new_word(out, "All", 9, &[]));
        assert!(text.contains("No hints available for this length."));
    }

    #[test]
    fn state_shows_progress_and_attempts() {
        let word = Word::new("cat").unwrap();
        let selection = SelectedWord {
            length: 3,
            word,
            category: "Animals".to_string(),
        };
        let mut session = GameSession::new(1, selection, MemoryTranscript::new());
        session.guess_letter("a").unwrap();
        session.guess_letter("q").unwrap();

        let text = render(|out| write_state(out, &session));
        assert!(text.contains("_ a _"));
        assert!(text.contains("Guessed letters: a, q"));
        assert!(text.contains("Remaining attempts: 5/6"));
        assert!(text.contains(gallows(1)));
    }

    #[test]
    fn category_menu_is_numbered() {
        let text = render(|out| write_category_menu(out, &["Animals", "Science"]));
        assert!(text.contains("  1. Animals\n  2. Science\n"));
    }

    #[test]
    fn stats_line_format() {
        let stats = Stats {
            games_played: 4,
            wins: 3,
            losses: 1,
            total_score: 90,
        };
        assert_eq!(
            stats_line(&stats),
            "Games: 4 | Wins: 3 | Losses: 1 | WinRate: 75.00% | Avg: 22.50"
        );
    }
}
