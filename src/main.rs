//! Hangman - CLI
//!
//! Category-based hangman with a TUI and a plain text mode. Every game is written to
//! its own transcript and folded into cumulative stats.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{category_summaries, run_benchmark, run_simple, run_stats},
    config::GameConfig,
    core::Word,
    game::GameHost,
    output::{print_benchmark_result, print_categories},
    solver::{Solver, StrategyType},
    wordlists::WordRepository,
};
use std::path::PathBuf;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Category-based hangman with per-game transcripts and cumulative stats",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding word files, game logs and stats
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Category to play: a name such as 'animals', or its menu number
    #[arg(short, long, global = true)]
    category: Option<String>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (line-oriented, no TUI)
    Simple,

    /// Let the solver play every word of a category and report how it does
    Benchmark {
        /// Number of words to play (default: the whole pool)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Strategy: frequency (default), random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },

    /// Show cumulative stats
    Stats {
        /// Zero the stats first
        #[arg(long)]
        reset: bool,
    },

    /// List the available categories
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::resolve(cli.data_dir);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let _log_guard = init_logging(&config, cli.verbose, matches!(command, Commands::Play));

    match command {
        Commands::Play => run_play_command(&config, cli.category.as_deref()),
        Commands::Simple => {
            let mut host = open_host(&config)?;
            run_simple(&mut host, cli.category.as_deref())
        }
        Commands::Benchmark { count, strategy } => {
            run_benchmark_command(&config, cli.category.as_deref(), count, &strategy)
        }
        Commands::Stats { reset } => {
            let mut host = open_host(&config)?;
            run_stats(&mut host, reset).map(|_| ())
        }
        Commands::Categories => {
            let repository = open_repository(&config)?;
            print_categories(&category_summaries(&repository));
            Ok(())
        }
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so in play mode logs go to a file under the data
/// directory. The returned guard flushes that file on drop.
fn init_logging(config: &GameConfig, verbose: bool, tui: bool) -> Option<WorkerGuard> {
    let default_filter = if verbose { "hangman=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    if !tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        return None;
    }

    let log_file = config.app_log_file();
    let (Some(dir), Some(name)) = (log_file.parent(), log_file.file_name()) else {
        return None;
    };
    if std::fs::create_dir_all(dir).is_err() {
        // Nowhere to log that won't garble the display
        return None;
    }

    let (non_blocking, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();
    Some(guard)
}

fn open_host(config: &GameConfig) -> Result<GameHost> {
    GameHost::open(config).with_context(|| {
        format!(
            "Failed to prepare game data in {}",
            config.data_dir().display()
        )
    })
}

fn open_repository(config: &GameConfig) -> Result<WordRepository> {
    let dir = config.categories_dir();
    WordRepository::from_dir(&dir)
        .with_context(|| format!("Failed to load word lists from {}", dir.display()))
}

/// Map a `-c` argument to a category name, or `None` for all categories
fn resolve_category(repository: &WordRepository, choice: Option<&str>) -> Option<String> {
    let choice = choice?;
    let resolved = repository.resolve_choice(choice).map(str::to_string);
    if resolved.is_none() {
        warn!(category = choice, "unknown category, using all categories");
        eprintln!("Unknown category '{choice}', using all categories.");
    }
    resolved
}

fn run_play_command(config: &GameConfig, category: Option<&str>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let mut host = open_host(config)?;
    let category = resolve_category(host.repository(), category);
    let app = App::new(&mut host, category);
    run_tui(app)
}

fn run_benchmark_command(
    config: &GameConfig,
    category: Option<&str>,
    count: Option<usize>,
    strategy_name: &str,
) -> Result<()> {
    let repository = open_repository(config)?;
    let category = resolve_category(&repository, category);
    let (label, words) = repository.pool(category.as_deref());

    let pool: Vec<Word> = words.into_iter().cloned().collect();
    let targets: Vec<&Word> = pool.iter().take(count.unwrap_or(pool.len())).collect();

    let strategy = StrategyType::from_name(strategy_name);
    let name = strategy.name();
    println!(
        "Running benchmark on {} words from '{label}' with the {name} strategy...",
        targets.len()
    );

    let solver = Solver::new(strategy, &pool);
    let result = run_benchmark(&solver, &targets, name, label, true);
    print_benchmark_result(&result);
    Ok(())
}
