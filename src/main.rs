use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flashcard_scheduler::config::LoggingConfig;
use flashcard_scheduler::{log_system_event, Config, Deck, Difficulty, ReviewService, Sm2Scheduler};

#[derive(Parser)]
#[command(name = "flashcard-scheduler", about = "Spaced repetition scheduling for flashcard decks")]
struct Cli {
    /// Deck JSON file, overrides DECK_PATH
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the cards due today
    Due,
    /// Record a review and write the rescheduled card back to the deck
    Review {
        card_id: String,
        /// easy, medium or hard
        difficulty: Difficulty,
    },
    /// Summarize the deck's scheduling states
    Stats,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logging first so configuration loading is recorded
    let _guard = setup_logging(&LoggingConfig::from_env()?)?;
    let config = Config::from_env()?;
    config.validate()?;

    log_system_event!(startup, component = "cli", "flashcard scheduler starting");

    let deck_path = cli
        .deck
        .unwrap_or_else(|| PathBuf::from(&config.scheduler.deck_path));
    let mut deck = load_deck(&deck_path)?;

    let service = ReviewService::with_scheduler(Sm2Scheduler::with_clock(config.scheduler.clock()));
    info!(today = %service.scheduler().today(), deck_id = %deck.id, "Deck loaded");

    match cli.command {
        Command::Due => {
            let due = service.cards_due_for_review(&deck);
            if due.is_empty() {
                println!("No cards due in '{}'", deck.name);
            }
            for card in due {
                println!("{}\t{}", card.id, card.question);
            }
        }
        Command::Review { card_id, difficulty } => {
            match service.review_card(&mut deck, &card_id, difficulty)? {
                Some(card) => {
                    save_deck(&deck_path, &deck)?;
                    println!(
                        "{} -> repetition {}, next review {}",
                        card.id,
                        card.repetition,
                        card.next_review.as_deref().unwrap_or("-")
                    );
                }
                None => anyhow::bail!("No card '{}' in deck '{}'", card_id, deck.id),
            }
        }
        Command::Stats => {
            let stats = service.review_stats(&deck);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    log_system_event!(shutdown, component = "cli", "flashcard scheduler finished");
    Ok(())
}

fn load_deck(path: &Path) -> Result<Deck> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Could not read deck file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid deck JSON in {}", path.display()))
}

fn save_deck(path: &Path, deck: &Deck) -> Result<()> {
    let raw = serde_json::to_string_pretty(deck)?;
    fs::write(path, raw).with_context(|| format!("Could not write deck file {}", path.display()))
}

fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::fmt;

    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so command output stays pipeable
    let console_layer = config.console_enabled.then(|| {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true)
            .with_writer(std::io::stderr)
    });

    let (file_layer, guard) = if config.file_enabled {
        fs::create_dir_all(&config.log_directory).unwrap_or_else(|e| {
            eprintln!("Warning: Could not create logs directory: {}", e);
        });

        // Daily rotation, no ANSI colors in files
        let file_appender =
            tracing_appender::rolling::daily(&config.log_directory, "flashcard-scheduler.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(non_blocking_file);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    info!(
        directory = %config.log_directory,
        file_enabled = config.file_enabled,
        "Logging initialized"
    );

    Ok(guard)
}
