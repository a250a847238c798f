use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

mod config;
mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use config::{OutputFormat, Settings, WordsortConfig};
use errors::ReportedError;
use state::AppState;

/// Word Sorter - classify hyphen-separated words and arrange them on a board
///
/// Examples:
///   # Classify words without saving anything
///   wordsort classify "banana-Apple-10-apple-Banana-2"
///
///   # Start a session, then move items into the placed region
///   wordsort new "banana-Apple-10-apple-Banana-2"
///   wordsort place b1
///   wordsort place n2 --at 0
///
///   # Return an item, inspect a placed one, print the board
///   wordsort unplace b1
///   wordsort select n2
///   wordsort show --format json
#[derive(Parser, Debug)]
#[command(name = "wordsort")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Classification:\n  \
    - Words are separated by '-' and trimmed; empty words are dropped\n  \
    - All-digit words are numeric and sorted by value (keys n1, n2, ...)\n  \
    - Words starting with an uppercase letter are capitalized (keys b1, b2, ...)\n  \
    - Everything else is lowercase (keys a1, a2, ...)\n\n\
Items:\n  \
    - ITEM is a key such as 'a1' or a 0-based index")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Session file holding the board between commands
    #[arg(short, long, value_name = "FILE", global = true, env = "WORDSORT_SESSION")]
    session: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify words and print the result without saving a session
    Classify {
        /// Hyphen-separated words
        #[arg(value_name = "WORDS", allow_hyphen_values = true)]
        input: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Classify words into a new session, replacing any previous one
    New {
        /// Hyphen-separated words
        #[arg(value_name = "WORDS", allow_hyphen_values = true)]
        input: String,
    },

    /// Print the board
    Show {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Move an item into the placed region, or to a new position within it
    Place {
        /// Item key or index
        item: String,

        /// Position in the placed region (default: end)
        #[arg(short, long, value_name = "POS")]
        at: Option<usize>,
    },

    /// Return a placed item to the unplaced region
    Unplace {
        /// Item key or index
        item: String,
    },

    /// Select a placed item and print its label
    Select {
        /// Item key or index
        item: String,
    },

    /// Validate the session file
    Check,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);

    if let Err(err) = run(cli) {
        report(&err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = WordsortConfig::load_or_default(cli.config.as_deref())?;
    let settings = Settings::resolve(&config, cli.session, cli.no_color);

    if !settings.color {
        colored::control::set_override(false);
    }

    let mut state = AppState::new();

    match cli.command {
        Command::Classify { input, format } => handlers::handle_classify(&input, format, &settings),
        Command::New { input } => handlers::handle_new(&mut state, &input, &settings),
        Command::Show { format } => handlers::handle_show(&mut state, format, &settings),
        Command::Place { item, at } => handlers::handle_place(&mut state, &item, at, &settings),
        Command::Unplace { item } => handlers::handle_unplace(&mut state, &item, &settings),
        Command::Select { item } => handlers::handle_select(&mut state, &item, &settings),
        Command::Check => handlers::handle_check(&mut state, &settings),
    }
}

/// Initialize logging based on verbosity level; RUST_LOG takes precedence
fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn report(err: &anyhow::Error) {
    if let Some(reported) = err.downcast_ref::<ReportedError>() {
        ui::show_error(&reported.title, &reported.message, &reported.details);
    } else {
        let details = err
            .chain()
            .skip(1)
            .map(|cause| cause.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        ui::show_error("Error", err.to_string(), details);
    }
}
