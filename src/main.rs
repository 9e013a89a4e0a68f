//! Words Virtuoso - CLI
//!
//! Guess the secret five-letter word drawn from a candidates file, with every
//! guess checked against a dictionary file.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use words_virtuoso::{
    commands::run_play,
    core::Word,
    error::StartupError,
    game::Session,
    output::{AnsiPainter, Painter, PlainPainter},
    wordlists::{
        WordLists,
        loader::{load_word_lists, paths_from_args},
    },
};

#[derive(Parser)]
#[command(
    name = "words-virtuoso",
    about = "Guess the secret five-letter word from colored letter clues",
    version,
    author
)]
struct Cli {
    /// Dictionary file followed by candidates file, one word per line
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Play in the full-screen interface
    #[arg(long)]
    tui: bool,

    /// Plain-text clues instead of colored backgrounds
    #[arg(long)]
    no_color: bool,

    /// Seed for picking the secret word
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lists = match load(&cli.files) {
        Ok(lists) => lists,
        Err(err) => {
            println!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match play(&cli, &lists) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load(files: &[PathBuf]) -> Result<WordLists, StartupError> {
    let (words, candidates) = paths_from_args(files)?;
    let lists = load_word_lists(words, candidates)?;
    debug!(
        dictionary = lists.dictionary().len(),
        candidates = lists.candidates().len(),
        "word lists validated"
    );
    Ok(lists)
}

fn pick_secret(lists: &WordLists, seed: Option<u64>) -> Option<Word> {
    let secret = match seed {
        Some(seed) => lists.pick_secret(&mut StdRng::seed_from_u64(seed)),
        None => lists.pick_secret(&mut rand::rng()),
    };
    secret.cloned()
}

fn play(cli: &Cli, lists: &WordLists) -> Result<()> {
    let secret = pick_secret(lists, cli.seed).context("no candidate words to choose from")?;
    let mut session = Session::new(lists.dictionary(), secret);

    if cli.tui {
        use words_virtuoso::interactive::{App, run_tui};

        return run_tui(App::new(session));
    }

    let painter: &dyn Painter = if cli.no_color {
        &PlainPainter
    } else {
        &AnsiPainter
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let outcome = run_play(&mut session, painter, &mut input, &mut out)?;
    debug!(?outcome, "game finished");

    Ok(())
}
