use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::Catalog;
use nlp::SimilarityMatrix;
use recommender::Recommender;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod display;
mod prompt;
mod session;

use prompt::Prompter;
use session::{Session, SessionConfig};

/// cinemood - Personal Movie Recommendation Assistant
#[derive(Parser, Debug)]
#[command(name = "cinemood")]
#[command(about = "Recommends movies by genre, mood and minimum rating", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV
    #[arg(long, env = "CINEMOOD_CATALOG", default_value = "movies.csv")]
    catalog: PathBuf,

    /// Number of recommendations per round
    #[arg(long, env = "CINEMOOD_TOP_N", default_value = "5")]
    top_n: usize,

    /// Invalid answers allowed per prompt before giving up
    #[arg(long, env = "CINEMOOD_MAX_ATTEMPTS", default_value = "5")]
    max_attempts: usize,

    /// Length of the "analyzing" indicator in milliseconds
    #[arg(long, env = "CINEMOOD_DELAY_MS", default_value = "1500")]
    delay_ms: u64,
}

fn main() -> ExitCode {
    // Initialize tracing; stderr keeps log lines out of the conversation
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock(), cli.max_attempts);

    match run(&cli, &mut prompter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:?}", err);
            // Nothing more can be shown if stdout itself is gone
            let _ = prompter.say(format!("Error: {:#}", err).red());
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(cli: &Cli, prompter: &mut Prompter<R, W>) -> Result<()> {
    let name = session::greet(prompter)?;

    let start = Instant::now();
    let catalog = Arc::new(load_catalog(cli)?);
    tracing::info!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());

    // Not consumed: recommendations are never ranked by similarity
    let similarity = SimilarityMatrix::build(&catalog.combined_texts())
        .context("Failed to build the similarity matrix")?;
    tracing::info!(
        "Similarity matrix ready: {} titles, {} terms",
        similarity.len(),
        similarity.vocabulary_len()
    );

    let config = SessionConfig {
        top_n: cli.top_n,
        processing_delay: Duration::from_millis(cli.delay_ms),
    };
    Session::new(name, Recommender::new(catalog), config).run(prompter)
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    Catalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load movie catalog {}", cli.catalog.display()))
}
