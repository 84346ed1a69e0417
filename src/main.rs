mod cli;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bookworm_search::config::{Config, OutputFormat};
use bookworm_search::{solve, Dictionary, Puzzle};
use clap::Parser;
use cli::Cli;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Initialize tracing; results own stdout, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let puzzle_path = match cli.puzzle.clone().or_else(|| config.puzzle.path.clone()) {
        Some(path) => path,
        None => prompt_for_path().await?,
    };

    let mut puzzle = Puzzle::load(&puzzle_path)
        .await
        .with_context(|| format!("failed to load puzzle {}", puzzle_path.display()))?;
    tracing::debug!("Board:\n{}", puzzle.board);

    if let Some(words_path) = &cli.words {
        puzzle.dictionary = Dictionary::load(words_path).await?;
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let show_paths = cli.paths || config.output.show_paths;

    let reports = solve(&puzzle.board, &puzzle.dictionary, show_paths);
    let found = reports.iter().filter(|report| report.found).count();

    for report in &reports {
        match format {
            OutputFormat::Text => println!("{}", report),
            OutputFormat::Json => println!("{}", serde_json::to_string(report)?),
        }
    }

    tracing::info!("{} of {} words found", found, reports.len());

    Ok(())
}

/// Ask for a puzzle file on stdin when none was configured
async fn prompt_for_path() -> Result<PathBuf> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"Enter the name of the file to read from: ")
        .await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("failed to read puzzle file name")?;

    let name = line.trim();
    if name.is_empty() {
        bail!("no puzzle file given");
    }

    Ok(PathBuf::from(name))
}
