use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Checks which words can be spelled on a Bookworm letter board.", long_about = None)]
pub struct Cli {
    /// Puzzle file: seven column lines, a blank line, then one word per line
    pub puzzle: Option<PathBuf>,

    /// Word list to check instead of the words in the puzzle file
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Settings file (defaults to an optional bookworm.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print one JSON object per word
    #[arg(long)]
    pub json: bool,

    /// Include the tile path of every word that was found
    #[arg(long)]
    pub paths: bool,
}
