use std::path::Path;
use std::str::FromStr;

use tokio::fs;

use crate::dictionary::Dictionary;
use crate::error::PuzzleError;
use crate::models::board::split_lines;
use crate::models::{Board, COLUMNS};

/// A board together with the words to look for on it.
///
/// Text layout: seven column lines (column 0 first), one blank line, then
/// one word per line. A file that stops right after the board has no words.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub board: Board,
    pub dictionary: Dictionary,
}

impl Puzzle {
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let mut lines = split_lines(text);

        let columns: Vec<&str> = lines.by_ref().take(COLUMNS).map(str::trim_end).collect();
        let board = Board::from_columns(&columns)?;

        if let Some(separator) = lines.next() {
            if !separator.trim().is_empty() {
                return Err(PuzzleError::MissingSeparator(separator.to_string()));
            }
        }

        let dictionary = Dictionary::from_lines(lines);

        Ok(Self { board, dictionary })
    }

    /// Read and parse a puzzle file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let puzzle = Self::parse(&content)?;

        tracing::info!(
            "Loaded puzzle {} with {} tiles and {} words",
            path.display(),
            puzzle.board.populated_count(),
            puzzle.dictionary.len()
        );

        Ok(puzzle)
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
