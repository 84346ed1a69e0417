use std::fmt;

use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::game::finder::WordFinder;
use crate::models::{Board, Position};

/// Outcome of looking up one dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    pub word: String,
    pub found: bool,
    /// The path that spelled the word, when paths were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Position>>,
}

impl fmt::Display for WordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "{} was found.", self.word)?;
        } else {
            write!(f, "{} was not found.", self.word)?;
        }

        if let Some(path) = &self.path {
            let cells: Vec<String> = path.iter().map(Position::to_string).collect();
            write!(f, " {}", cells.join(" "))?;
        }

        Ok(())
    }
}

/// Check every dictionary word against the board, in dictionary order.
pub fn solve(board: &Board, dictionary: &Dictionary, include_paths: bool) -> Vec<WordReport> {
    let finder = WordFinder::new(board);

    dictionary
        .iter()
        .map(|word| {
            let path = finder.find_path(word);
            let found = path.is_some();
            tracing::debug!(word, found, "searched word");

            WordReport {
                word: word.to_string(),
                found,
                path: if include_paths { path } else { None },
            }
        })
        .collect()
}
