use thiserror::Error;

/// Reasons a set of column lines cannot become a [`Board`](crate::models::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedBoardError {
    #[error("expected {expected} column lines, found only {found}")]
    TooFewColumns { expected: usize, found: usize },
    #[error("expected {expected} column lines, found {found}")]
    TooManyColumns { expected: usize, found: usize },
    #[error("column {column} has {length} tiles but holds at most {capacity}")]
    ColumnTooLong {
        column: usize,
        length: usize,
        capacity: usize,
    },
    #[error("column {column} row {row} contains invalid character {character:?}")]
    InvalidCharacter {
        column: usize,
        row: usize,
        character: char,
    },
}

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed board: {0}")]
    Board(#[from] MalformedBoardError),
    #[error("expected a blank line after the board, found {0:?}")]
    MissingSeparator(String),
}
