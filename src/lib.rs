//! Decide which words can be spelled on a Bookworm-style letter board by
//! walking adjacent, non-repeated tiles.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod puzzle;

pub use dictionary::Dictionary;
pub use error::{MalformedBoardError, PuzzleError};
pub use game::{exists, solve, WordFinder, WordReport};
pub use models::{Board, Position, Tile};
pub use puzzle::Puzzle;
