pub mod board;
pub mod tile;

pub use board::{column_height, Board, Position, COLUMNS, EVEN_COLUMN_HEIGHT, ODD_COLUMN_HEIGHT};
pub use tile::{tokenize, Tile, Token};
