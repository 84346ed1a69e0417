use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MalformedBoardError;
use crate::models::tile::{Tile, Token};

/// Number of columns on a board.
pub const COLUMNS: usize = 7;
/// Cells in an even-indexed column.
pub const EVEN_COLUMN_HEIGHT: usize = 8;
/// Cells in an odd-indexed column, offset half a cell from its neighbors.
pub const ODD_COLUMN_HEIGHT: usize = 7;

// Even columns reach diagonally down into the odd columns beside them,
// odd columns reach diagonally up. Together the two tables are symmetric.
const EVEN_OFFSETS: [(isize, isize); 6] = [(-1, 0), (1, 0), (0, -1), (0, 1), (1, -1), (1, 1)];
const ODD_OFFSETS: [(isize, isize); 6] = [(-1, 0), (1, 0), (-1, -1), (-1, 1), (0, -1), (0, 1)];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset, staying inside the fixed board shape.
    fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if col < COLUMNS && row < column_height(col) {
            Some(Position { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Split text into lines on '\n', dropping a trailing '\r' from each.
///
/// Unlike [`str::lines`], a trailing empty segment is kept, so an empty last
/// column survives.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Number of rows a column can hold.
pub fn column_height(col: usize) -> usize {
    if col % 2 == 0 {
        EVEN_COLUMN_HEIGHT
    } else {
        ODD_COLUMN_HEIGHT
    }
}

/// The 7-column offset grid of letter tiles, stored column-major.
///
/// A board never changes after construction; searches only read it, so one
/// board can be shared by any number of concurrent queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [[Option<Tile>; EVEN_COLUMN_HEIGHT]; COLUMNS],
}

impl Board {
    /// Build a board from seven column lines, column 0 first.
    ///
    /// Each line fills its column from row 0 downward; rows past the end of
    /// the line stay empty. No partial board is produced on error.
    pub fn from_columns<S: AsRef<str>>(lines: &[S]) -> Result<Self, MalformedBoardError> {
        if lines.len() < COLUMNS {
            return Err(MalformedBoardError::TooFewColumns {
                expected: COLUMNS,
                found: lines.len(),
            });
        }
        if lines.len() > COLUMNS {
            return Err(MalformedBoardError::TooManyColumns {
                expected: COLUMNS,
                found: lines.len(),
            });
        }

        let mut columns = [[None; EVEN_COLUMN_HEIGHT]; COLUMNS];

        for (col, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let capacity = column_height(col);
            let length = line.chars().count();
            if length > capacity {
                return Err(MalformedBoardError::ColumnTooLong {
                    column: col,
                    length,
                    capacity,
                });
            }

            for (row, character) in line.chars().enumerate() {
                let tile = Tile::from_char(character).ok_or(
                    MalformedBoardError::InvalidCharacter {
                        column: col,
                        row,
                        character,
                    },
                )?;
                columns[col][row] = Some(tile);
            }
        }

        Ok(Self { columns })
    }

    /// Tile at a position, or `None` for empty and out-of-shape cells.
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        if pos.col >= COLUMNS || pos.row >= column_height(pos.col) {
            return None;
        }
        self.columns[pos.col][pos.row]
    }

    pub fn is_populated(&self, pos: Position) -> bool {
        self.tile(pos).is_some()
    }

    /// All populated positions, column by column.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..COLUMNS)
            .flat_map(|col| (0..column_height(col)).map(move |row| Position { row, col }))
            .filter(move |pos| self.is_populated(*pos))
    }

    pub fn populated_count(&self) -> usize {
        self.positions().count()
    }

    /// Populated cells adjacent to `pos`.
    ///
    /// Even columns: above, below, left, right, lower-left, lower-right.
    /// Odd columns: above, below, upper-left, upper-right, left, right.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let offsets = if pos.col % 2 == 0 {
            &EVEN_OFFSETS
        } else {
            &ODD_OFFSETS
        };

        offsets
            .iter()
            .filter_map(move |&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(move |candidate| self.is_populated(*candidate))
    }

    pub fn are_adjacent(&self, a: Position, b: Position) -> bool {
        self.is_populated(a) && self.neighbors(a).any(|pos| pos == b)
    }

    /// Whether any populated cell satisfies `token`.
    pub fn contains_token(&self, token: Token) -> bool {
        self.positions()
            .filter_map(|pos| self.tile(pos))
            .any(|tile| tile.matches(token))
    }
}

impl FromStr for Board {
    type Err = MalformedBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = split_lines(s).collect();
        // A final newline terminates the last column rather than adding one.
        if lines.len() > COLUMNS && lines.last() == Some(&"") {
            lines.pop();
        }
        Board::from_columns(&lines)
    }
}

impl fmt::Display for Board {
    /// Renders the column lines the board was built from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (col, column) in self.columns.iter().enumerate() {
            if col > 0 {
                writeln!(f)?;
            }
            for tile in column.iter().flatten() {
                write!(f, "{}", tile.raw_char())?;
            }
        }
        Ok(())
    }
}
