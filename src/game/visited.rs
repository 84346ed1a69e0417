use crate::models::{Position, COLUMNS, EVEN_COLUMN_HEIGHT};

/// Cells on the path currently being extended.
///
/// One value belongs to exactly one start-cell attempt. Marks are pushed and
/// popped in stack order, so the marked cells are always the path itself.
#[derive(Debug, Clone)]
pub struct VisitedState {
    cells: [[bool; EVEN_COLUMN_HEIGHT]; COLUMNS],
    path: Vec<Position>,
}

impl VisitedState {
    pub fn new() -> Self {
        Self {
            cells: [[false; EVEN_COLUMN_HEIGHT]; COLUMNS],
            path: Vec::new(),
        }
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.cells[pos.col][pos.row]
    }

    /// Extend the path with `pos`.
    pub fn mark(&mut self, pos: Position) {
        debug_assert!(!self.is_visited(pos), "{} visited twice", pos);
        self.cells[pos.col][pos.row] = true;
        self.path.push(pos);
    }

    /// Retract `pos`, which must be the last cell marked.
    pub fn unmark(&mut self, pos: Position) {
        debug_assert_eq!(self.path.last(), Some(&pos));
        self.cells[pos.col][pos.row] = false;
        self.path.pop();
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Position> {
        self.path
    }
}

impl Default for VisitedState {
    fn default() -> Self {
        Self::new()
    }
}
