use crate::models::{Board, Position};
use std::collections::HashSet;

/// Independent check that a path of positions is legal on a board.
pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a legal path on the board
    pub fn is_valid_path(board: &Board, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Every cell must hold a tile
        if !positions.iter().all(|pos| board.is_populated(*pos)) {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !board.are_adjacent(window[0], window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Spell out the tiles along a path, with "QU" cells contributing two letters
    pub fn extract_word(board: &Board, positions: &[Position]) -> String {
        positions
            .iter()
            .filter_map(|pos| board.tile(*pos))
            .map(|tile| tile.to_string())
            .collect()
    }
}
