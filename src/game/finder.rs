use crate::game::validator::PathValidator;
use crate::game::visited::VisitedState;
use crate::models::{tokenize, Board, Position, Token};

/// Decide whether `word` can be spelled on `board`.
pub fn exists(board: &Board, word: &str) -> bool {
    WordFinder::new(board).exists(word)
}

/// Depth-first backtracking search for words on a [`Board`].
///
/// The finder only reads the board. Every start-cell attempt gets its own
/// [`VisitedState`], so finders over the same board can run side by side.
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    board: &'a Board,
}

impl<'a> WordFinder<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn exists(&self, word: &str) -> bool {
        self.find_path(word).is_some()
    }

    /// The first path found that spells `word`, one position per token.
    ///
    /// Only a single path is produced; which one depends on the fixed
    /// start-cell and neighbor order, not on any notion of "best".
    pub fn find_path(&self, word: &str) -> Option<Vec<Position>> {
        let tokens = tokenize(word);
        let (&first, rest) = tokens.split_first()?;

        if !tokens.iter().all(|token| self.board.contains_token(*token)) {
            tracing::trace!(word, "word uses a token missing from the board");
            return None;
        }

        for start in self.board.positions() {
            if !self.tile_matches(start, first) {
                continue;
            }

            tracing::trace!(word, %start, "trying start cell");
            let mut visited = VisitedState::new();
            if self.descend(rest, start, &mut visited) {
                let path = visited.into_path();
                debug_assert!(PathValidator::is_valid_path(self.board, &path));
                return Some(path);
            }
        }

        None
    }

    /// Extend the path through `pos` until `remaining` is consumed.
    ///
    /// On success `pos` stays marked so the visited state holds the whole
    /// path. On failure it is unmarked before returning.
    fn descend(&self, remaining: &[Token], pos: Position, visited: &mut VisitedState) -> bool {
        visited.mark(pos);

        let Some((&next, rest)) = remaining.split_first() else {
            return true;
        };

        for neighbor in self.board.neighbors(pos) {
            if visited.is_visited(neighbor) || !self.tile_matches(neighbor, next) {
                continue;
            }
            if self.descend(rest, neighbor, visited) {
                return true;
            }
        }

        visited.unmark(pos);
        false
    }

    fn tile_matches(&self, pos: Position, token: Token) -> bool {
        self.board
            .tile(pos)
            .is_some_and(|tile| tile.matches(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: [&str; 7] = [
        "LAWNVST", "EBFNOEK", "QTENAIDS", "UJRLHCM", "OPGDYXEI", "TWRAMUS", "BELOHIKN",
    ];

    fn fixture() -> Board {
        Board::from_columns(&FIXTURE).unwrap()
    }

    fn assert_spelled(board: &Board, word: &str) {
        let path = WordFinder::new(board)
            .find_path(word)
            .unwrap_or_else(|| panic!("{} should be found", word));
        assert!(PathValidator::is_valid_path(board, &path));
        assert_eq!(PathValidator::extract_word(board, &path), word);
    }

    #[test]
    fn test_single_tile_words() {
        let board = fixture();
        assert!(exists(&board, "A"));
        assert!(exists(&board, "QU"));
        assert!(!exists(&board, "Q"));
        assert!(!exists(&board, "Z"));
    }

    #[test]
    fn test_empty_word_is_never_found() {
        assert!(!exists(&fixture(), ""));
        assert_eq!(WordFinder::new(&fixture()).find_path(""), None);
    }

    #[test]
    fn test_words_along_paths() {
        let board = fixture();
        for word in ["LAWN", "LEB", "BEL", "TEN", "QUTE", "QUTENA", "QUEB", "QUUJ", "DS", "SD"] {
            assert_spelled(&board, word);
        }
    }

    #[test]
    fn test_missing_letters() {
        let board = fixture();
        assert!(!exists(&board, "ZZ"));
        assert!(!exists(&board, "lawn"));
        assert!(!exists(&board, "LA WN"));
    }

    #[test]
    fn test_non_adjacent_letters() {
        let board = fixture();
        // Both letters exist, never side by side.
        assert!(!exists(&board, "LK"));
        assert!(!exists(&board, "WK"));
    }

    #[test]
    fn test_no_self_loop() {
        let board = fixture();
        // J appears once, so it cannot follow itself.
        assert!(exists(&board, "J"));
        assert!(!exists(&board, "JJ"));
        // The only E next to either B leads back to the B already used.
        assert!(!exists(&board, "BEB"));
    }

    #[test]
    fn test_qu_handling() {
        let board = fixture();
        assert!(exists(&board, "QUTE"));
        assert!(!exists(&board, "QTE"));
        // The QU cell does not stand in for a plain U.
        assert!(!exists(&board, "UT"));
        assert!(exists(&board, "QUU"));
    }

    #[test]
    fn test_backtracks_out_of_dead_ends() {
        // From A the search first walks down to the B in column 0, which has
        // no E beside it, and must back out to reach the B in column 1.
        let board = Board::from_columns(&["ABCD", "BX", "E", "", "", "", ""]).unwrap();
        let path = WordFinder::new(&board).find_path("ABE").unwrap();
        assert_eq!(
            path,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
        assert!(exists(&board, "ABC"));
        assert!(!exists(&board, "ABD"));
    }

    #[test]
    fn test_cells_reused_across_start_attempts() {
        // Starting at the top A dead-ends at the bottom A. The second attempt
        // walks the same cells in the opposite direction.
        let board = Board::from_columns(&["ABA", "C", "", "", "", "", ""]).unwrap();
        let path = WordFinder::new(&board).find_path("ABAC").unwrap();
        assert_eq!(
            path,
            vec![
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0),
                Position::new(0, 1)
            ]
        );
        assert!(!exists(&board, "ABACA"));
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let board = fixture();
        let before = board.clone();
        for _ in 0..3 {
            assert!(exists(&board, "QUTENA"));
            assert!(!exists(&board, "BEB"));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_paths_never_repeat_cells() {
        let board = fixture();
        let finder = WordFinder::new(&board);
        for word in ["LAWN", "QUTENA", "BEL", "LEB", "TEN"] {
            let path = finder.find_path(word).unwrap();
            let mut seen = std::collections::HashSet::new();
            assert!(path.iter().all(|pos| seen.insert(*pos)));
        }
    }

    #[test]
    fn test_shared_board_across_threads() {
        let board = fixture();
        std::thread::scope(|scope| {
            let handles: Vec<_> = ["LAWN", "QUTENA", "BEB", "ZZ"]
                .into_iter()
                .map(|word| {
                    let board = &board;
                    scope.spawn(move || exists(board, word))
                })
                .collect();
            let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(results, vec![true, true, false, false]);
        });
    }
}
