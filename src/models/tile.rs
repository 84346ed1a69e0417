use std::fmt;

/// Letter content of a single board cell.
///
/// A raw 'Q' always becomes [`Tile::Qu`], so a `Letter('Q')` tile never exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Letter(char),
    Qu,
}

impl Tile {
    /// Build a tile from a raw board character. Only 'A'..='Z' are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'Q' => Some(Tile::Qu),
            'A'..='Z' => Some(Tile::Letter(c)),
            _ => None,
        }
    }

    /// Whether this tile satisfies one token of a word.
    pub fn matches(self, token: Token) -> bool {
        match (self, token) {
            (Tile::Qu, Token::Qu) => true,
            (Tile::Letter(tile), Token::Letter(letter)) => tile == letter,
            _ => false,
        }
    }

    /// The character this tile was parsed from.
    pub fn raw_char(self) -> char {
        match self {
            Tile::Letter(c) => c,
            Tile::Qu => 'Q',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Letter(c) => write!(f, "{}", c),
            Tile::Qu => f.write_str("QU"),
        }
    }
}

/// Unit consumed from the front of a word during one step of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Letter(char),
    Qu,
}

/// Split a word into tokens. "QU" is consumed as one token; every other
/// character, including a 'Q' not followed by 'U', is its own token.
pub fn tokenize(word: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(word.len());
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        if c == 'Q' && chars.peek() == Some(&'U') {
            chars.next();
            tokens.push(Token::Qu);
        } else {
            tokens.push(Token::Letter(c));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_q_becomes_qu() {
        assert_eq!(Tile::from_char('Q'), Some(Tile::Qu));
        assert_eq!(Tile::from_char('A'), Some(Tile::Letter('A')));
        assert_eq!(Tile::from_char('a'), None);
        assert_eq!(Tile::from_char('1'), None);
        assert_eq!(Tile::from_char(' '), None);
    }

    #[test]
    fn test_tokenize_qu() {
        assert_eq!(
            tokenize("QUIT"),
            vec![Token::Qu, Token::Letter('I'), Token::Letter('T')]
        );
        assert_eq!(
            tokenize("IRAQ"),
            vec![
                Token::Letter('I'),
                Token::Letter('R'),
                Token::Letter('A'),
                Token::Letter('Q')
            ]
        );
        assert_eq!(tokenize("QUQU"), vec![Token::Qu, Token::Qu]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_qu_tile_never_matches_bare_q_or_u() {
        assert!(Tile::Qu.matches(Token::Qu));
        assert!(!Tile::Qu.matches(Token::Letter('Q')));
        assert!(!Tile::Qu.matches(Token::Letter('U')));
        assert!(!Tile::Letter('U').matches(Token::Qu));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::Qu.to_string(), "QU");
        assert_eq!(Tile::Letter('K').to_string(), "K");
        assert_eq!(Tile::Qu.raw_char(), 'Q');
    }
}
