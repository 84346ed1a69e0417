// Word search engine: path search, path checking and per-word reports

pub mod finder;
pub mod report;
pub mod validator;
pub mod visited;

pub use finder::{exists, WordFinder};
pub use report::{solve, WordReport};
pub use validator::PathValidator;
pub use visited::VisitedState;
