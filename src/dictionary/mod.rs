use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Ordered list of candidate words to look for on a board.
///
/// Unlike a lookup set, order and duplicates are kept so results line up
/// with the input one-to-one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build from raw lines: trimmed, ASCII upper-cased, blank lines skipped.
    /// Non-ASCII characters are kept as written, so such words are never found.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.trim().to_ascii_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Load a stand-alone word list, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let dictionary = Self::from_lines(content.lines());

        tracing::info!("Loaded {} words from {}", dictionary.len(), path.display());

        Ok(dictionary)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
