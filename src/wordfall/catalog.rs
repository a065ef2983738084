use rand::Rng;

use crate::config::ConfigError;

const DEFAULT_WORDS: &[&str] = &[
    "hack", "code", "rust", "byte", "stack", "heap", "async", "trait", "crate", "borrow",
    "kernel", "socket", "thread", "mutex", "buffer", "packet", "compile", "binary", "cursor",
    "terminal", "pointer", "vector", "string", "lambda", "syntax", "debug", "cache", "shell",
    "script", "daemon", "router", "server", "client", "token", "parser",
];

/// Candidate words for the spawner. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCatalog {
    words: Vec<String>,
}

impl WordCatalog {
    /// Words are trimmed and lowercased, since typed input is lowercased
    /// before matching.
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for (index, word) in words.into_iter().enumerate() {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(ConfigError::BlankWord(index));
            }
            normalized.push(word);
        }
        if normalized.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { words: normalized })
    }

    /// Parses a plain-text word list: one word per line, blank lines and
    /// `#` comments skipped.
    pub fn from_lines(text: &str) -> Result<Self, ConfigError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}
