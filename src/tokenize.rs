//! Tokenization of raw document text into normalized term counts.

use std::fs;
use std::path::Path;

use crate::document::WordCount;
use crate::error::DocumentError;

/// Turns one document into its term counts.
///
/// Object-safe so the pipeline can be driven by an in-memory implementation
/// in tests. Implementations are shared read-only across workers.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, path: &Path) -> Result<WordCount, DocumentError>;
}

/// Default tokenizer: reads the file, lowercases, splits on whitespace,
/// strips punctuation from each token and drops tokens containing digits.
#[derive(Debug, Clone, Default)]
pub struct FileTokenizer;

impl FileTokenizer {
    pub fn new() -> Self {
        FileTokenizer
    }

    /// Normalize a raw whitespace-separated token.
    /// Returns None for tokens that are empty after cleansing or contain
    /// a digit.
    fn cleanse(token: &str) -> Option<String> {
        let cleaned: String = token
            .chars()
            .filter(|c| !c.is_ascii_punctuation() && !c.is_control())
            .collect();
        if cleaned.is_empty() || cleaned.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(cleaned)
    }

    fn count_terms(content: &str) -> WordCount {
        let mut word_count = WordCount::new();
        for raw in content.to_lowercase().split_whitespace() {
            if let Some(term) = Self::cleanse(raw) {
                word_count.add_term(&term);
            }
        }
        word_count
    }
}

impl Tokenizer for FileTokenizer {
    fn tokenize(&self, path: &Path) -> Result<WordCount, DocumentError> {
        let content = fs::read_to_string(path).map_err(|e| DocumentError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::count_terms(&content))
    }
}
