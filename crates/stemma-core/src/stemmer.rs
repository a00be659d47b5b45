// The Stemmer trait shared by every language implementation.

use crate::language::Language;

/// Trait for stemming algorithms.
///
/// Stemming is total: every input string, including the empty string,
/// yields a stem. Implementations hold no per-call state, so a single
/// stemmer can be shared across threads.
pub trait Stemmer: Send + Sync {
    /// Reduce a word to its stem.
    fn stem(&self, word: &str) -> String;

    /// The language this stemmer handles.
    fn language(&self) -> Language;

    /// Stem every word, preserving order.
    fn stem_all(&self, words: &[&str]) -> Vec<String> {
        words.iter().map(|word| self.stem(word)).collect()
    }
}
