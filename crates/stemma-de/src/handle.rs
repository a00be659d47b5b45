// StemmerHandle: top-level integration point for stemming.
//
// Owns the stemmer for the handle's default language, a registry for
// per-call language overrides, and the options both were built with.
// Option setters rebuild the affected stemmers.

use stemma_core::language::Language;
use stemma_core::stemmer::Stemmer;

pub use stemma_core::error::StemmaError;

use crate::registry::{StemmerRegistry, default_stemmer};
use crate::stemmer::{GermanStemmer, GermanStemmerOptions};
use crate::trace::StemTrace;

/// Top-level handle for stemming words in a default language.
pub struct StemmerHandle {
    /// The default language.
    language: Language,

    /// Stemmer for `language`, built from `german_options`.
    stemmer: Box<dyn Stemmer>,

    /// Stemmers for every known language, used by [`StemmerHandle::stem_in`].
    registry: StemmerRegistry,

    // -- Options --
    /// German stemmer options.
    german_options: GermanStemmerOptions,
}

impl StemmerHandle {
    /// Create a handle for the given language code.
    ///
    /// Accepts anything [`Language::parse`] accepts ("de", "de-AT", "deu", ...).
    pub fn new(language: &str) -> Result<Self, StemmaError> {
        let language = Language::parse(language)?;
        let german_options = GermanStemmerOptions::default();
        tracing::debug!(%language, "creating stemmer handle");

        Ok(Self {
            language,
            stemmer: default_stemmer(language, german_options),
            registry: StemmerRegistry::with_german_options(german_options),
            german_options,
        })
    }

    // =========================================================================
    // Stemming
    // =========================================================================

    /// Stem a word in the handle's default language.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Stem a word in an explicitly named language.
    pub fn stem_in(&self, language: &str, word: &str) -> Result<String, StemmaError> {
        self.registry.stem(language, word)
    }

    /// Stem every word in the default language, preserving order.
    pub fn stem_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words.iter().map(|word| self.stem(word.as_ref())).collect()
    }

    /// Stem a word, recording every intermediate stage.
    pub fn trace(&self, word: &str) -> StemTrace {
        match self.language {
            Language::German => GermanStemmer::with_options(self.german_options).trace(word),
        }
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Set whether marked glides are lowercased in returned stems.
    pub fn set_restore_glides(&mut self, value: bool) {
        self.german_options.restore_glides = value;
        self.rebuild();
    }

    pub fn restore_glides(&self) -> bool {
        self.german_options.restore_glides
    }

    fn rebuild(&mut self) {
        tracing::debug!(options = ?self.german_options, "rebuilding stemmers");
        self.stemmer = default_stemmer(self.language, self.german_options);
        self.registry = StemmerRegistry::with_german_options(self.german_options);
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// The handle's default language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Languages any handle can be created for.
    pub fn supported_languages() -> &'static [Language] {
        Language::ALL
    }

    /// Return the library version string.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
