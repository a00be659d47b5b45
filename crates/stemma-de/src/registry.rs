// StemmerRegistry: the mapping of known languages to stemmers.
//
// Callers holding a free-form language string (for example a document's
// language column) resolve it here instead of matching on codes
// themselves.

use std::fmt;

use hashbrown::HashMap;
use stemma_core::error::StemmaError;
use stemma_core::language::Language;
use stemma_core::stemmer::Stemmer;

use crate::stemmer::{GermanStemmer, GermanStemmerOptions};

/// Build the stemmer this crate provides for `language`.
pub fn default_stemmer(language: Language, options: GermanStemmerOptions) -> Box<dyn Stemmer> {
    match language {
        Language::German => Box::new(GermanStemmer::with_options(options)),
    }
}

/// Map from language to stemmer.
#[derive(Default)]
pub struct StemmerRegistry {
    stemmers: HashMap<Language, Box<dyn Stemmer>>,
}

impl fmt::Debug for StemmerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmerRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}

impl StemmerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a stemmer for every known language.
    pub fn with_defaults() -> Self {
        Self::with_german_options(GermanStemmerOptions::default())
    }

    /// Create a registry with a stemmer for every known language, using
    /// `options` for the German stemmer.
    pub fn with_german_options(options: GermanStemmerOptions) -> Self {
        let mut registry = Self::new();
        for &language in Language::ALL {
            registry.register(default_stemmer(language, options));
        }
        tracing::debug!(languages = registry.len(), "stemmer registry populated");
        registry
    }

    /// Register a stemmer under its own language.
    ///
    /// Returns the stemmer previously registered for that language.
    pub fn register(&mut self, stemmer: Box<dyn Stemmer>) -> Option<Box<dyn Stemmer>> {
        self.stemmers.insert(stemmer.language(), stemmer)
    }

    /// Look up the stemmer for a language code.
    pub fn get(&self, code: &str) -> Result<&dyn Stemmer, StemmaError> {
        let language = Language::parse(code)?;
        self.get_language(language)
            .ok_or_else(|| StemmaError::UnsupportedLanguage(code.to_string()))
    }

    /// Look up the stemmer for an already resolved language.
    pub fn get_language(&self, language: Language) -> Option<&dyn Stemmer> {
        self.stemmers.get(&language).map(|stemmer| &**stemmer)
    }

    /// Stem `word` with the stemmer registered for `code`.
    pub fn stem(&self, code: &str, word: &str) -> Result<String, StemmaError> {
        Ok(self.get(code)?.stem(word))
    }

    /// Whether a stemmer is registered for `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_ok()
    }

    /// Registered languages, ordered by code.
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.stemmers.keys().copied().collect();
        languages.sort_by_key(|language| language.code());
        languages
    }

    pub fn len(&self) -> usize {
        self.stemmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stemmers.is_empty()
    }
}
