/// Error type for resolving a stemmer.
///
/// Stemming itself never fails; errors only arise when a caller names a
/// language that no stemmer is registered for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StemmaError {
    /// The language code does not name a supported language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The language code was empty or whitespace only.
    #[error("language code is empty")]
    EmptyLanguage,
}
