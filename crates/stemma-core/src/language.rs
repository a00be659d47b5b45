// Language identifiers.
//
// Documents carry a free-form language string ("de", "de-AT", "German"),
// so parsing is lenient: the primary subtag of a BCP 47 tag, the ISO 639-2
// codes, and the English or native language name are all accepted.

use std::fmt;
use std::str::FromStr;

use crate::error::StemmaError;

/// A language for which a stemmer may exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    German,
}

impl Language {
    /// Every language known to this crate, ordered by code.
    pub const ALL: &'static [Language] = &[Language::German];

    /// Resolve a language code or name, case-insensitively.
    ///
    /// Returns `None` for unknown or empty codes.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let primary = code.split(|c| c == '-' || c == '_').next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "de" | "deu" | "ger" | "german" | "deutsch" => Some(Language::German),
            _ => None,
        }
    }

    /// Resolve a language code, reporting why resolution failed.
    pub fn parse(code: &str) -> Result<Self, StemmaError> {
        if code.trim().is_empty() {
            return Err(StemmaError::EmptyLanguage);
        }
        Self::from_code(code).ok_or_else(|| StemmaError::UnsupportedLanguage(code.to_string()))
    }

    /// The two-letter ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
        }
    }

    /// The lowercase English name, as used by Snowball.
    pub fn name(self) -> &'static str {
        match self {
            Language::German => "german",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = StemmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
