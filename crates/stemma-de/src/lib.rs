//! Snowball-family German stemmer.
//!
//! Reduces a German word form to a stem through a fixed pipeline:
//!
//! 1. [`normalize`] -- lowercase and expand `ß` to `ss`
//! 2. [`glide`] -- mark `u`/`y` between vowels so they count as consonants
//! 3. [`regions`] -- compute R1 and R2 with the German R1 adjustment
//! 4. [`steps`] -- strip case endings, comparative endings, and
//!    derivational endings, each gated by a region
//!
//! ```
//! assert_eq!(stemma_de::stem("Häusern"), "häus");
//! assert_eq!(stemma_de::stem("Freundlichkeit"), "freundlich");
//! ```

pub mod german;
pub mod glide;
pub mod normalize;
pub mod regions;
pub mod steps;
pub mod stemmer;

#[cfg(feature = "trace")]
pub mod trace;

#[cfg(feature = "handle")]
pub mod handle;
#[cfg(feature = "handle")]
pub mod registry;

pub use stemma_core::{Language, Stemmer};
pub use stemmer::{GermanStemmer, GermanStemmerOptions};

/// Stem a German word with the default options.
pub fn stem(word: &str) -> String {
    GermanStemmer::new().stem(word)
}
