//! Shared building blocks for Stemma's Snowball-family stemmers.
//!
//! The language crates (currently only `stemma-de`) combine these pieces
//! into a full stemming pipeline.
//!
//! # Architecture
//!
//! - [`character`] -- Case helpers used for glide marking and restoration
//! - [`language`] -- Language identifiers and code parsing
//! - [`region`] -- The R1/R2 region scan primitive
//! - [`suffix`] -- Suffix candidate groups and longest-match selection
//! - [`stemmer`] -- The `Stemmer` trait implemented by every language
//! - [`error`] -- Errors raised when resolving a language

pub mod character;
pub mod error;
pub mod language;
pub mod region;
pub mod stemmer;
pub mod suffix;

pub use error::StemmaError;
pub use language::Language;
pub use region::Regions;
pub use stemmer::Stemmer;
pub use suffix::{SuffixGroup, SuffixMatch};
