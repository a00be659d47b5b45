// German letter classes shared by the pipeline stages.

pub(crate) mod constants;

use stemma_core::character::in_set;

use constants::{S_ENDINGS, ST_ENDINGS, VOWELS};

/// Check whether a character is a German vowel.
///
/// Only lowercase forms count. A glide marked by
/// [`crate::glide::mark_glides`] is uppercase and therefore a consonant.
pub fn is_vowel(c: char) -> bool {
    in_set(c, VOWELS)
}

/// Check whether `c` may precede a removable plural `s`.
pub fn is_s_ending(c: char) -> bool {
    in_set(c, S_ENDINGS)
}

/// Check whether `c` may precede a removable superlative `st`.
pub fn is_st_ending(c: char) -> bool {
    in_set(c, ST_ENDINGS)
}
