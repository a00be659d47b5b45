// Glide marking.
//
// A `u` or `y` between two vowels acts as a consonant. It is marked by
// uppercasing it, which takes it out of the vowel set for the region scan
// while keeping its position and letter identity.

use stemma_core::character::{in_set, is_upper, simple_lower, simple_upper};

use crate::german::constants::GLIDES;
use crate::german::is_vowel;

/// Mark every `u`/`y` whose neighbours are both vowels.
///
/// Positions are scanned left to right and marks take effect immediately,
/// so a glide marked at `i` is no longer a vowel neighbour for `i + 1`.
/// The first and last positions are never marked. Returns the number of
/// marks made.
pub fn mark_glides(word: &mut [char]) -> usize {
    let mut marked = 0;
    for i in 1..word.len().saturating_sub(1) {
        if in_set(word[i], GLIDES) && is_vowel(word[i - 1]) && is_vowel(word[i + 1]) {
            word[i] = simple_upper(word[i]);
            marked += 1;
        }
    }
    marked
}

/// Check whether a character is a marked glide.
pub fn is_marked(c: char) -> bool {
    is_upper(c) && in_set(simple_lower(c), GLIDES)
}

/// Undo [`mark_glides`], turning every marked glide back into lowercase.
pub fn restore_glides(word: &mut [char]) {
    for c in word.iter_mut().filter(|c| is_marked(**c)) {
        *c = simple_lower(*c);
    }
}
