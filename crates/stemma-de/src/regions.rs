// German R1/R2 computation.
//
// R2 is derived from the unadjusted R1. Only afterwards is R1 moved so
// that at least three letters precede it; on words shorter than four
// letters R1 becomes the null region instead. Reordering these two steps
// changes which derivational endings can be removed.

use stemma_core::region::Regions;

use crate::german::constants::{MIN_R1, MIN_REGION_WORD_LEN};
use crate::german::is_vowel;

/// Compute the regions of a glide-marked buffer.
pub fn german_regions(word: &[char]) -> Regions {
    let raw = Regions::compute(word, is_vowel);
    raw.with_r1(adjust_r1(word.len(), raw.r1))
}

/// Apply the German R1 adjustment to an unadjusted R1.
pub fn adjust_r1(len: usize, r1: usize) -> usize {
    if r1 >= MIN_R1 {
        r1
    } else if len < MIN_REGION_WORD_LEN {
        len
    } else {
        MIN_R1
    }
}
