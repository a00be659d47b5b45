// Step 1: case endings, gated by R1.

use stemma_core::region::Regions;
use stemma_core::suffix::{SuffixGroup, char_before, ends_with, select_longest};

use crate::german::is_s_ending;

/// Candidate groups of step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseEnding {
    /// `ern`, `em`, `er`: removed outright.
    Ern,
    /// `en`, `es`, `e`: removed, then `niss` loses its last `s`.
    En,
    /// `s`: removed only after a valid s-ending.
    S,
}

const GROUPS: &[SuffixGroup<CaseEnding>] = &[
    SuffixGroup::new(CaseEnding::Ern, &["ern", "em", "er"]),
    SuffixGroup::new(CaseEnding::En, &["en", "es", "e"]),
    SuffixGroup::new(CaseEnding::S, &["s"]),
];

/// Strip an inflectional case ending.
pub fn strip_case_endings(mut word: Vec<char>, regions: &Regions) -> Vec<char> {
    let Some(found) = select_longest(&word, GROUPS) else {
        return word;
    };
    let pos = found.position;
    if !regions.in_r1(pos) {
        return word;
    }

    match found.group {
        CaseEnding::Ern => word.truncate(pos),
        CaseEnding::En => {
            word.truncate(pos);
            if ends_with(&word, "niss") {
                word.pop();
            }
        }
        CaseEnding::S => {
            if char_before(&word, pos).is_some_and(is_s_ending) {
                word.truncate(pos);
            }
        }
    }
    word
}
