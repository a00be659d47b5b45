// Step 2: comparative and superlative endings, gated by R1.

use stemma_core::region::Regions;
use stemma_core::suffix::{SuffixGroup, char_before, select_longest};

use crate::german::constants::MIN_ST_STEM;
use crate::german::is_st_ending;

/// Candidate groups of step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparativeEnding {
    /// `en`, `er`, `est`: removed outright.
    Est,
    /// `st`: removed after a valid st-ending that has at least three
    /// letters before it.
    St,
}

const GROUPS: &[SuffixGroup<ComparativeEnding>] = &[
    SuffixGroup::new(ComparativeEnding::Est, &["en", "er", "est"]),
    SuffixGroup::new(ComparativeEnding::St, &["st"]),
];

/// Strip a comparative or superlative ending.
pub fn strip_comparative(mut word: Vec<char>, regions: &Regions) -> Vec<char> {
    let Some(found) = select_longest(&word, GROUPS) else {
        return word;
    };
    let pos = found.position;
    if !regions.in_r1(pos) {
        return word;
    }

    match found.group {
        ComparativeEnding::Est => word.truncate(pos),
        ComparativeEnding::St => {
            if pos > MIN_ST_STEM && char_before(&word, pos).is_some_and(is_st_ending) {
                word.truncate(pos);
            }
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step2(word: &str, r1: usize) -> String {
        let chars: Vec<char> = word.chars().collect();
        let regions = Regions { r1, r2: chars.len() };
        strip_comparative(chars, &regions).into_iter().collect()
    }

    #[test]
    fn removes_est_group() {
        assert_eq!(step2("kleinest", 4), "klein");
        assert_eq!(step2("kleiner", 4), "klein");
        assert_eq!(step2("eigen", 3), "eig");
    }

    #[test]
    fn removes_st_after_valid_ending() {
        assert_eq!(step2("spielst", 5), "spiel");
        assert_eq!(step2("kämmst", 3), "kämm");
    }

    #[test]
    fn st_after_r_is_kept() {
        assert_eq!(step2("erst", 3), "erst");
        assert_eq!(step2("zuerst", 3), "zuerst");
        assert_eq!(step2("feierst", 3), "feierst");
    }

    #[test]
    fn st_needs_three_letters_before_ending() {
        // "gehst": h is a valid ending but only "ge" precedes it
        assert_eq!(step2("gehst", 3), "gehst");
        assert_eq!(step2("fehlst", 3), "fehl");
    }

    #[test]
    fn st_after_non_ending_letter_is_kept() {
        assert_eq!(step2("verreist", 3), "verreist");
    }

    #[test]
    fn ending_outside_r1_is_kept() {
        assert_eq!(step2("kleiner", 6), "kleiner");
        assert_eq!(step2("spielst", 6), "spielst");
    }

    #[test]
    fn no_candidate_leaves_word() {
        assert_eq!(step2("haus", 3), "haus");
        assert_eq!(step2("", 0), "");
    }
}
