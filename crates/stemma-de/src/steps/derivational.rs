// Step 3: derivational endings, gated by R2.
//
// Every group truncates at its own match position, including `lich`/`heit`.

use stemma_core::region::Regions;
use stemma_core::suffix::{SuffixGroup, char_before, select_longest, suffix_position};

/// Candidate groups of step 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivationalEnding {
    /// `end`, `ung`: removed, then a preceding `ig` in R2 (not after `e`).
    EndUng,
    /// `ig`, `ik`, `isch`: removed unless preceded by `e`.
    IgIsch,
    /// `lich`, `heit`: removed, then a preceding `er`/`en` in R1.
    LichHeit,
    /// `keit`: removed, then a preceding `lich` or `ig` in R2.
    Keit,
}

const GROUPS: &[SuffixGroup<DerivationalEnding>] = &[
    SuffixGroup::new(DerivationalEnding::EndUng, &["end", "ung"]),
    SuffixGroup::new(DerivationalEnding::IgIsch, &["ig", "ik", "isch"]),
    SuffixGroup::new(DerivationalEnding::LichHeit, &["lich", "heit"]),
    SuffixGroup::new(DerivationalEnding::Keit, &["keit"]),
];

/// Strip a derivational ending.
pub fn strip_derivational(mut word: Vec<char>, regions: &Regions) -> Vec<char> {
    let Some(found) = select_longest(&word, GROUPS) else {
        return word;
    };
    let pos = found.position;
    if !regions.in_r2(pos) {
        return word;
    }

    match found.group {
        DerivationalEnding::EndUng => {
            word.truncate(pos);
            let ig = suffix_position(&word, "ig")
                .filter(|&ig| regions.in_r2(ig) && char_before(&word, ig) != Some('e'));
            if let Some(ig) = ig {
                word.truncate(ig);
            }
        }
        DerivationalEnding::IgIsch => {
            if char_before(&word, pos) != Some('e') {
                word.truncate(pos);
            }
        }
        DerivationalEnding::LichHeit => {
            word.truncate(pos);
            let before_in_r1 = ["er", "en"]
                .iter()
                .any(|ending| suffix_position(&word, ending).is_some_and(|p| regions.in_r1(p)));
            if before_in_r1 {
                word.truncate(word.len() - 2);
            }
        }
        DerivationalEnding::Keit => {
            word.truncate(pos);
            let inner = suffix_position(&word, "lich")
                .filter(|&p| regions.in_r2(p))
                .or_else(|| suffix_position(&word, "ig").filter(|&p| regions.in_r2(p)));
            if let Some(inner) = inner {
                word.truncate(inner);
            }
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glide::mark_glides;
    use crate::regions::german_regions;

    fn step3(word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        mark_glides(&mut chars);
        let regions = german_regions(&chars);
        strip_derivational(chars, &regions).into_iter().collect()
    }

    fn with_regions(word: &str, r1: usize, r2: usize) -> String {
        let chars: Vec<char> = word.chars().collect();
        strip_derivational(chars, &Regions { r1, r2 }).into_iter().collect()
    }

    #[test]
    fn removes_end_and_ung() {
        assert_eq!(step3("bedeutung"), "bedeut");
        assert_eq!(step3("zeitung"), "zeitung");
        assert_eq!(with_regions("lesend", 3, 3), "les");
    }

    #[test]
    fn end_ung_then_ig() {
        assert_eq!(with_regions("beendigung", 3, 3), "beend");
        assert_eq!(with_regions("heiligung", 2, 2), "heil");
        // "ig" before R2 stays
        assert_eq!(step3("beendigung"), "beendig");
    }

    #[test]
    fn end_ung_ig_after_e_stays() {
        assert_eq!(with_regions("steigung", 2, 2), "steig");
        assert_eq!(with_regions("seigung", 1, 1), "seig");
    }

    #[test]
    fn removes_ig_ik_isch_unless_after_e() {
        assert_eq!(step3("unabhangig"), "unabhang");
        assert_eq!(step3("kategorisch"), "kategor");
        assert_eq!(with_regions("musik", 3, 3), "mus");
        assert_eq!(with_regions("teig", 1, 1), "teig");
    }

    #[test]
    fn removes_lich_heit() {
        assert_eq!(step3("gesundheit"), "gesund");
        assert_eq!(step3("abendlich"), "abend");
    }

    #[test]
    fn lich_heit_then_er_en_in_r1() {
        assert_eq!(with_regions("sicherheit", 3, 4), "sich");
        assert_eq!(with_regions("offenheit", 3, 5), "off");
        // "er" starts before R1
        assert_eq!(with_regions("sicherheit", 5, 6), "sicher");
    }

    #[test]
    fn keit_then_lich_or_ig() {
        assert_eq!(step3("freundlichkeit"), "freundlich");
        assert_eq!(step3("möglichkeit"), "möglich");
        assert_eq!(with_regions("freundlichkeit", 3, 5), "freund");
        assert_eq!(step3("schwierigkeit"), "schwierig");
        assert_eq!(with_regions("schwierigkeit", 3, 7), "schwier");
    }

    #[test]
    fn ending_outside_r2_is_kept() {
        assert_eq!(step3("freiheit"), "freiheit");
        assert_eq!(step3("herrlich"), "herrlich");
    }

    #[test]
    fn short_buffers_are_safe() {
        assert_eq!(step3(""), "");
        assert_eq!(step3("ig"), "ig");
        assert_eq!(with_regions("ig", 0, 0), "");
    }
}
