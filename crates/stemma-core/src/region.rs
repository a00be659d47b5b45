// Snowball region computation.
//
// R1 is the region after the first non-vowel following a vowel; R2 is the
// same scan applied again inside R1. Both are expressed as char offsets
// into the word, and an offset equal to the word length is the null
// region: no suffix can start at or after it.

/// Find the start of the region following the first vowel/non-vowel pair.
///
/// Returns `i + 2` for the smallest `i` where `word[i]` is a vowel and
/// `word[i + 1]` is not, or `word.len()` if there is no such pair.
pub fn region_start<F>(word: &[char], is_vowel: F) -> usize
where
    F: Fn(char) -> bool,
{
    word.windows(2)
        .position(|pair| is_vowel(pair[0]) && !is_vowel(pair[1]))
        .map_or(word.len(), |i| i + 2)
}

/// The pair of region boundaries gating suffix removal.
///
/// Both offsets satisfy `0 <= r <= len`. Language-specific adjustments
/// (see [`Regions::with_r1`]) may leave `r1 > r2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
}

impl Regions {
    /// Compute the standard, unadjusted regions of `word`.
    pub fn compute<F>(word: &[char], is_vowel: F) -> Self
    where
        F: Fn(char) -> bool,
    {
        let r1 = region_start(word, &is_vowel);
        let r2 = r1 + region_start(&word[r1..], &is_vowel);
        Regions { r1, r2 }
    }

    /// Replace R1, keeping R2 as computed from the unadjusted R1.
    pub fn with_r1(self, r1: usize) -> Self {
        Regions { r1, ..self }
    }

    /// Whether a suffix starting at `pos` lies inside R1.
    pub fn in_r1(&self, pos: usize) -> bool {
        pos >= self.r1
    }

    /// Whether a suffix starting at `pos` lies inside R2.
    pub fn in_r2(&self, pos: usize) -> bool {
        pos >= self.r2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vowel(c: char) -> bool {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn region_start_after_first_vowel_consonant() {
        assert_eq!(region_start(&chars("beautiful"), vowel), 5);
        assert_eq!(region_start(&chars("tiful"), vowel), 3);
        assert_eq!(region_start(&chars("ab"), vowel), 2);
    }

    #[test]
    fn region_start_null_region() {
        assert_eq!(region_start(&chars("aeiou"), vowel), 5);
        assert_eq!(region_start(&chars("bcd"), vowel), 3);
        assert_eq!(region_start(&chars("a"), vowel), 1);
        assert_eq!(region_start(&[], vowel), 0);
    }

    #[test]
    fn compute_beautiful() {
        // Snowball's canonical example: beau|ti|ful
        let regions = Regions::compute(&chars("beautiful"), vowel);
        assert_eq!(regions, Regions { r1: 5, r2: 7 });
    }

    #[test]
    fn compute_without_second_region() {
        let regions = Regions::compute(&chars("beauty"), vowel);
        assert_eq!(regions, Regions { r1: 5, r2: 6 });
        let regions = Regions::compute(&chars("beau"), vowel);
        assert_eq!(regions, Regions { r1: 4, r2: 4 });
    }

    #[test]
    fn compute_empty_word() {
        assert_eq!(Regions::compute(&[], vowel), Regions { r1: 0, r2: 0 });
    }

    #[test]
    fn with_r1_keeps_r2() {
        let regions = Regions { r1: 2, r2: 4 }.with_r1(3);
        assert_eq!(regions, Regions { r1: 3, r2: 4 });
    }

    #[test]
    fn region_membership() {
        let regions = Regions { r1: 3, r2: 5 };
        assert!(!regions.in_r1(2));
        assert!(regions.in_r1(3));
        assert!(!regions.in_r2(4));
        assert!(regions.in_r2(5));
    }
}
