// Suffix candidate groups and longest-match selection.
//
// A stemming step lists its candidate endings in groups, each group
// ordered longest-first. The winning group is the one whose match removes
// the longest suffix, i.e. reports the smallest truncation position. Ties
// go to the group listed first, so selection is deterministic.

/// Return the position at which `suffix` starts if `word` ends with it.
///
/// Positions are char offsets, so `word.len() - suffix_len` on a match.
/// The empty suffix matches at `word.len()`.
pub fn suffix_position(word: &[char], suffix: &str) -> Option<usize> {
    let suffix_len = suffix.chars().count();
    let start = word.len().checked_sub(suffix_len)?;
    word[start..]
        .iter()
        .copied()
        .eq(suffix.chars())
        .then_some(start)
}

/// Check whether `word` ends with `suffix`.
pub fn ends_with(word: &[char], suffix: &str) -> bool {
    suffix_position(word, suffix).is_some()
}

/// The character immediately before `pos`, if any.
pub fn char_before(word: &[char], pos: usize) -> Option<char> {
    pos.checked_sub(1).and_then(|i| word.get(i).copied())
}

/// A named, ordered list of candidate suffixes.
///
/// The list must be ordered longest-first: [`SuffixGroup::longest_match`]
/// reports the first candidate that matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixGroup<G> {
    pub id: G,
    pub suffixes: &'static [&'static str],
}

impl<G: Copy> SuffixGroup<G> {
    pub const fn new(id: G, suffixes: &'static [&'static str]) -> Self {
        SuffixGroup { id, suffixes }
    }

    /// Truncation position of the first candidate that ends `word`.
    pub fn longest_match(&self, word: &[char]) -> Option<usize> {
        self.suffixes
            .iter()
            .find_map(|suffix| suffix_position(word, suffix))
    }
}

/// The group that won a selection and where its suffix starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch<G> {
    pub group: G,
    pub position: usize,
}

/// Select the group whose match removes the longest suffix.
///
/// Returns `None` when no candidate of any group ends `word`. Among groups
/// reporting the same position the earliest in `groups` wins.
pub fn select_longest<G: Copy>(word: &[char], groups: &[SuffixGroup<G>]) -> Option<SuffixMatch<G>> {
    let mut best: Option<SuffixMatch<G>> = None;
    for group in groups {
        let Some(position) = group.longest_match(word) else {
            continue;
        };
        match best {
            Some(current) if current.position <= position => {}
            _ => {
                best = Some(SuffixMatch {
                    group: group.id,
                    position,
                })
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Group {
        Long,
        Short,
        Plural,
    }

    const GROUPS: &[SuffixGroup<Group>] = &[
        SuffixGroup::new(Group::Long, &["ern", "em", "er"]),
        SuffixGroup::new(Group::Short, &["en", "es", "e"]),
        SuffixGroup::new(Group::Plural, &["s"]),
    ];

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn suffix_position_counts_chars_not_bytes() {
        let word = chars("häuser");
        assert_eq!(suffix_position(&word, "er"), Some(4));
        assert_eq!(suffix_position(&word, "äuser"), Some(1));
        assert_eq!(suffix_position(&word, "user"), Some(2));
        assert_eq!(suffix_position(&word, "hauser"), None);
    }

    #[test]
    fn suffix_position_bounds() {
        assert_eq!(suffix_position(&chars("er"), "er"), Some(0));
        assert_eq!(suffix_position(&chars("r"), "er"), None);
        assert_eq!(suffix_position(&[], "e"), None);
        assert_eq!(suffix_position(&chars("ab"), ""), Some(2));
    }

    #[test]
    fn ends_with_and_char_before() {
        let word = chars("kenntnis");
        assert!(ends_with(&word, "nis"));
        assert!(!ends_with(&word, "niss"));
        assert_eq!(char_before(&word, 5), Some('t'));
        assert_eq!(char_before(&word, 0), None);
        assert_eq!(char_before(&word, 20), None);
    }

    #[test]
    fn longest_match_tests_every_candidate_in_order() {
        let group = GROUPS[0];
        assert_eq!(group.longest_match(&chars("kindern")), Some(4));
        assert_eq!(group.longest_match(&chars("ihrem")), Some(3));
        assert_eq!(group.longest_match(&chars("kinder")), Some(4));
        assert_eq!(group.longest_match(&chars("kind")), None);
    }

    #[test]
    fn select_prefers_smallest_position() {
        // only the Long group has a candidate ending "kindern"
        let m = select_longest(&chars("kindern"), GROUPS).unwrap();
        assert_eq!(m, SuffixMatch { group: Group::Long, position: 4 });

        // "es" (Short, pos 3) removes more than "s" (Plural, pos 4).
        let m = select_longest(&chars("tages"), GROUPS).unwrap();
        assert_eq!(m, SuffixMatch { group: Group::Short, position: 3 });
    }

    #[test]
    fn select_none_when_nothing_matches() {
        assert_eq!(select_longest(&chars("kind"), GROUPS), None);
        assert_eq!(select_longest(&[], GROUPS), None);
    }

    #[test]
    fn select_ties_go_to_first_group() {
        let groups = [
            SuffixGroup::new(Group::Plural, &["s"]),
            SuffixGroup::new(Group::Short, &["s"]),
        ];
        let m = select_longest(&chars("haus"), &groups).unwrap();
        assert_eq!(m.group, Group::Plural);
        for _ in 0..10 {
            assert_eq!(select_longest(&chars("haus"), &groups), Some(m));
        }
    }
}
