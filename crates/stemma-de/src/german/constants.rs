// German letter sets and region constants.

/// Vowels (lowercase only): a e i o u y ä ö ü
pub(crate) const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', '\u{00E4}', '\u{00F6}', '\u{00FC}'];

/// Letters that may precede a removable `s` in step 1.
pub(crate) const S_ENDINGS: &[char] = &['b', 'd', 'f', 'g', 'h', 'k', 'l', 'm', 'n', 'r', 't'];

/// Letters that may precede a removable `st` in step 2. Unlike
/// [`S_ENDINGS`] this excludes `r`.
pub(crate) const ST_ENDINGS: &[char] = &['b', 'd', 'f', 'g', 'h', 'k', 'l', 'm', 'n', 't'];

/// Letters that become glides when surrounded by vowels.
pub(crate) const GLIDES: &[char] = &['u', 'y'];

/// R1 never starts before this offset.
pub(crate) const MIN_R1: usize = 3;

/// Words shorter than this get a null R1.
pub(crate) const MIN_REGION_WORD_LEN: usize = 4;

/// Letters required before the st-ending letter for `st` to be removed.
pub(crate) const MIN_ST_STEM: usize = 3;
