// Character case helpers.
//
// Stemmers mark letters by flipping their case, so "simple" one-to-one
// case mapping is all that is needed here. The standard library's
// to_lowercase / to_uppercase yield iterators because a few characters
// expand to several; for marking we only ever take the first one.

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
///
/// For characters with multi-character uppercase expansions, returns only
/// the first character.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether `c` is one of the characters in `set`.
///
/// Membership is exact code point equality; no case folding is applied.
pub fn in_set(c: char, set: &[char]) -> bool {
    set.contains(&c)
}
