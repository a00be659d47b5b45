// Input normalization: lowercase, then expand the eszett.

/// Normalize a word into the char buffer the stemming steps operate on.
///
/// The word is lowercased and every `ß` is replaced with `ss`. Any other
/// text passes through unchanged; no language detection is attempted.
pub fn normalize(word: &str) -> Vec<char> {
    let lower = word.to_lowercase();
    let mut buffer = Vec::with_capacity(lower.len());
    for c in lower.chars() {
        if c == '\u{00DF}' {
            buffer.extend(['s', 's']);
        } else {
            buffer.push(c);
        }
    }
    buffer
}
