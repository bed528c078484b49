//! Script classification for name parts.
//!
//! Decides whether a sequence of name parts should be formatted under the
//! Latin convention (given name(s) then surname, space-separated) or the
//! CJK convention (surname first, no separator).

/// Which naming convention applies to a full name part sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Latin-alphabet text: given name(s) then surname, space-separated.
    Latin,
    /// CJK text (Chinese/Japanese/Korean): surname first, no separator.
    Cjk,
}

/// Checks whether a name part contains at least one basic ASCII character
/// (code point 0x0000-0x007F).
///
/// This is a deliberately coarse proxy for "is this Latin-alphabet text":
/// any ASCII character, including digits and punctuation, counts. Parts
/// composed entirely of non-ASCII code points (CJK ideographs, Hangul
/// syllables, etc.) do not match. An empty part has no matching characters
/// and so classifies as non-Latin.
///
/// # Arguments
/// * `part` - One component of a person's name
///
/// # Returns
/// * `bool` - `true` if the part contains any ASCII character
///
/// # Examples
/// ```
/// use name_display::formatter::contains_latin_chars;
///
/// assert!(contains_latin_chars("Eric"));
/// assert!(contains_latin_chars("O'Brien"));
/// assert!(!contains_latin_chars("李"));
/// assert!(!contains_latin_chars("박"));
/// assert!(!contains_latin_chars(""));
/// ```
pub fn contains_latin_chars(part: &str) -> bool {
    part.chars().any(|c| (c as u32) <= 0x007F)
}

/// Classifies a full name part sequence as [`Script::Latin`] or
/// [`Script::Cjk`].
///
/// Classification is sequence-wide: every part must individually contain a
/// Latin character for the sequence to classify as Latin. If any part fails
/// that test, the whole sequence is formatted under CJK rules. There is no
/// per-part strategy selection within a single call, so a genuinely
/// mixed-script name is treated entirely as CJK.
///
/// # Arguments
/// * `parts` - The name parts in input order
///
/// # Returns
/// * `Script` - The convention to apply to the whole sequence
pub fn classify_parts<S: AsRef<str>>(parts: &[S]) -> Script {
    if parts.iter().all(|part| contains_latin_chars(part.as_ref())) {
        Script::Latin
    } else {
        Script::Cjk
    }
}
