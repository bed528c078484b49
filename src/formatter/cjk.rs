//! CJK-convention formatting strategy.
//!
//! In Chinese, Japanese and Korean naming the family name comes before the
//! given name and the two are not separated. Callers still supply parts in
//! given-name(s)-then-surname order; the surname-first ordering is applied
//! here as an output transformation.

/// Joins name parts in reversed input order with no separator, placing the
/// surname (the last-supplied part) first.
///
/// # Arguments
/// * `parts` - The name parts: given name(s) followed by the surname
///
/// # Returns
/// * `String` - The concatenated surname-first name (e.g., "李晓东")
///
/// # Example
/// ```
/// use name_display::formatter::format_cjk_name;
///
/// assert_eq!(format_cjk_name(&["晓东", "李"]), "李晓东");
/// ```
pub fn format_cjk_name<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .rev()
        .map(|part| part.as_ref())
        .collect()
}

/// Produces the initials form for a CJK name: the full family name.
///
/// By convention a CJK name is abbreviated to its family-name token rather
/// than a single character, so the last supplied part is returned verbatim,
/// casing and content untouched.
///
/// # Arguments
/// * `parts` - The name parts: given name(s) followed by the surname
///
/// # Returns
/// * `String` - The last part unmodified (e.g., "李")
///
/// # Example
/// ```
/// use name_display::formatter::format_cjk_initials;
///
/// assert_eq!(format_cjk_initials(&["晓东", "李"]), "李");
/// ```
pub fn format_cjk_initials<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .last()
        .map(|part| part.as_ref().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_name_surname_first() {
        assert_eq!(format_cjk_name(&["晓东", "李"]), "李晓东");
    }

    #[test]
    fn test_korean_names_surname_first() {
        assert_eq!(format_cjk_name(&["찬욱", "박"]), "박찬욱");
        assert_eq!(format_cjk_name(&["민식", "최"]), "최민식");
    }

    #[test]
    fn test_three_part_name_fully_reversed() {
        assert_eq!(format_cjk_name(&["一", "二", "三"]), "三二一");
    }

    #[test]
    fn test_initials_are_the_family_name() {
        assert_eq!(format_cjk_initials(&["晓东", "李"]), "李");
        assert_eq!(format_cjk_initials(&["찬욱", "박"]), "박");
        assert_eq!(format_cjk_initials(&["민식", "최"]), "최");
    }

    #[test]
    fn test_initials_preserve_surname_verbatim() {
        // Mixed sequences dispatch here too; the surname token is returned
        // untouched even when it happens to contain ASCII.
        assert_eq!(format_cjk_initials(&["晓东", "lee"]), "lee");
    }
}
