//! Latin-convention formatting strategy.
//!
//! Latin-script names keep their input order (given name(s) then surname)
//! and are joined with single spaces. Initials take the first character of
//! every part, upper-cased.

/// Joins name parts in input order with a single space separator.
///
/// # Arguments
/// * `parts` - The name parts: given name(s) followed by the surname
///
/// # Returns
/// * `String` - The parts joined with spaces (e.g., "Eric Louis Morris")
///
/// # Example
/// ```
/// use name_display::formatter::format_latin_name;
///
/// assert_eq!(format_latin_name(&["Eric", "Morris"]), "Eric Morris");
/// assert_eq!(
///     format_latin_name(&["Eric", "Louis", "Morris"]),
///     "Eric Louis Morris"
/// );
/// ```
pub fn format_latin_name<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Produces the full acronym for a Latin name: the first character of each
/// part, upper-cased, concatenated with no separator.
///
/// One initial is produced per part - one for each given name plus one for
/// the surname - regardless of how many parts are supplied. Input case does
/// not matter; the output is always upper-case. An empty part contributes
/// nothing.
///
/// # Arguments
/// * `parts` - The name parts: given name(s) followed by the surname
///
/// # Returns
/// * `String` - The concatenated upper-cased initials (e.g., "ELM")
///
/// # Example
/// ```
/// use name_display::formatter::format_latin_initials;
///
/// assert_eq!(format_latin_initials(&["Eric", "Morris"]), "EM");
/// assert_eq!(format_latin_initials(&["eric", "morris"]), "EM");
/// ```
pub fn format_latin_initials<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .filter_map(|part| part.as_ref().chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_part_name() {
        assert_eq!(format_latin_name(&["Eric", "Morris"]), "Eric Morris");
    }

    #[test]
    fn test_middle_name() {
        assert_eq!(
            format_latin_name(&["Eric", "Louis", "Morris"]),
            "Eric Louis Morris"
        );
    }

    #[test]
    fn test_many_given_names() {
        assert_eq!(
            format_latin_name(&[
                "Kiefer", "William", "Frederick", "Dempsey", "George", "Rufus", "Sutherland"
            ]),
            "Kiefer William Frederick Dempsey George Rufus Sutherland"
        );
    }

    #[test]
    fn test_initials_one_per_part() {
        assert_eq!(format_latin_initials(&["Eric", "Morris"]), "EM");
        assert_eq!(format_latin_initials(&["Eric", "Louis", "Morris"]), "ELM");
        assert_eq!(
            format_latin_initials(&["Mel", "Colmcille", "Gerard", "Gibson"]),
            "MCGG"
        );
    }

    #[test]
    fn test_initials_upper_case_lower_case_input() {
        assert_eq!(format_latin_initials(&["eric", "morris"]), "EM");
        assert_eq!(format_latin_initials(&["eRic", "mOrris"]), "EM");
    }

    #[test]
    fn test_initials_skip_empty_part() {
        assert_eq!(format_latin_initials(&["Eric", "", "Morris"]), "EM");
    }

    #[test]
    fn test_initials_preserve_non_letter_first_characters() {
        // The first character is taken verbatim, upper-cased where an
        // upper-case mapping exists.
        assert_eq!(format_latin_initials(&["'Eric", "Morris"]), "'M");
    }
}
