//! Entry points for name and initials formatting.
//!
//! Both operations validate the part count, classify the whole sequence
//! once, and dispatch to exactly one convention strategy. They are pure
//! functions: no shared state, no I/O, deterministic over their inputs.

use crate::error::AppError;
use crate::formatter::cjk::{format_cjk_initials, format_cjk_name};
use crate::formatter::latin::{format_latin_initials, format_latin_name};
use crate::formatter::script::{Script, classify_parts};

/// Formats a full name for display according to the convention of its
/// script.
///
/// Parts must be supplied in the order: primary given name, additional
/// given name(s) (optional), surname. Latin-script names are joined with
/// spaces in that order; CJK names are concatenated surname-first with no
/// separator. A single non-Latin part makes the whole sequence format
/// under CJK rules.
///
/// # Arguments
/// * `parts` - The name parts, given name(s) followed by the surname
///
/// # Returns
/// * `Ok(String)` - The formatted display name
/// * `Err(AppError::InvalidArgumentCount)` - Fewer than two parts supplied
///
/// # Examples
/// ```
/// use name_display::format_name;
///
/// assert_eq!(format_name(&["Eric", "Morris"])?, "Eric Morris");
/// assert_eq!(format_name(&["晓东", "李"])?, "李晓东");
/// assert!(format_name(&["Madonna"]).is_err());
/// # Ok::<(), name_display::AppError>(())
/// ```
pub fn format_name<S: AsRef<str>>(parts: &[S]) -> Result<String, AppError> {
    let script = validate_and_classify(parts)?;
    Ok(match script {
        Script::Latin => format_latin_name(parts),
        Script::Cjk => format_cjk_name(parts),
    })
}

/// Formats the compact initials representation of a name.
///
/// Latin-script names yield the first character of every part upper-cased,
/// concatenated (the full acronym, one letter per part). CJK names yield
/// the full family name - the last supplied part - verbatim.
///
/// # Arguments
/// * `parts` - The name parts, given name(s) followed by the surname
///
/// # Returns
/// * `Ok(String)` - The initials string
/// * `Err(AppError::InvalidArgumentCount)` - Fewer than two parts supplied
///
/// # Examples
/// ```
/// use name_display::format_initials;
///
/// assert_eq!(format_initials(&["Eric", "Louis", "Morris"])?, "ELM");
/// assert_eq!(format_initials(&["晓东", "李"])?, "李");
/// # Ok::<(), name_display::AppError>(())
/// ```
pub fn format_initials<S: AsRef<str>>(parts: &[S]) -> Result<String, AppError> {
    let script = validate_and_classify(parts)?;
    Ok(match script {
        Script::Latin => format_latin_initials(parts),
        Script::Cjk => format_cjk_initials(parts),
    })
}

/// Checks the part count before any formatting logic runs, then classifies
/// the sequence. A name needs at minimum a given name and a surname.
fn validate_and_classify<S: AsRef<str>>(parts: &[S]) -> Result<Script, AppError> {
    if parts.len() < 2 {
        return Err(AppError::invalid_argument_count(parts.len()));
    }
    let script = classify_parts(parts);
    tracing::debug!(parts = parts.len(), ?script, "classified name parts");
    Ok(script)
}
