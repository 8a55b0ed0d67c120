use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of whitespace inside a name, collapsed to a single space before storing
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Trim a user-supplied name and collapse internal whitespace.
///
/// Stored names are always cleaned, so the store's `UPPER(TRIM(name))` unique
/// indexes and duplicate lookups compare like with like.
pub fn clean_name(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name.trim(), " ").into_owned()
}

/// Key used for case-insensitive duplicate detection
pub fn normalize_name(name: &str) -> String {
    clean_name(name).to_uppercase()
}

/// `validator` hook rejecting names that are empty once trimmed
pub fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut err = validator::ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
