//! Small helpers shared by callers.

/// Fallback used when a file name sanitizes to nothing
pub const DEFAULT_FILE_STEM: &str = "bmi_data";

/// Make a user-supplied file name safe to create
///
/// Replaces `< > : " / \ | ? *` with `_`, trims leading and trailing spaces
/// and dots, and falls back to [`DEFAULT_FILE_STEM`] if nothing is left.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c == ' ' || c == '.');
    if trimmed.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}
