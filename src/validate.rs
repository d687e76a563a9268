use crate::alphabet::{INSENSITIVE_LENGTH, SENSITIVE_LENGTH};

/// Returns true if `id` is a syntactically well-formed identifier.
///
/// Valid means exactly 15 or 18 characters, every one drawn from the
/// 62-character alphanumeric alphabet. The check is purely structural:
/// for 18-character input the checksum suffix is never verified against
/// the body's casing.
pub fn is_valid(id: &str) -> bool {
    (id.len() == SENSITIVE_LENGTH || id.len() == INSENSITIVE_LENGTH)
        && id.bytes().all(|c| c.is_ascii_alphanumeric())
}

/// Returns true if `id` is a valid identifier in the 15-character
/// case-sensitive form.
pub fn is_sensitive(id: &str) -> bool {
    is_valid(id) && id.len() == SENSITIVE_LENGTH
}

/// Returns true if `id` is a valid identifier in the 18-character
/// case-insensitive form.
pub fn is_insensitive(id: &str) -> bool {
    is_valid(id) && id.len() == INSENSITIVE_LENGTH
}
