use crate::alphabet::SENSITIVE_LENGTH;
use crate::error::{CaseIdError, Result};
use crate::validate::is_valid;

/// Converts an identifier to the 15-character case-sensitive form.
///
/// An 18-character identifier is truncated to its body; the body's casing is
/// trusted as-is and the checksum suffix is never consulted or verified. Use
/// [`crate::repair_casing`] first if the input's casing may have been lost.
/// A 15-character identifier is returned unchanged.
///
/// # Errors
///
/// Returns `InvalidFormat` if `id` fails [`is_valid`].
pub fn to_sensitive(id: &str) -> Result<String> {
    if !is_valid(id) {
        return Err(CaseIdError::InvalidFormat { id: id.to_string() });
    }
    Ok(id[..SENSITIVE_LENGTH].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_truncates_insensitive() {
        assert_eq!(
            to_sensitive("00300000000000AAAQ").as_deref(),
            Ok("00300000000000A")
        );
    }

    #[test]
    fn test_decode_returns_sensitive_unchanged() {
        assert_eq!(
            to_sensitive("001A0000006Vm9r").as_deref(),
            Ok("001A0000006Vm9r")
        );
    }

    #[test]
    fn test_decode_preserves_body_casing() {
        assert_eq!(
            to_sensitive("aBcDeFgHiJkLmNoKVK").as_deref(),
            Ok("aBcDeFgHiJkLmNo")
        );
    }

    #[test]
    fn test_decode_does_not_verify_checksum() {
        // Deliberate: decoding is a truncation. A suffix inconsistent with
        // the body's casing is accepted and discarded, never an error.
        assert_eq!(
            to_sensitive("00300000000000AZZZ").as_deref(),
            Ok("00300000000000A")
        );
    }

    #[test]
    fn test_decode_idempotent() {
        let decoded = to_sensitive("aBcDeFgHiJkLmNoKVK").unwrap();
        assert_eq!(to_sensitive(&decoded), Ok(decoded.clone()));
    }

    #[test]
    fn test_decode_invalid_length() {
        let result = to_sensitive("0030000000000000");
        assert_eq!(
            result,
            Err(CaseIdError::InvalidFormat {
                id: "0030000000000000".to_string()
            })
        );
    }

    #[test]
    fn test_decode_invalid_character() {
        assert!(to_sensitive("001A00000 6Vm9r").is_err());
    }
}
