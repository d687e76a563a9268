use crate::alphabet::{CHECKSUM_ALPHABET, SENSITIVE_LENGTH};
use crate::error::{CaseIdError, Result};
use crate::validate::is_valid;

/// Case mask for one 5-character chunk: bit `i` (LSB-first, matching
/// character order) is set when chunk character `i` is an uppercase letter.
fn case_mask(chunk: &[u8]) -> usize {
    chunk
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_uppercase())
        .fold(0, |mask, (bit, _)| mask | (1 << bit))
}

/// Converts an identifier to the 18-character case-insensitive form.
///
/// A 15-character identifier gets a 3-character checksum appended, one
/// checksum character per 5-character chunk of the body. An identifier
/// already in 18-character form is returned unchanged.
///
/// # Errors
///
/// Returns `InvalidFormat` if `id` fails [`is_valid`].
pub fn to_insensitive(id: &str) -> Result<String> {
    if !is_valid(id) {
        return Err(CaseIdError::InvalidFormat { id: id.to_string() });
    }
    if id.len() != SENSITIVE_LENGTH {
        return Ok(id.to_string());
    }

    let mut out = String::with_capacity(crate::alphabet::INSENSITIVE_LENGTH);
    out.push_str(id);
    for chunk in id.as_bytes().chunks(5) {
        out.push(CHECKSUM_ALPHABET[case_mask(chunk)] as char);
    }
    Ok(out)
}
