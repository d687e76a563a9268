use crate::alphabet::{INSENSITIVE_LENGTH, SENSITIVE_LENGTH, checksum_value};
use crate::error::{CaseIdError, Result};
use crate::validate::is_valid;

/// Restores correct casing of an 18-character identifier from its checksum.
///
/// Each checksum character decodes to a 5-bit case mask for one 5-character
/// chunk of the body. Alphabetic body characters are forced uppercase where
/// the mask bit is 1 and lowercase where it is 0; digits carry no case and
/// pass through. The 3 suffix characters are re-emitted uppercased (digits
/// stay digits), so the returned suffix is always in canonical form.
///
/// Only the 18-character form is accepted: unlike the conversions, a valid
/// 15-character identifier is an error here.
///
/// # Errors
///
/// Returns `NotInsensitiveFormat` if `id` fails [`is_valid`] or is not
/// exactly 18 characters.
pub fn repair_casing(id: &str) -> Result<String> {
    if !is_valid(id) || id.len() != INSENSITIVE_LENGTH {
        return Err(CaseIdError::NotInsensitiveFormat { id: id.to_string() });
    }

    let bytes = id.as_bytes();
    let (body, suffix) = bytes.split_at(SENSITIVE_LENGTH);

    let mut out = String::with_capacity(INSENSITIVE_LENGTH);
    for (chunk, &check) in body.chunks(5).zip(suffix) {
        let mask = checksum_value(check);
        for (bit, &c) in chunk.iter().enumerate() {
            let repaired = if !c.is_ascii_alphabetic() {
                c
            } else if mask >> bit & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            out.push(repaired as char);
        }
    }
    for &check in suffix {
        out.push(check.to_ascii_uppercase() as char);
    }
    Ok(out)
}
