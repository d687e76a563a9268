//! Alphabet tables and length constants shared by every codec operation.

/// Length of the case-sensitive identifier form.
pub const SENSITIVE_LENGTH: usize = 15;

/// Length of the case-insensitive identifier form (body plus 3-char checksum).
pub const INSENSITIVE_LENGTH: usize = 18;

/// Every character legal anywhere in an identifier, in order:
/// uppercase A-Z, lowercase a-z, digits 0-9.
pub const VALID_CHARACTERS: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Checksum alphabet: 32 symbols rendering one 5-bit case mask each.
/// `CHECKSUM_ALPHABET[v]` is the canonical symbol for mask value `v`.
pub const CHECKSUM_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ012345";

/// Decode an alphanumeric byte back to its checksum value.
///
/// Letters map case-insensitively to 0..=25 and digits to 26 + d, the inverse
/// of [`CHECKSUM_ALPHABET`] over its 32 symbols. Digits 6-9 pass validation
/// but sit outside the checksum alphabet; they decode to 32..=35, and callers
/// read only bits 0..=4 of the result, so any alphanumeric suffix repairs
/// deterministically.
pub(crate) fn checksum_value(c: u8) -> u8 {
    if c.is_ascii_digit() {
        26 + (c - b'0')
    } else {
        c.to_ascii_uppercase() - b'A'
    }
}
