//! Codec for a fixed-format record identifier with two equivalent forms:
//! a 15-character case-sensitive form and an 18-character case-insensitive
//! form whose last 3 characters checksum the case pattern of the first 15.
//!
//! Each checksum character encodes a 5-bit mask (1 = uppercase letter) for
//! one 5-character chunk of the body, rendered through a 32-symbol alphabet
//! (A-Z then 0-5). That makes the 18-character form safe to pass through
//! case-destroying systems: [`repair_casing`] reconstructs the original
//! casing from the suffix alone.
//!
//! All operations are pure functions over in-memory strings; validation is
//! purely structural and no operation verifies checksum consistency (see
//! [`to_sensitive`]).

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;
pub mod repair;
pub mod validate;

pub use alphabet::{CHECKSUM_ALPHABET, INSENSITIVE_LENGTH, SENSITIVE_LENGTH, VALID_CHARACTERS};
pub use decode::to_sensitive;
pub use encode::to_insensitive;
pub use error::{CaseIdError, Result};
pub use repair::repair_casing;
pub use validate::{is_insensitive, is_sensitive, is_valid};
