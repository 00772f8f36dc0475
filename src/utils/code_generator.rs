//! Short code validation and generation.
//!
//! Codes are 6-8 ASCII letters or digits, case-sensitive. Generated codes are
//! drawn uniformly from the same 62-character alphabet using a
//! cryptographically secure RNG, since codes are public and must not be
//! guessable.

use rand::Rng;
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

/// Alphabet used for generated codes: digits, upper and lower case letters.
pub const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Accepted code lengths.
pub const CODE_LENGTH_RANGE: RangeInclusive<usize> = 6..=8;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Returns true iff `code` is 6-8 ASCII letters or digits.
///
/// Total predicate: never panics and never errors.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::is_valid_code;
///
/// assert!(is_valid_code("abc123"));
/// assert!(is_valid_code("AbC12345"));
/// assert!(!is_valid_code("abc12"));
/// assert!(!is_valid_code("abc-123"));
/// ```
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Generates a random code of exactly `length` characters from [`CODE_ALPHABET`].
///
/// `length` must lie in [`CODE_LENGTH_RANGE`] for the result to pass
/// [`is_valid_code`]. Each character is sampled uniformly and independently
/// from the thread-local CSPRNG.
pub fn generate_code(length: usize) -> String {
    debug_assert!(
        CODE_LENGTH_RANGE.contains(&length),
        "code length {length} outside {CODE_LENGTH_RANGE:?}"
    );

    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}
