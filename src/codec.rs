//! Base62 codec between numeric identifiers and short codes.
//!
//! Short codes are the positional base62 representation of a record's
//! identifier over the alphabet `0-9 a-z A-Z` (in that order). The
//! mapping is pure and reversible: codes are never stored, always
//! recomputed from the id.

use crate::error::AppError;

/// Ordered digit symbols. Index position defines the numeric value of
/// each symbol, so the ordering must never change.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// Encodes a non-negative identifier as its canonical base62 code.
///
/// Zero encodes as `"0"` (the first alphabet symbol), not an empty
/// string. The full `u64` range is supported without precision loss.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    // u64::MAX is 11 base62 digits.
    let mut buf = [0u8; 11];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    // Alphabet bytes are ASCII, so the slice is valid UTF-8.
    String::from_utf8_lossy(&buf[i..]).into_owned()
}

/// Decodes a base62 code back to its identifier.
///
/// Inverse of [`encode`]. Accepts any string over the alphabet,
/// including non-canonical forms with leading `0` symbols.
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] if the input is empty, contains a
/// character outside the alphabet, or overflows `u64`. Never silently
/// produces a wrong number.
pub fn decode(code: &str) -> Result<u64, AppError> {
    if code.is_empty() {
        return Err(AppError::InvalidCode);
    }

    let mut n: u64 = 0;
    for byte in code.bytes() {
        let digit = symbol_value(byte).ok_or(AppError::InvalidCode)?;
        n = n
            .checked_mul(BASE)
            .and_then(|n| n.checked_add(digit))
            .ok_or(AppError::InvalidCode)?;
    }

    Ok(n)
}

/// Numeric value of a single alphabet symbol, or `None` if the byte is
/// not part of the alphabet.
fn symbol_value(byte: u8) -> Option<u64> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u64),
        b'a'..=b'z' => Some((byte - b'a') as u64 + 10),
        b'A'..=b'Z' => Some((byte - b'A') as u64 + 36),
        _ => None,
    }
}
