//! Character sequence and encoding generators.
//!
//! Lengths follow a clamp-don't-fail policy: negative lengths produce an
//! empty sequence and anything above [`MAX_LENGTH`] is cut down to it.

use crate::engine::Engine;
use tracing::warn;
use uuid::Uuid;

/// Hard ceiling on generated sequence lengths (2^20).
pub const MAX_LENGTH: usize = 1 << 20;

/// Length used by [`string`] when none is given.
pub const DEFAULT_STRING_LENGTH: usize = 10;

/// Length used by [`hexadecimal`] when none is given.
pub const DEFAULT_HEX_LENGTH: usize = 1;

const ALPHANUMERIC: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Normalize a caller-supplied length into `0..=MAX_LENGTH`.
pub fn clamp_length(length: Option<i64>, default: usize) -> usize {
    match length {
        None => default,
        Some(n) if n <= 0 => 0,
        Some(n) => usize::try_from(n).map_or(MAX_LENGTH, |n| n.min(MAX_LENGTH)),
    }
}

/// Pick one byte from an alphabet with a single bounded draw.
fn draw_from(engine: &mut Engine, alphabet: &[u8]) -> char {
    let last = alphabet.len().saturating_sub(1) as u64;
    let index = engine.uniform_u64(last) as usize;
    char::from(alphabet.get(index).copied().unwrap_or(b'0'))
}

/// Generate an alphanumeric string, one draw per character.
pub fn string(engine: &mut Engine, length: impl Into<Option<i64>>) -> String {
    let length = clamp_length(length.into(), DEFAULT_STRING_LENGTH);
    (0..length).map(|_| draw_from(engine, ALPHANUMERIC)).collect()
}

/// Generate a `0x`-prefixed lowercase hexadecimal string with `length`
/// digits, one `[0, 15]` draw per digit.
pub fn hexadecimal(engine: &mut Engine, length: impl Into<Option<i64>>) -> String {
    let length = clamp_length(length.into(), DEFAULT_HEX_LENGTH);
    let mut result = String::with_capacity(length + 2);
    result.push_str("0x");
    result.extend((0..length).map(|_| draw_from(engine, HEX_DIGITS)));
    result
}

/// Deprecated spelling of [`hexadecimal`].
#[deprecated(since = "0.1.0", note = "use `hexadecimal` instead")]
pub fn hexa_decimal(engine: &mut Engine, length: impl Into<Option<i64>>) -> String {
    warn!("hexa_decimal() is deprecated; use hexadecimal() instead");
    hexadecimal(engine, length)
}

/// Generate a random RFC 4122 version 4 UUID.
///
/// Two words supply the 128 bits; the version and variant bits are then
/// forced, leaving 122 random bits.
pub fn uuid(engine: &mut Engine) -> Uuid {
    let mut bytes = [0u8; 16];
    let (high, low) = bytes.split_at_mut(8);
    high.copy_from_slice(&engine.next_u64().to_be_bytes());
    low.copy_from_slice(&engine.next_u64().to_be_bytes());

    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes)
}

/// Fair coin flip from one `[0, 1]` draw.
pub fn boolean(engine: &mut Engine) -> bool {
    engine.uniform_u64(1) == 1
}

/// `true` with the given probability.
///
/// The probability is clamped into `[0, 1]`; NaN counts as a fair coin.
pub fn weighted_boolean(engine: &mut Engine, probability: f64) -> bool {
    let probability = if probability.is_nan() {
        0.5
    } else {
        probability.clamp(0.0, 1.0)
    };
    engine.next_unit_float() < probability
}
