//! Conversions between parameter values and bit vectors.
//!
//! Bit vectors are least-significant bit first throughout.

use crate::error::{BitstreamError, BitstreamResult};

/// Packs the low `width` bits of `value`.
pub fn int_to_bits(value: i64, width: usize) -> Vec<bool> {
    (0..width).map(|i| i < 64 && (value >> i) & 1 == 1).collect()
}

/// Packs `value` into `width` bits, rejecting negative values and values
/// with a set bit at or above `width`.
pub fn int_to_bits_checked(value: i64, width: usize) -> BitstreamResult<Vec<bool>> {
    let fits = value >= 0 && (width >= 63 || value < (1i64 << width));
    if !fits {
        return Err(BitstreamError::MalformedLiteral {
            value: value.to_string(),
            reason: format!("value does not fit in {width} bits"),
        });
    }
    Ok(int_to_bits(value, width))
}

/// Decodes a `0b`-prefixed literal into `width` bits.
///
/// Digits are most-significant first. Leading zeros beyond `width` are
/// accepted; a set bit beyond `width` is not.
pub fn str_to_bits(literal: &str, width: usize) -> BitstreamResult<Vec<bool>> {
    let malformed = |reason: String| BitstreamError::MalformedLiteral {
        value: literal.to_string(),
        reason,
    };
    let digits = literal
        .strip_prefix("0b")
        .ok_or_else(|| malformed("expected 0b prefix".to_string()))?;

    let mut bits = vec![false; width];
    for (i, c) in digits.chars().rev().enumerate() {
        let set = match c {
            '0' => false,
            '1' => true,
            other => return Err(malformed(format!("invalid binary digit '{other}'"))),
        };
        match bits.get_mut(i) {
            Some(bit) => *bit = set,
            None if set => return Err(malformed(format!("value does not fit in {width} bits"))),
            None => {}
        }
    }
    Ok(bits)
}

/// Reassembles an integer from LSB-first bits. Bits past 64 are ignored.
pub fn bits_to_int(bits: &[bool]) -> u64 {
    bits.iter()
        .take(64)
        .enumerate()
        .fold(0, |acc, (i, &bit)| acc | (u64::from(bit) << i))
}
