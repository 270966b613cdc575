//! Textual `'0'`/`'1'` serialization of pixel buffers.
//!
//! One character per cell in row-major order. Used to ship frames as plain
//! text and to compare consecutive frames cheaply.

use crate::foundation::error::{FlipdotError, FlipdotResult};

/// Encode each cell as `'1'` (on) or `'0'` (off).
pub fn encode_bits(cells: &[bool]) -> String {
    cells.iter().map(|&on| if on { '1' } else { '0' }).collect()
}

/// Decode a bit string into exactly `size` cells.
///
/// Total: cell `i` is on iff the `i`-th character is `'1'`. Short input is
/// padded with off cells, long input is truncated, and any other character
/// (including non-ASCII ones) reads as off.
pub fn decode_bits(bits: &str, size: usize) -> Vec<bool> {
    let mut out = vec![false; size];
    for (slot, ch) in out.iter_mut().zip(bits.chars()) {
        *slot = ch == '1';
    }
    out
}

/// Decode a bit string that must describe exactly `size` cells.
pub fn decode_bits_strict(bits: &str, size: usize) -> FlipdotResult<Vec<bool>> {
    let len = bits.chars().count();
    if len != size {
        return Err(FlipdotError::codec(format!(
            "bit string has {len} cells, expected {size}"
        )));
    }
    if let Some(pos) = bits.chars().position(|c| c != '0' && c != '1') {
        return Err(FlipdotError::codec(format!(
            "bit string has invalid character at offset {pos}"
        )));
    }
    Ok(decode_bits(bits, size))
}

#[cfg(test)]
#[path = "../../tests/unit/codec/bits.rs"]
mod tests;
