//! Bit-string parsing and formatting.
//!
//! Every codec unit consumes bit-strings: text of `'0'`/`'1'` characters,
//! most-significant bit first, as a user would type them. This module is
//! the single place that text is validated and converted to and from the
//! `bitvec` representation the units compute on.

use bitvec::prelude::*;

use crate::error::{Error, Result};

/// Parses a bit-string into a bit vector.
///
/// Accepts only `'0'` and `'1'`; the first character becomes the
/// most-significant bit. Empty input is rejected rather than defaulted.
pub fn parse(s: &str) -> Result<BitVec<u8, Msb0>> {
    if s.is_empty() {
        return Err(Error::InvalidInput("bit string is empty".to_string()));
    }

    let mut bits = BitVec::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => {
                return Err(Error::InvalidInput(format!(
                    "bit string contains non-binary character {:?} at position {}",
                    c,
                    i + 1
                )))
            }
        }
    }
    Ok(bits)
}

/// Parses a bit-string that must have exactly `len` bits.
pub fn parse_exact(s: &str, len: usize) -> Result<BitVec<u8, Msb0>> {
    let bits = parse(s)?;
    if bits.len() != len {
        return Err(Error::InvalidInput(format!(
            "expected exactly {} bits, got {}",
            len,
            bits.len()
        )));
    }
    Ok(bits)
}

/// Renders a bit-slice back to `'0'`/`'1'` text, most-significant bit first.
pub fn format(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}
