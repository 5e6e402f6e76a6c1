//! Parity bit implementation.
//!
//! A parity bit is the simplest error detection code: one redundancy bit
//! chosen so the total count of `1` bits in the transmitted word is even
//! (even parity) or odd (odd parity). It detects any single-bit error but
//! cannot locate it, and an even number of flipped bits goes unnoticed.

use std::fmt::{Display, Formatter};

use crate::bits;
use crate::error::Result;

/// Parity convention for the transmitted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityMode {
    /// Total count of ones in the transmitted word is even
    Even,
    /// Total count of ones in the transmitted word is odd
    Odd,
}

impl Display for ParityMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParityMode::Even => write!(f, "even"),
            ParityMode::Odd => write!(f, "odd"),
        }
    }
}

/// Computes the parity bit for a bit-string.
///
/// # Arguments
///
/// * `data` - Bit-string to protect (`'0'`/`'1'` characters)
/// * `mode` - Parity convention for the transmitted word
///
/// # Returns
///
/// The single parity bit as a character, or an error for malformed input
pub fn parity_bit(data: &str, mode: ParityMode) -> Result<char> {
    let bits = bits::parse(data)?;
    let ones = bits.count_ones();

    let bit = match mode {
        ParityMode::Even => ones % 2 != 0,
        ParityMode::Odd => ones % 2 == 0,
    };
    Ok(if bit { '1' } else { '0' })
}

/// Appends the parity bit to form the transmitted word.
pub fn append_parity(data: &str, mode: ParityMode) -> Result<String> {
    let bit = parity_bit(data, mode)?;
    let mut word = String::with_capacity(data.len() + 1);
    word.push_str(data);
    word.push(bit);
    Ok(word)
}

/// Checks a received word (data plus parity bit) against the convention.
///
/// Returns `true` when the total ones-count matches `mode`. A `false`
/// result means an odd number of bits were flipped in transit; an even
/// number of flips is invisible to parity.
pub fn verify_parity(word: &str, mode: ParityMode) -> Result<bool> {
    let bits = bits::parse(word)?;
    let ones = bits.count_ones();

    Ok(match mode {
        ParityMode::Even => ones % 2 == 0,
        ParityMode::Odd => ones % 2 != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_even_parity_bit() {
        // "1010110" has four ones, already even
        assert_eq!(parity_bit("1010110", ParityMode::Even).unwrap(), '0');
        assert_eq!(parity_bit("1010111", ParityMode::Even).unwrap(), '1');
    }

    #[test]
    fn test_odd_parity_bit() {
        assert_eq!(parity_bit("1010110", ParityMode::Odd).unwrap(), '1');
        assert_eq!(parity_bit("1010111", ParityMode::Odd).unwrap(), '0');
    }

    #[test]
    fn test_append_parity() {
        assert_eq!(
            append_parity("1010110", ParityMode::Even).unwrap(),
            "10101100"
        );
        assert_eq!(
            append_parity("1010110", ParityMode::Odd).unwrap(),
            "10101101"
        );
    }

    #[test]
    fn test_round_trip_makes_count_match() {
        for data in ["0", "1", "1010110", "1111", "000000", "101"] {
            for mode in [ParityMode::Even, ParityMode::Odd] {
                let word = append_parity(data, mode).unwrap();
                assert!(verify_parity(&word, mode).unwrap());
            }
        }
    }

    #[test]
    fn test_verify_detects_single_flip() {
        let word = append_parity("110101", ParityMode::Even).unwrap();
        for i in 0..word.len() {
            let mut flipped: Vec<char> = word.chars().collect();
            flipped[i] = if flipped[i] == '1' { '0' } else { '1' };
            let flipped: String = flipped.into_iter().collect();
            assert!(!verify_parity(&flipped, ParityMode::Even).unwrap());
        }
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            parity_bit("", ParityMode::Even),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parity_bit("10x1", ParityMode::Odd),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ParityMode::Even.to_string(), "even");
        assert_eq!(ParityMode::Odd.to_string(), "odd");
    }
}
