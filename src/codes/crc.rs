//! CRC (Cyclic Redundancy Check) implementation.
//!
//! CRC treats the data as a binary polynomial and divides it by a
//! generator polynomial using mod-2 (XOR, carry-less) arithmetic. The
//! remainder of that division is appended to the data as the check value;
//! the receiver runs the same division over the received word and accepts
//! it when the remainder comes out all zero.
//!
//! Unlike the fixed-width CRC-8/16/32 variants used in networking, the
//! generator here is caller-supplied text of arbitrary length, so the
//! division runs on an explicit bit-sequence rather than a machine word.
//!
//! # Examples
//!
//! ```
//! use logic_codes::codes::crc::CrcGenerator;
//!
//! let gen = CrcGenerator::new("1101").unwrap();
//! assert_eq!(gen.remainder("100100").unwrap(), "001");
//! assert!(gen.verify("100100001").unwrap());
//! ```

use std::fmt::{Display, Formatter};

use bitvec::prelude::*;
use log::debug;

use crate::bits;
use crate::error::{Error, Result};

/// A validated CRC generator polynomial (divisor).
///
/// The polynomial is given as a bit-string of length >= 2; its length
/// minus one is the number of check bits appended to the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcGenerator {
    taps: BitVec<u8, Msb0>,
}

impl CrcGenerator {
    /// Parses and validates a generator polynomial.
    ///
    /// # Arguments
    ///
    /// * `generator` - Divisor bit-string, e.g. `"1101"` for x^3 + x^2 + 1
    ///
    /// # Returns
    ///
    /// A new `CrcGenerator` or an error if the polynomial is malformed
    /// or shorter than 2 bits
    pub fn new(generator: &str) -> Result<Self> {
        let taps = bits::parse(generator)?;
        if taps.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "generator polynomial needs at least 2 bits, got {}",
                taps.len()
            )));
        }
        Ok(CrcGenerator { taps })
    }

    /// Number of check bits this generator produces (polynomial degree).
    pub fn width(&self) -> usize {
        self.taps.len() - 1
    }

    /// Computes the CRC remainder for a data bit-string.
    ///
    /// Appends `width()` zero bits to the data and performs mod-2 long
    /// division by the generator; the result always has exactly
    /// `width()` bits. Data shorter than the generator is rejected.
    pub fn remainder(&self, data: &str) -> Result<String> {
        let data_bits = bits::parse(data)?;
        if data_bits.len() < self.taps.len() {
            return Err(Error::InvalidInput(format!(
                "data needs at least {} bits to divide by a {}-bit generator, got {}",
                self.taps.len(),
                self.taps.len(),
                data_bits.len()
            )));
        }

        let mut dividend = data_bits;
        dividend.resize(dividend.len() + self.width(), false);

        let rem = self.divide(&dividend);
        debug!("crc remainder for {} data bits: {}", data.len(), rem);
        Ok(rem)
    }

    /// Builds the transmitted word: the data followed by its remainder.
    pub fn encode(&self, data: &str) -> Result<String> {
        let mut word = self.remainder(data)?;
        word.insert_str(0, data);
        Ok(word)
    }

    /// Checks a received word (data plus check bits) for integrity.
    ///
    /// Re-runs the division over the word as-is and reports whether the
    /// remainder is all zero. A `false` result means the word was
    /// corrupted in transit.
    pub fn verify(&self, word: &str) -> Result<bool> {
        let word_bits = bits::parse(word)?;
        if word_bits.len() < self.taps.len() {
            return Err(Error::InvalidInput(format!(
                "received word needs at least {} bits, got {}",
                self.taps.len(),
                word_bits.len()
            )));
        }
        let rem = self.divide(&word_bits);
        Ok(rem.chars().all(|c| c == '0'))
    }

    /// Mod-2 long division: slides a window the width of the generator
    /// across the dividend, XORing out the generator whenever the
    /// window's leading bit is set.
    fn divide(&self, dividend: &BitSlice<u8, Msb0>) -> String {
        let n = self.taps.len();
        let mut window = dividend[..n].to_bitvec();

        for i in n..dividend.len() {
            if window[0] {
                self.xor_taps(&mut window);
            }
            window.shift_left(1);
            window.set(n - 1, dividend[i]);
        }
        if window[0] {
            self.xor_taps(&mut window);
        }

        // The leading bit is always cleared by now; the remainder is the
        // low width() bits of the window.
        bits::format(&window[1..])
    }

    fn xor_taps(&self, window: &mut BitVec<u8, Msb0>) {
        for (i, tap) in self.taps.iter().enumerate() {
            let bit = window[i] ^ *tap;
            window.set(i, bit);
        }
    }
}

impl Display for CrcGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CRC generator {} ({} check bits)",
            bits::format(&self.taps),
            self.width()
        )
    }
}
