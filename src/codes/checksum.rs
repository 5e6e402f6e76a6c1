//! 16-bit one's-complement checksum implementation.
//!
//! The sender splits the data into 16-bit blocks, sums them as unsigned
//! integers, folds any carry beyond 16 bits back into the low bits
//! (end-around carry), and transmits the one's-complement of the result.
//! The receiver sums every block of the received word, checksum included;
//! after folding and complementing, a zero result means no error was
//! detected. This is a detection-only code: it cannot locate or repair a
//! corrupted bit.
//!
//! Input length must be a positive multiple of 16; a partial trailing
//! block is rejected rather than silently padded or truncated.

use log::trace;

use crate::bits;
use crate::error::{Error, Result};

/// Width of one checksum block in bits
pub const BLOCK_BITS: usize = 16;

/// Computes the 16-bit one's-complement checksum of a bit-string.
///
/// # Arguments
///
/// * `data` - Bit-string whose length is a positive multiple of 16
///
/// # Returns
///
/// The 16-character checksum bit-string, or an error for malformed or
/// partial-block input
pub fn checksum16(data: &str) -> Result<String> {
    let sum = folded_sum(data)?;
    let checksum = !sum & 0xFFFF;
    Ok(format!("{checksum:016b}"))
}

/// Checks a received word (data blocks followed by the checksum block).
///
/// Returns `true` when the folded sum of every block complements to
/// zero, i.e. no error was detected.
pub fn verify_checksum(word: &str) -> Result<bool> {
    let sum = folded_sum(word)?;
    Ok(!sum & 0xFFFF == 0)
}

/// Sums all 16-bit blocks with end-around carry, leaving a 16-bit value.
fn folded_sum(data: &str) -> Result<u32> {
    let data_bits = bits::parse(data)?;
    if data_bits.len() % BLOCK_BITS != 0 {
        return Err(Error::InvalidInput(format!(
            "data length must be a multiple of {} bits, got {}",
            BLOCK_BITS,
            data_bits.len()
        )));
    }

    let mut sum: u64 = 0;
    for block in data_bits.chunks_exact(BLOCK_BITS) {
        let value: u64 = block.iter().fold(0, |acc, bit| acc << 1 | u64::from(*bit));
        sum += value;
    }

    while sum >> BLOCK_BITS != 0 {
        trace!("folding checksum carry {:#x}", sum >> BLOCK_BITS);
        sum = (sum & 0xFFFF) + (sum >> BLOCK_BITS);
    }
    Ok(sum as u32)
}
