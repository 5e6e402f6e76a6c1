//! Hamming(7,4) error correction code implementation.
//!
//! The (7,4) Hamming code encodes 4 data bits into 7 bits by adding 3
//! parity bits at positions 1, 2 and 4, giving the layout
//! `p1 p2 d1 p3 d2 d3 d4`. Each parity bit covers the positions whose
//! 1-indexed binary representation has the corresponding bit set, so at
//! decode time the three parity-check failures read out directly as the
//! binary position of a single corrupted bit.
//!
//! The code corrects any single-bit error, including one that hits a
//! parity bit. It cannot detect double-bit errors: two flips produce a
//! nonzero syndrome pointing at a third, innocent position, and the
//! "correction" silently yields wrong data. That is an inherent property
//! of the (7,4) code, not a defect of this implementation.
//!
//! # Examples
//!
//! ```
//! use logic_codes::codes::hamming;
//!
//! let code = hamming::encode("1011").unwrap();
//! assert_eq!(code, "0110011");
//!
//! let decoded = hamming::decode("0010011").unwrap(); // bit 2 flipped
//! assert_eq!(decoded.error_position, 2);
//! assert_eq!(decoded.data, "1011");
//! ```

use log::debug;

use crate::bits;
use crate::error::Result;

/// Number of data bits per codeword
pub const DATA_BITS: usize = 4;
/// Total codeword length (data plus parity)
pub const CODE_BITS: usize = 7;

/// Outcome of decoding a 7-bit word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// 1-indexed position of the corrected bit within the codeword;
    /// 0 when no error was detected
    pub error_position: usize,
    /// The 4 data bits after correction
    pub data: String,
}

impl Decoded {
    /// True when the received word carried no detectable error.
    pub fn is_clean(&self) -> bool {
        self.error_position == 0
    }
}

/// Encodes 4 data bits into a 7-bit Hamming codeword.
///
/// # Arguments
///
/// * `data` - Exactly 4 bits, `d1 d2 d3 d4`
///
/// # Returns
///
/// The 7-bit codeword `p1 p2 d1 p3 d2 d3 d4`, or an error if the input
/// is not exactly 4 binary characters
pub fn encode(data: &str) -> Result<String> {
    let d = parse_bits::<DATA_BITS>(data)?;

    let p1 = d[0] ^ d[1] ^ d[3];
    let p2 = d[0] ^ d[2] ^ d[3];
    let p3 = d[1] ^ d[2] ^ d[3];

    // Parity bits sit at positions 1, 2 and 4; this interleaving is what
    // makes the decoder's syndrome read out as a position number.
    let code = [p1, p2, d[0], p3, d[1], d[2], d[3]];
    Ok(render_bits(&code))
}

/// Decodes a 7-bit word, correcting a single-bit error if present.
///
/// # Arguments
///
/// * `code` - Exactly 7 bits, possibly corrupted in one position
///
/// # Returns
///
/// The error position (0 for none) and the corrected 4 data bits. A
/// flipped parity bit still reports its position, but the data bits are
/// untouched by the correction in that case.
pub fn decode(code: &str) -> Result<Decoded> {
    let mut c = parse_bits::<CODE_BITS>(code)?;

    // Each syndrome bit re-checks one parity group over the received word.
    let s1 = c[0] ^ c[2] ^ c[4] ^ c[6];
    let s2 = c[1] ^ c[2] ^ c[5] ^ c[6];
    let s3 = c[3] ^ c[4] ^ c[5] ^ c[6];

    let error_position = (s3 as usize) * 4 + (s2 as usize) * 2 + (s1 as usize);
    if error_position != 0 {
        debug!("hamming syndrome points at position {}", error_position);
        c[error_position - 1] ^= 1;
    }

    let data = [c[2], c[4], c[5], c[6]];
    Ok(Decoded {
        error_position,
        data: render_bits(&data),
    })
}

fn parse_bits<const N: usize>(s: &str) -> Result<[u8; N]> {
    let parsed = bits::parse_exact(s, N)?;
    let mut out = [0u8; N];
    for (i, bit) in parsed.iter().enumerate() {
        out[i] = u8::from(*bit);
    }
    Ok(out)
}

fn render_bits(bits: &[u8]) -> String {
    bits.iter().map(|b| if *b == 1 { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::Rng;

    #[test]
    fn test_encode_known_vector() {
        assert_eq!(encode("1011").unwrap(), "0110011");
        assert_eq!(encode("0000").unwrap(), "0000000");
        assert_eq!(encode("1111").unwrap(), "1111111");
    }

    #[test]
    fn test_decode_clean_word() {
        let decoded = decode("0110011").unwrap();
        assert_eq!(decoded.error_position, 0);
        assert_eq!(decoded.data, "1011");
        assert!(decoded.is_clean());
    }

    #[test]
    fn test_decode_flipped_bit_two() {
        // "0110011" with position 2 flipped
        let decoded = decode("0010011").unwrap();
        assert_eq!(decoded.error_position, 2);
        assert_eq!(decoded.data, "1011");
    }

    #[test]
    fn test_decode_flipped_data_bit() {
        // "0110011" with position 3 (the first data bit) flipped
        let decoded = decode("0100011").unwrap();
        assert_eq!(decoded.error_position, 3);
        assert_eq!(decoded.data, "1011");
    }

    #[test]
    fn test_round_trip_all_data_words() {
        for value in 0u8..16 {
            let data: String = (0..4)
                .map(|i| if value >> (3 - i) & 1 == 1 { '1' } else { '0' })
                .collect();
            let decoded = decode(&encode(&data).unwrap()).unwrap();
            assert_eq!(decoded.error_position, 0);
            assert_eq!(decoded.data, data);
        }
    }

    #[test]
    fn test_corrects_every_single_bit_error() {
        for value in 0u8..16 {
            let data: String = (0..4)
                .map(|i| if value >> (3 - i) & 1 == 1 { '1' } else { '0' })
                .collect();
            let code = encode(&data).unwrap();
            for pos in 1..=CODE_BITS {
                let mut corrupted: Vec<char> = code.chars().collect();
                corrupted[pos - 1] = if corrupted[pos - 1] == '1' { '0' } else { '1' };
                let corrupted: String = corrupted.into_iter().collect();

                let decoded = decode(&corrupted).unwrap();
                assert_eq!(decoded.error_position, pos, "data {data} flip {pos}");
                assert_eq!(decoded.data, data, "data {data} flip {pos}");
            }
        }
    }

    #[test]
    fn test_random_single_errors() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let data: String = (0..4)
                .map(|_| if rng.gen::<bool>() { '1' } else { '0' })
                .collect();
            let code = encode(&data).unwrap();
            let pos = rng.gen_range(1..=CODE_BITS);

            let mut corrupted: Vec<char> = code.chars().collect();
            corrupted[pos - 1] = if corrupted[pos - 1] == '1' { '0' } else { '1' };
            let corrupted: String = corrupted.into_iter().collect();

            let decoded = decode(&corrupted).unwrap();
            assert_eq!(decoded.error_position, pos);
            assert_eq!(decoded.data, data);
        }
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        assert!(matches!(encode("101"), Err(Error::InvalidInput(_))));
        assert!(matches!(encode("10110"), Err(Error::InvalidInput(_))));
        assert!(matches!(decode("0110"), Err(Error::InvalidInput(_))));
        assert!(matches!(decode("01100110"), Err(Error::InvalidInput(_))));
        assert!(matches!(encode("10a1"), Err(Error::InvalidInput(_))));
    }
}
