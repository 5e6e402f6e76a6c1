//! Error detection and correction code implementations.
//!
//! This module provides the four coding schemes covered by the digital
//! logic lab:
//! - Parity bits (even/odd)
//! - CRC (mod-2 polynomial division with a caller-supplied generator)
//! - Hamming(7,4) single-error-correcting code
//! - 16-bit one's-complement checksum
//!
//! # Error Detection Codes
//!
//! All four schemes add redundancy to a transmitted bit-string so the
//! receiver can detect (and, for Hamming, correct) transmission errors.
//! They are independent pure functions over bit-strings: none holds
//! state, none depends on another, and every invocation is deterministic.
//!
//! # Examples
//!
//! ```rust
//! use logic_codes::codes::{hamming, parity::{self, ParityMode}};
//!
//! let word = parity::append_parity("1010110", ParityMode::Even).unwrap();
//! assert_eq!(word, "10101100");
//!
//! let code = hamming::encode("1011").unwrap();
//! assert_eq!(code, "0110011");
//! ```

/// Parity bit generation and checking
pub mod parity;
pub use parity::{append_parity, parity_bit, verify_parity, ParityMode};

/// CRC remainder generation and verification
pub mod crc;
pub use crc::CrcGenerator;

/// Hamming(7,4) encoder and single-error-correcting decoder
pub mod hamming;
pub use hamming::{decode as hamming_decode, encode as hamming_encode, Decoded};

/// 16-bit one's-complement checksum
pub mod checksum;
pub use checksum::{checksum16, verify_checksum};
