pub mod bits;
pub mod codes;
pub mod error;

pub use codes::{checksum, crc, hamming, parity};
pub use error::{Error, Result};
