//! Small value types shared by the cipher front ends

use core::fmt;

/// Block chaining mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Each block is processed independently
    Ecb,
    /// Cipher block chaining through a 16-byte vector
    Cbc,
}

impl Mode {
    /// Mode name
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How trailing PKCS#7 padding is checked on decryption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaddingPolicy {
    /// Count must be in `1..=block_size` and every pad byte must equal it.
    /// The check runs in constant time over the final block.
    #[default]
    Strict,
    /// Only the last byte is read; a count of zero or one larger than the
    /// data is still rejected.
    Lenient,
}
