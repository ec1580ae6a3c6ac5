//! Trait implemented by the stateful cipher contexts

use crate::error::Result;
use crate::types::Mode;

/// A keyed cipher context that drives a chaining mode over caller buffers
///
/// Implementations own their chaining vector, so every operation takes
/// `&mut self`.
pub trait SymmetricCipher {
    /// Name of the underlying algorithm, e.g. `"AES-128"`
    fn algorithm(&self) -> &'static str;

    /// Encrypt `input` into `output` and return the ciphertext length
    fn encrypt(
        &mut self,
        mode: Mode,
        input: &[u8],
        output: &mut [u8],
        use_padding: bool,
    ) -> Result<usize>;

    /// Decrypt `input` into `output` and return the plaintext length
    fn decrypt(
        &mut self,
        mode: Mode,
        input: &[u8],
        output: &mut [u8],
        use_padding: bool,
    ) -> Result<usize>;
}
