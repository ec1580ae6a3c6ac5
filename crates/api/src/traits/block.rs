//! Block cipher traits with compile-time algorithm properties

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers keyed once and then used read-only
pub trait BlockCipher: Sized {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Owned key material produced by [`BlockCipher::generate_key`]
    type Key: AsRef<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance from raw key bytes
    ///
    /// Fails unless `key.len() == Self::Algorithm::KEY_SIZE`.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
