//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block uses the chaining vector. The driver borrows
//! the vector mutably and leaves it holding the last ciphertext block it
//! produced or consumed, so consecutive calls continue one stream.
//!
//! This follows NIST SP 800-38A section 6.2.

use rand::{CryptoRng, RngCore};
use rijndael_api::{BlockCipher, Mode, Result};
use rijndael_common::ZeroizeGuard;
use rijndael_internal::constant_time::ct_xor_into;
use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;

use super::BlockMode;
use crate::error::validate;

/// CBC driver borrowing a keyed block cipher and a chaining vector
pub struct Cbc<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: &'a mut [u8; AES_BLOCK_SIZE],
}

impl<'a, B: BlockCipher> Cbc<'a, B> {
    /// Creates a new CBC driver over `cipher` chaining through `iv`
    pub fn new(cipher: &'a B, iv: &'a mut [u8; AES_BLOCK_SIZE]) -> Self {
        Self { cipher, iv }
    }

    /// Current chaining vector
    pub fn iv(&self) -> &[u8; AES_BLOCK_SIZE] {
        &*self.iv
    }

    /// Generate a random chaining vector
    pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; AES_BLOCK_SIZE] {
        let mut iv = [0u8; AES_BLOCK_SIZE];
        rng.fill_bytes(&mut iv);
        iv
    }
}

impl<B: BlockCipher> BlockMode for Cbc<'_, B> {
    const MODE: Mode = Mode::Cbc;

    fn encrypt_blocks(&mut self, buf: &mut [u8]) -> Result<usize> {
        validate::block_aligned("CBC encrypt", buf.len(), AES_BLOCK_SIZE)?;
        for block in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            ct_xor_into(block, &self.iv[..]);
            self.cipher.encrypt_block(block)?;
            self.iv.copy_from_slice(block);
        }
        Ok(buf.len() / AES_BLOCK_SIZE)
    }

    fn decrypt_blocks(&mut self, buf: &mut [u8]) -> Result<usize> {
        validate::block_aligned("CBC decrypt", buf.len(), AES_BLOCK_SIZE)?;

        let mut saved = [0u8; AES_BLOCK_SIZE];
        let mut saved = ZeroizeGuard::new(&mut saved);
        for block in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            saved.copy_from_slice(block);
            self.cipher.decrypt_block(block)?;
            ct_xor_into(block, &self.iv[..]);
            self.iv.copy_from_slice(&saved[..]);
        }
        Ok(buf.len() / AES_BLOCK_SIZE)
    }
}
