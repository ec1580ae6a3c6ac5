//! Electronic Codebook (ECB) mode
//!
//! Every block is transformed independently with the same key schedule, so
//! equal plaintext blocks produce equal ciphertext blocks. Blocks are
//! processed sequentially in buffer order.

use rijndael_api::{BlockCipher, Mode, Result};
use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;

use super::BlockMode;
use crate::error::validate;

/// ECB driver borrowing a keyed block cipher
pub struct Ecb<'a, B: BlockCipher> {
    cipher: &'a B,
}

impl<'a, B: BlockCipher> Ecb<'a, B> {
    /// Creates a new ECB driver over `cipher`
    pub fn new(cipher: &'a B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockCipher> BlockMode for Ecb<'_, B> {
    const MODE: Mode = Mode::Ecb;

    fn encrypt_blocks(&mut self, buf: &mut [u8]) -> Result<usize> {
        validate::block_aligned("ECB encrypt", buf.len(), AES_BLOCK_SIZE)?;
        for block in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(buf.len() / AES_BLOCK_SIZE)
    }

    fn decrypt_blocks(&mut self, buf: &mut [u8]) -> Result<usize> {
        validate::block_aligned("ECB decrypt", buf.len(), AES_BLOCK_SIZE)?;
        for block in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(buf.len() / AES_BLOCK_SIZE)
    }
}
