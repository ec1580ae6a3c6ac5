//! Runtime variant selection by key length

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use rijndael_api::{Mode, SymmetricCipher};
use rijndael_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

use super::{Aes128Context, Aes192Context, Aes256Context};
use crate::config::ContextConfig;
use crate::error::{Error, Result};

/// An AES context whose variant is chosen from the key length
#[derive(Debug)]
pub enum AnyAesContext {
    /// 16-byte key
    Aes128(Aes128Context),
    /// 24-byte key
    Aes192(Aes192Context),
    /// 32-byte key
    Aes256(Aes256Context),
}

macro_rules! dispatch {
    ($self:expr, $ctx:ident => $body:expr) => {
        match $self {
            AnyAesContext::Aes128($ctx) => $body,
            AnyAesContext::Aes192($ctx) => $body,
            AnyAesContext::Aes256($ctx) => $body,
        }
    };
}

impl AnyAesContext {
    /// Bind `key` and `iv` with the default configuration
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        Self::with_config(key, iv, ContextConfig::default())
    }

    /// Bind `key` and `iv`, picking the variant from `key.len()`
    pub fn with_config(key: &[u8], iv: &[u8], config: ContextConfig) -> Result<Self> {
        match key.len() {
            AES128_KEY_SIZE => Ok(Self::Aes128(Aes128Context::with_config(key, iv, config)?)),
            AES192_KEY_SIZE => Ok(Self::Aes192(Aes192Context::with_config(key, iv, config)?)),
            AES256_KEY_SIZE => Ok(Self::Aes256(Aes256Context::with_config(key, iv, config)?)),
            actual => Err(Error::InvalidKey {
                context: "AES key must be 16, 24 or 32 bytes",
                actual,
            }),
        }
    }

    /// Replace the root key
    ///
    /// A key of a different length switches the variant; configuration and
    /// the restorable chaining vector carry over.
    pub fn rekey(&mut self, key: &[u8]) -> Result<()> {
        let same_variant = matches!(
            (&*self, key.len()),
            (Self::Aes128(_), AES128_KEY_SIZE)
                | (Self::Aes192(_), AES192_KEY_SIZE)
                | (Self::Aes256(_), AES256_KEY_SIZE)
        );
        if same_variant {
            return dispatch!(self, ctx => ctx.rekey(key));
        }

        let (iv, config) = dispatch!(&*self, ctx => (ctx.initial_iv, *ctx.config()));
        *self = Self::with_config(key, &iv, config)?;
        Ok(())
    }

    /// Replace the chaining vector
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        dispatch!(self, ctx => ctx.set_iv(iv))
    }

    /// Restore the chaining vector bound at construction or by `set_iv`
    pub fn reset_iv(&mut self) {
        dispatch!(self, ctx => ctx.reset_iv())
    }

    /// Current chaining vector
    pub fn iv(&self) -> &[u8; AES_BLOCK_SIZE] {
        dispatch!(self, ctx => ctx.iv())
    }

    /// Blocks processed by the last successful encrypt call
    pub fn encrypted_blocks(&self) -> usize {
        dispatch!(self, ctx => ctx.encrypted_blocks())
    }

    /// Blocks processed by the last successful decrypt call
    pub fn decrypted_blocks(&self) -> usize {
        dispatch!(self, ctx => ctx.decrypted_blocks())
    }

    /// Largest normalized length a single call accepts
    pub fn capacity(&self) -> usize {
        dispatch!(self, ctx => ctx.capacity())
    }

    /// Root key length in bytes
    pub fn key_len(&self) -> usize {
        dispatch!(self, ctx => ctx.key_len())
    }

    /// Encrypt with ECB
    pub fn ecb_encrypt(&mut self, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        dispatch!(self, ctx => ctx.ecb_encrypt(input, output, use_padding))
    }

    /// Decrypt with ECB
    pub fn ecb_decrypt(&mut self, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        dispatch!(self, ctx => ctx.ecb_decrypt(input, output, use_padding))
    }

    /// Encrypt with CBC
    pub fn cbc_encrypt(&mut self, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        dispatch!(self, ctx => ctx.cbc_encrypt(input, output, use_padding))
    }

    /// Decrypt with CBC
    pub fn cbc_decrypt(&mut self, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        dispatch!(self, ctx => ctx.cbc_decrypt(input, output, use_padding))
    }

    /// Encrypt into a freshly allocated buffer
    #[cfg(feature = "alloc")]
    pub fn encrypt_vec(&mut self, mode: Mode, input: &[u8], use_padding: bool) -> Result<Vec<u8>> {
        dispatch!(self, ctx => ctx.encrypt_vec(mode, input, use_padding))
    }

    /// Decrypt into a freshly allocated buffer
    #[cfg(feature = "alloc")]
    pub fn decrypt_vec(&mut self, mode: Mode, input: &[u8], use_padding: bool) -> Result<Vec<u8>> {
        dispatch!(self, ctx => ctx.decrypt_vec(mode, input, use_padding))
    }
}

impl SymmetricCipher for AnyAesContext {
    fn algorithm(&self) -> &'static str {
        dispatch!(self, ctx => ctx.algorithm())
    }

    fn encrypt(&mut self, mode: Mode, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        dispatch!(self, ctx => SymmetricCipher::encrypt(ctx, mode, input, output, use_padding))
    }

    fn decrypt(&mut self, mode: Mode, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        dispatch!(self, ctx => SymmetricCipher::decrypt(ctx, mode, input, output, use_padding))
    }
}
