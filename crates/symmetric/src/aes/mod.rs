//! AES cipher contexts
//!
//! An [`AesContext`] owns everything one (key, IV) stream needs: the root
//! key, its expanded schedule, the chaining vector and the block counters.
//! Operations that advance the chaining vector take `&mut self`.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;

use rijndael_algorithms::block::modes::{decrypt_into, encrypt_into};
use rijndael_algorithms::{
    Aes, Aes128Algorithm, Aes192Algorithm, Aes256Algorithm, AesVariant, Cbc, Ecb,
};
use rijndael_api::{Mode, PaddingPolicy, SymmetricCipher};
use rijndael_common::BoundedSecret;
use rijndael_params::utils::symmetric::{AES_BLOCK_SIZE, AES_MAX_KEY_SIZE};
use zeroize::Zeroize;

use crate::config::ContextConfig;
#[cfg(feature = "alloc")]
use crate::error::Error;
use crate::error::{validate, Result, SymmetricResultExt};

mod any;
mod keys;

pub use any::AnyAesContext;
pub use keys::{generate_iv, generate_key};

/// Keyed AES context for the variant `V`
pub struct AesContext<V: AesVariant> {
    key: BoundedSecret<AES_MAX_KEY_SIZE>,
    cipher: Aes<V>,
    iv: [u8; AES_BLOCK_SIZE],
    initial_iv: [u8; AES_BLOCK_SIZE],
    encrypted_blocks: usize,
    decrypted_blocks: usize,
    config: ContextConfig,
}

/// AES-128 context
pub type Aes128Context = AesContext<Aes128Algorithm>;

/// AES-192 context
pub type Aes192Context = AesContext<Aes192Algorithm>;

/// AES-256 context
pub type Aes256Context = AesContext<Aes256Algorithm>;

fn read_iv(iv: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
    validate::length("AES initialization vector", iv.len(), AES_BLOCK_SIZE)?;
    let mut out = [0u8; AES_BLOCK_SIZE];
    out.copy_from_slice(iv);
    Ok(out)
}

impl<V: AesVariant> AesContext<V> {
    /// Bind `key` and `iv` with the default configuration
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        Self::with_config(key, iv, ContextConfig::default())
    }

    /// Bind `key` and `iv` with an explicit configuration
    ///
    /// Fails if the key is not `V::KEY_SIZE` bytes, the IV is not 16 bytes
    /// or the configuration is invalid.
    pub fn with_config(key: &[u8], iv: &[u8], config: ContextConfig) -> Result<Self> {
        config.validate()?;
        let iv = read_iv(iv)?;
        let cipher = Aes::<V>::with_key(key).map_primitive_err(V::name())?;
        let key = BoundedSecret::from_slice(key)?;

        trace_event!(
            debug,
            variant = V::name(),
            capacity = config.capacity(),
            "context initialized"
        );

        Ok(Self {
            key,
            cipher,
            iv,
            initial_iv: iv,
            encrypted_blocks: 0,
            decrypted_blocks: 0,
            config,
        })
    }

    /// Replace the root key and regenerate the schedule
    ///
    /// The chaining vector and counters are reset. On error the context is
    /// left unchanged.
    pub fn rekey(&mut self, key: &[u8]) -> Result<()> {
        let cipher = Aes::<V>::with_key(key).map_primitive_err(V::name())?;
        self.key = BoundedSecret::from_slice(key)?;
        self.cipher = cipher;
        self.iv = self.initial_iv;
        self.encrypted_blocks = 0;
        self.decrypted_blocks = 0;
        trace_event!(debug, variant = V::name(), "context rekeyed");
        Ok(())
    }

    /// Replace the chaining vector
    ///
    /// The new vector also becomes the one [`reset_iv`](Self::reset_iv)
    /// restores.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        let iv = read_iv(iv)?;
        self.iv = iv;
        self.initial_iv = iv;
        Ok(())
    }

    /// Restore the chaining vector bound at construction or by `set_iv`
    ///
    /// CBC calls advance the vector, so decrypting what this context just
    /// encrypted needs a reset first.
    pub fn reset_iv(&mut self) {
        self.iv = self.initial_iv;
    }

    /// Current chaining vector
    pub fn iv(&self) -> &[u8; AES_BLOCK_SIZE] {
        &self.iv
    }

    /// Blocks processed by the last successful encrypt call
    pub fn encrypted_blocks(&self) -> usize {
        self.encrypted_blocks
    }

    /// Blocks processed by the last successful decrypt call
    pub fn decrypted_blocks(&self) -> usize {
        self.decrypted_blocks
    }

    /// Largest normalized length a single call accepts
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Padding policy applied on decryption
    pub fn padding_policy(&self) -> PaddingPolicy {
        self.config.padding()
    }

    /// Active configuration
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Root key length in bytes
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Algorithm name, e.g. `"AES-256"`
    pub fn algorithm_name(&self) -> &'static str {
        V::name()
    }

    fn finish_encrypt(&mut self, len: usize) -> usize {
        self.encrypted_blocks = len / AES_BLOCK_SIZE;
        len
    }

    fn finish_decrypt(&mut self, blocks: usize, len: usize) -> usize {
        self.decrypted_blocks = blocks;
        len
    }

    /// Encrypt with ECB; returns the ciphertext length
    pub fn ecb_encrypt(&mut self, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        let capacity = self.capacity();
        let len = encrypt_into(&mut Ecb::new(&self.cipher), input, output, use_padding, capacity)?;
        Ok(self.finish_encrypt(len))
    }

    /// Decrypt with ECB; returns the plaintext length
    pub fn ecb_decrypt(&mut self, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        let (capacity, policy) = (self.capacity(), self.padding_policy());
        let len = decrypt_into(
            &mut Ecb::new(&self.cipher),
            input,
            output,
            use_padding,
            capacity,
            policy,
        )?;
        Ok(self.finish_decrypt(input.len() / AES_BLOCK_SIZE, len))
    }

    /// Encrypt with CBC, advancing the chaining vector; returns the
    /// ciphertext length
    pub fn cbc_encrypt(&mut self, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        let capacity = self.capacity();
        let len = encrypt_into(
            &mut Cbc::new(&self.cipher, &mut self.iv),
            input,
            output,
            use_padding,
            capacity,
        )?;
        Ok(self.finish_encrypt(len))
    }

    /// Decrypt with CBC, advancing the chaining vector; returns the
    /// plaintext length
    pub fn cbc_decrypt(&mut self, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        let (capacity, policy) = (self.capacity(), self.padding_policy());
        let len = decrypt_into(
            &mut Cbc::new(&self.cipher, &mut self.iv),
            input,
            output,
            use_padding,
            capacity,
            policy,
        )?;
        Ok(self.finish_decrypt(input.len() / AES_BLOCK_SIZE, len))
    }

    /// Encrypt into a freshly allocated buffer
    ///
    /// Reports `AllocationFailed` if the output cannot be reserved.
    #[cfg(feature = "alloc")]
    pub fn encrypt_vec(&mut self, mode: Mode, input: &[u8], use_padding: bool) -> Result<Vec<u8>> {
        let total = rijndael_algorithms::block::modes::normalized_len(input.len(), use_padding);
        validate::capacity("encrypt_vec", total, self.capacity())?;

        let mut out = allocate("encrypt_vec", total)?;
        let len = SymmetricCipher::encrypt(self, mode, input, &mut out, use_padding)?;
        out.truncate(len);
        Ok(out)
    }

    /// Decrypt into a freshly allocated buffer
    ///
    /// Reports `AllocationFailed` if the output cannot be reserved.
    #[cfg(feature = "alloc")]
    pub fn decrypt_vec(&mut self, mode: Mode, input: &[u8], use_padding: bool) -> Result<Vec<u8>> {
        validate::capacity("decrypt_vec", input.len(), self.capacity())?;

        let mut out = allocate("decrypt_vec", input.len())?;
        let len = SymmetricCipher::decrypt(self, mode, input, &mut out, use_padding)?;
        out.truncate(len);
        Ok(out)
    }
}

#[cfg(feature = "alloc")]
fn allocate(context: &'static str, len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed {
            context,
            requested: len,
        })?;
    out.resize(len, 0);
    Ok(out)
}

impl<V: AesVariant> SymmetricCipher for AesContext<V> {
    fn algorithm(&self) -> &'static str {
        V::name()
    }

    fn encrypt(&mut self, mode: Mode, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        match mode {
            Mode::Ecb => self.ecb_encrypt(input, output, use_padding),
            Mode::Cbc => self.cbc_encrypt(input, output, use_padding),
        }
    }

    fn decrypt(&mut self, mode: Mode, input: &[u8], output: &mut [u8], use_padding: bool) -> Result<usize> {
        match mode {
            Mode::Ecb => self.ecb_decrypt(input, output, use_padding),
            Mode::Cbc => self.cbc_decrypt(input, output, use_padding),
        }
    }
}

impl<V: AesVariant> Drop for AesContext<V> {
    fn drop(&mut self) {
        self.iv.zeroize();
        self.initial_iv.zeroize();
    }
}

impl<V: AesVariant> fmt::Debug for AesContext<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesContext")
            .field("algorithm", &V::name())
            .field("key", &"[REDACTED]")
            .field("encrypted_blocks", &self.encrypted_blocks)
            .field("decrypted_blocks", &self.decrypted_blocks)
            .field("config", &self.config)
            .finish()
    }
}
