//! AES block cipher
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197. All three key lengths run through the same
//! engine; the variant marker supplies the key length, round count and
//! schedule size.

use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use rijndael_api::{BlockCipher, Result as CoreResult};
use rijndael_common::{BoundedSecret, SecretBuffer, ZeroizeGuard};
use rijndael_params::utils::symmetric::{AES_BLOCK_SIZE, AES_MAX_KEY_SIZE, AES_MAX_SCHEDULE_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Aes128Algorithm, Aes192Algorithm, Aes256Algorithm, AesVariant};
use crate::error::{validate, Result};

mod gf;
mod key_schedule;
mod sbox;
mod state;

use state::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, State,
};

/// AES block engine for the variant `V`
///
/// Holds only the expanded key schedule; block operations take `&self`, so
/// one engine can be shared by several mode drivers.
pub struct Aes<V: AesVariant> {
    round_keys: SecretBuffer<AES_MAX_SCHEDULE_SIZE>,
    _variant: PhantomData<V>,
}

/// AES-128 block cipher
pub type Aes128 = Aes<Aes128Algorithm>;

/// AES-192 block cipher
pub type Aes192 = Aes<Aes192Algorithm>;

/// AES-256 block cipher
pub type Aes256 = Aes<Aes256Algorithm>;

impl<V: AesVariant> Aes<V> {
    /// Expand `key` into a new engine
    pub fn with_key(key: &[u8]) -> Result<Self> {
        validate::length(V::name(), key.len(), V::KEY_SIZE)?;

        let mut round_keys = SecretBuffer::zeroed();
        key_schedule::expand_key(
            key,
            V::NK,
            V::ROUNDS,
            &mut round_keys.as_mut_slice()[..V::SCHEDULE_SIZE],
        )?;

        Ok(Self {
            round_keys,
            _variant: PhantomData,
        })
    }

    /// The active part of the schedule
    #[inline(always)]
    fn schedule(&self) -> &[u8] {
        &self.round_keys.as_slice()[..V::SCHEDULE_SIZE]
    }

    #[inline(always)]
    fn round_key(&self, round: usize) -> &[u8] {
        let offset = round * AES_BLOCK_SIZE;
        &self.schedule()[offset..offset + AES_BLOCK_SIZE]
    }

    fn encrypt_state(&self, state: &mut State) {
        add_round_key(state, self.round_key(0));

        for round in 1..V::ROUNDS {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, self.round_key(round));
        }

        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, self.round_key(V::ROUNDS));
    }

    fn decrypt_state(&self, state: &mut State) {
        add_round_key(state, self.round_key(V::ROUNDS));

        for round in (1..V::ROUNDS).rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, self.round_key(round));
            inv_mix_columns(state);
        }

        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, self.round_key(0));
    }

    /// Encrypt one 16-byte block in place
    pub fn encrypt_block_in_place(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut buf: State = [0u8; AES_BLOCK_SIZE];
        let mut state = ZeroizeGuard::new(&mut buf);
        state.copy_from_slice(block);
        self.encrypt_state(&mut state);
        block.copy_from_slice(&state[..]);
        Ok(())
    }

    /// Decrypt one 16-byte block in place
    pub fn decrypt_block_in_place(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut buf: State = [0u8; AES_BLOCK_SIZE];
        let mut state = ZeroizeGuard::new(&mut buf);
        state.copy_from_slice(block);
        self.decrypt_state(&mut state);
        block.copy_from_slice(&state[..]);
        Ok(())
    }
}

impl<V: AesVariant> BlockCipher for Aes<V> {
    type Algorithm = V;
    type Key = BoundedSecret<AES_MAX_KEY_SIZE>;

    fn new(key: &[u8]) -> CoreResult<Self> {
        Ok(Self::with_key(key)?)
    }

    fn encrypt_block(&self, block: &mut [u8]) -> CoreResult<()> {
        Ok(self.encrypt_block_in_place(block)?)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> CoreResult<()> {
        Ok(self.decrypt_block_in_place(block)?)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        BoundedSecret::generate(V::KEY_SIZE, |bytes| rng.fill_bytes(bytes))
    }
}

impl<V: AesVariant> Clone for Aes<V> {
    fn clone(&self) -> Self {
        Self {
            round_keys: self.round_keys.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: AesVariant> Zeroize for Aes<V> {
    fn zeroize(&mut self) {
        self.round_keys.zeroize();
    }
}

// The schedule buffer wipes itself on drop.
impl<V: AesVariant> ZeroizeOnDrop for Aes<V> {}

impl<V: AesVariant> fmt::Debug for Aes<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}([REDACTED])", V::name())
    }
}
