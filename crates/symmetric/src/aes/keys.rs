//! Random key and chaining-vector generation

use rand::{CryptoRng, RngCore};
use rijndael_algorithms::{Aes, Aes128, AesVariant, Cbc};
use rijndael_api::BlockCipher;
use rijndael_common::BoundedSecret;
use rijndael_params::utils::symmetric::{AES_BLOCK_SIZE, AES_MAX_KEY_SIZE};

/// Generate a random root key of the length `V` requires
pub fn generate_key<V: AesVariant, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> BoundedSecret<AES_MAX_KEY_SIZE> {
    Aes::<V>::generate_key(rng)
}

/// Generate a random 16-byte chaining vector
pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; AES_BLOCK_SIZE] {
    Cbc::<Aes128>::generate_iv(rng)
}
