//! Block cipher implementations with type-level variant parameters
//!
//! The three AES key lengths share a single engine, [`Aes<V>`], whose
//! variant marker `V` carries the key length, round count and schedule size
//! as associated constants. Mode drivers borrow the engine and run it over
//! block-aligned buffers.
//!
//! ## Example usage
//!
//! ```
//! use rijndael_algorithms::{Aes128, BlockCipher, BlockMode, Cbc};
//!
//! let cipher = Aes128::new(b"0123456789abcdef").unwrap();
//! let mut iv = *b"ABCDEFGHIJKLMNOP";
//!
//! let mut buf = *b"sixteen byte msgsixteen byte msg";
//! Cbc::new(&cipher, &mut iv).encrypt_blocks(&mut buf).unwrap();
//!
//! let mut iv = *b"ABCDEFGHIJKLMNOP";
//! Cbc::new(&cipher, &mut iv).decrypt_blocks(&mut buf).unwrap();
//! assert_eq!(&buf, b"sixteen byte msgsixteen byte msg");
//! ```

use rijndael_api::CipherAlgorithm;
use rijndael_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES128_SCHEDULE_SIZE, AES192_KEY_SIZE, AES192_ROUNDS,
    AES192_SCHEDULE_SIZE, AES256_KEY_SIZE, AES256_ROUNDS, AES256_SCHEDULE_SIZE, AES_BLOCK_SIZE,
};

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{Aes, Aes128, Aes192, Aes256};
pub use modes::{BlockMode, Cbc, Ecb};

/// Marker trait for specific AES key sizes
///
/// The triple `(KEY_SIZE, ROUNDS, SCHEDULE_SIZE)` is fixed per variant so a
/// schedule built for one key length can never be driven with another's
/// round count.
pub trait AesVariant: CipherAlgorithm {
    /// Number of rounds
    const ROUNDS: usize;

    /// Key length in 32-bit words
    const NK: usize;

    /// Expanded key schedule size in bytes, `16 * (ROUNDS + 1)`
    const SCHEDULE_SIZE: usize;
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

impl AesVariant for Aes128Algorithm {
    const ROUNDS: usize = AES128_ROUNDS;
    const NK: usize = AES128_KEY_SIZE / 4;
    const SCHEDULE_SIZE: usize = AES128_SCHEDULE_SIZE;
}

/// Type-level constants for AES-192
pub enum Aes192Algorithm {}

impl CipherAlgorithm for Aes192Algorithm {
    const KEY_SIZE: usize = AES192_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

impl AesVariant for Aes192Algorithm {
    const ROUNDS: usize = AES192_ROUNDS;
    const NK: usize = AES192_KEY_SIZE / 4;
    const SCHEDULE_SIZE: usize = AES192_SCHEDULE_SIZE;
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl AesVariant for Aes256Algorithm {
    const ROUNDS: usize = AES256_ROUNDS;
    const NK: usize = AES256_KEY_SIZE / 4;
    const SCHEDULE_SIZE: usize = AES256_SCHEDULE_SIZE;
}
