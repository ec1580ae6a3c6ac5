//! AES block engine and modes of operation
//!
//! This crate implements the Rijndael/AES block cipher for 128, 192 and
//! 256-bit keys as one engine parameterized by variant constants, the ECB and
//! CBC mode drivers that run it over caller-supplied buffers, and PKCS#7
//! padding. It is usable in both `std` and `no_std` environments and never
//! allocates.
//!
//! # Security Features
//!
//! - Root keys and expanded schedules are held in zeroizing containers
//! - Transient block state is wiped after every block
//! - Strict padding checks run in constant time over the final block

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[macro_use]
mod trace;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{
    Aes, Aes128, Aes128Algorithm, Aes192, Aes192Algorithm, Aes256, Aes256Algorithm, AesVariant,
    BlockMode, Cbc, Ecb,
};

// Padding schemes
pub mod padding;
pub use padding::pkcs7::{Padded, Unpadded};

// Re-export the traits the engine implements
pub use rijndael_api::{BlockCipher, CipherAlgorithm, PaddingPolicy};
