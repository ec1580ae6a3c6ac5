//! Stateful AES cipher contexts for the rijndael library
//!
//! This crate binds a root key, its expanded schedule, a chaining vector and
//! per-call block counters into a reusable handle, [`AesContext`], that
//! drives the ECB and CBC modes from `rijndael-algorithms` over
//! caller-supplied buffers. [`AnyAesContext`] selects the variant from the
//! key length at runtime.
//!
//! ```
//! use rijndael_symmetric::Aes128Context;
//!
//! let mut ctx = Aes128Context::new(b"0123456789abcdef", b"ABCDEFGHIJKLMNOP").unwrap();
//! let mut ciphertext = [0u8; 64];
//! let n = ctx.cbc_encrypt(b"ExactBlock16BytesX", &mut ciphertext, true).unwrap();
//! assert_eq!(n, 32);
//!
//! ctx.reset_iv();
//! let mut plaintext = [0u8; 64];
//! let m = ctx.cbc_decrypt(&ciphertext[..n], &mut plaintext, true).unwrap();
//! assert_eq!(&plaintext[..m], b"ExactBlock16BytesX");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod trace;

pub mod aes;
pub mod config;
pub mod error;

// Re-export main types for convenience
pub use aes::{generate_iv, generate_key, Aes128Context, Aes192Context, Aes256Context, AesContext, AnyAesContext};
pub use config::ContextConfig;

// Re-export the API error system instead of custom error types
pub use rijndael_api::error::{validate, Error, Result, ResultExt, Status};
pub use rijndael_api::{Mode, PaddingPolicy, SymmetricCipher};
