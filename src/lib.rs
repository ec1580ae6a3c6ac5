//! # rijndael
//!
//! A pure Rust AES (Rijndael) block cipher engine with ECB and CBC modes and
//! PKCS#7 padding. The 128, 192 and 256-bit variants share one engine
//! parameterized by variant constants.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rijndael = "0.3"
//! ```
//!
//! ```
//! use rijndael::prelude::*;
//!
//! let mut ctx = Aes256Context::new(&[0x2a; 32], b"ABCDEFGHIJKLMNOP")?;
//! let mut ciphertext = [0u8; 64];
//! let n = ctx.cbc_encrypt(b"attack at dawn", &mut ciphertext, true)?;
//!
//! ctx.reset_iv();
//! let mut plaintext = [0u8; 64];
//! let m = ctx.cbc_decrypt(&ciphertext[..n], &mut plaintext, true)?;
//! assert_eq!(&plaintext[..m], b"attack at dawn");
//! # Ok::<(), rijndael::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: `Vec`-returning convenience API on the contexts
//! - `symmetric` (default): the stateful context wrapper
//! - `serde`: serialization of configuration and status types
//! - `trace`: structured diagnostics through `tracing`
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`rijndael-api`]: error type, status codes and traits
//! - [`rijndael-algorithms`]: block engine, mode drivers and padding
//! - [`rijndael-symmetric`]: keyed contexts

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use rijndael_algorithms as algorithms;
pub use rijndael_api as api;
pub use rijndael_common as common;
pub use rijndael_internal as internal;
pub use rijndael_params as params;

// Feature-gated re-exports
#[cfg(feature = "symmetric")]
pub use rijndael_symmetric as symmetric;

/// Common imports for rijndael users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, Status};

    // Re-export core traits and value types
    pub use crate::api::{BlockCipher, CipherAlgorithm, Mode, PaddingPolicy, SymmetricCipher};

    // Block engine and mode drivers
    pub use crate::algorithms::{
        Aes128, Aes128Algorithm, Aes192, Aes192Algorithm, Aes256, Aes256Algorithm, AesVariant,
        BlockMode, Cbc, Ecb,
    };

    // Re-export security types
    pub use crate::common::{BoundedSecret, SecretBuffer, ZeroizeGuard};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        Aes128Context, Aes192Context, Aes256Context, AesContext, AnyAesContext, ContextConfig,
    };
}
