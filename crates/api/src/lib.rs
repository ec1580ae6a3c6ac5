//! Public API traits and types for the rijndael library
//!
//! This crate provides the public API surface of the rijndael ecosystem:
//! the unified error type and its status codes, the block-cipher and
//! cipher-context traits, and the small value types shared by every front end.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, Status};
pub use types::{Mode, PaddingPolicy};

// Re-export all traits from the traits module
pub use traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
