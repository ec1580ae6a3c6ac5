//! Traits shared by the block engine and the cipher contexts

pub mod block;
pub mod symmetric;

pub use block::{BlockCipher, CipherAlgorithm};
pub use symmetric::SymmetricCipher;
