//! Runtime configuration for cipher contexts

use rijndael_api::PaddingPolicy;
use rijndael_params::utils::symmetric::{AES_BLOCK_SIZE, AES_DEFAULT_CAPACITY};

use crate::error::{validate, Result};

/// Per-context limits and padding behaviour
///
/// `capacity` bounds the normalized length of every call: a plaintext whose
/// padded length exceeds it, or a ciphertext longer than it, is rejected
/// with `BufferTooLarge` before any block is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextConfig {
    capacity: usize,
    padding: PaddingPolicy,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            capacity: AES_DEFAULT_CAPACITY,
            padding: PaddingPolicy::Strict,
        }
    }
}

impl ContextConfig {
    /// Set the buffer capacity in bytes
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the padding policy used on decryption
    pub fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    /// Buffer capacity in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Padding policy used on decryption
    pub fn padding(&self) -> PaddingPolicy {
        self.padding
    }

    /// Check that the capacity is a positive multiple of the block size
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            self.capacity != 0 && self.capacity % AES_BLOCK_SIZE == 0,
            "capacity",
            "must be a positive multiple of 16",
        )
    }
}
