//! Secret data types with guaranteed zeroization
//!
//! This module provides type-safe wrappers for sensitive data that ensure
//! proper cleanup and zeroization when the data is no longer needed.

use core::convert::{AsMut, AsRef};
use core::fmt;
use core::ops::{Deref, DerefMut};
use rijndael_api::error::{validate, Result};
use rijndael_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Type-safe size guarantees at compile time
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Secret bytes of a runtime length with a compile-time upper bound
///
/// Backs storage whose size depends on a runtime choice, such as a root key
/// of 16, 24 or 32 bytes, without heap allocation. Only the first `len`
/// bytes are observable; the whole backing array is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BoundedSecret<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedSecret<N> {
    /// Copy `bytes` into a new bounded secret
    ///
    /// Fails if `bytes` is longer than the capacity `N`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::max_length("secret material", bytes.len(), N)?;
        let mut data = [0u8; N];
        data[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            data,
            len: bytes.len(),
        })
    }

    /// Create a secret of `len` bytes filled in place by `fill`
    ///
    /// `len` is clamped to the capacity `N`.
    pub fn generate<F: FnOnce(&mut [u8])>(len: usize, fill: F) -> Self {
        let len = len.min(N);
        let mut secret = Self { data: [0u8; N], len };
        fill(secret.as_mut_slice());
        secret
    }

    /// Number of active bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no bytes are active
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of bytes this container can hold
    pub const fn capacity() -> usize {
        N
    }

    /// Active bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Active bytes, mutably
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }
}

impl<const N: usize> AsRef<[u8]> for BoundedSecret<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> AsMut<[u8]> for BoundedSecret<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl<const N: usize> PartialEq for BoundedSecret<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.as_slice(), other.as_slice())
    }
}

impl<const N: usize> Eq for BoundedSecret<N> {}

impl<const N: usize> fmt::Debug for BoundedSecret<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedSecret<{}>(len={}, [REDACTED])", N, self.len)
    }
}

/// Guard that zeroizes a borrowed value when it goes out of scope
///
/// Used for transient working state that lives on the stack.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Wrap `value` so it is wiped when the guard drops
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}
