//! Secure zeroing of transient buffers

use zeroize::Zeroize;

/// Overwrite `data` with zeros in a way the optimizer cannot elide
#[inline]
pub fn secure_zero(data: &mut [u8]) {
    data.zeroize();
}
