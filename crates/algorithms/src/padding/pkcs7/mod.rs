//! PKCS#7 padding (RFC 5652 section 6.3)
//!
//! `n = block_size - data_len % block_size` bytes of value `n` are appended,
//! so the count is always in `1..=block_size` and block-aligned data gains a
//! full extra block.

use rijndael_api::PaddingPolicy;
use rijndael_internal::constant_time::ct_mask;
use rijndael_params::utils::symmetric::PKCS7_MAX_BLOCK_SIZE;

use subtle::ConstantTimeEq;

use crate::error::{validate, Error, Result};

/// Outcome of [`add_padding`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padded {
    /// Length of data plus padding
    pub padded_len: usize,
    /// Value (and count) of the pad bytes written
    pub pad_value: u8,
}

/// Outcome of [`remove_padding`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unpadded {
    /// Length of the data once the padding is dropped
    pub unpadded_len: usize,
    /// Number of pad bytes removed
    pub removed: usize,
}

fn validate_block_size(block_size: usize) -> Result<()> {
    validate::parameter(block_size != 0, "block_size", "must be non-zero")?;
    validate::max_length("PKCS#7 block size", block_size, PKCS7_MAX_BLOCK_SIZE)
}

/// Number of pad bytes appended to `data_len` bytes of data
pub fn pad_len(data_len: usize, block_size: usize) -> Result<usize> {
    validate_block_size(block_size)?;
    Ok(block_size - data_len % block_size)
}

/// Pad the first `data_len` bytes of `buf` in place
///
/// Fails on a zero block size, a block size above 128, a padded length that
/// overflows `usize`, or a `buf` too short to hold the padded data. Bytes of `buf` past the padded length are left
/// untouched.
pub fn add_padding(buf: &mut [u8], data_len: usize, block_size: usize) -> Result<Padded> {
    let n = pad_len(data_len, block_size)?;
    let padded_len = data_len.checked_add(n).ok_or(Error::Length {
        context: "PKCS#7 padded length",
        expected: usize::MAX - n,
        actual: data_len,
    })?;
    validate::min_length("PKCS#7 output buffer", buf.len(), padded_len)?;

    // n <= 128 after validation
    let pad_value = n as u8;
    buf[data_len..padded_len].fill(pad_value);

    Ok(Padded {
        padded_len,
        pad_value,
    })
}

/// Strip padding from the first `data_len` bytes of `buf`
///
/// The count is read from the last byte. Under [`PaddingPolicy::Strict`]
/// the final `min(block_size, data_len)` bytes are scanned without
/// data-dependent branches and the count must be in `1..=block_size` with
/// every pad byte equal to it. [`PaddingPolicy::Lenient`] trusts the last
/// byte but still rejects zero or a count larger than `data_len`.
pub fn remove_padding(
    buf: &[u8],
    data_len: usize,
    block_size: usize,
    policy: PaddingPolicy,
) -> Result<Unpadded> {
    validate_block_size(block_size)?;
    validate::non_empty("PKCS#7 data", data_len)?;
    validate::min_length("PKCS#7 input buffer", buf.len(), data_len)?;

    let data = &buf[..data_len];
    let n = data[data_len - 1];
    let count = n as usize;

    let valid = match policy {
        PaddingPolicy::Strict => strict_check(data, n, block_size),
        PaddingPolicy::Lenient => count != 0 && count <= data_len,
    };
    if !valid {
        return Err(Error::Padding {
            context: "PKCS#7 unpad",
        });
    }

    Ok(Unpadded {
        unpadded_len: data_len - count,
        removed: count,
    })
}

/// Scan the trailing window for a well-formed pad of value `n`
fn strict_check(data: &[u8], n: u8, block_size: usize) -> bool {
    let window = block_size.min(data.len());

    let mut bad = ct_mask(n == 0) | ct_mask(n as usize > window);
    for (i, &b) in data.iter().rev().take(window).enumerate() {
        // window <= 128, so i fits in u8
        let in_pad = ct_mask((i as u8) < n);
        bad |= in_pad & (b ^ n);
    }
    bad.ct_eq(&0).into()
}
