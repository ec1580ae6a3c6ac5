//! Block cipher modes of operation
//!
//! [`Ecb`] and [`Cbc`] borrow a keyed engine and transform block-aligned
//! buffers in place. [`encrypt_into`] and [`decrypt_into`] wrap either mode
//! with the input checks, capacity limit and PKCS#7 handling shared by every
//! front end.

use rijndael_api::{Mode, PaddingPolicy, Result};
use rijndael_internal::zeroing::secure_zero;
use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::error::validate;
use crate::padding::pkcs7;

pub mod cbc;
pub mod ecb;

// Re-exports
pub use cbc::Cbc;
pub use ecb::Ecb;

/// A block-aligned mode of operation
pub trait BlockMode {
    /// Which chaining mode this driver implements
    const MODE: Mode;

    /// Encrypt a whole number of blocks in place, returning the block count
    fn encrypt_blocks(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Decrypt a whole number of blocks in place, returning the block count
    fn decrypt_blocks(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Returns the mode name
    fn mode_name() -> &'static str {
        Self::MODE.name()
    }
}

fn encrypt_context(mode: Mode) -> &'static str {
    match mode {
        Mode::Ecb => "ECB encrypt",
        Mode::Cbc => "CBC encrypt",
    }
}

fn decrypt_context(mode: Mode) -> &'static str {
    match mode {
        Mode::Ecb => "ECB decrypt",
        Mode::Cbc => "CBC decrypt",
    }
}

/// Length of the ciphertext produced for `input_len` bytes of plaintext
///
/// With padding the result is the next multiple of the block size strictly
/// greater than `input_len`; without padding it is `input_len` itself.
pub fn normalized_len(input_len: usize, use_padding: bool) -> usize {
    if use_padding {
        (input_len / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE
    } else {
        input_len
    }
}

/// Encrypt `input` into `output` with `mode`
///
/// Returns the ciphertext length. All length checks happen before the first
/// block is touched: empty input, unaligned input without padding, a
/// normalized length above `capacity`, or an `output` shorter than the
/// normalized length.
pub fn encrypt_into<M: BlockMode>(
    mode: &mut M,
    input: &[u8],
    output: &mut [u8],
    use_padding: bool,
    capacity: usize,
) -> Result<usize> {
    let context = encrypt_context(M::MODE);

    validate::non_empty(context, input.len())?;
    if !use_padding {
        validate::block_aligned(context, input.len(), AES_BLOCK_SIZE)?;
    }

    let total = normalized_len(input.len(), use_padding);
    validate::capacity(context, total, capacity)?;
    validate::min_length("output buffer", output.len(), total)?;

    let out = &mut output[..total];
    out[..input.len()].copy_from_slice(input);
    if use_padding {
        let padded = pkcs7::add_padding(out, input.len(), AES_BLOCK_SIZE)?;
        trace_event!(
            trace,
            mode = M::mode_name(),
            pad_value = padded.pad_value,
            "padding applied"
        );
        debug_assert_eq!(padded.padded_len, total);
    }

    let blocks = mode.encrypt_blocks(out)?;
    trace_event!(
        debug,
        mode = M::mode_name(),
        input_len = input.len(),
        output_len = total,
        blocks,
        "encrypted"
    );
    Ok(blocks * AES_BLOCK_SIZE)
}

/// Decrypt `input` into `output` with `mode`
///
/// Returns the plaintext length, which is the unpadded length when
/// `use_padding` is set. Ciphertext must be a non-empty whole number of
/// blocks no larger than `capacity`. If the padding check fails the
/// decrypted bytes in `output` are wiped before the error is returned.
pub fn decrypt_into<M: BlockMode>(
    mode: &mut M,
    input: &[u8],
    output: &mut [u8],
    use_padding: bool,
    capacity: usize,
    policy: PaddingPolicy,
) -> Result<usize> {
    let context = decrypt_context(M::MODE);

    validate::non_empty(context, input.len())?;
    validate::block_aligned(context, input.len(), AES_BLOCK_SIZE)?;
    validate::capacity(context, input.len(), capacity)?;
    validate::min_length("output buffer", output.len(), input.len())?;

    let out = &mut output[..input.len()];
    out.copy_from_slice(input);
    let blocks = mode.decrypt_blocks(out)?;
    debug_assert_eq!(blocks * AES_BLOCK_SIZE, input.len());

    let len = if use_padding {
        match pkcs7::remove_padding(out, out.len(), AES_BLOCK_SIZE, policy) {
            Ok(unpadded) => {
                trace_event!(
                    trace,
                    mode = M::mode_name(),
                    removed = unpadded.removed,
                    "padding removed"
                );
                unpadded.unpadded_len
            }
            Err(e) => {
                secure_zero(out);
                trace_event!(warn, mode = M::mode_name(), blocks, "padding rejected");
                return Err(e.into());
            }
        }
    } else {
        out.len()
    };

    trace_event!(
        debug,
        mode = M::mode_name(),
        input_len = input.len(),
        output_len = len,
        blocks,
        "decrypted"
    );
    Ok(len)
}
