//! Rijndael key expansion

use rijndael_common::ZeroizeGuard;
use rijndael_internal::endian::{u32_from_be_bytes, u32_to_be_bytes};
use rijndael_params::utils::symmetric::{AES_MAX_SCHEDULE_SIZE, AES_NB};

use super::sbox::{RCON, SBOX};
use crate::error::{validate, Result};

/// Substitutes each byte in a word using the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = u32_to_be_bytes(word);
    u32::from_be_bytes([
        SBOX[b[0] as usize],
        SBOX[b[1] as usize],
        SBOX[b[2] as usize],
        SBOX[b[3] as usize],
    ])
}

/// Expand `key` (`nk` words) into `AES_NB * (rounds + 1)` words written to
/// `schedule` as big-endian bytes.
///
/// The word buffer used during expansion is wiped before returning.
pub(crate) fn expand_key(key: &[u8], nk: usize, rounds: usize, schedule: &mut [u8]) -> Result<()> {
    validate::parameter(matches!(nk, 4 | 6 | 8), "nk", "key must be 4, 6 or 8 words")?;
    validate::length("AES key", key.len(), nk * 4)?;

    let total_words = AES_NB * (rounds + 1);
    validate::length("AES key schedule", schedule.len(), total_words * 4)?;
    validate::max_length("AES key schedule", schedule.len(), AES_MAX_SCHEDULE_SIZE)?;

    let mut storage = [0u32; AES_MAX_SCHEDULE_SIZE / 4];
    let mut words = ZeroizeGuard::new(&mut storage);

    for (i, chunk) in key.chunks_exact(4).enumerate() {
        words[i] = u32_from_be_bytes(chunk);
    }

    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ ((RCON[i / nk] as u32) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    for (chunk, word) in schedule.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&u32_to_be_bytes(*word));
    }

    Ok(())
}
