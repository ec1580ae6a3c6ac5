//! Round transforms on the 4x4 column-major state
//!
//! Byte `i` of the state holds row `i % 4` of column `i / 4`.

use super::gf::{gf_mul, xtime};
use super::sbox::{INV_SBOX, SBOX};

/// Block state
pub(crate) type State = [u8; 16];

/// `state[i] = old[SHIFT_ROWS[i]]`; row r rotates left by r
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// `state[i] = old[INV_SHIFT_ROWS[i]]`; row r rotates right by r
const INV_SHIFT_ROWS: [usize; 16] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

#[inline(always)]
pub(crate) fn sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

#[inline(always)]
pub(crate) fn inv_sub_bytes(state: &mut State) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

#[inline(always)]
fn permute(state: &mut State, table: &[usize; 16]) {
    let temp = *state;
    for (dst, &src) in state.iter_mut().zip(table.iter()) {
        *dst = temp[src];
    }
}

#[inline(always)]
pub(crate) fn shift_rows(state: &mut State) {
    permute(state, &SHIFT_ROWS);
}

#[inline(always)]
pub(crate) fn inv_shift_rows(state: &mut State) {
    permute(state, &INV_SHIFT_ROWS);
}

/// Multiply each column by {03}x^3 + {01}x^2 + {01}x + {02}
pub(crate) fn mix_columns(state: &mut State) {
    for column in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (column[0], column[1], column[2], column[3]);
        column[0] = xtime(s0) ^ (xtime(s1) ^ s1) ^ s2 ^ s3;
        column[1] = s0 ^ xtime(s1) ^ (xtime(s2) ^ s2) ^ s3;
        column[2] = s0 ^ s1 ^ xtime(s2) ^ (xtime(s3) ^ s3);
        column[3] = (xtime(s0) ^ s0) ^ s1 ^ s2 ^ xtime(s3);
    }
}

/// Multiply each column by {0b}x^3 + {0d}x^2 + {09}x + {0e}
pub(crate) fn inv_mix_columns(state: &mut State) {
    for column in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (column[0], column[1], column[2], column[3]);
        column[0] = gf_mul(s0, 0x0e) ^ gf_mul(s1, 0x0b) ^ gf_mul(s2, 0x0d) ^ gf_mul(s3, 0x09);
        column[1] = gf_mul(s0, 0x09) ^ gf_mul(s1, 0x0e) ^ gf_mul(s2, 0x0b) ^ gf_mul(s3, 0x0d);
        column[2] = gf_mul(s0, 0x0d) ^ gf_mul(s1, 0x09) ^ gf_mul(s2, 0x0e) ^ gf_mul(s3, 0x0b);
        column[3] = gf_mul(s0, 0x0b) ^ gf_mul(s1, 0x0d) ^ gf_mul(s2, 0x09) ^ gf_mul(s3, 0x0e);
    }
}

/// XOR one 16-byte round key into the state
#[inline(always)]
pub(crate) fn add_round_key(state: &mut State, round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key.iter()) {
        *s ^= *k;
    }
}
