//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1

/// Low byte of the reduction polynomial 0x11B
const REDUCTION: u8 = 0x1b;

/// Multiply by x (i.e. 2) with reduction
#[inline(always)]
pub(crate) fn xtime(a: u8) -> u8 {
    let hi = a >> 7;
    (a << 1) ^ (hi.wrapping_neg() & REDUCTION)
}

/// Multiply two field elements using shift-and-add (peasant) multiplication
///
/// Runs a fixed eight iterations with masked accumulation, so the timing
/// does not depend on either operand.
#[inline(always)]
pub(crate) fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        a = xtime(a);
        b >>= 1;
    }
    p
}
