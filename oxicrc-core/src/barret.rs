//! Barret reduction steps.
//!
//! Each step takes the running (inverted) register already XORed with the next
//! input byte or little-endian word and returns the register after that input
//! has been divided through by the polynomial. Two carry-less multiplies replace
//! the eight (or thirty-two) conditional shifts of bit-serial division.
//!
//! Two conventions are provided and produce identical remainders:
//!
//! - **Full product** ([`reduce_byte`], [`reduce_word`]): the quotient estimate
//!   is multiplied back by [`BARRET_POLY`] and the remainder is read from the
//!   high half of the 64-bit product.
//! - **Reflected low half** ([`reduce_byte_reflected`],
//!   [`reduce_word_reflected`]): only low 32-bit halves are ever used; the
//!   second multiply runs on the bit-reversed quotient against the
//!   normal-order polynomial [`POLY`].

use crate::constants::{BARRET, BARRET_POLY, POLY};
use crate::pmul::{Pmul, rbit};

/// Remainder contribution of the low byte of `c`, full-product convention.
///
/// The caller combines it with the surviving register bits:
/// `(c >> 8) ^ reduce_byte_term::<P>(c)`.
#[inline(always)]
pub fn reduce_byte_term<P: Pmul>(c: u32) -> u32 {
    let b = P::pmul_lo(c << 24, BARRET);
    ((P::pmul(b, BARRET_POLY) >> 32) as u32) ^ b
}

/// One byte step, full-product convention.
#[inline(always)]
pub fn reduce_byte<P: Pmul>(c: u32) -> u32 {
    (c >> 8) ^ reduce_byte_term::<P>(c)
}

/// One word step, full-product convention.
#[inline(always)]
pub fn reduce_word<P: Pmul>(c: u32) -> u32 {
    let b = P::pmul_lo(c, BARRET);
    ((P::pmul(b, BARRET_POLY) >> 32) as u32) ^ b
}

/// One byte step, reflected low-half convention.
#[inline(always)]
pub fn reduce_byte_reflected<P: Pmul>(c: u32) -> u32 {
    (c >> 8) ^ rbit(P::pmul_lo(rbit(P::pmul_lo(c << 24, BARRET)), POLY))
}

/// One word step, reflected low-half convention.
#[inline(always)]
pub fn reduce_word_reflected<P: Pmul>(c: u32) -> u32 {
    rbit(P::pmul_lo(rbit(P::pmul_lo(c, BARRET)), POLY))
}
