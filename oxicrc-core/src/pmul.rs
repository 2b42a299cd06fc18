//! Carry-less (GF(2) polynomial) multiplication.
//!
//! A carry-less multiply treats each operand as a polynomial over GF(2), with
//! bit `i` the coefficient of `x^i`, and returns the exact unreduced product:
//! partial products are combined with XOR, so nothing ever carries from one bit
//! position into the next.
//!
//! Every strategy below implements [`Pmul`] and must return the same 64-bit
//! product for every pair of operands:
//!
//! | Strategy         | Construction                                         |
//! |------------------|------------------------------------------------------|
//! | [`BitSerial`]    | one shifted XOR per set bit of `a`                   |
//! | [`Sparse`]       | 16 ordinary integer multiplies on 4-phase masks       |
//! | [`Narrow16`]     | schoolbook composition of four 16x16 multiplies       |
//! | [`Reflected`]    | two low-half multiplies joined through bit reversal   |
//! | [`Clmul`]        | PCLMULQDQ / PMULL when compiled in, else [`Sparse`]   |

use std::marker::PhantomData;

/// A 32x32 -> 64 carry-less multiply strategy.
pub trait Pmul {
    /// Short strategy name, used in kernel names and benchmark ids.
    const NAME: &'static str;

    /// Full unreduced product of `a` and `b`.
    fn pmul(a: u32, b: u32) -> u64;

    /// Low 32 bits of the product.
    ///
    /// Strategies override this when the truncated product is cheaper than the
    /// full one.
    #[inline(always)]
    fn pmul_lo(a: u32, b: u32) -> u32 {
        Self::pmul(a, b) as u32
    }
}

/// Reverse the bit order of a 32-bit word.
#[inline(always)]
pub const fn rbit(a: u32) -> u32 {
    a.reverse_bits()
}

/// Bit-serial carry-less multiply.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitSerial;

impl Pmul for BitSerial {
    const NAME: &'static str = "bitserial";

    #[inline]
    fn pmul(a: u32, b: u32) -> u64 {
        let b = b as u64;
        let mut x = 0u64;
        for i in 0..32 {
            if a & (1 << i) != 0 {
                x ^= b << i;
            }
        }
        x
    }

    /// Branch-free: `a & (1 << i)` is either zero or a power of two, so an
    /// integer multiply by it is a shift of `b`.
    #[inline]
    fn pmul_lo(a: u32, b: u32) -> u32 {
        let mut x = 0u32;
        for i in 0..32 {
            x ^= (a & (1 << i)).wrapping_mul(b);
        }
        x
    }
}

/// Masked-integer ("sparse") carry-less multiply.
///
/// Each operand is split into four sub-streams holding every fourth bit. Within
/// one pair of sub-streams at most eight partial products land on any result
/// bit, so the carries an ordinary multiply produces stay within the three bits
/// above it and never reach the next bit of the same phase. Masking each
/// product down to its phase recovers the XOR of the partial products.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sparse;

const PHASE: [u32; 4] = [0x1111_1111, 0x2222_2222, 0x4444_4444, 0x8888_8888];
const PHASE64: [u64; 4] = [
    0x1111_1111_1111_1111,
    0x2222_2222_2222_2222,
    0x4444_4444_4444_4444,
    0x8888_8888_8888_8888,
];

impl Pmul for Sparse {
    const NAME: &'static str = "sparse";

    #[inline]
    fn pmul(a: u32, b: u32) -> u64 {
        let a0 = (a & PHASE[0]) as u64;
        let a1 = (a & PHASE[1]) as u64;
        let a2 = (a & PHASE[2]) as u64;
        let a3 = (a & PHASE[3]) as u64;
        let b0 = (b & PHASE[0]) as u64;
        let b1 = (b & PHASE[1]) as u64;
        let b2 = (b & PHASE[2]) as u64;
        let b3 = (b & PHASE[3]) as u64;
        (PHASE64[0] & ((a0 * b0) ^ (a1 * b3) ^ (a2 * b2) ^ (a3 * b1)))
            ^ (PHASE64[1] & ((a0 * b1) ^ (a1 * b0) ^ (a2 * b3) ^ (a3 * b2)))
            ^ (PHASE64[2] & ((a0 * b2) ^ (a1 * b1) ^ (a2 * b0) ^ (a3 * b3)))
            ^ (PHASE64[3] & ((a0 * b3) ^ (a1 * b2) ^ (a2 * b1) ^ (a3 * b0)))
    }

    #[inline]
    fn pmul_lo(a: u32, b: u32) -> u32 {
        let mut x = 0u32;
        for i in 0..4usize {
            let a_ = a & PHASE[i];
            for j in 0..4usize {
                let b_ = b & PHASE[(j + 4 - i) & 3];
                x ^= PHASE[j] & a_.wrapping_mul(b_);
            }
        }
        x
    }
}

/// 16x16 -> 32 carry-less multiply, the narrow primitive [`Narrow16`] builds on.
#[inline]
pub const fn pmul16(a: u16, b: u16) -> u32 {
    let b = b as u32;
    let mut x = 0u32;
    let mut i = 0;
    while i < 16 {
        if a & (1 << i) != 0 {
            x ^= b << i;
        }
        i += 1;
    }
    x
}

/// Carry-less multiply composed from four 16x16 products.
///
/// Long multiplication on 16-bit digits, with XOR in place of addition:
///
/// ```text
///                 [ ah | al ]
///               x [ bh | bl ]
///   -----------------------------
///                 [ al * bl ]
///            [ ah * bl ]
///            [ al * bh ]
///       [ ah * bh ]
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrow16;

impl Pmul for Narrow16 {
    const NAME: &'static str = "narrow16";

    #[inline]
    fn pmul(a: u32, b: u32) -> u64 {
        let (al, ah) = (a as u16, (a >> 16) as u16);
        let (bl, bh) = (b as u16, (b >> 16) as u16);
        let lolo = pmul16(al, bl) as u64;
        let mid = (pmul16(ah, bl) ^ pmul16(al, bh)) as u64;
        let hihi = pmul16(ah, bh) as u64;
        lolo ^ (mid << 16) ^ (hihi << 32)
    }

    /// The high-by-high product never reaches the low word.
    #[inline]
    fn pmul_lo(a: u32, b: u32) -> u32 {
        let (al, ah) = (a as u16, (a >> 16) as u16);
        let (bl, bh) = (b as u16, (b >> 16) as u16);
        pmul16(al, bl) ^ ((pmul16(ah, bl) ^ pmul16(al, bh)) << 16)
    }
}

/// Full product from a strategy that is only trusted for its low half.
///
/// Reversing both 32-bit operands reverses their 63-bit product, so the low
/// word of `rbit(a) * rbit(b)`, reversed again, holds bits 31..=62 of `a * b`.
/// Hardware that only returns the low half of a multiply can produce the high
/// half this way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reflected<P>(PhantomData<P>);

impl<P: Pmul> Pmul for Reflected<P> {
    const NAME: &'static str = "reflected";

    #[inline]
    fn pmul(a: u32, b: u32) -> u64 {
        let lo = P::pmul_lo(a, b) as u64;
        let hi = (rbit(P::pmul_lo(rbit(a), rbit(b))) >> 1) as u64;
        lo | (hi << 32)
    }

    #[inline(always)]
    fn pmul_lo(a: u32, b: u32) -> u32 {
        P::pmul_lo(a, b)
    }
}

/// Hardware carry-less multiply.
///
/// With the `simd` feature and a target that enables PCLMULQDQ (x86_64) or the
/// AES/PMULL extension (aarch64) at compile time, this is a single instruction.
/// Anywhere else it is [`Sparse`]. The choice is made when the crate is built,
/// never at run time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clmul;

impl Clmul {
    /// Whether the hardware instruction was compiled in.
    pub const HARDWARE: bool = hw::HARDWARE;
}

impl Pmul for Clmul {
    const NAME: &'static str = "clmul";

    #[inline(always)]
    fn pmul(a: u32, b: u32) -> u64 {
        hw::pmul(a, b)
    }
}

#[cfg(all(feature = "simd", target_arch = "x86_64", target_feature = "pclmulqdq"))]
mod hw {
    use core::arch::x86_64::{_mm_clmulepi64_si128, _mm_cvtsi64_si128, _mm_cvtsi128_si64};

    pub const HARDWARE: bool = true;

    #[inline(always)]
    pub fn pmul(a: u32, b: u32) -> u64 {
        // SAFETY: the build enables pclmulqdq for the whole crate (see cfg above),
        // and SSE2 is part of the x86_64 baseline.
        unsafe {
            let a = _mm_cvtsi64_si128(a as i64);
            let b = _mm_cvtsi64_si128(b as i64);
            _mm_cvtsi128_si64(_mm_clmulepi64_si128(a, b, 0x00)) as u64
        }
    }
}

#[cfg(all(feature = "simd", target_arch = "aarch64", target_feature = "aes"))]
mod hw {
    use core::arch::aarch64::vmull_p64;

    pub const HARDWARE: bool = true;

    #[inline(always)]
    pub fn pmul(a: u32, b: u32) -> u64 {
        // SAFETY: the build enables the aes extension (PMULL) for the whole crate.
        unsafe { vmull_p64(a as u64, b as u64) as u64 }
    }
}

#[cfg(not(any(
    all(feature = "simd", target_arch = "x86_64", target_feature = "pclmulqdq"),
    all(feature = "simd", target_arch = "aarch64", target_feature = "aes"),
)))]
mod hw {
    use super::{Pmul, Sparse};

    pub const HARDWARE: bool = false;

    #[inline(always)]
    pub fn pmul(a: u32, b: u32) -> u64 {
        Sparse::pmul(a, b)
    }
}
