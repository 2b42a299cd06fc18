//! CRC-32C polynomial constants.
//!
//! Every constant used by the kernels is derived from the single generator
//! polynomial [`POLY_FULL`] by `const fn` arithmetic, so the Barret pair and the
//! fold pairs can never drift apart from the polynomial they reduce by. The
//! published literal values are pinned by the tests at the bottom of this file.
//!
//! ## Bit order
//!
//! CRC-32C is a reflected CRC: bit 0 of the register is the coefficient of the
//! highest power of `x`. The "reflected" constants below are 32-bit reversals of
//! their normal-order counterparts.
//!
//! ## Fold constants
//!
//! Folding a 64-bit pair `(lo, hi)` forward by `d` bytes multiplies `lo` by
//! `x^(8d + 32)` and `hi` by `x^(8d)`, reduced modulo the polynomial. In the
//! reflected domain an extra factor of `x` is absorbed by the multiply, which is
//! why [`fold_constant`] reduces `x^(n - 1)`:
//!
//! ```text
//! [ lo | hi |  ... d bytes ...  ]
//!    |    |                +
//!    |    '----> x^(8d)    [ 64-bit pair ]
//!    '---------> x^(8d+32) [ 64-bit pair ]
//! ```

/// Generator polynomial in normal bit order, without the `x^32` term.
pub const POLY: u32 = 0x1EDC_6F41;

/// Generator polynomial in normal bit order, including the `x^32` term.
pub const POLY_FULL: u64 = 0x1_1EDC_6F41;

/// Generator polynomial in reflected bit order.
pub const POLY_REFLECTED: u32 = 0x82F6_3B78;

/// Barret reciprocal `floor(x^64 / P)`, reflected (its `x^0` term dropped).
pub const BARRET: u32 = 0xDEA7_13F1;

/// Polynomial companion of [`BARRET`] for the full-product convention:
/// `P` reflected with its `x^32` term at bit 0 and its `x^0` term dropped.
pub const BARRET_POLY: u32 = 0x05EC_76F1;

/// A pair of fold multipliers for one fold distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldPair {
    /// Multiplier for the low (earlier) 32-bit word of a 64-bit pair.
    pub lo: u32,
    /// Multiplier for the high (later) 32-bit word of a 64-bit pair.
    pub hi: u32,
}

impl FoldPair {
    /// Fold constants that move a 64-bit pair `bytes` bytes forward.
    pub const fn for_distance(bytes: u32) -> Self {
        let bits = bytes * 8;
        Self {
            lo: fold_constant(bits + 32),
            hi: fold_constant(bits),
        }
    }
}

/// Fold pair for a 4-byte distance.
pub const FOLD_4: FoldPair = FoldPair::for_distance(4);
/// Fold pair for an 8-byte distance (the 2x32 register).
pub const FOLD_8: FoldPair = FoldPair::for_distance(8);
/// Fold pair for a 16-byte distance (the 4x32 register).
pub const FOLD_16: FoldPair = FoldPair::for_distance(16);
/// Fold pair for a 128-byte distance (16-lane bit-sliced blocks).
pub const FOLD_128: FoldPair = FoldPair::for_distance(128);
/// Fold pair for a 256-byte distance (32-lane bit-sliced blocks).
pub const FOLD_256: FoldPair = FoldPair::for_distance(256);
/// Fold pair for a 512-byte distance (64-lane bit-sliced blocks).
pub const FOLD_512: FoldPair = FoldPair::for_distance(512);
/// Fold pair for a 1024-byte distance (128-lane bit-sliced blocks).
pub const FOLD_1024: FoldPair = FoldPair::for_distance(1024);

/// `x^n mod P` in normal bit order.
pub const fn xpow_mod(n: u32) -> u32 {
    let mut r: u64 = 1;
    let mut i = 0;
    while i < n {
        r <<= 1;
        if r & (1 << 32) != 0 {
            r ^= POLY_FULL;
        }
        i += 1;
    }
    r as u32
}

/// Reflected multiplier for `x^bits`, as consumed by the fold step.
pub const fn fold_constant(bits: u32) -> u32 {
    xpow_mod(bits - 1).reverse_bits()
}

/// `floor(x^64 / P)` as a 33-bit polynomial in normal bit order.
pub const fn barret_quotient() -> u64 {
    let p = POLY_FULL as u128;
    let mut rem: u128 = 1 << 64;
    let mut q: u64 = 0;
    let mut shift: i32 = 32;
    while shift >= 0 {
        if rem & (1u128 << (shift + 32)) != 0 {
            rem ^= p << shift;
            q |= 1 << shift;
        }
        shift -= 1;
    }
    q
}

/// Reflect a 33-bit polynomial into 32 bits, dropping its `x^0` term.
const fn reflect_33(p: u64) -> u32 {
    ((p >> 1) as u32).reverse_bits()
}

const _: () = assert!(POLY_FULL as u32 == POLY);
const _: () = assert!(POLY.reverse_bits() == POLY_REFLECTED);
const _: () = assert!(reflect_33(barret_quotient()) == BARRET);
const _: () = assert!(reflect_33(POLY_FULL) == BARRET_POLY);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barret_quotient() {
        assert_eq!(barret_quotient(), 0x1_1F91_CAF6);
        assert_eq!(reflect_33(barret_quotient()), BARRET);
    }

    #[test]
    fn test_xpow_mod_small_powers() {
        // Below the degree of P nothing is reduced.
        assert_eq!(xpow_mod(0), 1);
        assert_eq!(xpow_mod(31), 1 << 31);
        assert_eq!(xpow_mod(32), POLY);
    }

    #[test]
    fn test_published_fold_constants() {
        assert_eq!(FOLD_8, FoldPair { lo: 0x493C_7D27, hi: 0xDD45_AAB8 });
        assert_eq!(FOLD_16, FoldPair { lo: 0xF20C_0DFE, hi: 0x3171_D430 });
        assert_eq!(FOLD_256, FoldPair { lo: 0xDCB1_7AA4, hi: 0x1426_A815 });
        assert_eq!(FOLD_1024, FoldPair { lo: 0xFE31_4258, hi: 0xCDC2_20DD });
    }

    #[test]
    fn test_fold_constants_chain() {
        // The low multiplier for distance d is the high multiplier for d + 4.
        assert_eq!(FOLD_4.lo, FOLD_8.hi);
        assert_eq!(FOLD_4.hi, 1);
        assert_eq!(fold_constant(144), 0x5407_5546);
        assert_eq!(FOLD_8.lo, fold_constant(96));
    }

    #[test]
    fn test_all_distances_distinct() {
        let pairs = [FOLD_4, FOLD_8, FOLD_16, FOLD_128, FOLD_256, FOLD_512, FOLD_1024];
        for (i, a) in pairs.iter().enumerate() {
            for b in &pairs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
