//! Multi-word folding registers.
//!
//! A folding register holds `BYTES` bytes of not-yet-reduced message. Each
//! aligned block of input is XORed in and the whole register is then carried
//! `BYTES` bytes forward by multiplying every 64-bit pair with the fold pair
//! for that distance. The register only needs reducing to 32 bits at the very
//! end, which is done by draining it one word (or byte) at a time through the
//! Barret steps.
//!
//! ```text
//!  register          after xor_load          after fold
//! [ r0 | r1 ]   ^   [ d0 | d1 ]   ->   [ (r0^d0)*k_lo ^ (r1^d1)*k_hi ]
//! ```
//!
//! The low 32 bits of the register always carry the oldest input, so a single
//! byte or word can be consumed from the bottom with [`FoldRegister::step_byte`]
//! and [`FoldRegister::step_word`] regardless of the register width.

use crate::barret::{reduce_byte_term, reduce_word};
use crate::constants::{FOLD_8, FOLD_16, FoldPair};
use crate::pmul::Pmul;

/// An accumulator register that can absorb and fold aligned blocks.
pub trait FoldRegister: Copy {
    /// Width of the register (and of one block) in bytes.
    const BYTES: usize;

    /// Fold pair for a distance of [`Self::BYTES`].
    const FOLD: FoldPair;

    /// A register holding `crc` in its low 32 bits and zero elsewhere.
    fn from_crc(crc: u32) -> Self;

    /// The low 32 bits of the register.
    fn low32(self) -> u32;

    /// Shift the register right by `bits` and XOR `value` into the low word.
    fn shr_xor(self, bits: u32, value: u32) -> Self;

    /// XOR one block of `BYTES` little-endian bytes into the register and fold
    /// the result forward by one block.
    ///
    /// `block` must be at least `BYTES` long; any excess is ignored.
    fn fold_block<P: Pmul>(self, block: &[u8]) -> Self;

    /// Consume one little-endian word from the bottom of the register.
    #[inline(always)]
    fn step_word<P: Pmul>(self, word: u32) -> Self {
        self.shr_xor(32, reduce_word::<P>(self.low32() ^ word))
    }

    /// Consume one byte from the bottom of the register.
    #[inline(always)]
    fn step_byte<P: Pmul>(self, byte: u8) -> Self {
        self.shr_xor(8, reduce_byte_term::<P>(self.low32() ^ byte as u32))
    }
}

/// Fold one 64-bit pair with `k`.
#[inline(always)]
pub fn fold_pair<P: Pmul>(pair: u64, k: FoldPair) -> u64 {
    P::pmul(pair as u32, k.lo) ^ P::pmul((pair >> 32) as u32, k.hi)
}

/// The 2x32 register.
impl FoldRegister for u64 {
    const BYTES: usize = 8;
    const FOLD: FoldPair = FOLD_8;

    #[inline(always)]
    fn from_crc(crc: u32) -> Self {
        crc as u64
    }

    #[inline(always)]
    fn low32(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn shr_xor(self, bits: u32, value: u32) -> Self {
        (self >> bits) ^ value as u64
    }

    #[inline(always)]
    fn fold_block<P: Pmul>(self, block: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&block[..8]);
        fold_pair::<P>(self ^ u64::from_le_bytes(buf), Self::FOLD)
    }
}

/// The 4x32 register.
impl FoldRegister for u128 {
    const BYTES: usize = 16;
    const FOLD: FoldPair = FOLD_16;

    #[inline(always)]
    fn from_crc(crc: u32) -> Self {
        crc as u128
    }

    #[inline(always)]
    fn low32(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn shr_xor(self, bits: u32, value: u32) -> Self {
        (self >> bits) ^ value as u128
    }

    #[inline(always)]
    fn fold_block<P: Pmul>(self, block: &[u8]) -> Self {
        let mut buf = [0u8; 16];
        buf.copy_from_slice(&block[..16]);
        let reg = self ^ u128::from_le_bytes(buf);
        let lo = fold_pair::<P>(reg as u64, Self::FOLD);
        let hi = fold_pair::<P>((reg >> 64) as u64, Self::FOLD);
        lo as u128 | (hi as u128) << 64
    }
}
