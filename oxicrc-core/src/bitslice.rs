//! Bit-sliced wide reduction state.
//!
//! The state holds `L` independent 64-bit lanes, stored transposed: plane `j`
//! is an `L`-bit word whose bit `i` is bit `j` of lane `i`. Multiplying every
//! lane by the same constant then becomes a sequence of whole-plane XORs, one
//! per set bit of the constant, with no per-lane work at all.
//!
//! ```text
//!            lane 0   lane 1        lane L-1
//! plane 0  [   b0   |   b0   | ... |   b0   ]
//! plane 1  [   b1   |   b1   | ... |   b1   ]
//!   ...
//! plane 63 [   b63  |   b63  | ... |   b63  ]
//! ```
//!
//! Lane 0 is the live register. A block of `8L` bytes loads one little-endian
//! 64-bit stream into each lane; folding then carries every lane `8L` bytes
//! forward. Two plane buffers are kept so a fold can write its products into
//! the inactive buffer while reading the active one.

use std::ops::{BitXor, BitXorAssign, Shl, Shr};

use crate::constants::{FOLD_128, FOLD_256, FOLD_512, FOLD_1024, FoldPair};

/// Number of bit planes: one per bit of a 64-bit lane.
pub const PLANES: usize = 64;

/// A plane word; its bit width is the lane count.
pub trait Plane:
    Copy
    + PartialEq
    + BitXor<Output = Self>
    + BitXorAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Number of lanes.
    const LANES: usize;
    /// The all-zero plane.
    const ZERO: Self;
    /// Fold pair for one block of `8 * LANES` bytes.
    const FOLD: FoldPair;

    /// A plane with only lane 0 set to `bit` (0 or 1).
    fn from_bit(bit: u64) -> Self;

    /// Lane 0's bit of this plane.
    fn lane0(self) -> u64;
}

macro_rules! impl_plane {
    ($($ty:ty => $fold:expr),* $(,)?) => {
        $(
            impl Plane for $ty {
                const LANES: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const FOLD: FoldPair = $fold;

                #[inline(always)]
                fn from_bit(bit: u64) -> Self {
                    bit as $ty
                }

                #[inline(always)]
                fn lane0(self) -> u64 {
                    (self & 1) as u64
                }
            }
        )*
    };
}

impl_plane! {
    u16 => FOLD_128,
    u32 => FOLD_256,
    u64 => FOLD_512,
    u128 => FOLD_1024,
}

/// Double-buffered bit-sliced state.
#[derive(Debug, Clone)]
pub struct SliceState<W: Plane> {
    planes: [[W; PLANES]; 2],
    active: usize,
}

impl<W: Plane> SliceState<W> {
    /// Bytes consumed by one [`xor_load`](Self::xor_load).
    pub const BLOCK: usize = 8 * W::LANES;

    /// A state whose lane 0 holds `reg` and whose other lanes are zero.
    pub fn new(reg: u64) -> Self {
        let mut state = Self {
            planes: [[W::ZERO; PLANES]; 2],
            active: 0,
        };
        state.insert64(reg);
        state
    }

    #[inline(always)]
    fn live(&self) -> &[W; PLANES] {
        &self.planes[self.active]
    }

    #[inline(always)]
    fn live_mut(&mut self) -> &mut [W; PLANES] {
        &mut self.planes[self.active]
    }

    /// Transpose one block into the planes and XOR it in.
    ///
    /// Stream `i` is the little-endian u64 at byte `8 * i` of `block` and lands
    /// in lane `i`. `block` must be at least [`Self::BLOCK`] bytes long.
    pub fn xor_load(&mut self, block: &[u8]) {
        let planes = self.live_mut();
        for (lane, chunk) in block[..Self::BLOCK].chunks_exact(8).enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            let stream = u64::from_le_bytes(buf);
            for (j, plane) in planes.iter_mut().enumerate() {
                *plane ^= W::from_bit((stream >> j) & 1) << lane as u32;
            }
        }
    }

    /// Multiply every lane by `k` and make the products live.
    ///
    /// The low 32 planes are multiplied by `k.lo` and the high 32 planes by
    /// `k.hi`; the two 63-bit products are summed into the inactive buffer,
    /// which then becomes the live one.
    pub fn fold(&mut self, k: FoldPair) {
        let [first, second] = &mut self.planes;
        let (cur, next) = if self.active == 0 {
            (first, second)
        } else {
            (second, first)
        };
        *next = [W::ZERO; PLANES];
        for shift in 0..32 {
            if (k.lo >> shift) & 1 != 0 {
                for j in 0..32 {
                    next[j + shift] ^= cur[j];
                }
            }
            if (k.hi >> shift) & 1 != 0 {
                for j in 0..32 {
                    next[j + shift] ^= cur[32 + j];
                }
            }
        }
        self.active ^= 1;
    }

    /// Lane 0 as a 64-bit value.
    pub fn extract64(&self) -> u64 {
        self.live()
            .iter()
            .enumerate()
            .fold(0, |acc, (j, plane)| acc | plane.lane0() << j)
    }

    /// Low 32 bits of lane 0.
    pub fn extract32(&self) -> u32 {
        self.live()[..32]
            .iter()
            .enumerate()
            .fold(0, |acc, (j, plane)| acc | (plane.lane0() as u32) << j)
    }

    /// Overwrite lane 0 with `value`, leaving the other lanes untouched.
    pub fn insert64(&mut self, value: u64) {
        for (j, plane) in self.live_mut().iter_mut().enumerate() {
            let bit = (value >> j) & 1;
            *plane ^= W::from_bit(plane.lane0() ^ bit);
        }
    }

    /// Shift every plane down one lane and XOR `value` into lane 0.
    ///
    /// Lane 0's old contents are dropped; callers fold them into `value` first.
    pub fn xor_shr64(&mut self, value: u64) {
        for (j, plane) in self.live_mut().iter_mut().enumerate() {
            *plane = (*plane >> 1) ^ W::from_bit((value >> j) & 1);
        }
    }

    /// Move the high 32 planes onto the low 32, XOR `value` into lane 0 and
    /// clear the high planes.
    pub fn xor_shr32(&mut self, value: u32) {
        let planes = self.live_mut();
        for j in 0..32 {
            planes[j] = planes[j + 32] ^ W::from_bit(((value >> j) & 1) as u64);
        }
        for plane in &mut planes[32..] {
            *plane = W::ZERO;
        }
    }

    /// Whether every lane other than lane 0 is zero.
    pub fn is_collapsed(&self) -> bool {
        self.live()
            .iter()
            .all(|&plane| plane ^ W::from_bit(plane.lane0()) == W::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::fold_pair;
    use crate::pmul::BitSerial;

    #[test]
    fn test_insert_extract() {
        let mut s = SliceState::<u32>::new(0xDEAD_BEEF_0123_4567);
        assert_eq!(s.extract64(), 0xDEAD_BEEF_0123_4567);
        assert_eq!(s.extract32(), 0x0123_4567);
        s.insert64(0x55);
        assert_eq!(s.extract64(), 0x55);
        assert!(s.is_collapsed());
    }

    #[test]
    fn test_block_sizes() {
        assert_eq!(SliceState::<u16>::BLOCK, 128);
        assert_eq!(SliceState::<u32>::BLOCK, 256);
        assert_eq!(SliceState::<u64>::BLOCK, 512);
        assert_eq!(SliceState::<u128>::BLOCK, 1024);
    }

    #[test]
    fn test_xor_load_transposes_streams() {
        let mut block = [0u8; 128];
        block[0] = 0x01; // lane 0 bit 0
        block[8 * 3 + 7] = 0x80; // lane 3 bit 63
        let mut s = SliceState::<u16>::new(0);
        s.xor_load(&block);
        assert_eq!(s.extract64(), 1);
        assert!(!s.is_collapsed());
        s.xor_shr64(0);
        s.xor_shr64(0);
        s.xor_shr64(0);
        assert_eq!(s.extract64(), 1 << 63);
    }

    #[test]
    fn test_fold_multiplies_each_lane() {
        let mut block = [0u8; 256];
        for (i, b) in block.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(31).wrapping_add(7);
        }
        let mut s = SliceState::<u32>::new(0);
        s.xor_load(&block);
        s.fold(u32::FOLD);
        for lane in 0..32 {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&block[8 * lane..8 * lane + 8]);
            let want = fold_pair::<BitSerial>(u64::from_le_bytes(buf), u32::FOLD);
            assert_eq!(s.extract64(), want, "lane {lane}");
            s.xor_shr64(0);
        }
    }

    #[test]
    fn test_xor_shr32() {
        let mut s = SliceState::<u128>::new(0xAAAA_AAAA_0000_FFFF);
        s.xor_shr32(0x0F0F_0F0F);
        assert_eq!(s.extract64(), 0xAAAA_AAAA ^ 0x0F0F_0F0F);
    }
}
