//! Bit-sliced kernels.
//!
//! Large aligned blocks are spread across `L` lanes, one little-endian 64-bit
//! stream per lane, and all lanes are folded `8L` bytes forward at once with
//! plane XORs. When fewer than two blocks remain the lanes are collapsed one at
//! a time: lane 0 is folded 8 bytes forward onto lane 1, which becomes the new
//! lane 0. The last lane drains through Barret word and byte steps.

use std::marker::PhantomData;

use oxicrc_core::barret::{reduce_byte_term, reduce_word};
use oxicrc_core::bitslice::{Plane, SliceState};
use oxicrc_core::constants::FOLD_8;
use oxicrc_core::fold::fold_pair;
use oxicrc_core::pmul::{Narrow16, Pmul};

use crate::dispatch::{can_fold, can_step, read_u32, read_u64};

/// Bit-sliced kernel with plane word `W` and multiply strategy `P` for the
/// narrow steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitSliced<W, P>(PhantomData<(W, P)>);

impl<W: Plane, P: Pmul> BitSliced<W, P> {
    fn process(crc: u32, data: &[u8]) -> u32 {
        let block = SliceState::<W>::BLOCK;
        let mut state = SliceState::<W>::new(crc as u64);
        let mut pos = 0;
        while pos < data.len() {
            if can_fold(data, pos, block) {
                state.xor_load(&data[pos..]);
                state.fold(W::FOLD);
                pos += block;
            } else if can_fold(data, pos, 8) {
                let lane = state.extract64() ^ read_u64(data, pos);
                state.xor_shr64(fold_pair::<P>(lane, FOLD_8));
                pos += 8;
            } else if can_step(data, pos, 4) {
                let c = state.extract32() ^ read_u32(data, pos);
                state.xor_shr32(reduce_word::<P>(c));
                pos += 4;
            } else {
                let reg = state.extract64();
                let c = reg as u32 ^ data[pos] as u32;
                state.insert64((reg >> 8) ^ reduce_byte_term::<P>(c) as u64);
                pos += 1;
            }
        }
        state.extract32()
    }
}

/// 16 lanes, 128-byte blocks.
pub type BitSliced16 = BitSliced<u16, Narrow16>;
/// 32 lanes, 256-byte blocks.
pub type BitSliced32 = BitSliced<u32, Narrow16>;
/// 64 lanes, 512-byte blocks.
pub type BitSliced64 = BitSliced<u64, Narrow16>;
/// 128 lanes, 1024-byte blocks.
pub type BitSliced128 = BitSliced<u128, Narrow16>;

impl_kernel! { BitSliced:
    BitSliced16 => "crc32c_bitsliced_16x2x32",
    BitSliced32 => "crc32c_bitsliced_32x2x32",
    BitSliced64 => "crc32c_bitsliced_64x2x32",
    BitSliced128 => "crc32c_bitsliced_128x2x32",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Slice8;
    use oxicrc_core::selftest::xorshift_bytes;
    use oxicrc_core::traits::Crc32cKernel;

    #[test]
    fn test_check_value() {
        assert_eq!(BitSliced16::checksum(0, b"123456789"), 0xE306_9283);
        assert_eq!(BitSliced128::checksum(0, b"123456789"), 0xE306_9283);
    }

    #[test]
    fn test_blocks_at_every_offset() {
        let data = xorshift_bytes(2 * 1024 + 64, 7);
        for offset in [0, 1, 3, 4, 5, 8, 13] {
            let data = &data[offset..];
            for len in [255, 256, 257, 511, 512, 600, 1024, 2047, 2048] {
                let want = Slice8::checksum(0, &data[..len]);
                assert_eq!(BitSliced16::checksum(0, &data[..len]), want, "16 lanes {offset}/{len}");
                assert_eq!(BitSliced32::checksum(0, &data[..len]), want, "32 lanes {offset}/{len}");
                assert_eq!(BitSliced64::checksum(0, &data[..len]), want, "64 lanes {offset}/{len}");
                assert_eq!(BitSliced128::checksum(0, &data[..len]), want, "128 lanes {offset}/{len}");
            }
        }
    }
}
