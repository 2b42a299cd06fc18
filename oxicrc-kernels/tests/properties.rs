//! Property-based tests for the kernels.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use oxicrc_kernels::bitsliced::BitSliced32;
use oxicrc_kernels::folding::FoldingNarrow4x32;
use oxicrc_kernels::naive::Naive;
use oxicrc_kernels::{Crc32c, Crc32cKernel, KERNELS};
use proptest::prelude::*;

/// Arbitrary byte vectors up to 3KB, long enough to reach bit-sliced blocks.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..3072)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn kernels_agree(data in arb_data(), seed in any::<u32>()) {
        let want = Naive::checksum(seed, &data);
        for kernel in KERNELS {
            prop_assert_eq!(kernel.checksum(seed, &data), want, "{}", kernel.name);
        }
    }

    #[test]
    fn continuation(data in arb_data(), split in any::<prop::sample::Index>()) {
        let split = split.index(data.len() + 1);
        let (a, b) = data.split_at(split);
        for kernel in KERNELS {
            let whole = kernel.checksum(0, &data);
            prop_assert_eq!(kernel.checksum(kernel.checksum(0, a), b), whole, "{}", kernel.name);
        }
    }

    #[test]
    fn empty_is_identity(seed in any::<u32>()) {
        for kernel in KERNELS {
            prop_assert_eq!(kernel.checksum(seed, &[]), seed, "{}", kernel.name);
        }
    }

    #[test]
    fn offset_independent(data in prop::collection::vec(any::<u8>(), 0..1500), offset in 0usize..8) {
        let mut shifted = vec![0u8; offset];
        shifted.extend_from_slice(&data);
        prop_assert_eq!(
            BitSliced32::checksum(0, &shifted[offset..]),
            FoldingNarrow4x32::checksum(0, &data)
        );
    }

    #[test]
    fn single_bit_flip_changes_crc(
        data in prop::collection::vec(any::<u8>(), 1..2048),
        bit in any::<prop::sample::Index>(),
    ) {
        let bit = bit.index(data.len() * 8);
        let mut flipped = data.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);
        for kernel in KERNELS {
            prop_assert_ne!(kernel.checksum(0, &data), kernel.checksum(0, &flipped), "{}", kernel.name);
        }
    }

    #[test]
    fn hasher_incremental_equals_oneshot(data in arb_data(), split in any::<prop::sample::Index>()) {
        let split = split.index(data.len() + 1);
        let mut hasher = Crc32c::<BitSliced32>::new();
        hasher.update(&data[..split]);
        hasher.update(&data[split..]);
        prop_assert_eq!(hasher.finalize(), Crc32c::<Naive>::compute(&data));
    }
}
