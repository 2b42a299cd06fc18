//! Bit-serial polynomial division.
//!
//! The reference kernels: one conditional shift per message bit. They are the
//! slowest kernels but have no tables, no constants other than the polynomial,
//! and nothing to get subtly wrong.

use oxicrc_core::constants::POLY_REFLECTED;
use oxicrc_core::traits::{Crc32cKernel, Strategy};

use crate::dispatch::{can_step, read_u32};

/// Divide `bits` low-order bits of `crc` through the polynomial.
#[inline(always)]
fn shift_out(mut crc: u32, bits: u32) -> u32 {
    for _ in 0..bits {
        crc = (crc >> 1) ^ if crc & 1 != 0 { POLY_REFLECTED } else { 0 };
    }
    crc
}

/// Branch-free variant of [`shift_out`]: the low bit selects the polynomial by
/// multiplication.
#[inline(always)]
fn shift_out_mul(mut crc: u32, bits: u32) -> u32 {
    for _ in 0..bits {
        crc = (crc >> 1) ^ (POLY_REFLECTED * (crc & 1));
    }
    crc
}

/// One bit at a time, one byte at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl Crc32cKernel for Naive {
    const NAME: &'static str = "crc32c_naive";
    const STRATEGY: Strategy = Strategy::Bitwise;

    fn update(mut crc: u32, data: &[u8]) -> u32 {
        for &byte in data {
            crc = shift_out(crc ^ byte as u32, 8);
        }
        crc
    }
}

/// One bit at a time without branches, consuming aligned words where possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveWords;

impl Crc32cKernel for NaiveWords {
    const NAME: &'static str = "crc32c_naive_words";
    const STRATEGY: Strategy = Strategy::Bitwise;

    fn update(mut crc: u32, data: &[u8]) -> u32 {
        let mut pos = 0;
        while pos < data.len() {
            if can_step(data, pos, 4) {
                crc = shift_out_mul(crc ^ read_u32(data, pos), 32);
                pos += 4;
            } else {
                crc = shift_out_mul(crc ^ data[pos] as u32, 8);
                pos += 1;
            }
        }
        crc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_check_value() {
        assert_eq!(Naive::checksum(0, b"123456789"), 0xE306_9283);
        assert_eq!(NaiveWords::checksum(0, b"123456789"), 0xE306_9283);
    }

    #[test]
    fn test_shift_variants_agree() {
        for c in [0u32, 1, 0x80, 0xFFFF_FFFF, 0x1234_5678] {
            assert_eq!(shift_out(c, 8), shift_out_mul(c, 8));
            assert_eq!(shift_out(c, 32), shift_out_mul(c, 32));
        }
    }

    #[test]
    fn test_zeros() {
        // iSCSI test vector: 32 bytes of zeros.
        assert_eq!(Naive::checksum(0, &[0u8; 32]), 0x8A91_36AA);
        assert_eq!(NaiveWords::checksum(0, &[0xFFu8; 32]), 0x62A8_AB43);
    }
}
