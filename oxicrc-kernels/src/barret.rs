//! Barret-reduction kernels.
//!
//! Each byte (or aligned word) is XORed into the register and divided out with
//! two carry-less multiplies. The kernels are generic over the multiply
//! strategy, so the same loop runs on bit-serial software multiplies, on
//! 16-bit narrow multiplies, or on a single hardware instruction.

use std::marker::PhantomData;

use oxicrc_core::barret::{reduce_byte, reduce_byte_reflected, reduce_word, reduce_word_reflected};
use oxicrc_core::pmul::{BitSerial, Clmul, Narrow16, Pmul, Reflected, Sparse};

use crate::dispatch::{can_step, read_u32};

/// Barret reduction, full-product convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct Barret<P>(PhantomData<P>);

impl<P: Pmul> Barret<P> {
    fn process(mut crc: u32, data: &[u8]) -> u32 {
        let mut pos = 0;
        while pos < data.len() {
            if can_step(data, pos, 4) {
                crc = reduce_word::<P>(crc ^ read_u32(data, pos));
                pos += 4;
            } else {
                crc = reduce_byte::<P>(crc ^ data[pos] as u32);
                pos += 1;
            }
        }
        crc
    }
}

/// Barret reduction, reflected low-half convention.
///
/// Never looks at the high half of a product, so `P` only needs a correct
/// [`Pmul::pmul_lo`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BarretReflected<P>(PhantomData<P>);

impl<P: Pmul> BarretReflected<P> {
    fn process(mut crc: u32, data: &[u8]) -> u32 {
        let mut pos = 0;
        while pos < data.len() {
            if can_step(data, pos, 4) {
                crc = reduce_word_reflected::<P>(crc ^ read_u32(data, pos));
                pos += 4;
            } else {
                crc = reduce_byte_reflected::<P>(crc ^ data[pos] as u32);
                pos += 1;
            }
        }
        crc
    }
}

/// Barret on bit-serial multiplies.
pub type BarretBitSerial = Barret<BitSerial>;
/// Barret on sparse multiplies.
pub type BarretSparse = Barret<Sparse>;
/// Barret on 16x16 narrow multiplies.
pub type BarretNarrow16 = Barret<Narrow16>;
/// Barret on full products rebuilt from low-half narrow multiplies.
pub type BarretRbitNarrow16 = Barret<Reflected<Narrow16>>;
/// Barret on the hardware multiply.
pub type BarretClmul = Barret<Clmul>;
/// Reflected Barret on bit-serial multiplies.
pub type BarretReflectedBitSerial = BarretReflected<BitSerial>;
/// Reflected Barret on sparse multiplies.
pub type BarretReflectedSparse = BarretReflected<Sparse>;
/// Reflected Barret on 16x16 narrow multiplies.
pub type BarretReflectedNarrow16 = BarretReflected<Narrow16>;

impl_kernel! { Barret:
    BarretBitSerial => "crc32c_barret_bitserial",
    BarretSparse => "crc32c_barret_sparse",
    BarretNarrow16 => "crc32c_barret_narrow16",
    BarretRbitNarrow16 => "crc32c_barret_rbit_narrow16",
    BarretClmul => "crc32c_barret_clmul",
    BarretReflectedBitSerial => "crc32c_barret_reflected_bitserial",
    BarretReflectedSparse => "crc32c_barret_reflected_sparse",
    BarretReflectedNarrow16 => "crc32c_barret_reflected_narrow16",
}
