//! Folding kernels.
//!
//! The register is as wide as one block. While at least two blocks remain, an
//! aligned block is XORed in and the register is folded forward over it; the
//! final block (and anything unaligned) is drained through word and byte
//! Barret steps.

use std::marker::PhantomData;

use oxicrc_core::fold::FoldRegister;
use oxicrc_core::pmul::{Clmul, Narrow16, Pmul, Sparse};

use crate::dispatch::{can_fold, can_step, read_u32};

/// Folding kernel over register `R` with multiply strategy `P`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Folding<R, P>(PhantomData<(R, P)>);

impl<R: FoldRegister, P: Pmul> Folding<R, P> {
    fn process(crc: u32, data: &[u8]) -> u32 {
        let mut reg = R::from_crc(crc);
        let mut pos = 0;
        while pos < data.len() {
            if can_fold(data, pos, R::BYTES) {
                reg = reg.fold_block::<P>(&data[pos..]);
                pos += R::BYTES;
            } else if can_step(data, pos, 4) {
                reg = reg.step_word::<P>(read_u32(data, pos));
                pos += 4;
            } else {
                reg = reg.step_byte::<P>(data[pos]);
                pos += 1;
            }
        }
        reg.low32()
    }
}

/// 2x32 register on sparse multiplies.
pub type FoldingSparse2x32 = Folding<u64, Sparse>;
/// 2x32 register on 16x16 narrow multiplies.
pub type FoldingNarrow2x32 = Folding<u64, Narrow16>;
/// 4x32 register on 16x16 narrow multiplies.
pub type FoldingNarrow4x32 = Folding<u128, Narrow16>;
/// 2x32 register on the hardware multiply.
pub type FoldingClmul2x32 = Folding<u64, Clmul>;
/// 4x32 register on the hardware multiply.
pub type FoldingClmul4x32 = Folding<u128, Clmul>;

impl_kernel! { Folding:
    FoldingSparse2x32 => "crc32c_folding_sparse_2x32",
    FoldingNarrow2x32 => "crc32c_folding_narrow16_2x32",
    FoldingNarrow4x32 => "crc32c_folding_narrow16_4x32",
    FoldingClmul2x32 => "crc32c_folding_clmul_2x32",
    FoldingClmul4x32 => "crc32c_folding_clmul_4x32",
}
