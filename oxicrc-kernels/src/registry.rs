//! Kernel registry.
//!
//! A static table of every kernel with its name, strategy and a plain function
//! pointer, for callers that pick a kernel at run time (the CLI, the
//! equivalence tests, the benchmarks).

use oxicrc_core::error::{OxiCrcError, Result};
use oxicrc_core::traits::{Crc32cKernel, Strategy};

use crate::barret::{
    BarretBitSerial, BarretClmul, BarretNarrow16, BarretRbitNarrow16, BarretReflectedBitSerial,
    BarretReflectedNarrow16, BarretReflectedSparse, BarretSparse,
};
use crate::bitsliced::{BitSliced16, BitSliced32, BitSliced64, BitSliced128};
use crate::folding::{
    FoldingClmul2x32, FoldingClmul4x32, FoldingNarrow2x32, FoldingNarrow4x32, FoldingSparse2x32,
};
use crate::naive::{Naive, NaiveWords};
use crate::table::{Slice8, SmallTable, Table};

/// Signature shared by every kernel: `(crc, data) -> crc`.
pub type KernelFn = fn(u32, &[u8]) -> u32;

/// A registered kernel.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// Kernel name.
    pub name: &'static str,
    /// Algorithm family.
    pub strategy: Strategy,
    /// One-line description.
    pub description: &'static str,
    /// Checksum entry point.
    pub func: KernelFn,
}

impl Kernel {
    const fn of<K: Crc32cKernel>(description: &'static str) -> Self {
        Self {
            name: K::NAME,
            strategy: K::STRATEGY,
            description,
            func: K::checksum,
        }
    }

    /// Continue the checksum `crc` over `data`.
    #[inline]
    pub fn checksum(&self, crc: u32, data: &[u8]) -> u32 {
        (self.func)(crc, data)
    }
}

/// Every kernel, slowest family first.
pub const KERNELS: &[Kernel] = &[
    Kernel::of::<Naive>("bit-serial division, one byte at a time"),
    Kernel::of::<NaiveWords>("branch-free bit-serial division on aligned words"),
    Kernel::of::<SmallTable>("16-entry nibble table, two lookups per byte"),
    Kernel::of::<Table>("256-entry byte table"),
    Kernel::of::<Slice8>("slicing-by-8, eight byte tables"),
    Kernel::of::<BarretBitSerial>("Barret reduction on bit-serial multiplies"),
    Kernel::of::<BarretSparse>("Barret reduction on sparse integer multiplies"),
    Kernel::of::<BarretNarrow16>("Barret reduction on 16x16 narrow multiplies"),
    Kernel::of::<BarretRbitNarrow16>("Barret reduction on bit-reflected narrow multiplies"),
    Kernel::of::<BarretClmul>("Barret reduction on the hardware carry-less multiply"),
    Kernel::of::<BarretReflectedBitSerial>("reflected Barret reduction on bit-serial multiplies"),
    Kernel::of::<BarretReflectedSparse>("reflected Barret reduction on sparse multiplies"),
    Kernel::of::<BarretReflectedNarrow16>("reflected Barret reduction on narrow multiplies"),
    Kernel::of::<FoldingSparse2x32>("64-bit folding register, sparse multiplies"),
    Kernel::of::<FoldingNarrow2x32>("64-bit folding register, narrow multiplies"),
    Kernel::of::<FoldingNarrow4x32>("128-bit folding register, narrow multiplies"),
    Kernel::of::<FoldingClmul2x32>("64-bit folding register, hardware multiply"),
    Kernel::of::<FoldingClmul4x32>("128-bit folding register, hardware multiply"),
    Kernel::of::<BitSliced16>("bit-sliced, 16 lanes, 128-byte blocks"),
    Kernel::of::<BitSliced32>("bit-sliced, 32 lanes, 256-byte blocks"),
    Kernel::of::<BitSliced64>("bit-sliced, 64 lanes, 512-byte blocks"),
    Kernel::of::<BitSliced128>("bit-sliced, 128 lanes, 1024-byte blocks"),
];

/// Look up a kernel by name. The `crc32c_` prefix may be omitted.
pub fn find(name: &str) -> Result<&'static Kernel> {
    KERNELS
        .iter()
        .find(|k| k.name == name || k.name.strip_prefix("crc32c_") == Some(name))
        .ok_or_else(|| OxiCrcError::unknown_kernel(name))
}

/// Kernels of one strategy, in registry order.
pub fn by_strategy(strategy: Strategy) -> impl Iterator<Item = &'static Kernel> {
    KERNELS.iter().filter(move |k| k.strategy == strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in KERNELS.iter().enumerate() {
            for b in &KERNELS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("crc32c_table").unwrap().name, "crc32c_table");
        assert_eq!(find("bitsliced_128x2x32").unwrap().strategy, Strategy::BitSliced);
        assert!(matches!(
            find("crc32c_turbo"),
            Err(OxiCrcError::UnknownKernel { .. })
        ));
    }

    #[test]
    fn test_every_strategy_is_registered() {
        for strategy in [
            Strategy::Bitwise,
            Strategy::Table,
            Strategy::Barret,
            Strategy::Folding,
            Strategy::BitSliced,
        ] {
            assert!(by_strategy(strategy).count() > 0, "{strategy}");
        }
    }

    #[test]
    fn test_registry_check_value() {
        for kernel in KERNELS {
            assert_eq!(kernel.checksum(0, b"123456789"), 0xE306_9283, "{}", kernel.name);
        }
    }
}
