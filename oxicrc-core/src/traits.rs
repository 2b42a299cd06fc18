//! Core traits for CRC-32C kernels.
//!
//! Every kernel computes the same function. They differ only in how the GF(2)
//! division is carried out, which is described by [`Strategy`].

use std::fmt;

/// Family of algorithm a kernel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Bit-at-a-time polynomial division.
    Bitwise,
    /// Precomputed remainder tables.
    Table,
    /// Barret reduction with carry-less multiplies.
    Barret,
    /// Multi-word accumulator folding.
    Folding,
    /// Bit-sliced wide folding.
    BitSliced,
}

impl Strategy {
    /// Lower-case name of the strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bitwise => "bitwise",
            Self::Table => "table",
            Self::Barret => "barret",
            Self::Folding => "folding",
            Self::BitSliced => "bitsliced",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A CRC-32C implementation.
///
/// Kernels are stateless. The running register is owned by the caller and
/// passed in and out of every call, so a buffer split across several calls
/// yields the same checksum as the whole buffer in one call.
pub trait Crc32cKernel {
    /// Registered name of the kernel.
    const NAME: &'static str;

    /// Algorithm family.
    const STRATEGY: Strategy;

    /// Advance an inverted register over `data`.
    ///
    /// `state` is the register as kept between steps, i.e. the public checksum
    /// XOR `0xFFFF_FFFF`.
    fn update(state: u32, data: &[u8]) -> u32;

    /// Continue the checksum `crc` over `data`.
    ///
    /// A fresh checksum starts from `crc = 0`.
    #[inline]
    fn checksum(crc: u32, data: &[u8]) -> u32 {
        !Self::update(!crc, data)
    }
}
