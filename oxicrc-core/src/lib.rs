//! # OxiCRC Core
//!
//! Polynomial arithmetic building blocks for CRC-32C.
//!
//! This crate provides the GF(2) machinery every OxiCRC kernel is built from:
//!
//! - [`pmul`]: Carry-less multiplication, in several interchangeable strategies
//! - [`barret`]: Barret reduction of a byte or word into the running register
//! - [`fold`]: 64-bit and 128-bit folding accumulators
//! - [`bitslice`]: Bit-sliced state for 16 to 128 parallel lanes
//! - [`constants`]: The polynomial and every constant derived from it
//! - [`selftest`]: Reference vectors
//! - [`traits`]: The kernel trait
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Kernels (oxicrc-kernels)                            │
//! │     table, Barret, folding, bit-sliced, dispatch        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Engines                                             │
//! │     FoldRegister (2x32, 4x32), SliceState (16..128)     │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Reduction                                           │
//! │     Barret byte/word steps, fold constants              │
//! ├─────────────────────────────────────────────────────────┤
//! │ L0: Carry-less multiply (this crate)                    │
//! │     BitSerial, Sparse, Narrow16, Reflected, Clmul       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxicrc_core::pmul::{BitSerial, Pmul, Sparse};
//! use oxicrc_core::barret::reduce_byte;
//!
//! assert_eq!(Sparse::pmul(0xFFFF_FFFF, 0xFFFF_FFFF), 0x5555_5555_5555_5555);
//! assert_eq!(Sparse::pmul(0xDEA7_13F1, 7), BitSerial::pmul(0xDEA7_13F1, 7));
//!
//! // CRC-32C of "1" from a fresh register.
//! let crc = !reduce_byte::<Sparse>(!0 ^ b'1' as u32);
//! assert_eq!(crc, 0x90F5_99E3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod barret;
pub mod bitslice;
pub mod constants;
pub mod error;
pub mod fold;
pub mod pmul;
pub mod selftest;
pub mod traits;

// Re-exports for convenience
pub use bitslice::{Plane, SliceState};
pub use constants::FoldPair;
pub use error::{OxiCrcError, Result, parse_crc};
pub use fold::FoldRegister;
pub use pmul::{BitSerial, Clmul, Narrow16, Pmul, Reflected, Sparse};
pub use selftest::SelfTestConfig;
pub use traits::{Crc32cKernel, Strategy};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{OxiCrcError, Result};
    pub use crate::pmul::{BitSerial, Clmul, Narrow16, Pmul, Reflected, Sparse};
    pub use crate::selftest::SelfTestConfig;
    pub use crate::traits::{Crc32cKernel, Strategy};
}
