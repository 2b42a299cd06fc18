//! # OxiCRC Kernels
//!
//! Interchangeable CRC-32C implementations.
//!
//! Every kernel implements [`Crc32cKernel`] and computes exactly the same
//! function; they differ in how the polynomial division is carried out:
//!
//! | Module          | Kernels                                              |
//! |-----------------|------------------------------------------------------|
//! | [`naive`]       | bit-serial division, bytewise and on aligned words   |
//! | [`table`]       | nibble table, byte table, slicing-by-8               |
//! | [`barret`]      | Barret reduction per multiply strategy               |
//! | [`folding`]     | 64-bit and 128-bit folding registers                 |
//! | [`bitsliced`]   | 16 to 128 lane bit-sliced folding                    |
//!
//! Kernels with wide steps pick them by the real address of the input (see
//! [`dispatch`]), so they need no particular buffer alignment.
//!
//! ## Example
//!
//! ```rust
//! use oxicrc_kernels::{crc32c, Crc32cKernel};
//! use oxicrc_kernels::folding::FoldingNarrow4x32;
//!
//! assert_eq!(crc32c(0, b"123456789"), 0xE3069283);
//!
//! // Continue across calls with any kernel.
//! let head = FoldingNarrow4x32::checksum(0, b"1234");
//! assert_eq!(FoldingNarrow4x32::checksum(head, b"56789"), 0xE3069283);
//!
//! // Or choose one by name at run time.
//! let kernel = oxicrc_kernels::registry::find("bitsliced_32x2x32").unwrap();
//! assert_eq!(kernel.checksum(0, b"123456789"), 0xE3069283);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

/// Implement [`Crc32cKernel`] for concrete instantiations of a generic kernel
/// that provides an inherent `process(state, data)`.
macro_rules! impl_kernel {
    ($strategy:ident: $($kernel:ty => $name:literal),* $(,)?) => {
        $(
            impl oxicrc_core::traits::Crc32cKernel for $kernel {
                const NAME: &'static str = $name;
                const STRATEGY: oxicrc_core::traits::Strategy =
                    oxicrc_core::traits::Strategy::$strategy;

                #[inline]
                fn update(state: u32, data: &[u8]) -> u32 {
                    <$kernel>::process(state, data)
                }
            }
        )*
    };
}

pub mod barret;
pub mod bitsliced;
pub mod dispatch;
pub mod folding;
pub mod hasher;
pub mod naive;
pub mod registry;
pub mod table;

pub use hasher::Crc32c;
pub use oxicrc_core::traits::{Crc32cKernel, Strategy};
pub use registry::{KERNELS, Kernel, find};

/// Kernel behind [`crc32c`] and [`Crc32c`]'s default: the 128-bit folding
/// register on the hardware multiply when one was compiled in.
#[cfg(any(
    all(feature = "simd", target_arch = "x86_64", target_feature = "pclmulqdq"),
    all(feature = "simd", target_arch = "aarch64", target_feature = "aes"),
))]
pub type DefaultKernel = folding::FoldingClmul4x32;

/// Kernel behind [`crc32c`] and [`Crc32c`]'s default: slicing-by-8 when no
/// hardware multiply was compiled in.
#[cfg(not(any(
    all(feature = "simd", target_arch = "x86_64", target_feature = "pclmulqdq"),
    all(feature = "simd", target_arch = "aarch64", target_feature = "aes"),
)))]
pub type DefaultKernel = table::Slice8;

/// Continue the CRC-32C `crc` over `data` with [`DefaultKernel`].
///
/// Start a fresh checksum with `crc = 0`; feed a returned value back in to
/// continue a buffer split across calls.
#[inline]
pub fn crc32c(crc: u32, data: &[u8]) -> u32 {
    DefaultKernel::checksum(crc, data)
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::hasher::Crc32c;
    pub use crate::registry::{KERNELS, Kernel};
    pub use crate::{DefaultKernel, crc32c};
    pub use oxicrc_core::traits::{Crc32cKernel, Strategy};
}
