//! Stateful CRC-32C calculator.

use std::marker::PhantomData;

use oxicrc_core::traits::Crc32cKernel;

use crate::DefaultKernel;

/// CRC-32C calculator (Castagnoli).
///
/// - Polynomial: 0x1EDC6F41 (reflected: 0x82F63B78)
/// - Initial value: 0xFFFFFFFF
/// - Final XOR: 0xFFFFFFFF
/// - Reflected input: Yes
/// - Reflected output: Yes
///
/// The calculator holds only the running register; the kernel `K` is chosen
/// by type.
///
/// # Example
///
/// ```
/// use oxicrc_kernels::Crc32c;
/// use oxicrc_kernels::table::SmallTable;
///
/// let mut crc = Crc32c::<SmallTable>::new();
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.finalize(), 0xE3069283);
/// ```
#[derive(Debug, Clone)]
pub struct Crc32c<K = DefaultKernel> {
    crc: u32,
    kernel: PhantomData<K>,
}

impl<K: Crc32cKernel> Crc32c<K> {
    /// Create a new CRC-32C calculator.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a calculator that continues from a previously computed checksum.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            crc: seed ^ 0xFFFFFFFF,
            kernel: PhantomData,
        }
    }

    /// Reset the CRC to its initial state.
    pub fn reset(&mut self) {
        self.crc = 0xFFFFFFFF;
    }

    /// Update the CRC with more data.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.crc = K::update(self.crc, data);
    }

    /// Get the current CRC value (without finalizing).
    #[inline(always)]
    pub fn value(&self) -> u32 {
        self.crc ^ 0xFFFFFFFF
    }

    /// Finalize and return the CRC value.
    #[inline(always)]
    pub fn finalize(self) -> u32 {
        self.crc ^ 0xFFFFFFFF
    }

    /// Compute CRC-32C for a slice in one call.
    #[inline]
    pub fn compute(data: &[u8]) -> u32 {
        let mut crc = Self::new();
        crc.update(data);
        crc.finalize()
    }
}

impl<K: Crc32cKernel> Default for Crc32c<K> {
    fn default() -> Self {
        Self::new()
    }
}
