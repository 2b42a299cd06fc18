//! Self-test vectors.
//!
//! Test buffers are produced by a xorshift32 generator seeded with 1, taking
//! the low byte of each successive output. The expected checksums below are
//! CRC-32C with a zero seed over those buffers.

use crate::error::{OxiCrcError, Result};

/// The standard CRC check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC-32C of [`CHECK_INPUT`] with a zero seed.
pub const CHECK_VALUE: u32 = 0xE306_9283;

/// Advance a xorshift32 generator and return its new state.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// `len` pseudo-random bytes from a xorshift32 generator seeded with `seed`.
///
/// A zero seed is a fixed point of xorshift and yields an all-zero buffer.
pub fn xorshift_bytes(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len).map(|_| xorshift32(&mut state) as u8).collect()
}

/// One self-test vector: a generated buffer and its expected CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestConfig {
    /// Label shown in reports.
    pub name: &'static str,
    /// Buffer length in bytes.
    pub len: usize,
    /// Generator seed.
    pub seed: u32,
    /// Expected CRC-32C (zero initial value) of the buffer.
    pub expected: u32,
}

impl SelfTestConfig {
    /// 512-byte vector.
    pub const SMALL: Self = Self {
        name: "small",
        len: 512,
        seed: 1,
        expected: 0x9f20_76a7,
    };

    /// 4096-byte vector, long enough to reach the 1024-byte block paths.
    pub const LARGE: Self = Self {
        name: "large",
        len: 4096,
        seed: 1,
        expected: 0xd838_a8bd,
    };

    /// Both standard vectors.
    pub const ALL: [Self; 2] = [Self::SMALL, Self::LARGE];

    /// Look up a standard vector by name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Generate the test buffer.
    pub fn generate(&self) -> Vec<u8> {
        xorshift_bytes(self.len, self.seed)
    }

    /// Check a computed value against the expected one.
    pub fn check(&self, kernel: &str, computed: u32) -> Result<()> {
        if computed == self.expected {
            Ok(())
        } else {
            Err(OxiCrcError::crc_mismatch(kernel, self.expected, computed))
        }
    }

    /// Run `crc32c` over the generated buffer and check the result.
    pub fn verify(&self, kernel: &str, crc32c: impl FnOnce(u32, &[u8]) -> u32) -> Result<()> {
        let data = self.generate();
        self.check(kernel, crc32c(0, &data))
    }
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self::SMALL
    }
}
