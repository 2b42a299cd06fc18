//! Error types for OxiCRC operations.
//!
//! Checksum kernels themselves are total and never fail. Errors only arise in
//! the layers around them: looking a kernel up by name, verifying a computed
//! checksum against an expected one, and the file access of the CLI.

use std::io;
use thiserror::Error;

/// The main error type for OxiCRC operations.
#[derive(Debug, Error)]
pub enum OxiCrcError {
    /// I/O error from an underlying file or stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No kernel is registered under the requested name.
    #[error("Unknown kernel: {name}")]
    UnknownKernel {
        /// The name that was looked up.
        name: String,
    },

    /// A computed checksum disagrees with the expected value.
    #[error("CRC mismatch in {kernel}: expected {expected:#010x}, computed {computed:#010x}")]
    CrcMismatch {
        /// Name of the kernel that produced the value.
        kernel: String,
        /// Expected CRC value.
        expected: u32,
        /// Computed CRC value.
        computed: u32,
    },

    /// A seed or expected value could not be parsed.
    #[error("Invalid CRC value: {input:?} (expected a 32-bit hex or decimal number)")]
    InvalidSeed {
        /// The offending input text.
        input: String,
    },
}

/// Result type alias for OxiCRC operations.
pub type Result<T> = std::result::Result<T, OxiCrcError>;

impl OxiCrcError {
    /// Create an unknown kernel error.
    pub fn unknown_kernel(name: impl Into<String>) -> Self {
        Self::UnknownKernel { name: name.into() }
    }

    /// Create a CRC mismatch error.
    pub fn crc_mismatch(kernel: impl Into<String>, expected: u32, computed: u32) -> Self {
        Self::CrcMismatch {
            kernel: kernel.into(),
            expected,
            computed,
        }
    }

    /// Create an invalid seed error.
    pub fn invalid_seed(input: impl Into<String>) -> Self {
        Self::InvalidSeed {
            input: input.into(),
        }
    }
}

/// Parse a 32-bit CRC value written as `0x`-prefixed hex or as decimal.
///
/// Unprefixed input is always decimal, so `12345678` is twelve million and
/// `e3069283` is rejected.
pub fn parse_crc(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<u32>()
    };
    parsed.map_err(|_| OxiCrcError::invalid_seed(input))
}
