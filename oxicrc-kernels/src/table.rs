//! Table-driven kernels.
//!
//! - [`SmallTable`]: 16-entry nibble table, two lookups per byte (64 bytes of
//!   table, for cores with little memory to spare)
//! - [`Table`]: the conventional 256-entry byte table
//! - [`Slice8`]: slicing-by-8, eight 256-entry tables consumed 8 bytes at a time
//!
//! All tables are generated at compile time from the reflected polynomial.

use oxicrc_core::constants::POLY_REFLECTED;
use oxicrc_core::traits::{Crc32cKernel, Strategy};

/// CRC-32C nibble table: remainder of each 4-bit value.
pub const CRC32C_TABLE_16: [u32; 16] = {
    let mut table = [0u32; 16];
    let mut i = 0usize;
    while i < 16 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 4 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY_REFLECTED;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// CRC-32C byte table (polynomial 0x82F63B78, reflected).
pub const CRC32C_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY_REFLECTED;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// CRC-32C slicing-by-8 tables.
/// Table `t` holds the remainder of a byte followed by `t` zero bytes.
pub const CRC32C_TABLE_SLICE: [[u32; 256]; 8] = {
    let mut tables = [[0u32; 256]; 8];
    tables[0] = CRC32C_TABLE;

    let mut t = 1;
    while t < 8 {
        let mut i = 0usize;
        while i < 256 {
            let prev = tables[t - 1][i];
            tables[t][i] = CRC32C_TABLE[(prev & 0xFF) as usize] ^ (prev >> 8);
            i += 1;
        }
        t += 1;
    }

    tables
};

/// Two nibble lookups per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallTable;

impl Crc32cKernel for SmallTable {
    const NAME: &'static str = "crc32c_small_table";
    const STRATEGY: Strategy = Strategy::Table;

    fn update(mut crc: u32, data: &[u8]) -> u32 {
        for &byte in data {
            crc = (crc >> 4) ^ CRC32C_TABLE_16[((crc ^ byte as u32) & 0xF) as usize];
            crc = (crc >> 4) ^ CRC32C_TABLE_16[((crc ^ (byte >> 4) as u32) & 0xF) as usize];
        }
        crc
    }
}

/// One byte lookup per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct Table;

impl Crc32cKernel for Table {
    const NAME: &'static str = "crc32c_table";
    const STRATEGY: Strategy = Strategy::Table;

    #[inline]
    fn update(mut crc: u32, data: &[u8]) -> u32 {
        for &byte in data {
            crc = CRC32C_TABLE[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
        }
        crc
    }
}

/// Slicing-by-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slice8;

impl Crc32cKernel for Slice8 {
    const NAME: &'static str = "crc32c_slice8";
    const STRATEGY: Strategy = Strategy::Table;

    fn update(mut c: u32, data: &[u8]) -> u32 {
        let mut chunks = data.chunks_exact(8);
        for bytes in &mut chunks {
            // XOR the first 4 bytes with the register, then look up all 8 bytes
            let crc_xor = c ^ u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            let b0 = (crc_xor & 0xFF) as usize;
            let b1 = ((crc_xor >> 8) & 0xFF) as usize;
            let b2 = ((crc_xor >> 16) & 0xFF) as usize;
            let b3 = ((crc_xor >> 24) & 0xFF) as usize;

            c = CRC32C_TABLE_SLICE[7][b0]
                ^ CRC32C_TABLE_SLICE[6][b1]
                ^ CRC32C_TABLE_SLICE[5][b2]
                ^ CRC32C_TABLE_SLICE[4][b3]
                ^ CRC32C_TABLE_SLICE[3][bytes[4] as usize]
                ^ CRC32C_TABLE_SLICE[2][bytes[5] as usize]
                ^ CRC32C_TABLE_SLICE[1][bytes[6] as usize]
                ^ CRC32C_TABLE_SLICE[0][bytes[7] as usize];
        }
        Table::update(c, chunks.remainder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_table_entries() {
        assert_eq!(CRC32C_TABLE_16[0], 0x0000_0000);
        assert_eq!(CRC32C_TABLE_16[1], 0x105E_C76F);
        assert_eq!(CRC32C_TABLE_16[2], 0x20BD_8EDE);
        assert_eq!(CRC32C_TABLE_16[3], 0x30E3_49B1);
        assert_eq!(CRC32C_TABLE_16[8], POLY_REFLECTED);
    }

    #[test]
    fn test_byte_table_entries() {
        assert_eq!(CRC32C_TABLE[0], 0);
        assert_eq!(CRC32C_TABLE[1], 0xF26B_8303);
        assert_eq!(CRC32C_TABLE[128], POLY_REFLECTED);
        assert_eq!(CRC32C_TABLE_SLICE[0], CRC32C_TABLE);
    }

    #[test]
    fn test_check_value() {
        for crc in [
            SmallTable::checksum(0, b"123456789"),
            Table::checksum(0, b"123456789"),
            Slice8::checksum(0, b"123456789"),
        ] {
            assert_eq!(crc, 0xE306_9283);
        }
    }

    #[test]
    fn test_slice8_tail_lengths() {
        let data: Vec<u8> = (0..40u8).collect();
        for len in 0..=data.len() {
            assert_eq!(
                Slice8::checksum(0, &data[..len]),
                Table::checksum(0, &data[..len]),
                "len {len}"
            );
        }
    }
}
