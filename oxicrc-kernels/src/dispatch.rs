//! Alignment-aware step selection.
//!
//! Every kernel walks its input with the same loop shape: at each position it
//! takes the widest step it implements whose size divides the address of the
//! current byte and for which enough input remains. Alignment is judged on the
//! real address, so the same bytes placed at different addresses run through
//! different mixes of steps while producing the same checksum.
//!
//! Block steps of folding kernels additionally require a whole second block
//! behind the one being consumed ([`can_fold`]). The folded register is as wide
//! as a block, so that much input must be left to drain it.

/// Whether the address of `data[pos]` is a multiple of `align`.
#[inline(always)]
pub fn is_aligned(data: &[u8], pos: usize, align: usize) -> bool {
    (data.as_ptr() as usize).wrapping_add(pos) % align == 0
}

/// Whether a `width`-byte step can be taken at `pos`.
#[inline(always)]
pub fn can_step(data: &[u8], pos: usize, width: usize) -> bool {
    pos + width <= data.len() && is_aligned(data, pos, width)
}

/// Whether a `width`-byte fold can be taken at `pos`, keeping one more block of
/// input in reserve.
#[inline(always)]
pub fn can_fold(data: &[u8], pos: usize, width: usize) -> bool {
    pos + 2 * width <= data.len() && is_aligned(data, pos, width)
}

/// Little-endian word at `pos`.
#[inline(always)]
pub fn read_u32(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

/// Little-endian double word at `pos`.
#[inline(always)]
pub fn read_u64(data: &[u8], pos: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[pos..pos + 8]);
    u64::from_le_bytes(buf)
}
