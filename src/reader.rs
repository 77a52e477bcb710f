//! Bounds-checked, byte-order-tagged field reads over a borrowed prefix.
//!
//! Every read returns `None` when the requested range does not lie fully
//! inside the buffer. Extractors map that to "need more data".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

#[inline]
fn array<const N: usize>(data: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    data.get(offset..end)?.try_into().ok()
}

#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

#[inline]
pub fn read_u16(data: &[u8], offset: usize, order: ByteOrder) -> Option<u16> {
    let bytes = array::<2>(data, offset)?;
    Some(match order {
        ByteOrder::Big => u16::from_be_bytes(bytes),
        ByteOrder::Little => u16::from_le_bytes(bytes),
    })
}

#[inline]
pub fn read_u32(data: &[u8], offset: usize, order: ByteOrder) -> Option<u32> {
    let bytes = array::<4>(data, offset)?;
    Some(match order {
        ByteOrder::Big => u32::from_be_bytes(bytes),
        ByteOrder::Little => u32::from_le_bytes(bytes),
    })
}

#[inline]
pub fn read_i32(data: &[u8], offset: usize, order: ByteOrder) -> Option<i32> {
    let bytes = array::<4>(data, offset)?;
    Some(match order {
        ByteOrder::Big => i32::from_be_bytes(bytes),
        ByteOrder::Little => i32::from_le_bytes(bytes),
    })
}

/// Compares the bytes present at `offset` against `expected`.
///
/// Returns `Some(true)` on a full match, `Some(false)` as soon as any byte
/// that is present differs, and `None` when every present byte matches but
/// the buffer ends before the whole pattern is available.
pub fn match_prefix(data: &[u8], offset: usize, expected: &[u8]) -> Option<bool> {
    let available = data.get(offset..).unwrap_or(&[]);
    let n = available.len().min(expected.len());
    if available[..n] != expected[..n] {
        return Some(false);
    }
    (n == expected.len()).then_some(true)
}
