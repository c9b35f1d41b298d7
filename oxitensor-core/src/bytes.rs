//! Little-endian byte packing helpers.
//!
//! The container format stores every multi-byte integer little-endian.
//! These helpers append to and read from plain byte vectors; readers index
//! directly into the slice, so callers are responsible for bounds (the
//! container parser validates lengths before reading).

/// Append a byte to `out`.
pub fn push_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

/// Append the little-endian octets of `value` to `out`.
pub fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Append the little-endian octets of `value` to `out`.
pub fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Append the little-endian octets of `value` to `out`.
pub fn push_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Read the byte at `offset`.
pub fn read_u8(input: &[u8], offset: usize) -> u8 {
    input[offset]
}

/// Read the little-endian u16 starting at `offset`.
pub fn read_u16(input: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([input[offset], input[offset + 1]])
}

/// Read the little-endian u32 starting at `offset`.
pub fn read_u32(input: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        input[offset],
        input[offset + 1],
        input[offset + 2],
        input[offset + 3],
    ])
}

/// Read the little-endian u64 starting at `offset`.
pub fn read_u64(input: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes([
        input[offset],
        input[offset + 1],
        input[offset + 2],
        input[offset + 3],
        input[offset + 4],
        input[offset + 5],
        input[offset + 6],
        input[offset + 7],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_read_u16() {
        let mut buffer = Vec::new();
        for i in 0..1000u16 {
            push_u16(&mut buffer, i);
            assert_eq!(read_u16(&buffer, 0), i);
            buffer.clear();
        }
    }

    #[test]
    fn test_little_endian_order() {
        let mut buffer = Vec::new();
        push_u32(&mut buffer, 0x474C_5944);
        assert_eq!(buffer, [0x44, 0x59, 0x4C, 0x47]);

        push_u16(&mut buffer, 0xBEEF);
        assert_eq!(&buffer[4..], [0xEF, 0xBE]);
    }

    #[test]
    fn test_read_at_offset() {
        let mut buffer = Vec::new();
        push_u8(&mut buffer, 0xAB);
        push_u64(&mut buffer, 0x0123_4567_89AB_CDEF);
        push_u32(&mut buffer, 0xCAFE_BABE);

        assert_eq!(read_u8(&buffer, 0), 0xAB);
        assert_eq!(read_u64(&buffer, 1), 0x0123_4567_89AB_CDEF);
        assert_eq!(read_u32(&buffer, 9), 0xCAFE_BABE);
    }
}
