//! Conditional probability model for bit channels.
//!
//! For each channel the model estimates P(bit = 1 | the K bits immediately
//! below it in the same word). K is fixed at 4, so a channel's table has 16
//! Q16 entries (32 bytes on the wire). Contexts only reach into lower
//! channels, which is what makes decoding sound: by the time channel `c`
//! is decoded, every bit its contexts refer to has already been placed.

use oxitensor_core::bytes::{push_u16, read_u16};
use oxitensor_core::stream::Stream;

/// Context width in bits.
pub const CONTEXT_BITS: usize = 4;

/// Number of entries in a per-channel probability table.
pub const CONTEXT_SIZE: usize = 1 << CONTEXT_BITS;

/// Per-channel conditional probability table, indexed by the context key.
pub type ProbTable = [u16; CONTEXT_SIZE];

/// Fit the conditional table for `channel` by counting over every word.
///
/// Entries are `ones * 65535 / total`; contexts that never occur get 0.
pub fn fit_channel<const CHANNELS: usize>(
    stream: &Stream<'_, CHANNELS>,
    channel: usize,
) -> ProbTable {
    let mut ones = [0u64; CONTEXT_SIZE];
    let mut total = [0u64; CONTEXT_SIZE];

    for word in 0..stream.size() {
        let key = stream.bits_before(word, channel, CONTEXT_BITS);
        total[key] += 1;
        ones[key] += u64::from(stream.get(word, channel));
    }

    let mut table = [0u16; CONTEXT_SIZE];
    for key in 0..CONTEXT_SIZE {
        if total[key] > 0 {
            table[key] = ((ones[key] * 65535) / total[key]) as u16;
        }
    }
    table
}

/// Append a table to the container, one little-endian u16 per entry.
pub fn push_table(out: &mut Vec<u8>, table: &ProbTable) {
    for &prob in table {
        push_u16(out, prob);
    }
}

/// Size of a serialized table in bytes.
pub const TABLE_BYTES: usize = CONTEXT_SIZE * 2;

/// Read a table starting at `offset`. The caller guarantees that
/// `TABLE_BYTES` bytes are available.
pub fn read_table(input: &[u8], offset: usize) -> ProbTable {
    let mut table = [0u16; CONTEXT_SIZE];
    for (key, entry) in table.iter_mut().enumerate() {
        *entry = read_u16(input, offset + key * 2);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_constant_channel() {
        // Channel 0 is always 1, channel 1 always 0.
        let mut data = vec![0x01u8; 64];
        let stream: Stream<8> = Stream::new(&mut data);

        let table = fit_channel(&stream, 0);
        // Channel 0 has the empty-below context: only key 0 is populated.
        assert_eq!(table[0], 65535);
        assert!(table[1..].iter().all(|&p| p == 0));

        let table = fit_channel(&stream, 1);
        // Context for channel 1 is the single bit below it, always 1.
        assert_eq!(table[1], 0);
        assert_eq!(table[0], 0);
    }

    #[test]
    fn test_fit_conditional_channel() {
        // Words alternate 0b11 and 0b00: bit 1 equals bit 0, so the
        // model should learn P(1 | below = 1) = 1 and P(1 | below = 0) = 0.
        let mut data: Vec<u8> = (0..64).map(|i| if i % 2 == 0 { 0x03 } else { 0x00 }).collect();
        let stream: Stream<8> = Stream::new(&mut data);

        let table = fit_channel(&stream, 1);
        assert_eq!(table[0b1], 65535);
        assert_eq!(table[0b0], 0);
    }

    #[test]
    fn test_fit_ratio() {
        // Three words with bit 0 set out of four gives 3/4 of the Q16 range.
        let mut data = vec![0x01u8, 0x01, 0x01, 0x00];
        let stream: Stream<8> = Stream::new(&mut data);
        let table = fit_channel(&stream, 0);
        assert_eq!(table[0], (3 * 65535 / 4) as u16);
    }

    #[test]
    fn test_table_serialization() {
        let mut table = [0u16; CONTEXT_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = (i as u16) * 4097;
        }

        let mut out = vec![0xAA];
        push_table(&mut out, &table);
        assert_eq!(out.len(), 1 + TABLE_BYTES);
        assert_eq!(read_table(&out, 1), table);
    }
}
