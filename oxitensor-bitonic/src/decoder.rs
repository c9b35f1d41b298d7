//! Per-layout decompression driver.
//!
//! Decoding fills a zeroed buffer channel by channel in ascending order.
//! The context key for a bit only refers to channels strictly below the
//! one being decoded, so the partially reconstructed stream presents the
//! decoder with exactly the keys the encoder saw.

use log::debug;
use oxitensor_core::error::{OxiTensorError, Result};
use oxitensor_core::stream::Stream;

use crate::Layout;
use crate::container::{HEADER_LEN, Header};
use crate::model::{self, CONTEXT_BITS, TABLE_BYTES};
use crate::range_coder::BitonicDecoder;
use crate::transform::{offset_bias, rotate_b16};

/// Decode every channel of a payload into a fresh buffer of `words` words.
fn decode_channels<const CHANNELS: usize>(payload: &[u8], words: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; words * (CHANNELS / 8)];
    let mut stream: Stream<'_, CHANNELS> = Stream::new(&mut out);
    let mut cursor = 0usize;

    for channel in 0..CHANNELS {
        if payload.len() < cursor + TABLE_BYTES {
            return Err(OxiTensorError::truncated_payload(channel));
        }
        let table = model::read_table(payload, cursor);
        cursor += TABLE_BYTES;

        let mut decoder = BitonicDecoder::new(&payload[cursor..])
            .ok_or_else(|| OxiTensorError::truncated_payload(channel))?;
        for word in 0..words {
            let key = stream.bits_before(word, channel, CONTEXT_BITS);
            let bit = decoder
                .decode(table[key])
                .ok_or_else(|| OxiTensorError::truncated_payload(channel))?;
            stream.set(word, channel, bit);
        }
        cursor += decoder.consumed();
    }

    Ok(out)
}

/// Decompress a container produced by [`compress`](crate::compress).
///
/// The layout and the transform parameter are read from the header; the
/// pre-transforms are undone in reverse order (bias first, then the
/// 16-bit rotation).
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let header = Header::parse(input)?;
    let payload = &input[HEADER_LEN..];
    let words = header.words as usize;
    debug!("decompressing {} {} words", words, header.layout);

    let output = match header.layout {
        Layout::Int8 => decode_channels::<8>(payload, words)?,
        Layout::Bf16 => {
            let mut out = decode_channels::<16>(payload, words)?;
            offset_bias(&mut out, 2, 1, header.transform_param.wrapping_neg());
            rotate_b16(&mut out, 1);
            out
        }
        Layout::Fp32 => {
            let mut out = decode_channels::<32>(payload, words)?;
            offset_bias(&mut out, 4, 3, header.transform_param.wrapping_neg());
            rotate_b16(&mut out, 1);
            out
        }
    };

    Ok(output)
}
