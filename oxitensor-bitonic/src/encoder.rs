//! Per-layout compression driver.
//!
//! Encoding runs the layout's pre-transforms on an owned copy of the
//! input, fits a conditional probability table per bit channel, and
//! range-codes every channel in ascending order. Channels are coded
//! independently but their contexts reach into lower channels of the same
//! word, which fixes the channel order for the decoder as well.

use log::debug;
use oxitensor_core::error::{OxiTensorError, Result};
use oxitensor_core::stream::Stream;

use crate::Layout;
use crate::container::Header;
use crate::model::{self, CONTEXT_BITS};
use crate::range_coder::BitonicEncoder;
use crate::transform::{offset_bias, rotate_b16};

/// Largest prefix, in bytes, fed to the bias-parameter oracle.
const SEARCH_PREFIX: usize = 1 << 16;

/// Encode every channel of `buf` into `out`.
///
/// Per channel: fit the conditional table over all words, append it (one
/// little-endian u16 per entry), then range-code each word's bit under the
/// table and finalize. The resulting channel stream is self-delimiting.
fn encode_channels<const CHANNELS: usize>(buf: &mut [u8], out: &mut Vec<u8>) {
    let stream: Stream<'_, CHANNELS> = Stream::new(buf);

    for channel in 0..CHANNELS {
        let table = model::fit_channel(&stream, channel);
        model::push_table(out, &table);

        let mut encoder = BitonicEncoder::new(out);
        for word in 0..stream.size() {
            let key = stream.bits_before(word, channel, CONTEXT_BITS);
            encoder.encode(stream.get(word, channel), table[key]);
        }
        encoder.finalize();
    }
}

/// Search the additive-bias parameter for a float layout.
///
/// Every non-zero value is tried on a bounded prefix, compressing the
/// biased prefix with the real channel coder and keeping the value that
/// produced the smallest output. Ties break toward the smallest value.
/// The oracle is the coder itself, so the search is deterministic.
fn pick_bias_param<const CHANNELS: usize>(buf: &[u8], stride: usize, offset: usize) -> u8 {
    let prefix = &buf[..buf.len().min(SEARCH_PREFIX)];

    let mut copy = prefix.to_vec();
    let mut scratch = Vec::new();
    let mut best_param = 0u8;
    let mut best_len = usize::MAX;

    for value in 1..=255u8 {
        copy.copy_from_slice(prefix);
        offset_bias(&mut copy, stride, offset, value);
        scratch.clear();
        encode_channels::<CHANNELS>(&mut copy, &mut scratch);

        if scratch.len() < best_len {
            best_len = scratch.len();
            best_param = value;
        }
    }

    debug!(
        "bias search: param {:#04x} codes a {}-byte prefix into {} bytes",
        best_param,
        prefix.len(),
        best_len
    );
    best_param
}

/// Compress `input` under the given layout.
///
/// The input length must be a multiple of the layout's word size. The
/// caller's buffer is left untouched; pre-transforms run on an owned copy.
pub fn compress(input: &[u8], layout: Layout) -> Result<Vec<u8>> {
    let word_bytes = layout.word_bytes();
    if input.len() % word_bytes != 0 {
        return Err(OxiTensorError::unaligned_input(input.len(), word_bytes));
    }

    let mut work = input.to_vec();
    let words = (work.len() / word_bytes) as u32;
    let mut output = Vec::new();

    match layout {
        Layout::Int8 => {
            let header = Header {
                layout,
                transform_param: 0,
                words,
            };
            header.push(&mut output);
            encode_channels::<8>(&mut work, &mut output);
        }
        Layout::Bf16 => {
            rotate_b16(&mut work, 15);
            let param = pick_bias_param::<16>(&work, 2, 1);
            let header = Header {
                layout,
                transform_param: param,
                words,
            };
            header.push(&mut output);
            offset_bias(&mut work, 2, 1, param);
            encode_channels::<16>(&mut work, &mut output);
        }
        Layout::Fp32 => {
            rotate_b16(&mut work, 15);
            let param = pick_bias_param::<32>(&work, 4, 3);
            let header = Header {
                layout,
                transform_param: param,
                words,
            };
            header.push(&mut output);
            offset_bias(&mut work, 4, 3, param);
            encode_channels::<32>(&mut work, &mut output);
        }
    }

    debug!(
        "compressed {} bytes to {} ({})",
        input.len(),
        output.len(),
        layout
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unaligned_input_rejected() {
        let buf = [0u8; 7];
        assert!(matches!(
            compress(&buf, Layout::Bf16),
            Err(OxiTensorError::UnalignedInput { len: 7, word_bytes: 2 })
        ));
        assert!(matches!(
            compress(&buf, Layout::Fp32),
            Err(OxiTensorError::UnalignedInput { len: 7, word_bytes: 4 })
        ));
        // Any length is valid for INT8.
        assert!(compress(&buf, Layout::Int8).is_ok());
    }

    #[test]
    fn test_caller_buffer_untouched() {
        let buf: Vec<u8> = (0..64u8).collect();
        let snapshot = buf.clone();
        compress(&buf, Layout::Fp32).unwrap();
        assert_eq!(buf, snapshot);
    }

    #[test]
    fn test_deterministic_output() {
        let buf: Vec<u8> = (0..256u32)
            .map(|i| (i.wrapping_mul(2654435761) >> 24) as u8)
            .collect();
        let first = compress(&buf, Layout::Bf16).unwrap();
        let second = compress(&buf, Layout::Bf16).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let output = compress(&[], Layout::Int8).unwrap();
        // Header, then per channel a 16-entry table and the 4-byte flush.
        assert_eq!(output.len(), 10 + 8 * (model::TABLE_BYTES + 4));
    }

    #[test]
    fn test_skewed_int8_compresses() {
        // A heavily repetitive buffer must come out smaller than raw.
        let buf = vec![0x60u8; 4096];
        let output = compress(&buf, Layout::Int8).unwrap();
        assert!(output.len() < buf.len() / 4, "got {} bytes", output.len());
    }
}
