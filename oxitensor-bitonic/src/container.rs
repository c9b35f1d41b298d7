//! Container framing for compressed tensors.
//!
//! The fixed header carries the magic, the layout byte, the transform
//! parameter chosen by the bias search (0 for INT8), and the word count.
//! The channel payloads follow with no padding; each channel stream is
//! self-delimiting.

use oxitensor_core::bytes::{push_u8, push_u32, read_u8, read_u32};
use oxitensor_core::error::{OxiTensorError, Result};

use crate::Layout;

/// Container magic, stored little-endian (wire bytes `44 59 4C 47`).
///
/// Historical revisions of the format spelled the magic as a
/// multi-character literal with a compiler-defined value; this
/// implementation accepts only the explicit integer form below.
pub const MAGIC: u32 = 0x474C_5944;

/// Size of the fixed container header in bytes.
pub const HEADER_LEN: usize = 10;

/// Parsed container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Sample layout of the uncompressed buffer.
    pub layout: Layout,
    /// Additive-bias parameter applied on encode (0 for INT8).
    pub transform_param: u8,
    /// Number of words in the uncompressed buffer.
    pub words: u32,
}

impl Header {
    /// Append the header to `out`.
    pub fn push(&self, out: &mut Vec<u8>) {
        push_u32(out, MAGIC);
        push_u8(out, self.layout.wire_byte());
        push_u8(out, self.transform_param);
        push_u32(out, self.words);
    }

    /// Parse a header from the start of `input`.
    pub fn parse(input: &[u8]) -> Result<Self> {
        if input.len() < HEADER_LEN {
            return Err(OxiTensorError::truncated_header(input.len(), HEADER_LEN));
        }

        let magic = read_u32(input, 0);
        if magic != MAGIC {
            return Err(OxiTensorError::invalid_magic(MAGIC, magic));
        }

        let layout = Layout::from_wire(read_u8(input, 4))?;
        let transform_param = read_u8(input, 5);
        let words = read_u32(input, 6);

        Ok(Self {
            layout,
            transform_param,
            words,
        })
    }

    /// Size in bytes of the uncompressed buffer this header describes.
    pub fn decoded_len(&self) -> usize {
        self.words as usize * self.layout.word_bytes()
    }
}
