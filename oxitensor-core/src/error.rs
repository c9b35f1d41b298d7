//! Error types for OxiTensor operations.
//!
//! Every failure in the codec is a deterministic function of its inputs:
//! either a precondition violation on the uncompressed side (buffer length
//! not aligned to the layout's word size) or a corruption detected on the
//! compressed side (bad magic, unknown layout byte, truncated payload).

use std::io;
use thiserror::Error;

/// The main error type for OxiTensor operations.
#[derive(Debug, Error)]
pub enum OxiTensorError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic number in the container header.
    #[error("Invalid magic number: expected {expected:#010x}, found {found:#010x}")]
    InvalidMagic {
        /// Expected magic value.
        expected: u32,
        /// Actual magic value found.
        found: u32,
    },

    /// Unknown layout byte in the container header.
    #[error("Unknown layout byte: {kind:#04x}")]
    UnknownLayout {
        /// The layout byte found in the header.
        kind: u8,
    },

    /// Input length is not a multiple of the layout's word size.
    #[error("Input length {len} is not a multiple of the {word_bytes}-byte word size")]
    UnalignedInput {
        /// Length of the offending buffer.
        len: usize,
        /// Word size required by the layout.
        word_bytes: usize,
    },

    /// Container header is shorter than the fixed header size.
    #[error("Truncated header: {len} bytes, need {need}")]
    TruncatedHeader {
        /// Bytes available.
        len: usize,
        /// Bytes required.
        need: usize,
    },

    /// Compressed payload ended before a channel was fully decoded.
    #[error("Truncated payload while decoding channel {channel}")]
    TruncatedPayload {
        /// Channel whose bit stream ran out of input.
        channel: usize,
    },
}

/// Result type alias for OxiTensor operations.
pub type Result<T> = std::result::Result<T, OxiTensorError>;

impl OxiTensorError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: u32, found: u32) -> Self {
        Self::InvalidMagic { expected, found }
    }

    /// Create an unknown layout error.
    pub fn unknown_layout(kind: u8) -> Self {
        Self::UnknownLayout { kind }
    }

    /// Create an unaligned input error.
    pub fn unaligned_input(len: usize, word_bytes: usize) -> Self {
        Self::UnalignedInput { len, word_bytes }
    }

    /// Create a truncated header error.
    pub fn truncated_header(len: usize, need: usize) -> Self {
        Self::TruncatedHeader { len, need }
    }

    /// Create a truncated payload error.
    pub fn truncated_payload(channel: usize) -> Self {
        Self::TruncatedPayload { channel }
    }
}
