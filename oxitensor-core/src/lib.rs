//! # OxiTensor Core
//!
//! Core components for the OxiTensor compression library.
//!
//! This crate provides the fundamental building blocks shared by the codec
//! and the CLI:
//!
//! - [`bytes`]: Little-endian push/read of fixed-width integers
//! - [`stream`]: Bit-plane view over a byte buffer
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiTensor is designed as a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     compress / decompress / verify / info / stats       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec (oxitensor-bitonic)                           │
//! │     Range coder, probability model, container framing   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Bit-plane view (this crate)                         │
//! │     Stream<CHANNELS>, byte helpers, errors              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxitensor_core::stream::Stream;
//!
//! // Eight one-byte words; word i has exactly bit i set.
//! let mut data = vec![1u8, 2, 4, 8, 16, 32, 64, 128];
//! let stream: Stream<8> = Stream::new(&mut data);
//! assert_eq!(stream.size(), 8);
//! assert!(stream.get(3, 3));
//! assert!(!stream.get(3, 4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bytes;
pub mod error;
pub mod stream;

// Re-exports for convenience
pub use error::{OxiTensorError, Result};
pub use stream::Stream;
