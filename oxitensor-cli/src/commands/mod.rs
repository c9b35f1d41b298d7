//! Command implementations for the OxiTensor CLI.

pub mod compress;
pub mod decompress;
pub mod info;
pub mod stats;
pub mod verify;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use stats::cmd_stats;
pub use verify::cmd_verify;
