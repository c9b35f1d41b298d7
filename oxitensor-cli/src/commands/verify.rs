//! Verify command implementation.

use oxitensor_bitonic::{Layout, compress, decompress};
use std::fs;
use std::path::PathBuf;

pub fn cmd_verify(layout: Layout, input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let packed = compress(&bytes, layout)?;
    let restored = decompress(&packed)?;

    if restored != bytes {
        return Err(format!(
            "verification failed: decompressed output differs from {}",
            input.display()
        )
        .into());
    }

    let percent = if bytes.is_empty() {
        100.0
    } else {
        100.0 * packed.len() as f64 / bytes.len() as f64
    };
    println!(
        "Verification succeeded: {} bytes -> {} bytes ({:.1}%)",
        bytes.len(),
        packed.len(),
        percent
    );
    Ok(())
}
