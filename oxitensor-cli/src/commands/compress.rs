//! Compress command implementation.

use oxitensor_bitonic::{Layout, compress};
use std::fs;
use std::path::PathBuf;

pub fn cmd_compress(
    layout: Layout,
    input: &PathBuf,
    output: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let packed = compress(&bytes, layout)?;
    fs::write(output, &packed)?;

    let percent = if bytes.is_empty() {
        100.0
    } else {
        100.0 * packed.len() as f64 / bytes.len() as f64
    };
    println!(
        "Compressed {} to {} bytes ({:.1}%)",
        bytes.len(),
        packed.len(),
        percent
    );
    Ok(())
}
