//! Decompress command implementation.

use oxitensor_bitonic::decompress;
use std::fs;
use std::path::PathBuf;

pub fn cmd_decompress(input: &PathBuf, output: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let restored = decompress(&bytes)?;
    fs::write(output, &restored)?;

    println!("Decompressed {} to {} bytes", bytes.len(), restored.len());
    Ok(())
}
