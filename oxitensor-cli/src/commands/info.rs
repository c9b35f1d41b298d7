//! Info command implementation.

use oxitensor_bitonic::{HEADER_LEN, Header, MAGIC};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// JSON serializable container header data.
#[derive(Debug, Serialize)]
struct ContainerJson {
    file: String,
    magic: u32,
    layout: String,
    transform_param: u8,
    words: u32,
    word_bytes: usize,
    decoded_size: usize,
    compressed_size: usize,
    payload_size: usize,
}

pub fn cmd_info(input: &PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let header = Header::parse(&bytes)?;

    if json {
        let report = ContainerJson {
            file: input.display().to_string(),
            magic: MAGIC,
            layout: header.layout.to_string(),
            transform_param: header.transform_param,
            words: header.words,
            word_bytes: header.layout.word_bytes(),
            decoded_size: header.decoded_len(),
            compressed_size: bytes.len(),
            payload_size: bytes.len() - HEADER_LEN,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Container Information");
    println!("=====================");
    println!("File: {}", input.display());
    println!("Magic: {:#010x}", MAGIC);
    println!("Layout: {}", header.layout);
    println!("Words: {}", header.words);
    println!("Transform parameter: {:#04x}", header.transform_param);
    println!("Decoded size: {} bytes", header.decoded_len());
    println!("Compressed size: {} bytes", bytes.len());
    if header.decoded_len() > 0 {
        println!(
            "Compression ratio: {:.1}%",
            100.0 * bytes.len() as f64 / header.decoded_len() as f64
        );
    }
    Ok(())
}
