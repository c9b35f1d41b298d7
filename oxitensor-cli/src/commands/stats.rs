//! Stats command implementation.
//!
//! Prints the per-channel popcount of a raw tensor file: channels whose
//! density sits near 0% or 100% are the ones the coder squeezes.

use oxitensor_bitonic::Layout;
use oxitensor_core::OxiTensorError;
use oxitensor_core::stream::Stream;
use std::fs;
use std::path::PathBuf;

fn print_channel_stats<const CHANNELS: usize>(data: &mut [u8]) {
    let stream: Stream<'_, CHANNELS> = Stream::new(data);
    let words = stream.size();
    let ones = stream.popcnt_per_channel();

    println!("{:>7}  {:>12}  {:>8}", "channel", "ones", "density");
    for (channel, &count) in ones.iter().enumerate() {
        let density = if words == 0 {
            0.0
        } else {
            100.0 * count as f64 / words as f64
        };
        println!("{:>7}  {:>12}  {:>7.1}%", channel, count, density);
    }
}

pub fn cmd_stats(layout: Layout, input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = fs::read(input)?;
    let word_bytes = layout.word_bytes();
    if bytes.len() % word_bytes != 0 {
        return Err(OxiTensorError::unaligned_input(bytes.len(), word_bytes).into());
    }

    println!(
        "{}: {} {} words",
        input.display(),
        bytes.len() / word_bytes,
        layout
    );
    match layout {
        Layout::Int8 => print_channel_stats::<8>(&mut bytes),
        Layout::Bf16 => print_channel_stats::<16>(&mut bytes),
        Layout::Fp32 => print_channel_stats::<32>(&mut bytes),
    }
    Ok(())
}
