//! OxiTensor CLI - lossless compression for weight tensors
//!
//! A Pure Rust utility that compresses buffers of INT8, BF16, or FP32
//! samples with a bit-plane arithmetic coder.

mod commands;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use commands::{cmd_compress, cmd_decompress, cmd_info, cmd_stats, cmd_verify};
use log::LevelFilter;
use oxitensor_bitonic::Layout;
use simple_logger::SimpleLogger;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxitensor")]
#[command(author, version, about = "Lossless compression for weight tensors")]
#[command(long_about = "
OxiTensor compresses buffers of small numeric samples (INT8, BF16, FP32),
typical of neural-network weight tensors, with a bit-plane arithmetic coder.

Examples:
  oxitensor compress fp32 model.bin model.otz
  oxitensor decompress model.otz model.bin
  oxitensor verify bf16 weights.bin
  oxitensor info model.otz --json
  oxitensor stats fp32 model.bin
")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a raw tensor file
    #[command(alias = "c")]
    Compress {
        /// Sample layout of the input
        #[arg(value_enum, ignore_case = true)]
        layout: LayoutArg,

        /// Raw input file
        input: PathBuf,

        /// Compressed output file
        output: PathBuf,
    },

    /// Decompress a compressed tensor file
    #[command(alias = "d")]
    Decompress {
        /// Compressed input file
        input: PathBuf,

        /// Raw output file
        output: PathBuf,
    },

    /// Compress in memory and check the round-trip
    #[command(alias = "v")]
    Verify {
        /// Sample layout of the input
        #[arg(value_enum, ignore_case = true)]
        layout: LayoutArg,

        /// Raw input file
        input: PathBuf,
    },

    /// Show container header information
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show per-channel bit statistics of a raw tensor file
    Stats {
        /// Sample layout of the input
        #[arg(value_enum, ignore_case = true)]
        layout: LayoutArg,

        /// Raw input file
        input: PathBuf,
    },

    /// Generate shell completion scripts
    #[command(hide = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sample layout (for clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    /// 8-bit integers
    Int8,
    /// 16-bit brain floats
    Bf16,
    /// 32-bit IEEE floats
    Fp32,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Int8 => Layout::Int8,
            LayoutArg::Bf16 => Layout::Bf16,
            LayoutArg::Fp32 => Layout::Fp32,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init().ok();

    let result = match cli.command {
        Commands::Compress {
            layout,
            input,
            output,
        } => cmd_compress(layout.into(), &input, &output),
        Commands::Decompress { input, output } => cmd_decompress(&input, &output),
        Commands::Verify { layout, input } => cmd_verify(layout.into(), &input),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Stats { layout, input } => cmd_stats(layout.into(), &input),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "oxitensor", &mut io::stdout());
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
