//! OxiCRC CLI - CRC-32C kernels from the command line
//!
//! Runs the self-test vectors, cross-checks every kernel, and checksums files.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{SumOptions, VectorSize, cmd_check, cmd_compare, cmd_list, cmd_sum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxicrc")]
#[command(author, version, about = "Pure Rust CRC-32C with interchangeable kernels")]
#[command(long_about = "
OxiCRC computes CRC-32C (Castagnoli) with a family of interchangeable kernels:
bit-serial, table, Barret reduction, folding and bit-sliced.

Examples:
  oxicrc list
  oxicrc check
  oxicrc check --kernel bitsliced_128x2x32 --size large
  oxicrc compare --len 10000
  oxicrc sum file.bin --expect 0xe3069283
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available kernels
    #[command(alias = "l")]
    List {
        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Run the self-test vectors against the kernels
    #[command(alias = "t")]
    Check {
        /// Only check this kernel (the crc32c_ prefix may be omitted)
        #[arg(short, long)]
        kernel: Option<String>,

        /// Which vectors to run
        #[arg(short, long, value_enum, default_value = "all")]
        size: VectorSize,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute the CRC-32C of files
    #[command(alias = "s")]
    Sum {
        /// Files to checksum
        files: Vec<PathBuf>,

        /// Kernel to use (default: the build's default kernel)
        #[arg(short, long)]
        kernel: Option<String>,

        /// Checksum to continue from (0x-prefixed hex, otherwise decimal)
        #[arg(long)]
        seed: Option<String>,

        /// Fail unless every file has this checksum (0x-prefixed hex, otherwise decimal)
        #[arg(short, long)]
        expect: Option<String>,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run every kernel on one generated buffer and compare the results
    #[command(alias = "c")]
    Compare {
        /// Buffer length in bytes
        #[arg(short, long, default_value_t = 4096)]
        len: usize,

        /// xorshift32 seed for the buffer
        #[arg(short, long, default_value_t = 1)]
        seed: u32,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { json } => cmd_list(json),
        Commands::Check {
            kernel,
            size,
            json,
            verbose,
        } => cmd_check(kernel.as_deref(), size, json, verbose),
        Commands::Sum {
            files,
            kernel,
            seed,
            expect,
            progress,
            verbose,
        } => cmd_sum(
            &files,
            &SumOptions {
                kernel: kernel.as_deref(),
                seed: seed.as_deref(),
                expect: expect.as_deref(),
                progress,
                verbose,
            },
        ),
        Commands::Compare { len, seed, verbose } => cmd_compare(len, seed, verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
