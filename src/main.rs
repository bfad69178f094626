//! disksum CLI
//!
//! Block-aligned SHA-256 digests for files and raw block devices.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use disksum::{DEFAULT_MAX_BLOCK_SIZE, FileSource, PlanConfig, StreamHasher};

/// Compute SHA-256 digests of files and raw block devices
#[derive(Parser)]
#[command(name = "disksum")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (per-run read events on stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Maximum read block size in bytes; must be a power of two
    #[arg(long, env = "MAX_BLOCK_SIZE", default_value_t = DEFAULT_MAX_BLOCK_SIZE)]
    block_size: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the size of a file in bytes
    Size {
        /// File to inspect
        path: PathBuf,
    },

    /// Compute and print the SHA-256 digest of a file or device
    ///
    /// For a regular file, SIZE defaults to the file's actual size and the
    /// output matches `sha256sum <PATH>`. For a raw device (e.g. /dev/sda),
    /// SIZE is required and determines how much of the device to read.
    Hash {
        /// File or device to hash
        path: PathBuf,

        /// Number of bytes to read; defaults to the file's size
        size: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose { "debug" } else { "warn" })
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Size { path } => {
            println!("{}", fs::metadata(&path)?.len());
        }
        Commands::Hash { path, size } => {
            let total_len = match size {
                Some(size) => size,
                None => fs::metadata(&path)?.len(),
            };

            let config = PlanConfig::new(cli.block_size)?;
            let mut source = FileSource::open(&path)?;
            let digest = StreamHasher::new(config).digest(&mut source, total_len)?;
            println!("{digest}");
        }
    }
    Ok(())
}
