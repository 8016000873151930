//! unhma - A tool for decoding HMA aerospace unit design files
//!
//! Usage:
//!   unhma <hma_file>                      - Print a readout of one design
//!   unhma decode <hma_file> [--json]      - Print a readout or JSON export
//!   unhma info <hma_file>                 - Show header information only
//!   unhma batch <dir> [filter] [-r]       - Decode every design in a directory

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use unhma::hma::utils::{convert_hma, decode_batch, decode_file, show_unit_info};

#[derive(Parser)]
#[command(name = "unhma")]
#[command(version = "0.1.0")]
#[command(about = "Decode HMA aerospace unit design files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the .hma file (for quick readout mode)
    hma_file: Option<PathBuf>,

    /// Log decode steps (overrides RUST_LOG level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a design and print it
    Decode {
        /// Path to the .hma file
        hma_file: PathBuf,
        /// Print JSON instead of a readout
        #[arg(short, long)]
        json: bool,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Show header information
    Info {
        /// Path to the .hma file
        hma_file: PathBuf,
    },
    /// Decode every design in a directory
    Batch {
        /// Directory containing .hma files
        dir: PathBuf,
        /// Filter pattern (e.g., *.hma, Sabre)
        filter: Option<String>,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Decode {
            hma_file,
            json,
            pretty,
        }) => {
            convert_hma(&hma_file, json, pretty)?;
        }
        Some(Commands::Info { hma_file }) => {
            let unit = decode_file(&hma_file)?;
            show_unit_info(&unit);
        }
        Some(Commands::Batch {
            dir,
            filter,
            recursive,
        }) => {
            let summary = decode_batch(&dir, filter.as_deref(), recursive)?;
            if !summary.failures.is_empty() {
                std::process::exit(2);
            }
        }
        None => {
            if let Some(hma_file) = cli.hma_file {
                convert_hma(&hma_file, false, false)?;
            } else {
                eprintln!("Usage: unhma <hma_file>");
                eprintln!("       unhma decode <hma_file> [--json] [--pretty]");
                eprintln!("       unhma info <hma_file>");
                eprintln!("       unhma batch <dir> [filter] [-r]");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
