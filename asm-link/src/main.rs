//! Core module for resolving RefSeq GI numbers
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This binary takes a file of NCBI Assembly IDs (one per line) and
//! writes a TSV mapping each ID to its RefSeq GI numbers, resolved
//! through the E-utilities elink endpoint. For example, Assembly ID
//! 10601591 resolves to the RefSeq record 2075061612. Requires an
//! Internet connection.

use clap::Parser;
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use asm_link::cli::Args;
use asm_link::{resolve_gi_numbers, EutilsClient};

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let client = EutilsClient::new().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    resolve_gi_numbers(&args, &client).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
