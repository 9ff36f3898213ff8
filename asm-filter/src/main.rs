//! Core module for removing unwanted genome records
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This binary removes unwanted genomes from a raw merged assembly
//! table. Downstream steps will not take sequences from the removed
//! genomes. Three filters run in order: whole-genome-shotgun titled
//! assemblies, sequences added to RefSeq after the current release
//! (written to a side file for audit), and blacklisted accessions.

use clap::Parser;
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use asm_filter::cli::Args;
use asm_filter::filter_unwanted;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    filter_unwanted(args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
