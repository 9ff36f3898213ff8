//! Core module for building replicon maps
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This binary reads an assembly summary table, locates the NCBI
//! assembly report of every distinct assembly under a local genomes
//! directory, and writes a gzip TSV mapping each assembly accession
//! to the sequence accessions of its replicons. Assemblies without
//! resolvable sequence accessions contribute no rows; a missing
//! report file aborts the whole run.

use clap::Parser;
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use asm_replicon::build_replicon_map;
use asm_replicon::cli::Args;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    build_replicon_map(args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
