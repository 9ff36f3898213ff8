//! Core module for gene sequence statistics
//! Alejandro Gonzales-Irribarren, 2025
//!
//! Thin CLI over [`asm_genestats::gene_seqs_to_stats`]: reads a table
//! of (ass_id, refseq_id, acc, title) rows, selects each accession's
//! gene sequences from a FASTA file via seqkit and writes one row of
//! length statistics per input row.

use clap::Parser;
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use asm_genestats::cli::Args;
use asm_genestats::gene_seqs_to_stats;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    gene_seqs_to_stats(&args.seqs_fasta, &args.ass_acc_file, &args.outfile).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}
