//! Core module for gene sequence statistics
//! Alejandro Gonzales-Irribarren, 2025
//!
//! For every accession of an input table, this module selects the
//! matching gene sequences from a FASTA file (through seqkit) and
//! computes their length statistics: count, min, max, mean and
//! median. Accessions with no matching sequences report `NA`
//! statistics instead of failing; a failing seqkit invocation is
//! fatal for the whole run.

use anyhow::Result;

pub mod cli;
pub mod core;
pub mod seqkit;

pub use crate::core::{compute_gene_stats, gene_seqs_to_stats, length_stats, parse_fasta_lengths};
pub use crate::seqkit::{SeqSelector, SeqkitSelector};

pub fn lib_asm_genestats(args: Vec<String>) -> Result<()> {
    use config::ArgCheck;

    let args = cli::Args::from(args);
    args.check()?;

    gene_seqs_to_stats(&args.seqs_fasta, &args.ass_acc_file, &args.outfile)
}
