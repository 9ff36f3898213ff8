//! Core module for building replicon maps
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This module maps every assembly accession of an NCBI assembly
//! summary to the sequence accessions of its replicons, by walking
//! the per-assembly report files of a local genomes directory. The
//! result is a two-column gzip TSV (`asm_acc`, `seq_acc`) with one
//! row per replicon.

use anyhow::Result;

pub mod cli;
pub mod core;

pub use crate::core::build_replicon_map;

pub fn lib_asm_replicon(args: Vec<String>) -> Result<()> {
    use config::ArgCheck;

    let args = cli::Args::from(args);
    args.check()?;

    build_replicon_map(args)
}
