//! Core module for removing unwanted genome records
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This module filters a merged table of (Assembly ID, GI number,
//! accession, title) rows in three strictly-narrowing stages:
//!
//! 1. drop every genome that contains at least one sequence titled
//!    as a whole genome shotgun, since those are not parts of
//!    completely assembled genomes;
//! 2. split off sequences added to RefSeq after the current release
//!    (kept aside for audit, not discarded silently);
//! 3. drop sequences whose version-less accession is blacklisted.

use anyhow::Result;

pub mod cli;
pub mod core;
pub mod utils;

pub use crate::core::{
    added_after_path, drop_blacklisted, drop_wgs_assemblies, filter_unwanted, split_by_catalog,
};
pub use crate::utils::SeqRecord;

pub fn lib_asm_filter(args: Vec<String>) -> Result<()> {
    use config::ArgCheck;

    let args = cli::Args::from(args);
    args.check()?;

    filter_unwanted(args)
}
