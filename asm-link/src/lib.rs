//! Core module for resolving RefSeq GI numbers
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This module maps NCBI Assembly IDs to RefSeq GI numbers through
//! the E-utilities elink endpoint (assembly to nuccore, refseq link
//! name). Lookups run strictly one at a time with a fixed delay per
//! ID; an ID that keeps failing is skipped without aborting the
//! batch. Requires an Internet connection.

use anyhow::Result;

pub mod cli;
pub mod core;
pub mod elink;

pub use crate::core::resolve_gi_numbers;
pub use crate::elink::{ElinkResponse, EutilsClient, LinkSource};

pub fn lib_asm_link(args: Vec<String>) -> Result<()> {
    use config::ArgCheck;

    let args = cli::Args::from(args);
    args.check()?;

    let client = EutilsClient::new()?;
    resolve_gi_numbers(&args, &client)
}
