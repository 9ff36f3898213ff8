//! Shared configuration for the asmtools suite
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This crate holds the universal constants of the curation
//! pipeline (column indices of the NCBI flat files, retry caps,
//! request pacing), the common CLI error type, argument validation
//! and the small IO helpers every tool reuses: transparent
//! plain-or-gzip readers, output directory creation and a
//! pre-configured progress bar.

use flate2::read::MultiGzDecoder;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// NCBI flat-file geometry
pub const REPORT_SEQ_ACC_FIELD: usize = 6; // RefSeq-Accn column of assembly reports
pub const CATALOG_ACC_FIELD: usize = 2; // accession column of the release catalog
pub const ASM_SUM_ACC_COLUMN: &str = "asm_acc";

// markers
pub const WGS_MARKER: &str = "WHOLE GENOME SHOTGUN SEQUENCE";
pub const ADDED_AFTER_PREFIX: &str = "added_after_curr_release_";
pub const ASM_REPORT_SUFFIX: &str = "_assembly_report.txt";

// E-utilities
pub const EUTILS_ELINK_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/elink.fcgi";
pub const ELINK_DBFROM: &str = "assembly";
pub const ELINK_DB: &str = "nuccore";
pub const ELINK_LINKNAME: &str = "assembly_nuccore_refseq";
pub const ELINK_MAX_ERRORS: usize = 3;
pub const ELINK_DELAY_MS: u64 = 400;

// os
#[cfg(not(windows))]
const TICK_SETTINGS: (&str, u64) = ("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ", 80);
#[cfg(windows)]
const TICK_SETTINGS: (&str, u64) = (r"+-x| ", 200);

/// return a pre-configured progress bar
pub fn get_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let progressbar_style = ProgressStyle::default_spinner()
        .tick_chars(TICK_SETTINGS.0)
        .template(" {spinner} {msg:<30} {wide_bar} {pos}/{len} ETA {eta_precise} ")
        .expect("no template error");

    let progress_bar = ProgressBar::new(length);

    progress_bar.set_style(progressbar_style);
    progress_bar.enable_steady_tick(Duration::from_millis(TICK_SETTINGS.1));
    progress_bar.set_message(msg.to_owned());

    progress_bar
}

/// error handling for CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// argument checker for all tools
pub trait ArgCheck {
    fn check(&self) -> Result<(), CliError> {
        for fpath in self.input_files() {
            validate(fpath)?;
        }
        for dpath in self.input_dirs() {
            validate_dir(dpath)?;
        }
        ensure_outdir(self.outfile())
    }

    fn input_files(&self) -> Vec<&PathBuf>;

    fn input_dirs(&self) -> Vec<&PathBuf> {
        Vec::new()
    }

    fn outfile(&self) -> &PathBuf;
}

/// input file validation
pub fn validate(arg: &PathBuf) -> Result<(), CliError> {
    if !arg.exists() {
        return Err(CliError::InvalidInput(format!("{:?} does not exist", arg)));
    }

    if !arg.is_file() {
        return Err(CliError::InvalidInput(format!("{:?} is not a file", arg)));
    }

    Ok(())
}

/// input directory validation
pub fn validate_dir(arg: &PathBuf) -> Result<(), CliError> {
    if !arg.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "{:?} is not a directory",
            arg
        )));
    }

    Ok(())
}

/// create the parent directory of an output file if it is missing
pub fn ensure_outdir(outfile: &Path) -> Result<(), CliError> {
    match outfile.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            std::fs::create_dir_all(dir).map_err(|e| {
                CliError::InvalidInput(format!("cannot create directory {:?}: {}", dir, e))
            })
        }
        _ => Ok(()),
    }
}

/// open a text file, transparently decoding gzip by extension
pub fn reader(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let name = path.file_name().and_then(|f| f.to_str()).unwrap_or_default();

    if name.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Read, Write};

    #[test]
    fn test_validate_missing_file() {
        let path = PathBuf::from("definitely/not/a/real/file.tsv");
        assert!(validate(&path).is_err());
    }

    #[test]
    fn test_ensure_outdir_creates_missing_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let outfile = tmp.path().join("a/b/out.tsv");

        ensure_outdir(&outfile).unwrap();

        assert!(outfile.parent().unwrap().is_dir());
    }

    #[test]
    fn test_reader_plain_and_gz() {
        let tmp = tempfile::tempdir().unwrap();

        let plain = tmp.path().join("t.tsv");
        std::fs::write(&plain, "a\tb\n").unwrap();

        let gz = tmp.path().join("t.tsv.gz");
        let mut enc = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        enc.write_all(b"a\tb\n").unwrap();
        enc.finish().unwrap();

        for path in [plain, gz] {
            let mut content = String::new();
            reader(&path).unwrap().read_to_string(&mut content).unwrap();
            assert_eq!(content, "a\tb\n");
        }
    }
}
