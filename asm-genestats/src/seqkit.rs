use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Result};

pub const SEQKIT: &str = "seqkit";

/// Select gene sequences for one accession, returned as FASTA text.
///
/// The real implementation shells out to seqkit; tests swap in a fake
/// returning canned FASTA.
pub trait SeqSelector {
    fn select(&self, acc: &str) -> Result<String>;
}

/// `seqkit grep -nrp <acc>` over a fixed FASTA file. The accession is
/// passed as a regex-style name pattern, matching the headers of the
/// gene sequences extracted from that replicon.
pub struct SeqkitSelector {
    seqs_fasta: PathBuf,
}

impl SeqkitSelector {
    pub fn new(seqs_fasta: PathBuf) -> Self {
        Self { seqs_fasta }
    }
}

impl SeqSelector for SeqkitSelector {
    fn select(&self, acc: &str) -> Result<String> {
        let output = Command::new(SEQKIT)
            .arg("grep")
            .arg("-nrp")
            .arg(acc)
            .arg(&self.seqs_fasta)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("error while selecting genes for `{}`: {}", acc, stderr);
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
