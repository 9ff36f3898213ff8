use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;

use crate::cli::Args;
use config::{ASM_REPORT_SUFFIX, ASM_SUM_ACC_COLUMN, REPORT_SEQ_ACC_FIELD};

/// Build the replicon map and write it as a gzip TSV.
///
/// One output row per sequence accession found in the report file of
/// each distinct assembly of the summary table. An assembly whose
/// report lists no sequences contributes no rows; an assembly whose
/// report file is missing aborts the run.
pub fn build_replicon_map(args: Args) -> Result<()> {
    let asm_accs = read_asm_accessions(&args.asm_sum)?;
    info!("{} distinct assemblies in the summary", asm_accs.len());

    let encoder = GzEncoder::new(File::create(&args.out)?, Compression::default());
    let mut writer = BufWriter::new(encoder);
    writeln!(writer, "asm_acc\tseq_acc")?;

    let mut n_rows = 0;
    for asm_acc in &asm_accs {
        let report = report_path(&args.genomes_dir, asm_acc);
        let seq_accs = sequence_accessions(&report)
            .with_context(|| format!("cannot read assembly report for `{}`", asm_acc))?;

        for seq_acc in seq_accs {
            writeln!(writer, "{}\t{}", asm_acc, seq_acc)?;
            n_rows += 1;
        }
    }

    writer.flush()?;
    info!("{} replicon rows written to {}", n_rows, args.out.display());

    Ok(())
}

/// Distinct assembly accessions of the summary table, first-seen order.
///
/// The summary is a TSV with a header naming an `asm_acc` column;
/// `##` lines are comments and a leading `#` on the header is tolerated.
pub fn read_asm_accessions(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.starts_with("##") {
                    break line;
                }
            }
            None => bail!("assembly summary `{}` is empty", path.display()),
        }
    };

    let acc_idx = header
        .trim_start_matches('#')
        .trim()
        .split('\t')
        .position(|col| col == ASM_SUM_ACC_COLUMN)
        .with_context(|| {
            format!(
                "assembly summary `{}` has no `{}` column",
                path.display(),
                ASM_SUM_ACC_COLUMN
            )
        })?;

    let mut seen = std::collections::HashSet::new();
    let mut accs = Vec::new();
    for line in lines {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let acc = line.split('\t').nth(acc_idx).with_context(|| {
            format!("truncated line in assembly summary `{}`", path.display())
        })?;

        if seen.insert(acc.to_string()) {
            accs.push(acc.to_string());
        }
    }

    Ok(accs)
}

/// Path of the NCBI assembly report for one assembly accession.
pub fn report_path(genomes_dir: &Path, asm_acc: &str) -> PathBuf {
    genomes_dir
        .join(asm_acc)
        .join(format!("{}{}", asm_acc, ASM_REPORT_SUFFIX))
}

/// Sequence accessions listed in one assembly report.
///
/// Report files are tab-separated; lines starting with `#` are comments
/// and the RefSeq accession sits in the 7th field.
pub fn sequence_accessions(report: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(
        File::open(report).with_context(|| format!("`{}` does not exist", report.display()))?,
    );

    let mut accs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        let acc = line
            .split('\t')
            .nth(REPORT_SEQ_ACC_FIELD)
            .with_context(|| format!("truncated line in report `{}`", report.display()))?;
        accs.push(acc.to_string());
    }

    Ok(accs)
}
