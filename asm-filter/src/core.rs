use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::cli::Args;
use crate::utils::{load_blacklist, load_catalog, read_merged, strip_version, SeqRecord};
use config::{ADDED_AFTER_PREFIX, WGS_MARKER};

/// Run the three filtering stages over the raw merged table.
///
/// Each stage only removes rows and keeps the surviving rows in input
/// order, so the row count shrinks monotonically from stage to stage.
pub fn filter_unwanted(args: Args) -> Result<()> {
    let records = read_merged(&args.raw_merged_file)?;
    info!("{} rows in the raw merged table", records.len());

    info!("Step 1: remove whole genome shotgun sequences");
    info!("number of genomes before rm WGS = {}", count_genomes(&records));
    let records = drop_wgs_assemblies(records);
    info!("number of genomes after rm WGS = {}", count_genomes(&records));

    info!("Step 2: remove sequences added to RefSeq after the current release");
    let catalog = load_catalog(&args.refseq_catalog)?;
    let (records, newly_added) = split_by_catalog(records, &catalog);

    let newly_added_fpath = added_after_path(&args.outfile);
    info!(
        "{} RefSeq records have been added to RefSeq since the current release",
        newly_added.len()
    );
    info!("Writing them to {}", newly_added_fpath.display());
    write_added_after(&newly_added, &newly_added_fpath)?;
    info!("{} RefSeq records remaining", records.len());

    info!("Step 3: remove sequences from the blacklist");
    let blacklist = load_blacklist(&args.acc_blacklist)?;
    info!("{} sequences found in the blacklist", blacklist.len());
    let records = drop_blacklisted(records, &blacklist);
    info!("{} RefSeq records remaining", records.len());

    write_output(&records, &args.outfile)?;
    info!("Filtered table written to {}", args.outfile.display());

    Ok(())
}

/// Stage 1: drop every row of every assembly that has at least one
/// sequence titled as a whole genome shotgun. The exclusion is
/// per-assembly, not per-row: a single WGS-titled sequence disqualifies
/// the assembly's other sequences too.
pub fn drop_wgs_assemblies(records: Vec<SeqRecord>) -> Vec<SeqRecord> {
    let wgs_assemblies: HashSet<String> = records
        .iter()
        .filter(|r| r.title.to_uppercase().contains(WGS_MARKER))
        .map(|r| r.ass_id.clone())
        .collect();

    records
        .into_iter()
        .filter(|r| !wgs_assemblies.contains(&r.ass_id))
        .collect()
}

/// Stage 2: partition rows by catalog membership of the versioned
/// accession. Rows absent from the catalog were added to RefSeq after
/// the release snapshot and go to the side output.
pub fn split_by_catalog(
    records: Vec<SeqRecord>,
    catalog: &HashSet<String>,
) -> (Vec<SeqRecord>, Vec<SeqRecord>) {
    records
        .into_iter()
        .partition(|r| catalog.contains(&r.acc))
}

/// Stage 3: drop rows whose version-less accession is blacklisted.
pub fn drop_blacklisted(records: Vec<SeqRecord>, blacklist: &HashSet<String>) -> Vec<SeqRecord> {
    records
        .into_iter()
        .filter(|r| !blacklist.contains(strip_version(&r.acc)))
        .collect()
}

fn count_genomes(records: &[SeqRecord]) -> usize {
    records
        .iter()
        .map(|r| r.ass_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Side-output path: `added_after_curr_release_<outfile-basename>`
/// next to the output file.
pub fn added_after_path(outfile: &Path) -> PathBuf {
    let basename = outfile
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_default();

    outfile.with_file_name(format!("{}{}", ADDED_AFTER_PREFIX, basename))
}

fn write_added_after(records: &[SeqRecord], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "gi_number\tacc\ttitle")?;
    for r in records {
        writeln!(writer, "{}\t{}\t{}", r.gi_number, r.acc, r.title)?;
    }
    writer.flush()?;

    Ok(())
}

fn write_output(records: &[SeqRecord], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "ass_id\tgi_number\tacc\ttitle")?;
    for r in records {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            r.ass_id, r.gi_number, r.acc, r.title
        )?;
    }
    writer.flush()?;

    Ok(())
}
