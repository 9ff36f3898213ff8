use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

use crate::seqkit::{SeqSelector, SeqkitSelector};
use config::get_progress_bar;

/// One row of the (ass_id, refseq_id, acc, title) input table.
#[derive(Debug, Clone)]
pub struct AssAccRow {
    pub ass_id: String,
    pub refseq_id: String,
    pub acc: String,
    pub title: String,
}

/// Length statistics over the gene sequences of one accession.
#[derive(Debug, PartialEq)]
pub struct LengthStats {
    pub min_len: usize,
    pub max_len: usize,
    pub mean_len: f64,
    pub median_len: f64,
}

/// Compute per-accession gene length statistics with seqkit as the
/// sequence selector.
pub fn gene_seqs_to_stats(seqs_fasta: &Path, ass_acc_fpath: &Path, outfile: &Path) -> Result<()> {
    let selector = SeqkitSelector::new(seqs_fasta.to_path_buf());
    compute_gene_stats(ass_acc_fpath, outfile, &selector)
}

/// Per table row, select the row's gene sequences and write one output
/// row of length statistics. A failing selector aborts the whole run;
/// an accession with zero matching sequences yields `NA` statistics.
pub fn compute_gene_stats(
    ass_acc_fpath: &Path,
    outfile: &Path,
    selector: &dyn SeqSelector,
) -> Result<()> {
    let rows = read_ass_acc_table(ass_acc_fpath)?;
    info!("{} accessions to process", rows.len());

    let mut writer = BufWriter::new(File::create(outfile)?);
    writeln!(
        writer,
        "ass_id\trefseq_id\tacc\ttitle\tnum_genes\tmin_len\tmax_len\tmean_len\tmedian_len"
    )?;

    let pb = get_progress_bar(rows.len() as u64, "Computing gene stats...");

    for row in &rows {
        let fasta = selector.select(&row.acc)?;
        let lengths = parse_fasta_lengths(&fasta);

        write!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t",
            row.ass_id,
            row.refseq_id,
            row.acc,
            row.title,
            lengths.len()
        )?;

        match length_stats(&lengths) {
            Some(stats) => writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                stats.min_len, stats.max_len, stats.mean_len, stats.median_len
            )?,
            None => writeln!(writer, "NA\tNA\tNA\tNA")?,
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    writer.flush()?;
    info!("Gene statistics written to {}", outfile.display());

    Ok(())
}

/// Read the (ass_id, refseq_id, acc, title) table, header expected.
pub fn read_ass_acc_table(path: &Path) -> Result<Vec<AssAccRow>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    if lines.next().is_none() {
        bail!("table `{}` is empty", path.display());
    }

    let mut rows = Vec::new();
    for line in lines {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let mut fields = line.splitn(4, '\t');
        let mut next = || {
            fields
                .next()
                .map(|f| f.to_string())
                .with_context(|| format!("truncated line in `{}`: {}", path.display(), line))
        };

        rows.push(AssAccRow {
            ass_id: next()?,
            refseq_id: next()?,
            acc: next()?,
            title: next()?,
        });
    }

    Ok(rows)
}

/// Sequence lengths of the records in a FASTA string.
pub fn parse_fasta_lengths(fasta: &str) -> Vec<usize> {
    let mut lengths = Vec::new();

    for line in fasta.lines() {
        let line = line.trim_end();
        if line.starts_with('>') {
            lengths.push(0);
        } else if let Some(last) = lengths.last_mut() {
            *last += line.len();
        }
    }

    lengths
}

/// Min, max, mean and median of a non-empty length sample.
pub fn length_stats(lengths: &[usize]) -> Option<LengthStats> {
    if lengths.is_empty() {
        return None;
    }

    let min_len = *lengths.iter().min()?;
    let max_len = *lengths.iter().max()?;
    let mean_len = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median_len = if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    };

    Some(LengthStats {
        min_len,
        max_len,
        mean_len,
        median_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    struct FakeSelector {
        by_acc: HashMap<String, String>,
    }

    impl SeqSelector for FakeSelector {
        fn select(&self, acc: &str) -> Result<String> {
            Ok(self.by_acc.get(acc).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn test_parse_fasta_lengths_multiline_records() {
        let fasta = ">gene1\nACGT\nACG\n>gene2\nAC\n";

        assert_eq!(parse_fasta_lengths(fasta), vec![7, 2]);
    }

    #[test]
    fn test_parse_fasta_lengths_empty_input() {
        assert!(parse_fasta_lengths("").is_empty());
    }

    #[test]
    fn test_length_stats_odd_sample() {
        let stats = length_stats(&[5, 3, 4]).unwrap();

        assert_eq!(
            stats,
            LengthStats {
                min_len: 3,
                max_len: 5,
                mean_len: 4.0,
                median_len: 4.0,
            }
        );
    }

    #[test]
    fn test_length_stats_even_sample() {
        let stats = length_stats(&[2, 5]).unwrap();

        assert_eq!(stats.mean_len, 3.5);
        assert_eq!(stats.median_len, 3.5);
    }

    #[test]
    fn test_length_stats_empty_sample() {
        assert!(length_stats(&[]).is_none());
    }

    #[test]
    fn test_compute_gene_stats_na_on_zero_records() {
        let tmp = tempfile::tempdir().unwrap();

        let table = tmp.path().join("ass_acc.tsv");
        fs::write(
            &table,
            "ass_id\trefseq_id\tacc\ttitle\n\
             1\t11\tNC_1.1\tEscherichia coli chromosome\n\
             2\t21\tNC_2.1\tno genes here\n",
        )
        .unwrap();

        let selector = FakeSelector {
            by_acc: [(
                "NC_1.1".to_string(),
                ">g1\nACGT\n>g2\nACGTA\n>g3\nACG\n".to_string(),
            )]
            .into_iter()
            .collect(),
        };

        let outfile = tmp.path().join("stats.tsv");
        compute_gene_stats(&table, &outfile, &selector).unwrap();

        let output = fs::read_to_string(&outfile).unwrap();
        assert_eq!(
            output,
            "ass_id\trefseq_id\tacc\ttitle\tnum_genes\tmin_len\tmax_len\tmean_len\tmedian_len\n\
             1\t11\tNC_1.1\tEscherichia coli chromosome\t3\t3\t5\t4\t4\n\
             2\t21\tNC_2.1\tno genes here\t0\tNA\tNA\tNA\tNA\n"
        );
    }
}
