use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};

use config::{reader, CATALOG_ACC_FIELD};

/// One row of the merged (ass_id, gi_number, acc, title) table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub ass_id: String,
    pub gi_number: String,
    pub acc: String,
    pub title: String,
}

/// Read the raw merged table. The first line is a header; every data
/// line carries at least four tab-separated fields (the title keeps
/// any embedded tabs intact).
pub fn read_merged(path: &Path) -> Result<Vec<SeqRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    if lines.next().is_none() {
        bail!("merged table `{}` is empty", path.display());
    }

    let mut records = Vec::new();
    for line in lines {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let mut fields = line.splitn(4, '\t');
        let record = SeqRecord {
            ass_id: next_field(&mut fields, path, &line)?,
            gi_number: next_field(&mut fields, path, &line)?,
            acc: next_field(&mut fields, path, &line)?,
            title: next_field(&mut fields, path, &line)?,
        };
        records.push(record);
    }

    Ok(records)
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    path: &Path,
    line: &str,
) -> Result<String> {
    fields
        .next()
        .map(|f| f.to_string())
        .with_context(|| format!("truncated line in `{}`: {}", path.display(), line))
}

/// Accessions of the current RefSeq release, from the catalog file
/// (plain or gzipped, tab-separated, accession in the third column).
pub fn load_catalog(path: &Path) -> Result<HashSet<String>> {
    let catalog = reader(path)?;

    let mut accs = HashSet::new();
    for line in catalog.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let acc = line
            .split('\t')
            .nth(CATALOG_ACC_FIELD)
            .with_context(|| format!("truncated line in catalog `{}`: {}", path.display(), line))?;
        accs.insert(acc.to_string());
    }

    Ok(accs)
}

/// Version-less accessions to discard, from the first column of the
/// blacklist TSV (header expected).
pub fn load_blacklist(path: &Path) -> Result<HashSet<String>> {
    let reader = BufReader::new(File::open(path)?);

    let mut accs = HashSet::new();
    for line in reader.lines().skip(1) {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let acc = line.split('\t').next().unwrap_or_default();
        accs.insert(acc.to_string());
    }

    Ok(accs)
}

/// Accession stem before the first `.` (`NC_000001.2` -> `NC_000001`).
pub fn strip_version(acc: &str) -> &str {
    acc.split('.').next().unwrap_or(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_strip_version() {
        assert_eq!(strip_version("NC_000001.2"), "NC_000001");
        assert_eq!(strip_version("NC_000001"), "NC_000001");
        assert_eq!(strip_version("NZ_CP012345.1.1"), "NZ_CP012345");
    }

    #[test]
    fn test_read_merged_skips_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("merged.tsv");
        fs::write(
            &path,
            "ass_id\tgi_number\tacc\ttitle\n\
             1\t11\tNC_1.1\tEscherichia coli chromosome\n",
        )
        .unwrap();

        let records = read_merged(&path).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].acc, "NC_1.1");
        assert_eq!(records[0].title, "Escherichia coli chromosome");
    }

    #[test]
    fn test_catalog_third_column() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.txt");
        fs::write(
            &path,
            "562\tEscherichia coli\tNC_1.1\tmicrobial\t4641652\n\
             562\tEscherichia coli\tNC_2.1\tmicrobial\t99999\n",
        )
        .unwrap();

        let accs = load_catalog(&path).unwrap();

        assert_eq!(accs.len(), 2);
        assert!(accs.contains("NC_1.1"));
        assert!(accs.contains("NC_2.1"));
    }

    #[test]
    fn test_blacklist_first_column_with_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blacklist.tsv");
        fs::write(
            &path,
            "acc\treason\n\
             NC_000001\tnot a bacterium\n\
             NZ_BAD001\tcontaminated\n",
        )
        .unwrap();

        let accs = load_blacklist(&path).unwrap();

        assert_eq!(accs.len(), 2);
        assert!(accs.contains("NC_000001"));
        assert!(!accs.contains("acc"));
    }
}
