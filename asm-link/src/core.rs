use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::cli::Args;
use crate::elink::LinkSource;
use config::{get_progress_bar, ELINK_DELAY_MS, ELINK_MAX_ERRORS};

/// Resolve the RefSeq GI numbers of every Assembly ID in the input file.
///
/// Failures are isolated per ID: a lookup is retried until three errors
/// accumulate (transport errors and server-side error lists both count),
/// then the ID is skipped and the batch moves on. Every ID is followed
/// by a fixed delay so NCBI does not throttle the run.
pub fn resolve_gi_numbers(args: &Args, source: &dyn LinkSource) -> Result<()> {
    let ass_ids = read_assembly_ids(&args.assm_id_file)?;
    info!("{} assembly IDs to resolve", ass_ids.len());

    let mut writer = BufWriter::new(File::create(&args.outfile)?);
    writeln!(writer, "ass_id\tgi_number")?;

    let pb = get_progress_bar(ass_ids.len() as u64, "Resolving GI numbers...");

    let mut n_skipped = 0;
    for ass_id in &ass_ids {
        match fetch_links(source, ass_id) {
            Some(gi_numbers) => {
                for gi_number in gi_numbers {
                    writeln!(writer, "{}\t{}", ass_id, gi_number)?;
                }
            }
            None => {
                warn!("3 errors in a row, skipping `{}`", ass_id);
                n_skipped += 1;
            }
        }

        pb.inc(1);
        std::thread::sleep(std::time::Duration::from_millis(ELINK_DELAY_MS));
    }

    pb.finish_and_clear();
    writer.flush()?;

    if n_skipped > 0 {
        warn!("{} assembly IDs skipped after repeated errors", n_skipped);
    }
    info!("GI numbers written to {}", args.outfile.display());

    Ok(())
}

/// One ID's linked identifiers, or `None` once the error budget is spent.
fn fetch_links(source: &dyn LinkSource, ass_id: &str) -> Option<Vec<String>> {
    let mut n_errors = 0;

    while n_errors < ELINK_MAX_ERRORS {
        match source.elink(ass_id) {
            Ok(response) => {
                let errors = response.server_errors();
                if errors.is_empty() {
                    return Some(response.links());
                }

                for error in errors {
                    warn!("elink error for `{}`: {}", ass_id, error);
                }
                n_errors += 1;
            }
            Err(e) => {
                warn!("elink request for `{}` failed: {}", ass_id, e);
                n_errors += 1;
            }
        }
    }

    None
}

/// Assembly IDs of the input file, one per line, trimmed.
pub fn read_assembly_ids(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);

    let mut ids = Vec::new();
    for line in reader.lines() {
        let id = line?.trim().to_string();
        if !id.is_empty() {
            ids.push(id);
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elink::{ElinkResponse, LinkSet, LinkSetDb};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::fs;

    struct FakeSource {
        script: RefCell<VecDeque<Result<ElinkResponse>>>,
    }

    impl FakeSource {
        fn new(script: Vec<Result<ElinkResponse>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
            }
        }
    }

    impl LinkSource for FakeSource {
        fn elink(&self, _ass_id: &str) -> Result<ElinkResponse> {
            self.script
                .borrow_mut()
                .pop_front()
                .expect("script exhausted")
        }
    }

    fn linked(gi_numbers: &[&str]) -> ElinkResponse {
        ElinkResponse {
            linksets: vec![LinkSet {
                error: Vec::new(),
                linksetdbs: vec![LinkSetDb {
                    dbto: "nuccore".to_string(),
                    linkname: "assembly_nuccore_refseq".to_string(),
                    links: gi_numbers.iter().map(|gi| gi.to_string()).collect(),
                }],
            }],
        }
    }

    fn server_error(msg: &str) -> ElinkResponse {
        ElinkResponse {
            linksets: vec![LinkSet {
                error: vec![msg.to_string()],
                linksetdbs: Vec::new(),
            }],
        }
    }

    fn run(ids: &str, source: &dyn LinkSource) -> String {
        let tmp = tempfile::tempdir().unwrap();
        let id_file = tmp.path().join("ids.txt");
        fs::write(&id_file, ids).unwrap();

        let args = Args {
            assm_id_file: id_file,
            outfile: tmp.path().join("gi.tsv"),
        };

        resolve_gi_numbers(&args, source).unwrap();
        fs::read_to_string(&args.outfile).unwrap()
    }

    #[test]
    fn test_one_link_one_row() {
        let source = FakeSource::new(vec![Ok(linked(&["2075061612"]))]);

        let output = run("10601591\n", &source);

        assert_eq!(output, "ass_id\tgi_number\n10601591\t2075061612\n");
    }

    #[test]
    fn test_exhausted_retries_skip_the_id_but_not_the_batch() {
        let source = FakeSource::new(vec![
            Err(anyhow::anyhow!("connection reset")),
            Err(anyhow::anyhow!("connection reset")),
            Err(anyhow::anyhow!("connection reset")),
            Ok(linked(&["123"])),
        ]);

        let output = run("1\n2\n", &source);

        assert_eq!(output, "ass_id\tgi_number\n2\t123\n");
    }

    #[test]
    fn test_server_error_list_counts_as_a_failed_attempt() {
        let source = FakeSource::new(vec![
            Ok(server_error("cannot get document summary")),
            Ok(linked(&["777"])),
        ]);

        let output = run("42\n", &source);

        assert_eq!(output, "ass_id\tgi_number\n42\t777\n");
    }

    #[test]
    fn test_zero_links_zero_rows() {
        let source = FakeSource::new(vec![Ok(ElinkResponse::default())]);

        let output = run("9\n", &source);

        assert_eq!(output, "ass_id\tgi_number\n");
    }
}
