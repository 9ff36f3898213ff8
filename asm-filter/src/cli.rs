use clap::Parser;
use config::ArgCheck;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Remove unwanted genome records from a merged assembly table", long_about = None)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "raw-merged-file",
        required = true,
        value_name = "PATH",
        help = "TSV (with header) of Assembly IDs, GI numbers, ACCESSION.VERSIONs and titles"
    )]
    pub raw_merged_file: PathBuf,

    #[arg(
        short = 'a',
        long = "refseq-catalog",
        required = true,
        value_name = "PATH",
        help = "RefSeq release catalog file, plain or gzipped"
    )]
    pub refseq_catalog: PathBuf,

    #[arg(
        short = 'b',
        long = "acc-blacklist",
        required = true,
        value_name = "PATH",
        help = "TSV (with header) of version-less accessions to discard; second column may hold the reason"
    )]
    pub acc_blacklist: PathBuf,

    #[arg(
        short = 'o',
        long = "outfile",
        required = true,
        value_name = "PATH",
        help = "Filtered output TSV"
    )]
    pub outfile: PathBuf,
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }
}

impl ArgCheck for Args {
    fn input_files(&self) -> Vec<&PathBuf> {
        vec![
            &self.raw_merged_file,
            &self.refseq_catalog,
            &self.acc_blacklist,
        ]
    }

    fn outfile(&self) -> &PathBuf {
        &self.outfile
    }
}
