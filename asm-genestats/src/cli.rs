use clap::Parser;
use config::ArgCheck;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Compute length statistics of extracted gene sequences", long_about = None)]
pub struct Args {
    #[arg(
        short = 'f',
        long = "seqs-fasta",
        required = true,
        value_name = "PATH",
        help = "FASTA file of extracted gene sequences"
    )]
    pub seqs_fasta: PathBuf,

    #[arg(
        short = 'i',
        long = "ass-acc-file",
        required = true,
        value_name = "PATH",
        help = "TSV (with header) of ass_id, refseq_id, acc and title columns"
    )]
    pub ass_acc_file: PathBuf,

    #[arg(
        short = 'o',
        long = "outfile",
        required = true,
        value_name = "PATH",
        help = "Output TSV of per-accession gene length statistics"
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
        vec![&self.seqs_fasta, &self.ass_acc_file]
    }

    fn outfile(&self) -> &PathBuf {
        &self.outfile
    }
}
