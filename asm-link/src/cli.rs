use clap::Parser;
use config::ArgCheck;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Map NCBI Assembly IDs to RefSeq GI numbers", long_about = None)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "assm-id-file",
        required = true,
        value_name = "PATH",
        help = "File with Assembly IDs, one per line"
    )]
    pub assm_id_file: PathBuf,

    #[arg(
        short = 'o',
        long = "outfile",
        required = true,
        value_name = "PATH",
        help = "Output TSV mapping Assembly IDs to RefSeq GI numbers"
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
        vec![&self.assm_id_file]
    }

    fn outfile(&self) -> &PathBuf {
        &self.outfile
    }
}
