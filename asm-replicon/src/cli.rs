use clap::Parser;
use config::ArgCheck;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Build the replicon map of an assembly summary", long_about = None)]
pub struct Args {
    #[arg(
        short = 'i',
        long = "asm-sum",
        required = true,
        value_name = "PATH",
        help = "Assembly summary TSV with an asm_acc column"
    )]
    pub asm_sum: PathBuf,

    #[arg(
        short = 'o',
        long = "out",
        required = true,
        value_name = "PATH",
        help = "Output gzip TSV mapping asm_acc to seq_acc"
    )]
    pub out: PathBuf,

    #[arg(
        short = 'g',
        long = "genomes-dir",
        required = true,
        value_name = "DIR",
        help = "Directory with per-assembly report files"
    )]
    pub genomes_dir: PathBuf,
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
        vec![&self.asm_sum]
    }

    fn input_dirs(&self) -> Vec<&PathBuf> {
        vec![&self.genomes_dir]
    }

    fn outfile(&self) -> &PathBuf {
        &self.out
    }
}
