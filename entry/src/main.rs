/// asmtools: curation tools for NCBI assembly and RefSeq records
///
/// This is the entry point for the asmtools CLI.
/// It is responsible for parsing the CLI arguments
/// and executing the appropriate subcommand [asm-tool].
///
/// This wrapper offers 4 different subcommands:
/// - asm-replicon
/// - asm-link
/// - asm-filter
/// - asm-genestats
///
/// Each subcommand/submodule covers one step of the genome
/// curation pipeline: building the replicon map of an assembly
/// summary, resolving RefSeq GI numbers through E-utilities,
/// removing unwanted genome records (shotgun assemblies,
/// post-release additions, blacklisted accessions) and computing
/// length statistics over extracted gene sequences. The shared
/// 'config' crate holds universal constants for the pipeline.
///
/// To get help on the subcommands, you can run:
///
/// ```shell
/// asmtools asm-filter -- --help
/// ```
///
use clap::{Args, Parser, Subcommand};
use log::{error, Level};
use simple_logger::init_with_level;

use asm_filter::lib_asm_filter;
use asm_genestats::lib_asm_genestats;
use asm_link::lib_asm_link;
use asm_replicon::lib_asm_replicon;

#[derive(Parser)]
#[command(name = "asmtools")]
#[command(about = "asmtools: curation tools for NCBI assembly and RefSeq records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Alejandro Gonzales-Irribarren, 2025")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "asm-replicon")]
    Replicon(ToolArgs),
    #[command(name = "asm-link")]
    Link(ToolArgs),
    #[command(name = "asm-filter")]
    Filter(ToolArgs),
    #[command(name = "asm-genestats")]
    Genestats(ToolArgs),
}

#[derive(Args)]
struct ToolArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    init_with_level(Level::Info).unwrap();
    let cli = Cli::parse();

    init();

    let result = match cli.command {
        Commands::Replicon(args) => lib_asm_replicon(args.args),
        Commands::Link(args) => lib_asm_link(args.args),
        Commands::Filter(args) => lib_asm_filter(args.args),
        Commands::Genestats(args) => lib_asm_genestats(args.args),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init() {
    let message = format!(
        r#"

        asmtools: curation tools for NCBI assembly and RefSeq records

        this is the entry point for the asmtools CLI
        and it is responsible for parsing the CLI arguments
        for each asm-tool:

        - asm-replicon
        - asm-link
        - asm-filter
        - asm-genestats

        > version: {}
        > author: alejandro gonzales-irribarren, 2025

        * to get help on the subcommands, run:
            asmtools <SUBCOMMAND> -- --help

        "#,
        env!("CARGO_PKG_VERSION")
    );

    println!("{}", message);
}
