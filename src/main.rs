use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vpf::{ParserConfig, VpfParser};

/// Check whether a file is a valid VPF document
#[derive(Debug, Parser)]
#[command(name = "vpf-check", version)]
struct Cli {
    /// The file to check with the VPF parser
    file: PathBuf,

    /// Log the tokenization results
    #[arg(short = 't', long)]
    show_tokenize: bool,

    /// Log the analyzed symbol at each step
    #[arg(short = 's', long = "show-symbols")]
    show_symbols: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let input = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Error reading file: {}", cli.file.display()))?;

    let mut parser = VpfParser::new(ParserConfig::new(cli.show_tokenize, cli.show_symbols));
    parser.parse(&input);

    tracing::debug!("Parsed POI data: {:?}", parser.parsed_pois());

    if parser.error_count() == 0 {
        println!("The .vpf file is valid.");
        println!("{} POI(s) parsed.", parser.parsed_pois().len());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "The .vpf file contains errors. ({} error(s))",
            parser.error_count()
        );
        Ok(ExitCode::FAILURE)
    }
}
