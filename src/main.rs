#![forbid(unsafe_code)]

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use presale_airdrop::utils::CsvSource;
use presale_airdrop::{
    AirdropConfig, AirdropPipeline, DEFAULT_CAP, DEFAULT_CHUNK_SIZE, DEFAULT_INPUT_PATH,
};

#[derive(Parser, Debug)]
#[command(name = "presale-airdrop")]
#[command(about = "Aggregate presale contributions into airdrop batches", long_about = None)]
#[command(version)]
struct Cli {
    /// Presale master data export (CSV with a header row)
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Number of addresses per airdrop batch
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Do not wrap lists in brackets
    #[arg(long)]
    no_brackets: bool,

    /// Do not wrap list elements in quotes
    #[arg(long)]
    no_quotes: bool,

    /// Token cap, comma as decimal separator
    #[arg(long, default_value = DEFAULT_CAP)]
    cap: String,
}

impl From<Cli> for AirdropConfig {
    fn from(cli: Cli) -> Self {
        AirdropConfig::new(cli.input)
            .with_chunk_size(cli.chunk_size)
            .with_brackets(!cli.no_brackets)
            .with_quotes(!cli.no_quotes)
            .with_cap(cli.cap)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = AirdropConfig::from(Cli::parse());
    let pipeline = AirdropPipeline::new(config).context("Invalid configuration")?;

    let input = &pipeline.config().input_path;
    info!("Opening {}", input.display());
    let mut source = CsvSource::open(input)
        .with_context(|| format!("Failed to open input file {}", input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    pipeline
        .run(&mut source, &mut out)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_default_config() {
        let cli = Cli::try_parse_from(["presale-airdrop"]).unwrap();
        assert_eq!(AirdropConfig::from(cli), AirdropConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "presale-airdrop",
            "sale.csv",
            "--chunk-size",
            "50",
            "--no-brackets",
            "--no-quotes",
            "--cap",
            "1000,5",
        ])
        .unwrap();
        let config = AirdropConfig::from(cli);

        assert_eq!(config.input_path, PathBuf::from("sale.csv"));
        assert_eq!(config.chunk_size, 50);
        assert!(!config.use_brackets);
        assert!(!config.use_quotes);
        assert_eq!(config.cap, "1000,5");
    }
}
