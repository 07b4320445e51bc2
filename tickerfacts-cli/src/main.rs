//! TickerFacts CLI — cached company metadata lookups.
//!
//! Commands:
//! - `info` — full record (name, sector, industry, country) for a ticker
//! - `name` / `sector` / `industry` / `country` — a single field
//! - `view` — print the store path and its full contents

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tickerfacts_core::{CompanyField, CompanyInfoCache, Config, YahooProvider};

#[derive(Parser)]
#[command(
    name = "tickerfacts",
    about = "TickerFacts — company metadata lookups with a local CSV cache"
)]
struct Cli {
    /// Path to the TOML config file holding `data_export_dir`.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full cached record for a ticker, fetching it on first use.
    Info {
        /// Ticker symbol (e.g., AAPL). Case-insensitive.
        ticker: String,
    },
    /// Print the company name for a ticker.
    Name { ticker: String },
    /// Print the sector for a ticker.
    Sector { ticker: String },
    /// Print the industry for a ticker.
    Industry { ticker: String },
    /// Print the country for a ticker.
    Country { ticker: String },
    /// Print the store path and its full contents.
    View,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cache = build_cache(&cli.config)?;

    match cli.command {
        Commands::Info { ticker } => run_info(&cache, &ticker),
        Commands::Name { ticker } => run_field(&cache, &ticker, CompanyField::Name),
        Commands::Sector { ticker } => run_field(&cache, &ticker, CompanyField::Sector),
        Commands::Industry { ticker } => run_field(&cache, &ticker, CompanyField::Industry),
        Commands::Country { ticker } => run_field(&cache, &ticker, CompanyField::Country),
        Commands::View => Ok(cache.view()?),
    }
}

fn build_cache(config_path: &Path) -> Result<CompanyInfoCache> {
    let config = Config::from_file(config_path)?;
    let provider = Box::new(YahooProvider::new());
    Ok(CompanyInfoCache::new(&config, provider)?)
}

fn run_info(cache: &CompanyInfoCache, ticker: &str) -> Result<()> {
    let record = cache.get_record(ticker)?;
    println!("ticker: {}", record.ticker);
    println!("name: {}", record.name);
    println!("sector: {}", record.sector);
    println!("industry: {}", record.industry);
    println!("country: {}", record.country);
    Ok(())
}

fn run_field(cache: &CompanyInfoCache, ticker: &str, field: CompanyField) -> Result<()> {
    let value = cache.get_field(ticker, field)?;
    println!("{value}");
    Ok(())
}
