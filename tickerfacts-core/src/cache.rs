//! The company info cache — cache-aside lookups over the CSV store.
//!
//! Every public operation upper-cases the ticker, reloads the store from
//! disk, and looks for an exact match. A hit returns without touching the
//! provider or the file. A miss fetches from the provider, normalizes the
//! country name, inserts the record, and rewrites the whole store before
//! returning. A failed fetch never writes anything — no partial row is ever
//! committed.

use crate::config::Config;
use crate::countries::CountryMap;
use crate::provider::{CompanyProvider, ProviderError};
use crate::store::{CompanyRecord, CompanyStore, StoreError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// One of the four record attributes, for field-level lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    Name,
    Sector,
    Industry,
    Country,
}

impl CompanyField {
    /// Column name as it appears in the store header.
    pub fn as_str(self) -> &'static str {
        match self {
            CompanyField::Name => "name",
            CompanyField::Sector => "sector",
            CompanyField::Industry => "industry",
            CompanyField::Country => "country",
        }
    }
}

impl fmt::Display for CompanyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(CompanyField::Name),
            "sector" => Ok(CompanyField::Sector),
            "industry" => Ok(CompanyField::Industry),
            "country" => Ok(CompanyField::Country),
            other => Err(format!(
                "unknown field '{other}' (expected name, sector, industry, or country)"
            )),
        }
    }
}

/// Errors surfaced by cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Cache-aside wrapper around the store and the external provider.
pub struct CompanyInfoCache {
    store: CompanyStore,
    provider: Box<dyn CompanyProvider>,
    countries: CountryMap,
}

impl CompanyInfoCache {
    /// Build the cache from an explicit config, creating the export
    /// directory if it does not exist yet.
    pub fn new(config: &Config, provider: Box<dyn CompanyProvider>) -> Result<Self, CacheError> {
        let store = CompanyStore::new(config.store_path());
        std::fs::create_dir_all(&config.data_export_dir).map_err(|e| {
            StoreError::Io {
                path: config.data_export_dir.clone(),
                source: e,
            }
        })?;

        Ok(Self {
            store,
            provider,
            countries: CountryMap::default(),
        })
    }

    /// Replace the default country table.
    pub fn with_country_map(mut self, countries: CountryMap) -> Self {
        self.countries = countries;
        self
    }

    /// Path of the backing store file.
    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Get the full record for a ticker, filling the cache on miss.
    pub fn get_record(&self, ticker: &str) -> Result<CompanyRecord, CacheError> {
        let ticker = ticker.to_uppercase();
        let mut records = self.store.load()?.unwrap_or_default();

        if let Some(record) = records.iter().find(|r| r.ticker == ticker) {
            return Ok(record.clone());
        }

        let record = self.fetch_record(&ticker)?;
        CompanyStore::insert(&mut records, record.clone());
        self.store.save(&records)?;
        Ok(record)
    }

    /// Get a single field for a ticker; same fill-on-miss semantics as
    /// [`get_record`](Self::get_record).
    pub fn get_field(&self, ticker: &str, field: CompanyField) -> Result<String, CacheError> {
        let record = self.get_record(ticker)?;
        Ok(match field {
            CompanyField::Name => record.name,
            CompanyField::Sector => record.sector,
            CompanyField::Industry => record.industry,
            CompanyField::Country => record.country,
        })
    }

    pub fn company_name(&self, ticker: &str) -> Result<String, CacheError> {
        self.get_field(ticker, CompanyField::Name)
    }

    pub fn company_sector(&self, ticker: &str) -> Result<String, CacheError> {
        self.get_field(ticker, CompanyField::Sector)
    }

    pub fn company_industry(&self, ticker: &str) -> Result<String, CacheError> {
        self.get_field(ticker, CompanyField::Industry)
    }

    pub fn company_country(&self, ticker: &str) -> Result<String, CacheError> {
        self.get_field(ticker, CompanyField::Country)
    }

    /// Diagnostic dump: prints the store path and every cached row to
    /// stdout. Unlike lookups, an absent store file is an error here.
    pub fn view(&self) -> Result<(), CacheError> {
        println!("Path: {}", self.store.path().display());

        let records = self.store.load()?.ok_or_else(|| StoreError::NotFound {
            path: self.store.path().to_path_buf(),
        })?;

        println!("ticker,name,sector,industry,country");
        for r in &records {
            println!("{},{},{},{},{}", r.ticker, r.name, r.sector, r.industry, r.country);
        }
        Ok(())
    }

    /// Fetch from the provider and normalize the country name.
    fn fetch_record(&self, ticker: &str) -> Result<CompanyRecord, CacheError> {
        let profile = self.provider.fetch(ticker)?;
        Ok(CompanyRecord {
            ticker: ticker.to_string(),
            name: profile.name,
            sector: profile.sector,
            industry: profile.industry,
            country: self.countries.normalize(&profile.country),
        })
    }
}
