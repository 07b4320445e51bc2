//! TickerFacts Core — cached company metadata lookups keyed by ticker symbol.
//!
//! The crate is built around one component, [`cache::CompanyInfoCache`]:
//! - CSV store on disk (`company_info.csv` under the configured export dir)
//! - Yahoo Finance provider behind the [`provider::CompanyProvider`] seam
//! - country-name normalization through a static mapping table
//!
//! Lookups are cache-aside: the store is consulted first, and only a miss
//! reaches the provider. The store is re-read from disk on every call, so
//! there is no in-memory state to invalidate.

pub mod cache;
pub mod config;
pub mod countries;
pub mod provider;
pub mod store;
pub mod yahoo;

pub use cache::{CacheError, CompanyField, CompanyInfoCache};
pub use config::{Config, ConfigError};
pub use countries::CountryMap;
pub use provider::{CompanyProfile, CompanyProvider, ProviderError};
pub use store::{CompanyRecord, CompanyStore, StoreError};
pub use yahoo::YahooProvider;
