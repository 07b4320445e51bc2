//! Company data provider trait and structured error types.
//!
//! The CompanyProvider trait abstracts over the external data source (Yahoo
//! Finance in production, a scripted mock in tests) so the cache layer can be
//! exercised without a network. Providers don't know about the cache.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw company profile from a provider (country not yet normalized).
///
/// All four fields are required: a provider response missing any of them
/// fails the fetch with [`ProviderError::MissingField`] rather than
/// producing a partial profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyProfile {
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub country: String,
}

/// Structured error types for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("ticker not found: {ticker}")]
    TickerNotFound { ticker: String },

    #[error("response format changed: {0}")]
    ResponseFormat(String),

    #[error("provider response for {ticker} is missing '{field}'")]
    MissingField { ticker: String, field: &'static str },

    #[error("HTTP {status} for {ticker}")]
    Http { ticker: String, status: u16 },
}

/// Trait for company metadata providers.
///
/// The ticker handed to `fetch` has already been upper-cased by the caller.
pub trait CompanyProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the company profile for a ticker.
    fn fetch(&self, ticker: &str) -> Result<CompanyProfile, ProviderError>;
}
