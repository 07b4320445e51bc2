//! Yahoo Finance company profile provider.
//!
//! Fetches name/sector/industry/country from Yahoo's v10 quoteSummary API
//! (`modules=price,summaryProfile`). Yahoo Finance has no official API and
//! is subject to unannounced format changes.

use crate::provider::{CompanyProfile, CompanyProvider, ProviderError};
use serde::Deserialize;
use std::time::Duration;

/// Yahoo quoteSummary API response.
#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryResult,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    result: Option<Vec<QuoteSummaryData>>,
    error: Option<QuoteSummaryError>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryData {
    price: Option<PriceModule>,
    summary_profile: Option<SummaryProfileModule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceModule {
    long_name: Option<String>,
    short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryProfileModule {
    sector: Option<String>,
    industry: Option<String>,
    country: Option<String>,
}

/// Yahoo Finance provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Build the quoteSummary URL for a ticker.
    fn summary_url(ticker: &str) -> String {
        format!(
            "https://query2.finance.yahoo.com/v10/finance/quoteSummary/{ticker}\
             ?modules=price,summaryProfile"
        )
    }

    /// Parse the quoteSummary response into a complete profile.
    ///
    /// Any of the four required fields being absent is a `MissingField`
    /// error; the display name falls back from `longName` to `shortName`.
    fn parse_response(
        ticker: &str,
        resp: QuoteSummaryResponse,
    ) -> Result<CompanyProfile, ProviderError> {
        let result = resp.quote_summary.result.ok_or_else(|| {
            if let Some(err) = resp.quote_summary.error {
                if err.code == "Not Found" {
                    ProviderError::TickerNotFound {
                        ticker: ticker.to_string(),
                    }
                } else {
                    ProviderError::ResponseFormat(format!("{}: {}", err.code, err.description))
                }
            } else {
                ProviderError::ResponseFormat("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ResponseFormat("result array is empty".into()))?;

        let missing = |field: &'static str| ProviderError::MissingField {
            ticker: ticker.to_string(),
            field,
        };

        let name = data
            .price
            .and_then(|p| p.long_name.or(p.short_name))
            .ok_or_else(|| missing("name"))?;

        let profile = data.summary_profile.ok_or_else(|| missing("sector"))?;
        let sector = profile.sector.ok_or_else(|| missing("sector"))?;
        let industry = profile.industry.ok_or_else(|| missing("industry"))?;
        let country = profile.country.ok_or_else(|| missing("country"))?;

        Ok(CompanyProfile {
            name,
            sector,
            industry,
            country,
        })
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(&self, ticker: &str) -> Result<CompanyProfile, ProviderError> {
        let url = Self::summary_url(ticker);

        let resp = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ProviderError::NetworkUnreachable(e.to_string())
            } else {
                ProviderError::ResponseFormat(e.to_string())
            }
        })?;

        let status = resp.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::TickerNotFound {
                ticker: ticker.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ProviderError::Http {
                ticker: ticker.to_string(),
                status: status.as_u16(),
            });
        }

        let summary: QuoteSummaryResponse = resp.json().map_err(|e| {
            ProviderError::ResponseFormat(format!("failed to parse response for {ticker}: {e}"))
        })?;

        Self::parse_response(ticker, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(ticker: &str, json: &str) -> Result<CompanyProfile, ProviderError> {
        let resp: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        YahooProvider::parse_response(ticker, resp)
    }

    #[test]
    fn full_response_parses_to_profile() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"longName": "Apple Inc.", "shortName": "Apple"},
                    "summaryProfile": {
                        "sector": "Technology",
                        "industry": "Consumer Electronics",
                        "country": "United States"
                    }
                }],
                "error": null
            }
        }"#;

        let profile = parse("AAPL", json).unwrap();
        assert_eq!(profile.name, "Apple Inc.");
        assert_eq!(profile.sector, "Technology");
        assert_eq!(profile.industry, "Consumer Electronics");
        assert_eq!(profile.country, "United States");
    }

    #[test]
    fn short_name_fallback() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"shortName": "Apple"},
                    "summaryProfile": {
                        "sector": "Technology",
                        "industry": "Consumer Electronics",
                        "country": "United States"
                    }
                }],
                "error": null
            }
        }"#;

        assert_eq!(parse("AAPL", json).unwrap().name, "Apple");
    }

    #[test]
    fn missing_sector_is_an_error() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"longName": "Apple Inc."},
                    "summaryProfile": {
                        "industry": "Consumer Electronics",
                        "country": "United States"
                    }
                }],
                "error": null
            }
        }"#;

        let err = parse("AAPL", json).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MissingField { field: "sector", .. }
        ));
    }

    #[test]
    fn not_found_error_payload_maps_to_ticker_not_found() {
        let json = r#"{
            "quoteSummary": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;

        let err = parse("ZZZZZZ", json).unwrap_err();
        assert!(matches!(err, ProviderError::TickerNotFound { .. }));
    }

    #[test]
    fn summary_url_targets_quote_summary() {
        let url = YahooProvider::summary_url("MSFT");
        assert!(url.contains("/v10/finance/quoteSummary/MSFT"));
        assert!(url.contains("modules=price,summaryProfile"));
    }
}
