//! Yahoo Finance data provider
//!
//! Fetches option expirations, chains, and the last daily close through
//! Yahoo Finance's unofficial API.
//!
//! Note: Yahoo Finance data is delayed ~15 minutes and intended for
//! personal use.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::core::{Contract, OptionChain, OptionType, WatchlistError, WatchlistResult};
use crate::data::provider::ChainProvider;

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com".to_string(),
        }
    }

    fn fetch_options(
        &self,
        symbol: &str,
        expiry: Option<NaiveDate>,
    ) -> WatchlistResult<YahooOptionChainData> {
        let url = match expiry {
            Some(date) => {
                // Yahoo keys chains by the expiry's 16:00 UTC timestamp
                let ts = date
                    .and_hms_opt(16, 0, 0)
                    .ok_or_else(|| WatchlistError::data("invalid expiry date"))?
                    .and_utc()
                    .timestamp();
                format!("{}/v7/finance/options/{}?date={}", self.base_url, symbol, ts)
            }
            None => format!("{}/v7/finance/options/{}", self.base_url, symbol),
        };

        let response: YahooOptionsResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| WatchlistError::network(e.to_string()))?
            .json()
            .map_err(|e| WatchlistError::data(format!("Failed to parse options: {}", e)))?;

        response
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| WatchlistError::data("No options data returned"))
    }
}

impl ChainProvider for YahooClient {
    fn list_expirations(&self, symbol: &str) -> WatchlistResult<Vec<NaiveDate>> {
        let chain = self.fetch_options(symbol, None)?;

        let expiries: Vec<NaiveDate> = chain
            .expiration_dates
            .iter()
            .filter_map(|&ts| DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()))
            .collect();

        Ok(expiries)
    }

    fn get_chain(&self, symbol: &str, expiry: NaiveDate) -> WatchlistResult<OptionChain> {
        let chain_data = self.fetch_options(symbol, Some(expiry))?;

        let mut chain = OptionChain::new(symbol, expiry);

        if let Some(options) = chain_data.options.first() {
            chain.calls = options
                .calls
                .iter()
                .filter_map(|row| row.strike.map(|k| Contract::new(k, OptionType::Call)))
                .collect();
            chain.puts = options
                .puts
                .iter()
                .filter_map(|row| row.strike.map(|k| Contract::new(k, OptionType::Put)))
                .collect();
        }

        tracing::info!(
            "Fetched {} chain for {}: {} calls, {} puts",
            symbol,
            expiry,
            chain.calls.len(),
            chain.puts.len()
        );

        Ok(chain)
    }

    fn get_last_close(&self, symbol: &str) -> WatchlistResult<f64> {
        let url = format!(
            "{}/v8/finance/chart/{}?range=1d&interval=1d",
            self.base_url, symbol
        );

        let response: YahooChartResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| WatchlistError::network(e.to_string()))?
            .json()
            .map_err(|e| WatchlistError::data(format!("Failed to parse chart: {}", e)))?;

        let result = response
            .chart
            .result
            .into_iter()
            .next()
            .ok_or_else(|| WatchlistError::data("No chart data returned"))?;

        // Last non-null close from the daily bar
        result
            .indicators
            .quote
            .first()
            .and_then(|q| q.close.iter().rev().find_map(|c| *c))
            .ok_or_else(|| WatchlistError::data(format!("No close price for {}", symbol)))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct YahooOptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: YahooOptionChainEnvelope,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChainEnvelope {
    result: Vec<YahooOptionChainData>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionChainData {
    #[serde(rename = "expirationDates")]
    expiration_dates: Vec<i64>,
    #[serde(default)]
    options: Vec<YahooOptions>,
}

#[derive(Debug, Deserialize)]
struct YahooOptions {
    calls: Vec<YahooOptionRow>,
    puts: Vec<YahooOptionRow>,
}

#[derive(Debug, Deserialize)]
struct YahooOptionRow {
    strike: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct YahooChartEnvelope {
    result: Vec<YahooChartData>,
}

#[derive(Debug, Deserialize)]
struct YahooChartData {
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuoteBars>,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteBars {
    close: Vec<Option<f64>>,
}
