//! Market data provider abstraction
//!
//! The export pipeline only needs three queries; anything that can answer
//! them (live API, cached snapshot, test fixture) can drive an export.

use chrono::NaiveDate;

use crate::core::{OptionChain, WatchlistResult};

/// Source of option chain and underlying price data
pub trait ChainProvider {
    /// Available expiration dates for a symbol
    fn list_expirations(&self, symbol: &str) -> WatchlistResult<Vec<NaiveDate>>;

    /// Option chain for a symbol and expiration
    fn get_chain(&self, symbol: &str, expiry: NaiveDate) -> WatchlistResult<OptionChain>;

    /// Close price from the last trading day
    fn get_last_close(&self, symbol: &str) -> WatchlistResult<f64>;
}
