//! Option contract and chain definitions
//!
//! A contract is just a strike and a side (call/put); a chain holds the
//! call and put contracts for one underlying and one expiration date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::{WatchlistError, WatchlistResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Single-character side encoding used in TOS symbols
    pub fn side_char(&self) -> char {
        match self {
            OptionType::Call => 'C',
            OptionType::Put => 'P',
        }
    }
}

/// A single tradable option contract
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Strike price
    pub strike: f64,
    /// Call or put
    pub side: OptionType,
}

impl Contract {
    pub fn new(strike: f64, side: OptionType) -> Self {
        Self { strike, side }
    }
}

/// An option chain for a single underlying and expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionChain {
    /// Underlying symbol
    pub underlying: String,
    /// Expiration date
    pub expiry: NaiveDate,
    /// Call contracts
    pub calls: Vec<Contract>,
    /// Put contracts
    pub puts: Vec<Contract>,
    /// Timestamp when fetched
    pub timestamp: DateTime<Utc>,
}

impl OptionChain {
    pub fn new(underlying: impl Into<String>, expiry: NaiveDate) -> Self {
        Self {
            underlying: underlying.into(),
            expiry,
            calls: Vec::new(),
            puts: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Add a strike with both a call and a put contract
    pub fn add_strike(&mut self, strike: f64) {
        if self.calls.iter().any(|c| (c.strike - strike).abs() < 0.001) {
            return;
        }
        self.calls.push(Contract::new(strike, OptionType::Call));
        self.puts.push(Contract::new(strike, OptionType::Put));
        self.calls
            .sort_by(|a, b| a.strike.partial_cmp(&b.strike).unwrap());
        self.puts
            .sort_by(|a, b| a.strike.partial_cmp(&b.strike).unwrap());
    }

    /// All strikes in the chain, ascending, deduplicated
    pub fn strikes(&self) -> Vec<f64> {
        let mut strikes: Vec<f64> = self
            .calls
            .iter()
            .map(|c| c.strike)
            .chain(self.puts.iter().map(|p| p.strike))
            .collect();
        strikes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        strikes.dedup();
        strikes
    }

    fn side_strikes(contracts: &[Contract]) -> Vec<f64> {
        let mut strikes: Vec<f64> = contracts.iter().map(|c| c.strike).collect();
        strikes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        strikes.dedup();
        strikes
    }

    /// Verify that calls and puts cover the same strike universe
    ///
    /// A divergence would make the selected window asymmetric between the two
    /// output files, so it is rejected rather than silently tolerated.
    pub fn check_strike_parity(&self) -> WatchlistResult<()> {
        let call_strikes = Self::side_strikes(&self.calls);
        let put_strikes = Self::side_strikes(&self.puts);

        if call_strikes == put_strikes {
            return Ok(());
        }

        let call_only: Vec<f64> = call_strikes
            .iter()
            .filter(|k| !put_strikes.contains(k))
            .copied()
            .collect();
        let put_only: Vec<f64> = put_strikes
            .iter()
            .filter(|k| !call_strikes.contains(k))
            .copied()
            .collect();

        Err(WatchlistError::data_quality(format!(
            "call/put strike universes diverge for {} {}: calls-only {:?}, puts-only {:?}",
            self.underlying, self.expiry, call_only, put_only
        )))
    }
}
