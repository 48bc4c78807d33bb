//! Watchlist export pipeline
//!
//! Ties the pieces together for one symbol/date pair: fetch the chain and
//! the last close, resolve ATM, select the strike window, render TOS
//! symbols, and hand one file per side to the sink.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use crate::core::{format_symbol, Contract, WatchlistError, WatchlistResult};
use crate::data::{ChainProvider, YahooClient};
use crate::select::{resolve_atm, select_window};

use super::sink::{FileSink, WatchlistSink};

/// Export parameters
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Underlying symbol
    pub symbol: String,
    /// Number of strikes above and below ATM to include
    pub n_strikes: i64,
    /// Manual shift applied to the resolved ATM strike
    pub strike_offset: Option<f64>,
    /// Directory for the watchlist files
    pub output_dir: PathBuf,
    /// Expiration date; today (0DTE) when unset
    pub expiry: Option<NaiveDate>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            symbol: "SPY".to_string(),
            n_strikes: 5,
            strike_offset: None,
            output_dir: PathBuf::from("./options-chains"),
            expiry: None,
        }
    }
}

/// Result of a completed export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// ATM reference used as window center (offset included)
    pub atm_reference: f64,
    /// Strikes that made it into the watchlists
    pub selected_strikes: Vec<f64>,
    /// Path of the calls file
    pub calls_file: PathBuf,
    /// Path of the puts file
    pub puts_file: PathBuf,
    /// Exported call count
    pub n_calls: usize,
    /// Exported put count
    pub n_puts: usize,
}

/// Export call and put watchlist files for one symbol and expiration
///
/// Fails before touching the provider on malformed input, and before
/// touching the sink on any data problem. Both sides are rendered before
/// either file is written, so a failure never leaves one side exported.
pub fn export_watchlists(
    provider: &impl ChainProvider,
    sink: &impl WatchlistSink,
    config: &ExportConfig,
) -> WatchlistResult<ExportSummary> {
    if config.n_strikes < 0 {
        return Err(WatchlistError::invalid_argument(format!(
            "strike count must be non-negative, got {}",
            config.n_strikes
        )));
    }

    let expiry = config.expiry.unwrap_or_else(|| Utc::now().date_naive());

    let available = provider.list_expirations(&config.symbol)?;
    if !available.contains(&expiry) {
        return Err(WatchlistError::NoSuchExpiration {
            symbol: config.symbol.clone(),
            date: expiry,
            available,
        });
    }

    let chain = provider.get_chain(&config.symbol, expiry)?;
    let close = provider.get_last_close(&config.symbol)?;

    chain.check_strike_parity()?;

    let strikes = chain.strikes();
    let atm_reference = resolve_atm(&strikes, close, config.strike_offset)?;
    let window = select_window(&strikes, atm_reference, config.n_strikes)?;

    let call_lines = render_side(&chain.calls, &window, &config.symbol, expiry);
    let put_lines = render_side(&chain.puts, &window, &config.symbol, expiry);

    let date_str = expiry.format("%Y-%m-%d").to_string();
    let calls_file = config
        .output_dir
        .join(format!("{}_CALLS_watchlist_{}.txt", config.symbol, date_str));
    let puts_file = config
        .output_dir
        .join(format!("{}_PUTS_watchlist_{}.txt", config.symbol, date_str));

    sink.write(&calls_file, &call_lines)?;
    sink.write(&puts_file, &put_lines)?;

    tracing::info!(
        "ATM reference {}: exported {} calls and {} puts for {} {}",
        atm_reference,
        call_lines.len(),
        put_lines.len(),
        config.symbol,
        expiry
    );

    Ok(ExportSummary {
        atm_reference,
        selected_strikes: window,
        calls_file,
        puts_file,
        n_calls: call_lines.len(),
        n_puts: put_lines.len(),
    })
}

/// Render one side's contracts within the window, ascending by strike
fn render_side(
    contracts: &[Contract],
    window: &[f64],
    symbol: &str,
    expiry: NaiveDate,
) -> Vec<String> {
    let mut retained: Vec<&Contract> = contracts
        .iter()
        .filter(|c| window.iter().any(|&k| (k - c.strike).abs() < 0.001))
        .collect();
    retained.sort_by(|a, b| a.strike.partial_cmp(&b.strike).unwrap());

    retained
        .iter()
        .map(|c| format_symbol(symbol, expiry, c.side, c.strike))
        .collect()
}

/// Convenience function: export today's SPY 0DTE watchlists with defaults
pub fn export_spy_0dte() -> WatchlistResult<ExportSummary> {
    let client = YahooClient::new();
    export_watchlists(&client, &FileSink, &ExportConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionChain;
    use std::cell::RefCell;
    use std::path::Path;

    struct FixtureProvider {
        expirations: Vec<NaiveDate>,
        chain: OptionChain,
        close: f64,
    }

    impl ChainProvider for FixtureProvider {
        fn list_expirations(&self, _symbol: &str) -> WatchlistResult<Vec<NaiveDate>> {
            Ok(self.expirations.clone())
        }

        fn get_chain(&self, _symbol: &str, _expiry: NaiveDate) -> WatchlistResult<OptionChain> {
            Ok(self.chain.clone())
        }

        fn get_last_close(&self, _symbol: &str) -> WatchlistResult<f64> {
            Ok(self.close)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        writes: RefCell<Vec<(PathBuf, Vec<String>)>>,
    }

    impl WatchlistSink for RecordingSink {
        fn write(&self, path: &Path, lines: &[String]) -> WatchlistResult<()> {
            self.writes
                .borrow_mut()
                .push((path.to_path_buf(), lines.to_vec()));
            Ok(())
        }
    }

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 6).unwrap()
    }

    fn fixture(close: f64) -> FixtureProvider {
        let mut chain = OptionChain::new("SPY", expiry());
        for strike in [660, 661, 662, 663, 664, 665, 666, 667, 668] {
            chain.add_strike(strike as f64);
        }
        FixtureProvider {
            expirations: vec![expiry()],
            chain,
            close,
        }
    }

    fn config(n_strikes: i64, offset: Option<f64>) -> ExportConfig {
        ExportConfig {
            symbol: "SPY".to_string(),
            n_strikes,
            strike_offset: offset,
            output_dir: PathBuf::from("out"),
            expiry: Some(expiry()),
        }
    }

    #[test]
    fn test_full_export() {
        let provider = fixture(664.3);
        let sink = RecordingSink::default();

        let summary = export_watchlists(&provider, &sink, &config(2, None)).unwrap();

        assert_eq!(summary.atm_reference, 664.0);
        assert_eq!(
            summary.selected_strikes,
            vec![662.0, 663.0, 664.0, 665.0, 666.0]
        );
        assert_eq!(summary.n_calls, 5);
        assert_eq!(summary.n_puts, 5);

        let writes = sink.writes.borrow();
        assert_eq!(writes.len(), 2);
        assert_eq!(
            writes[0].0,
            PathBuf::from("out/SPY_CALLS_watchlist_2025-10-06.txt")
        );
        assert_eq!(
            writes[1].0,
            PathBuf::from("out/SPY_PUTS_watchlist_2025-10-06.txt")
        );
        assert_eq!(
            writes[0].1,
            vec![
                ".SPY251006C662",
                ".SPY251006C663",
                ".SPY251006C664",
                ".SPY251006C665",
                ".SPY251006C666",
            ]
        );
        assert_eq!(writes[1].1[0], ".SPY251006P662");
    }

    #[test]
    fn test_export_with_offset() {
        let provider = fixture(664.3);
        let sink = RecordingSink::default();

        let summary = export_watchlists(&provider, &sink, &config(2, Some(2.0))).unwrap();

        assert_eq!(summary.atm_reference, 666.0);
        assert_eq!(
            summary.selected_strikes,
            vec![664.0, 665.0, 666.0, 667.0, 668.0]
        );
    }

    #[test]
    fn test_missing_expiration_skips_sink() {
        let mut provider = fixture(664.3);
        provider.expirations = vec![NaiveDate::from_ymd_opt(2025, 10, 7).unwrap()];
        let sink = RecordingSink::default();

        let err = export_watchlists(&provider, &sink, &config(2, None)).unwrap_err();

        match err {
            WatchlistError::NoSuchExpiration { date, available, .. } => {
                assert_eq!(date, expiry());
                assert_eq!(available.len(), 1);
            }
            other => panic!("expected NoSuchExpiration, got {:?}", other),
        }
        assert!(sink.writes.borrow().is_empty());
    }

    #[test]
    fn test_negative_count_fails_before_io() {
        let provider = fixture(664.3);
        let sink = RecordingSink::default();

        let err = export_watchlists(&provider, &sink, &config(-1, None)).unwrap_err();

        assert!(matches!(err, WatchlistError::InvalidArgument(_)));
        assert!(sink.writes.borrow().is_empty());
    }

    #[test]
    fn test_divergent_chain_rejected() {
        let mut provider = fixture(664.3);
        provider
            .chain
            .puts
            .push(Contract::new(670.0, crate::core::OptionType::Put));
        let sink = RecordingSink::default();

        let err = export_watchlists(&provider, &sink, &config(2, None)).unwrap_err();

        assert!(matches!(err, WatchlistError::DataQuality(_)));
        assert!(sink.writes.borrow().is_empty());
    }

    #[test]
    fn test_empty_chain_rejected() {
        let mut provider = fixture(664.3);
        provider.chain = OptionChain::new("SPY", expiry());
        let sink = RecordingSink::default();

        let err = export_watchlists(&provider, &sink, &config(2, None)).unwrap_err();

        assert!(matches!(err, WatchlistError::EmptyChain));
        assert!(sink.writes.borrow().is_empty());
    }

    #[test]
    fn test_fractional_strikes_render_naturally() {
        let mut chain = OptionChain::new("SPY", expiry());
        chain.add_strike(663.5);
        chain.add_strike(664.0);
        chain.add_strike(664.5);
        let provider = FixtureProvider {
            expirations: vec![expiry()],
            chain,
            close: 664.2,
        };
        let sink = RecordingSink::default();

        export_watchlists(&provider, &sink, &config(1, None)).unwrap();

        let writes = sink.writes.borrow();
        assert_eq!(
            writes[0].1,
            vec![".SPY251006C663.5", ".SPY251006C664", ".SPY251006C664.5"]
        );
    }
}
