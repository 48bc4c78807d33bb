//! # TOS Watchlist - 0DTE Option Chain Exporter
//!
//! Converts a snapshot of one underlying's option chain into two plain-text
//! watchlist files (calls, puts) in thinkorswim import format. A band of
//! strikes centered on the at-the-money (ATM) strike is selected and each
//! contract is rendered as a TOS option symbol, e.g. `.SPY251006P664`.
//!
//! ## Key Components
//!
//! - **Data Fetching**: Yahoo Finance expirations, chains, and last close
//! - **ATM Resolution**: snap the underlying price to the nearest strike,
//!   with an optional manual offset
//! - **Window Selection**: n strikes on each side of ATM, truncated at the
//!   chain boundaries
//! - **Symbol Formatting**: the TOS symbol grammar, reproduced exactly
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tos_watchlist::prelude::*;
//!
//! // Export today's SPY 0DTE watchlists with defaults
//! let summary = export_spy_0dte().unwrap();
//! println!("ATM strike set to: {}", summary.atm_reference);
//!
//! // Or configure a run explicitly
//! let config = ExportConfig {
//!     symbol: "QQQ".to_string(),
//!     n_strikes: 3,
//!     ..Default::default()
//! };
//! let client = YahooClient::new();
//! export_watchlists(&client, &FileSink, &config).unwrap();
//! ```
//!
//! After running, right-click a watchlist in TOS, choose Import, and select
//! the generated file.
//!
//! ## What This Tool Does NOT Do
//!
//! - Real-time pricing or Greeks
//! - Multi-expiration exports in one run
//! - Liquidity or volume filtering

pub mod core;
pub mod data;
pub mod export;
pub mod select;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        format_strike, format_symbol, Contract, OptionChain, OptionType, WatchlistError,
        WatchlistResult,
    };

    // Data fetching
    pub use crate::data::{ChainProvider, YahooClient};

    // Strike selection
    pub use crate::select::{resolve_atm, select_window};

    // Export pipeline
    pub use crate::export::{
        export_spy_0dte, export_watchlists, ExportConfig, ExportSummary, FileSink, WatchlistSink,
    };
}

// Re-export main types at crate root
pub use crate::core::{WatchlistError, WatchlistResult};
pub use crate::export::{export_watchlists, ExportConfig, ExportSummary};
