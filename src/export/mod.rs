//! Watchlist export
//!
//! Orchestrates one run: provider → ATM resolution → window selection →
//! symbol rendering → sink.

pub mod sink;
pub mod watchlist;

pub use sink::*;
pub use watchlist::*;
