//! TOS option symbol formatting
//!
//! Renders a contract into the thinkorswim watchlist import format:
//! `.` + symbol + two-digit-year expiry + side char + strike, e.g.
//! `.SPY251006P664`. This grammar must match the importing platform exactly.

use chrono::NaiveDate;

use super::contract::OptionType;

/// Format a single contract as a TOS symbol string
pub fn format_symbol(underlying: &str, expiry: NaiveDate, side: OptionType, strike: f64) -> String {
    format!(
        ".{}{}{}{}",
        underlying,
        expiry.format("%y%m%d"),
        side.side_char(),
        format_strike(strike)
    )
}

/// Render a strike without a trailing fractional part when it is whole
///
/// `100` and `100.5` must stay distinguishable in the symbol grammar, but
/// `100.0` would not import correctly.
pub fn format_strike(strike: f64) -> String {
    if strike.fract() == 0.0 {
        format!("{}", strike as i64)
    } else {
        format!("{}", strike)
    }
}
