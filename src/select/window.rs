//! Window selection
//!
//! Picks the symmetric band of strikes around the ATM reference that ends up
//! in the watchlist files.

use crate::core::{WatchlistError, WatchlistResult};

use super::closest_index;

/// Select up to `n` strikes on each side of the ATM reference
///
/// The strike universe is sorted ascending and deduplicated, the index
/// closest to `atm_reference` is located (lower strike on ties), and the
/// closed range `[idx - n, idx + n]` is returned clamped to the valid index
/// bounds. Near a chain boundary the window is truncated, never re-centered,
/// so an asymmetric result is expected there.
///
/// The returned sequence is strictly ascending with at most `2n + 1`
/// elements, and contains at least the closest strike for non-empty input.
///
/// # Errors
/// `InvalidArgument` when `n` is negative, `EmptyChain` when `strikes` is
/// empty.
pub fn select_window(strikes: &[f64], atm_reference: f64, n: i64) -> WatchlistResult<Vec<f64>> {
    if n < 0 {
        return Err(WatchlistError::invalid_argument(format!(
            "strike count must be non-negative, got {}",
            n
        )));
    }

    let mut universe = strikes.to_vec();
    universe.sort_by(|a, b| a.partial_cmp(b).unwrap());
    universe.dedup();

    let idx = closest_index(&universe, atm_reference).ok_or(WatchlistError::EmptyChain)?;

    let n = n as usize;
    let low = idx.saturating_sub(n);
    let high = (idx + n).min(universe.len() - 1);

    Ok(universe[low..=high].to_vec())
}
