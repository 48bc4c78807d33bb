//! ATM resolution
//!
//! Maps an underlying price and a strike set to the at-the-money reference
//! strike used as the window search center.

use crate::core::{WatchlistError, WatchlistResult};

use super::closest_index;

/// Resolve the ATM reference strike for an underlying price
///
/// Picks the strike minimizing absolute distance to `underlying_price`,
/// breaking equidistant ties toward the lower strike. When `offset` is
/// given it is added to the resolved strike; the sum is only a search
/// center for window selection and need not be a member of `strikes`.
///
/// # Errors
/// `EmptyChain` when `strikes` is empty.
pub fn resolve_atm(
    strikes: &[f64],
    underlying_price: f64,
    offset: Option<f64>,
) -> WatchlistResult<f64> {
    let idx = closest_index(strikes, underlying_price).ok_or(WatchlistError::EmptyChain)?;
    Ok(strikes[idx] + offset.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIKES: [f64; 9] = [
        660.0, 661.0, 662.0, 663.0, 664.0, 665.0, 666.0, 667.0, 668.0,
    ];

    #[test]
    fn test_resolves_nearest_strike() {
        let atm = resolve_atm(&STRIKES, 664.3, None).unwrap();
        assert_eq!(atm, 664.0);
    }

    #[test]
    fn test_result_is_member_of_strike_set() {
        for price in [659.0, 660.2, 663.9, 668.4, 1000.0] {
            let atm = resolve_atm(&STRIKES, price, None).unwrap();
            assert!(STRIKES.contains(&atm));
            // No other strike is strictly closer
            let dist = (atm - price).abs();
            assert!(STRIKES.iter().all(|k| (k - price).abs() >= dist));
        }
    }

    #[test]
    fn test_tie_breaks_toward_lower_strike() {
        let atm = resolve_atm(&STRIKES, 664.5, None).unwrap();
        assert_eq!(atm, 664.0);
    }

    #[test]
    fn test_offset_shifts_resolved_strike() {
        let atm = resolve_atm(&STRIKES, 664.3, Some(2.0)).unwrap();
        assert_eq!(atm, 666.0);
    }

    #[test]
    fn test_offset_result_may_leave_strike_set() {
        let atm = resolve_atm(&STRIKES, 664.3, Some(0.25)).unwrap();
        assert_eq!(atm, 664.25);
        assert!(!STRIKES.contains(&atm));
    }

    #[test]
    fn test_empty_strikes() {
        let err = resolve_atm(&[], 100.0, None).unwrap_err();
        assert!(matches!(err, WatchlistError::EmptyChain));
    }
}
