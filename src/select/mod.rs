//! Strike selection around ATM
//!
//! Two-stage pipeline:
//! 1. **ATM resolution**: snap the underlying price to the nearest strike,
//!    optionally shifted by a manual offset
//! 2. **Window selection**: take n strikes on each side of the reference,
//!    truncated (not re-centered) at the chain boundaries

mod atm;
mod window;

pub use atm::*;
pub use window::*;

/// Index of the strike closest to `reference`
///
/// Equidistant ties break toward the lower strike, independent of input
/// order. Returns `None` for an empty slice.
pub(crate) fn closest_index(strikes: &[f64], reference: f64) -> Option<usize> {
    strikes
        .iter()
        .enumerate()
        .fold(None, |best: Option<usize>, (i, &k)| match best {
            None => Some(i),
            Some(j) => {
                let di = (k - reference).abs();
                let dj = (strikes[j] - reference).abs();
                if di < dj || (di == dj && k < strikes[j]) {
                    Some(i)
                } else {
                    Some(j)
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_index_basic() {
        let strikes = [660.0, 661.0, 662.0, 663.0];
        assert_eq!(closest_index(&strikes, 661.4), Some(1));
        assert_eq!(closest_index(&strikes, 700.0), Some(3));
    }

    #[test]
    fn test_closest_index_tie_breaks_lower() {
        let strikes = [660.0, 661.0];
        assert_eq!(closest_index(&strikes, 660.5), Some(0));

        // Lower strike wins even when iterated after the higher one
        let reversed = [661.0, 660.0];
        assert_eq!(closest_index(&reversed, 660.5), Some(1));
    }

    #[test]
    fn test_closest_index_empty() {
        assert_eq!(closest_index(&[], 100.0), None);
    }
}
