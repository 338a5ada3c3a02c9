//! Enumerates the discrete payout sets a reporter can choose from.

use alloc::vec;
use alloc::vec::Vec;

use alloy_primitives::U256;

use crate::{DisputeError, Result};

/// Augur market shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarketType {
    YesNo,
    Categorical,
    /// Scalar resolutions span a continuous tick range and are reported via
    /// a numeric input, not an enumerated choice
    Scalar,
}

/// One payout vector per outcome index: that index takes the full
/// `num_ticks`, every other slot takes zero.
///
/// Scalar markets fail with [`DisputeError::UnsupportedMarketType`]; their
/// allocation is handled by a separate input path.
pub fn enumerate_one_hot_payouts(
    market_type: MarketType,
    num_outcomes: usize,
    num_ticks: U256,
) -> Result<Vec<Vec<U256>>> {
    if market_type == MarketType::Scalar {
        return Err(DisputeError::UnsupportedMarketType);
    }

    let mut payouts = Vec::with_capacity(num_outcomes);
    for winner in 0..num_outcomes {
        let mut numerators = vec![U256::ZERO; num_outcomes];
        numerators[winner] = num_ticks;
        payouts.push(numerators);
    }
    Ok(payouts)
}
