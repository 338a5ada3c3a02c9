//! Payout distribution hashes.
//!
//! The hash keys crowdsourcer state on chain, so the packing is a fixed
//! wire format: each numerator as a 32-byte big-endian word, concatenated
//! in report order, then keccak256. Any deviation breaks on-chain lookups.

use alloc::vec::Vec;

use alloy_primitives::{keccak256, B256, U256};

use crate::{DisputeError, Result};

/// Validate `payout_numerators` against the market shape and derive the
/// distribution hash.
///
/// The invalid-outcome slot (index 0) must be all-or-nothing: zero, or the
/// full `num_ticks`. The numerators must cover every outcome and sum to
/// `num_ticks` exactly. Failures are reported, never corrected.
pub fn derive_payout_distribution_hash(
    payout_numerators: &[U256],
    num_ticks: U256,
    num_outcomes: usize,
) -> Result<B256> {
    if payout_numerators.len() != num_outcomes {
        return Err(DisputeError::PayoutLengthMismatch);
    }

    if let Some(&invalid_slot) = payout_numerators.first() {
        if !invalid_slot.is_zero() && invalid_slot != num_ticks {
            return Err(DisputeError::ImproperInvalidPayout);
        }
    }

    let mut sum = U256::ZERO;
    for numerator in payout_numerators {
        sum = sum.checked_add(*numerator).ok_or(DisputeError::Overflow)?;
    }
    if sum != num_ticks {
        return Err(DisputeError::PayoutSumMismatch);
    }

    Ok(keccak256(pack_numerators(payout_numerators)))
}

fn pack_numerators(payout_numerators: &[U256]) -> Vec<u8> {
    let mut packed = Vec::with_capacity(payout_numerators.len() * 32);
    for numerator in payout_numerators {
        packed.extend_from_slice(&numerator.to_be_bytes::<32>());
    }
    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloy_primitives::b256;

    fn u(value: u64) -> U256 {
        U256::from(value)
    }

    #[test]
    fn hash_is_deterministic() {
        let numerators = vec![u(0), u(1000), u(0)];
        let first = derive_payout_distribution_hash(&numerators, u(1000), 3).unwrap();
        let second = derive_payout_distribution_hash(&numerators, u(1000), 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn differing_numerators_hash_differently() {
        let yes = derive_payout_distribution_hash(&[u(0), u(1000), u(0)], u(1000), 3).unwrap();
        let no = derive_payout_distribution_hash(&[u(0), u(0), u(1000)], u(1000), 3).unwrap();
        assert_ne!(yes, no);
    }

    #[test]
    fn packing_matches_the_contract_word_layout() {
        // keccak256 of a single zero uint256 word
        let zero_word = derive_payout_distribution_hash(&[u(0)], u(0), 1).unwrap();
        assert_eq!(
            zero_word,
            b256!("290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563")
        );
    }

    #[test]
    fn empty_market_shape_hashes_empty_bytes() {
        // Degenerate but total: no outcomes, no ticks
        let hash = derive_payout_distribution_hash(&[], u(0), 0).unwrap();
        assert_eq!(
            hash,
            b256!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }

    #[test]
    fn rejects_wrong_numerator_count() {
        let err = derive_payout_distribution_hash(&[u(0), u(1000)], u(1000), 3).unwrap_err();
        assert_eq!(err, DisputeError::PayoutLengthMismatch);
    }

    #[test]
    fn rejects_partial_invalid_slot() {
        // A report is fully valid or fully invalid, nothing in between
        let err = derive_payout_distribution_hash(&[u(500), u(500)], u(1000), 2).unwrap_err();
        assert_eq!(err, DisputeError::ImproperInvalidPayout);
    }

    #[test]
    fn accepts_fully_invalid_reports() {
        derive_payout_distribution_hash(&[u(1000), u(0), u(0)], u(1000), 3).unwrap();
    }

    #[test]
    fn rejects_sum_mismatch() {
        let err = derive_payout_distribution_hash(&[u(0), u(600)], u(1000), 2).unwrap_err();
        assert_eq!(err, DisputeError::PayoutSumMismatch);
    }
}
