//! Dispute and fork staking arithmetic for Augur prediction markets.
//!
//! This crate is the pure calculator behind a reporting client: required
//! dispute stake for a losing outcome, per-outcome stake caps under slow and
//! fast pacing, fork thresholds derived from total REP supply, and the
//! payout distribution hash used to key crowdsourcer state on chain.
//!
//! Everything here is synchronous and side-effect free. Callers fetch chain
//! state elsewhere and pass it in as plain values. Amounts are 256-bit words
//! and division truncates toward zero, matching the arithmetic of the
//! deployed contracts.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod fork;
pub mod outcomes;
pub mod payout;
pub mod stake;

pub use fork::{derive_fork_values, ForkValues, ProtocolParams};
pub use outcomes::{enumerate_one_hot_payouts, MarketType};
pub use payout::derive_payout_distribution_hash;
pub use stake::{
    clamp_stake, max_stake_for_outcome, required_stake, round_total_stake, CrowdsourcerInfo,
    OutcomeStake, OutcomeStatus,
};

/// Fraction of total REP supply that, staked into a single dispute round,
/// forces the universe to fork.
pub const FORK_THRESHOLD_DIVISOR: u64 = 40;

/// Hard cap on dispute rounds; round bonds double until the fork threshold
/// is reached at this count.
pub const MAXIMUM_DISPUTE_ROUNDS: u32 = 20;

/// Rounds guaranteed to run in slow (paced) reporting before dispute pacing
/// can switch off.
pub const MINIMUM_SLOW_ROUNDS: u32 = 8;

/// Error types for calculator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisputeError {
    /// Payout numerator count does not match the market's outcome count
    PayoutLengthMismatch,
    /// The invalid-outcome slot must carry zero or the full tick range
    ImproperInvalidPayout,
    /// Payout numerators do not sum to the market's numTicks
    PayoutSumMismatch,
    /// Scalar markets have no enumerable payout set
    UnsupportedMarketType,
    /// Arithmetic overflow
    Overflow,
}

impl core::fmt::Display for DisputeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::PayoutLengthMismatch => "payout numerator count != outcome count",
            Self::ImproperInvalidPayout => "invalid-outcome slot must be 0 or numTicks",
            Self::PayoutSumMismatch => "payout numerators do not sum to numTicks",
            Self::UnsupportedMarketType => "scalar markets have no enumerable payouts",
            Self::Overflow => "arithmetic overflow",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for DisputeError {}

pub type Result<T> = core::result::Result<T, DisputeError>;
