//! Fork thresholds derived from a total-REP-supply snapshot.

use alloy_primitives::U256;

use crate::{FORK_THRESHOLD_DIVISOR, MAXIMUM_DISPUTE_ROUNDS, MINIMUM_SLOW_ROUNDS};

/// Protocol constants for threshold derivation. Always passed explicitly;
/// there is no global parameter state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtocolParams {
    /// Divisor applied to total supply to get the fork threshold. Must be
    /// nonzero.
    pub fork_threshold_divisor: u64,
    pub maximum_dispute_rounds: u32,
    pub minimum_slow_rounds: u32,
    /// Keeps the speed-round crowdsourcer accounting workaround active.
    /// The deployed participant contracts can report `size != stake` on
    /// fast rounds, and stake caps must mirror that accounting until a
    /// protocol upgrade removes it.
    pub speed_round_size_workaround: bool,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            fork_threshold_divisor: FORK_THRESHOLD_DIVISOR,
            maximum_dispute_rounds: MAXIMUM_DISPUTE_ROUNDS,
            minimum_slow_rounds: MINIMUM_SLOW_ROUNDS,
            speed_round_size_workaround: true,
        }
    }
}

/// Thresholds recomputed from each supply snapshot. All values are attorep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForkValues {
    /// REP that must migrate into one child universe to settle a fork
    pub fork_reputation_goal: U256,
    /// Dispute stake in a single round that triggers a fork
    pub dispute_threshold_for_fork: U256,
    /// Stake floor for an initial report
    pub initial_report_min_value: U256,
    /// Filled-stake level at which rounds leave slow pacing
    pub dispute_threshold_for_dispute_pacing: U256,
}

/// Derive fork thresholds from `total_rep_supply`.
///
/// Matches the universe contract's accounting:
///
/// ```text
/// forkReputationGoal            = supply / 2
/// disputeThresholdForFork       = supply / 40
/// initialReportMinValue         = (disputeThresholdForFork / 3) / 2^18 + 1
/// disputeThresholdForDisputePacing = disputeThresholdForFork / 2^9
/// ```
///
/// Zero supply yields zero thresholds except the initial report floor,
/// which stays at one.
pub fn derive_fork_values(total_rep_supply: U256, params: &ProtocolParams) -> ForkValues {
    let dispute_threshold_for_fork =
        total_rep_supply / U256::from(params.fork_threshold_divisor);

    let initial_report_min_value = ((dispute_threshold_for_fork / U256::from(3u64))
        >> ((params.maximum_dispute_rounds - 2) as usize))
        + U256::ONE;

    let dispute_threshold_for_dispute_pacing =
        dispute_threshold_for_fork >> ((params.minimum_slow_rounds + 1) as usize);

    ForkValues {
        fork_reputation_goal: total_rep_supply / U256::from(2u64),
        dispute_threshold_for_fork,
        initial_report_min_value,
        dispute_threshold_for_dispute_pacing,
    }
}
