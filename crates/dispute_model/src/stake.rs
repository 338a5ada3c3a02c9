//! Per-round stake arithmetic: dispute bonds and per-outcome caps.

use alloc::string::String;
use alloc::vec::Vec;

use alloy_primitives::{Address, Sign, I256, U256};

use crate::{DisputeError, ProtocolParams, Result};

/// Where an outcome stands in the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeStatus {
    Winning,
    Losing,
    Tie,
}

/// Stake record for one outcome in the current dispute round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeStake {
    pub outcome_name: String,
    /// Total REP staked on this outcome this round
    pub rep_stake: U256,
    pub status: OutcomeStatus,
    /// Payout allocation this outcome represents; length equals the
    /// market's outcome count, entries sum to numTicks
    pub payout_numerators: Vec<U256>,
    /// Caller's own contribution to this outcome so far
    pub already_contributed: U256,
}

/// Snapshot of the last completed (or preemptive) crowdsourcer for a market.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrowdsourcerInfo {
    pub participant: Address,
    pub payout_numerators: Vec<U256>,
    pub stake: U256,
    /// Equals `stake` under correct accounting; the deployed contracts let
    /// it diverge on speed rounds (see
    /// [`ProtocolParams::speed_round_size_workaround`])
    pub size: U256,
}

impl CrowdsourcerInfo {
    /// True when the participant contract reports divergent accounting.
    pub fn has_size_mismatch(&self) -> bool {
        self.size != self.stake
    }
}

fn to_signed(value: U256) -> Result<I256> {
    I256::checked_from_sign_and_abs(Sign::Positive, value).ok_or(DisputeError::Overflow)
}

fn sub_all(base: I256, deductions: &[I256]) -> Result<I256> {
    deductions.iter().try_fold(base, |acc, d| {
        acc.checked_sub(*d).ok_or(DisputeError::Overflow)
    })
}

/// REP required to move a losing outcome into the next round:
/// `2 * totalStake - 3 * stakeInThisOutcome`, the market contract's bonding
/// formula.
///
/// The raw value is returned and may be negative; [`clamp_stake`] is the
/// display boundary.
pub fn required_stake(
    total_stake_all_outcomes: U256,
    stake_in_this_outcome: U256,
) -> Result<I256> {
    let total = to_signed(total_stake_all_outcomes)?;
    let own = to_signed(stake_in_this_outcome)?;

    let doubled_total = total.checked_add(total).ok_or(DisputeError::Overflow)?;
    let tripled_own = own
        .checked_add(own)
        .and_then(|twice| twice.checked_add(own))
        .ok_or(DisputeError::Overflow)?;

    doubled_total
        .checked_sub(tripled_own)
        .ok_or(DisputeError::Overflow)
}

/// Maximum additional REP the caller may put on `outcome` right now.
///
/// First matching branch wins:
///
/// 1. fast round, a completed crowdsourcer with divergent size/stake, and a
///    winning outcome: pacing threshold minus preemptive stake and own
///    contribution (mirrors the deployed contracts' speed-round accounting,
///    gated by [`ProtocolParams::speed_round_size_workaround`]);
/// 2. initial reporting (nothing staked on any outcome yet): the same cap,
///    regardless of status;
/// 3. otherwise the bonding formula: non-winning outcomes may fill the
///    round bond less what the caller already put in; winning outcomes are
///    done in slow rounds and capped at the remaining pacing headroom in
///    fast rounds.
///
/// The raw signed value is returned; callers clamp for display.
pub fn max_stake_for_outcome(
    outcome: &OutcomeStake,
    total_stake_all_outcomes: U256,
    slow_reporting: bool,
    preemptive_stake: U256,
    dispute_pacing_threshold: U256,
    last_completed: Option<&CrowdsourcerInfo>,
    params: &ProtocolParams,
) -> Result<I256> {
    let threshold = to_signed(dispute_pacing_threshold)?;
    let preemptive = to_signed(preemptive_stake)?;
    let already = to_signed(outcome.already_contributed)?;

    let winning = outcome.status == OutcomeStatus::Winning;
    let size_mismatch = last_completed.is_some_and(CrowdsourcerInfo::has_size_mismatch);

    if params.speed_round_size_workaround && !slow_reporting && size_mismatch && winning {
        return sub_all(threshold, &[preemptive, already]);
    }

    if total_stake_all_outcomes.is_zero() {
        return sub_all(threshold, &[preemptive, already]);
    }

    let required = required_stake(total_stake_all_outcomes, outcome.rep_stake)?;
    match (slow_reporting, winning) {
        (true, true) => Ok(I256::ZERO),
        (false, true) => {
            let total = to_signed(total_stake_all_outcomes)?;
            sub_all(threshold, &[total, preemptive, already])
        }
        (_, false) => required
            .checked_sub(already)
            .ok_or(DisputeError::Overflow),
    }
}

/// Display-boundary clamp: negative stake amounts render as zero.
pub fn clamp_stake(amount: I256) -> U256 {
    if amount.is_negative() {
        U256::ZERO
    } else {
        amount.unsigned_abs()
    }
}

/// Total REP staked across all outcomes this round.
pub fn round_total_stake(outcomes: &[OutcomeStake]) -> Result<U256> {
    outcomes.iter().try_fold(U256::ZERO, |acc, outcome| {
        acc.checked_add(outcome.rep_stake)
            .ok_or(DisputeError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn outcome(name: &str, rep_stake: u64, status: OutcomeStatus, already: u64) -> OutcomeStake {
        OutcomeStake {
            outcome_name: name.to_string(),
            rep_stake: U256::from(rep_stake),
            status,
            payout_numerators: vec![],
            already_contributed: U256::from(already),
        }
    }

    fn crowdsourcer(stake: u64, size: u64) -> CrowdsourcerInfo {
        CrowdsourcerInfo {
            participant: Address::ZERO,
            payout_numerators: vec![],
            stake: U256::from(stake),
            size: U256::from(size),
        }
    }

    fn signed(value: i64) -> I256 {
        I256::try_from(value).unwrap()
    }

    #[test]
    fn required_stake_matches_bonding_formula() {
        // 2*900 - 3*200
        assert_eq!(
            required_stake(U256::from(900u64), U256::from(200u64)).unwrap(),
            signed(1200)
        );
        assert_eq!(required_stake(U256::ZERO, U256::ZERO).unwrap(), I256::ZERO);
    }

    #[test]
    fn required_stake_can_go_negative() {
        // Outcome holding more than 2/3 of the round already covers the bond
        assert_eq!(
            required_stake(U256::from(300u64), U256::from(300u64)).unwrap(),
            signed(-300)
        );
    }

    #[test]
    fn clamp_drops_negative_amounts() {
        assert_eq!(clamp_stake(signed(-300)), U256::ZERO);
        assert_eq!(clamp_stake(signed(450)), U256::from(450u64));
        assert_eq!(clamp_stake(I256::ZERO), U256::ZERO);
    }

    #[test]
    fn initial_reporting_caps_at_pacing_threshold() {
        let params = ProtocolParams::default();
        for status in [OutcomeStatus::Winning, OutcomeStatus::Losing, OutcomeStatus::Tie] {
            let max = max_stake_for_outcome(
                &outcome("yes", 0, status, 25),
                U256::ZERO,
                false,
                U256::from(100u64),
                U256::from(1000u64),
                None,
                &params,
            )
            .unwrap();
            // threshold - preemptive - already
            assert_eq!(max, signed(875));
        }
    }

    #[test]
    fn slow_round_losing_outcome_fills_the_bond() {
        let params = ProtocolParams::default();
        let max = max_stake_for_outcome(
            &outcome("no", 200, OutcomeStatus::Losing, 50),
            U256::from(900u64),
            true,
            U256::ZERO,
            U256::from(10_000u64),
            None,
            &params,
        )
        .unwrap();
        // requiredStake(900, 200) - 50
        assert_eq!(max, signed(1150));
    }

    #[test]
    fn slow_round_winning_outcome_is_satisfied() {
        let params = ProtocolParams::default();
        let max = max_stake_for_outcome(
            &outcome("yes", 700, OutcomeStatus::Winning, 0),
            U256::from(900u64),
            true,
            U256::ZERO,
            U256::from(10_000u64),
            None,
            &params,
        )
        .unwrap();
        assert_eq!(max, I256::ZERO);
    }

    #[test]
    fn fast_round_winning_outcome_has_pacing_headroom() {
        let params = ProtocolParams::default();
        let max = max_stake_for_outcome(
            &outcome("yes", 700, OutcomeStatus::Winning, 30),
            U256::from(900u64),
            false,
            U256::from(70u64),
            U256::from(10_000u64),
            None,
            &params,
        )
        .unwrap();
        // threshold - total - preemptive - already
        assert_eq!(max, signed(9000));
    }

    #[test]
    fn speed_round_size_mismatch_takes_the_workaround_branch() {
        let params = ProtocolParams::default();
        let snapshot = crowdsourcer(500, 480);
        assert!(snapshot.has_size_mismatch());

        let max = max_stake_for_outcome(
            &outcome("yes", 700, OutcomeStatus::Winning, 30),
            U256::from(900u64),
            false,
            U256::from(70u64),
            U256::from(10_000u64),
            Some(&snapshot),
            &params,
        )
        .unwrap();
        // threshold - preemptive - already, total stake not deducted
        assert_eq!(max, signed(9900));
    }

    #[test]
    fn size_mismatch_ignored_for_losing_outcomes_and_slow_rounds() {
        let params = ProtocolParams::default();
        let snapshot = crowdsourcer(500, 480);

        let losing = max_stake_for_outcome(
            &outcome("no", 200, OutcomeStatus::Losing, 0),
            U256::from(900u64),
            false,
            U256::ZERO,
            U256::from(10_000u64),
            Some(&snapshot),
            &params,
        )
        .unwrap();
        assert_eq!(losing, signed(1200));

        let slow = max_stake_for_outcome(
            &outcome("yes", 700, OutcomeStatus::Winning, 0),
            U256::from(900u64),
            true,
            U256::ZERO,
            U256::from(10_000u64),
            Some(&snapshot),
            &params,
        )
        .unwrap();
        assert_eq!(slow, I256::ZERO);
    }

    #[test]
    fn workaround_flag_off_restores_plain_fast_accounting() {
        let params = ProtocolParams {
            speed_round_size_workaround: false,
            ..ProtocolParams::default()
        };
        let snapshot = crowdsourcer(500, 480);

        let max = max_stake_for_outcome(
            &outcome("yes", 700, OutcomeStatus::Winning, 30),
            U256::from(900u64),
            false,
            U256::from(70u64),
            U256::from(10_000u64),
            Some(&snapshot),
            &params,
        )
        .unwrap();
        // falls through to the fast-winning branch
        assert_eq!(max, signed(9000));
    }

    #[test]
    fn matched_size_and_stake_does_not_trigger_the_workaround() {
        let params = ProtocolParams::default();
        let snapshot = crowdsourcer(500, 500);

        let max = max_stake_for_outcome(
            &outcome("yes", 700, OutcomeStatus::Winning, 30),
            U256::from(900u64),
            false,
            U256::from(70u64),
            U256::from(10_000u64),
            Some(&snapshot),
            &params,
        )
        .unwrap();
        assert_eq!(max, signed(9000));
    }

    #[test]
    fn tie_outcomes_take_the_losing_path() {
        let params = ProtocolParams::default();
        let max = max_stake_for_outcome(
            &outcome("tied", 450, OutcomeStatus::Tie, 0),
            U256::from(900u64),
            true,
            U256::ZERO,
            U256::from(10_000u64),
            None,
            &params,
        )
        .unwrap();
        // requiredStake(900, 450)
        assert_eq!(max, signed(450));
    }

    #[test]
    fn round_total_sums_all_outcomes() {
        let outcomes = [
            outcome("invalid", 10, OutcomeStatus::Losing, 0),
            outcome("yes", 700, OutcomeStatus::Winning, 0),
            outcome("no", 190, OutcomeStatus::Losing, 0),
        ];
        assert_eq!(round_total_stake(&outcomes).unwrap(), U256::from(900u64));
        assert_eq!(round_total_stake(&[]).unwrap(), U256::ZERO);
    }
}
