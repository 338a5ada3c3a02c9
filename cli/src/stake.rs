//! Required-stake and max-stake commands.

use alloy_primitives::Address;
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use dispute_model::{
    clamp_stake, max_stake_for_outcome, required_stake, CrowdsourcerInfo, OutcomeStake,
    OutcomeStatus, ProtocolParams,
};
use serde_json::json;

use crate::amount;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Winning,
    Losing,
    Tie,
}

impl From<StatusArg> for OutcomeStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Winning => OutcomeStatus::Winning,
            StatusArg::Losing => OutcomeStatus::Losing,
            StatusArg::Tie => OutcomeStatus::Tie,
        }
    }
}

pub fn run_required(total_stake: &str, outcome_stake: &str, json_output: bool) -> Result<()> {
    let total = amount::parse_amount(total_stake)?;
    let own = amount::parse_amount(outcome_stake)?;

    let raw = required_stake(total, own)?;
    let clamped = clamp_stake(raw);

    if json_output {
        let report = json!({
            "total_stake": total.to_string(),
            "outcome_stake": own.to_string(),
            "required_stake_raw": raw.to_string(),
            "required_stake": clamped.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "=== Required Dispute Stake ===".bright_green().bold());
    println!(
        "{} {}",
        "Total round stake:".bright_cyan(),
        amount::format_rep(total)
    );
    println!(
        "{} {}",
        "Outcome stake:".bright_cyan(),
        amount::format_rep(own)
    );
    println!("{} {}", "Raw (2T - 3S):".bright_cyan(), raw);
    println!(
        "{} {}",
        "Required stake:".bright_cyan(),
        amount::format_rep(clamped)
    );
    if raw.is_negative() {
        println!("{}", "Outcome already covers the round bond".yellow());
    }

    Ok(())
}

pub struct MaxStakeArgs {
    pub outcome_name: String,
    pub status: StatusArg,
    pub total_stake: String,
    pub outcome_stake: String,
    pub slow: bool,
    pub preemptive_stake: String,
    pub already_contributed: String,
    pub pacing_threshold: String,
    pub crowdsourcer_stake: Option<String>,
    pub crowdsourcer_size: Option<String>,
    pub json: bool,
}

pub fn run_max(args: MaxStakeArgs) -> Result<()> {
    let total = amount::parse_amount(&args.total_stake)?;
    let threshold = amount::parse_amount(&args.pacing_threshold)?;
    let preemptive = amount::parse_amount(&args.preemptive_stake)?;

    let outcome = OutcomeStake {
        outcome_name: args.outcome_name.clone(),
        rep_stake: amount::parse_amount(&args.outcome_stake)?,
        status: args.status.into(),
        payout_numerators: vec![],
        already_contributed: amount::parse_amount(&args.already_contributed)?,
    };

    // Clap enforces that stake and size arrive together
    let last_completed = match (&args.crowdsourcer_stake, &args.crowdsourcer_size) {
        (Some(stake), Some(size)) => Some(CrowdsourcerInfo {
            participant: Address::ZERO,
            payout_numerators: vec![],
            stake: amount::parse_amount(stake)?,
            size: amount::parse_amount(size)?,
        }),
        _ => None,
    };

    let raw = max_stake_for_outcome(
        &outcome,
        total,
        args.slow,
        preemptive,
        threshold,
        last_completed.as_ref(),
        &ProtocolParams::default(),
    )?;
    let clamped = clamp_stake(raw);
    log::debug!(
        "max stake for {:?}: raw {raw}, clamped {clamped}",
        args.outcome_name
    );

    if args.json {
        let report = json!({
            "outcome": args.outcome_name,
            "status": format!("{:?}", outcome.status),
            "slow_reporting": args.slow,
            "max_stake_raw": raw.to_string(),
            "max_stake": clamped.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "=== Maximum Stake ===".bright_green().bold());
    println!("{} {}", "Outcome:".bright_cyan(), args.outcome_name);
    println!("{} {:?}", "Status:".bright_cyan(), outcome.status);
    println!(
        "{} {}",
        "Pacing:".bright_cyan(),
        if args.slow { "slow" } else { "fast" }
    );
    println!("{} {}", "Raw:".bright_cyan(), raw);
    println!(
        "{} {}",
        "Maximum stake:".bright_cyan(),
        amount::format_rep(clamped)
    );
    if clamped.is_zero() {
        println!("{}", "No further stake accepted on this outcome".yellow());
    }

    Ok(())
}
