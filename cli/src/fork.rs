//! Fork threshold derivation command.

use anyhow::Result;
use colored::Colorize;
use dispute_model::{derive_fork_values, ProtocolParams};
use serde_json::json;

use crate::amount;

pub fn run(total_rep_supply: &str, json_output: bool) -> Result<()> {
    let supply = amount::parse_amount(total_rep_supply)?;
    let values = derive_fork_values(supply, &ProtocolParams::default());
    log::debug!("derived fork values from supply {supply}");

    if json_output {
        let report = json!({
            "total_rep_supply": supply.to_string(),
            "fork_reputation_goal": values.fork_reputation_goal.to_string(),
            "dispute_threshold_for_fork": values.dispute_threshold_for_fork.to_string(),
            "initial_report_min_value": values.initial_report_min_value.to_string(),
            "dispute_threshold_for_dispute_pacing":
                values.dispute_threshold_for_dispute_pacing.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "=== Fork Values ===".bright_green().bold());
    println!(
        "{} {}",
        "Total REP supply:".bright_cyan(),
        amount::format_rep(supply)
    );
    println!(
        "{} {}",
        "Fork reputation goal:".bright_cyan(),
        amount::format_rep(values.fork_reputation_goal)
    );
    println!(
        "{} {}",
        "Dispute threshold for fork:".bright_cyan(),
        amount::format_rep(values.dispute_threshold_for_fork)
    );
    println!(
        "{} {}",
        "Initial report minimum:".bright_cyan(),
        amount::format_rep(values.initial_report_min_value)
    );
    println!(
        "{} {}",
        "Dispute pacing threshold:".bright_cyan(),
        amount::format_rep(values.dispute_threshold_for_dispute_pacing)
    );

    Ok(())
}
