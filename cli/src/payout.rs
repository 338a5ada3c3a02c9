//! Payout distribution hash command.

use anyhow::Result;
use colored::Colorize;
use dispute_model::derive_payout_distribution_hash;
use serde_json::json;

use crate::amount;

pub fn run(
    numerators: &str,
    num_ticks: &str,
    num_outcomes: Option<usize>,
    json_output: bool,
) -> Result<()> {
    let numerators = amount::parse_numerators(numerators)?;
    let ticks = amount::parse_amount(num_ticks)?;
    let num_outcomes = num_outcomes.unwrap_or(numerators.len());

    let hash = derive_payout_distribution_hash(&numerators, ticks, num_outcomes)?;

    if json_output {
        let report = json!({
            "payout_numerators": numerators.iter().map(|n| n.to_string()).collect::<Vec<_>>(),
            "num_ticks": ticks.to_string(),
            "num_outcomes": num_outcomes,
            "payout_distribution_hash": hash.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "=== Payout Distribution Hash ===".bright_green().bold());
    println!(
        "{} [{}]",
        "Numerators:".bright_cyan(),
        numerators
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("{} {}", "numTicks:".bright_cyan(), ticks);
    println!("{} {}", "Hash:".bright_cyan(), hash);

    Ok(())
}
