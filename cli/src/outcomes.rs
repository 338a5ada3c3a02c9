//! Payout set enumeration command.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use dispute_model::{enumerate_one_hot_payouts, MarketType};
use serde_json::json;

use crate::amount;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MarketTypeArg {
    YesNo,
    Categorical,
    Scalar,
}

impl From<MarketTypeArg> for MarketType {
    fn from(market_type: MarketTypeArg) -> Self {
        match market_type {
            MarketTypeArg::YesNo => MarketType::YesNo,
            MarketTypeArg::Categorical => MarketType::Categorical,
            MarketTypeArg::Scalar => MarketType::Scalar,
        }
    }
}

pub fn run(
    market_type: MarketTypeArg,
    num_outcomes: usize,
    num_ticks: &str,
    json_output: bool,
) -> Result<()> {
    let ticks = amount::parse_amount(num_ticks)?;
    let payouts = enumerate_one_hot_payouts(market_type.into(), num_outcomes, ticks)?;

    if json_output {
        let report = json!({
            "market_type": format!("{market_type:?}"),
            "num_outcomes": num_outcomes,
            "num_ticks": ticks.to_string(),
            "payouts": payouts
                .iter()
                .map(|numerators| {
                    numerators.iter().map(|n| n.to_string()).collect::<Vec<_>>()
                })
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "=== Reportable Payout Sets ===".bright_green().bold());
    println!("{} {:?}", "Market type:".bright_cyan(), market_type);
    println!("{} {}", "numTicks:".bright_cyan(), ticks);
    for (index, numerators) in payouts.iter().enumerate() {
        let rendered = numerators
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {}: [{}]", "Outcome".bright_cyan(), index, rendered);
    }

    Ok(())
}
