//! Attorep amount parsing and display helpers.

use alloy_primitives::U256;
use anyhow::{Context, Result};

/// Parse an attorep amount, decimal or 0x-prefixed hex.
pub fn parse_amount(input: &str) -> Result<U256> {
    input
        .trim()
        .parse::<U256>()
        .with_context(|| format!("invalid amount: {input:?}"))
}

/// Parse a comma-separated payout numerator list.
pub fn parse_numerators(input: &str) -> Result<Vec<U256>> {
    input
        .split(',')
        .map(parse_amount)
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("invalid numerator list: {input:?}"))
}

/// Render an attorep amount as whole REP, trailing zeros trimmed.
pub fn format_rep(amount: U256) -> String {
    let base = U256::from(10u64).pow(U256::from(18u64));
    let whole = amount / base;
    let frac = amount % base;

    if frac.is_zero() {
        return format!("{whole} REP");
    }

    let digits = frac.to_string();
    let padded = format!("{}{}", "0".repeat(18 - digits.len()), digits);
    format!("{whole}.{} REP", padded.trim_end_matches('0'))
}
