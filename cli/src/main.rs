//! Repstake CLI - offline dispute staking calculator for Augur markets
//!
//! Computes fork thresholds, required dispute stakes, per-outcome stake
//! caps, payout distribution hashes, and reportable payout sets from chain
//! state supplied on the command line. There is no RPC access here; every
//! on-chain input arrives as an argument, every result is printed.

use clap::{Parser, Subcommand};

mod amount;
mod fork;
mod outcomes;
mod payout;
mod stake;

#[derive(Parser)]
#[command(name = "repstake")]
#[command(about = "Augur dispute staking calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive fork thresholds from total REP supply
    ForkValues {
        /// Total REP supply in attorep (decimal or 0x-prefixed hex)
        #[arg(short, long)]
        total_rep_supply: String,
    },

    /// REP required to move a losing outcome into the next round
    RequiredStake {
        /// Total stake across all outcomes this round, in attorep
        #[arg(long)]
        total_stake: String,

        /// Stake already on the outcome in question, in attorep
        #[arg(long)]
        outcome_stake: String,
    },

    /// Maximum additional REP stakeable on one outcome right now
    MaxStake {
        /// Display name for the outcome
        #[arg(long, default_value = "outcome")]
        outcome_name: String,

        /// Current status of the outcome
        #[arg(long, value_enum)]
        status: stake::StatusArg,

        /// Total stake across all outcomes this round, in attorep
        #[arg(long)]
        total_stake: String,

        /// Stake already on this outcome, in attorep
        #[arg(long, default_value = "0")]
        outcome_stake: String,

        /// Round is in slow (paced) reporting
        #[arg(long)]
        slow: bool,

        /// Preemptive stake on the tentative winner, in attorep
        #[arg(long, default_value = "0")]
        preemptive_stake: String,

        /// Caller's own contribution so far, in attorep
        #[arg(long, default_value = "0")]
        already_contributed: String,

        /// disputeThresholdForDisputePacing for the universe, in attorep
        #[arg(long)]
        pacing_threshold: String,

        /// stake reported by the last completed crowdsourcer
        #[arg(long, requires = "crowdsourcer_size")]
        crowdsourcer_stake: Option<String>,

        /// size reported by the last completed crowdsourcer
        #[arg(long, requires = "crowdsourcer_stake")]
        crowdsourcer_size: Option<String>,
    },

    /// Payout distribution hash for a payout set
    PayoutHash {
        /// Comma-separated payout numerators, one per outcome
        #[arg(short, long)]
        numerators: String,

        /// Market numTicks
        #[arg(long)]
        num_ticks: String,

        /// Outcome count; defaults to the numerator count
        #[arg(long)]
        num_outcomes: Option<usize>,
    },

    /// Enumerate the reportable one-hot payout sets for a market
    Outcomes {
        /// Market shape
        #[arg(long, value_enum)]
        market_type: outcomes::MarketTypeArg,

        /// Outcome count, including the invalid slot
        #[arg(long)]
        num_outcomes: usize,

        /// Market numTicks
        #[arg(long)]
        num_ticks: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::ForkValues { total_rep_supply } => fork::run(&total_rep_supply, cli.json),
        Commands::RequiredStake {
            total_stake,
            outcome_stake,
        } => stake::run_required(&total_stake, &outcome_stake, cli.json),
        Commands::MaxStake {
            outcome_name,
            status,
            total_stake,
            outcome_stake,
            slow,
            preemptive_stake,
            already_contributed,
            pacing_threshold,
            crowdsourcer_stake,
            crowdsourcer_size,
        } => stake::run_max(stake::MaxStakeArgs {
            outcome_name,
            status,
            total_stake,
            outcome_stake,
            slow,
            preemptive_stake,
            already_contributed,
            pacing_threshold,
            crowdsourcer_stake,
            crowdsourcer_size,
            json: cli.json,
        }),
        Commands::PayoutHash {
            numerators,
            num_ticks,
            num_outcomes,
        } => payout::run(&numerators, &num_ticks, num_outcomes, cli.json),
        Commands::Outcomes {
            market_type,
            num_outcomes,
            num_ticks,
        } => outcomes::run(market_type, num_outcomes, &num_ticks, cli.json),
    }
}
