//! Equity Binary
//!
//! Estimates win/tie/loss equity for a hold'em spot, enumerates outs,
//! and prints the JSON report.
//!
//! Options: --pocket, --board, --rivals, --trials, --seed

use clap::Parser;
use oddsmith::equity::Report;
use oddsmith::equity::Request;
use oddsmith::equity::Simulator;
use oddsmith::equity::Spot;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The hero's hole cards, e.g. "AhKh".
    #[arg(long, required = true)]
    pocket: String,
    /// Known board cards, e.g. "2h7h9s".
    #[arg(long, default_value = "")]
    board: String,
    /// Number of opponents at the table.
    #[arg(long, default_value_t = oddsmith::DEFAULT_RIVALS)]
    rivals: usize,
    /// Monte Carlo trials per estimate.
    #[arg(long, default_value_t = oddsmith::DEFAULT_TRIALS)]
    trials: usize,
    /// Seed for reproducible runs; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    oddsmith::log();
    let args = Args::parse();
    let request = Request {
        player_cards: codes(&args.pocket),
        board_cards: codes(&args.board),
        num_opponents: args.rivals,
    };
    let spot = Spot::try_from(&request)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("estimating {} x{} (seed {})", spot, args.trials, seed);
    let report = Report::from(Simulator::new(spot, args.trials, seed));
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Split concatenated 2-character card codes, whitespace tolerated.
fn codes(cards: &str) -> Vec<String> {
    cards
        .split_whitespace()
        .collect::<String>()
        .as_bytes()
        .chunks(2)
        .map(|chunk| String::from_utf8_lossy(chunk).to_string())
        .collect()
}
