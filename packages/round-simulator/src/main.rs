//! Round simulator CLI: plays seeded Schafkopf rounds between random players
//! through the rules engine and writes one JSONL record per round.

mod output;
mod player;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use output::OutputWriter;
use player::{RandomPlayer, TurnDriver};
use schafkopf_rules::domain::{Modifiers, PlayerId};
use schafkopf_rules::TariffConfig;
use simulator::Simulator;
use tracing::{info, warn};
use types::{RoundRecord, Summary};

#[derive(Parser)]
#[command(name = "round-simulator")]
#[command(about = "Simulate Schafkopf rounds with random legal play")]
struct Args {
    /// Number of rounds to simulate
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// Base seed; round N deals from seed + N. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSONL output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Apply kontra to every round
    #[arg(long)]
    kontra: bool,

    /// Bock doublings applied to every round
    #[arg(long, default_value = "0")]
    bock: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let tariff = TariffConfig::from_env()?;
    let modifiers = Modifiers {
        kontra: args.kontra,
        re: false,
        bock: args.bock,
    };
    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(rounds = args.rounds, base_seed, ?tariff, "starting simulation");

    let players: [Box<dyn TurnDriver>; 4] = [0u64, 1, 2, 3].map(|seat| {
        let seed = args.seed.map(|s| s.wrapping_mul(31).wrapping_add(seat));
        Box::new(RandomPlayer::new(seed)) as Box<dyn TurnDriver>
    });

    let mut writer = OutputWriter::new(args.output.as_deref())?;
    let mut summary = Summary::default();
    let start = Instant::now();

    for round_no in 1..=args.rounds {
        let round_start = Instant::now();
        let seed = base_seed.wrapping_add(round_no as u64);
        let dealer = ((round_no - 1) % 4) as PlayerId;

        let result = Simulator::new(seed, dealer)
            .and_then(|sim| sim.simulate_round(&players, modifiers, &tariff));
        match result {
            Ok(result) => {
                let duration_ms = round_start.elapsed().as_secs_f64() * 1000.0;
                let record = RoundRecord::new(round_no, seed, dealer, result, duration_ms);
                summary.record(&record);
                if let Err(e) = writer.write_round(&record) {
                    warn!("Failed to write round {}: {}", round_no, e);
                }
            }
            Err(e) => {
                summary.errors += 1;
                warn!("Round {} failed: {}", round_no, e);
            }
        }
    }

    if let Some(path) = writer.output_path() {
        info!("Results written to: {}", path.display());
    }
    writer.finish()?;

    print_summary(&summary, start.elapsed(), args.rounds);
    Ok(())
}

fn print_summary(summary: &Summary, elapsed: std::time::Duration, total: u32) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Rounds completed: {}/{}", summary.rounds, total);
    if summary.errors > 0 {
        eprintln!("Errors: {}", summary.errors);
    }
    eprintln!("Total time: {elapsed:?}");
    if summary.rounds == 0 {
        return;
    }
    eprintln!(
        "Attackers won {:.1}% ({} solo games)",
        summary.attacker_win_rate(),
        summary.solo_games
    );
    for (seat, balance) in summary.balances.iter().enumerate() {
        eprintln!("Seat {seat}: balance={balance}");
    }
}
