//! Records written by the simulator.

use serde::Serialize;
use schafkopf_rules::domain::{CompletedTrick, Declaration, PlayerId, Settlement};

use crate::simulator::RoundResult;

/// One JSONL line per simulated round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    pub round_no: u32,
    pub seed: u64,
    pub dealer: PlayerId,
    pub declaration: Declaration,
    pub tricks: Vec<CompletedTrick>,
    pub settlement: Settlement,
    pub duration_ms: f64,
}

impl RoundRecord {
    pub fn new(
        round_no: u32,
        seed: u64,
        dealer: PlayerId,
        result: RoundResult,
        duration_ms: f64,
    ) -> Self {
        Self {
            round_no,
            seed,
            dealer,
            declaration: result.declaration,
            tricks: result.tricks,
            settlement: result.settlement,
            duration_ms,
        }
    }
}

/// Running totals printed at the end of a run.
#[derive(Debug, Default)]
pub struct Summary {
    pub rounds: u32,
    pub errors: u32,
    pub attacker_wins: u32,
    pub solo_games: u32,
    pub balances: [i64; 4],
}

impl Summary {
    pub fn record(&mut self, record: &RoundRecord) {
        self.rounds += 1;
        if record.settlement.attackers_won {
            self.attacker_wins += 1;
        }
        if record.declaration.mode.is_solo() {
            self.solo_games += 1;
        }
        for (balance, payout) in self.balances.iter_mut().zip(record.settlement.payouts) {
            *balance += payout;
        }
    }

    pub fn attacker_win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.attacker_wins as f64 / self.rounds as f64 * 100.0
    }
}
