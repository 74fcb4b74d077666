//! In-memory round simulator.
//!
//! Drives the rules engine exactly like a table would: deal, ask each seat in
//! turn for a declaration, then request one card at a time from the seat the
//! engine names until the round is finished.

use std::fmt;

use schafkopf_rules::domain::state::next_player;
use schafkopf_rules::domain::{
    available_declarations, declare, legal_moves, play_card, settle_round, CompletedTrick,
    Declaration, Modifiers, Phase, PlayerId, Round, Settlement,
};
use schafkopf_rules::{DomainError, TariffConfig};
use tracing::{debug, info};

use crate::player::{PlayerError, TurnDriver};

const PLAYERS: usize = 4;

#[derive(Debug)]
pub enum SimulatorError {
    Domain(DomainError),
    Player(PlayerError),
    /// Every seat passed although the last one had to declare.
    NoDeclaration,
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::Domain(e) => write!(f, "engine error: {e}"),
            SimulatorError::Player(e) => write!(f, "{e}"),
            SimulatorError::NoDeclaration => write!(f, "no seat declared a game"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}

impl From<PlayerError> for SimulatorError {
    fn from(err: PlayerError) -> Self {
        SimulatorError::Player(err)
    }
}

/// Outcome of one simulated round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub declaration: Declaration,
    pub tricks: Vec<CompletedTrick>,
    pub settlement: Settlement,
}

pub struct Simulator {
    round: Round,
}

impl Simulator {
    /// Deal a round from `seed` with `dealer` dealing.
    pub fn new(seed: u64, dealer: PlayerId) -> Result<Self, SimulatorError> {
        Ok(Self {
            round: Round::deal(seed, dealer)?,
        })
    }

    /// Play the dealt round to the end and settle it.
    pub fn simulate_round(
        mut self,
        players: &[Box<dyn TurnDriver>; PLAYERS],
        modifiers: Modifiers,
        tariff: &TariffConfig,
    ) -> Result<RoundResult, SimulatorError> {
        let declaration = self.run_declarations(players)?;
        declare(&mut self.round, declaration)?;

        while self.round.phase() == Phase::Playing {
            let seat = self.round.current_player();
            let legal = legal_moves(&self.round, seat);
            let card = players[seat as usize].choose_card(&self.round, seat, &legal)?;
            let result = play_card(&mut self.round, seat, card)?;
            if let Some(trick) = result.trick {
                debug!(
                    winner = trick.winner,
                    card = %trick.winning_card,
                    points = trick.points,
                    "trick taken"
                );
            }
        }

        let settlement = settle_round(&self.round, modifiers, tariff)?;
        info!(
            declarer = declaration.declarer,
            mode = ?declaration.mode,
            attackers_won = settlement.attackers_won,
            value = settlement.value,
            "round simulated"
        );
        Ok(RoundResult {
            declaration,
            tricks: self.round.completed_tricks().to_vec(),
            settlement,
        })
    }

    // Seats are asked in play order starting left of the dealer; the first
    // declaration wins. The dealer may not pass.
    fn run_declarations(
        &self,
        players: &[Box<dyn TurnDriver>; PLAYERS],
    ) -> Result<Declaration, SimulatorError> {
        let mut seat = self.round.current_player();
        for asked in 0..PLAYERS {
            let options = available_declarations(&self.round, seat);
            let must_declare = asked == PLAYERS - 1;
            let choice =
                players[seat as usize].choose_declaration(&self.round, seat, &options, must_declare)?;
            if let Some(declaration) = choice {
                return Ok(declaration);
            }
            debug!(seat, "passed");
            seat = next_player(seat);
        }
        Err(SimulatorError::NoDeclaration)
    }
}
