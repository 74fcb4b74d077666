//! Round settlement: win/loss, schneider/schwarz, laufende and tariff.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::tariff::TariffConfig;
use crate::domain::bidding::Contract;
use crate::domain::rules::{
    tariff_multiplier, PLAYERS, SCHNEIDER_LOSS_THRESHOLD, SCHNEIDER_WIN_THRESHOLD, TOTAL_POINTS,
    WIN_THRESHOLD,
};
use crate::domain::state::{Phase, PlayerId, Round, Side};
use crate::domain::trumps::{GameMode, TrumpTable};
use crate::domain::Card;
use crate::errors::domain::{DenyReason, DomainError};

/// Stake doublings announced before or during play.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Defenders doubled.
    pub kontra: bool,
    /// Attackers answered kontra.
    pub re: bool,
    /// Number of bock doublings in force for this round.
    pub bock: u8,
}

impl Modifiers {
    pub fn doublings(&self) -> u32 {
        self.kontra as u32 + self.re as u32 + self.bock as u32
    }
}

/// An unbroken run of top trumps held by one side at the deal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Laufende {
    pub side: Side,
    pub count: u8,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub declarer: PlayerId,
    pub mode: GameMode,
    pub contract: Contract,
    pub attackers: Vec<PlayerId>,
    pub attacker_points: u16,
    pub defender_points: u16,
    pub attackers_won: bool,
    pub schneider: bool,
    pub schwarz: bool,
    /// Only present when the run reaches the configured minimum.
    pub laufende: Option<Laufende>,
    pub modifiers: Modifiers,
    /// Game value from the attackers' view: negative when they lost.
    pub value: i64,
    /// Per-seat gain (positive) or loss (negative); sums to zero.
    pub payouts: [i64; PLAYERS],
}

/// Length of the run of highest trumps held by a single side in the initial
/// hands, starting from the single highest trump of the mode.
pub fn trump_run(
    initial_hands: &[Vec<Card>; PLAYERS],
    trumps: &TrumpTable,
    side_of: impl Fn(PlayerId) -> Side,
) -> Option<Laufende> {
    let owner = |card: Card| -> Option<PlayerId> {
        initial_hands
            .iter()
            .position(|hand| hand.contains(&card))
            .map(|p| p as PlayerId)
    };

    let mut sides = trumps
        .trumps_descending()
        .into_iter()
        .map(|card| owner(card).map(&side_of));
    let side = sides.next()??;
    let count = 1 + sides.take_while(|s| *s == Some(side)).count();
    Some(Laufende {
        side,
        count: count as u8,
    })
}

/// Laufende that count for the settlement (run length at least `min`).
pub fn laufende(round: &Round, min: u8) -> Option<Laufende> {
    let trumps = round.trumps()?;
    let run = trump_run(round.initial_hands(), trumps, |p| {
        round.side_of(p).unwrap_or(Side::Defenders)
    })?;
    (run.count >= min).then_some(run)
}

/// Settle a finished round.
pub fn settle_round(
    round: &Round,
    modifiers: Modifiers,
    config: &TariffConfig,
) -> Result<Settlement, DomainError> {
    if round.phase() != Phase::Finished {
        return Err(DenyReason::WrongPhase.into());
    }
    if modifiers.re && !modifiers.kontra {
        return Err(DomainError::InvalidModifiers(
            "re requires a preceding kontra".into(),
        ));
    }
    let declaration = *round
        .declaration()
        .ok_or_else(|| DomainError::invariant("finished round without declaration"))?;

    let attacker_points = round.side_points(Side::Attackers);
    let defender_points = round.side_points(Side::Defenders);
    let defender_tricks = round.side_tricks(Side::Defenders);

    let attackers_won = match declaration.contract {
        Contract::Normal => attacker_points >= WIN_THRESHOLD,
        Contract::Tout | Contract::Sie => defender_tricks == 0,
    };
    let schneider = if attackers_won {
        attacker_points >= SCHNEIDER_WIN_THRESHOLD
    } else {
        attacker_points <= SCHNEIDER_LOSS_THRESHOLD
    };
    let schwarz = if attackers_won {
        attacker_points == TOTAL_POINTS
    } else {
        attacker_points == 0
    };
    let laufende = laufende(round, config.laufende_min);

    let value = tariff_value(
        declaration.mode,
        declaration.contract,
        schneider,
        schwarz,
        laufende,
        modifiers,
        config,
    )?;
    let value = if attackers_won { value } else { -value };

    let solo_value = value.checked_mul(3).ok_or_else(tariff_overflow)?;
    let mut payouts = [0i64; PLAYERS];
    let solo = declaration.mode.is_solo();
    for seat in 0..PLAYERS as PlayerId {
        payouts[seat as usize] = match round.side_of(seat) {
            Some(Side::Attackers) if solo => solo_value,
            Some(Side::Attackers) => value,
            _ => -value,
        };
    }

    debug!(
        attacker_points,
        defender_points, schneider, schwarz, ?laufende, "round scored"
    );
    info!(
        declarer = declaration.declarer,
        mode = ?declaration.mode,
        attackers_won,
        value,
        "round settled"
    );

    Ok(Settlement {
        declarer: declaration.declarer,
        mode: declaration.mode,
        contract: declaration.contract,
        attackers: round.players_on(Side::Attackers),
        attacker_points,
        defender_points,
        attackers_won,
        schneider,
        schwarz,
        laufende,
        modifiers,
        value,
        payouts,
    })
}

fn tariff_overflow() -> DomainError {
    DomainError::InvalidModifiers("tariff overflow".into())
}

/// Unsigned game value before the win/loss sign is applied.
fn tariff_value(
    mode: GameMode,
    contract: Contract,
    schneider: bool,
    schwarz: bool,
    laufende: Option<Laufende>,
    modifiers: Modifiers,
    config: &TariffConfig,
) -> Result<i64, DomainError> {
    let mut units = tariff_multiplier(mode, contract);
    if contract == Contract::Normal {
        if schneider {
            units = units
                .checked_add(config.schneider_units)
                .ok_or_else(tariff_overflow)?;
        }
        if schwarz {
            units = units
                .checked_add(config.schwarz_units)
                .ok_or_else(tariff_overflow)?;
        }
    }
    if let Some(run) = laufende {
        units = units
            .checked_add(run.count as i64)
            .ok_or_else(tariff_overflow)?;
    }

    let mut magnitude = config
        .base_tariff
        .checked_mul(units)
        .ok_or_else(tariff_overflow)?;
    for _ in 0..modifiers.doublings() {
        magnitude = magnitude.checked_mul(2).ok_or_else(tariff_overflow)?;
    }
    Ok(magnitude)
}
