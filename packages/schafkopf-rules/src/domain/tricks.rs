use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::cards_logic::is_higher;
use crate::domain::legality::can_play;
use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::state::{next_player, CompletedTrick, Phase, PlayerId, Round, Side};
use crate::domain::trumps::{GameMode, TrumpTable};
use crate::domain::Card;
use crate::errors::domain::{DenyReason, DomainError};

/// Winner and value of a complete trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickResult {
    pub winner: PlayerId,
    pub winning_card: Card,
    pub points: u8,
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Set when this play completed the trick.
    pub trick: Option<TrickResult>,
    /// Seat expected to act next; `None` once the round is finished.
    pub next_player: Option<PlayerId>,
    /// Phase transitioned to, if any.
    pub phase_transitioned: Option<Phase>,
}

impl PlayCardResult {
    pub fn trick_completed(&self) -> bool {
        self.trick.is_some()
    }
}

/// Play a card into the current trick, enforcing every rule of [`can_play`].
///
/// On rejection the round is left untouched. When the fourth card lands the
/// trick is resolved, tallied and cleared, and the winner leads next.
pub fn play_card(round: &mut Round, who: PlayerId, card: Card) -> Result<PlayCardResult, DomainError> {
    can_play(round, who, card)?;

    let hand = &mut round.hands[who as usize];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DenyReason::CardNotInHand.into());
    };
    let removed = hand.remove(pos);

    let leading = round.current_trick.is_empty();
    if let Some(called) = round.called_suit() {
        let trumps = round
            .trumps
            .as_ref()
            .ok_or_else(|| DomainError::invariant("trump table missing while playing"))?;
        let broaches_suit = leading && trumps.is_plain_of(removed, called);
        if broaches_suit || Some(removed) == round.called_ace() {
            round.called_suit_played = true;
        }
    }
    round.current_trick.push((who, removed));
    round.current_player = next_player(who);

    debug!(player = who, card = %removed, trick_len = round.current_trick.len(), "card played");

    if round.current_trick.len() < PLAYERS {
        verify_round(round, "card")?;
        return Ok(PlayCardResult {
            trick: None,
            next_player: Some(round.current_player),
            phase_transitioned: None,
        });
    }

    let result = resolve_current_trick(round)?;
    commit_trick(round, result)?;

    let phase_transitioned = if round.completed_tricks.len() == TRICKS_PER_ROUND {
        round.phase = Phase::Finished;
        debug!(points = ?round.points_won, "round finished");
        Some(Phase::Finished)
    } else {
        None
    };

    verify_round(round, "trick")?;

    Ok(PlayCardResult {
        trick: Some(result),
        next_player: (round.phase == Phase::Playing).then_some(round.current_player),
        phase_transitioned,
    })
}

fn verify_round(round: &Round, after: &'static str) -> Result<(), DomainError> {
    round.check_invariants().inspect_err(|err| {
        error!(%err, after, "round invariant violated");
    })
}

fn commit_trick(round: &mut Round, result: TrickResult) -> Result<(), DomainError> {
    let winner = result.winner as usize;
    round.tricks_won[winner] += 1;
    round.points_won[winner] += result.points as u16;

    if matches!(round.game_mode(), Some(GameMode::CalledAce { .. })) {
        let side = round
            .side_of(result.winner)
            .ok_or_else(|| DomainError::invariant("trick resolved before declaration"))?;
        round.team_points[side.index()] += result.points as u16;
    }

    let plays = std::mem::take(&mut round.current_trick);
    let leader = plays
        .first()
        .map(|(p, _)| *p)
        .ok_or_else(|| DomainError::invariant("resolved an empty trick"))?;
    round.completed_tricks.push(CompletedTrick {
        leader,
        plays,
        winner: result.winner,
        winning_card: result.winning_card,
        points: result.points,
    });
    round.current_player = result.winner;

    debug!(
        winner = result.winner,
        card = %result.winning_card,
        points = result.points,
        attackers = round.side_points(Side::Attackers),
        "trick resolved"
    );
    Ok(())
}

/// Resolve a complete trick: fold left from the lead card with [`is_higher`].
///
/// Anything other than exactly four plays is a caller bug.
pub fn resolve_trick(
    plays: &[(PlayerId, Card)],
    trumps: &TrumpTable,
) -> Result<TrickResult, DomainError> {
    if plays.len() != PLAYERS {
        error!(plays = plays.len(), "resolve_trick called with incomplete trick");
        return Err(DomainError::invariant(format!(
            "trick resolution needs {PLAYERS} plays, got {}",
            plays.len()
        )));
    }

    let mut best = plays[0];
    for &play in &plays[1..] {
        if is_higher(play.1, best.1, trumps) {
            best = play;
        }
    }
    let points = plays.iter().map(|(_, c)| c.point_value()).sum();

    Ok(TrickResult {
        winner: best.0,
        winning_card: best.1,
        points,
    })
}

/// Resolve the round's current trick without committing it.
pub fn resolve_current_trick(round: &Round) -> Result<TrickResult, DomainError> {
    let trumps = round
        .trumps()
        .ok_or_else(|| DomainError::invariant("no trump table before declaration"))?;
    resolve_trick(round.current_trick(), trumps)
}
