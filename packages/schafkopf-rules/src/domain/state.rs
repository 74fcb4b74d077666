use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::bidding::Declaration;
use crate::domain::dealing::deal_hands;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS, TRICKS_PER_ROUND};
use crate::domain::trumps::{assign_trumps, GameMode, TrumpTable};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 0..=3

/// Round progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Cards dealt; waiting for the declaration.
    Bidding,
    /// Tricks are being played.
    Playing,
    /// All eight tricks resolved.
    Finished,
}

/// The two parties of a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// Declarer, plus the called-ace holder in a called-ace game.
    Attackers,
    Defenders,
}

impl Side {
    pub const fn index(self) -> usize {
        match self {
            Side::Attackers => 0,
            Side::Defenders => 1,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::Attackers => Side::Defenders,
            Side::Defenders => Side::Attackers,
        }
    }
}

/// A resolved trick.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub leader: PlayerId,
    pub plays: Vec<(PlayerId, Card)>,
    pub winner: PlayerId,
    pub winning_card: Card,
    pub points: u8,
}

/// One hand of Schafkopf, from the deal to the last trick.
///
/// Fields are only mutated by the engine's commit functions
/// ([`declare`](crate::domain::bidding::declare) and
/// [`play_card`](crate::domain::tricks::play_card)); callers read through the
/// accessors. Serialization goes through [`RoundData`], which re-validates the
/// card conservation invariant and rebuilds the trump table on the way in.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoundData", into = "RoundData")]
pub struct Round {
    pub(crate) phase: Phase,
    pub(crate) dealer: PlayerId,
    pub(crate) hands: [Vec<Card>; PLAYERS],
    pub(crate) initial_hands: [Vec<Card>; PLAYERS],
    pub(crate) declaration: Option<Declaration>,
    pub(crate) trumps: Option<TrumpTable>,
    /// Holder of the called ace (called-ace games only).
    pub(crate) partner: Option<PlayerId>,
    /// Monotonic: set once the called suit is led or the called ace is played.
    pub(crate) called_suit_played: bool,
    pub(crate) current_trick: Vec<(PlayerId, Card)>,
    pub(crate) completed_tricks: Vec<CompletedTrick>,
    pub(crate) current_player: PlayerId,
    pub(crate) tricks_won: [u8; PLAYERS],
    pub(crate) points_won: [u16; PLAYERS],
    /// Partnership totals, indexed by [`Side::index`]. Called-ace games only.
    pub(crate) team_points: [u16; 2],
}

impl Round {
    /// Start a round from four dealt hands. The player left of `dealer` leads.
    pub fn new(hands: [Vec<Card>; PLAYERS], dealer: PlayerId) -> Result<Self, DomainError> {
        if dealer as usize >= PLAYERS {
            return Err(DomainError::invalid_deal(format!(
                "dealer seat {dealer} out of range"
            )));
        }
        if let Some(short) = hands.iter().position(|h| h.len() != HAND_SIZE) {
            return Err(DomainError::invalid_deal(format!(
                "hand {short} holds {} cards, expected {HAND_SIZE}",
                hands[short].len()
            )));
        }
        let distinct: HashSet<Card> = hands.iter().flatten().copied().collect();
        if distinct.len() != DECK_SIZE {
            return Err(DomainError::invalid_deal("hands contain duplicate cards"));
        }

        Ok(Self {
            phase: Phase::Bidding,
            dealer,
            initial_hands: hands.clone(),
            hands,
            declaration: None,
            trumps: None,
            partner: None,
            called_suit_played: false,
            current_trick: Vec::with_capacity(PLAYERS),
            completed_tricks: Vec::with_capacity(TRICKS_PER_ROUND),
            current_player: round_start_seat(dealer),
            tricks_won: [0; PLAYERS],
            points_won: [0; PLAYERS],
            team_points: [0; 2],
        })
    }

    /// Shuffle deterministically from `seed` and start a round.
    pub fn deal(seed: u64, dealer: PlayerId) -> Result<Self, DomainError> {
        Self::new(deal_hands(seed), dealer)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    /// Cards still held by `who`; empty for an out-of-range seat.
    pub fn hand(&self, who: PlayerId) -> &[Card] {
        self.hands.get(who as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn hands(&self) -> &[Vec<Card>; PLAYERS] {
        &self.hands
    }

    pub fn initial_hands(&self) -> &[Vec<Card>; PLAYERS] {
        &self.initial_hands
    }

    pub fn declaration(&self) -> Option<&Declaration> {
        self.declaration.as_ref()
    }

    pub fn game_mode(&self) -> Option<GameMode> {
        self.declaration.map(|d| d.mode)
    }

    pub fn trumps(&self) -> Option<&TrumpTable> {
        self.trumps.as_ref()
    }

    pub fn called_suit(&self) -> Option<Suit> {
        self.game_mode().and_then(GameMode::called_suit)
    }

    pub fn called_ace(&self) -> Option<Card> {
        self.game_mode().and_then(GameMode::called_ace)
    }

    pub fn called_suit_played(&self) -> bool {
        self.called_suit_played
    }

    pub fn partner(&self) -> Option<PlayerId> {
        self.partner
    }

    pub fn current_trick(&self) -> &[(PlayerId, Card)] {
        &self.current_trick
    }

    pub fn completed_tricks(&self) -> &[CompletedTrick] {
        &self.completed_tricks
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn tricks_won(&self) -> [u8; PLAYERS] {
        self.tricks_won
    }

    pub fn points_won(&self) -> [u16; PLAYERS] {
        self.points_won
    }

    pub fn team_points(&self) -> [u16; 2] {
        self.team_points
    }

    /// Which party `who` belongs to; `None` before the declaration.
    pub fn side_of(&self, who: PlayerId) -> Option<Side> {
        let declaration = self.declaration?;
        if who == declaration.declarer || Some(who) == self.partner {
            Some(Side::Attackers)
        } else {
            Some(Side::Defenders)
        }
    }

    pub fn players_on(&self, side: Side) -> Vec<PlayerId> {
        (0..PLAYERS as PlayerId)
            .filter(|p| self.side_of(*p) == Some(side))
            .collect()
    }

    /// Card points taken by a side so far.
    pub fn side_points(&self, side: Side) -> u16 {
        if matches!(self.game_mode(), Some(GameMode::CalledAce { .. })) {
            return self.team_points[side.index()];
        }
        self.players_on(side)
            .into_iter()
            .map(|p| self.points_won[p as usize])
            .sum()
    }

    pub fn side_tricks(&self, side: Side) -> u8 {
        self.players_on(side)
            .into_iter()
            .map(|p| self.tricks_won[p as usize])
            .sum()
    }

    /// Verify that all 32 cards are accounted for exactly once and that the
    /// trick bookkeeping is in range.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if self.current_trick.len() >= PLAYERS {
            return Err(DomainError::invariant(format!(
                "current trick holds {} plays",
                self.current_trick.len()
            )));
        }
        if self.completed_tricks.len() > TRICKS_PER_ROUND {
            return Err(DomainError::invariant(format!(
                "{} completed tricks",
                self.completed_tricks.len()
            )));
        }
        if let Some(bad) = self
            .completed_tricks
            .iter()
            .position(|t| t.plays.len() != PLAYERS)
        {
            return Err(DomainError::invariant(format!(
                "completed trick {bad} does not hold {PLAYERS} plays"
            )));
        }

        let in_play = self
            .hands
            .iter()
            .flatten()
            .chain(self.current_trick.iter().map(|(_, c)| c))
            .chain(
                self.completed_tricks
                    .iter()
                    .flat_map(|t| t.plays.iter().map(|(_, c)| c)),
            );
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut total = 0usize;
        for card in in_play {
            total += 1;
            if !seen.insert(*card) {
                return Err(DomainError::invariant(format!("card {card} appears twice")));
            }
        }
        if total != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "{total} cards in play, expected {DECK_SIZE}"
            )));
        }
        if self.current_player as usize >= PLAYERS {
            return Err(DomainError::invariant(format!(
                "current player {} out of range",
                self.current_player
            )));
        }
        if let Some(&(leader, _)) = self.current_trick.first() {
            let expected = expected_actor(leader, self.current_trick.len() as u8);
            if self.current_player != expected {
                return Err(DomainError::invariant(format!(
                    "seat {} to act mid-trick, expected {expected}",
                    self.current_player
                )));
            }
        }
        Ok(())
    }
}

/// Serialized form of a [`Round`]; the trump table is derived, not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundData {
    pub phase: Phase,
    pub dealer: PlayerId,
    pub hands: [Vec<Card>; PLAYERS],
    pub initial_hands: [Vec<Card>; PLAYERS],
    pub declaration: Option<Declaration>,
    pub partner: Option<PlayerId>,
    pub called_suit_played: bool,
    pub current_trick: Vec<(PlayerId, Card)>,
    pub completed_tricks: Vec<CompletedTrick>,
    pub current_player: PlayerId,
    pub tricks_won: [u8; PLAYERS],
    pub points_won: [u16; PLAYERS],
    pub team_points: [u16; 2],
}

impl From<Round> for RoundData {
    fn from(round: Round) -> Self {
        Self {
            phase: round.phase,
            dealer: round.dealer,
            hands: round.hands,
            initial_hands: round.initial_hands,
            declaration: round.declaration,
            partner: round.partner,
            called_suit_played: round.called_suit_played,
            current_trick: round.current_trick,
            completed_tricks: round.completed_tricks,
            current_player: round.current_player,
            tricks_won: round.tricks_won,
            points_won: round.points_won,
            team_points: round.team_points,
        }
    }
}

impl TryFrom<RoundData> for Round {
    type Error = DomainError;

    fn try_from(data: RoundData) -> Result<Self, Self::Error> {
        if data.phase != Phase::Bidding && data.declaration.is_none() {
            return Err(DomainError::invariant(format!(
                "phase {:?} requires a declaration",
                data.phase
            )));
        }
        let round = Round {
            phase: data.phase,
            dealer: data.dealer,
            hands: data.hands,
            initial_hands: data.initial_hands,
            trumps: data.declaration.map(|d| assign_trumps(d.mode)),
            declaration: data.declaration,
            partner: data.partner,
            called_suit_played: data.called_suit_played,
            current_trick: data.current_trick,
            completed_tricks: data.completed_tricks,
            current_player: data.current_player,
            tricks_won: data.tricks_won,
            points_won: data.points_won,
            team_points: data.team_points,
        };
        round.check_invariants()?;
        Ok(round)
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as PlayerId
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    seat_offset(p, 1)
}

/// Returns the previous player counter-clockwise.
#[inline]
pub fn prev_player(p: PlayerId) -> PlayerId {
    seat_offset(p, -1)
}

/// Round-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: PlayerId) -> PlayerId {
    next_player(dealer)
}

/// Expected actor seat during a trick.
///
/// `leader` opened the trick; `play_count` cards have been played into it.
#[inline]
pub fn expected_actor(leader: PlayerId, play_count: u8) -> PlayerId {
    seat_offset(leader, play_count as i8)
}
