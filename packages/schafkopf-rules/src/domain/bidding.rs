//! Declarations handed over by the bidding component.
//!
//! Who gets to play what is decided outside the engine; this module only
//! checks that the resulting declaration is playable with the dealt hands and
//! moves the round into the playing phase.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::cards_logic::hand_has_plain_suit;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Phase, PlayerId, Round};
use crate::domain::trumps::{assign_trumps, GameMode};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DeclarationError, DenyReason, DomainError};

/// Stake level announced with the game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Contract {
    #[default]
    Normal,
    /// Declarer's side announces it takes every trick.
    Tout,
    /// Declarer holds every Over and Under; the highest declaration.
    Sie,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    pub declarer: PlayerId,
    pub mode: GameMode,
    #[serde(default)]
    pub contract: Contract,
}

impl Declaration {
    pub fn called_ace(declarer: PlayerId, called: Suit) -> Self {
        Self {
            declarer,
            mode: GameMode::CalledAce { called },
            contract: Contract::Normal,
        }
    }

    pub fn wenz(declarer: PlayerId) -> Self {
        Self {
            declarer,
            mode: GameMode::Wenz,
            contract: Contract::Normal,
        }
    }

    pub fn solo(declarer: PlayerId, trump: Suit) -> Self {
        Self {
            declarer,
            mode: GameMode::Solo { trump },
            contract: Contract::Normal,
        }
    }

    pub fn with_contract(mut self, contract: Contract) -> Self {
        self.contract = contract;
        self
    }
}

/// Check `declaration` against the declarer's hand without touching the round.
pub fn validate_declaration(
    round: &Round,
    declaration: &Declaration,
) -> Result<(), DeclarationError> {
    if declaration.declarer as usize >= PLAYERS {
        return Err(DeclarationError::InvalidPlayer);
    }
    let hand = round.hand(declaration.declarer);

    match (declaration.mode, declaration.contract) {
        (GameMode::CalledAce { called }, Contract::Normal) => {
            if called == Suit::Hearts {
                return Err(DeclarationError::InvalidCalledSuit);
            }
            if hand.contains(&Card::new(called, Rank::Ace)) {
                return Err(DeclarationError::CalledAceHeldByDeclarer);
            }
            let trumps = assign_trumps(declaration.mode);
            if !hand_has_plain_suit(hand, called, &trumps) {
                return Err(DeclarationError::NoCardOfCalledSuit);
            }
            Ok(())
        }
        (GameMode::CalledAce { .. }, _) => Err(DeclarationError::ContractNotAllowed),
        (GameMode::Wenz, Contract::Sie) => Err(DeclarationError::ContractNotAllowed),
        (GameMode::Solo { .. }, Contract::Sie) => {
            let top_trumps = hand
                .iter()
                .filter(|c| matches!(c.rank, Rank::Over | Rank::Under))
                .count();
            if top_trumps < 8 {
                return Err(DeclarationError::NotEnoughTrumpsForSie);
            }
            Ok(())
        }
        (GameMode::Wenz | GameMode::Solo { .. }, Contract::Normal | Contract::Tout) => Ok(()),
    }
}

/// Fix the game mode for the round, stamp the trump table and start play.
pub fn declare(round: &mut Round, declaration: Declaration) -> Result<(), DomainError> {
    if round.phase != Phase::Bidding {
        return Err(DenyReason::WrongPhase.into());
    }
    validate_declaration(round, &declaration)?;

    let partner = declaration.mode.called_ace().and_then(|ace| {
        (0..PLAYERS as PlayerId).find(|p| round.hands[*p as usize].contains(&ace))
    });

    round.trumps = Some(assign_trumps(declaration.mode));
    round.declaration = Some(declaration);
    round.partner = partner;
    round.phase = Phase::Playing;

    debug!(
        declarer = declaration.declarer,
        mode = ?declaration.mode,
        contract = ?declaration.contract,
        leader = round.current_player,
        "round declared"
    );
    Ok(())
}

/// Every declaration `declarer` could make with the current hand.
pub fn available_declarations(round: &Round, declarer: PlayerId) -> Vec<Declaration> {
    let mut candidates = Vec::with_capacity(16);
    for called in [Suit::Acorns, Suit::Leaves, Suit::Bells] {
        candidates.push(Declaration::called_ace(declarer, called));
    }
    for contract in [Contract::Normal, Contract::Tout] {
        candidates.push(Declaration::wenz(declarer).with_contract(contract));
    }
    for trump in Suit::ALL {
        for contract in [Contract::Normal, Contract::Tout, Contract::Sie] {
            candidates.push(Declaration::solo(declarer, trump).with_contract(contract));
        }
    }
    candidates.retain(|d| validate_declaration(round, d).is_ok());
    candidates
}
