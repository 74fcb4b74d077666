//! Domain-level error types.
//!
//! Rule violations are expected outcomes of a player (or bot) proposing a card
//! and are reported as a [`DenyReason`] value. They carry no user-facing text;
//! callers map them through [`ErrorCode`](super::ErrorCode) or their own
//! localisation. Only [`DomainError::Invariant`] signals a caller bug.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a proposed card may not be played right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum DenyReason {
    #[error("card not in hand")]
    CardNotInHand,
    #[error("not your turn")]
    NotYourTurn,
    #[error("round is not in the playing phase")]
    WrongPhase,
    #[error("must follow suit")]
    MustFollowSuit,
    #[error("must follow trump")]
    MustFollowTrump,
    #[error("must play the called ace")]
    MustPlayCalledAce,
    #[error("cannot discard the called ace")]
    CannotDiscardCalledAce,
    #[error("too few cards of the called suit to run away")]
    InsufficientCardsForRunaway,
}

/// Why a declaration was rejected before play started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DeclarationError {
    /// Hearts is trump in a called-ace game and cannot be called.
    #[error("called suit must not be the trump suit")]
    InvalidCalledSuit,
    #[error("declarer holds the called ace")]
    CalledAceHeldByDeclarer,
    #[error("declarer holds no plain card of the called suit")]
    NoCardOfCalledSuit,
    #[error("contract not allowed for this game mode")]
    ContractNotAllowed,
    #[error("declarer does not hold every Over and Under")]
    NotEnoughTrumpsForSie,
    #[error("declarer seat out of range")]
    InvalidPlayer,
}

/// Central engine error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A rule forbids the attempted play.
    #[error("rule violation: {0}")]
    Rule(#[from] DenyReason),
    /// The declaration handed over by the bidding component is not valid.
    #[error("invalid declaration: {0}")]
    Declaration(#[from] DeclarationError),
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("invalid deal: {0}")]
    InvalidDeal(String),
    #[error("invalid modifiers: {0}")]
    InvalidModifiers(String),
    /// Internal invariant breach. The round must be abandoned.
    #[error("invariant violated: {0}")]
    Invariant(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn parse_card(detail: impl Into<String>) -> Self {
        Self::ParseCard(detail.into())
    }

    pub fn invalid_deal(detail: impl Into<String>) -> Self {
        Self::InvalidDeal(detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// The rule violation behind this error, if it is one.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Rule(reason) => Some(*reason),
            _ => None,
        }
    }

    /// True for errors that must abort the round rather than be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}
