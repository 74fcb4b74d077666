//! Error codes for the rules engine.
//!
//! Every error the engine can return maps to exactly one code. Codes are
//! SCREAMING_SNAKE_CASE and stable; front ends key their messages on them
//! rather than on `Display` output.

use core::fmt;

use super::domain::{DeclarationError, DenyReason, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rule violations
    CardNotInHand,
    NotYourTurn,
    WrongPhase,
    MustFollowSuit,
    MustFollowTrump,
    MustPlayCalledAce,
    CannotDiscardCalledAce,
    InsufficientCardsForRunaway,

    // Declarations
    InvalidCalledSuit,
    CalledAceHeldByDeclarer,
    NoCardOfCalledSuit,
    ContractNotAllowed,
    NotEnoughTrumpsForSie,
    InvalidPlayer,

    // Input
    ParseCard,
    InvalidDeal,
    InvalidModifiers,

    // System
    InvariantViolated,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::WrongPhase => "WRONG_PHASE",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::MustFollowTrump => "MUST_FOLLOW_TRUMP",
            Self::MustPlayCalledAce => "MUST_PLAY_CALLED_ACE",
            Self::CannotDiscardCalledAce => "CANNOT_DISCARD_CALLED_ACE",
            Self::InsufficientCardsForRunaway => "INSUFFICIENT_CARDS_FOR_RUNAWAY",

            Self::InvalidCalledSuit => "INVALID_CALLED_SUIT",
            Self::CalledAceHeldByDeclarer => "CALLED_ACE_HELD_BY_DECLARER",
            Self::NoCardOfCalledSuit => "NO_CARD_OF_CALLED_SUIT",
            Self::ContractNotAllowed => "CONTRACT_NOT_ALLOWED",
            Self::NotEnoughTrumpsForSie => "NOT_ENOUGH_TRUMPS_FOR_SIE",
            Self::InvalidPlayer => "INVALID_PLAYER",

            Self::ParseCard => "PARSE_CARD",
            Self::InvalidDeal => "INVALID_DEAL",
            Self::InvalidModifiers => "INVALID_MODIFIERS",

            Self::InvariantViolated => "INVARIANT_VIOLATED",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<DenyReason> for ErrorCode {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::CardNotInHand => Self::CardNotInHand,
            DenyReason::NotYourTurn => Self::NotYourTurn,
            DenyReason::WrongPhase => Self::WrongPhase,
            DenyReason::MustFollowSuit => Self::MustFollowSuit,
            DenyReason::MustFollowTrump => Self::MustFollowTrump,
            DenyReason::MustPlayCalledAce => Self::MustPlayCalledAce,
            DenyReason::CannotDiscardCalledAce => Self::CannotDiscardCalledAce,
            DenyReason::InsufficientCardsForRunaway => Self::InsufficientCardsForRunaway,
        }
    }
}

impl From<DeclarationError> for ErrorCode {
    fn from(err: DeclarationError) -> Self {
        match err {
            DeclarationError::InvalidCalledSuit => Self::InvalidCalledSuit,
            DeclarationError::CalledAceHeldByDeclarer => Self::CalledAceHeldByDeclarer,
            DeclarationError::NoCardOfCalledSuit => Self::NoCardOfCalledSuit,
            DeclarationError::ContractNotAllowed => Self::ContractNotAllowed,
            DeclarationError::NotEnoughTrumpsForSie => Self::NotEnoughTrumpsForSie,
            DeclarationError::InvalidPlayer => Self::InvalidPlayer,
        }
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Rule(reason) => (*reason).into(),
            DomainError::Declaration(inner) => (*inner).into(),
            DomainError::ParseCard(_) => Self::ParseCard,
            DomainError::InvalidDeal(_) => Self::InvalidDeal,
            DomainError::InvalidModifiers(_) => Self::InvalidModifiers,
            DomainError::Invariant(_) => Self::InvariantViolated,
            DomainError::Config(_) => Self::ConfigError,
        }
    }
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from(self)
    }
}
