#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for four-player Bavarian Schafkopf: trump assignment, legal
//! moves, trick resolution and round settlement.

pub mod config;
pub mod domain;
pub mod errors;


// Re-exports for public API
pub use config::TariffConfig;
pub use domain::{
    assign_trumps, can_play, declare, is_higher, legal_moves, play_card, resolve_current_trick,
    resolve_trick, settle_round, Card, Contract, Declaration, GameMode, Modifiers, Phase,
    PlayCardResult, PlayerId, Rank, Round, Settlement, Side, Suit, TrickResult, TrumpInfo,
    TrumpTable,
};
pub use errors::{DeclarationError, DenyReason, DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
