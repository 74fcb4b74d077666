//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod legality;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;
pub mod trumps;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_legality;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{available_declarations, declare, validate_declaration, Contract, Declaration};
pub use cards_logic::{hand_has_plain_suit, hand_has_trump, is_higher};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{full_deck, Card, Rank, Suit};
pub use dealing::deal_hands;
pub use legality::{can_play, legal_moves};
pub use scoring::{settle_round, Laufende, Modifiers, Settlement};
pub use state::{CompletedTrick, Phase, PlayerId, Round, RoundData, Side};
pub use tricks::{play_card, resolve_current_trick, resolve_trick, PlayCardResult, TrickResult};
pub use trumps::{assign_trumps, GameMode, TrumpInfo, TrumpTable};
