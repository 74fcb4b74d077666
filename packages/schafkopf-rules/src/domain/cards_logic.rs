//! Card game logic: suit holdings and comparing card strength

use super::cards_types::{Card, Suit};
use super::trumps::TrumpTable;

/// Does `a` beat `b`, where `b` is the card currently winning the trick?
///
/// A plain card can only win by following the suit of `b` with a higher rank;
/// discarding a different plain suit never wins.
pub fn is_higher(a: Card, b: Card, trumps: &TrumpTable) -> bool {
    let a_info = trumps.info(a);
    let b_info = trumps.info(b);
    match (a_info.is_trump, b_info.is_trump) {
        (true, true) => a_info.trump_order > b_info.trump_order,
        (true, false) => true,
        (false, true) => false,
        (false, false) => a.suit == b.suit && a.rank.plain_strength() > b.rank.plain_strength(),
    }
}

pub fn hand_has_trump(hand: &[Card], trumps: &TrumpTable) -> bool {
    hand.iter().any(|c| trumps.is_trump(*c))
}

/// Hand holds a non-trump card of `suit`.
pub fn hand_has_plain_suit(hand: &[Card], suit: Suit, trumps: &TrumpTable) -> bool {
    hand.iter().any(|c| trumps.is_plain_of(*c, suit))
}

pub fn count_plain_suit(hand: &[Card], suit: Suit, trumps: &TrumpTable) -> usize {
    hand.iter().filter(|c| trumps.is_plain_of(**c, suit)).count()
}
