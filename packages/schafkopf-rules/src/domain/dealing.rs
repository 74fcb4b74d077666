//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_types::full_deck;
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::Card;

/// Shuffle the 32-card deck with a seeded RNG and deal 8 cards to each seat.
///
/// The same seed always yields the same hands. Hands are sorted for
/// convenience.
pub fn deal_hands(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (hand_slot, chunk) in hands.iter_mut().zip(deck.chunks(HAND_SIZE)) {
        let mut hand = chunk.to_vec();
        hand.sort();
        *hand_slot = hand;
    }
    hands
}
