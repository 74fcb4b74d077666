/// Property-based tests for the legal-move validator
use proptest::prelude::*;

use crate::domain::cards_types::full_deck;
use crate::domain::legality::{can_play, legal_moves};
use crate::domain::state::{Phase, Round};
use crate::domain::tricks::play_card;
use crate::domain::{test_gens, test_prelude};

/// Play up to `steps` cards, each picked from the legal moves by `choices`.
fn advance(round: &mut Round, choices: &[prop::sample::Index], steps: usize) {
    for pick in choices.iter().take(steps) {
        if round.phase() != Phase::Playing {
            break;
        }
        let who = round.current_player();
        let legal = legal_moves(round, who);
        let card = legal[pick.index(legal.len())];
        play_card(round, who, card).expect("legal move must be accepted");
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: can_play is a pure query.
    /// Asking twice yields the same verdict and the round stays unchanged.
    #[test]
    fn prop_can_play_is_idempotent_and_pure(
        mut round in test_gens::declared_round(),
        choices in test_gens::play_choices(),
        steps in 0usize..32,
    ) {
        advance(&mut round, &choices, steps);
        let before = round.clone();
        for who in 0..4u8 {
            for card in full_deck() {
                let first = can_play(&round, who, card);
                let second = can_play(&round, who, card);
                prop_assert_eq!(first, second);
            }
        }
        prop_assert_eq!(round, before);
    }

    /// Property: during play the seat to act always has a legal move, every
    /// legal move comes from the hand, and nobody else may act.
    #[test]
    fn prop_legal_moves_non_empty_subset(
        mut round in test_gens::declared_round(),
        choices in test_gens::play_choices(),
        steps in 0usize..31,
    ) {
        advance(&mut round, &choices, steps);
        prop_assert_eq!(round.phase(), Phase::Playing);

        let who = round.current_player();
        let legal = legal_moves(&round, who);
        prop_assert!(!legal.is_empty(), "seat {} stuck with {:?}", who, round.hand(who));
        for card in &legal {
            prop_assert!(round.hand(who).contains(card));
        }
        for other in (0..4u8).filter(|p| *p != who) {
            prop_assert!(legal_moves(&round, other).is_empty());
        }
    }

    /// Property: legal_moves agrees with can_play card by card.
    #[test]
    fn prop_legal_moves_match_can_play(
        mut round in test_gens::declared_round(),
        choices in test_gens::play_choices(),
        steps in 0usize..32,
    ) {
        advance(&mut round, &choices, steps);
        let who = round.current_player();
        let legal = legal_moves(&round, who);
        for card in round.hand(who) {
            prop_assert_eq!(legal.contains(card), can_play(&round, who, *card).is_ok());
        }
    }

    /// Property: once the called suit has been played the ace holder is never
    /// denied for protection or runaway reasons.
    #[test]
    fn prop_called_suit_flag_lifts_restrictions(
        mut round in test_gens::declared_round(),
        choices in test_gens::play_choices(),
        steps in 0usize..32,
    ) {
        advance(&mut round, &choices, steps);
        prop_assume!(round.called_suit_played());
        let who = round.current_player();
        for card in round.hand(who) {
            let verdict = can_play(&round, who, *card);
            prop_assert_ne!(verdict, Err(crate::errors::DenyReason::CannotDiscardCalledAce));
            prop_assert_ne!(verdict, Err(crate::errors::DenyReason::InsufficientCardsForRunaway));
        }
    }
}
