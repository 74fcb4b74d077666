/// Property-based tests for trick resolution
use proptest::prelude::*;

use crate::domain::cards_logic::is_higher;
use crate::domain::state::PlayerId;
use crate::domain::tricks::resolve_trick;
use crate::domain::trumps::assign_trumps;
use crate::domain::{test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the winning card is not beaten by any other card of the trick
    /// and beats every card that is not itself.
    #[test]
    fn prop_winner_beats_all_others(
        mode in test_gens::game_mode(),
        cards in test_gens::trick_cards(),
        leader in test_gens::player_id(),
    ) {
        let trumps = assign_trumps(mode);
        let plays: Vec<(PlayerId, Card)> = cards
            .iter()
            .enumerate()
            .map(|(i, c)| ((leader + i as u8) % 4, *c))
            .collect();
        let result = resolve_trick(&plays, &trumps).unwrap();

        prop_assert!(plays.contains(&(result.winner, result.winning_card)));
        for &(_, card) in &plays {
            if card != result.winning_card {
                prop_assert!(!is_higher(card, result.winning_card, &trumps),
                    "{} beats winner {}", card, result.winning_card);
            }
        }
        let expected: u8 = cards.iter().map(|c| c.point_value()).sum();
        prop_assert_eq!(result.points, expected);
    }

    /// Property: a trick with any trump in it is won by the highest trump.
    #[test]
    fn prop_highest_trump_wins(
        mode in test_gens::game_mode(),
        cards in test_gens::trick_cards(),
    ) {
        let trumps = assign_trumps(mode);
        let best_trump = cards.iter().copied().filter_map(|c| trumps.trump_order(c).map(|o| (o, c))).max();
        prop_assume!(best_trump.is_some());

        let plays: Vec<(PlayerId, Card)> = cards.iter().enumerate().map(|(i, c)| (i as u8, *c)).collect();
        let result = resolve_trick(&plays, &trumps).unwrap();
        prop_assert_eq!(Some(result.winning_card), best_trump.map(|(_, c)| c));
    }

    /// Property: comparison is antisymmetric.
    #[test]
    fn prop_is_higher_antisymmetric(
        mode in test_gens::game_mode(),
        a in test_gens::card(),
        b in test_gens::card(),
    ) {
        let trumps = assign_trumps(mode);
        prop_assert!(!(is_higher(a, b, &trumps) && is_higher(b, a, &trumps)));
        prop_assert!(!is_higher(a, a, &trumps));
    }
}
