use crate::domain::bidding::{declare, Declaration};
use crate::domain::legality::{can_play, legal_moves};
use crate::domain::state::Round;
use crate::domain::test_state_helpers::{
    card, deal_runaway, deal_top_trumps, hands, parse_cards, playing_round, with_trick,
};
use crate::domain::tricks::play_card;
use crate::domain::Suit;
use crate::errors::domain::{DenyReason, DomainError};

fn acorn_game(hands: [Vec<crate::domain::Card>; 4]) -> Round {
    // Dealer 0: seat 1 leads, seat 1 holds the acorn ace.
    let mut round = Round::new(hands, 0).unwrap();
    declare(&mut round, Declaration::called_ace(0, Suit::Acorns)).unwrap();
    round
}

#[test]
fn leading_called_ace_marks_suit_played() {
    let mut round = acorn_game(deal_top_trumps());
    assert_eq!(round.partner(), Some(1));
    assert!(!round.called_suit_played());

    play_card(&mut round, 1, card("EA")).unwrap();
    assert!(round.called_suit_played());

    // Seat 2 must follow with its only acorn; seat 3 is void and free.
    assert_eq!(legal_moves(&round, 2), parse_cards(&["EZ"]));
    play_card(&mut round, 2, card("EZ")).unwrap();
    assert_eq!(legal_moves(&round, 3), round.hand(3).to_vec());
}

#[test]
fn runaway_denied_with_three_cards_of_called_suit() {
    let round = acorn_game(deal_top_trumps());
    assert_eq!(
        can_play(&round, 1, card("E9")),
        Err(DenyReason::InsufficientCardsForRunaway)
    );
    assert_eq!(
        can_play(&round, 1, card("EK")),
        Err(DenyReason::InsufficientCardsForRunaway)
    );
    assert_eq!(can_play(&round, 1, card("G7")), Ok(()));
    assert_eq!(can_play(&round, 1, card("EA")), Ok(()));
    assert_eq!(legal_moves(&round, 1), parse_cards(&["EA", "G7", "G8", "G9", "S7", "S8"]));
}

#[test]
fn runaway_allowed_with_four_cards_and_marks_suit_played() {
    let mut round = acorn_game(deal_runaway());
    assert_eq!(can_play(&round, 1, card("E9")), Ok(()));

    play_card(&mut round, 1, card("E9")).unwrap();
    assert!(round.called_suit_played());
    assert_eq!(legal_moves(&round, 2), parse_cards(&["EZ"]));
}

#[test]
fn runaway_restriction_lifts_once_suit_played() {
    let mut round = acorn_game(deal_top_trumps());
    round.called_suit_played = true;
    assert_eq!(can_play(&round, 1, card("E9")), Ok(()));
}

#[test]
fn holder_must_play_called_ace_when_suit_led() {
    let round = playing_round(
        deal_top_trumps(),
        Declaration::called_ace(0, Suit::Acorns),
        0,
    );
    let round = with_trick(round, &[(0, "E7")]);
    assert_eq!(legal_moves(&round, 1), vec![card("EA")]);
    assert_eq!(
        can_play(&round, 1, card("E9")),
        Err(DenyReason::MustPlayCalledAce)
    );
    assert_eq!(
        can_play(&round, 1, card("G7")),
        Err(DenyReason::MustPlayCalledAce)
    );
}

#[test]
fn protected_ace_excluded_when_trump_led() {
    let round = playing_round(
        hands([&["HK"], &["EA", "G7", "G8", "S7"], &[], &[]]),
        Declaration::called_ace(0, Suit::Acorns),
        0,
    );
    let round = with_trick(round, &[(0, "HK")]);
    assert_eq!(legal_moves(&round, 1), parse_cards(&["G7", "G8", "S7"]));
    assert_eq!(
        can_play(&round, 1, card("EA")),
        Err(DenyReason::CannotDiscardCalledAce)
    );
}

#[test]
fn protected_ace_excluded_when_void_in_other_suit() {
    let round = playing_round(
        hands([&["GA"], &["EA", "S7"], &[], &[]]),
        Declaration::called_ace(0, Suit::Acorns),
        0,
    );
    let round = with_trick(round, &[(0, "GA")]);
    assert_eq!(legal_moves(&round, 1), vec![card("S7")]);
}

#[test]
fn called_ace_may_go_as_last_card() {
    let round = playing_round(
        hands([&["HK"], &["EA"], &[], &[]]),
        Declaration::called_ace(0, Suit::Acorns),
        0,
    );
    let round = with_trick(round, &[(0, "HK")]);
    assert_eq!(legal_moves(&round, 1), vec![card("EA")]);
}

#[test]
fn called_ace_may_be_discarded_after_suit_played() {
    let round = playing_round(
        hands([&["HK"], &["EA", "G7"], &[], &[]]),
        Declaration::called_ace(0, Suit::Acorns),
        0,
    );
    let mut round = with_trick(round, &[(0, "HK")]);
    round.called_suit_played = true;
    assert_eq!(can_play(&round, 1, card("EA")), Ok(()));
}

#[test]
fn must_follow_suit() {
    let round = playing_round(
        deal_top_trumps(),
        Declaration::called_ace(0, Suit::Acorns),
        1,
    );
    let round = with_trick(round, &[(1, "G7")]);
    assert_eq!(
        can_play(&round, 2, card("S9")),
        Err(DenyReason::MustFollowSuit)
    );
    assert_eq!(legal_moves(&round, 2), parse_cards(&["GK", "GZ", "GA"]));
}

#[test]
fn must_follow_trump() {
    let round = playing_round(
        deal_top_trumps(),
        Declaration::called_ace(0, Suit::Acorns),
        3,
    );
    let round = with_trick(round, &[(3, "HU")]);
    assert_eq!(
        can_play(&round, 0, card("E7")),
        Err(DenyReason::MustFollowTrump)
    );
    assert_eq!(can_play(&round, 0, card("EO")), Ok(()));
    assert_eq!(legal_moves(&round, 0).len(), 6);
}

#[test]
fn over_does_not_follow_its_printed_suit() {
    let declaration = Declaration::called_ace(0, Suit::Leaves);
    let void = with_trick(
        playing_round(hands([&["EK"], &["EO", "G7"], &[], &[]]), declaration, 0),
        &[(0, "EK")],
    );
    assert_eq!(legal_moves(&void, 1), parse_cards(&["EO", "G7"]));

    let holding = with_trick(
        playing_round(hands([&["EK"], &["EO", "E7", "G7"], &[], &[]]), declaration, 0),
        &[(0, "EK")],
    );
    assert_eq!(legal_moves(&holding, 1), parse_cards(&["E7"]));
}

#[test]
fn wenz_over_follows_its_suit() {
    let round = with_trick(
        playing_round(
            hands([&["EK"], &["EO", "G7"], &[], &[]]),
            Declaration::wenz(0),
            0,
        ),
        &[(0, "EK")],
    );
    assert_eq!(
        can_play(&round, 1, card("G7")),
        Err(DenyReason::MustFollowSuit)
    );
    assert_eq!(legal_moves(&round, 1), parse_cards(&["EO"]));
}

#[test]
fn ownership_turn_and_phase() {
    let round = acorn_game(deal_top_trumps());
    assert_eq!(
        can_play(&round, 1, card("HA")),
        Err(DenyReason::CardNotInHand)
    );
    assert_eq!(
        can_play(&round, 2, card("EZ")),
        Err(DenyReason::NotYourTurn)
    );

    let bidding = Round::new(deal_top_trumps(), 0).unwrap();
    assert_eq!(
        can_play(&bidding, 1, card("EA")),
        Err(DenyReason::WrongPhase)
    );
    assert!(legal_moves(&bidding, 1).is_empty());
}

#[test]
fn out_of_range_seat_holds_nothing() {
    let round = acorn_game(deal_top_trumps());
    assert_eq!(
        can_play(&round, 7, card("EA")),
        Err(DenyReason::CardNotInHand)
    );
    assert!(legal_moves(&round, 7).is_empty());
}

#[test]
fn rejected_play_leaves_round_untouched() {
    let mut round = acorn_game(deal_top_trumps());
    let before = round.clone();
    let err = play_card(&mut round, 1, card("E9")).unwrap_err();
    assert_eq!(
        err,
        DomainError::Rule(DenyReason::InsufficientCardsForRunaway)
    );
    assert_eq!(round, before);
}
