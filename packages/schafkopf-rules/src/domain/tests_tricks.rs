use crate::domain::bidding::{declare, Declaration};
use crate::domain::legality::legal_moves;
use crate::domain::state::{Phase, PlayerId, Round, Side};
use crate::domain::test_state_helpers::{card, deal_top_trumps, play_out};
use crate::domain::tricks::{play_card, resolve_current_trick, resolve_trick, TrickResult};
use crate::domain::trumps::{assign_trumps, GameMode};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DenyReason, DomainError};

fn plays(tokens: [&str; 4]) -> Vec<(PlayerId, Card)> {
    tokens
        .iter()
        .enumerate()
        .map(|(seat, t)| (seat as PlayerId, card(t)))
        .collect()
}

fn acorn_game() -> Round {
    let mut round = Round::new(deal_top_trumps(), 0).unwrap();
    declare(&mut round, Declaration::called_ace(0, Suit::Acorns)).unwrap();
    round
}

#[test]
fn trump_beats_plain_lead() {
    let trumps = assign_trumps(GameMode::CalledAce {
        called: Suit::Acorns,
    });
    let result = resolve_trick(&plays(["EA", "H7", "EZ", "EK"]), &trumps).unwrap();
    assert_eq!(
        result,
        TrickResult {
            winner: 1,
            winning_card: card("H7"),
            points: 25,
        }
    );
}

#[test]
fn highest_trump_wins() {
    let trumps = assign_trumps(GameMode::CalledAce {
        called: Suit::Bells,
    });
    let result = resolve_trick(&plays(["HA", "SU", "GO", "EU"]), &trumps).unwrap();
    assert_eq!(result.winner, 2);
    assert_eq!(result.winning_card, card("GO"));
    assert_eq!(result.points, 18);
}

#[test]
fn discarded_plain_suit_never_wins() {
    let trumps = assign_trumps(GameMode::Solo { trump: Suit::Hearts });
    let result = resolve_trick(&plays(["G7", "EA", "SA", "G8"]), &trumps).unwrap();
    assert_eq!(result.winner, 3);
    assert_eq!(result.points, 22);
}

#[test]
fn wenz_over_ranks_below_king() {
    let trumps = assign_trumps(GameMode::Wenz);
    let result = resolve_trick(&plays(["EK", "EO", "EA", "S7"]), &trumps).unwrap();
    assert_eq!(result.winner, 2);
    assert_eq!(result.points, 18);

    let result = resolve_trick(&plays(["EK", "EO", "E9", "SU"]), &trumps).unwrap();
    assert_eq!(result.winner, 3);
}

#[test]
fn incomplete_trick_is_an_invariant_breach() {
    let trumps = assign_trumps(GameMode::Wenz);
    let err = resolve_trick(&plays(["EK", "EO", "EA", "S7"])[..3], &trumps).unwrap_err();
    assert!(matches!(err, DomainError::Invariant(_)));
    assert!(err.is_fatal());

    let round = acorn_game();
    assert!(matches!(
        resolve_current_trick(&round),
        Err(DomainError::Invariant(_))
    ));
}

#[test]
fn play_card_commits_trick() {
    let mut round = acorn_game();

    let first = play_card(&mut round, 1, card("EA")).unwrap();
    assert!(!first.trick_completed());
    assert_eq!(first.next_player, Some(2));
    play_card(&mut round, 2, card("EZ")).unwrap();
    play_card(&mut round, 3, card("H7")).unwrap();
    let last = play_card(&mut round, 0, card("E7")).unwrap();

    assert_eq!(
        last.trick,
        Some(TrickResult {
            winner: 3,
            winning_card: card("H7"),
            points: 21,
        })
    );
    assert_eq!(last.next_player, Some(3));
    assert_eq!(last.phase_transitioned, None);
    assert_eq!(round.current_player(), 3);
    assert!(round.current_trick().is_empty());
    assert_eq!(round.tricks_won(), [0, 0, 0, 1]);
    assert_eq!(round.points_won(), [0, 0, 0, 21]);
    assert_eq!(round.team_points(), [0, 21]);
    assert_eq!(round.side_points(Side::Defenders), 21);

    let trick = &round.completed_tricks()[0];
    assert_eq!(trick.leader, 1);
    assert_eq!(trick.plays.len(), 4);
    assert_eq!(trick.winner, 3);
    assert_eq!(round.hand(1).len(), 7);
}

#[test]
fn solo_keeps_no_team_totals() {
    let mut round = Round::new(deal_top_trumps(), 0).unwrap();
    declare(&mut round, Declaration::solo(0, Suit::Hearts)).unwrap();
    play_out(&mut round, |legal| legal[0]);
    assert_eq!(round.team_points(), [0, 0]);
    let total = round.side_points(Side::Attackers) + round.side_points(Side::Defenders);
    assert_eq!(total, 120);
}

#[test]
fn full_round_reaches_finished() {
    let mut round = acorn_game();
    let mut transitions = 0;
    while round.phase() == Phase::Playing {
        let who = round.current_player();
        let choice = *legal_moves(&round, who).last().unwrap();
        let result = play_card(&mut round, who, choice).unwrap();
        if let Some(trick) = result.trick {
            if result.phase_transitioned.is_none() {
                assert_eq!(round.current_player(), trick.winner);
            }
        }
        if result.phase_transitioned == Some(Phase::Finished) {
            transitions += 1;
            assert_eq!(result.next_player, None);
        }
    }

    assert_eq!(transitions, 1);
    assert_eq!(round.completed_tricks().len(), 8);
    assert_eq!(round.points_won().iter().sum::<u16>(), 120);
    assert_eq!(round.tricks_won().iter().sum::<u8>(), 8);
    assert_eq!(round.team_points().iter().sum::<u16>(), 120);
    assert!(round.hands().iter().all(Vec::is_empty));
    round.check_invariants().unwrap();

    let err = play_card(&mut round, 0, card("EO")).unwrap_err();
    assert_eq!(err.deny_reason(), Some(DenyReason::CardNotInHand));
}

#[test]
fn corrupted_round_is_caught_on_first_card() {
    let mut round = acorn_game();
    round.hands[3].push(card("GZ"));

    let err = play_card(&mut round, 1, card("EA")).unwrap_err();
    assert!(matches!(err, DomainError::Invariant(_)));
    assert!(err.is_fatal());
}
