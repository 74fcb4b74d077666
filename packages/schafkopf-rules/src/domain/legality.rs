//! Legal-move validation.
//!
//! [`can_play`] is a pure query over a [`Round`]; [`play_card`] runs the same
//! check before committing. Checks run in a fixed order and the first failing
//! one decides the [`DenyReason`]:
//!
//! 1. ownership
//! 2. phase, then turn
//! 3. lead restrictions (running away from the called ace)
//! 4. follow restrictions (trump, forced called ace, suit)
//! 5. protection of the called ace against discarding
//!
//! [`play_card`]: crate::domain::tricks::play_card

use tracing::trace;

use crate::domain::cards_logic::{count_plain_suit, hand_has_plain_suit, hand_has_trump};
use crate::domain::rules::RUNAWAY_MIN_CARDS;
use crate::domain::state::{Phase, PlayerId, Round};
use crate::domain::trumps::TrumpTable;
use crate::domain::{Card, Suit};
use crate::errors::domain::DenyReason;

/// The called ace together with its suit, when `who` is the one holding it.
#[derive(Debug, Clone, Copy)]
struct CalledAceHolding {
    ace: Card,
    suit: Suit,
}

impl CalledAceHolding {
    fn of(round: &Round, hand: &[Card]) -> Option<Self> {
        let ace = round.called_ace()?;
        hand.contains(&ace).then_some(Self {
            ace,
            suit: ace.suit,
        })
    }
}

/// May `who` play `card` right now?
pub fn can_play(round: &Round, who: PlayerId, card: Card) -> Result<(), DenyReason> {
    let verdict = check(round, who, card);
    if let Err(reason) = verdict {
        trace!(player = who, %card, ?reason, "play denied");
    }
    verdict
}

fn check(round: &Round, who: PlayerId, card: Card) -> Result<(), DenyReason> {
    let hand = round.hand(who);
    if !hand.contains(&card) {
        return Err(DenyReason::CardNotInHand);
    }
    if round.phase != Phase::Playing {
        return Err(DenyReason::WrongPhase);
    }
    if round.current_player != who {
        return Err(DenyReason::NotYourTurn);
    }
    let Some(trumps) = round.trumps() else {
        return Err(DenyReason::WrongPhase);
    };

    let holding = CalledAceHolding::of(round, hand);
    match round.current_trick.first() {
        None => check_lead(round, hand, card, holding, trumps),
        Some(&(_, lead)) => {
            check_follow(hand, card, lead, holding, trumps)?;
            check_ace_protection(round, hand, card, lead, holding, trumps)
        }
    }
}

fn check_lead(
    round: &Round,
    hand: &[Card],
    card: Card,
    holding: Option<CalledAceHolding>,
    trumps: &TrumpTable,
) -> Result<(), DenyReason> {
    let Some(holding) = holding else {
        return Ok(());
    };
    if card == holding.ace {
        return Ok(());
    }
    if trumps.is_plain_of(card, holding.suit)
        && !round.called_suit_played
        && count_plain_suit(hand, holding.suit, trumps) < RUNAWAY_MIN_CARDS
    {
        return Err(DenyReason::InsufficientCardsForRunaway);
    }
    Ok(())
}

fn check_follow(
    hand: &[Card],
    card: Card,
    lead: Card,
    holding: Option<CalledAceHolding>,
    trumps: &TrumpTable,
) -> Result<(), DenyReason> {
    if trumps.is_trump(lead) {
        if hand_has_trump(hand, trumps) && !trumps.is_trump(card) {
            return Err(DenyReason::MustFollowTrump);
        }
        return Ok(());
    }

    let led_suit = lead.suit;
    if let Some(holding) = holding.filter(|h| h.suit == led_suit) {
        if card != holding.ace {
            return Err(DenyReason::MustPlayCalledAce);
        }
        return Ok(());
    }
    if hand_has_plain_suit(hand, led_suit, trumps) && !trumps.is_plain_of(card, led_suit) {
        return Err(DenyReason::MustFollowSuit);
    }
    Ok(())
}

// The ace may not leave the hand on a foreign lead before its suit has been
// played, unless it is the last card left.
fn check_ace_protection(
    round: &Round,
    hand: &[Card],
    card: Card,
    lead: Card,
    holding: Option<CalledAceHolding>,
    trumps: &TrumpTable,
) -> Result<(), DenyReason> {
    match holding {
        Some(h)
            if card == h.ace
                && !trumps.is_plain_of(lead, h.suit)
                && !round.called_suit_played
                && hand.len() > 1 =>
        {
            Err(DenyReason::CannotDiscardCalledAce)
        }
        _ => Ok(()),
    }
}

/// Every card `who` may play right now, in hand order.
///
/// Re-evaluates [`can_play`] per card; nothing is cached between calls.
pub fn legal_moves(round: &Round, who: PlayerId) -> Vec<Card> {
    round
        .hand(who)
        .iter()
        .copied()
        .filter(|card| can_play(round, who, *card).is_ok())
        .collect()
}
