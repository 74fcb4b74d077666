//! Card parsing from string representations (e.g., "EO", "HZ", "S7")
//!
//! Token layout is suit letter then rank letter:
//! suits `E` acorns, `G` leaves, `H` hearts, `S` bells;
//! ranks `7 8 9 K O U Z A` (`Z` is the ten).

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

pub(crate) const fn suit_char(suit: Suit) -> char {
    match suit {
        Suit::Acorns => 'E',
        Suit::Leaves => 'G',
        Suit::Hearts => 'H',
        Suit::Bells => 'S',
    }
}

pub(crate) const fn rank_char(rank: Rank) -> char {
    match rank {
        Rank::Seven => '7',
        Rank::Eight => '8',
        Rank::Nine => '9',
        Rank::King => 'K',
        Rank::Over => 'O',
        Rank::Under => 'U',
        Rank::Ten => 'Z',
        Rank::Ace => 'A',
    }
}

fn parse_suit(ch: char) -> Option<Suit> {
    match ch {
        'E' => Some(Suit::Acorns),
        'G' => Some(Suit::Leaves),
        'H' => Some(Suit::Hearts),
        'S' => Some(Suit::Bells),
        _ => None,
    }
}

fn parse_rank(ch: char) -> Option<Rank> {
    match ch {
        '7' => Some(Rank::Seven),
        '8' => Some(Rank::Eight),
        '9' => Some(Rank::Nine),
        'K' => Some(Rank::King),
        'O' => Some(Rank::Over),
        'U' => Some(Rank::Under),
        'Z' => Some(Rank::Ten),
        'A' => Some(Rank::Ace),
        _ => None,
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(suit_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::parse_card(s));
        };
        let suit = parse_suit(suit_ch).ok_or_else(|| DomainError::parse_card(s))?;
        let rank = parse_rank(rank_ch).ok_or_else(|| DomainError::parse_card(s))?;
        Ok(Card { suit, rank })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", suit_char(self.suit), rank_char(self.rank))
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
