//! Trump assignment per game mode.
//!
//! The table is computed once when the round's mode is declared and stored on
//! the round; nothing re-ranks cards afterwards.

use serde::{Deserialize, Serialize};

use super::cards_types::{full_deck, Card, Rank, Suit};

/// Game type fixed for one round by the bidding component.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    /// Rufspiel: hearts is trump, the holder of the called ace partners the declarer.
    CalledAce { called: Suit },
    /// Only the four Unders are trump.
    Wenz,
    /// Overs, Unders and the chosen suit are trump.
    Solo { trump: Suit },
}

impl GameMode {
    pub fn called_suit(self) -> Option<Suit> {
        match self {
            GameMode::CalledAce { called } => Some(called),
            GameMode::Wenz | GameMode::Solo { .. } => None,
        }
    }

    pub fn called_ace(self) -> Option<Card> {
        self.called_suit().map(|suit| Card::new(suit, Rank::Ace))
    }

    /// Declarer plays alone against the other three.
    pub fn is_solo(self) -> bool {
        !matches!(self, GameMode::CalledAce { .. })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TrumpInfo {
    pub is_trump: bool,
    /// Higher wins; 0 for plain cards.
    pub trump_order: u8,
}

impl TrumpInfo {
    const PLAIN: TrumpInfo = TrumpInfo {
        is_trump: false,
        trump_order: 0,
    };

    const fn trump(order: u8) -> TrumpInfo {
        TrumpInfo {
            is_trump: true,
            trump_order: order,
        }
    }
}

/// Trump status of all 32 cards under one game mode.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TrumpTable {
    mode: GameMode,
    entries: [TrumpInfo; 32],
}

impl TrumpTable {
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn info(&self, card: Card) -> TrumpInfo {
        self.entries[card.index()]
    }

    pub fn is_trump(&self, card: Card) -> bool {
        self.info(card).is_trump
    }

    pub fn trump_order(&self, card: Card) -> Option<u8> {
        let info = self.info(card);
        info.is_trump.then_some(info.trump_order)
    }

    /// A card of `suit` that is not trump under this mode.
    pub fn is_plain_of(&self, card: Card, suit: Suit) -> bool {
        card.suit == suit && !self.is_trump(card)
    }

    pub fn trump_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_trump).count()
    }

    /// Every trump card, strongest first.
    pub fn trumps_descending(&self) -> Vec<Card> {
        let mut trumps: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| self.is_trump(*c))
            .collect();
        trumps.sort_by_key(|c| std::cmp::Reverse(self.info(*c).trump_order));
        trumps
    }
}

/// Build the trump table for `mode`.
pub fn assign_trumps(mode: GameMode) -> TrumpTable {
    let mut entries = [TrumpInfo::PLAIN; 32];
    for card in full_deck() {
        let info = match mode {
            GameMode::CalledAce { .. } => overs_unders_and_suit(card, Suit::Hearts),
            GameMode::Solo { trump } => overs_unders_and_suit(card, trump),
            GameMode::Wenz => unders_only(card),
        };
        entries[card.index()] = info;
    }
    TrumpTable { mode, entries }
}

// 14 trumps: Overs 14..=11, Unders 10..=7, trump suit A..7 6..=1.
fn overs_unders_and_suit(card: Card, trump_suit: Suit) -> TrumpInfo {
    match card.rank {
        Rank::Over => TrumpInfo::trump(10 + card.suit.priority()),
        Rank::Under => TrumpInfo::trump(6 + card.suit.priority()),
        _ if card.suit != trump_suit => TrumpInfo::PLAIN,
        Rank::Ace => TrumpInfo::trump(6),
        Rank::Ten => TrumpInfo::trump(5),
        Rank::King => TrumpInfo::trump(4),
        Rank::Nine => TrumpInfo::trump(3),
        Rank::Eight => TrumpInfo::trump(2),
        Rank::Seven => TrumpInfo::trump(1),
    }
}

// 4 trumps: Unders 4..=1. Overs stay plain.
fn unders_only(card: Card) -> TrumpInfo {
    match card.rank {
        Rank::Under => TrumpInfo::trump(card.suit.priority()),
        _ => TrumpInfo::PLAIN,
    }
}
