//! Core card-related types: Card, Rank, Suit

/// The four suits of the Bavarian deck.
///
/// Declaration order is the Over/Under priority: acorns > leaves > hearts > bells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Acorns,
    Leaves,
    Hearts,
    Bells,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Acorns, Suit::Leaves, Suit::Hearts, Suit::Bells];

    /// Priority among Overs (and among Unders); higher is stronger.
    pub const fn priority(self) -> u8 {
        match self {
            Suit::Acorns => 4,
            Suit::Leaves => 3,
            Suit::Hearts => 2,
            Suit::Bells => 1,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    King,
    Over,
    Under,
    Ten,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::King,
        Rank::Over,
        Rank::Under,
        Rank::Ten,
        Rank::Ace,
    ];

    /// Card points counted towards the 120 in a round.
    pub const fn point_value(self) -> u8 {
        match self {
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            Rank::King => 4,
            Rank::Over => 3,
            Rank::Under => 2,
            Rank::Ten => 10,
            Rank::Ace => 11,
        }
    }

    /// Strength of the rank when the card is played as a plain (non-trump) card.
    ///
    /// Ace > Ten > King > Over > Under > Nine > Eight > Seven. Overs and Unders
    /// only ever use this order when the game mode leaves them plain.
    pub const fn plain_strength(self) -> u8 {
        match self {
            Rank::Ace => 8,
            Rank::Ten => 7,
            Rank::King => 6,
            Rank::Over => 5,
            Rank::Under => 4,
            Rank::Nine => 3,
            Rank::Eight => 2,
            Rank::Seven => 1,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn point_value(self) -> u8 {
        self.rank.point_value()
    }

    /// Dense index 0..32, suit-major. Used by lookup tables.
    pub const fn index(self) -> usize {
        (self.suit as usize) * 8 + self.rank as usize
    }
}

// Note: Ord on Card is only for stable sorting: suit order then rank declaration order.
// Do not use for trick resolution; trump status depends on the game mode.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// All 32 cards in suit-major order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(32);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}
