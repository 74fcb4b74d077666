use super::bidding::Contract;
use super::trumps::GameMode;

pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 32;
pub const HAND_SIZE: usize = 8;
pub const TRICKS_PER_ROUND: usize = 8;
pub const TOTAL_POINTS: u16 = 120;

/// Attackers need this many card points to win a normal game.
pub const WIN_THRESHOLD: u16 = 61;
/// Winning attackers at or above this are schneider.
pub const SCHNEIDER_WIN_THRESHOLD: u16 = 91;
/// Losing attackers at or below this are schneider.
pub const SCHNEIDER_LOSS_THRESHOLD: u16 = 30;

/// Plain cards of the called suit the ace holder needs to run away.
pub const RUNAWAY_MIN_CARDS: usize = 4;

/// Tariff multiplier applied to the base unit.
pub fn tariff_multiplier(mode: GameMode, contract: Contract) -> i64 {
    match (mode, contract) {
        (_, Contract::Sie) => 20,
        (_, Contract::Tout) => 10,
        (GameMode::CalledAce { .. }, Contract::Normal) => 1,
        (GameMode::Wenz | GameMode::Solo { .. }, Contract::Normal) => 5,
    }
}
