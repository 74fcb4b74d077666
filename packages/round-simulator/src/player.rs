//! Turn drivers for simulated rounds.

use std::fmt;
use std::sync::Mutex;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use schafkopf_rules::domain::{Card, Declaration, PlayerId, Round};

/// Errors a driver can raise while choosing.
#[derive(Debug)]
pub enum PlayerError {
    /// The driver was offered no option to choose from.
    NoOptions(String),
    /// The driver encountered an internal error
    Internal(String),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::NoOptions(msg) => write!(f, "no options: {msg}"),
            PlayerError::Internal(msg) => write!(f, "player internal error: {msg}"),
        }
    }
}

impl std::error::Error for PlayerError {}

/// Supplies one decision at a time to the engine.
///
/// Drivers only ever see the options the engine computed for them; the engine
/// re-validates every choice anyway.
pub trait TurnDriver: Send + Sync {
    /// Pick a game to declare, or `None` to pass. When `must_declare` is set
    /// the driver has to return one of `options`.
    fn choose_declaration(
        &self,
        round: &Round,
        seat: PlayerId,
        options: &[Declaration],
        must_declare: bool,
    ) -> Result<Option<Declaration>, PlayerError>;

    /// Pick one of the legal cards.
    fn choose_card(&self, round: &Round, seat: PlayerId, legal: &[Card])
        -> Result<Card, PlayerError>;
}

/// Driver that passes half of the time and otherwise picks uniformly among
/// the options.
pub struct RandomPlayer {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomPlayer {
    /// `Some(seed)` for reproducible choices, `None` for fresh entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, PlayerError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PlayerError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| PlayerError::NoOptions(what.to_string()))
    }

    fn coin(&self) -> Result<bool, PlayerError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| PlayerError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(rng.random_bool(0.5))
    }
}

impl TurnDriver for RandomPlayer {
    fn choose_declaration(
        &self,
        _round: &Round,
        _seat: PlayerId,
        options: &[Declaration],
        must_declare: bool,
    ) -> Result<Option<Declaration>, PlayerError> {
        if options.is_empty() || (!must_declare && self.coin()?) {
            return Ok(None);
        }
        self.pick(options, "declarations").map(Some)
    }

    fn choose_card(
        &self,
        _round: &Round,
        _seat: PlayerId,
        legal: &[Card],
    ) -> Result<Card, PlayerError> {
        self.pick(legal, "legal cards")
    }
}
