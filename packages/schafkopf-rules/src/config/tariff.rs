use std::env;
use std::str::FromStr;

use crate::errors::domain::DomainError;

/// Stake table for settlements, in units of the base tariff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffConfig {
    /// Value of one tariff unit (e.g. cents).
    pub base_tariff: i64,
    /// Units added for schneider in normal contracts.
    pub schneider_units: i64,
    /// Units added for schwarz in normal contracts, on top of schneider.
    pub schwarz_units: i64,
    /// Shortest run of top trumps that pays laufende.
    pub laufende_min: u8,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            base_tariff: 10,
            schneider_units: 1,
            schwarz_units: 1,
            laufende_min: 3,
        }
    }
}

impl TariffConfig {
    /// Build from environment variables, falling back to defaults when unset.
    ///
    /// - `SCHAFKOPF_BASE_TARIFF`
    /// - `SCHAFKOPF_SCHNEIDER_UNITS`
    /// - `SCHAFKOPF_SCHWARZ_UNITS`
    /// - `SCHAFKOPF_LAUFENDE_MIN`
    pub fn from_env() -> Result<Self, DomainError> {
        let defaults = Self::default();
        let config = Self {
            base_tariff: var_or("SCHAFKOPF_BASE_TARIFF", defaults.base_tariff)?,
            schneider_units: var_or("SCHAFKOPF_SCHNEIDER_UNITS", defaults.schneider_units)?,
            schwarz_units: var_or("SCHAFKOPF_SCHWARZ_UNITS", defaults.schwarz_units)?,
            laufende_min: var_or("SCHAFKOPF_LAUFENDE_MIN", defaults.laufende_min)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.base_tariff <= 0 {
            return Err(DomainError::config(format!(
                "base tariff must be positive, got {}",
                self.base_tariff
            )));
        }
        if self.schneider_units < 0 || self.schwarz_units < 0 {
            return Err(DomainError::config("bonus units must not be negative"));
        }
        if self.laufende_min == 0 {
            return Err(DomainError::config("laufende minimum must be at least 1"));
        }
        Ok(())
    }
}

/// Parse an optional environment variable, defaulting when it is not set.
fn var_or<T>(name: &str, default: T) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| {
            DomainError::config(format!("Environment variable '{name}' is invalid: {e}"))
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(DomainError::config(format!(
            "Environment variable '{name}' is unreadable: {e}"
        ))),
    }
}
