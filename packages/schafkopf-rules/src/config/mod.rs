//! Runtime configuration.

pub mod tariff;

pub use tariff::TariffConfig;
