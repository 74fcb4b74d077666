//! Error handling for the Schafkopf rules engine.

pub mod domain;
pub mod error_code;

pub use domain::{DeclarationError, DenyReason, DomainError};
pub use error_code::ErrorCode;
