//! Cross-cutting error types for riskgen.
//!
//! Generation, scoring and composition cannot fail. The only failure this
//! crate reports is a record that violates its declared field ranges, which
//! can only happen when records come from somewhere other than the generator.
//! Sink and configuration errors live in their own crates and converge as
//! `anyhow::Error` in `risk-cli`.

use thiserror::Error;

/// Errors that can be raised by `risk-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A bounded record field is outside its declared range.
    #[error("Field '{field}' of {id} is out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        id: String,
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Data failed validation (format, uniqueness).
    #[error("Validation error: {0}")]
    Validation(String),
}
