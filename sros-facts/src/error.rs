//! Error types for sros-facts.
//!
//! Errors raised by the command session are not represented here: the
//! driver returns the session's own error type unchanged.

use thiserror::Error;

/// A section that cannot be turned into a record.
///
/// Builders return these; the driver logs them and drops the one record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The field that keys the record did not match.
    #[error("{entity} section has no {field}")]
    MissingKey {
        entity: &'static str,
        field: &'static str,
    },

    /// A table row that does not have the expected columns.
    #[error("malformed {entity} row: '{row}'")]
    MalformedRow { entity: &'static str, row: String },
}

/// Invalid driver configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A setting that must not be empty was empty.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for fact builders.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;
