//! # Error Types
//!
//! Errors raised by the temporal value binding. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Parse errors always carry the kind that was being parsed and the
//! offending input, so callers can render a message without re-threading
//! context.

use thiserror::Error;

use crate::kind::TemporalKind;

/// Error from parsing, converting or naming a temporal value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    /// Text could not be parsed into the target kind.
    #[error("invalid {kind} string {input:?}: {reason}")]
    Parse {
        /// The kind that was being parsed.
        kind: TemporalKind,
        /// The offending input.
        input: String,
        /// Why the underlying parser rejected it.
        reason: String,
    },

    /// A conversion produced a value outside the representable range.
    #[error("{kind} value out of range: {reason}")]
    OutOfRange {
        /// The kind being converted to or from.
        kind: TemporalKind,
        /// Description of the violated range.
        reason: String,
    },

    /// A kind name did not match any of the eight kinds.
    #[error("unknown temporal kind: {0:?}")]
    UnknownKind(String),
}

impl TemporalError {
    /// Build a [`TemporalError::Parse`] from any displayable cause.
    pub fn parse(kind: TemporalKind, input: &str, reason: impl std::fmt::Display) -> Self {
        Self::Parse {
            kind,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`TemporalError::OutOfRange`] from any displayable cause.
    pub fn out_of_range(kind: TemporalKind, reason: impl std::fmt::Display) -> Self {
        Self::OutOfRange {
            kind,
            reason: reason.to_string(),
        }
    }

    /// The kind this error concerns, if any.
    pub fn kind(&self) -> Option<TemporalKind> {
        match self {
            Self::Parse { kind, .. } | Self::OutOfRange { kind, .. } => Some(*kind),
            Self::UnknownKind(_) => None,
        }
    }
}
