//! # Error Message Overrides
//!
//! `TemporalErrorMessage` is the optional argument every catalog
//! constructor accepts. Its `invalid_type` replaces the default message for
//! both ways a temporal validator can fail: the value is the wrong type, or
//! it is text that does not parse.
//!
//! An override is consumed when the validator is built and never retained
//! anywhere else, so it cannot leak into other validators or kinds.
//!
//! Overrides deserialize from configuration:
//!
//! ```
//! use zt_temporal::TemporalErrorMessage;
//!
//! let messages: TemporalErrorMessage =
//!     serde_json::from_str(r#"{"invalid_type": "Pick a date"}"#).unwrap();
//! assert_eq!(messages.invalid_type.as_deref(), Some("Pick a date"));
//! ```

use serde::{Deserialize, Serialize};

/// Custom messages for a temporal validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemporalErrorMessage {
    /// Message to report when the value is not a valid temporal value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_type: Option<String>,
}

impl TemporalErrorMessage {
    /// An override carrying `invalid_type`.
    pub fn new(invalid_type: impl Into<String>) -> Self {
        Self {
            invalid_type: Some(invalid_type.into()),
        }
    }
}

/// The override's `invalid_type` if present, else `default`.
pub(crate) fn resolve_message(messages: Option<&TemporalErrorMessage>, default: String) -> String {
    messages
        .and_then(|m| m.invalid_type.clone())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_override() {
        let messages = TemporalErrorMessage::new("X");
        assert_eq!(resolve_message(Some(&messages), "default".into()), "X");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(resolve_message(None, "default".into()), "default");
        let empty = TemporalErrorMessage::default();
        assert_eq!(resolve_message(Some(&empty), "default".into()), "default");
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let messages: TemporalErrorMessage =
            serde_yaml::from_str("invalid_type: Bad date\n").unwrap();
        assert_eq!(messages, TemporalErrorMessage::new("Bad date"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<TemporalErrorMessage>(r#"{"required": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_override_serializes_to_empty_object() {
        let json = serde_json::to_string(&TemporalErrorMessage::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
