//! # Temporal Validation Failures
//!
//! A temporal validator fails in exactly one of two ways:
//!
//! - **Type mismatch.** The input is not a genuine instance of the kind
//!   (and, for coercing validators, not text either). Reported by the host
//!   as an [`IssueCode::Custom`] issue.
//! - **Coercion failure.** The input is text that does not parse as the
//!   kind. Reported as an [`IssueCode::Transform`] issue.
//!
//! Through the host contract both arrive as a [`ZodError`];
//! [`TemporalFailure`] classifies them by issue code for callers who want
//! the distinction without matching on codes themselves.

use thiserror::Error;
use zt_core::TemporalKind;
use zt_schema::{Issue, IssueCode, ZodError};

/// Classified failure from a temporal validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalFailure {
    /// The value is not an instance of `kind`.
    #[error("{message}")]
    TypeMismatch {
        kind: TemporalKind,
        message: String,
    },

    /// The value is text that does not parse as `kind`.
    #[error("{message}")]
    CoercionFailure {
        kind: TemporalKind,
        message: String,
    },
}

impl TemporalFailure {
    /// Classify a single issue raised by a `kind` validator.
    pub fn from_issue(kind: TemporalKind, issue: &Issue) -> Self {
        let message = issue.message.clone();
        match issue.code {
            IssueCode::Transform => Self::CoercionFailure { kind, message },
            _ => Self::TypeMismatch { kind, message },
        }
    }

    /// Classify the first issue of an error raised by a `kind` validator.
    pub fn from_zod(kind: TemporalKind, err: &ZodError) -> Self {
        match err.first() {
            Some(issue) => Self::from_issue(kind, issue),
            None => Self::TypeMismatch {
                kind,
                message: err.to_string(),
            },
        }
    }

    /// The kind whose validator failed.
    pub fn kind(&self) -> TemporalKind {
        match self {
            Self::TypeMismatch { kind, .. } | Self::CoercionFailure { kind, .. } => *kind,
        }
    }

    /// The reported message.
    pub fn message(&self) -> &str {
        match self {
            Self::TypeMismatch { message, .. } | Self::CoercionFailure { message, .. } => message,
        }
    }

    /// True for [`TemporalFailure::CoercionFailure`].
    pub fn is_coercion(&self) -> bool {
        matches!(self, Self::CoercionFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_issue_is_type_mismatch() {
        let issue = Issue::new(IssueCode::Custom, &[], "Invalid Temporal.Instant");
        let failure = TemporalFailure::from_issue(TemporalKind::Instant, &issue);
        assert!(!failure.is_coercion());
        assert_eq!(failure.kind(), TemporalKind::Instant);
        assert_eq!(failure.to_string(), "Invalid Temporal.Instant");
    }

    #[test]
    fn test_transform_issue_is_coercion_failure() {
        let issue = Issue::new(IssueCode::Transform, &[], "Invalid Temporal.PlainDate string: x");
        let failure = TemporalFailure::from_issue(TemporalKind::PlainDate, &issue);
        assert!(failure.is_coercion());
        assert_eq!(failure.message(), "Invalid Temporal.PlainDate string: x");
    }

    #[test]
    fn test_from_zod_uses_first_issue() {
        let err = ZodError::from_issues(vec![
            Issue::new(IssueCode::Transform, &[], "first"),
            Issue::new(IssueCode::Custom, &[], "second"),
        ]);
        let failure = TemporalFailure::from_zod(TemporalKind::Duration, &err);
        assert_eq!(
            failure,
            TemporalFailure::CoercionFailure {
                kind: TemporalKind::Duration,
                message: "first".into(),
            }
        );
    }
}
