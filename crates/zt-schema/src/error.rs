//! # Validation Errors
//!
//! A failed parse yields a `ZodError`: an ordered list of `Issue`s, each
//! with a machine-readable code, the path to the offending value, and a
//! human-readable message suitable for direct display.
//!
//! Composite schemas (objects) aggregate the issues of every failing field
//! instead of stopping at the first one.

use std::fmt;

use thiserror::Error;

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// The value has the wrong runtime type for a built-in schema.
    InvalidType,
    /// A required object field is absent.
    Required,
    /// An object carries keys a strict object schema does not declare.
    UnrecognizedKeys,
    /// A `custom` predicate rejected the value.
    Custom,
    /// A `preprocess` transform rejected the value before the inner schema
    /// ran.
    Transform,
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidType => "invalid_type",
            Self::Required => "required",
            Self::UnrecognizedKeys => "unrecognized_keys",
            Self::Custom => "custom",
            Self::Transform => "transform",
        })
    }
}

/// One step of the path from the root value to an offending value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Key(String),
    /// An array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// What kind of failure this is.
    pub code: IssueCode,
    /// Where in the input it happened. Empty for the root.
    pub path: Vec<PathSegment>,
    /// Message for display.
    pub message: String,
}

impl Issue {
    /// Build an issue at `path`.
    pub fn new(code: IssueCode, path: &[PathSegment], message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// Dotted rendering of the path, e.g. `user.dates.0`.
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path_string(), self.message)
        }
    }
}

/// The result of a failed parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render_issues(.issues))]
pub struct ZodError {
    issues: Vec<Issue>,
}

impl ZodError {
    /// An error holding exactly one issue.
    pub fn single(issue: Issue) -> Self {
        Self { issues: vec![issue] }
    }

    /// An error from a list of issues. Callers never build an empty one.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// All issues in the order they were found.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The first issue.
    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    /// Append another error's issues to this one.
    pub fn extend(&mut self, other: ZodError) {
        self.issues.extend(other.issues);
    }

    /// Consume into the issue list.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

fn render_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
