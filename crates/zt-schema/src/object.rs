//! # Object Schemas
//!
//! `ZObject` validates a string-keyed map field by field. Each declared
//! field's schema decides whether absence is allowed (see
//! [`Schema::check_field`]); the output contains the validated value of
//! every present field.
//!
//! Unknown keys are stripped by default. `strict()` rejects them and
//! `passthrough()` copies them to the output untouched.
//!
//! Every field is checked even after one fails, so the error lists all
//! problems at once, each with its path.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Issue, IssueCode, PathSegment, ZodError};
use crate::schema::{BoxedSchema, Schema};
use crate::value::Value;

/// How an object schema treats keys it does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Drop them from the output.
    #[default]
    Strip,
    /// Reject the object.
    Strict,
    /// Keep them in the output unvalidated.
    Passthrough,
}

/// Validates an object field by field.
#[derive(Default)]
pub struct ZObject {
    fields: Vec<(String, BoxedSchema)>,
    unknown_keys: UnknownKeys,
}

impl ZObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. A later declaration of the same name replaces the
    /// earlier one.
    pub fn field(mut self, name: impl Into<String>, schema: impl Schema + 'static) -> Self {
        let name = name.into();
        self.fields.retain(|(existing, _)| *existing != name);
        self.fields.push((name, Box::new(schema)));
        self
    }

    /// Reject undeclared keys.
    pub fn strict(mut self) -> Self {
        self.unknown_keys = UnknownKeys::Strict;
        self
    }

    /// Keep undeclared keys.
    pub fn passthrough(mut self) -> Self {
        self.unknown_keys = UnknownKeys::Passthrough;
        self
    }

    /// Names of the declared fields, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    fn is_declared(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == key)
    }
}

impl fmt::Debug for ZObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZObject")
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .field("unknown_keys", &self.unknown_keys)
            .finish()
    }
}

impl Schema for ZObject {
    fn check(&self, input: &Value, path: &[PathSegment]) -> Result<Value, ZodError> {
        let Some(map) = input.as_object() else {
            return Err(ZodError::single(Issue::new(
                IssueCode::InvalidType,
                path,
                format!("Expected object, received {}", input.type_name()),
            )));
        };

        let mut output = BTreeMap::new();
        let mut issues: Vec<Issue> = Vec::new();

        for (name, schema) in &self.fields {
            let mut field_path = path.to_vec();
            field_path.push(PathSegment::Key(name.clone()));
            match schema.check_field(map.get(name), &field_path) {
                Ok(Some(value)) => {
                    output.insert(name.clone(), value);
                }
                Ok(None) => {}
                Err(err) => issues.extend(err.into_issues()),
            }
        }

        let unknown: Vec<&String> = map.keys().filter(|k| !self.is_declared(k)).collect();
        match self.unknown_keys {
            UnknownKeys::Strip => {}
            UnknownKeys::Passthrough => {
                for key in unknown {
                    output.insert(key.clone(), map[key].clone());
                }
            }
            UnknownKeys::Strict if !unknown.is_empty() => {
                let keys = unknown.iter().map(|k| format!("'{k}'")).collect::<Vec<_>>();
                issues.push(Issue::new(
                    IssueCode::UnrecognizedKeys,
                    path,
                    format!("Unrecognized key(s) in object: {}", keys.join(", ")),
                ));
            }
            UnknownKeys::Strict => {}
        }

        if issues.is_empty() {
            Ok(Value::Object(output))
        } else {
            tracing::trace!(issue_count = issues.len(), "object validation failed");
            Err(ZodError::from_issues(issues))
        }
    }
}
