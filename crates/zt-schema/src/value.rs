//! # Dynamic Values
//!
//! `Value` is the input and output type of every schema. It is a JSON value
//! plus one extra variant, `Opaque`, which carries an arbitrary typed Rust
//! value. Schemas that check "is this a genuine instance of type `T`" do so
//! with [`Value::downcast_ref`], a nominal check by `TypeId`.
//!
//! ## Identity
//!
//! Cloning a `Value::Opaque` clones the `Arc`, not the payload. A schema
//! that accepts an opaque value returns the same allocation it was given,
//! which [`Value::same_instance`] can observe.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A typed payload that can travel inside a [`Value`].
///
/// Implemented for every `'static` type that is `Debug + Display +
/// PartialEq + Send + Sync`. `Display` is used when the value is exported
/// to JSON.
pub trait OpaqueValue: Any + fmt::Debug + fmt::Display + Send + Sync {
    /// Upcast for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Equality against another opaque payload of possibly different type.
    fn dyn_eq(&self, other: &dyn OpaqueValue) -> bool;
}

impl<T> OpaqueValue for T
where
    T: Any + fmt::Debug + fmt::Display + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn dyn_eq(&self, other: &dyn OpaqueValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// A dynamically typed value under validation.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The null value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Integers are stored exactly up to 2^53.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// A string-keyed map with deterministic key order.
    Object(BTreeMap<String, Value>),
    /// A typed Rust value.
    Opaque(Arc<dyn OpaqueValue>),
}

impl Value {
    /// Wrap a typed value.
    pub fn opaque<T: OpaqueValue>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Borrow the payload as `T` if this is an opaque value of exactly that
    /// type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(payload) => {
                let payload: &dyn OpaqueValue = &**payload;
                payload.as_any().downcast_ref::<T>()
            }
            _ => None,
        }
    }

    /// True if this is an opaque value of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// True when both are opaque values sharing one allocation.
    pub fn same_instance(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Borrow the text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the entries of an object value.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key of an object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of this value's runtime type, as shown in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Opaque(payload) => {
                let payload: &dyn OpaqueValue = &**payload;
                payload.type_name()
            }
        }
    }

    /// Export as JSON. Opaque values become their `Display` text.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Array(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Self::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Self::Opaque(payload) => serde_json::Value::String(payload.to_string()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => {
                let (lhs, rhs): (&dyn OpaqueValue, &dyn OpaqueValue) = (&**a, &**b);
                Arc::ptr_eq(a, b) || lhs.dyn_eq(rhs)
            }
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Object(map)
    }
}

impl<V: Into<Value>> FromIterator<(String, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
