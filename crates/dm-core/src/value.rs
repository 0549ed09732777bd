//! The tagged-union runtime value for dialog variables
//!
//! A [`Value`] is exactly one of Nil, Number, Boolean or String. Operators
//! are defined per kind pairing; any pairing outside the table resolves to
//! `Nil` rather than raising an error. This permissiveness is deliberate:
//! dialog content keeps running when an author mixes kinds, and a `Nil`
//! comparison result stays distinguishable from a `false` one.

use crate::error::TypeMismatchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind tag of a [`Value`], used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    Number,
    Boolean,
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Nil => "nil",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
        };
        f.write_str(name)
    }
}

/// A dialog variable value
///
/// Serializes untagged, so the persisted form is plain JSON: `null`, a
/// number, a boolean, or a string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Nil,
    Number(f64),
    Boolean(bool),
    String(String),
}

impl Value {
    /// The kind tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Extract the number, failing if this value holds another kind
    pub fn as_number(&self) -> Result<f64, TypeMismatchError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(TypeMismatchError {
                expected: ValueKind::Number,
                actual: other.kind(),
            }),
        }
    }

    /// Extract the boolean, failing if this value holds another kind
    pub fn as_boolean(&self) -> Result<bool, TypeMismatchError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(TypeMismatchError {
                expected: ValueKind::Boolean,
                actual: other.kind(),
            }),
        }
    }

    /// Extract the string, failing if this value holds another kind
    pub fn as_string(&self) -> Result<&str, TypeMismatchError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(TypeMismatchError {
                expected: ValueKind::String,
                actual: other.kind(),
            }),
        }
    }

    /// `+`: Number + Number sums, String + String concatenates
    pub fn add(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            (Value::String(a), Value::String(b)) => Value::String(format!("{a}{b}")),
            _ => Value::Nil,
        }
    }

    /// `-`: defined for Number - Number only
    pub fn subtract(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a - b),
            _ => Value::Nil,
        }
    }

    /// `*`: defined for Number * Number only
    pub fn multiply(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a * b),
            _ => Value::Nil,
        }
    }

    /// `/`: float division, no zero guard (IEEE infinities and NaN pass through)
    pub fn divide(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a / b),
            _ => Value::Nil,
        }
    }

    /// `%`: float remainder, same IEEE semantics as division
    pub fn modulo(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a % b),
            _ => Value::Nil,
        }
    }

    /// `==`: defined within matching Number, Boolean or String pairs
    pub fn equals(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Boolean(a == b),
            (Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(a == b),
            (Value::String(a), Value::String(b)) => Value::Boolean(a == b),
            _ => Value::Nil,
        }
    }

    /// `!=`: defined within matching Number, Boolean or String pairs
    pub fn not_equals(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Boolean(a != b),
            (Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(a != b),
            (Value::String(a), Value::String(b)) => Value::Boolean(a != b),
            _ => Value::Nil,
        }
    }

    /// `<`: Number ordering only
    pub fn less_than(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Boolean(a < b),
            _ => Value::Nil,
        }
    }

    /// `>`: Number ordering only
    pub fn greater_than(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Boolean(a > b),
            _ => Value::Nil,
        }
    }

    /// `<=`: Number ordering only
    pub fn less_equal(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Boolean(a <= b),
            _ => Value::Nil,
        }
    }

    /// `>=`: Number ordering only
    pub fn greater_equal(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Value::Boolean(a >= b),
            _ => Value::Nil,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_arithmetic() {
        let a = Value::Number(10.0);
        let b = Value::Number(3.0);

        assert_eq!(a.add(&b), Value::Number(13.0));
        assert_eq!(a.subtract(&b), Value::Number(7.0));
        assert_eq!(a.multiply(&b), Value::Number(30.0));
        assert_eq!(a.divide(&b), Value::Number(10.0 / 3.0));
        assert_eq!(a.modulo(&b), Value::Number(1.0));
    }

    #[test]
    fn test_division_follows_ieee_semantics() {
        let one = Value::Number(1.0);
        let zero = Value::Number(0.0);

        assert_eq!(one.divide(&zero), Value::Number(f64::INFINITY));
        assert_eq!(
            Value::Number(-1.0).divide(&zero),
            Value::Number(f64::NEG_INFINITY)
        );

        let nan = zero.divide(&zero).as_number().unwrap();
        assert!(nan.is_nan());
        let rem = one.modulo(&zero).as_number().unwrap();
        assert!(rem.is_nan());
    }

    #[test]
    fn test_string_concatenation() {
        let a = Value::from("foo");
        let b = Value::from("bar");
        assert_eq!(a.add(&b), Value::from("foobar"));
    }

    #[test]
    fn test_mismatched_pairings_resolve_to_nil() {
        let number = Value::Number(1.0);
        let boolean = Value::Boolean(true);
        let string = Value::from("a");
        let nil = Value::Nil;

        assert_eq!(string.add(&number), Value::Nil);
        assert_eq!(number.add(&boolean), Value::Nil);
        assert_eq!(string.subtract(&string), Value::Nil);
        assert_eq!(boolean.multiply(&boolean), Value::Nil);
        assert_eq!(string.divide(&number), Value::Nil);
        assert_eq!(nil.modulo(&nil), Value::Nil);

        assert_eq!(number.equals(&string), Value::Nil);
        assert_eq!(number.equals(&boolean), Value::Nil);
        assert_eq!(nil.equals(&nil), Value::Nil);
        assert_eq!(nil.not_equals(&number), Value::Nil);

        assert_eq!(string.less_than(&string), Value::Nil);
        assert_eq!(boolean.greater_equal(&number), Value::Nil);
    }

    #[test]
    fn test_comparisons_within_matching_kinds() {
        assert_eq!(
            Value::Number(1.0).equals(&Value::Number(1.0)),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::Boolean(true).not_equals(&Value::Boolean(false)),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::from("a").equals(&Value::from("b")),
            Value::Boolean(false)
        );
        assert_eq!(
            Value::Number(2.0).less_equal(&Value::Number(2.0)),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::Number(2.0).greater_than(&Value::Number(3.0)),
            Value::Boolean(false)
        );
    }

    #[test]
    fn test_typed_extraction() {
        assert_eq!(Value::Number(4.5).as_number(), Ok(4.5));
        assert_eq!(Value::Boolean(true).as_boolean(), Ok(true));
        assert_eq!(Value::from("hi").as_string(), Ok("hi"));

        let err = Value::from("hi").as_number().unwrap_err();
        assert_eq!(err.expected, ValueKind::Number);
        assert_eq!(err.actual, ValueKind::String);

        let err = Value::Nil.as_boolean().unwrap_err();
        assert_eq!(err.actual, ValueKind::Nil);
    }

    #[test]
    fn test_serde_untagged_form() {
        assert_eq!(serde_json::to_string(&Value::Nil).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Number(2.5)).unwrap(), "2.5");
        assert_eq!(
            serde_json::to_string(&Value::Boolean(false)).unwrap(),
            "false"
        );
        assert_eq!(serde_json::to_string(&Value::from("x")).unwrap(), "\"x\"");

        let value: Value = serde_json::from_str("3.25").unwrap();
        assert_eq!(value, Value::Number(3.25));
        let value: Value = serde_json::from_str("null").unwrap();
        assert_eq!(value, Value::Nil);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::from("text").to_string(), "text");
    }
}
