//! Error types for typed value extraction

use crate::value::ValueKind;
use thiserror::Error;

/// Raised when a typed accessor is called on a [`crate::Value`] holding a
/// different kind. Operator-level kind mismatches never raise this; they
/// resolve to `Value::Nil` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a {expected} value, found {actual}")]
pub struct TypeMismatchError {
    /// The kind the caller asked for
    pub expected: ValueKind,
    /// The kind the value actually holds
    pub actual: ValueKind,
}
