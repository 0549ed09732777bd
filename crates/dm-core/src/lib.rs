//! Core value type for the dialog engine
//!
//! This crate provides [`Value`], the dynamically-typed variable used
//! throughout dialog scripts, together with its operator semantics and
//! fallible typed extraction.

mod error;
mod value;

pub use error::TypeMismatchError;
pub use value::{Value, ValueKind};
