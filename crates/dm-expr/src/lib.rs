//! Expression language for dialog scripts
//!
//! This crate provides the expression engine dialog actions use to read and
//! write variables: a tokenizer, a single-pass recursive-descent evaluator,
//! and the [`VariableStore`] capability the evaluator resolves identifiers
//! against.
//!
//! Expressions are short author-written strings like `"hp + 3 >= 10"`:
//! float arithmetic (`+ - * / %`), comparisons (`== != < > <= >=`),
//! parentheses, `true`/`false`, double-quoted strings, and bare identifiers
//! looked up in the store. There are no loops, calls, or user-defined types.
//!
//! # Key Types
//!
//! - [`evaluate`] - Evaluate an expression against a store
//! - [`VariableStore`] - Named-value capability implemented by the host
//! - [`MemoryVariables`] - Ready-made in-memory store
//! - [`Token`] / [`Tokenizer`] - The lexical layer

mod error;
mod eval;
mod store;
mod token;

pub use error::{ExprError, ExprResult};
pub use eval::evaluate;
pub use store::{MemoryVariables, VariableStore};
pub use token::{Token, Tokenizer};
