//! The variable store capability
//!
//! The evaluator resolves identifiers through [`VariableStore`], a keyed
//! mapping from name to [`Value`] owned by the host. The engine imposes no
//! lifecycle on the store beyond it existing for the duration of an
//! evaluation, and assumes the single-threaded cooperative model: it never
//! synchronizes an in-progress evaluation against external mutation.

use crate::error::ExprResult;
use crate::eval::evaluate;
use dashmap::DashMap;
use dm_core::Value;
use tracing::trace;

/// Named-value mapping consulted and mutated by expressions and actions
///
/// Names that were never set read as [`Value::Nil`].
pub trait VariableStore: Send + Sync {
    /// Look up a variable; unknown names yield `Value::Nil`
    fn get_value(&self, name: &str) -> Value;

    /// Set or replace a variable
    fn set_value(&self, name: &str, value: Value);

    /// Evaluate an expression against this store
    fn evaluate(&self, expr: &str) -> ExprResult<Value>
    where
        Self: Sized,
    {
        evaluate(self, expr)
    }

    /// Evaluate an expression and store the result under `name`
    fn set_value_from_expression(&self, name: &str, expr: &str) -> ExprResult<()>
    where
        Self: Sized,
    {
        let value = evaluate(self, expr)?;
        self.set_value(name, value);
        Ok(())
    }
}

/// In-memory [`VariableStore`] backed by a concurrent map
///
/// The default store for hosts that do not persist variables themselves.
/// Mutation goes through `&self`, so the store can be shared behind an
/// `Arc` between the host and a running dialog.
#[derive(Debug, Default)]
pub struct MemoryVariables {
    values: DashMap<String, Value>,
}

impl MemoryVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables currently set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every variable
    pub fn clear(&self) {
        self.values.clear();
    }
}

impl VariableStore for MemoryVariables {
    fn get_value(&self, name: &str) -> Value {
        self.values
            .get(name)
            .map(|v| v.clone())
            .unwrap_or(Value::Nil)
    }

    fn set_value(&self, name: &str, value: Value) {
        trace!(name, %value, "setting dialog variable");
        self.values.insert(name.to_string(), value);
    }
}
