//! The host context passed through load and run
//!
//! The engine is agnostic to the host's concrete shape. It requires only
//! the variable store capability (for expression-driven actions) and the
//! two lifecycle hooks the [`crate::DialogRunner`] invokes exactly once
//! around every successful run. Hosts layer their own capabilities (a
//! presentation surface, input events) on top by downcasting or by
//! defining richer traits that extend this one.

use dm_expr::VariableStore;

/// Capabilities a host supplies to a running dialog
pub trait DialogHost: Send + Sync {
    /// The variable store shared by every expression evaluation in the tree
    fn variables(&self) -> &dyn VariableStore;

    /// Invoked once when a run begins, before the first action starts
    fn on_dialog_start(&self);

    /// Invoked once when a run ends, after the last action completed
    fn on_dialog_end(&self);
}
