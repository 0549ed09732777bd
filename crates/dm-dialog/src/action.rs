//! The abstract action contract
//!
//! An action is a node in the dialog tree with a two-phase lifecycle:
//! `load` validates structure before any execution begins, `run` is the
//! suspendable execution itself. Concrete action kinds (show text, branch,
//! wait) are domain content defined by the host and registered with an
//! [`crate::ActionRegistry`]; the engine only depends on this contract.

use crate::error::{LoadResult, RunResult};
use crate::host::DialogHost;
use async_trait::async_trait;

/// A single unit of dialog behavior
///
/// Lifecycle: Unloaded → Loaded → Running → Completed. `load` is called
/// exactly once per tree, depth-first, before any `run`; a failure aborts
/// the whole tree's load. `run` performs the action's effect and completes
/// exactly once, suspending at any `await` point as often as it needs —
/// the engine imposes no limit on suspension count or duration.
///
/// An action is owned exclusively by its containing [`crate::Subdialog`]
/// and never holds references back to its parent or siblings.
#[async_trait]
pub trait Action: Send + Sync {
    /// Validate structure and resolve references, mutating internal state
    /// as needed. Must catch every error that would otherwise surface
    /// during `run`: a tree that loaded successfully contains no action
    /// that fails structurally at run time.
    fn load(&mut self, host: &dyn DialogHost) -> LoadResult<()>;

    /// Execute the action's effect. Must not be invoked before a
    /// successful `load`; [`crate::Dialog`] enforces this at the root.
    async fn run(&self, host: &dyn DialogHost) -> RunResult<()>;
}
