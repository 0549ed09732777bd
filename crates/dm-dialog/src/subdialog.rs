//! Ordered action composition
//!
//! A [`Subdialog`] owns an ordered sequence of actions and one of two
//! composition policies: strictly sequential, or "start all together,
//! complete when all complete". Load order is always sequential and
//! depth-first regardless of the run policy — load order and run order are
//! independent concerns.

use crate::action::Action;
use crate::error::{LoadResult, RunResult};
use crate::host::DialogHost;
use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How a subdialog schedules its children's executions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompositionMode {
    /// Child i+1 starts only after child i completed
    #[default]
    Sequential,

    /// All children start in the same scheduling step; the composite
    /// completes when every child has completed, in whatever order
    Parallel,
}

/// An ordered, composable group of actions
///
/// Insertion order is execution and display order. Structural edits are
/// tooling operations on `&mut self`; a running tree holds `&self` and is
/// logically immutable for the duration of its own execution.
pub struct Subdialog {
    mode: CompositionMode,
    actions: Vec<Box<dyn Action>>,
}

impl Subdialog {
    pub fn new(mode: CompositionMode) -> Self {
        Self {
            mode,
            actions: Vec::new(),
        }
    }

    /// A new empty sequential subdialog (the default composition)
    pub fn sequential() -> Self {
        Self::new(CompositionMode::Sequential)
    }

    /// A new empty parallel subdialog
    pub fn parallel() -> Self {
        Self::new(CompositionMode::Parallel)
    }

    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CompositionMode) {
        self.mode = mode;
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Append an action at the end
    pub fn push(&mut self, action: Box<dyn Action>) {
        self.actions.push(action);
    }

    /// Insert an action at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, like `Vec::insert`.
    pub fn insert(&mut self, index: usize, action: Box<dyn Action>) {
        self.actions.insert(index, action);
    }

    /// Remove and return the action at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, like `Vec::remove`.
    pub fn remove(&mut self, index: usize) -> Box<dyn Action> {
        self.actions.remove(index)
    }

    /// Move the action at `index` by `offset` positions, clamping the
    /// destination to the ends of the list. Returns the new index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn shift(&mut self, index: usize, offset: isize) -> usize {
        let target = index
            .saturating_add_signed(offset)
            .min(self.actions.len() - 1);
        let action = self.actions.remove(index);
        self.actions.insert(target, action);
        target
    }
}

#[async_trait]
impl Action for Subdialog {
    /// Depth-first, strictly sequential across children regardless of the
    /// run composition policy; the first failure aborts the whole load.
    fn load(&mut self, host: &dyn DialogHost) -> LoadResult<()> {
        for action in &mut self.actions {
            action.load(host)?;
        }
        Ok(())
    }

    async fn run(&self, host: &dyn DialogHost) -> RunResult<()> {
        trace!(mode = ?self.mode, actions = self.actions.len(), "running subdialog");

        match self.mode {
            CompositionMode::Sequential => {
                for action in &self.actions {
                    action.run(host).await?;
                }
                Ok(())
            }
            CompositionMode::Parallel => {
                // No early exit: an erring child still lets its siblings
                // finish, then the first error in declaration order wins.
                let results = join_all(self.actions.iter().map(|a| a.run(host))).await;
                results.into_iter().collect()
            }
        }
    }
}
