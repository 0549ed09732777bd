//! The dialog root
//!
//! A [`Dialog`] binds one root [`Subdialog`] to the load-once, then-run
//! lifecycle. It enforces the load-before-run invariant and imposes no
//! other policy of its own.

use crate::action::Action;
use crate::error::{DialogRunError, LoadResult, RunResult};
use crate::host::DialogHost;
use crate::subdialog::Subdialog;
use tracing::debug;

/// Root container for an action tree
pub struct Dialog {
    root: Subdialog,
    loaded: bool,
}

impl Dialog {
    pub fn new(root: Subdialog) -> Self {
        Self {
            root,
            loaded: false,
        }
    }

    /// Whether a load completed successfully
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn root(&self) -> &Subdialog {
        &self.root
    }

    /// Mutable access to the root for tooling edits
    ///
    /// Any structural edit invalidates a previous load, so this clears the
    /// loaded flag; call [`Dialog::load`] again before running.
    pub fn root_mut(&mut self) -> &mut Subdialog {
        self.loaded = false;
        &mut self.root
    }

    /// Validate the whole tree, depth-first
    ///
    /// The first structural error aborts the load and the dialog stays
    /// non-runnable. Loading an already-loaded dialog is a no-op success.
    pub fn load(&mut self, host: &dyn DialogHost) -> LoadResult<()> {
        if self.loaded {
            return Ok(());
        }
        self.root.load(host)?;
        self.loaded = true;
        debug!("dialog loaded");
        Ok(())
    }

    /// Run the tree to completion
    ///
    /// Delegates to the root subdialog's execution; fails with
    /// [`DialogRunError::NotLoaded`] if no successful load preceded it.
    pub async fn run(&self, host: &dyn DialogHost) -> RunResult<()> {
        if !self.loaded {
            return Err(DialogRunError::NotLoaded);
        }
        self.root.run(host).await
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new(Subdialog::sequential())
    }
}
