//! Host-boundary dialog driver
//!
//! The [`DialogRunner`] owns at most one loaded dialog and pumps its
//! execution under the host's async runtime. It is the boundary where load
//! errors stop propagating: a failed load is reported and leaves the
//! runner with nothing runnable instead of surfacing into the host. It
//! also enforces single-flight runs per runner with an is-running flag.

use crate::dialog::Dialog;
use crate::error::{DialogRunError, RunResult};
use crate::host::DialogHost;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, warn};

/// Drives one dialog at a time to completion
pub struct DialogRunner {
    dialog: Option<Dialog>,
    running: AtomicBool,
}

impl DialogRunner {
    pub fn new() -> Self {
        Self {
            dialog: None,
            running: AtomicBool::new(false),
        }
    }

    /// Whether a run is currently in progress
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Whether a successfully loaded dialog is ready to run
    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Load a dialog and keep it if the load succeeds
    ///
    /// This is where [`crate::DialogLoadError`] is caught: a failure is
    /// reported through the log and the runner is left with no runnable
    /// dialog. Refused while a run is in progress.
    pub fn load_dialog(&mut self, mut dialog: Dialog, host: &dyn DialogHost) {
        if self.is_running() {
            warn!("refusing to load a dialog while another run is in progress");
            return;
        }

        match dialog.load(host) {
            Ok(()) => {
                self.dialog = Some(dialog);
            }
            Err(err) => {
                error!(error = %err, "dialog failed to load");
                self.dialog = None;
            }
        }
    }

    /// Discard the loaded dialog, if any. Refused while running.
    pub fn unload(&mut self) {
        if self.is_running() {
            warn!("refusing to unload while a run is in progress");
            return;
        }
        self.dialog = None;
    }

    /// Run the loaded dialog to completion
    ///
    /// Brackets the execution with the host's `on_dialog_start` and
    /// `on_dialog_end` hooks, each invoked exactly once. Fails with
    /// [`DialogRunError::NotLoaded`] when nothing is loaded and with
    /// [`DialogRunError::AlreadyRunning`] when invoked while a previous
    /// run on this runner is still in progress.
    ///
    /// Dropping the returned future mid-run abandons the execution:
    /// in-flight actions get no cancellation signal, and `on_dialog_end`
    /// is not invoked for an abandoned run.
    pub async fn start(&self, host: &dyn DialogHost) -> RunResult<()> {
        let dialog = self.dialog.as_ref().ok_or(DialogRunError::NotLoaded)?;

        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(DialogRunError::AlreadyRunning);
        }
        // Clears the flag even when the future is dropped mid-run.
        let flag = RunningGuard(&self.running);

        debug!("dialog run starting");
        host.on_dialog_start();
        let result = dialog.run(host).await;
        drop(flag);
        host.on_dialog_end();

        match &result {
            Ok(()) => debug!("dialog run completed"),
            Err(err) => error!(error = %err, "dialog run failed"),
        }
        result
    }
}

impl Default for DialogRunner {
    fn default() -> Self {
        Self::new()
    }
}

struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
