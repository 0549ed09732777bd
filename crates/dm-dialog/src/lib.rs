//! Dialog Engine
//!
//! This crate provides the action-tree execution engine for dialog scripts.
//! Authors compose a tree of actions that execute sequentially or in
//! parallel; the tree is validated once up front (`load`) and then run as a
//! suspendable cooperative execution (`run`).
//!
//! # Lifecycle
//!
//! 1. Build a [`Dialog`] — directly or from persisted configuration through
//!    an [`ActionRegistry`].
//! 2. `load` validates the whole tree depth-first; any structural error
//!    aborts the load and the dialog never becomes runnable.
//! 3. `run` executes the tree to completion under the host's async driver,
//!    suspending wherever actions await.
//!
//! # Key Types
//!
//! - [`Action`] - The unit of dialog behavior (load/run contract)
//! - [`Subdialog`] - Ordered composition, sequential or parallel
//! - [`Dialog`] - Root container binding one subdialog to the lifecycle
//! - [`ActionRegistry`] - Explicit kind-tag to factory registry
//! - [`DialogRunner`] - Host-boundary driver with start/end hooks

pub mod action;
pub mod config;
pub mod dialog;
pub mod error;
pub mod host;
pub mod registry;
pub mod runner;
pub mod subdialog;

pub use action::Action;
pub use config::{ActionConfig, DialogConfig, SubdialogConfig};
pub use dialog::Dialog;
pub use error::{ensure, ensure_some, DialogLoadError, DialogRunError, LoadResult, RunResult};
pub use host::DialogHost;
pub use registry::{ActionRegistry, PARALLEL_KIND, SEQUENCE_KIND};
pub use runner::DialogRunner;
pub use subdialog::{CompositionMode, Subdialog};
