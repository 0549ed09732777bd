//! Error types for dialog loading and execution

use dm_core::TypeMismatchError;
use dm_expr::ExprError;
use thiserror::Error;

/// Result type for the load phase
pub type LoadResult<T> = Result<T, DialogLoadError>;

/// Result type for the run phase
pub type RunResult<T> = Result<T, DialogRunError>;

/// A structural or semantic authoring error caught during `load`
///
/// Load errors propagate to the tree root and abort the entire load; a
/// partially loaded tree is never runnable. The [`crate::DialogRunner`]
/// catches them at the host boundary and reports them instead of
/// propagating further.
#[derive(Debug, Error)]
pub enum DialogLoadError {
    /// A validation assertion failed, with a human-readable message
    #[error("{0}")]
    Invalid(String),

    /// A persisted action tree referenced a kind nobody registered
    #[error("unknown action kind: {0}")]
    UnknownKind(String),

    /// An action's field data did not deserialize
    #[error("invalid configuration for action kind '{kind}': {source}")]
    Config {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DialogLoadError {
    /// Build an [`DialogLoadError::Invalid`] from a formatted message
    pub fn invalid(message: impl Into<String>) -> Self {
        DialogLoadError::Invalid(message.into())
    }
}

/// Assert a structural condition during `load`
pub fn ensure(condition: bool, message: impl Into<String>) -> LoadResult<()> {
    if condition {
        Ok(())
    } else {
        Err(DialogLoadError::invalid(message))
    }
}

/// Assert a required reference is present during `load`, yielding it
pub fn ensure_some<T>(option: Option<T>, message: impl Into<String>) -> LoadResult<T> {
    option.ok_or_else(|| DialogLoadError::invalid(message))
}

/// A runtime failure surfaced by an action's execution
///
/// Unlike the Nil-fallback at the value level, these are real failures:
/// they propagate through the composition tree and abort the run.
#[derive(Debug, Error)]
pub enum DialogRunError {
    /// `run` reached a dialog that never loaded successfully
    #[error("dialog is not loaded")]
    NotLoaded,

    /// A run was requested while a previous run is still in progress
    #[error("a dialog is already running")]
    AlreadyRunning,

    /// Malformed expression text evaluated at runtime
    #[error("expression error: {0}")]
    Expression(#[from] ExprError),

    /// Typed extraction from a value of another kind
    #[error("type mismatch: {0}")]
    TypeMismatch(#[from] TypeMismatchError),

    /// An action-specific failure
    #[error("action failed: {0}")]
    Action(String),
}
