//! Persisted action-tree configuration
//!
//! The engine does not own an on-disk format; hosts hand it these serde
//! types from whatever data layer they use. Each action is a stable kind
//! tag plus raw field data, deserialized by the factory the host
//! registered for that kind.

use crate::subdialog::CompositionMode;
use serde::{Deserialize, Serialize};

/// Configuration for a whole dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogConfig {
    /// The root subdialog
    pub dialog: SubdialogConfig,
}

/// Configuration for one subdialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdialogConfig {
    /// Composition policy; sequential when omitted
    #[serde(default)]
    pub mode: CompositionMode,

    /// Actions in execution/display order
    #[serde(default)]
    pub actions: Vec<ActionConfig>,
}

/// Configuration for one action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionConfig {
    /// The registered kind tag
    pub kind: String,

    /// Kind-specific field data, passed to the factory as-is
    #[serde(default)]
    pub data: serde_json::Value,
}
