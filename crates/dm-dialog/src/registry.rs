//! Explicit action-kind registry
//!
//! Action kinds are registered up front by the host: a stable string tag
//! mapped to a factory that builds the action from its raw field data.
//! Deserializing a persisted tree is then a pure lookup, with no runtime
//! type discovery anywhere. The kinds `"sequence"` and `"parallel"` are
//! reserved for nested subdialogs and handled by the registry itself.

use crate::action::Action;
use crate::config::{ActionConfig, DialogConfig, SubdialogConfig};
use crate::dialog::Dialog;
use crate::error::{DialogLoadError, LoadResult};
use crate::subdialog::{CompositionMode, Subdialog};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::debug;

/// Reserved kind tag for a nested sequential subdialog
pub const SEQUENCE_KIND: &str = "sequence";

/// Reserved kind tag for a nested parallel subdialog
pub const PARALLEL_KIND: &str = "parallel";

/// Builds an action from its raw field data
pub type ActionFactory =
    Box<dyn Fn(&serde_json::Value) -> LoadResult<Box<dyn Action>> + Send + Sync>;

struct Registration {
    menu: Option<String>,
    factory: ActionFactory,
}

/// Mapping from kind tag to action factory
///
/// Populated at process start by explicit registration calls.
#[derive(Default)]
pub struct ActionRegistry {
    registrations: HashMap<String, Registration>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for a kind tag
    ///
    /// Registering a reserved kind (`"sequence"`, `"parallel"`) or a kind
    /// registered earlier replaces nothing useful: reserved kinds are
    /// resolved before the factory table, and a duplicate overwrites the
    /// previous registration.
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn(&serde_json::Value) -> LoadResult<Box<dyn Action>> + Send + Sync + 'static,
    {
        let kind = kind.into();
        debug!(kind, "registering action kind");
        self.registrations.insert(
            kind,
            Registration {
                menu: None,
                factory: Box::new(factory),
            },
        );
    }

    /// Register a kind whose action deserializes directly from field data
    pub fn register_config<T>(&mut self, kind: impl Into<String>)
    where
        T: Action + DeserializeOwned + 'static,
    {
        let kind = kind.into();
        let tag = kind.clone();
        self.register(kind, move |data| {
            let action: T =
                serde_json::from_value(data.clone()).map_err(|source| DialogLoadError::Config {
                    kind: tag.clone(),
                    source,
                })?;
            Ok(Box::new(action) as Box<dyn Action>)
        });
    }

    /// Attach a human-facing menu label to a registered kind, for host
    /// tooling that builds insertion menus
    pub fn set_menu(&mut self, kind: &str, menu: impl Into<String>) {
        if let Some(registration) = self.registrations.get_mut(kind) {
            registration.menu = Some(menu.into());
        }
    }

    /// The menu label for a kind, if one was attached
    pub fn menu(&self, kind: &str) -> Option<&str> {
        self.registrations.get(kind)?.menu.as_deref()
    }

    /// All registered kind tags, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.registrations.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Build one action from its configuration
    ///
    /// The reserved kinds build nested subdialogs recursively; the nested
    /// field data is a [`SubdialogConfig`] whose mode the kind tag
    /// overrides.
    pub fn build_action(&self, config: &ActionConfig) -> LoadResult<Box<dyn Action>> {
        match config.kind.as_str() {
            SEQUENCE_KIND => Ok(Box::new(self.build_nested(config, CompositionMode::Sequential)?)),
            PARALLEL_KIND => Ok(Box::new(self.build_nested(config, CompositionMode::Parallel)?)),
            kind => {
                let registration = self
                    .registrations
                    .get(kind)
                    .ok_or_else(|| DialogLoadError::UnknownKind(kind.to_string()))?;
                (registration.factory)(&config.data)
            }
        }
    }

    /// Build a subdialog and all of its actions
    pub fn build_subdialog(&self, config: &SubdialogConfig) -> LoadResult<Subdialog> {
        let mut subdialog = Subdialog::new(config.mode);
        for action_config in &config.actions {
            subdialog.push(self.build_action(action_config)?);
        }
        Ok(subdialog)
    }

    /// Build a whole dialog from persisted configuration
    ///
    /// The result is unloaded; call [`Dialog::load`] before running.
    pub fn build_dialog(&self, config: &DialogConfig) -> LoadResult<Dialog> {
        Ok(Dialog::new(self.build_subdialog(&config.dialog)?))
    }

    fn build_nested(&self, config: &ActionConfig, mode: CompositionMode) -> LoadResult<Subdialog> {
        let nested: SubdialogConfig =
            serde_json::from_value(config.data.clone()).map_err(|source| {
                DialogLoadError::Config {
                    kind: config.kind.clone(),
                    source,
                }
            })?;
        let mut subdialog = self.build_subdialog(&nested)?;
        subdialog.set_mode(mode);
        Ok(subdialog)
    }
}
