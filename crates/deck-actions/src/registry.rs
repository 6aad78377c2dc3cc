//! Action registry and dispatcher.
//!
//! The registry is an explicit value built once at the composition root.
//! There is no global table and no lazy first-use registration, so tests
//! construct isolated registries freely. `new()` registers the five
//! built-in handler groups in a fixed order.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::action::{Action, ActionDefinition};
use crate::context::ActionContext;
use crate::error::ActionError;
use crate::handlers;
use deck_core::PaneRef;

pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    /// Build a registry with all built-in handler groups registered, in
    /// the order: pane, tab, content, browser, ui.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        let groups = [
            handlers::pane::actions(),
            handlers::tab::actions(),
            handlers::content::actions(),
            handlers::browser::actions(),
            handlers::ui::actions(),
        ];
        for group in groups {
            for action in group {
                // Built-in names are distinct by construction; a clash here
                // is a programming error worth failing loudly over in tests.
                debug_assert!(
                    !registry.actions.contains_key(action.name().as_str()),
                    "duplicate built-in action {}",
                    action.name()
                );
                registry.actions.insert(action.name().as_str().to_string(), action);
            }
        }
        registry
    }

    /// An empty registry, for embedders that compose their own surface.
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register an additional action. Re-registering a taken name is an
    /// error, never a silent overwrite.
    pub fn register(&mut self, action: Arc<dyn Action>) -> Result<(), ActionError> {
        let name = action.name().as_str().to_string();
        if self.actions.contains_key(&name) {
            return Err(ActionError::DuplicateAction(name));
        }
        self.actions.insert(name, action);
        Ok(())
    }

    /// List all registered action names, sorted.
    pub fn list_actions(&self) -> Vec<String> {
        let mut names: Vec<String> = self.actions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Introspection records for every registered action, for building
    /// agent tool declarations or command palettes.
    pub fn definitions(&self) -> Vec<ActionDefinition> {
        let mut defs: Vec<ActionDefinition> = self
            .actions
            .values()
            .map(|action| ActionDefinition {
                name: action.name().as_str().to_string(),
                description: action.description().to_string(),
                parameters: action.parameters(),
            })
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute an action by name and normalize the outcome.
    ///
    /// Always returns a JSON object with a boolean `success` field; every
    /// failure (unknown name, missing capability, handler error) comes
    /// back as `{success: false, error}`. Nothing escapes this boundary.
    pub async fn dispatch(&self, name: &str, args: Value, ctx: &ActionContext) -> Value {
        let Some(action) = self.actions.get(name) else {
            let err = ActionError::UnknownAction {
                name: name.to_string(),
                available: self.list_actions().join(", "),
            };
            tracing::warn!("dispatch failed: {}", err);
            return err.to_json();
        };

        // Uniform capability gate, checked once for every action.
        if let Some(capability) = action.required_capability() {
            if !ctx.host().capabilities().contains(capability) {
                let err = ActionError::Unsupported(capability);
                tracing::debug!("{}: {}", name, err);
                return err.to_json();
            }
        }

        // Resolve the pane reference exactly once, before the handler runs.
        let pane = match args.get("paneId") {
            None => PaneRef::Active.resolve(ctx.active_pane().as_ref()),
            Some(Value::String(s)) => {
                PaneRef::from(s.as_str()).resolve(ctx.active_pane().as_ref())
            }
            Some(other) => {
                let err = ActionError::InvalidArgument {
                    name: "paneId",
                    reason: format!("expected a string, got {}", other),
                };
                return err.to_json();
            }
        };

        tracing::debug!(action = name, pane = ?pane, "dispatching");
        match action.execute(&args, pane, ctx).await {
            Ok(mut result) => {
                if let Some(obj) = result.as_object_mut() {
                    obj.insert("success".to_string(), Value::Bool(true));
                    result
                } else {
                    serde_json::json!({ "success": true, "result": result })
                }
            }
            Err(err) => {
                tracing::debug!(action = name, "failed: {}", err);
                err.to_json()
            }
        }
    }
}
