//! Action trait definition.
//!
//! All actions must be Send + Sync because the registry holds them as
//! `Arc<dyn Action>` and dispatch may happen from any task.
//!
//! ## Return Format Contract
//!
//! Handlers return `Ok(object)` for success and a typed `ActionError` for
//! every expected failure. The dispatcher is the boundary: it merges
//! `"success": true` into successful objects and converts every error into
//! `{"success": false, "error": <message>}`. Nothing ever escapes
//! `dispatch` as an Err or a panic-worthy condition.

use serde_json::Value;

use crate::capability::Capability;
use crate::context::ActionContext;
use crate::error::ActionError;
use deck_core::{ActionName, PaneId};

#[async_trait::async_trait]
pub trait Action: Send + Sync {
    /// Wire name (must match exactly what callers request).
    fn name(&self) -> ActionName;

    /// Action description for agent/command-palette context.
    fn description(&self) -> &'static str;

    /// JSON Schema for the action's arguments.
    fn parameters(&self) -> Value;

    /// The host capability this action requires, if any. The dispatcher
    /// checks it once before `execute` runs.
    fn required_capability(&self) -> Option<Capability> {
        None
    }

    /// Execute the action.
    ///
    /// `pane` is the already-resolved pane reference: the dispatcher
    /// resolves `args.paneId` (absent or `"active"` meaning the focused
    /// pane) exactly once before any handler runs, so handlers never
    /// re-implement sentinel handling. Actions that don't address a pane
    /// ignore it.
    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError>;
}

/// Introspection record for one registered action, used to expose the
/// dispatch surface to tool-calling agents and command palettes.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ActionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}
