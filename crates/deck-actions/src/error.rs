//! Error types for action dispatch.

use thiserror::Error;

use crate::capability::Capability;
use deck_layout::LayoutError;

/// Errors that can occur while dispatching or executing an action.
///
/// Every variant is terminal for the single call that raised it; no failure
/// leaves the tree or registry half-mutated (handlers validate before they
/// write, and registry writes are copy-then-replace).
#[derive(Debug, Error)]
pub enum ActionError {
    /// Action name not found in the registry. The message enumerates the
    /// registered names so a calling agent can self-correct.
    #[error("Unknown action: {name}. Available: {available}")]
    UnknownAction { name: String, available: String },

    /// A second registration under an already-taken name.
    #[error("Action already registered: {0}")]
    DuplicateAction(String),

    /// Required argument absent or of the wrong JSON type.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Argument present but unusable.
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The referenced pane has no path in the tree or no registry entry.
    #[error("Pane not found: {0}")]
    PaneNotFound(String),

    /// The `"active"` sentinel was used while no pane is focused.
    #[error("No active pane")]
    NoActivePane,

    /// Tab index outside the pane's tab list.
    #[error("Tab index {index} out of range (pane has {len} tabs)")]
    TabOutOfRange { index: usize, len: usize },

    /// Action invoked against a pane of the wrong content type.
    #[error("Expected a {expected} pane, got {actual}")]
    WrongPaneType {
        expected: &'static str,
        actual: String,
    },

    /// The host does not expose the capability this action needs.
    #[error("Host does not support {0}")]
    Unsupported(Capability),

    /// Structural layout failure (stale path, empty tree).
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Failure reported by a host capability.
    #[error("Host error: {0}")]
    Host(String),
}

impl ActionError {
    /// Convert to the wire outcome object. No exception ever escapes
    /// `dispatch`; this is the shape every failure ends up in.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "success": false,
            "error": self.to_string(),
        })
    }
}

impl From<anyhow::Error> for ActionError {
    fn from(err: anyhow::Error) -> Self {
        Self::Host(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_shape() {
        let err = ActionError::PaneNotFound("p9".to_string());
        let v = err.to_json();
        assert_eq!(v["success"], false);
        assert!(v["error"].as_str().unwrap().contains("p9"));
    }

    #[test]
    fn test_unknown_action_enumerates_names() {
        let err = ActionError::UnknownAction {
            name: "frobnicate".to_string(),
            available: "close_pane, open_pane".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Unknown action: frobnicate"));
        assert!(msg.contains("open_pane"));
    }

    #[test]
    fn test_wrong_pane_type_names_both_types() {
        let err = ActionError::WrongPaneType {
            expected: "editor",
            actual: "terminal".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("editor"));
        assert!(msg.contains("terminal"));
    }

    #[test]
    fn test_layout_error_passthrough() {
        let err: ActionError = LayoutError::StalePath(vec![0, 1]).into();
        assert!(err.to_string().contains("Stale node path"));
    }
}
