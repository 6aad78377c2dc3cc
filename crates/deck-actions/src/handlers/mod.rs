//! Built-in handler groups.
//!
//! Five cohesive command sets over the layout tree and pane registry. Each
//! module exposes `actions()`, consumed by `ActionRegistry::new()` in a
//! fixed registration order.

pub mod browser;
pub mod content;
pub mod pane;
pub mod tab;
pub mod ui;

use crate::context::ActionContext;
use crate::error::ActionError;
use deck_core::{ContentType, PaneId, PaneState};

/// Unwrap a dispatcher-resolved pane reference. `None` means the
/// `"active"` sentinel was used while nothing is focused.
pub(crate) fn resolved(pane: Option<PaneId>) -> Result<PaneId, ActionError> {
    pane.ok_or(ActionError::NoActivePane)
}

/// Look up a pane's state, failing with the pane's id when absent.
pub(crate) fn state_of(ctx: &ActionContext, pane: &PaneId) -> Result<PaneState, ActionError> {
    ctx.pane_state(pane)
        .ok_or_else(|| ActionError::PaneNotFound(pane.to_string()))
}

/// Reject panes of the wrong content type, naming expected vs. actual.
pub(crate) fn require_type(
    state: &PaneState,
    expected: ContentType,
    expected_name: &'static str,
) -> Result<(), ActionError> {
    if state.content_type == expected {
        Ok(())
    } else {
        Err(ActionError::WrongPaneType {
            expected: expected_name,
            actual: state.content_type.to_string(),
        })
    }
}
