//! Pane actions: structural operations over the layout tree.
//!
//! Every structural mutation here invalidates previously computed node
//! paths; paths are always re-resolved from the live tree at call time.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::action::Action;
use crate::args::{optional_str, required_str};
use crate::capability::Capability;
use crate::context::ActionContext;
use crate::error::ActionError;
use crate::handlers::resolved;
use deck_core::{ActionName, ContentType, PaneId, PaneState};
use deck_layout::{collect_panes, remove_at, split_at, LayoutNode, SplitDirection, SplitSide};

pub fn actions() -> Vec<Arc<dyn Action>> {
    vec![
        Arc::new(OpenPane),
        Arc::new(ClosePane),
        Arc::new(FocusPane),
        Arc::new(SplitPane),
        Arc::new(ListPanes),
        Arc::new(ZenMode),
    ]
}

fn parse_side(args: &Value) -> Result<SplitSide, ActionError> {
    match optional_str(args, "position") {
        None => Ok(SplitSide::Right),
        Some(s) => SplitSide::from_str(s).ok_or_else(|| ActionError::InvalidArgument {
            name: "position",
            reason: format!("expected left|right|top|bottom, got {:?}", s),
        }),
    }
}

/// Open a new pane beside the active one (or as the root of an empty
/// workspace). The `Content` leaf and its registry entry are created
/// together; a success signals intent accepted, not a finished re-render.
pub struct OpenPane;

#[async_trait::async_trait]
impl Action for OpenPane {
    fn name(&self) -> ActionName {
        ActionName::OpenPane
    }

    fn description(&self) -> &'static str {
        "Open a new pane of the given content type, splitting the active pane"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "type": {
                    "type": "string",
                    "description": "Content type (editor, chat, terminal, browser, ...)"
                },
                "path": {
                    "type": "string",
                    "description": "File path the pane points at (editors)"
                },
                "url": {
                    "type": "string",
                    "description": "URL the pane points at (browsers)"
                },
                "position": {
                    "type": "string",
                    "enum": ["left", "right", "top", "bottom"],
                    "description": "Which side of the active pane the new pane lands on (default: right)"
                }
            },
            "required": ["type"]
        })
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let content_type = ContentType::from(required_str(args, "type")?);
        let side = parse_side(args)?;
        let content_id = optional_str(args, "path")
            .or_else(|| optional_str(args, "url"))
            .map(str::to_string)
            .unwrap_or_else(|| ctx.host().generate_id().to_string());
        let new_pane = ctx.host().generate_id();

        let is_empty = ctx.with_layout(|root| root.is_none());
        if is_empty {
            ctx.with_layout_mut(|root| {
                *root = Some(LayoutNode::Content {
                    pane_id: new_pane.clone(),
                });
            });
        } else {
            // Split at the active pane; fall back to the root when focus
            // is empty or points at a pane the tree no longer holds.
            let target_path = pane
                .as_ref()
                .and_then(|p| ctx.find_pane_path(p))
                .unwrap_or_default();
            ctx.with_layout_mut(|root| split_at(root, &target_path, side, new_pane.clone()))?;
        }

        ctx.insert_pane(
            new_pane.clone(),
            PaneState::new(content_type.clone(), content_id.clone()),
        );
        ctx.set_active_pane(Some(new_pane.clone()));
        ctx.host().layout_changed();

        Ok(json!({
            "paneId": new_pane,
            "contentType": content_type.as_str(),
            "contentId": content_id,
        }))
    }
}

/// Close a pane: its tree leaf and registry entry are removed together,
/// and focus moves to the first remaining pane in tree order.
pub struct ClosePane;

#[async_trait::async_trait]
impl Action for ClosePane {
    fn name(&self) -> ActionName {
        ActionName::ClosePane
    }

    fn description(&self) -> &'static str {
        "Close a pane and discard its state"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane to close, or \"active\" (default)"
                }
            },
            "required": []
        })
    }

    async fn execute(
        &self,
        _args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let pane = resolved(pane)?;
        let path = ctx
            .find_pane_path(&pane)
            .ok_or_else(|| ActionError::PaneNotFound(pane.to_string()))?;

        let outcome = ctx.with_layout_mut(|root| remove_at(root, &path))?;
        for removed in &outcome.removed_panes {
            ctx.remove_pane(removed);
        }

        let active = ctx.active_pane();
        if active.map_or(true, |a| outcome.removed_panes.contains(&a)) {
            let next = ctx.with_layout(|root| root.and_then(|r| r.pane_ids().into_iter().next()));
            ctx.set_active_pane(next);
        }
        ctx.host().layout_changed();

        Ok(json!({ "closedPaneId": pane }))
    }
}

/// Move focus to a pane.
pub struct FocusPane;

#[async_trait::async_trait]
impl Action for FocusPane {
    fn name(&self) -> ActionName {
        ActionName::FocusPane
    }

    fn description(&self) -> &'static str {
        "Make a pane the active pane"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane to focus, or \"active\" for a no-op on the current one"
                }
            },
            "required": ["paneId"]
        })
    }

    async fn execute(
        &self,
        _args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let pane = resolved(pane)?;
        if !ctx.pane_in_tree(&pane) {
            return Err(ActionError::PaneNotFound(pane.to_string()));
        }
        ctx.set_active_pane(Some(pane.clone()));
        Ok(json!({ "activePaneId": pane }))
    }
}

/// Split an existing pane in a direction, creating a sibling pane.
pub struct SplitPane;

#[async_trait::async_trait]
impl Action for SplitPane {
    fn name(&self) -> ActionName {
        ActionName::SplitPane
    }

    fn description(&self) -> &'static str {
        "Split a pane horizontally or vertically with a new pane of the given type"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane to split, or \"active\" (default)"
                },
                "direction": {
                    "type": "string",
                    "enum": ["horizontal", "vertical"],
                    "description": "Split axis"
                },
                "type": {
                    "type": "string",
                    "description": "Content type of the new pane"
                }
            },
            "required": ["direction", "type"]
        })
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let direction_str = required_str(args, "direction")?;
        let direction =
            SplitDirection::from_str(direction_str).ok_or_else(|| ActionError::InvalidArgument {
                name: "direction",
                reason: format!("expected horizontal|vertical, got {:?}", direction_str),
            })?;
        let content_type = ContentType::from(required_str(args, "type")?);

        let pane = resolved(pane)?;
        let path = ctx
            .find_pane_path(&pane)
            .ok_or_else(|| ActionError::PaneNotFound(pane.to_string()))?;

        let side = match direction {
            SplitDirection::Horizontal => SplitSide::Right,
            SplitDirection::Vertical => SplitSide::Bottom,
        };
        let new_pane = ctx.host().generate_id();
        let content_id = ctx.host().generate_id().to_string();

        ctx.with_layout_mut(|root| split_at(root, &path, side, new_pane.clone()))?;
        ctx.insert_pane(
            new_pane.clone(),
            PaneState::new(content_type.clone(), content_id.clone()),
        );
        ctx.set_active_pane(Some(new_pane.clone()));
        ctx.host().layout_changed();

        Ok(json!({
            "paneId": new_pane,
            "type": content_type.as_str(),
            "contentId": content_id,
        }))
    }
}

/// Enumerate all panes in tree order. Never fails.
pub struct ListPanes;

#[async_trait::async_trait]
impl Action for ListPanes {
    fn name(&self) -> ActionName {
        ActionName::ListPanes
    }

    fn description(&self) -> &'static str {
        "List all panes in tree order with their types, titles and positions"
    }

    fn parameters(&self) -> Value {
        json!({ "type": "object", "properties": {}, "required": [] })
    }

    async fn execute(
        &self,
        _args: &Value,
        _pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let active = ctx.active_pane();
        // Lock order: layout before registry, matching every other reader.
        let panes = ctx.with_layout(|root| {
            ctx.with_registry(|registry| collect_panes(root, registry, active.as_ref()))
        });
        Ok(json!({ "panes": panes, "count": panes.len() }))
    }
}

/// Toggle distraction-free mode for a pane, when the host supports it.
pub struct ZenMode;

#[async_trait::async_trait]
impl Action for ZenMode {
    fn name(&self) -> ActionName {
        ActionName::ZenMode
    }

    fn description(&self) -> &'static str {
        "Toggle distraction-free (zen) mode for a pane"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane to toggle, or \"active\" (default)"
                }
            },
            "required": []
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::ZenMode)
    }

    async fn execute(
        &self,
        _args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let pane = resolved(pane)?;
        if !ctx.pane_in_tree(&pane) {
            return Err(ActionError::PaneNotFound(pane.to_string()));
        }
        ctx.host().toggle_zen_mode(&pane).await?;
        Ok(json!({ "paneId": pane }))
    }
}
