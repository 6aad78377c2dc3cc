//! Tab actions.
//!
//! Tabs are an optional nesting inside a pane's registry state. A pane
//! that never had tabs behaves as if it held a single synthetic tab for
//! its own content; the first real `add_tab` materializes that synthetic
//! tab before appending.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::action::Action;
use crate::args::{optional_str, required_index, required_str};
use crate::capability::Capability;
use crate::context::ActionContext;
use crate::error::ActionError;
use crate::handlers::{resolved, state_of};
use deck_core::{ActionName, ContentType, PaneId, PaneState, Tab};
use deck_layout::pane_title;

pub fn actions() -> Vec<Arc<dyn Action>> {
    vec![
        Arc::new(AddTab),
        Arc::new(CloseTab),
        Arc::new(SwitchTab),
        Arc::new(ListTabs),
    ]
}

/// Effective tab count of a pane: the real list's length, or 1 for the
/// synthetic single tab a tabless pane presents.
fn effective_tab_count(state: &PaneState) -> usize {
    state.tabs.as_ref().map_or(1, |tabs| tabs.len())
}

fn check_index(state: &PaneState, index: usize) -> Result<(), ActionError> {
    let len = effective_tab_count(state);
    if index >= len {
        return Err(ActionError::TabOutOfRange { index, len });
    }
    Ok(())
}

/// The single synthetic tab a tabless pane presents for its own content.
fn synthetic_tab(state: &PaneState) -> Tab {
    Tab {
        content_type: state.content_type.clone(),
        content_id: state.content_id.clone(),
        title: pane_title(state),
    }
}

/// Append a tab to a pane.
pub struct AddTab;

#[async_trait::async_trait]
impl Action for AddTab {
    fn name(&self) -> ActionName {
        ActionName::AddTab
    }

    fn description(&self) -> &'static str {
        "Add a tab to a pane"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane to add the tab to, or \"active\" (default)"
                },
                "type": {
                    "type": "string",
                    "description": "Content type of the new tab"
                },
                "path": {
                    "type": "string",
                    "description": "File path or URL the tab points at"
                },
                "title": {
                    "type": "string",
                    "description": "Tab title (defaults to the path's last segment)"
                }
            },
            "required": ["type"]
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::AddTab)
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let content_type = ContentType::from(required_str(args, "type")?);
        let path = optional_str(args, "path").map(str::to_string);
        let title = optional_str(args, "title")
            .map(str::to_string)
            .or_else(|| {
                path.as_deref()
                    .and_then(|p| p.rsplit(['/', '\\']).find(|s| !s.is_empty()))
                    .map(str::to_string)
            })
            .unwrap_or_else(|| content_type.as_str().to_string());

        let pane = resolved(pane)?;
        state_of(ctx, &pane)?;

        ctx.host().add_tab(&pane, content_type, &title).await?;

        // The host appended exactly one tab; patch its content id in. If
        // the host batches or reorders appends this lands on whichever tab
        // is last at patch time.
        let mut tab_index = 0;
        let mut tab_count = 0;
        ctx.update_pane(&pane, |state| {
            if let Some(tabs) = state.tabs.as_mut() {
                if let Some(last) = tabs.last_mut() {
                    if let Some(path) = &path {
                        last.content_id = path.clone();
                    }
                }
                tab_count = tabs.len();
                tab_index = tab_count.saturating_sub(1);
            }
        });

        Ok(json!({
            "paneId": pane,
            "tabIndex": tab_index,
            "tabCount": tab_count,
        }))
    }
}

/// Close a tab by index.
pub struct CloseTab;

#[async_trait::async_trait]
impl Action for CloseTab {
    fn name(&self) -> ActionName {
        ActionName::CloseTab
    }

    fn description(&self) -> &'static str {
        "Close a tab of a pane by index"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane owning the tab, or \"active\" (default)"
                },
                "tabIndex": {
                    "type": "integer",
                    "description": "Zero-based tab index"
                }
            },
            "required": ["tabIndex"]
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::CloseTab)
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let index = required_index(args, "tabIndex")?;
        let pane = resolved(pane)?;
        let state = state_of(ctx, &pane)?;
        check_index(&state, index)?;

        ctx.host().close_tab(&pane, index).await?;
        Ok(json!({ "paneId": pane, "closedIndex": index }))
    }
}

/// Make a tab the pane's active tab.
pub struct SwitchTab;

#[async_trait::async_trait]
impl Action for SwitchTab {
    fn name(&self) -> ActionName {
        ActionName::SwitchTab
    }

    fn description(&self) -> &'static str {
        "Switch a pane's active tab by index"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane owning the tab, or \"active\" (default)"
                },
                "tabIndex": {
                    "type": "integer",
                    "description": "Zero-based tab index"
                }
            },
            "required": ["tabIndex"]
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::SelectTab)
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let index = required_index(args, "tabIndex")?;
        let pane = resolved(pane)?;
        let state = state_of(ctx, &pane)?;
        check_index(&state, index)?;

        ctx.host().select_tab(&pane, index).await?;
        Ok(json!({ "paneId": pane, "activeIndex": index }))
    }
}

/// Enumerate a pane's tabs. Never fails once the pane exists.
pub struct ListTabs;

#[async_trait::async_trait]
impl Action for ListTabs {
    fn name(&self) -> ActionName {
        ActionName::ListTabs
    }

    fn description(&self) -> &'static str {
        "List a pane's tabs with the active index"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane to list, or \"active\" (default)"
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
        let state = state_of(ctx, &pane)?;

        let (tabs, active_index) = match &state.tabs {
            Some(tabs) => (tabs.clone(), state.active_tab_index.unwrap_or(0)),
            None => (vec![synthetic_tab(&state)], 0),
        };

        let entries: Vec<Value> = tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                json!({
                    "index": i,
                    "contentType": tab.content_type.as_str(),
                    "contentId": tab.content_id,
                    "title": tab.title,
                    "isActive": i == active_index,
                })
            })
            .collect();

        Ok(json!({
            "paneId": pane,
            "tabs": entries,
            "activeIndex": active_index,
            "count": entries.len(),
        }))
    }
}
