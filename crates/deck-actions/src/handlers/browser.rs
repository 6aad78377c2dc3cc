//! Browser actions.
//!
//! The webview itself is host-owned; this layer holds only the cached
//! location and title that the host last reported into the registry.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::action::Action;
use crate::args::required_str;
use crate::context::ActionContext;
use crate::error::ActionError;
use crate::handlers::{require_type, resolved, state_of};
use crate::host::HistoryDirection;
use deck_core::{ActionName, ContentType, PaneId};

pub fn actions() -> Vec<Arc<dyn Action>> {
    vec![
        Arc::new(Navigate),
        Arc::new(BrowserBack),
        Arc::new(BrowserForward),
        Arc::new(GetBrowserInfo),
    ]
}

/// Point a browser pane at a URL.
pub struct Navigate;

#[async_trait::async_trait]
impl Action for Navigate {
    fn name(&self) -> ActionName {
        ActionName::Navigate
    }

    fn description(&self) -> &'static str {
        "Navigate a browser pane to a URL"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Browser pane, or \"active\" (default)"
                },
                "url": {
                    "type": "string",
                    "description": "Destination URL"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let url = required_str(args, "url")?.to_string();
        let pane = resolved(pane)?;
        let state = state_of(ctx, &pane)?;
        require_type(&state, ContentType::Browser, "browser")?;

        ctx.update_pane(&pane, |s| {
            s.content_id = url.clone();
            s.browser_url = Some(url.clone());
            // The cached title belongs to the previous page.
            s.browser_title = None;
        });
        ctx.host().pane_updated(&pane, false);

        Ok(json!({ "paneId": pane, "url": url }))
    }
}

async fn navigate_history(
    pane: Option<PaneId>,
    ctx: &ActionContext,
    direction: HistoryDirection,
) -> Result<Value, ActionError> {
    let pane = resolved(pane)?;
    let state = state_of(ctx, &pane)?;
    require_type(&state, ContentType::Browser, "browser")?;

    ctx.host().navigate_history(&pane, direction).await?;
    Ok(json!({
        "paneId": pane,
        "direction": direction.as_str(),
        "requested": true,
    }))
}

/// Request back navigation in a browser pane's history.
pub struct BrowserBack;

#[async_trait::async_trait]
impl Action for BrowserBack {
    fn name(&self) -> ActionName {
        ActionName::BrowserBack
    }

    fn description(&self) -> &'static str {
        "Go back in a browser pane's history"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Browser pane, or \"active\" (default)"
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
        navigate_history(pane, ctx, HistoryDirection::Back).await
    }
}

/// Request forward navigation in a browser pane's history.
pub struct BrowserForward;

#[async_trait::async_trait]
impl Action for BrowserForward {
    fn name(&self) -> ActionName {
        ActionName::BrowserForward
    }

    fn description(&self) -> &'static str {
        "Go forward in a browser pane's history"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Browser pane, or \"active\" (default)"
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
        navigate_history(pane, ctx, HistoryDirection::Forward).await
    }
}

/// Read the cached location of a browser pane.
pub struct GetBrowserInfo;

#[async_trait::async_trait]
impl Action for GetBrowserInfo {
    fn name(&self) -> ActionName {
        ActionName::GetBrowserInfo
    }

    fn description(&self) -> &'static str {
        "Get a browser pane's last-reported URL and page title"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Browser pane, or \"active\" (default)"
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
        require_type(&state, ContentType::Browser, "browser")?;

        // Snapshot of what the host last reported; the live webview may be
        // ahead of it after in-page navigation.
        Ok(json!({
            "paneId": pane,
            "url": state.browser_url.as_deref().unwrap_or(&state.content_id),
            "title": state.browser_title,
        }))
    }
}
