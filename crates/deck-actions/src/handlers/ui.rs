//! UI and chat actions: dialogs, toasts, and chat pane control.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::action::Action;
use crate::args::{optional_bool, optional_str, optional_u64, required_str};
use crate::capability::Capability;
use crate::context::ActionContext;
use crate::error::ActionError;
use crate::handlers::{require_type, resolved, state_of};
use crate::host::{NotifyLevel, PickerKind};
use deck_core::{ActionName, ContentType, PaneId};

pub fn actions() -> Vec<Arc<dyn Action>> {
    vec![
        Arc::new(Notify),
        Arc::new(Confirm),
        Arc::new(OpenFilePicker),
        Arc::new(SendMessage),
        Arc::new(SwitchNpc),
    ]
}

/// Show a toast notification.
pub struct Notify;

#[async_trait::async_trait]
impl Action for Notify {
    fn name(&self) -> ActionName {
        ActionName::Notify
    }

    fn description(&self) -> &'static str {
        "Show a toast notification"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Notification text"
                },
                "type": {
                    "type": "string",
                    "enum": ["info", "success", "warning", "error"],
                    "description": "Severity (default: info)"
                },
                "duration": {
                    "type": "integer",
                    "description": "How long the toast stays visible, in milliseconds"
                }
            },
            "required": ["message"]
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::Notify)
    }

    async fn execute(
        &self,
        args: &Value,
        _pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let message = required_str(args, "message")?;
        let level = match optional_str(args, "type") {
            None => NotifyLevel::Info,
            Some(s) => NotifyLevel::from_str(s).ok_or_else(|| ActionError::InvalidArgument {
                name: "type",
                reason: format!("expected info|success|warning|error, got {:?}", s),
            })?,
        };
        let duration = optional_u64(args, "duration");

        ctx.host().notify(message, level, duration).await?;
        Ok(json!({
            "message": message,
            "type": level.as_str(),
            "duration": duration,
        }))
    }
}

/// Show a blocking confirmation dialog and report the user's choice.
pub struct Confirm;

#[async_trait::async_trait]
impl Action for Confirm {
    fn name(&self) -> ActionName {
        ActionName::Confirm
    }

    fn description(&self) -> &'static str {
        "Ask the user a yes/no question in a blocking dialog"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Question to ask"
                },
                "title": {
                    "type": "string",
                    "description": "Dialog title (default: Confirm)"
                }
            },
            "required": ["message"]
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::Confirm)
    }

    async fn execute(
        &self,
        args: &Value,
        _pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let message = required_str(args, "message")?;
        let title = optional_str(args, "title").unwrap_or("Confirm");

        let confirmed = ctx.host().confirm(message, title).await?;
        Ok(json!({ "confirmed": confirmed }))
    }
}

/// Open a native file or directory picker.
pub struct OpenFilePicker;

#[async_trait::async_trait]
impl Action for OpenFilePicker {
    fn name(&self) -> ActionName {
        ActionName::OpenFilePicker
    }

    fn description(&self) -> &'static str {
        "Open a native file picker and return the chosen paths"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "type": {
                    "type": "string",
                    "enum": ["file", "directory"],
                    "description": "What to pick (default: file)"
                },
                "multiple": {
                    "type": "boolean",
                    "description": "Allow selecting more than one entry"
                }
            },
            "required": []
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::FilePicker)
    }

    async fn execute(
        &self,
        args: &Value,
        _pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let kind = match optional_str(args, "type") {
            None => PickerKind::File,
            Some(s) => PickerKind::from_str(s).ok_or_else(|| ActionError::InvalidArgument {
                name: "type",
                reason: format!("expected file|directory, got {:?}", s),
            })?,
        };
        let multiple = optional_bool(args, "multiple").unwrap_or(false);

        match ctx.host().pick_files(kind, multiple).await? {
            Some(paths) => Ok(json!({ "canceled": false, "paths": paths })),
            None => Ok(json!({ "canceled": true, "paths": [] })),
        }
    }
}

/// Queue a message for sending from a chat pane.
pub struct SendMessage;

#[async_trait::async_trait]
impl Action for SendMessage {
    fn name(&self) -> ActionName {
        ActionName::SendMessage
    }

    fn description(&self) -> &'static str {
        "Queue a chat message for sending from a chat pane"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Chat pane, or \"active\" (default)"
                },
                "message": {
                    "type": "string",
                    "description": "Message text"
                }
            },
            "required": ["message"]
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::SendMessage)
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let message = required_str(args, "message")?;
        let pane = resolved(pane)?;
        let state = state_of(ctx, &pane)?;
        require_type(&state, ContentType::Chat, "chat")?;

        ctx.host().send_chat_message(&pane, message).await?;
        Ok(json!({ "paneId": pane, "queued": true }))
    }
}

/// Select which assistant persona a chat pane talks to.
pub struct SwitchNpc;

#[async_trait::async_trait]
impl Action for SwitchNpc {
    fn name(&self) -> ActionName {
        ActionName::SwitchNpc
    }

    fn description(&self) -> &'static str {
        "Switch the assistant persona of a chat pane"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Chat pane, or \"active\" (default)"
                },
                "npcName": {
                    "type": "string",
                    "description": "Persona name"
                }
            },
            "required": ["npcName"]
        })
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let npc = required_str(args, "npcName")?.to_string();
        let pane = resolved(pane)?;
        let state = state_of(ctx, &pane)?;
        require_type(&state, ContentType::Chat, "chat")?;

        ctx.update_pane(&pane, |s| s.selected_npc = Some(npc.clone()));
        // Metadata only; no content reload needed.
        ctx.host().pane_updated(&pane, true);

        Ok(json!({ "paneId": pane, "npcName": npc }))
    }
}
