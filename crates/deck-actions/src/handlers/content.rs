//! Content actions: reading and mutating what a pane holds.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::action::Action;
use crate::args::{optional_str, required_str};
use crate::capability::Capability;
use crate::context::ActionContext;
use crate::error::ActionError;
use crate::handlers::{require_type, resolved, state_of};
use deck_core::{ActionName, ContentType, PaneId};

pub fn actions() -> Vec<Arc<dyn Action>> {
    vec![
        Arc::new(ReadPane),
        Arc::new(WriteFile),
        Arc::new(GetSelection),
        Arc::new(RunTerminal),
    ]
}

/// Chat transcripts are read back windowed: at most this many trailing
/// messages, each capped at `MESSAGE_CHAR_CAP` characters.
const MESSAGE_WINDOW: usize = 50;
const MESSAGE_CHAR_CAP: usize = 1000;

/// Read a pane's content, shaped per content type.
pub struct ReadPane;

#[async_trait::async_trait]
impl Action for ReadPane {
    fn name(&self) -> ActionName {
        ActionName::ReadPane
    }

    fn description(&self) -> &'static str {
        "Read a pane's current content (file text, chat transcript, terminal output, or browser location)"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane to read, or \"active\" (default)"
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

        let body = match &state.content_type {
            ContentType::Editor | ContentType::MarkdownPreview => json!({
                "path": state.content_id,
                "content": state.file_content,
                "modified": state.file_changed.unwrap_or(false),
            }),
            ContentType::Chat => {
                let messages = state.chat_messages.as_deref().unwrap_or(&[]);
                let window: Vec<Value> = messages
                    .iter()
                    .rev()
                    .take(MESSAGE_WINDOW)
                    .rev()
                    .map(|m| {
                        json!({
                            "role": m.role,
                            "content": m.content.chars().take(MESSAGE_CHAR_CAP).collect::<String>(),
                            "timestamp": m.timestamp,
                        })
                    })
                    .collect();
                json!({
                    "messages": window,
                    "messageCount": messages.len(),
                    "selectedNpc": state.selected_npc,
                })
            }
            ContentType::Browser => json!({
                "url": state.browser_url.as_deref().unwrap_or(&state.content_id),
                "title": state.browser_title,
            }),
            ContentType::Terminal => json!({
                "output": state.terminal_output.as_deref().unwrap_or(""),
            }),
            other => json!({
                "contentId": state.content_id,
                "contentType": other.as_str(),
            }),
        };

        let mut out = json!({
            "paneId": pane,
            "contentType": state.content_type.as_str(),
        });
        if let (Some(out_map), Value::Object(body_map)) = (out.as_object_mut(), body) {
            out_map.extend(body_map);
        }
        Ok(out)
    }
}

/// Replace an editor pane's buffered content. No file is touched; the
/// registry buffer changes and the pane is marked modified. Flushing to
/// disk is the host's concern, outside this layer.
pub struct WriteFile;

#[async_trait::async_trait]
impl Action for WriteFile {
    fn name(&self) -> ActionName {
        ActionName::WriteFile
    }

    fn description(&self) -> &'static str {
        "Replace an editor pane's buffer content, optionally retargeting it to a new path"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Editor pane to write into, or \"active\" (default)"
                },
                "content": {
                    "type": "string",
                    "description": "Full replacement buffer content"
                },
                "path": {
                    "type": "string",
                    "description": "Retarget the pane to this path before writing"
                }
            },
            "required": ["content"]
        })
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let content = required_str(args, "content")?.to_string();
        let path = optional_str(args, "path").map(str::to_string);

        let pane = resolved(pane)?;
        let state = state_of(ctx, &pane)?;
        require_type(&state, ContentType::Editor, "editor")?;

        let retargeted = path.as_deref().is_some_and(|p| p != state.content_id);
        let length = content.len();
        ctx.update_pane(&pane, |s| {
            if let Some(path) = &path {
                s.content_id = path.clone();
            }
            s.file_content = Some(content);
            s.file_changed = Some(true);
        });
        // A retarget needs a content reload on the host side; an in-place
        // write already carries the new content.
        ctx.host().pane_updated(&pane, !retargeted);

        let state = state_of(ctx, &pane)?;
        Ok(json!({
            "paneId": pane,
            "path": state.content_id,
            "length": length,
            "modified": true,
        }))
    }
}

/// Report the host-tracked text selection of a pane. Never fails: a
/// missing pane or absent selection both read as null.
pub struct GetSelection;

#[async_trait::async_trait]
impl Action for GetSelection {
    fn name(&self) -> ActionName {
        ActionName::GetSelection
    }

    fn description(&self) -> &'static str {
        "Get the current text selection of a pane, if any"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Pane to inspect, or \"active\" (default)"
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
        let selection = pane
            .as_ref()
            .and_then(|p| ctx.pane_state(p))
            .and_then(|s| s.selection);
        Ok(json!({ "paneId": pane, "selection": selection }))
    }
}

/// Queue a command in a terminal pane.
pub struct RunTerminal;

#[async_trait::async_trait]
impl Action for RunTerminal {
    fn name(&self) -> ActionName {
        ActionName::RunTerminal
    }

    fn description(&self) -> &'static str {
        "Queue a shell command in a terminal pane; output arrives out-of-band"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paneId": {
                    "type": "string",
                    "description": "Terminal pane, or \"active\" (default)"
                },
                "command": {
                    "type": "string",
                    "description": "Command line to queue"
                }
            },
            "required": ["command"]
        })
    }

    fn required_capability(&self) -> Option<Capability> {
        Some(Capability::RunTerminal)
    }

    async fn execute(
        &self,
        args: &Value,
        pane: Option<PaneId>,
        ctx: &ActionContext,
    ) -> Result<Value, ActionError> {
        let command = required_str(args, "command")?;
        let pane = resolved(pane)?;
        let state = state_of(ctx, &pane)?;
        require_type(&state, ContentType::Terminal, "terminal")?;

        ctx.host().run_terminal(&pane, command).await?;
        Ok(json!({ "paneId": pane, "command": command, "queued": true }))
    }
}
