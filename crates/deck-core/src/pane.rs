//! Pane identity and state types.
//!
//! A pane is one rectangular region of the workspace hosting a single content
//! type. Its spatial position lives in the layout tree (`deck-layout`); the
//! heterogeneous per-pane state defined here lives in the `PaneRegistry`
//! side-table, keyed by `PaneId`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Opaque, process-unique identifier for one pane.
///
/// A `PaneId` names exactly one `PaneRegistry` entry and at most one
/// `Content` leaf of the layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "generated/")]
pub struct PaneId(String);

impl PaneId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PaneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PaneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for PaneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of content a pane hosts.
///
/// The set is open: the workspace routes unrecognized types through
/// `Other`, so third-party panels round-trip without a schema change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Editor,
    Chat,
    Terminal,
    Browser,
    MarkdownPreview,
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Editor => "editor",
            Self::Chat => "chat",
            Self::Terminal => "terminal",
            Self::Browser => "browser",
            Self::MarkdownPreview => "markdown-preview",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "editor" => Self::Editor,
            "chat" => Self::Chat,
            "terminal" => Self::Terminal,
            "browser" => Self::Browser,
            "markdown-preview" => Self::MarkdownPreview,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ContentType> for String {
    fn from(t: ContentType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One message of a chat pane's transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "generated/")]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    /// Opaque timestamp as supplied by the frontend (ISO string or epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// One tab inside a pane.
///
/// A pane may hold zero or more tabs; a pane with no `tabs` array is its
/// own sole implicit tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "generated/")]
pub struct Tab {
    #[ts(as = "String")]
    pub content_type: ContentType,
    pub content_id: String,
    pub title: String,
}

/// Heterogeneous per-pane state.
///
/// Only `content_type` and `content_id` are always present; the remaining
/// fields are populated per content type. All field names cross the wire in
/// camelCase because the payload is shared with a TypeScript frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "generated/")]
pub struct PaneState {
    #[ts(as = "String")]
    pub content_type: ContentType,
    /// What the pane points at: a file path for editors, a URL for
    /// browsers, or an opaque generated id.
    pub content_id: String,

    // Editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_changed: Option<bool>,

    // Chat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_messages: Option<Vec<ChatMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_npc: Option<String>,

    // Browser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_title: Option<String>,

    // Terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_output: Option<String>,

    // Host-tracked text selection, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,

    // Tabs (absent means the pane itself is the sole implicit tab)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<Tab>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_index: Option<usize>,
}

impl PaneState {
    /// Create a minimal state for a freshly opened pane.
    pub fn new(content_type: ContentType, content_id: impl Into<String>) -> Self {
        Self {
            content_type,
            content_id: content_id.into(),
            file_content: None,
            file_changed: None,
            chat_messages: None,
            selected_npc: None,
            browser_url: None,
            browser_title: None,
            terminal_output: None,
            selection: None,
            tabs: None,
            active_tab_index: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_id_display_roundtrip() {
        let id = PaneId::new("p1");
        assert_eq!(id.as_str(), "p1");
        assert_eq!(format!("{}", id), "p1");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(PaneId::generate(), PaneId::generate());
    }

    #[test]
    fn test_content_type_known_values() {
        assert_eq!(ContentType::from("editor"), ContentType::Editor);
        assert_eq!(
            ContentType::from("markdown-preview"),
            ContentType::MarkdownPreview
        );
        assert_eq!(ContentType::Chat.as_str(), "chat");
    }

    #[test]
    fn test_content_type_open_set() {
        let t = ContentType::from("python-env");
        assert_eq!(t, ContentType::Other("python-env".to_string()));
        assert_eq!(t.as_str(), "python-env");

        // Unknown types round-trip through serde unchanged
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"python-env\"");
        let back: ContentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_pane_state_serializes_camel_case() {
        let mut state = PaneState::new(ContentType::Editor, "/a/b.rs");
        state.file_content = Some("fn main() {}".to_string());
        state.file_changed = Some(false);

        let v = serde_json::to_value(&state).unwrap();
        assert_eq!(v["contentType"], "editor");
        assert_eq!(v["contentId"], "/a/b.rs");
        assert_eq!(v["fileContent"], "fn main() {}");
        // Absent optionals are omitted, not null
        assert!(v.get("browserUrl").is_none());
        assert!(v.get("tabs").is_none());
    }

    #[test]
    fn test_pane_state_deserializes_partial_object() {
        let state: PaneState =
            serde_json::from_str(r#"{"contentType":"chat","contentId":""}"#).unwrap();
        assert_eq!(state.content_type, ContentType::Chat);
        assert!(state.chat_messages.is_none());
    }
}
