//! The host contract.
//!
//! The core mutates the tree and registry itself; everything that touches a
//! real surface (dialogs, toasts, webviews, terminals, the renderer) goes
//! through this trait. Every method here signals *intent accepted*, not
//! *operation completed*: a successful return means the host took the
//! request, and whether the effect lands is outside this layer's view.

use anyhow::Result;

use crate::capability::CapabilitySet;
use deck_core::{ContentType, PaneId};

/// Severity of a `notify` toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotifyLevel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// What a file picker dialog selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerKind {
    #[default]
    File,
    Directory,
}

impl PickerKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "file" => Some(Self::File),
            "directory" => Some(Self::Directory),
            _ => None,
        }
    }
}

/// Browser history navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Back,
    Forward,
}

impl HistoryDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Forward => "forward",
        }
    }
}

/// Capabilities and outward effects a host supplies to the action layer.
///
/// Methods mapping to an optional capability are only invoked after the
/// dispatcher has verified the capability is present, so a host may
/// implement the unsupported ones as unreachable stubs.
#[async_trait::async_trait]
pub trait Host: Send + Sync {
    /// The optional capabilities this host exposes.
    fn capabilities(&self) -> CapabilitySet;

    /// Mint a fresh process-unique id.
    fn generate_id(&self) -> PaneId {
        PaneId::generate()
    }

    /// The layout tree's shape changed (pane opened, closed, or split);
    /// the host should re-render.
    fn layout_changed(&self);

    /// A pane was retargeted or its content replaced; the host should
    /// re-render that pane. `skip_reload` suppresses a full content
    /// reload when only metadata changed.
    fn pane_updated(&self, pane: &PaneId, skip_reload: bool);

    /// Show a toast or system notification.
    async fn notify(&self, message: &str, level: NotifyLevel, duration_ms: Option<u64>)
        -> Result<()>;

    /// Show a blocking confirmation prompt; true means confirmed.
    async fn confirm(&self, message: &str, title: &str) -> Result<bool>;

    /// Open a native picker dialog. `None` means the user cancelled.
    async fn pick_files(&self, kind: PickerKind, multiple: bool) -> Result<Option<Vec<String>>>;

    /// Toggle distraction-free mode for a pane.
    async fn toggle_zen_mode(&self, pane: &PaneId) -> Result<()>;

    /// Structurally append one tab to a pane. The action layer patches the
    /// new tab's `content_id` afterwards, assuming this call appended
    /// exactly one tab before returning.
    async fn add_tab(&self, pane: &PaneId, content_type: ContentType, title: &str) -> Result<()>;

    /// Remove the tab at `index` from a pane. The index has already been
    /// validated against the registry's tab list.
    async fn close_tab(&self, pane: &PaneId, index: usize) -> Result<()>;

    /// Make the tab at `index` the pane's active tab.
    async fn select_tab(&self, pane: &PaneId, index: usize) -> Result<()>;

    /// Queue a command in a terminal pane. Output arrives out-of-band.
    async fn run_terminal(&self, pane: &PaneId, command: &str) -> Result<()>;

    /// Queue a chat message for sending.
    async fn send_chat_message(&self, pane: &PaneId, message: &str) -> Result<()>;

    /// Request history navigation in a browser pane's webview. The real
    /// navigation happens in the host-owned webview; this only requests it.
    async fn navigate_history(&self, pane: &PaneId, direction: HistoryDirection) -> Result<()>;
}
