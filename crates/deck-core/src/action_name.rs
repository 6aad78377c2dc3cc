//! Action name enumeration and categorization.
//!
//! Every workspace command is addressed by a snake_case wire name. The
//! `ActionName` enum gives those names a typed spelling, preventing typos
//! and enabling exhaustive matching in dispatch code.

use serde::{Deserialize, Serialize};

/// Enumeration of all built-in action names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ActionName {
    // === Pane Operations ===
    /// Open a new pane, splitting the active one
    OpenPane,
    /// Close a pane and its state
    ClosePane,
    /// Move focus to a pane
    FocusPane,
    /// Split an existing pane in a direction
    SplitPane,
    /// Enumerate all panes in tree order
    ListPanes,
    /// Toggle distraction-free mode for a pane
    ZenMode,

    // === Tab Operations ===
    /// Add a tab to a pane
    AddTab,
    /// Close a tab by index
    CloseTab,
    /// Switch the active tab by index
    SwitchTab,
    /// List a pane's tabs
    ListTabs,

    // === Content Operations ===
    /// Read a pane's content, shaped by its type
    ReadPane,
    /// Write content into an editor pane
    WriteFile,
    /// Get the host-tracked text selection
    GetSelection,
    /// Queue a command in a terminal pane
    RunTerminal,

    // === Browser Operations ===
    /// Navigate a browser pane to a URL
    Navigate,
    /// Request history-back navigation
    BrowserBack,
    /// Request history-forward navigation
    BrowserForward,
    /// Read the cached browser URL/title snapshot
    GetBrowserInfo,

    // === UI Operations ===
    /// Show a toast or system notification
    Notify,
    /// Show a blocking confirmation prompt
    Confirm,
    /// Open a native file picker dialog
    OpenFilePicker,
    /// Queue a chat message for sending
    SendMessage,
    /// Switch the selected NPC of a chat pane
    SwitchNpc,
}

impl ActionName {
    /// Get the wire name of the action.
    ///
    /// This returns the exact string callers (including tool-calling
    /// agents) use to request the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Pane
            Self::OpenPane => "open_pane",
            Self::ClosePane => "close_pane",
            Self::FocusPane => "focus_pane",
            Self::SplitPane => "split_pane",
            Self::ListPanes => "list_panes",
            Self::ZenMode => "zen_mode",

            // Tab
            Self::AddTab => "add_tab",
            Self::CloseTab => "close_tab",
            Self::SwitchTab => "switch_tab",
            Self::ListTabs => "list_tabs",

            // Content
            Self::ReadPane => "read_pane",
            Self::WriteFile => "write_file",
            Self::GetSelection => "get_selection",
            Self::RunTerminal => "run_terminal",

            // Browser
            Self::Navigate => "navigate",
            Self::BrowserBack => "browser_back",
            Self::BrowserForward => "browser_forward",
            Self::GetBrowserInfo => "get_browser_info",

            // UI
            Self::Notify => "notify",
            Self::Confirm => "confirm",
            Self::OpenFilePicker => "open_file_picker",
            Self::SendMessage => "send_message",
            Self::SwitchNpc => "switch_npc",
        }
    }

    /// Parse an action name from its wire form.
    ///
    /// Returns `None` for unknown names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            // Pane
            "open_pane" => Some(Self::OpenPane),
            "close_pane" => Some(Self::ClosePane),
            "focus_pane" => Some(Self::FocusPane),
            "split_pane" => Some(Self::SplitPane),
            "list_panes" => Some(Self::ListPanes),
            "zen_mode" => Some(Self::ZenMode),

            // Tab
            "add_tab" => Some(Self::AddTab),
            "close_tab" => Some(Self::CloseTab),
            "switch_tab" => Some(Self::SwitchTab),
            "list_tabs" => Some(Self::ListTabs),

            // Content
            "read_pane" => Some(Self::ReadPane),
            "write_file" => Some(Self::WriteFile),
            "get_selection" => Some(Self::GetSelection),
            "run_terminal" => Some(Self::RunTerminal),

            // Browser
            "navigate" => Some(Self::Navigate),
            "browser_back" => Some(Self::BrowserBack),
            "browser_forward" => Some(Self::BrowserForward),
            "get_browser_info" => Some(Self::GetBrowserInfo),

            // UI
            "notify" => Some(Self::Notify),
            "confirm" => Some(Self::Confirm),
            "open_file_picker" => Some(Self::OpenFilePicker),
            "send_message" => Some(Self::SendMessage),
            "switch_npc" => Some(Self::SwitchNpc),

            _ => None,
        }
    }

    /// Get the semantic category of this action.
    pub fn category(&self) -> ActionCategory {
        match self {
            Self::OpenPane
            | Self::ClosePane
            | Self::FocusPane
            | Self::SplitPane
            | Self::ListPanes
            | Self::ZenMode => ActionCategory::PaneOps,

            Self::AddTab | Self::CloseTab | Self::SwitchTab | Self::ListTabs => {
                ActionCategory::TabOps
            }

            Self::ReadPane | Self::WriteFile | Self::GetSelection | Self::RunTerminal => {
                ActionCategory::ContentOps
            }

            Self::Navigate | Self::BrowserBack | Self::BrowserForward | Self::GetBrowserInfo => {
                ActionCategory::BrowserOps
            }

            Self::Notify
            | Self::Confirm
            | Self::OpenFilePicker
            | Self::SendMessage
            | Self::SwitchNpc => ActionCategory::UiOps,
        }
    }

    /// Check if this action only reads workspace state.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::ListPanes
                | Self::ListTabs
                | Self::ReadPane
                | Self::GetSelection
                | Self::GetBrowserInfo
        )
    }
}

impl std::fmt::Display for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for ActionName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Semantic grouping of actions, one per handler group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    /// Structural pane operations over the layout tree
    PaneOps,
    /// Tab management within a pane
    TabOps,
    /// Reading and writing pane content
    ContentOps,
    /// Browser pane navigation
    BrowserOps,
    /// Host UI surfaces (dialogs, notifications, chat)
    UiOps,
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PaneOps => write!(f, "pane_ops"),
            Self::TabOps => write!(f, "tab_ops"),
            Self::ContentOps => write!(f, "content_ops"),
            Self::BrowserOps => write!(f, "browser_ops"),
            Self::UiOps => write!(f, "ui_ops"),
        }
    }
}
