//! Optional host capabilities.
//!
//! Some actions depend on functionality a host may not provide (a headless
//! embedder has no notification toasts, a minimal host no zen mode). Each
//! such action names one `Capability`; the dispatcher checks it against the
//! host's `CapabilitySet` once, before the handler runs, and returns a
//! uniform "unsupported" error when it is missing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A host-provided function gating availability of certain actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Structural tab creation (`add_tab`)
    AddTab,
    /// Tab removal (`close_tab`)
    CloseTab,
    /// Active-tab selection (`switch_tab`)
    SelectTab,
    /// Distraction-free mode (`zen_mode`)
    ZenMode,
    /// Toast/system notifications (`notify`)
    Notify,
    /// Blocking confirmation dialogs (`confirm`)
    Confirm,
    /// Native file picker dialogs (`open_file_picker`)
    FilePicker,
    /// Terminal command submission (`run_terminal`)
    RunTerminal,
    /// Chat message submission (`send_message`)
    SendMessage,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddTab => "add_tab",
            Self::CloseTab => "close_tab",
            Self::SelectTab => "select_tab",
            Self::ZenMode => "zen_mode",
            Self::Notify => "notify",
            Self::Confirm => "confirm",
            Self::FilePicker => "file_picker",
            Self::RunTerminal => "run_terminal",
            Self::SendMessage => "send_message",
        }
    }

    /// Every capability, for hosts that support the full surface.
    pub fn all() -> [Capability; 9] {
        [
            Self::AddTab,
            Self::CloseTab,
            Self::SelectTab,
            Self::ZenMode,
            Self::Notify,
            Self::Confirm,
            Self::FilePicker,
            Self::RunTerminal,
            Self::SendMessage,
        ]
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of capabilities a host exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    inner: HashSet<Capability>,
}

impl CapabilitySet {
    /// No optional capabilities at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every capability.
    pub fn full() -> Self {
        Capability::all().into_iter().collect()
    }

    pub fn with(mut self, capability: Capability) -> Self {
        self.inner.insert(capability);
        self
    }

    pub fn without(mut self, capability: Capability) -> Self {
        self.inner.remove(&capability);
        self
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.inner.contains(&capability)
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
