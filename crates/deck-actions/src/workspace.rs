//! In-process reference host.
//!
//! `WorkspaceHost` owns the shared workspace state (tree, registry, active
//! pane) and implements every `Host` capability against it, recording every
//! outward effect so callers can assert the intent-accepted contract.
//! It backs the integration tests and headless embedders; a desktop shell
//! replaces it with a host bridging to its real UI.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::{Mutex, RwLock};

use crate::capability::CapabilitySet;
use crate::context::ActionContext;
use crate::host::{HistoryDirection, Host, NotifyLevel, PickerKind};
use deck_core::{ContentType, PaneId, PaneRegistry, PaneState, Tab};
use deck_layout::{pane_title, LayoutNode};

/// One recorded outward effect.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    LayoutChanged,
    PaneUpdated {
        pane: PaneId,
        skip_reload: bool,
    },
    Notified {
        message: String,
        level: NotifyLevel,
        duration_ms: Option<u64>,
    },
    Confirmed {
        message: String,
        title: String,
    },
    FilePickerOpened {
        kind: PickerKind,
        multiple: bool,
    },
    ZenToggled {
        pane: PaneId,
    },
    TabAdded {
        pane: PaneId,
    },
    TabClosed {
        pane: PaneId,
        index: usize,
    },
    TabSelected {
        pane: PaneId,
        index: usize,
    },
    TerminalCommand {
        pane: PaneId,
        command: String,
    },
    ChatMessageQueued {
        pane: PaneId,
        message: String,
    },
    HistoryNavigated {
        pane: PaneId,
        direction: HistoryDirection,
    },
}

pub struct WorkspaceHost {
    layout: Arc<RwLock<Option<LayoutNode>>>,
    registry: Arc<RwLock<PaneRegistry>>,
    active_pane: Arc<RwLock<Option<PaneId>>>,
    capabilities: CapabilitySet,
    events: Mutex<Vec<HostEvent>>,
    confirm_response: Mutex<bool>,
    picker_response: Mutex<Option<Vec<String>>>,
}

impl WorkspaceHost {
    /// A host exposing every capability.
    pub fn new() -> Arc<Self> {
        Self::with_capabilities(CapabilitySet::full())
    }

    /// A host exposing only the given capabilities.
    pub fn with_capabilities(capabilities: CapabilitySet) -> Arc<Self> {
        Arc::new(Self {
            layout: Arc::new(RwLock::new(None)),
            registry: Arc::new(RwLock::new(PaneRegistry::new())),
            active_pane: Arc::new(RwLock::new(None)),
            capabilities,
            events: Mutex::new(Vec::new()),
            confirm_response: Mutex::new(true),
            picker_response: Mutex::new(None),
        })
    }

    /// Build an action context sharing this host's state.
    pub fn context(self: &Arc<Self>) -> ActionContext {
        ActionContext::new(
            Arc::clone(&self.layout),
            Arc::clone(&self.registry),
            Arc::clone(&self.active_pane),
            Arc::clone(self) as Arc<dyn Host>,
        )
    }

    // === Direct state access, for embedders and test setup ===

    pub fn set_layout(&self, root: Option<LayoutNode>) {
        *self.layout.write() = root;
    }

    pub fn layout(&self) -> Option<LayoutNode> {
        self.layout.read().clone()
    }

    pub fn insert_pane(&self, pane: PaneId, state: PaneState) {
        self.registry.write().insert(pane, state);
    }

    pub fn pane_state(&self, pane: &PaneId) -> Option<PaneState> {
        self.registry.read().get_cloned(pane)
    }

    pub fn set_active_pane(&self, pane: Option<PaneId>) {
        *self.active_pane.write() = pane;
    }

    pub fn active_pane(&self) -> Option<PaneId> {
        self.active_pane.read().clone()
    }

    /// Every outward effect recorded so far, in order.
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }

    /// Script the answer the next `confirm` dialogs return.
    pub fn set_confirm_response(&self, confirmed: bool) {
        *self.confirm_response.lock() = confirmed;
    }

    /// Script the next file picker result; `None` means the user cancels.
    pub fn set_picker_response(&self, paths: Option<Vec<String>>) {
        *self.picker_response.lock() = paths;
    }

    fn record(&self, event: HostEvent) {
        self.events.lock().push(event);
    }
}

#[async_trait::async_trait]
impl Host for WorkspaceHost {
    fn capabilities(&self) -> CapabilitySet {
        self.capabilities.clone()
    }

    fn layout_changed(&self) {
        self.record(HostEvent::LayoutChanged);
    }

    fn pane_updated(&self, pane: &PaneId, skip_reload: bool) {
        self.record(HostEvent::PaneUpdated {
            pane: pane.clone(),
            skip_reload,
        });
    }

    async fn notify(
        &self,
        message: &str,
        level: NotifyLevel,
        duration_ms: Option<u64>,
    ) -> Result<()> {
        self.record(HostEvent::Notified {
            message: message.to_string(),
            level,
            duration_ms,
        });
        Ok(())
    }

    async fn confirm(&self, message: &str, title: &str) -> Result<bool> {
        self.record(HostEvent::Confirmed {
            message: message.to_string(),
            title: title.to_string(),
        });
        Ok(*self.confirm_response.lock())
    }

    async fn pick_files(&self, kind: PickerKind, multiple: bool) -> Result<Option<Vec<String>>> {
        self.record(HostEvent::FilePickerOpened { kind, multiple });
        Ok(self.picker_response.lock().clone())
    }

    async fn toggle_zen_mode(&self, pane: &PaneId) -> Result<()> {
        self.record(HostEvent::ZenToggled { pane: pane.clone() });
        Ok(())
    }

    async fn add_tab(&self, pane: &PaneId, content_type: ContentType, title: &str) -> Result<()> {
        let title = title.to_string();
        let updated = self.registry.write().update(pane, |state| {
            if state.tabs.is_none() {
                // The pane was its own implicit tab; materialize it first
                // so the existing content keeps a tab of its own.
                let implicit = Tab {
                    content_type: state.content_type.clone(),
                    content_id: state.content_id.clone(),
                    title: pane_title(state),
                };
                state.tabs = Some(vec![implicit]);
            }
            if let Some(tabs) = &mut state.tabs {
                tabs.push(Tab {
                    content_type,
                    content_id: String::new(),
                    title,
                });
                state.active_tab_index = Some(tabs.len() - 1);
            }
        });
        if !updated {
            anyhow::bail!("unknown pane: {}", pane);
        }
        self.record(HostEvent::TabAdded { pane: pane.clone() });
        Ok(())
    }

    async fn close_tab(&self, pane: &PaneId, index: usize) -> Result<()> {
        let updated = self.registry.write().update(pane, |state| {
            if let Some(tabs) = &mut state.tabs {
                if index < tabs.len() {
                    tabs.remove(index);
                    if let Some(active) = state.active_tab_index {
                        if active >= tabs.len() && !tabs.is_empty() {
                            state.active_tab_index = Some(tabs.len() - 1);
                        }
                    }
                }
            }
        });
        if !updated {
            anyhow::bail!("unknown pane: {}", pane);
        }
        self.record(HostEvent::TabClosed {
            pane: pane.clone(),
            index,
        });
        Ok(())
    }

    async fn select_tab(&self, pane: &PaneId, index: usize) -> Result<()> {
        let updated = self.registry.write().update(pane, |state| {
            state.active_tab_index = Some(index);
        });
        if !updated {
            anyhow::bail!("unknown pane: {}", pane);
        }
        self.record(HostEvent::TabSelected {
            pane: pane.clone(),
            index,
        });
        Ok(())
    }

    async fn run_terminal(&self, pane: &PaneId, command: &str) -> Result<()> {
        self.record(HostEvent::TerminalCommand {
            pane: pane.clone(),
            command: command.to_string(),
        });
        Ok(())
    }

    async fn send_chat_message(&self, pane: &PaneId, message: &str) -> Result<()> {
        self.record(HostEvent::ChatMessageQueued {
            pane: pane.clone(),
            message: message.to_string(),
        });
        Ok(())
    }

    async fn navigate_history(&self, pane: &PaneId, direction: HistoryDirection) -> Result<()> {
        self.record(HostEvent::HistoryNavigated {
            pane: pane.clone(),
            direction,
        });
        Ok(())
    }
}
