//! The bound context handed to every action.
//!
//! The tree, registry, and active-pane pointer are owned by the host and
//! shared by reference on every call; handlers never touch global state.
//! All accessors take closures so no lock guard can be held across an
//! await point.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::host::Host;
use deck_core::{PaneId, PaneRegistry, PaneState};
use deck_layout::{find_path, LayoutNode, NodePath};

/// Shared workspace state plus the host, bound to one dispatch call.
#[derive(Clone)]
pub struct ActionContext {
    layout: Arc<RwLock<Option<LayoutNode>>>,
    registry: Arc<RwLock<PaneRegistry>>,
    active_pane: Arc<RwLock<Option<PaneId>>>,
    host: Arc<dyn Host>,
}

impl ActionContext {
    pub fn new(
        layout: Arc<RwLock<Option<LayoutNode>>>,
        registry: Arc<RwLock<PaneRegistry>>,
        active_pane: Arc<RwLock<Option<PaneId>>>,
        host: Arc<dyn Host>,
    ) -> Self {
        Self {
            layout,
            registry,
            active_pane,
            host,
        }
    }

    pub fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    // === Active pane ===

    pub fn active_pane(&self) -> Option<PaneId> {
        self.active_pane.read().clone()
    }

    pub fn set_active_pane(&self, pane: Option<PaneId>) {
        *self.active_pane.write() = pane;
    }

    // === Layout tree ===

    /// Read the tree under the lock.
    pub fn with_layout<R>(&self, f: impl FnOnce(Option<&LayoutNode>) -> R) -> R {
        f(self.layout.read().as_ref())
    }

    /// Mutate the tree under the lock.
    pub fn with_layout_mut<R>(&self, f: impl FnOnce(&mut Option<LayoutNode>) -> R) -> R {
        f(&mut self.layout.write())
    }

    /// Resolve a pane's current position. The result is valid only until
    /// the next structural mutation.
    pub fn find_pane_path(&self, pane: &PaneId) -> Option<NodePath> {
        self.layout.read().as_ref().and_then(|root| find_path(root, pane))
    }

    /// Whether the pane has a leaf in the current tree.
    pub fn pane_in_tree(&self, pane: &PaneId) -> bool {
        self.find_pane_path(pane).is_some()
    }

    // === Pane registry ===

    /// Clone a pane's state out of the registry.
    pub fn pane_state(&self, pane: &PaneId) -> Option<PaneState> {
        self.registry.read().get_cloned(pane)
    }

    pub fn insert_pane(&self, pane: PaneId, state: PaneState) {
        self.registry.write().insert(pane, state);
    }

    pub fn remove_pane(&self, pane: &PaneId) -> Option<PaneState> {
        self.registry.write().remove(pane)
    }

    /// Copy-then-replace update of one pane's state. Returns false when
    /// the pane is unknown.
    pub fn update_pane(&self, pane: &PaneId, edit: impl FnOnce(&mut PaneState)) -> bool {
        self.registry.write().update(pane, edit)
    }

    /// Read the whole registry under the lock.
    pub fn with_registry<R>(&self, f: impl FnOnce(&PaneRegistry) -> R) -> R {
        f(&self.registry.read())
    }
}
