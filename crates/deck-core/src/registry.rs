//! The pane-state side-table.
//!
//! `PaneRegistry` maps `PaneId` to `PaneState`, decoupled from the layout
//! tree's shape. The registry is owned by the host and shared by reference;
//! action handlers only ever read it or replace whole entries.
//!
//! ## Mutation contract
//!
//! All mutation is copy-then-replace: `update` clones the current entry,
//! applies the edit to the clone, and swaps it in. No caller ever holds a
//! mutable alias into a stored `PaneState`, so a failed action leaves the
//! table exactly as it was.

use std::collections::HashMap;

use crate::pane::{PaneId, PaneState};

#[derive(Debug, Clone, Default)]
pub struct PaneRegistry {
    panes: HashMap<PaneId, PaneState>,
}

impl PaneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the state for a pane.
    pub fn insert(&mut self, id: PaneId, state: PaneState) {
        self.panes.insert(id, state);
    }

    /// Look up a pane by exact id. `PaneRef` resolution must already have
    /// happened in the caller.
    pub fn get(&self, id: &PaneId) -> Option<&PaneState> {
        self.panes.get(id)
    }

    /// Clone the state for a pane, if present.
    pub fn get_cloned(&self, id: &PaneId) -> Option<PaneState> {
        self.panes.get(id).cloned()
    }

    /// Remove a pane's state, returning it if present.
    pub fn remove(&mut self, id: &PaneId) -> Option<PaneState> {
        self.panes.remove(id)
    }

    pub fn contains(&self, id: &PaneId) -> bool {
        self.panes.contains_key(id)
    }

    /// Copy-then-replace update. Returns false (and changes nothing) when
    /// the pane is unknown.
    pub fn update(&mut self, id: &PaneId, edit: impl FnOnce(&mut PaneState)) -> bool {
        let Some(current) = self.panes.get(id) else {
            return false;
        };
        let mut next = current.clone();
        edit(&mut next);
        self.panes.insert(id.clone(), next);
        true
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Iterate over all entries in arbitrary order. Spatial ordering comes
    /// from the layout tree, never from this table.
    pub fn iter(&self) -> impl Iterator<Item = (&PaneId, &PaneState)> {
        self.panes.iter()
    }
}
