//! Foundation types for the Deck pane workspace.
//!
//! This crate provides the data model shared by every other deck crate: pane
//! identity and state, the pane-state side-table, pane references with the
//! `"active"` sentinel, and the typed action-name vocabulary. It has zero
//! internal crate dependencies.
//!
//! ## Architecture Principle
//!
//! deck-core sits at the bottom of the dependency hierarchy:
//! - Layer 1 (Foundation): deck-core ← YOU ARE HERE
//! - Layer 2 (Domain): deck-layout
//! - Layer 3 (Dispatch): deck-actions

pub mod action_name;
pub mod pane;
pub mod pane_ref;
pub mod registry;

// Re-exports
pub use action_name::{ActionCategory, ActionName};
pub use pane::{ChatMessage, ContentType, PaneId, PaneState, Tab};
pub use pane_ref::PaneRef;
pub use registry::PaneRegistry;
