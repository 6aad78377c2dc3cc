//! Split-tree layout and path resolution for the Deck pane workspace.
//!
//! The layout tree arranges panes spatially; this crate owns the tree's
//! shape (`LayoutNode`), pure path resolution over it (`find_path`,
//! `collect_panes`), and the structural mutations (`split_at`, `remove_at`)
//! used when panes open and close. Per-pane state lives in `deck-core`'s
//! `PaneRegistry`, keyed by the `PaneId`s this tree's leaves reference.

pub mod mutate;
pub mod node;
pub mod resolve;

// Re-exports
pub use mutate::{remove_at, split_at, LayoutError, RemoveOutcome};
pub use node::{LayoutNode, NodePath, SplitDirection, SplitSide};
pub use resolve::{collect_panes, find_path, pane_title, PaneSummary};
