//! Structural tree mutations: split and remove.
//!
//! Every mutation here changes the shape of the tree, and therefore
//! invalidates every `NodePath` computed before it ran. Both entry points
//! validate their path against the current tree first and fail closed with
//! `LayoutError::StalePath`, so a call racing a prior mutation fails with
//! "stale path" instead of corrupting the tree.

use thiserror::Error;

use deck_core::PaneId;

use crate::node::{LayoutNode, NodePath, SplitSide};

/// Errors from structural layout mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The workspace has no panes yet; the first pane is opened directly,
    /// not split in.
    #[error("Cannot split an empty layout")]
    EmptyTree,

    /// The path was computed against an older tree snapshot and no longer
    /// addresses a node.
    #[error("Stale node path {0:?}: no such node in the current tree")]
    StalePath(NodePath),
}

/// Result of a `remove_at` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveOutcome {
    /// Pane ids of every content leaf under the removed node, in tree
    /// order. Registry entries for these must be pruned by the caller.
    pub removed_panes: Vec<PaneId>,
    /// True when the removal emptied the tree.
    pub now_empty: bool,
}

/// Insert a new `Content` leaf beside the node at `path`.
///
/// When the target's parent already splits along the side's axis, the new
/// leaf is inserted adjacent to the target and the target's fraction of
/// space is halved between them. Otherwise the target is replaced by a
/// two-child split at 50/50.
pub fn split_at(
    root: &mut Option<LayoutNode>,
    path: &[usize],
    side: SplitSide,
    new_pane_id: PaneId,
) -> Result<(), LayoutError> {
    let Some(tree) = root else {
        return Err(LayoutError::EmptyTree);
    };
    if tree.node_at(path).is_none() {
        return Err(LayoutError::StalePath(path.to_vec()));
    }
    split_validated(tree, path, side, new_pane_id);
    Ok(())
}

fn split_validated(node: &mut LayoutNode, path: &[usize], side: SplitSide, new_pane_id: PaneId) {
    if path.is_empty() {
        let target = take_node(node);
        *node = pair(target, LayoutNode::Content { pane_id: new_pane_id }, side);
        return;
    }

    let LayoutNode::Split {
        direction,
        children,
        sizes,
    } = node
    else {
        unreachable!("path was validated against the current tree");
    };

    let index = path[0];
    if path.len() > 1 {
        split_validated(&mut children[index], &path[1..], side, new_pane_id);
        return;
    }

    if *direction == side.direction() {
        // Same axis: slot the new leaf next to the target and split the
        // target's share of space between the two.
        let share = sizes[index] / 2.0;
        sizes[index] = share;
        let at = if side.inserts_before() { index } else { index + 1 };
        children.insert(at, LayoutNode::Content { pane_id: new_pane_id });
        sizes.insert(at, share);
    } else {
        let target = take_node(&mut children[index]);
        children[index] = pair(target, LayoutNode::Content { pane_id: new_pane_id }, side);
    }
}

/// Remove the node at `path`, collapsing any split left with one child.
pub fn remove_at(
    root: &mut Option<LayoutNode>,
    path: &[usize],
) -> Result<RemoveOutcome, LayoutError> {
    let Some(tree) = root else {
        return Err(LayoutError::StalePath(path.to_vec()));
    };
    if tree.node_at(path).is_none() {
        return Err(LayoutError::StalePath(path.to_vec()));
    }

    if path.is_empty() {
        let removed_panes = tree.pane_ids();
        *root = None;
        return Ok(RemoveOutcome {
            removed_panes,
            now_empty: true,
        });
    }

    let removed_panes = remove_validated(tree, path);
    Ok(RemoveOutcome {
        removed_panes,
        now_empty: false,
    })
}

fn remove_validated(node: &mut LayoutNode, path: &[usize]) -> Vec<PaneId> {
    let LayoutNode::Split { children, sizes, .. } = node else {
        unreachable!("path was validated against the current tree");
    };

    let index = path[0];
    if path.len() > 1 {
        return remove_validated(&mut children[index], &path[1..]);
    }

    let removed = children.remove(index);
    sizes.remove(index);
    normalize(sizes);

    // A split with a single child is redundant: hoist the survivor.
    if children.len() == 1 {
        let survivor = children.remove(0);
        *node = survivor;
    }

    removed.pane_ids()
}

fn pair(target: LayoutNode, new: LayoutNode, side: SplitSide) -> LayoutNode {
    let children = if side.inserts_before() {
        vec![new, target]
    } else {
        vec![target, new]
    };
    LayoutNode::split(side.direction(), children)
}

fn take_node(slot: &mut LayoutNode) -> LayoutNode {
    // Placeholder is overwritten by the caller before anyone can see it.
    std::mem::replace(slot, LayoutNode::Content { pane_id: PaneId::new("") })
}

fn normalize(sizes: &mut [f32]) {
    let sum: f32 = sizes.iter().sum();
    if sum > f32::EPSILON {
        for size in sizes.iter_mut() {
            *size /= sum;
        }
    } else if !sizes.is_empty() {
        let share = 1.0 / sizes.len() as f32;
        for size in sizes.iter_mut() {
            *size = share;
        }
    }
}
