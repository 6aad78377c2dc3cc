//! Path resolution and traversal.
//!
//! Pure functions that locate a pane's position in the tree and enumerate
//! all panes in traversal order. Traversal order is part of the contract:
//! it is tree order (depth-first, pre-order, left-to-right), never
//! insertion order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use deck_core::{ContentType, PaneId, PaneRegistry, PaneState};

use crate::node::{LayoutNode, NodePath};

/// Locate a pane's `Content` leaf in the tree.
///
/// Depth-first, pre-order, left-to-right; the first match wins. The result
/// is deterministic for any tree where the id occurs at most once.
/// Uniqueness is the caller's contract; a duplicated id silently resolves
/// to whichever leaf traversal reaches first.
pub fn find_path(root: &LayoutNode, pane_id: &PaneId) -> Option<NodePath> {
    let mut path = Vec::new();
    if find_path_inner(root, pane_id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn find_path_inner(node: &LayoutNode, pane_id: &PaneId, path: &mut NodePath) -> bool {
    match node {
        LayoutNode::Content { pane_id: id } => id == pane_id,
        LayoutNode::Split { children, .. } => {
            for (index, child) in children.iter().enumerate() {
                path.push(index);
                if find_path_inner(child, pane_id, path) {
                    return true;
                }
                path.pop();
            }
            false
        }
    }
}

/// One pane as reported by `collect_panes` / the `list_panes` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "generated/")]
pub struct PaneSummary {
    pub id: PaneId,
    #[serde(rename = "type")]
    #[ts(as = "String")]
    pub content_type: ContentType,
    pub title: String,
    /// The pane's `content_id` (file path, URL, or generated id).
    pub path: String,
    pub is_active: bool,
    pub node_path: NodePath,
}

/// Enumerate every pane in the tree, in tree order.
///
/// Panes whose registry entry is missing are still reported (the tree is
/// the source of spatial truth) with an empty path and a type of
/// `"unknown"`; a well-formed workspace never produces one.
pub fn collect_panes(
    root: Option<&LayoutNode>,
    registry: &PaneRegistry,
    active: Option<&PaneId>,
) -> Vec<PaneSummary> {
    let mut out = Vec::new();
    if let Some(root) = root {
        collect_inner(root, registry, active, &mut Vec::new(), &mut out);
    }
    out
}

fn collect_inner(
    node: &LayoutNode,
    registry: &PaneRegistry,
    active: Option<&PaneId>,
    path: &mut NodePath,
    out: &mut Vec<PaneSummary>,
) {
    match node {
        LayoutNode::Content { pane_id } => {
            let state = registry.get(pane_id);
            out.push(PaneSummary {
                id: pane_id.clone(),
                content_type: state
                    .map(|s| s.content_type.clone())
                    .unwrap_or_else(|| ContentType::Other("unknown".to_string())),
                title: state.map(pane_title).unwrap_or_else(|| "Untitled".to_string()),
                path: state.map(|s| s.content_id.clone()).unwrap_or_default(),
                is_active: active == Some(pane_id),
                node_path: path.clone(),
            });
        }
        LayoutNode::Split { children, .. } => {
            for (index, child) in children.iter().enumerate() {
                path.push(index);
                collect_inner(child, registry, active, path, out);
                path.pop();
            }
        }
    }
}

/// Human-readable title for a pane.
///
/// Precedence: the last path segment of `content_id` when it contains a
/// separator; a non-empty `content_id` verbatim; the content type name;
/// `"Untitled"` as the final fallback for an unrecognized type with no id.
pub fn pane_title(state: &PaneState) -> String {
    let id = state.content_id.as_str();
    if id.contains(['/', '\\']) {
        if let Some(segment) = id.rsplit(['/', '\\']).find(|s| !s.is_empty()) {
            return segment.to_string();
        }
    }
    if !id.is_empty() {
        return id.to_string();
    }
    match &state.content_type {
        ContentType::Other(name) if name.is_empty() => "Untitled".to_string(),
        other => other.as_str().to_string(),
    }
}
