//! The layout tree.
//!
//! A workspace's spatial arrangement is a recursive tree of `Split` nodes
//! over `Content` leaves. The tree's shape is the sole source of spatial
//! truth; everything else about a pane lives in the `PaneRegistry`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use deck_core::PaneId;

/// Axis of a split node.
///
/// `Horizontal` lays children out left-to-right (a horizontal row);
/// `Vertical` stacks them top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "generated/")]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

impl SplitDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

impl std::fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which side of a target pane a new pane lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "generated/")]
pub enum SplitSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl SplitSide {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    /// The split axis this side implies.
    pub fn direction(&self) -> SplitDirection {
        match self {
            Self::Left | Self::Right => SplitDirection::Horizontal,
            Self::Top | Self::Bottom => SplitDirection::Vertical,
        }
    }

    /// Whether the new pane is inserted before the target in child order.
    pub fn inserts_before(&self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }
}

/// A node of the layout tree: either an internal split dividing space among
/// children, or a content leaf referencing exactly one pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
#[ts(export, export_to = "generated/")]
pub enum LayoutNode {
    Split {
        direction: SplitDirection,
        children: Vec<LayoutNode>,
        /// Fractional sizes parallel to `children`, summing to 1.0.
        sizes: Vec<f32>,
    },
    Content {
        #[serde(rename = "paneId")]
        pane_id: PaneId,
    },
}

/// An ordered sequence of child indices from the root to a node.
///
/// A path is valid only for the tree snapshot it was computed from; any
/// split or close invalidates all previously computed paths, and stale
/// paths must be re-resolved before reuse.
pub type NodePath = Vec<usize>;

impl LayoutNode {
    /// Leaf constructor.
    pub fn content(pane_id: impl Into<PaneId>) -> Self {
        Self::Content {
            pane_id: pane_id.into(),
        }
    }

    /// Split constructor with children sharing space equally.
    pub fn split(direction: SplitDirection, children: Vec<LayoutNode>) -> Self {
        let n = children.len().max(1);
        Self::Split {
            direction,
            sizes: vec![1.0 / n as f32; children.len()],
            children,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content { .. })
    }

    /// Positional lookup. Returns `None` when the path no longer addresses
    /// a node in this tree, which is how stale paths are detected.
    pub fn node_at(&self, path: &[usize]) -> Option<&LayoutNode> {
        let mut node = self;
        for &index in path {
            match node {
                Self::Split { children, .. } => node = children.get(index)?,
                Self::Content { .. } => return None,
            }
        }
        Some(node)
    }

    /// Collect the pane ids of every content leaf under this node, in
    /// tree order.
    pub fn pane_ids(&self) -> Vec<PaneId> {
        let mut out = Vec::new();
        self.collect_pane_ids(&mut out);
        out
    }

    fn collect_pane_ids(&self, out: &mut Vec<PaneId>) {
        match self {
            Self::Content { pane_id } => out.push(pane_id.clone()),
            Self::Split { children, .. } => {
                for child in children {
                    child.collect_pane_ids(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pane_tree() -> LayoutNode {
        LayoutNode::split(
            SplitDirection::Horizontal,
            vec![LayoutNode::content("p1"), LayoutNode::content("p2")],
        )
    }

    #[test]
    fn test_split_constructor_balances_sizes() {
        let node = two_pane_tree();
        match node {
            LayoutNode::Split { sizes, .. } => assert_eq!(sizes, vec![0.5, 0.5]),
            _ => panic!("expected split"),
        }
    }

    #[test]
    fn test_node_at() {
        let tree = two_pane_tree();
        assert_eq!(tree.node_at(&[]), Some(&tree));
        assert_eq!(tree.node_at(&[1]), Some(&LayoutNode::content("p2")));
        assert_eq!(tree.node_at(&[2]), None);
        // Descending through a leaf is a stale path
        assert_eq!(tree.node_at(&[0, 0]), None);
    }

    #[test]
    fn test_pane_ids_in_tree_order() {
        let tree = LayoutNode::split(
            SplitDirection::Vertical,
            vec![two_pane_tree(), LayoutNode::content("p3")],
        );
        let ids: Vec<String> = tree.pane_ids().iter().map(|p| p.to_string()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_serde_tagged_wire_shape() {
        let tree = two_pane_tree();
        let v = serde_json::to_value(&tree).unwrap();
        assert_eq!(v["type"], "split");
        assert_eq!(v["direction"], "horizontal");
        assert_eq!(v["children"][0]["type"], "content");
        assert_eq!(v["children"][0]["paneId"], "p1");

        let back: LayoutNode = serde_json::from_value(v).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_split_side_mapping() {
        assert_eq!(SplitSide::Right.direction(), SplitDirection::Horizontal);
        assert_eq!(SplitSide::Bottom.direction(), SplitDirection::Vertical);
        assert!(SplitSide::Left.inserts_before());
        assert!(!SplitSide::Bottom.inserts_before());
    }
}
