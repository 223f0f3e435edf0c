//! Read-only view of a host's rendered tree.
//!
//! The shimmer core never owns the tree it measures. Anything that can report
//! a node's kind, its element children in document order and its absolute
//! post-layout box can be measured.

use crate::geometry::Rect;
use crate::tree::{NodeId, Tree};

pub trait VisualNode: Sized {
    /// Element kind, e.g. `"img"` or `"p"`.
    fn kind(&self) -> &str;

    /// Element children in document order. Text is not an element child.
    fn children(&self) -> Vec<Self>;

    /// Absolute bounding box after layout.
    fn bounds(&self) -> Rect;
}

/// Borrowed handle to a node stored in a [`Tree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn new(tree: &'a Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl VisualNode for NodeRef<'_> {
    fn kind(&self) -> &str {
        self.tree.data(self.id).map_or("", |d| d.kind.as_str())
    }

    fn children(&self) -> Vec<Self> {
        self.tree
            .get_children(self.id)
            .into_iter()
            .map(|id| NodeRef::new(self.tree, id))
            .collect()
    }

    fn bounds(&self) -> Rect {
        self.tree.bounds(self.id).unwrap_or_default()
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("bounds", &self.bounds())
            .finish()
    }
}
