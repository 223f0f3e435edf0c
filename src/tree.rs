//! Arena-based node storage for the reference host.
//!
//! The Tree stores every mounted node in a dense `Vec` with a sparse map for
//! O(1) lookup by [`NodeId`]. Ids are generational: a slot freed by
//! [`Tree::unregister`] is reused with a bumped generation, so a stale id
//! held across a remount can never resolve to the new occupant.
//!
//! Each node carries its element kind, optional text content, style and the
//! absolute bounding box written by the last layout pass.

use crate::geometry::Rect;
use crate::layout::Style;

/// Unique identifier for a node in the tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// What gets stored for an element: everything except tree links and layout output.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Element kind, e.g. `"div"`, `"img"`, `"p"`
    pub kind: String,
    /// Text content (not an element child)
    pub text: Option<String>,
    pub style: Style,
}

impl NodeData {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: None,
            style: Style::default(),
        }
    }
}

struct SparseEntry {
    dense_index: usize,
    generation: u32,
}

struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Absolute box from the last layout pass
    bounds: Rect,
    /// Back-pointer to sparse array index (for swap-remove fixup)
    sparse_index: u32,
}

#[derive(Default)]
pub struct Tree {
    dense: Vec<Node>,
    sparse: Vec<Option<SparseEntry>>,
    free_indices: Vec<u32>,
    /// Generation to use the next time a freed slot is handed out
    next_generation: Vec<u32>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Store a node and return its id. Parent links are set via `set_parent`.
    pub fn register(&mut self, data: NodeData) -> NodeId {
        let (sparse_index, generation) = if let Some(idx) = self.free_indices.pop() {
            (idx, self.next_generation[idx as usize])
        } else {
            let idx = self.sparse.len() as u32;
            self.sparse.push(None);
            self.next_generation.push(0);
            (idx, 0)
        };

        let dense_index = self.dense.len();
        self.dense.push(Node {
            data,
            parent: None,
            children: Vec::new(),
            bounds: Rect::default(),
            sparse_index,
        });
        self.sparse[sparse_index as usize] = Some(SparseEntry {
            dense_index,
            generation,
        });

        NodeId::new(sparse_index, generation)
    }

    /// Remove a single node. Its children are left dangling; use
    /// [`Tree::remove_subtree`] to drop a whole branch.
    pub fn unregister(&mut self, id: NodeId) {
        let Some(dense_index) = self.get_dense_index(id) else {
            return;
        };

        if let Some(parent_id) = self.dense[dense_index].parent {
            if let Some(parent_dense) = self.get_dense_index(parent_id) {
                self.dense[parent_dense].children.retain(|&c| c != id);
            }
        }

        let last_dense_index = self.dense.len() - 1;
        self.dense.swap_remove(dense_index);

        // Fix up the moved node's sparse entry
        if dense_index != last_dense_index {
            let moved_sparse_idx = self.dense[dense_index].sparse_index;
            if let Some(entry) = self.sparse[moved_sparse_idx as usize].as_mut() {
                entry.dense_index = dense_index;
            }
        }

        self.sparse[id.index as usize] = None;
        self.next_generation[id.index as usize] = id.generation.wrapping_add(1);
        self.free_indices.push(id.index);
    }

    /// Remove `id` and every descendant.
    pub fn remove_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        let mut doomed = Vec::new();
        while let Some(current) = stack.pop() {
            if !self.contains(current) {
                continue;
            }
            stack.extend(self.get_children(current));
            doomed.push(current);
        }
        for id in doomed {
            self.unregister(id);
        }
    }

    fn get_dense_index(&self, id: NodeId) -> Option<usize> {
        self.sparse
            .get(id.index as usize)
            .and_then(|e| e.as_ref())
            .filter(|e| e.generation == id.generation)
            .map(|e| e.dense_index)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.get_dense_index(id).map(|idx| &self.dense[idx])
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.get_dense_index(id).map(|idx| &mut self.dense[idx])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get_dense_index(id).is_some()
    }

    /// Set the parent of a node, appending it to the parent's children.
    pub fn set_parent(&mut self, child_id: NodeId, parent_id: NodeId) {
        if let Some(child) = self.node_mut(child_id) {
            child.parent = Some(parent_id);
        }
        if let Some(parent) = self.node_mut(parent_id) {
            if !parent.children.contains(&child_id) {
                parent.children.push(child_id);
            }
        }
    }

    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Element children in document order.
    pub fn get_children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).map(|n| n.children.clone()).unwrap_or_default()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, |n| n.children.len())
    }

    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.node(id).map(|n| &n.data)
    }

    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.node_mut(id).map(|n| &mut n.data)
    }

    /// Absolute bounds from the last layout, zero before the first one.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.node(id).map(|n| n.bounds)
    }

    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(node) = self.node_mut(id) {
            node.bounds = bounds;
        }
    }
}
