//! Tree operations: insert, remove, walk, containment.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// The document tree, backed by a slotmap arena.
///
/// Node records live in one `SlotMap`; the parent and children links sit in
/// secondary maps keyed by the same ids. Removing a subtree invalidates the
/// ids of every node in it, which is what makes stale-handle checks elsewhere
/// (queries, listeners, focus) a plain `contains` test.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    root: Option<NodeId>,
    parent: SecondaryMap<NodeId, NodeId>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
}

impl Dom {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            parent: SecondaryMap::new(),
            children: SecondaryMap::new(),
        }
    }

    /// Insert a root-level node (no parent).
    ///
    /// The first node ever inserted becomes the document root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.root.get_or_insert(id);
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(
            self.nodes.contains_key(parent),
            "parent node does not exist"
        );
        let id = self.nodes.insert(data);
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have children vec")
            .push(id);
        self.children.insert(id, Vec::new());
        id
    }

    /// Remove a node together with its entire subtree.
    ///
    /// Returns the `NodeData` of the removed node itself, or `None` if the id
    /// was already stale. Ids of every removed descendant become stale too.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut detached = None;
        for node in self.collect_subtree(id) {
            self.parent.remove(node);
            self.children.remove(node);
            let data = self.nodes.remove(node);
            if node == id {
                detached = data;
            }
        }
        detached
    }

    /// Every id in the subtree rooted at `start`, including `start`.
    fn collect_subtree(&self, start: NodeId) -> Vec<NodeId> {
        let mut subtree = Vec::new();
        let mut pending = vec![start];
        while let Some(node) = pending.pop() {
            subtree.push(node);
            pending.extend_from_slice(self.children(node));
        }
        subtree
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node, in insertion order.
    ///
    /// Stale and childless nodes both yield an empty slice.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// Walk from `id` up to the root, collecting ancestor ids.
    ///
    /// The chain starts at the immediate parent and ends at the root; `id`
    /// itself is not included.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = self.parent(id);
        while let Some(node) = cursor {
            chain.push(node);
            cursor = self.parent(node);
        }
        chain
    }

    /// Whether `node` sits strictly below `ancestor` in the tree.
    ///
    /// A node is not its own descendant. Stale ids return `false`.
    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.parent(node);
        while let Some(step) = cursor {
            if step == ancestor {
                return true;
            }
            cursor = self.parent(step);
        }
        false
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Number of nodes in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the document contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    ///
    /// This is document order: a parent before its children, siblings in
    /// insertion order. A stale `start` yields an empty vec.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        self.walk_into(start, &mut order);
        order
    }

    fn walk_into(&self, node: NodeId, order: &mut Vec<NodeId>) {
        if !self.nodes.contains_key(node) {
            return;
        }
        order.push(node);
        for &child in self.children(node) {
            self.walk_into(child, order);
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

// =====
// Tests
// =====
