//! Positions: the traversal's own encoding of "where am I" in a tree.
//!
//! Which variant a traversal produces is fixed when the traversal is constructed
//! (see [crate::Representation]). Stepping consumes a position and returns a new one.

/// Child indices from the root down to a node. The empty path is the root.
pub type IndexPath = Vec<usize>;

/// Current location of a traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position<N> {
    /// The root of a regular tree without stored links
    Root,
    /// Index path from the root, resolved through the tree
    Path(IndexPath),
    /// Ancestor handles paired with the index path (never empty, see [Position::Root])
    Stack(NodeStack<N>),
    /// The tree's own node handle
    Native(N),
}

impl<N> Position<N> {
    /// Index path of this position, `None` for native positions which carry no path
    pub fn index_path(&self) -> Option<&[usize]> {
        match self {
            Position::Root => Some(&[][..]),
            Position::Path(path) => Some(path.as_slice()),
            Position::Stack(stack) => Some(stack.path()),
            Position::Native(_) => None,
        }
    }

    pub fn into_index_path(self) -> Option<IndexPath> {
        match self {
            Position::Root => Some(Vec::new()),
            Position::Path(path) => Some(path),
            Position::Stack(stack) => Some(stack.path),
            Position::Native(_) => None,
        }
    }
}

/// Handles of the nodes along an index path.
///
/// `nodes[i]` is the node at `path[..=i]`, so the last handle is the current node and the
/// root itself is not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStack<N> {
    nodes: Vec<N>,
    path: IndexPath,
}

impl<N> NodeStack<N> {
    pub(crate) fn single(node: N, index: usize) -> Self {
        NodeStack {
            nodes: vec![node],
            path: vec![index],
        }
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The node this stack points to
    pub fn node(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Parent of the current node, `None` if the parent is the root
    pub(crate) fn parent(&self) -> Option<&N> {
        self.nodes.len().checked_sub(2).map(|i| &self.nodes[i])
    }

    pub(crate) fn last_index(&self) -> Option<usize> {
        self.path.last().copied()
    }

    pub(crate) fn push(mut self, node: N, index: usize) -> Self {
        self.nodes.push(node);
        self.path.push(index);
        self
    }

    /// Move to the parent, `None` if that is the root
    pub(crate) fn pop(mut self) -> Option<Self> {
        self.nodes.pop();
        self.path.pop();
        (!self.path.is_empty()).then_some(self)
    }

    /// Replace the current node by a sibling
    pub(crate) fn replace_last(mut self, node: N, index: usize) -> Self {
        self.nodes.pop();
        self.path.pop();
        self.push(node, index)
    }
}
