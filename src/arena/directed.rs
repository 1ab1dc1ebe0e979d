//! Implementation of an [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! tree that stores parent and sibling links on each node, so traversals can use arena
//! indices directly as positions instead of reconstructing ancestry.

use crate::{Links, TraversalError, Tree};
use std::{collections::HashMap, fmt::Debug, hash::Hash};
use tracing::trace;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct ArenaIndex(pub usize);

/// A node structure to be used in an arena allocated tree. Links are kept up to date on insertion.
#[derive(Debug)]
pub struct ArenaNode<Load, NodeId> {
    /// The user-defined load that the node owns
    load: Load,
    /// Index in the arena allocation
    index: ArenaIndex,
    /// identifier for lookups
    id: NodeId,
    /// references for children
    children: Vec<ArenaIndex>,
    /// Depth in the tree
    depth: usize,
    parent_ref: Option<ArenaIndex>,
    prev_sibling: Option<ArenaIndex>,
    next_sibling: Option<ArenaIndex>,
}

impl<Load, NodeId> ArenaNode<Load, NodeId> {
    fn new(load: Load, id: NodeId, index: ArenaIndex, depth: usize, parent_ref: Option<ArenaIndex>) -> Self {
        ArenaNode {
            load,
            index,
            id,
            children: vec![],
            depth,
            parent_ref,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    pub fn get(&self) -> &Load {
        &self.load
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn index(&self) -> ArenaIndex {
        self.index
    }

    /// Get the node's distance to its root node
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn children(&self) -> &[ArenaIndex] {
        &self.children
    }
}

/// Tree that uses arena allocation. The first node in the arena is the root.
///
/// Nodes are only ever appended, so arena indices stay valid as long as the tree lives
/// (until [ArenaTree::set_root] clears it).
pub struct ArenaTree<Load, NodeId> {
    /// Memory allocated area for nodes
    nodes: Vec<ArenaNode<Load, NodeId>>,

    /// Lookup arena indices
    lookup: HashMap<NodeId, ArenaIndex>,
}

impl<Load, NodeId> ArenaTree<Load, NodeId> {
    pub fn new() -> Self {
        ArenaTree {
            nodes: vec![],
            lookup: HashMap::new(),
        }
    }

    pub fn root(&self) -> Result<&ArenaNode<Load, NodeId>, TraversalError> {
        self.nodes.first().ok_or(TraversalError::RootNotSet)
    }

    pub fn node(&self, index: ArenaIndex) -> Option<&ArenaNode<Load, NodeId>> {
        self.nodes.get(index.0)
    }

    pub fn nodes(&self) -> &[ArenaNode<Load, NodeId>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn checked(&self, index: ArenaIndex) -> Result<&ArenaNode<Load, NodeId>, TraversalError> {
        match self.node(index) {
            Some(node) => Ok(node),
            None if self.nodes.is_empty() => Err(TraversalError::RootNotSet),
            None => Err(TraversalError::ReferenceOutOfBound(index.0)),
        }
    }
}

impl<Load, NodeId> Default for ArenaTree<Load, NodeId> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Load, NodeId> ArenaTree<Load, NodeId>
where
    NodeId: Eq + Clone + Hash + Debug,
{
    pub fn node_by_id(&self, node_id: &NodeId) -> Option<&ArenaNode<Load, NodeId>> {
        let index = self.lookup.get(node_id)?;
        self.nodes.get(index.0)
    }

    /// Deletes all nodes and sets a new root
    pub fn set_root(&mut self, root_load: Load, root_id: NodeId) -> NodeId {
        self.nodes.clear();
        self.lookup.clear();
        self.nodes
            .push(ArenaNode::new(root_load, root_id.clone(), ArenaIndex(0), 0, None));
        self.lookup.insert(root_id.clone(), ArenaIndex(0));
        root_id
    }

    /// Append a new node as the last child of `parent`
    pub fn add(&mut self, load: Load, node_id: NodeId, parent: &NodeId) -> Result<NodeId, TraversalError> {
        let parent_index = *self
            .lookup
            .get(parent)
            .ok_or_else(|| TraversalError::UnknownNode(format!("{parent:?}")))?;

        // First check whether we can add the node (id not used yet)
        if self.lookup.contains_key(&node_id) {
            return Err(TraversalError::NotUnique(format!("{node_id:?}")));
        }

        let index = ArenaIndex(self.nodes.len());
        let parent_node = self
            .nodes
            .get_mut(parent_index.0)
            .ok_or(TraversalError::ReferenceOutOfBound(parent_index.0))?;
        let depth = parent_node.depth + 1;
        let prev_sibling = parent_node.children.last().copied();
        parent_node.children.push(index);

        if let Some(prev) = prev_sibling {
            self.nodes
                .get_mut(prev.0)
                .ok_or(TraversalError::ReferenceOutOfBound(prev.0))?
                .next_sibling = Some(index);
        }

        trace!(?node_id, ?index, depth, "adding node");
        let mut node = ArenaNode::new(load, node_id.clone(), index, depth, Some(parent_index));
        node.prev_sibling = prev_sibling;
        self.lookup.insert(node_id.clone(), index);
        self.nodes.push(node);
        Ok(node_id)
    }
}

impl<'a, Load, NodeId> Tree for &'a ArenaTree<Load, NodeId> {
    type Node = ArenaIndex;

    const PARENT_LINKS: Links = Links::Stored;
    const SIBLING_LINKS: Links = Links::Stored;

    fn root(&self) -> ArenaIndex {
        ArenaIndex(0)
    }

    fn children(&self, node: &ArenaIndex) -> Vec<ArenaIndex> {
        self.node(*node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn child_count(&self, node: &ArenaIndex) -> usize {
        self.node(*node).map_or(0, |n| n.children.len())
    }

    fn child(&self, node: &ArenaIndex, index: usize) -> Option<ArenaIndex> {
        self.node(*node)?.children.get(index).copied()
    }

    fn parent(&self, node: &ArenaIndex) -> Result<Option<ArenaIndex>, TraversalError> {
        Ok(self.checked(*node)?.parent_ref)
    }

    fn next_sibling(&self, node: &ArenaIndex) -> Result<Option<ArenaIndex>, TraversalError> {
        Ok(self.checked(*node)?.next_sibling)
    }

    fn prev_sibling(&self, node: &ArenaIndex) -> Result<Option<ArenaIndex>, TraversalError> {
        Ok(self.checked(*node)?.prev_sibling)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::*;
    use itertools::Itertools;
    use test_log;

    fn loads<I>(tree: &ArenaTree<usize, String>, traversal: &I) -> Vec<usize>
    where
        I: Traversal,
        I::Source: Tree<Node = ArenaIndex>,
    {
        traversal
            .nodes()
            .map_ok(|index| *tree.node(index).unwrap().get())
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test_log::test]
    fn test_adding_iteration() {
        // Loads are integers chosen such that a pre-order traversal yields them in increasing order
        // IDs are strings that reflect the order of insertion

        // Layout of the tree
        //     0
        //    / \
        //  1    5
        // | \   |
        // 2  4  6
        // |
        // 3

        let mut tree = ArenaTree::<usize, String>::new();

        let root = tree.set_root(0, "root".to_string());

        let first = tree.add(1, "first".to_string(), &root).unwrap();
        let second = tree.add(5, "second".to_string(), &root).unwrap();
        let third = tree.add(2, "third".to_string(), &first).unwrap();

        tree.add(4, "fourth".to_string(), &first).unwrap();
        tree.add(3, "fifth".to_string(), &third).unwrap();
        tree.add(6, "sixth".to_string(), &second).unwrap();

        // Storage follows insertion
        assert_eq!(tree.nodes().iter().map(|n| *n.get()).collect_vec(), &[0, 1, 5, 2, 4, 3, 6]);
        assert_eq!(
            tree.nodes().iter().map(|n| n.id().as_str()).collect_vec(),
            &["root", "first", "second", "third", "fourth", "fifth", "sixth"]
        );

        // Check correctness of child references for some nodes
        assert_eq!(tree.nodes()[0].children(), &[ArenaIndex(1), ArenaIndex(2)]);
        assert_eq!(tree.nodes()[1].children(), &[ArenaIndex(3), ArenaIndex(4)]);
        assert_eq!(tree.nodes()[2].children(), &[ArenaIndex(6)]);
        assert_eq!(tree.nodes()[3].children(), &[ArenaIndex(5)]);

        // Sibling links
        let first_node = tree.node_by_id(&first).unwrap();
        assert_eq!(first_node.next_sibling, Some(ArenaIndex(2)));
        assert_eq!(first_node.prev_sibling, None);
        assert_eq!(tree.node_by_id(&second).unwrap().prev_sibling, Some(ArenaIndex(1)));
        assert_eq!(tree.node_by_id(&"fifth".to_string()).unwrap().depth(), 3);

        assert_eq!(PreOrderDfs::new(&tree).representation(), Representation::Native);
        assert_eq!(loads(&tree, &PreOrderDfs::new(&tree)), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(loads(&tree, &PostOrderDfs::new(&tree)), &[3, 2, 4, 1, 6, 5, 0]);
        assert_eq!(loads(&tree, &Leaves::new(&tree)), &[3, 4, 6]);
        assert_eq!(loads(&tree, &StatelessBfs::new(&tree)), &[0, 1, 5, 2, 4, 6, 3]);

        let not_first = |index: &ArenaIndex| *index != ArenaIndex(1);
        assert_eq!(
            loads(&tree, &PreOrderDfs::with_filter(&tree, not_first)),
            &[0, 1, 5, 6]
        );
    }

    #[test]
    fn test_errors() {
        let mut tree = ArenaTree::<usize, &str>::new();
        assert_eq!(tree.root().err(), Some(TraversalError::RootNotSet));

        let root = tree.set_root(0, "root");
        tree.add(1, "child", &root).unwrap();
        assert_eq!(
            tree.add(2, "child", &root),
            Err(TraversalError::NotUnique("\"child\"".to_string()))
        );
        assert_eq!(
            tree.add(2, "other", &"missing"),
            Err(TraversalError::UnknownNode("\"missing\"".to_string()))
        );
        assert_eq!(
            (&tree).parent(&ArenaIndex(9)),
            Err(TraversalError::ReferenceOutOfBound(9))
        );

        assert_eq!((&tree).child(&ArenaIndex(0), 0), Some(ArenaIndex(1)));
        assert_eq!((&tree).child(&ArenaIndex(0), 1), None);

        // Resetting the root forgets the previous nodes
        tree.set_root(7, "new");
        assert_eq!(tree.len(), 1);
        assert!(tree.node_by_id(&"child").is_none());
    }

    #[test_log::test]
    fn test_empty_arena_has_no_root() {
        let tree = ArenaTree::<u32, u32>::new();
        assert!(tree.is_empty());

        let root_not_set = vec![Err(TraversalError::RootNotSet)];
        assert_eq!(PreOrderDfs::new(&tree).nodes().collect_vec(), root_not_set);
        assert_eq!(PostOrderDfs::new(&tree).nodes().collect_vec(), root_not_set);
        assert_eq!(Leaves::new(&tree).nodes().collect_vec(), root_not_set);
        assert_eq!(StatelessBfs::new(&tree).nodes().collect_vec(), root_not_set);
        assert_eq!(tree_size(&tree), Err(TraversalError::RootNotSet));
        assert_eq!(descend(&&tree, |_| None), Err(TraversalError::RootNotSet));
    }
}
