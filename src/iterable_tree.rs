//! Definition of the interfaces for tree iteration
//!
//! A tree type becomes traversable by implementing [Tree]. The three associated
//! constants classify how the type addresses its nodes and whether parent and sibling
//! links can be queried directly. They are read once, when an iterator is constructed,
//! to pick the [Representation] of positions for the whole traversal.

use crate::TraversalError;
use std::ops::Range;

/// How nodes are addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// Nodes are looked up by an index path from the root ([Tree::node_at])
    Indexed,
    /// Children are identity-bearing node handles themselves
    Regular,
}

/// Whether a relationship (parent or siblings) is stored on the node or has to be
/// reconstructed from the traversal's own bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Links {
    Stored,
    Implicit,
}

/// The position encoding a traversal uses, derived from the capability tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Stack of ancestor handles paired with the index path (regular trees without stored links)
    NodeStack,
    /// Plain index path from the root (indexed trees without stored links)
    IndexPath,
    /// The tree's own node handle (stored parent and sibling links)
    Native,
}

/// Compile-time facts about a [Tree] type collected in one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub addressing: Addressing,
    pub parents: Links,
    pub siblings: Links,
}

impl Capabilities {
    pub const fn of<T: Tree + ?Sized>() -> Self {
        Capabilities {
            addressing: T::ADDRESSING,
            parents: T::PARENT_LINKS,
            siblings: T::SIBLING_LINKS,
        }
    }

    /// Position encoding used by depth-first traversals over a tree with these capabilities
    pub const fn representation(&self) -> Representation {
        match (self.parents, self.siblings, self.addressing) {
            (Links::Stored, Links::Stored, _) => Representation::Native,
            (_, _, Addressing::Indexed) => Representation::IndexPath,
            (_, _, Addressing::Regular) => Representation::NodeStack,
        }
    }
}

/// A data structure exposing a tree hierarchy through cheap node handles.
///
/// Only [Tree::root] and [Tree::children] are required. The remaining capability methods
/// fail with [TraversalError::MissingCapability] unless the implementor supplies them, which
/// it must do for every link it declares as [Links::Stored] (and [Tree::node_at] for
/// [Addressing::Indexed]).
///
/// Handles are expected to be cheap to clone (references or arena indices). Where nodes
/// are compared (sibling scans), equality of handles must mean identity of nodes.
pub trait Tree {
    type Node: Clone;

    const ADDRESSING: Addressing = Addressing::Regular;
    const PARENT_LINKS: Links = Links::Implicit;
    const SIBLING_LINKS: Links = Links::Implicit;

    fn root(&self) -> Self::Node;

    /// Ordered children of `node` (possibly empty)
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn child_count(&self, node: &Self::Node) -> usize {
        self.children(node).len()
    }

    /// Child of `node` at `index`. Stepping moves between siblings through this, so trees
    /// with random access to their children should override it.
    fn child(&self, node: &Self::Node, index: usize) -> Option<Self::Node> {
        self.children(node).into_iter().nth(index)
    }

    /// Indices of the children of `node`. Indices are the 0-based ordinals of the children.
    fn child_indices(&self, node: &Self::Node) -> Range<usize> {
        0..self.child_count(node)
    }

    /// Look up a node by its index path from the root. `Ok(None)` if the path does not resolve.
    fn node_at(&self, _path: &[usize]) -> Result<Option<Self::Node>, TraversalError> {
        Err(TraversalError::missing("node_at"))
    }

    /// Parent of `node`, `None` for the root
    fn parent(&self, _node: &Self::Node) -> Result<Option<Self::Node>, TraversalError> {
        Err(TraversalError::missing("parent"))
    }

    fn is_root(&self, node: &Self::Node) -> Result<bool, TraversalError> {
        Ok(self.parent(node)?.is_none())
    }

    fn next_sibling(&self, _node: &Self::Node) -> Result<Option<Self::Node>, TraversalError> {
        Err(TraversalError::missing("next_sibling"))
    }

    fn prev_sibling(&self, _node: &Self::Node) -> Result<Option<Self::Node>, TraversalError> {
        Err(TraversalError::missing("prev_sibling"))
    }
}

/// A tree whose nodes can be read and replaced by index path. Used by the in-place
/// rewrite ([crate::treemap_mut]).
pub trait TreeMut {
    type Value: PartialEq;

    fn get_at(&self, path: &[usize]) -> Option<&Self::Value>;

    /// Number of children of the node at `path`, `None` if the path does not resolve
    fn child_count_at(&self, path: &[usize]) -> Option<usize>;

    /// Replace the node at `path` (including its subtree) with `value`
    fn set_at(&mut self, path: &[usize], value: Self::Value) -> Result<(), TraversalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Tree for Plain {
        type Node = u8;

        fn root(&self) -> u8 {
            0
        }

        fn children(&self, _node: &u8) -> Vec<u8> {
            vec![]
        }
    }

    struct Linked;

    impl Tree for Linked {
        type Node = u8;
        const PARENT_LINKS: Links = Links::Stored;
        const SIBLING_LINKS: Links = Links::Stored;

        fn root(&self) -> u8 {
            0
        }

        fn children(&self, _node: &u8) -> Vec<u8> {
            vec![]
        }
    }

    struct ByPath;

    impl Tree for ByPath {
        type Node = u8;
        const ADDRESSING: Addressing = Addressing::Indexed;
        const PARENT_LINKS: Links = Links::Stored;

        fn root(&self) -> u8 {
            0
        }

        fn children(&self, _node: &u8) -> Vec<u8> {
            vec![]
        }
    }

    #[test]
    fn representation_follows_tags() {
        assert_eq!(Capabilities::of::<Plain>().representation(), Representation::NodeStack);
        assert_eq!(Capabilities::of::<Linked>().representation(), Representation::Native);
        // stored parents alone are not enough for native positions
        assert_eq!(Capabilities::of::<ByPath>().representation(), Representation::IndexPath);
    }

    #[test]
    fn missing_capabilities_are_named() {
        assert_eq!(Plain.parent(&0), Err(TraversalError::missing("parent")));
        assert_eq!(Plain.node_at(&[]), Err(TraversalError::missing("node_at")));
        assert_eq!(Linked.next_sibling(&0), Err(TraversalError::missing("next_sibling")));
        assert_eq!(Plain.child_indices(&0), 0..0);
        assert_eq!(Plain.child(&0, 0), None);
    }
}
