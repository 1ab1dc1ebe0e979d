//! Depth-first traversals: pre-order (with a descend filter), post-order and leaves.
//!
//! All three share one stepping algorithm ([super::step]). The position representation is
//! picked from the tree's capabilities when the traversal is constructed.

use super::{
    step::{self, DfsKind},
    Traversal,
};
use crate::{Capabilities, Position, Representation, TraversalError, Tree};

fn descend_always<N>(_node: &N) -> bool {
    true
}

/// Parents before their descendants. A node rejected by the filter is visited but its
/// subtree is skipped.
pub struct PreOrderDfs<T: Tree, F = fn(&<T as Tree>::Node) -> bool> {
    tree: T,
    filter: F,
    repr: Representation,
}

impl<T: Tree> PreOrderDfs<T> {
    pub fn new(tree: T) -> Self {
        PreOrderDfs::with_filter(tree, descend_always::<T::Node> as fn(&T::Node) -> bool)
    }
}

impl<T, F> PreOrderDfs<T, F>
where
    T: Tree,
    F: Fn(&T::Node) -> bool,
{
    pub fn with_filter(tree: T, filter: F) -> Self {
        PreOrderDfs {
            tree,
            filter,
            repr: Capabilities::of::<T>().representation(),
        }
    }

    pub fn representation(&self) -> Representation {
        self.repr
    }
}

impl<T, F> Traversal for PreOrderDfs<T, F>
where
    T: Tree,
    F: Fn(&T::Node) -> bool,
{
    type Source = T;

    fn tree(&self) -> &T {
        &self.tree
    }

    fn first_position(&self) -> Result<Position<T::Node>, TraversalError> {
        step::first_position(&self.tree, self.repr, DfsKind::PreOrder)
    }

    fn step_position(&self, position: Position<T::Node>) -> Result<Option<Position<T::Node>>, TraversalError> {
        let filter: &dyn Fn(&T::Node) -> bool = &self.filter;
        step::step(&self.tree, DfsKind::PreOrder, Some(filter), position)
    }
}

/// Children before their parent; the root is always visited last.
pub struct PostOrderDfs<T> {
    tree: T,
    repr: Representation,
}

impl<T: Tree> PostOrderDfs<T> {
    pub fn new(tree: T) -> Self {
        PostOrderDfs {
            tree,
            repr: Capabilities::of::<T>().representation(),
        }
    }

    pub fn representation(&self) -> Representation {
        self.repr
    }
}

impl<T: Tree> Traversal for PostOrderDfs<T> {
    type Source = T;

    fn tree(&self) -> &T {
        &self.tree
    }

    fn first_position(&self) -> Result<Position<T::Node>, TraversalError> {
        step::first_position(&self.tree, self.repr, DfsKind::PostOrder)
    }

    fn step_position(&self, position: Position<T::Node>) -> Result<Option<Position<T::Node>>, TraversalError> {
        step::step(&self.tree, DfsKind::PostOrder, None, position)
    }
}

/// Nodes without children, left to right (the childless subsequence of [PostOrderDfs]).
pub struct Leaves<T> {
    tree: T,
    repr: Representation,
}

impl<T: Tree> Leaves<T> {
    pub fn new(tree: T) -> Self {
        Leaves {
            tree,
            repr: Capabilities::of::<T>().representation(),
        }
    }
}

impl<T: Tree> Traversal for Leaves<T> {
    type Source = T;

    fn tree(&self) -> &T {
        &self.tree
    }

    fn first_position(&self) -> Result<Position<T::Node>, TraversalError> {
        step::first_position(&self.tree, self.repr, DfsKind::Leaves)
    }

    fn step_position(&self, position: Position<T::Node>) -> Result<Option<Position<T::Node>>, TraversalError> {
        step::step(&self.tree, DfsKind::Leaves, None, position)
    }
}
