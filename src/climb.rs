//! Caller-driven walks along a single path: up towards the root ([ascend]) and down
//! towards the leaves ([descend]).

use crate::{traverse::step, TraversalError, Tree};

/// Climb from `node` towards the root while `select` accepts the current node.
///
/// Returns the first node `select` rejects, or the root. The parent is looked up before
/// `select` runs, so `select` may change a node's contents but not the shape of the tree.
/// Requires stored parent links.
pub fn ascend<T, F>(tree: &T, node: T::Node, mut select: F) -> Result<T::Node, TraversalError>
where
    T: Tree,
    F: FnMut(&T::Node) -> bool,
{
    let mut node = node;
    loop {
        let parent = tree.parent(&node)?;
        if !select(&node) {
            return Ok(node);
        }
        match parent {
            Some(parent) => node = parent,
            None => return Ok(node),
        }
    }
}

/// Walk down from the root. `select` returns `None` to stop at the current node or
/// `Some(i)` to move into the child with index `i`.
pub fn descend<T, F>(tree: &T, mut select: F) -> Result<T::Node, TraversalError>
where
    T: Tree,
    F: FnMut(&T::Node) -> Option<usize>,
{
    let mut node = step::checked_root(tree)?;
    while let Some(index) = select(&node) {
        node = tree.child(&node, index).ok_or_else(|| TraversalError::ChildOutOfBound {
            index,
            count: tree.child_count(&node),
        })?;
    }
    Ok(node)
}
