//! Stepping primitives: resolving, descending, climbing and moving sideways on positions.
//!
//! All functions work on every [Position] variant. Index paths are resolved through
//! [Tree::node_at] for indexed trees and by walking children from the root otherwise.

use crate::{position::NodeStack, Addressing, Links, Position, Representation, TraversalError, Tree};
use tracing::trace;

/// Depth-first traversal flavours sharing [step]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DfsKind {
    PreOrder,
    PostOrder,
    Leaves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn apply(self, index: usize) -> Option<usize> {
        match self {
            Direction::Next => index.checked_add(1),
            Direction::Previous => index.checked_sub(1),
        }
    }
}

/// The root, checked through the parent link when the tree stores one, so a tree without
/// a root (an empty arena) fails before a walk starts
pub(crate) fn checked_root<T: Tree>(tree: &T) -> Result<T::Node, TraversalError> {
    let root = tree.root();
    if let Links::Stored = T::PARENT_LINKS {
        tree.is_root(&root)?;
    }
    Ok(root)
}

fn root_position<N>(root: N, repr: Representation) -> Position<N> {
    match repr {
        Representation::Native => Position::Native(root),
        Representation::IndexPath => Position::Path(Vec::new()),
        Representation::NodeStack => Position::Root,
    }
}

/// Look up the node at `path`, `Ok(None)` if the path does not resolve
pub fn node_at_path<T: Tree>(tree: &T, path: &[usize]) -> Result<Option<T::Node>, TraversalError> {
    match T::ADDRESSING {
        Addressing::Indexed => tree.node_at(path),
        Addressing::Regular => {
            let mut node = tree.root();
            for &index in path {
                match tree.child(&node, index) {
                    Some(child) => node = child,
                    None => return Ok(None),
                }
            }
            Ok(Some(node))
        }
    }
}

/// Map a position to the node it designates
pub fn resolve<T: Tree>(tree: &T, position: &Position<T::Node>) -> Result<T::Node, TraversalError> {
    match position {
        Position::Root => Ok(tree.root()),
        Position::Path(path) => {
            node_at_path(tree, path)?.ok_or_else(|| TraversalError::InvalidPath(path.clone()))
        }
        Position::Stack(stack) => Ok(stack.node().cloned().unwrap_or_else(|| tree.root())),
        Position::Native(node) => Ok(node.clone()),
    }
}

pub fn is_root_position<T: Tree>(tree: &T, position: &Position<T::Node>) -> Result<bool, TraversalError> {
    match position {
        Position::Root => Ok(true),
        Position::Path(path) => Ok(path.is_empty()),
        Position::Stack(stack) => Ok(stack.depth() == 0),
        Position::Native(node) => tree.is_root(node),
    }
}

/// Distance of a position to the root. Native positions count their ancestors.
pub fn depth<T: Tree>(tree: &T, position: &Position<T::Node>) -> Result<usize, TraversalError> {
    match position {
        Position::Root => Ok(0),
        Position::Path(path) => Ok(path.len()),
        Position::Stack(stack) => Ok(stack.depth()),
        Position::Native(node) => {
            let mut depth = 0;
            let mut current = tree.parent(node)?;
            while let Some(ancestor) = current {
                depth += 1;
                current = tree.parent(&ancestor)?;
            }
            Ok(depth)
        }
    }
}

/// Position of the first child, `None` for a node without children
pub fn first_child<T: Tree>(
    tree: &T,
    position: &Position<T::Node>,
) -> Result<Option<Position<T::Node>>, TraversalError> {
    Ok(match position {
        Position::Root => tree
            .child(&tree.root(), 0)
            .map(|child| Position::Stack(NodeStack::single(child, 0))),
        Position::Path(path) => {
            let node = resolve(tree, position)?;
            tree.child_indices(&node).next().map(|first| {
                let mut path = path.clone();
                path.push(first);
                Position::Path(path)
            })
        }
        Position::Stack(stack) => {
            let node = resolve(tree, position)?;
            tree.child(&node, 0)
                .map(|child| Position::Stack(stack.clone().push(child, 0)))
        }
        Position::Native(node) => tree.child(node, 0).map(Position::Native),
    })
}

/// Position of the parent, `None` at the root
pub fn parent_position<T: Tree>(
    tree: &T,
    position: Position<T::Node>,
) -> Result<Option<Position<T::Node>>, TraversalError> {
    Ok(match position {
        Position::Root => None,
        Position::Path(mut path) => path.pop().map(|_| Position::Path(path)),
        Position::Stack(stack) => Some(stack.pop().map_or(Position::Root, Position::Stack)),
        Position::Native(node) => tree.parent(&node)?.map(Position::Native),
    })
}

pub fn next_sibling_position<T: Tree>(
    tree: &T,
    position: &Position<T::Node>,
) -> Result<Option<Position<T::Node>>, TraversalError> {
    sibling_position(tree, position, Direction::Next)
}

pub fn prev_sibling_position<T: Tree>(
    tree: &T,
    position: &Position<T::Node>,
) -> Result<Option<Position<T::Node>>, TraversalError> {
    sibling_position(tree, position, Direction::Previous)
}

fn sibling_position<T: Tree>(
    tree: &T,
    position: &Position<T::Node>,
    direction: Direction,
) -> Result<Option<Position<T::Node>>, TraversalError> {
    match position {
        Position::Root => Ok(None),
        Position::Path(path) => {
            let Some((&last, parent)) = path.split_last() else {
                return Ok(None);
            };
            let parent_node =
                node_at_path(tree, parent)?.ok_or_else(|| TraversalError::InvalidPath(parent.to_vec()))?;
            let range = tree.child_indices(&parent_node);
            Ok(direction.apply(last).filter(|i| range.contains(i)).map(|sibling| {
                let mut path = parent.to_vec();
                path.push(sibling);
                Position::Path(path)
            }))
        }
        Position::Stack(stack) => {
            let Some(index) = stack.last_index().and_then(|i| direction.apply(i)) else {
                return Ok(None);
            };
            let parent = stack.parent().cloned().unwrap_or_else(|| tree.root());
            Ok(tree
                .child(&parent, index)
                .map(|sibling| Position::Stack(stack.clone().replace_last(sibling, index))))
        }
        Position::Native(node) => {
            let sibling = match direction {
                Direction::Next => tree.next_sibling(node)?,
                Direction::Previous => tree.prev_sibling(node)?,
            };
            Ok(sibling.map(Position::Native))
        }
    }
}

/// Follow first children from `position` down to a node without children
pub fn descend_left<T: Tree>(tree: &T, position: Position<T::Node>) -> Result<Position<T::Node>, TraversalError> {
    let mut position = position;
    while let Some(child) = first_child(tree, &position)? {
        position = child;
    }
    Ok(position)
}

/// A position presented as the root of its own subtree.
struct Subtree<'t, T: Tree> {
    tree: &'t T,
    root: Position<T::Node>,
}

impl<'t, T: Tree> Subtree<'t, T> {
    /// Where a traversal of `kind` restricted to this subtree starts
    fn first_position(self, kind: DfsKind) -> Result<Position<T::Node>, TraversalError> {
        match kind {
            DfsKind::PreOrder => Ok(self.root),
            DfsKind::PostOrder | DfsKind::Leaves => descend_left(self.tree, self.root),
        }
    }
}

pub(crate) fn first_position<T: Tree>(
    tree: &T,
    repr: Representation,
    kind: DfsKind,
) -> Result<Position<T::Node>, TraversalError> {
    Subtree {
        tree,
        root: root_position(checked_root(tree)?, repr),
    }
    .first_position(kind)
}

/// Advance a depth-first traversal by one position. `Ok(None)` once the traversal is finished.
///
/// `descend` is only consulted for pre-order; when it rejects a node its children are skipped.
pub(crate) fn step<T: Tree>(
    tree: &T,
    kind: DfsKind,
    descend: Option<&dyn Fn(&T::Node) -> bool>,
    position: Position<T::Node>,
) -> Result<Option<Position<T::Node>>, TraversalError> {
    if kind == DfsKind::PreOrder {
        let accepted = match descend {
            Some(filter) => filter(&resolve(tree, &position)?),
            None => true,
        };
        if accepted {
            if let Some(child) = first_child(tree, &position)? {
                trace!("descending to first child");
                return Ok(Some(child));
            }
        }
    }

    let mut position = position;
    while !is_root_position(tree, &position)? {
        if let Some(sibling) = next_sibling_position(tree, &position)? {
            trace!("moving to next sibling");
            return Subtree { tree, root: sibling }.first_position(kind).map(Some);
        }
        position = parent_position(tree, position)?.ok_or(TraversalError::TreeInconsistency)?;
        if kind == DfsKind::PostOrder {
            trace!("climbing to parent");
            return Ok(Some(position));
        }
    }
    Ok(None)
}
