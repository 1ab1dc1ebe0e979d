//! Breadth-first (level-order) traversal that keeps no state besides the current index path.
//!
//! Every step re-derives the next path from the root, so a full traversal costs O(n²)
//! lookups. In exchange nothing but indices is carried between calls and the tree may be
//! reshaped between steps, as long as the current path still means something. Use
//! [StatelessBfs::step_path] to drive it while mutating the tree.

use super::{step, Traversal};
use crate::{IndexPath, Position, TraversalError, Tree};
use std::ops::Range;
use tracing::trace;

/// Level-order traversal: the root, then all nodes of depth 1 left to right, and so on.
pub struct StatelessBfs<T> {
    tree: T,
}

impl<T: Tree> StatelessBfs<T> {
    pub fn new(tree: T) -> Self {
        StatelessBfs { tree }
    }

    /// Index path of the node following `path` in level order, `Ok(None)` when finished
    pub fn step_path(&self, path: IndexPath) -> Result<Option<IndexPath>, TraversalError> {
        let start_level = path.len();
        let mut level = start_level;
        let mut current = path;
        loop {
            current = match self.next_index_or_dead_end(&current, level)? {
                Some(next) => next,
                None => {
                    level += 1;
                    if level > start_level + 1 {
                        return Ok(None);
                    }
                    trace!(level, "starting next level");
                    self.descend_left_to(Vec::new(), level)?
                }
            };
            if current.len() == level {
                return Ok(Some(current));
            }
        }
    }

    fn child_range(&self, path: &[usize]) -> Result<Range<usize>, TraversalError> {
        Ok(match step::node_at_path(&self.tree, path)? {
            Some(node) => self.tree.child_indices(&node),
            None => 0..0,
        })
    }

    /// Climb from the end of `path` until some ancestor level has a right neighbour, then
    /// descend leftmost towards `level`. The result is shorter than `level` when a node
    /// without children is hit on the way down.
    fn next_index_or_dead_end(&self, path: &[usize], level: usize) -> Result<Option<IndexPath>, TraversalError> {
        let mut active = path.to_vec();
        loop {
            let Some(last) = active.pop() else {
                return Ok(None);
            };
            let next = last + 1;
            if self.child_range(&active)?.contains(&next) {
                active.push(next);
                return self.descend_left_to(active, level).map(Some);
            }
        }
    }

    fn descend_left_to(&self, mut path: IndexPath, level: usize) -> Result<IndexPath, TraversalError> {
        while path.len() < level {
            match self.child_range(&path)?.next() {
                Some(first) => path.push(first),
                None => break,
            }
        }
        Ok(path)
    }
}

impl<T: Tree> Traversal for StatelessBfs<T> {
    type Source = T;

    fn tree(&self) -> &T {
        &self.tree
    }

    fn first_position(&self) -> Result<Position<T::Node>, TraversalError> {
        step::checked_root(&self.tree)?;
        Ok(Position::Path(Vec::new()))
    }

    fn step_position(&self, position: Position<T::Node>) -> Result<Option<Position<T::Node>>, TraversalError> {
        let path = position
            .into_index_path()
            .ok_or(TraversalError::UnsupportedPosition("native"))?;
        Ok(self.step_path(path)?.map(Position::Path))
    }
}
