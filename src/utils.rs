//! Whole-tree measurements built on the traversals.

use crate::{ascend, traverse::step, Leaves, PreOrderDfs, Traversal, TraversalError, Tree};
use itertools::Itertools;

/// Number of nodes
pub fn tree_size<T: Tree>(tree: T) -> Result<usize, TraversalError> {
    PreOrderDfs::new(tree).nodes().fold_ok(0, |count, _| count + 1)
}

/// Length of the longest path from the root to a leaf (0 for a single node)
pub fn tree_height<T: Tree>(tree: T) -> Result<usize, TraversalError> {
    let traversal = Leaves::new(tree);
    traversal
        .iter()
        .map(|visit| visit.and_then(|(position, _)| step::depth(traversal.tree(), &position)))
        .fold_ok(0, usize::max)
}

/// Number of leaves
pub fn tree_breadth<T: Tree>(tree: T) -> Result<usize, TraversalError> {
    Leaves::new(tree).nodes().fold_ok(0, |count, _| count + 1)
}

/// Whether `ancestor` lies strictly above `node`. Requires stored parent links.
pub fn is_descendant<T>(tree: &T, node: &T::Node, ancestor: &T::Node) -> Result<bool, TraversalError>
where
    T: Tree,
    T::Node: PartialEq,
{
    if node == ancestor {
        return Ok(false);
    }
    let reached = ascend(tree, node.clone(), |current| current != ancestor)?;
    Ok(reached == *ancestor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nested, ArenaIndex, ArenaTree};

    #[test_log::test]
    fn measurements() {
        let tree = nested!([1, [2, [3, 4]], []]);
        assert_eq!(tree_size(&tree).unwrap(), 8);
        assert_eq!(tree_height(&tree).unwrap(), 3);
        assert_eq!(tree_breadth(&tree).unwrap(), 5);
        assert_eq!(tree_height(tree.indexed()).unwrap(), 3);

        let single = nested!(1);
        assert_eq!(tree_size(&single).unwrap(), 1);
        assert_eq!(tree_height(&single).unwrap(), 0);
        assert_eq!(tree_breadth(&single).unwrap(), 1);
    }

    #[test]
    fn descendants_in_arena() {
        let mut tree = ArenaTree::new();
        let root = tree.set_root((), 'r');
        let a = tree.add((), 'a', &root).unwrap();
        tree.add((), 'b', &root).unwrap();
        tree.add((), 'c', &a).unwrap();
        let index = |id: char| tree.node_by_id(&id).unwrap().index();

        assert!(is_descendant(&&tree, &index('c'), &index('a')).unwrap());
        assert!(is_descendant(&&tree, &index('c'), &ArenaIndex(0)).unwrap());
        assert!(!is_descendant(&&tree, &index('c'), &index('b')).unwrap());
        assert!(!is_descendant(&&tree, &index('a'), &index('a')).unwrap());
        assert!(!is_descendant(&&tree, &ArenaIndex(0), &index('a')).unwrap());
        assert_eq!(tree_height(&tree).unwrap(), 2);
    }
}
