//! Sibling lookup on nodes of trees with stored parent links.
//!
//! Trees that declare [Links::Stored] siblings answer directly. Otherwise the parent's
//! children are scanned for the node, which therefore needs handles comparing by identity.

use crate::{Links, TraversalError, Tree};

pub fn next_sibling<T>(tree: &T, node: &T::Node) -> Result<Option<T::Node>, TraversalError>
where
    T: Tree,
    T::Node: PartialEq,
{
    match T::SIBLING_LINKS {
        Links::Stored => tree.next_sibling(node),
        Links::Implicit => scan(tree, node, |index| index.checked_add(1)),
    }
}

pub fn prev_sibling<T>(tree: &T, node: &T::Node) -> Result<Option<T::Node>, TraversalError>
where
    T: Tree,
    T::Node: PartialEq,
{
    match T::SIBLING_LINKS {
        Links::Stored => tree.prev_sibling(node),
        Links::Implicit => scan(tree, node, |index| index.checked_sub(1)),
    }
}

fn scan<T>(tree: &T, node: &T::Node, offset: fn(usize) -> Option<usize>) -> Result<Option<T::Node>, TraversalError>
where
    T: Tree,
    T::Node: PartialEq,
{
    let Some(parent) = tree.parent(node)? else {
        return Ok(None);
    };
    let mut siblings = tree.children(&parent);
    let index = siblings
        .iter()
        .position(|sibling| sibling == node)
        .ok_or(TraversalError::TreeInconsistency)?;
    Ok(match offset(index) {
        Some(target) if target < siblings.len() => Some(siblings.swap_remove(target)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArenaIndex, ArenaTree};

    /// Arena with its sibling links hidden, so siblings are found by scanning
    struct ParentsOnly<'a>(&'a ArenaTree<u8, u8>);

    impl<'a> Tree for ParentsOnly<'a> {
        type Node = ArenaIndex;
        const PARENT_LINKS: Links = Links::Stored;

        fn root(&self) -> ArenaIndex {
            (&self.0).root()
        }

        fn children(&self, node: &ArenaIndex) -> Vec<ArenaIndex> {
            (&self.0).children(node)
        }

        fn parent(&self, node: &ArenaIndex) -> Result<Option<ArenaIndex>, TraversalError> {
            (&self.0).parent(node)
        }
    }

    /// Reports a parent that does not list the node among its children
    struct Inconsistent;

    impl Tree for Inconsistent {
        type Node = u8;
        const PARENT_LINKS: Links = Links::Stored;

        fn root(&self) -> u8 {
            0
        }

        fn children(&self, node: &u8) -> Vec<u8> {
            if *node == 0 {
                vec![1, 2]
            } else {
                vec![]
            }
        }

        fn parent(&self, node: &u8) -> Result<Option<u8>, TraversalError> {
            Ok((*node != 0).then_some(0))
        }
    }

    fn tree() -> ArenaTree<u8, u8> {
        let mut tree = ArenaTree::new();
        let root = tree.set_root(0, 0);
        for id in 1..=3 {
            tree.add(id, id, &root).unwrap();
        }
        tree
    }

    #[test]
    fn stored_and_scanned_siblings_agree() {
        let tree = tree();
        let scanned = ParentsOnly(&tree);
        for index in (0..4).map(ArenaIndex) {
            assert_eq!(next_sibling(&&tree, &index), next_sibling(&scanned, &index));
            assert_eq!(prev_sibling(&&tree, &index), prev_sibling(&scanned, &index));
        }
        assert_eq!(next_sibling(&scanned, &ArenaIndex(1)).unwrap(), Some(ArenaIndex(2)));
        assert_eq!(next_sibling(&scanned, &ArenaIndex(3)).unwrap(), None);
        assert_eq!(prev_sibling(&scanned, &ArenaIndex(1)).unwrap(), None);
        assert_eq!(prev_sibling(&scanned, &ArenaIndex(0)).unwrap(), None);
    }

    #[test]
    fn missing_node_is_an_inconsistency() {
        assert_eq!(next_sibling(&Inconsistent, &1).unwrap(), Some(2));
        assert_eq!(next_sibling(&Inconsistent, &5), Err(TraversalError::TreeInconsistency));
    }
}
