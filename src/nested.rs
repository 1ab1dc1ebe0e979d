/*! Nested sequences ("arrays of arrays") as trees.
 *
 * `&Nested<T>` is a regular tree: nodes are references into the structure and parents are
 * reconstructed from the traversal's node stack. [Indexed] exposes the same data as an indexed
 * tree whose nodes are resolved by index path on every step.
 */

use crate::{Addressing, TraversalError, Tree, TreeMut};

/// A leaf value or an ordered list of subtrees
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    Branch(Vec<Nested<T>>),
}

/// Build a [Nested] from bracket syntax: `nested!([1, [2, 3]])`. Leaves must be single
/// tokens (literals or identifiers), use parentheses for anything longer.
#[macro_export]
macro_rules! nested {
    ([$($child:tt),* $(,)?]) => {
        $crate::Nested::Branch(vec![$($crate::nested!($child)),*])
    };
    ($leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn branch(children: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::Branch(children.into_iter().collect())
    }

    pub fn children(&self) -> &[Nested<T>] {
        match self {
            Nested::Leaf(_) => &[],
            Nested::Branch(children) => children,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::Branch(_) => None,
        }
    }

    /// Subtree at `path`
    pub fn get(&self, path: &[usize]) -> Option<&Nested<T>> {
        path.iter().try_fold(self, |node, &index| node.children().get(index))
    }

    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut Nested<T>> {
        path.iter().try_fold(self, |node, &index| match node {
            Nested::Leaf(_) => None,
            Nested::Branch(children) => children.get_mut(index),
        })
    }

    /// View as an indexed tree
    pub fn indexed(&self) -> Indexed<'_, T> {
        Indexed(self)
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<'a, T> Tree for &'a Nested<T> {
    type Node = &'a Nested<T>;

    fn root(&self) -> Self::Node {
        *self
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        Nested::children(*node).iter().collect()
    }

    fn child_count(&self, node: &Self::Node) -> usize {
        Nested::children(*node).len()
    }

    fn child(&self, node: &Self::Node, index: usize) -> Option<Self::Node> {
        Nested::children(*node).get(index)
    }
}

/// A [Nested] addressed by index paths
pub struct Indexed<'a, T>(&'a Nested<T>);

impl<'a, T> Tree for Indexed<'a, T> {
    type Node = &'a Nested<T>;

    const ADDRESSING: Addressing = Addressing::Indexed;

    fn root(&self) -> Self::Node {
        self.0
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        Nested::children(*node).iter().collect()
    }

    fn child_count(&self, node: &Self::Node) -> usize {
        Nested::children(*node).len()
    }

    fn child(&self, node: &Self::Node, index: usize) -> Option<Self::Node> {
        Nested::children(*node).get(index)
    }

    fn node_at(&self, path: &[usize]) -> Result<Option<Self::Node>, TraversalError> {
        Ok(self.0.get(path))
    }
}

impl<T: PartialEq> TreeMut for Nested<T> {
    type Value = Nested<T>;

    fn get_at(&self, path: &[usize]) -> Option<&Self::Value> {
        self.get(path)
    }

    fn child_count_at(&self, path: &[usize]) -> Option<usize> {
        self.get(path).map(|node| node.children().len())
    }

    fn set_at(&mut self, path: &[usize], value: Self::Value) -> Result<(), TraversalError> {
        let node = self
            .get_mut(path)
            .ok_or_else(|| TraversalError::InvalidPath(path.to_vec()))?;
        *node = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_and_lookup() {
        let tree = nested!([1, [2, 3], []]);
        assert_eq!(
            tree,
            Nested::branch([
                Nested::leaf(1),
                Nested::branch([Nested::from(2), Nested::from(3)]),
                Nested::Branch(vec![])
            ])
        );
        assert_eq!(tree.get(&[1, 1]).and_then(Nested::value), Some(&3));
        assert_eq!(tree.get(&[0, 0]), None);
        assert_eq!(tree.get(&[]), Some(&tree));
        assert_eq!(tree.indexed().node_at(&[2]).unwrap(), Some(&Nested::Branch(vec![])));
    }

    #[test]
    fn set_at_replaces_subtrees() {
        let mut tree = nested!([1, [2, 3]]);
        tree.set_at(&[1, 0], nested!([4, 5])).unwrap();
        assert_eq!(tree, nested!([1, [[4, 5], 3]]));
        assert_eq!(tree.child_count_at(&[1, 0]), Some(2));

        tree.set_at(&[], nested!(0)).unwrap();
        assert_eq!(tree, nested!(0));
        assert_eq!(
            tree.set_at(&[3], nested!(1)),
            Err(TraversalError::InvalidPath(vec![3]))
        );
    }
}
