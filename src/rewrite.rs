//! Tree-rewrite folds.
//!
//! [treemap] rebuilds a tree bottom-up from a post-order walk into any output type.
//! [treemap_mut] replaces nodes top-down in place while walking pre-order.

use crate::{
    traverse::step, Addressing, IndexPath, Position, PostOrderDfs, PreOrderDfs, Traversal, TraversalError, Tree,
    TreeMut,
};
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Fold a tree bottom-up. `f` receives every node's position, the node and the already
/// transformed children of that node (in order), and the value it returns for the root is
/// the result.
///
/// One buffer per depth collects transformed siblings until their parent is visited.
#[instrument(level = "debug", skip_all)]
pub fn treemap<T, U, F>(traversal: &PostOrderDfs<T>, mut f: F) -> Result<U, TraversalError>
where
    T: Tree,
    F: FnMut(&Position<T::Node>, &T::Node, Vec<U>) -> U,
{
    let mut buffers: Vec<Vec<U>> = Vec::new();
    for visit in traversal.iter() {
        let (position, node) = visit?;
        let depth = step::depth(traversal.tree(), &position)?;
        let children = buffers.get_mut(depth + 1).map(std::mem::take).unwrap_or_default();
        let element = f(&position, &node, children);
        if depth == 0 {
            return Ok(element);
        }
        if buffers.len() <= depth {
            buffers.resize_with(depth + 1, Vec::new);
        }
        buffers[depth].push(element);
    }
    Err(TraversalError::RootNotReached)
}

/// Replace every node by `f(node)` walking pre-order, writing back only values that changed.
///
/// Stepping continues from the replaced node, so the children of a replacement are visited
/// too. Replacing the root continues below the new root without applying `f` to it again.
pub fn treemap_mut<R, F>(tree: &mut R, f: F) -> Result<(), TraversalError>
where
    R: TreeMut,
    F: FnMut(&R::Value) -> R::Value,
{
    treemap_mut_filtered(tree, |_| true, f)
}

/// [treemap_mut] that does not descend below nodes rejected by `descend`. The filter sees
/// the node after it was replaced.
#[instrument(level = "debug", skip_all)]
pub fn treemap_mut_filtered<R, D, F>(tree: &mut R, descend: D, mut f: F) -> Result<(), TraversalError>
where
    R: TreeMut,
    D: Fn(&R::Value) -> bool,
    F: FnMut(&R::Value) -> R::Value,
{
    let mut path = IndexPath::new();
    loop {
        let current = tree
            .get_at(&path)
            .ok_or_else(|| TraversalError::InvalidPath(path.clone()))?;
        let replacement = f(current);
        if replacement != *current {
            trace!(?path, "replacing node");
            tree.set_at(&path, replacement)?;
            if path.is_empty() {
                debug!("root replaced, continuing below the new root");
            }
        }

        let view = PathView(&*tree);
        let filter = |at: &IndexPath| tree.get_at(at).is_some_and(&descend);
        let next = PreOrderDfs::with_filter(view, filter).step_position(Position::Path(path))?;
        match next.and_then(Position::into_index_path) {
            Some(next) => path = next,
            None => return Ok(()),
        }
    }
}

/// A [TreeMut] seen as an indexed tree whose node handles are the index paths themselves.
struct PathView<'r, R>(&'r R);

impl<'r, R: TreeMut> Tree for PathView<'r, R> {
    type Node = IndexPath;

    const ADDRESSING: Addressing = Addressing::Indexed;

    fn root(&self) -> IndexPath {
        IndexPath::new()
    }

    fn children(&self, node: &IndexPath) -> Vec<IndexPath> {
        (0..self.child_count(node))
            .map(|index| {
                let mut child = node.clone();
                child.push(index);
                child
            })
            .collect()
    }

    fn child_count(&self, node: &IndexPath) -> usize {
        self.0.child_count_at(node).unwrap_or(0)
    }

    fn child(&self, node: &IndexPath, index: usize) -> Option<IndexPath> {
        (index < self.child_count(node)).then(|| {
            let mut child = node.clone();
            child.push(index);
            child
        })
    }

    fn node_at(&self, path: &[usize]) -> Result<Option<IndexPath>, TraversalError> {
        Ok(self.0.get_at(path).map(|_| path.to_vec()))
    }
}
