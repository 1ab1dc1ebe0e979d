//! Lazy traversals over any [Tree].
//!
//! A traversal value holds the tree and nothing else; the traversal state is the
//! [Position] threaded through [Traversal::step_position]. [Traversal::iter] wraps this
//! protocol into a standard [Iterator].

pub mod breadth;
pub mod depth;
pub mod step;

pub use breadth::StatelessBfs;
pub use depth::{Leaves, PostOrderDfs, PreOrderDfs};

use crate::{Position, TraversalError, Tree};
use std::iter::FusedIterator;
use tracing::debug;

/// Handle type of the tree a traversal walks
pub type NodeOf<I> = <<I as Traversal>::Source as Tree>::Node;

/// A visited node together with the position it was reached at
pub type Visit<N> = (Position<N>, N);

/// Common protocol of all traversal kinds.
pub trait Traversal {
    type Source: Tree;

    fn tree(&self) -> &Self::Source;

    /// Position of the first visited node
    fn first_position(&self) -> Result<Position<NodeOf<Self>>, TraversalError>;

    /// Position following `position`, `Ok(None)` when the traversal is exhausted
    fn step_position(
        &self,
        position: Position<NodeOf<Self>>,
    ) -> Result<Option<Position<NodeOf<Self>>>, TraversalError>;

    fn resolve(&self, position: &Position<NodeOf<Self>>) -> Result<NodeOf<Self>, TraversalError> {
        step::resolve(self.tree(), position)
    }

    fn start(&self) -> Result<Visit<NodeOf<Self>>, TraversalError> {
        let position = self.first_position()?;
        let node = self.resolve(&position)?;
        Ok((position, node))
    }

    fn advance(&self, position: Position<NodeOf<Self>>) -> Result<Option<Visit<NodeOf<Self>>>, TraversalError> {
        match self.step_position(position)? {
            Some(next) => {
                let node = self.resolve(&next)?;
                Ok(Some((next, node)))
            }
            None => Ok(None),
        }
    }

    fn iter(&self) -> Walk<'_, Self>
    where
        Self: Sized,
    {
        Walk::new(self)
    }

    /// Visited nodes without their positions
    fn nodes(&self) -> impl Iterator<Item = Result<NodeOf<Self>, TraversalError>>
    where
        Self: Sized,
    {
        self.iter().map(|visit| visit.map(|(_, node)| node))
    }
}

enum WalkState<P> {
    Start,
    At(P),
    Done,
}

/// Iterator over the visits of a [Traversal].
///
/// Yields `Err` at most once; the walk is finished afterwards.
pub struct Walk<'a, I: Traversal> {
    traversal: &'a I,
    state: WalkState<Position<NodeOf<I>>>,
}

impl<'a, I: Traversal> Walk<'a, I> {
    pub fn new(traversal: &'a I) -> Self {
        Walk {
            traversal,
            state: WalkState::Start,
        }
    }
}

impl<'a, I: Traversal> Iterator for Walk<'a, I> {
    type Item = Result<Visit<NodeOf<I>>, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = match std::mem::replace(&mut self.state, WalkState::Done) {
            WalkState::Start => {
                debug!(traversal = std::any::type_name::<I>(), "starting traversal");
                self.traversal.start().map(Some)
            }
            WalkState::At(position) => self.traversal.advance(position),
            WalkState::Done => return None,
        };
        match visit {
            Ok(Some((position, node))) => {
                self.state = WalkState::At(position.clone());
                Some(Ok((position, node)))
            }
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<'a, I: Traversal> FusedIterator for Walk<'a, I> {}
