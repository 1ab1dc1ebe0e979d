//! Provides the error type used throughout this crate.

use thiserror::Error;

/// Errors raised while traversing or rewriting a tree.
///
/// Reaching the end of a traversal is not an error; steppers report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// A node is missing from the children of the parent it reports.
    #[error("Tree inconsistency: node not found among the children of its parent")]
    TreeInconsistency,
    /// The tree declares (or the operation needs) a capability the tree type does not supply.
    #[error("Tree type does not supply the `{capability}` capability")]
    MissingCapability { capability: &'static str },
    #[error("Child index {index} is out of bound (node has {count} children)")]
    ChildOutOfBound { index: usize, count: usize },
    #[error("Index path {0:?} does not resolve to a node")]
    InvalidPath(Vec<usize>),
    /// A traversal was handed a position kind it does not step on.
    #[error("Traversal cannot step from a {0} position")]
    UnsupportedPosition(&'static str),
    #[error("Post-order traversal ended without visiting the root")]
    RootNotReached,
    // Errors raised by the arena adapter
    #[error("Node reference {0} is out of bound")]
    ReferenceOutOfBound(usize),
    #[error("Node not in tree: {0}")]
    UnknownNode(String),
    #[error("ID not unique: {0}")]
    NotUnique(String),
    #[error("No root node set")]
    RootNotSet,
}

impl TraversalError {
    pub(crate) fn missing(capability: &'static str) -> Self {
        TraversalError::MissingCapability { capability }
    }
}
