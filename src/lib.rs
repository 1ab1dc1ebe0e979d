//! ## About
//!
//! Generic traversal of tree-shaped data. Any type implementing [Tree] can be walked
//! pre-order ([PreOrderDfs], with an optional descend filter), post-order ([PostOrderDfs]),
//! leaves only ([Leaves]) or level by level ([StatelessBfs]), and rebuilt or rewritten with
//! the [treemap] and [treemap_mut] folds.
//!
//! A tree type tells the traversals what it can do through associated constants on [Tree]:
//! whether nodes are addressed by index path or by handle, and whether parent and sibling
//! links are stored. The traversal picks its [Position] encoding from these once, when it is
//! constructed. Trees without stored links are walked on index paths or on a stack of
//! ancestor handles; trees that store both links are walked on their own handles.
//!
//! ```
//! use arboretum::{nested, Nested, PostOrderDfs, Traversal};
//!
//! let tree = nested!([1, [2, 3]]);
//! let visited: Vec<&Nested<i32>> = PostOrderDfs::new(&tree).nodes().collect::<Result<_, _>>()?;
//! assert_eq!(visited.last(), Some(&&tree));
//! # Ok::<(), arboretum::TraversalError>(())
//! ```
//!
//! [Nested] (arrays of arrays) and [ArenaTree] (arena allocated, with stored links) are
//! provided as ready-made trees.
//!
//! ## Naming conventions
//! * Traits – substantives naming the capability (`Tree`, `TreeMut`, `Traversal`)
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             are substantives (i.e., omit a `get_` prefix) much like the standard library.
//!             Positional variants carry a `_position` suffix

pub mod arena;
pub mod climb;
pub mod errors;
pub mod iterable_tree;
pub mod nested;
pub mod position;
pub mod rewrite;
pub mod siblings;
pub mod traverse;
pub mod utils;

pub use arena::{ArenaIndex, ArenaNode, ArenaTree};
pub use climb::{ascend, descend};
pub use errors::TraversalError;
pub use iterable_tree::{Addressing, Capabilities, Links, Representation, Tree, TreeMut};
pub use nested::{Indexed, Nested};
pub use position::{IndexPath, NodeStack, Position};
pub use rewrite::{treemap, treemap_mut, treemap_mut_filtered};
pub use siblings::{next_sibling, prev_sibling};
pub use traverse::{step::descend_left, Leaves, PostOrderDfs, PreOrderDfs, StatelessBfs, Traversal, Visit, Walk};
pub use utils::{is_descendant, tree_breadth, tree_height, tree_size};
