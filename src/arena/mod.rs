//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! tree structure with stored parent and sibling links.

pub mod directed;

pub use directed::{ArenaIndex, ArenaNode, ArenaTree};
