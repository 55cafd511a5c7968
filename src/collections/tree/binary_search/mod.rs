//! A module containing [`BinarySearchTree`] and associated types.
//!
//! Currently, the only other included types are [`SearchNode`], [`Probe`] for observing the cost
//! of a search and [`Iter`] for in-order iteration.

mod binary_search_tree;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use iter::*;
pub use node::*;
