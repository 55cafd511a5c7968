//! A module containing [`Graph`], a directed graph of values, and associated types.
//!
//! Nodes are never removed from a Graph, so a line can't outlive the node it points to.

mod graph;
mod iter;

pub use graph::*;
pub use iter::*;
#[doc(inline)]
pub use crate::util::error::MissingNode;
