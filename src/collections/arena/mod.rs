//! A module containing [`Arena`], the node pool shared by every linked structure in the crate, and
//! [`NodeId`], the index used in place of a pointer.
//!
//! Nodes are owned by the Arena alone. Links between them are plain [`NodeId`]s, so a structure can
//! hold as many links to a node as it likes (as a Graph does) without any shared ownership.

mod arena;
mod tests;

pub use arena::*;
