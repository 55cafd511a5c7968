//! The data structures themselves.
//!
//! # Method
//! [`contiguous`] holds the flat memory primitives, everything else builds on top of them.
//! [`arena`] is shared by the node based structures: [`graph`], [`linked`] and [`tree`].

#[cfg(feature = "arena")]
pub mod arena;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "graph")]
pub mod graph;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
