//! A small library of foundational data structures, written from first principles.
//!
//! # Purpose
//! Each structure here exists to make the cost and failure behaviour of its operations visible.
//! Constant time access, linear shifting, hash collisions, pointer-chasing traversal and ordered
//! insertion are all implemented by hand so that they can be read, reasoned about and tested.
//!
//! # Method
//! Nothing here is built on [`Vec`] or [`std::collections`]. All storage bottoms out in
//! [`Memory`](collections::contiguous::Memory), a manually allocated block of slots. Node based
//! structures keep their nodes in an [`Arena`](collections::arena::Arena) and link them with
//! [`NodeId`](collections::arena::NodeId) indices rather than pointers, which keeps ownership
//! explicit: the arena owns every node, links own nothing.
//!
//! # Error Handling
//! Operations on an empty structure which have no meaningful result (popping an empty Stack,
//! shifting an empty List) return [`None`]. Misuse, such as reading past the end of a LinkedList
//! or drawing a line to a node that doesn't exist in a Graph, is reported with a strongly typed
//! error. Fallible methods come in pairs: a `try_` method returning a [`Result`] and a plain one
//! which panics with the error's message.
//!
//! # Logging
//! The [`log`] facade is used to report the two silent degradations the structures are known
//! for: a HashTable overwriting a colliding entry and a BinarySearchTree dropping a duplicate.
//! Nothing is logged unless the caller installs a logger.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
