//! Linked collection types. Currently only the singly linked [`LinkedList`].

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
