//! Tree collection types: a general [`Tree`] where any node may have any number of children, and
//! the ordered [`BinarySearchTree`].

pub mod binary_search;
pub mod rooted;

#[doc(inline)]
pub use binary_search::BinarySearchTree;
#[doc(inline)]
pub use rooted::Tree;
