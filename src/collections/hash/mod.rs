//! Hash-based collection types.

pub mod table;

#[doc(inline)]
pub use table::HashTable;
