//! A module containing [`HashTable`] and the sparse address space it stores values in.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod address_space;
mod hash_table;
mod tests;

pub use address_space::*;
pub use hash_table::*;
