//! A module containing [`Memory`], a manually allocated block of slots.
//!
//! [`Memory`] is also re-exported under the parent module.

mod memory;
mod tests;

pub use memory::*;
