//! Contiguous collection types, addressed by position in a flat block of memory.
//!
//! [`Memory`] is the allocation primitive for the whole crate. [`List`] adds an explicit count on
//! top of it, while [`Stack`] and [`Queue`] restrict a List to one or two ends.

pub mod list;
pub mod memory;
pub mod queue;
pub mod stack;

#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use memory::Memory;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
