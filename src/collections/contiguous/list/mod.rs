//! A module containing [`List`] and associated types.
//!
//! Currently, the only other included types are [`Iter`] and [`IntoIter`] for borrowed and owned
//! iteration over a List.
//!
//! [`List`] is also re-exported under the parent module.

mod iter;
mod list;

pub use iter::*;
pub use list::*;
