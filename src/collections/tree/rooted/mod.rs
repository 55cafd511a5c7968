//! A module containing [`Tree`], a rooted tree without any ordering rules, and [`TreeNode`].

mod tests;
mod tree;

pub use tree::*;
