use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use crate::collections::arena::NodeId;

pub(crate) type Link = Option<NodeId>;

/// A single value in a [`BinarySearchTree`](super::BinarySearchTree) and links to its lesser and
/// greater children.
pub struct SearchNode<T> {
    pub(crate) value: T,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<T> SearchNode<T> {
    pub(crate) const fn leaf(value: T) -> SearchNode<T> {
        SearchNode {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the value held by the node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// The root of the subtree holding every value less than this one.
    pub const fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The root of the subtree holding every value greater than this one.
    pub const fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Returns the branch that a value comparing as `side` to this node belongs under.
    pub(crate) const fn branch(&self, side: Ordering) -> Link {
        match side {
            Ordering::Less => self.left,
            Ordering::Greater => self.right,
            Ordering::Equal => None,
        }
    }

    /// Returns the branch that a value comparing as `side` to this node belongs under. Equal
    /// values have no branch of their own and are given the right one.
    pub(crate) const fn branch_mut(&mut self, side: Ordering) -> &mut Link {
        match side {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        }
    }
}

impl<T: Debug> Debug for SearchNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
