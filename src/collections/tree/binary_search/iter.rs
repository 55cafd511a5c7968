use std::iter::FusedIterator;

use super::{BinarySearchTree, Link};
use crate::collections::arena::NodeId;
use crate::collections::contiguous::Stack;

/// An iterator over the values of a [`BinarySearchTree`] in ascending order.
///
/// The ancestors still to be yielded are kept on a [`Stack`], so the iterator never recurses.
pub struct Iter<'a, T: Ord> {
    pub(crate) tree: &'a BinarySearchTree<T>,
    pub(crate) pending: Stack<NodeId>,
    pub(crate) current: Link,
    pub(crate) left: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    pub(crate) fn new(tree: &'a BinarySearchTree<T>) -> Iter<'a, T> {
        Iter {
            tree,
            pending: Stack::new(),
            current: tree.root,
            left: tree.len(),
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.pending.push(id);
            self.current = self.tree.nodes.get(id)?.left;
        }

        let node = self.tree.nodes.get(self.pending.pop()?)?;
        self.current = node.right;
        self.left = self.left.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
