use std::iter::FusedIterator;

use super::{Graph, GraphNode};
use crate::collections::arena::NodeId;
use crate::collections::contiguous::list;

/// An iterator over the nodes at the end of a node's lines. See [`Graph::lines_of`] and
/// [`Graph::lines`].
pub struct Lines<'a, T> {
    pub(crate) graph: &'a Graph<T>,
    pub(crate) ids: list::Iter<'a, NodeId>,
}

impl<'a, T> Iterator for Lines<'a, T> {
    type Item = &'a GraphNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // Nodes are never removed, so every id resolves.
        let id = self.ids.next()?;
        self.graph.node(*id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<T> DoubleEndedIterator for Lines<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.ids.next_back()?;
        self.graph.node(*id)
    }
}

impl<T> FusedIterator for Lines<'_, T> {}

impl<T> ExactSizeIterator for Lines<'_, T> {}
