use std::fmt::{self, Debug, Formatter};

use super::Lines;
use crate::collections::arena::{Arena, NodeId};
use crate::collections::contiguous::List;
use crate::util::error::MissingNode;
use crate::util::result::ResultExtension;

/// A single value in a [`Graph`] and the directed lines leading out of it.
pub struct GraphNode<T> {
    pub(crate) value: T,
    pub(crate) lines: List<NodeId>,
}

impl<T> GraphNode<T> {
    /// Returns the value held by the node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the ids of the nodes this node has lines to, in the order the lines were added.
    /// Duplicate lines appear once per call to [`Graph::add_line`].
    pub fn line_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.lines.iter().copied()
    }

    /// Returns the number of lines leading out of the node.
    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl<T: Debug> Debug for GraphNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphNode")
            .field("value", &self.value)
            .field("lines", &self.lines)
            .finish()
    }
}

/// An unordered collection of nodes connected by directed lines.
///
/// There is no index over the values, so every lookup by value is a linear scan over the nodes.
/// Lines are [`NodeId`]s into the Graph's own [`Arena`] and own nothing: the Graph owns every node.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes in the Graph.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_node` | `O(1)` |
/// | `find` | `O(n)` |
/// | `add_line` | `O(n)` |
/// | `len` | `O(1)` |
pub struct Graph<T> {
    pub(crate) nodes: Arena<GraphNode<T>>,
}

impl<T> Graph<T> {
    /// Creates a new Graph with no nodes.
    pub const fn new() -> Graph<T> {
        Graph {
            nodes: Arena::new(),
        }
    }

    /// Returns the number of nodes in the Graph.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the Graph has no nodes.
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node holding `value`, without any lines, and returns the new number of nodes.
    ///
    /// Values don't have to be unique, although lookups by value will only ever see the first
    /// node holding it.
    pub fn add_node(&mut self, value: T) -> usize {
        self.nodes.alloc(GraphNode {
            value,
            lines: List::new(),
        });
        self.len()
    }

    /// Returns the node with the provided id.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode<T>> {
        self.nodes.get(id)
    }

    /// Returns an iterator over every node, in the order they were added.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GraphNode<T>> + '_ {
        self.nodes.iter().map(|(_, node)| node)
    }

    /// Returns an iterator over the nodes that the lines of the node with the provided id lead
    /// to, or None if the id doesn't refer to a node of this Graph.
    pub fn lines_of(&self, id: NodeId) -> Option<Lines<'_, T>> {
        let node = self.nodes.get(id)?;
        Some(Lines {
            graph: self,
            ids: node.lines.iter(),
        })
    }
}

impl<T: PartialEq> Graph<T> {
    /// Returns the id of the first node holding `value`, scanning every node in order.
    pub fn find_id(&self, value: &T) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.value == *value)
            .map(|(id, _)| id)
    }

    /// Returns the first node holding `value`, or None if there isn't one.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::graph::Graph;
    /// let mut graph = Graph::new();
    /// graph.add_node(1);
    /// graph.add_node(2);
    /// graph.add_line(&1, &2);
    ///
    /// let one = graph.find_id(&1).unwrap();
    /// let two = graph.lines_of(one).unwrap().next().unwrap();
    /// assert_eq!(two.value(), &2);
    /// ```
    pub fn find(&self, value: &T) -> Option<&GraphNode<T>> {
        self.nodes.get(self.find_id(value)?)
    }

    /// Adds a directed line from the node holding `start` to the node holding `end`, panicking on
    /// a failure.
    ///
    /// # Panics
    /// Panics if either endpoint doesn't exist.
    pub fn add_line(&mut self, start: &T, end: &T) {
        self.try_add_line(start, end).throw()
    }

    /// Adds a directed line from the node holding `start` to the node holding `end`, returning an
    /// [`Err`] rather than panicking if either endpoint doesn't exist. Nothing is modified on a
    /// failure.
    ///
    /// Lines aren't deduplicated, adding the same line twice leaves two identical lines.
    pub fn try_add_line(&mut self, start: &T, end: &T) -> Result<(), MissingNode> {
        let (start_id, end_id) = MissingNode::check(self.find_id(start), self.find_id(end))?;

        match self.nodes.get_mut(start_id) {
            Some(start_node) => {
                start_node.lines.push(end_id);
                Ok(())
            },
            None => Err(MissingNode::Start),
        }
    }

    /// Returns an iterator over the nodes which the first node holding `value` has lines to, or
    /// None if no node holds `value`.
    pub fn lines(&self, value: &T) -> Option<Lines<'_, T>> {
        self.lines_of(self.find_id(value)?)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Graph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.nodes.iter().map(|(id, node)| {
                let ends: List<_> = self
                    .lines_of(id)
                    .into_iter()
                    .flatten()
                    .map(GraphNode::value)
                    .collect();
                (&node.value, ends)
            }))
            .finish()
    }
}
