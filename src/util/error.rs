use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An operation addressed a position outside of the populated range of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of elements at the time of the failure.
    pub len: usize,
}

/// A memory layout would have exceeded [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A removal was attempted on a list without a head.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Removing from an empty list!")]
pub struct EmptyList;

/// A traversal was attempted on a tree without a root.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Traversing a tree without a root!")]
pub struct EmptyTree;

/// The endpoint(s) of a line which couldn't be found in a graph.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MissingNode {
    /// No node holds the start value.
    #[display("Both nodes need to exist, the start node is missing!")]
    Start,
    /// No node holds the end value.
    #[display("Both nodes need to exist, the end node is missing!")]
    End,
    /// Neither value is held by a node.
    #[display("Both nodes need to exist, neither could be found!")]
    Both,
}

impl MissingNode {
    /// Pairs up the results of looking up both endpoints of a line, reporting whichever are
    /// missing.
    pub fn check<S, E>(start: Option<S>, end: Option<E>) -> Result<(S, E), MissingNode> {
        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            (None, Some(_)) => Err(MissingNode::Start),
            (Some(_), None) => Err(MissingNode::End),
            (None, None) => Err(MissingNode::Both),
        }
    }
}

/// Any of the ways a [`LinkedList`](crate::collections::linked::LinkedList) operation can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum LinkedListError {
    /// The list had no head to remove.
    EmptyList(EmptyList),
    /// The position was beyond the end of the list.
    IndexOutOfBounds(IndexOutOfBounds),
}
