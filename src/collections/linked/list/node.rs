use crate::collections::arena::NodeId;

/// A link to the next node in the chain, or None at the end.
pub(crate) type Link = Option<NodeId>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link,
}
