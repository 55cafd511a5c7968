use std::fmt::{self, Debug, Formatter};

use super::{Iter, Link, Node};
use crate::collections::arena::{Arena, NodeId};
use crate::collections::contiguous::List;
#[doc(inline)]
pub use crate::util::error::{EmptyList, IndexOutOfBounds, LinkedListError};
use crate::util::result::ResultExtension;

/// A singly linked chain of values, starting from a head.
///
/// Nodes live in an [`Arena`] and each one links to the next by [`NodeId`]. Walking from the head
/// exactly `len` times always reaches the end of the chain: there are no cycles and no gaps.
/// Positions can't be jumped to, every positional operation walks the chain from the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(i)` |
/// | `add` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `contains` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: Link,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            nodes: Arena::new(),
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the value at the head of the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        Some(&self.nodes.get(self.head?)?.value)
    }

    /// Returns a reference to the value at the provided `position`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `position` is out of bounds of the LinkedList.
    pub fn get(&self, position: usize) -> &T {
        self.try_get(position).throw()
    }

    /// Returns a reference to the value at the provided `position`, following the chain from the
    /// head. Returns an [`Err`] if the position is out of bounds, rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::LinkedList;
    /// # use data_structures::collections::linked::list::IndexOutOfBounds;
    /// let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.try_get(2), Ok(&3));
    /// assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn try_get(&self, position: usize) -> Result<&T, IndexOutOfBounds> {
        let id = self.seek(position)?;
        Ok(&self.nodes[id].value)
    }

    /// Returns a mutable reference to the value at the provided `position`, panicking on a
    /// failure.
    ///
    /// # Panics
    /// Panics if `position` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, position: usize) -> &mut T {
        self.try_get_mut(position).throw()
    }

    /// Returns a mutable reference to the value at the provided `position`, returning an [`Err`]
    /// if the position is out of bounds.
    pub fn try_get_mut(&mut self, position: usize) -> Result<&mut T, IndexOutOfBounds> {
        let id = self.seek(position)?;
        Ok(&mut self.nodes[id].value)
    }

    /// Adds the provided value at the head of the list.
    pub fn push_front(&mut self, value: T) {
        let id = self.nodes.alloc(Node {
            value,
            next: self.head,
        });
        self.head = Some(id);
        self.len += 1;
    }

    /// Removes the value at the head of the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.try_remove(0).ok()
    }

    /// Adds the provided value so that it ends up at `position`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `position` is greater than the length of the LinkedList.
    pub fn add(&mut self, value: T, position: usize) {
        self.try_add(value, position).throw()
    }

    /// Adds the provided value so that it ends up at `position`, returning an [`Err`] rather
    /// than panicking on a failure.
    ///
    /// Position 0 makes the value the new head. Any other position splices the value in after the
    /// node at `position - 1`, which has to exist, so `position` may be at most the length.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.add('c', 0);
    /// list.add('a', 0);
    /// list.add('b', 1);
    /// list.add('d', 3);
    /// assert!(list.iter().eq(&['a', 'b', 'c', 'd']));
    /// assert!(list.try_add('f', 5).is_err());
    /// ```
    pub fn try_add(&mut self, value: T, position: usize) -> Result<(), IndexOutOfBounds> {
        match position.checked_sub(1) {
            None => self.push_front(value),
            Some(prev_position) => {
                let prev = self.seek(prev_position)?;
                let next = self.nodes[prev].next;

                let id = self.nodes.alloc(Node {
                    value,
                    next,
                });
                self.nodes[prev].next = Some(id);
                self.len += 1;
            },
        }
        Ok(())
    }

    /// Removes the value at `position` and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the LinkedList is empty, or if `position` is out of bounds.
    pub fn remove(&mut self, position: usize) -> T {
        self.try_remove(position).throw()
    }

    /// Removes the value at `position` and returns it, returning an [`Err`] rather than panicking
    /// on a failure. Nothing is modified on a failure.
    ///
    /// Position 0 advances the head. Any other position re-links the node at `position - 1` to
    /// skip the removed node, which for the last node leaves its predecessor as the new end.
    ///
    /// # Errors
    /// - [`EmptyList`] if the list has no head.
    /// - [`IndexOutOfBounds`] if `position` is not less than the length.
    pub fn try_remove(&mut self, position: usize) -> Result<T, LinkedListError> {
        let head = self.head.ok_or(EmptyList)?;
        let out_of_bounds = IndexOutOfBounds {
            index: position,
            len: self.len,
        };

        if position >= self.len {
            return Err(out_of_bounds.into());
        }

        let removed = match position.checked_sub(1) {
            None => {
                let node = self.unlink(head)?;
                self.head = node.next;
                node
            },
            Some(prev_position) => {
                let prev = self.seek(prev_position)?;
                let target = self.nodes[prev].next.ok_or(out_of_bounds)?;

                let node = self.unlink(target)?;
                self.nodes[prev].next = node.next;
                node
            },
        };

        self.len -= 1;
        Ok(removed.value)
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over references to every value, from the head onwards.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Follows the chain from the head to the node at `position`, returning its id.
    pub(crate) fn seek(&self, position: usize) -> Result<NodeId, IndexOutOfBounds> {
        let out_of_bounds = IndexOutOfBounds {
            index: position,
            len: self.len,
        };

        if position >= self.len {
            return Err(out_of_bounds);
        }

        let mut current = self.head;
        for _ in 0..position {
            current = current.and_then(|id| self.nodes.get(id)?.next);
        }
        current.ok_or(out_of_bounds)
    }

    /// Releases the node with the provided id from the Arena, handing it back.
    pub(crate) fn unlink(&mut self, id: NodeId) -> Result<Node<T>, IndexOutOfBounds> {
        let len = self.len;
        self.nodes.release(id).ok_or(IndexOutOfBounds {
            index: id.address(),
            len,
        })
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if any value in the list is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Pushing to the front is the only constant time insertion, so build the chain backwards.
        let values: List<T> = iter.into_iter().collect();
        let mut list = LinkedList::new();

        for value in values.into_iter().rev() {
            list.push_front(value);
        }

        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
