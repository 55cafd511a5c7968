//! A module containing [`Queue`], a List which is added to at the back and removed from at the
//! front.

use std::fmt::{self, Debug, Formatter};

use super::List;
use super::list::Iter;

/// An ordered sequence with insertion at the back and removal at the front.
///
/// Removal uses [`List::shift`], so every dequeue moves all of the remaining values.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`* |
/// | `dequeue` | `O(n)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* See [`List::push`].
pub struct Queue<T> {
    pub(crate) list: List<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            list: List::new(),
        }
    }

    /// Returns the number of values in the Queue.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Queue has no values.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds the provided value to the back of the Queue.
    pub fn enqueue(&mut self, value: T) {
        self.list.push(value);
    }

    /// Removes the value at the front and returns it, or does nothing and returns None if the
    /// Queue is empty.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue("first");
    /// queue.enqueue("second");
    /// assert_eq!(queue.dequeue(), Some("first"));
    /// assert_eq!(queue.peek(), Some(&"second"));
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.shift()
    }

    /// Returns a reference to the value at the front without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.first()
    }

    /// Returns an iterator over the values in the Queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueues every value in order, leaving the first one at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: List::from_iter(iter),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front", &self.peek())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        for n in 0..8 {
            let mut queue = Queue::new();
            for value in 0..n {
                queue.enqueue(value);
            }
            assert_eq!(queue.len(), n);

            for expected in 0..n {
                assert_eq!(queue.peek(), Some(&expected));
                assert_eq!(
                    queue.dequeue(),
                    Some(expected),
                    "Dequeues should come out in insertion order."
                );
            }

            assert!(queue.is_empty());
        }
    }

    #[test]
    fn test_empty() {
        let mut queue = Queue::<char>::new();
        assert_eq!(queue.dequeue(), None, "Dequeuing an empty Queue should be a no-op.");
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_interleaved() {
        let mut queue: Queue<_> = (0..3).collect();
        assert_eq!(queue.dequeue(), Some(0));
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(1));
        assert!(queue.iter().copied().eq([2, 3]));
    }
}
