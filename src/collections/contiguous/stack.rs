//! A module containing [`Stack`], a List restricted to one end.

use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;

use super::List;
use super::list::Iter;

/// An ordered sequence where values are only ever added to or removed from the top.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* See [`List::push`].
pub struct Stack<T> {
    pub(crate) list: List<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            list: List::new(),
        }
    }

    /// Returns the number of values on the Stack.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Stack has no values.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes the provided value onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.list.push(value);
    }

    /// Removes the top value and returns it, or does nothing and returns None if the Stack is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.pop(), Some(1));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop()
    }

    /// Returns a reference to the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.last()
    }

    /// Returns an iterator over the values on the Stack, from the top down.
    pub fn iter(&self) -> Rev<Iter<'_, T>> {
        self.list.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every value in order, leaving the last one on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            list: List::from_iter(iter),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.peek())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_order() {
        for n in 0..8 {
            let mut stack = Stack::new();
            for value in 0..n {
                stack.push(value);
            }
            assert_eq!(stack.len(), n);

            for expected in (0..n).rev() {
                assert_eq!(stack.peek(), Some(&expected));
                assert_eq!(stack.pop(), Some(expected), "Pops should come out in reverse order.");
            }

            assert!(stack.is_empty());
        }
    }

    #[test]
    fn test_empty() {
        let mut stack = Stack::<char>::new();
        assert_eq!(stack.pop(), None, "Popping an empty Stack should be a no-op.");
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.len(), 0, "An empty pop shouldn't change the length.");
    }

    #[test]
    fn test_iter_from_top() {
        let stack: Stack<_> = "abc".chars().collect();
        assert!(stack.iter().copied().eq("cba".chars()));
        assert_eq!(stack.peek(), Some(&'c'));
    }
}
