use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

use super::Iter;
use crate::collections::contiguous::Memory;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// An ordered sequence of values, addressed by a zero-based position and backed by [`Memory`].
///
/// The List tracks its length explicitly and upholds that every address in `0..len` is populated,
/// with no gaps. Reading an address outside of that range just produces [`None`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `unshift` | `O(n)` |
/// | `shift` | `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `contains` | `O(n)` |
///
/// \* If the List doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct List<T> {
    pub(crate) memory: Memory<T>,
    pub(crate) len: usize,
}

impl<T> List<T> {
    /// Creates a new List with length and capacity 0. Memory will be allocated on the first push.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::List;
    /// let list: List<u8> = List::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 0);
    /// ```
    pub const fn new() -> List<T> {
        List {
            memory: Memory::new(),
            len: 0,
        }
    }

    /// Creates a new List with capacity exactly equal to the provided value, allowing values to be
    /// added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> List<T> {
        List {
            memory: Memory::with_size(cap),
            len: 0,
        }
    }

    /// Returns the length of the List.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the List contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of addresses available before the List has to reallocate.
    pub const fn cap(&self) -> usize {
        self.memory.size()
    }

    /// Returns a reference to the value at `address`, or None if the address is beyond the
    /// populated range. This is never an error.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::List;
    /// let mut list = List::new();
    /// list.push('a');
    /// assert_eq!(list.get(0), Some(&'a'));
    /// assert_eq!(list.get(1), None);
    /// ```
    pub fn get(&self, address: usize) -> Option<&T> {
        if address >= self.len {
            return None;
        }
        self.memory.get(address)
    }

    /// Returns a mutable reference to the value at `address`, or None if the address is beyond
    /// the populated range.
    pub fn get_mut(&mut self, address: usize) -> Option<&mut T> {
        if address >= self.len {
            return None;
        }
        self.memory.get_mut(address)
    }

    /// Returns a reference to the value at address 0, if the List isn't empty.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the value at the last populated address, if the List isn't empty.
    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Pushes the provided value onto the end of the List, at address `len`.
    ///
    /// # Panics
    /// Panics if the memory layout of the List would have a size that exceeds [`isize::MAX`].
    pub fn push(&mut self, value: T) {
        self.reserve_one();
        self.memory.swap(self.len, Some(value));
        self.len += 1;
    }

    /// Removes the value at the last populated address and returns it, or does nothing and
    /// returns None if the List is empty.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::List;
    /// let mut list: List<_> = (0..3).collect();
    /// assert_eq!(list.pop(), Some(2));
    /// assert_eq!(list.pop(), Some(1));
    /// assert_eq!(list.pop(), Some(0));
    /// assert_eq!(list.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.memory.take(self.len)
    }

    /// Adds the provided value at address 0, carrying every existing value one address to the
    /// right first.
    ///
    /// # Panics
    /// Panics if the memory layout of the List would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::List;
    /// let mut list: List<_> = "bcd".chars().collect();
    /// list.unshift('a');
    /// assert_eq!(list, "abcd".chars().collect());
    /// ```
    pub fn unshift(&mut self, value: T) {
        self.reserve_one();

        // Each swap leaves the carried value behind and picks up the one that was there. The last
        // swap lands on the vacant address len, handing back None.
        let mut carried = Some(value);
        for address in 0..=self.len {
            carried = self.memory.swap(address, carried);
        }

        self.len += 1;
    }

    /// Removes the value at address 0 and moves every subsequent value one address to the left,
    /// or does nothing and returns None if the List is empty.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::List;
    /// let mut list: List<_> = "abc".chars().collect();
    /// assert_eq!(list.shift(), Some('a'));
    /// assert_eq!(list, "bc".chars().collect());
    /// ```
    pub fn shift(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.memory.take(0);

        // Taking from address + 1 vacates it, so the last populated address is already clear once
        // the loop ends.
        for address in 0..self.len - 1 {
            let next = self.memory.take(address + 1);
            self.memory.swap(address, next);
        }

        self.len -= 1;
        value
    }

    /// Inserts the provided value at the given index, moving every following value one address to
    /// the right. An index equal to the length appends.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] rather than panicking
    /// if the index is greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        self.reserve_one();

        let mut carried = Some(value);
        for address in index..=self.len {
            carried = self.memory.swap(address, carried);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the value at the provided index, moving every following value one address to the
    /// left to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the value at the provided index, returning an [`Err`] rather than panicking if the
    /// index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let out_of_bounds = IndexOutOfBounds {
            index,
            len: self.len,
        };

        if index >= self.len {
            return Err(out_of_bounds);
        }

        let value = self.memory.take(index).ok_or(out_of_bounds)?;

        for address in index..self.len - 1 {
            let next = self.memory.take(address + 1);
            self.memory.swap(address, next);
        }

        self.len -= 1;
        Ok(value)
    }

    /// Drops every value in the List, keeping its capacity.
    pub fn clear(&mut self) {
        for address in 0..self.len {
            self.memory.take(address);
        }
        self.len = 0;
    }

    /// Ensures that the List has capacity to hold an additional `extra` elements.
    ///
    /// # Panics
    /// Panics if the new capacity overflows, or if the memory layout of the List would have a size
    /// that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap > self.cap() {
            self.memory.resize(new_cap);
        }
    }

    /// Shrinks the List so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.memory.resize(self.len);
    }

    /// Returns an iterator over references to every value, from address 0 upwards.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Grows the underlying Memory if there is no room for one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the List would have a size that exceeds [`isize::MAX`].
    pub(crate) fn reserve_one(&mut self) {
        if self.len == self.cap() {
            let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_CAP);
            self.memory.resize(new_cap);
        }
    }
}

impl<T: PartialEq> List<T> {
    /// Returns true if any value in the List is equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len }).throw()
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len }).throw()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = List::with_cap(self.len);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
