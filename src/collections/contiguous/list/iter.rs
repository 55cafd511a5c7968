use std::iter::FusedIterator;

use super::List;
use crate::collections::contiguous::Memory;

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            list: self,
            front: 0,
            back: self.len,
        }
    }
}

/// A borrowed iterator over the values of a [`List`], in address order.
pub struct Iter<'a, T> {
    pub(crate) list: &'a List<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let value = self.list.get(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.list.get(self.back)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let List { memory, len } = self;
        IntoIter {
            memory,
            front: 0,
            back: len,
        }
    }
}

/// An owned iterator over the values of a [`List`]. Values which aren't yielded are dropped along
/// with the iterator.
pub struct IntoIter<T> {
    // Taking values out of the Memory leaves their slots vacant, so dropping it only drops what's
    // left.
    pub(crate) memory: Memory<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let value = self.memory.take(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.memory.take(self.back)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}
