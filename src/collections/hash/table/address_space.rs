use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::Memory;

/// A signed 32-bit address, as produced by [`HashTable::hash_key`](super::HashTable::hash_key).
pub type Address = i32;

const PAGE_SIZE: usize = 1 << u8::BITS;

type Page<V> = Memory<V>;

/// The full range of [`Address`]es, stored sparsely.
///
/// Materializing `2^32` slots isn't an option, so the space is a four level radix table: each byte
/// of the address, most significant first, selects a slot in a 256-slot page of [`Memory`]. Pages
/// are only allocated once something is written beneath them, and every access costs exactly four
/// page lookups regardless of how many values are stored.
pub struct AddressSpace<V> {
    pub(crate) root: Page<Page<Page<Page<V>>>>,
    pub(crate) len: usize,
}

impl<V> AddressSpace<V> {
    /// Creates a new AddressSpace, allocating only the root page.
    pub fn new() -> AddressSpace<V> {
        AddressSpace {
            root: Memory::with_size(PAGE_SIZE),
            len: 0,
        }
    }

    /// Returns the number of occupied addresses.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no address is occupied.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the occupant of `address`, if there is one.
    pub fn get(&self, address: Address) -> Option<&V> {
        let [a, b, c, d] = split(address);
        self.root.get(a)?.get(b)?.get(c)?.get(d)
    }

    /// Returns a mutable reference to the occupant of `address`, if there is one.
    pub fn get_mut(&mut self, address: Address) -> Option<&mut V> {
        let [a, b, c, d] = split(address);
        self.root.get_mut(a)?.get_mut(b)?.get_mut(c)?.get_mut(d)
    }

    /// Stores `value` at `address`, returning the previous occupant.
    pub fn put(&mut self, address: Address, value: V) -> Option<V> {
        let [a, b, c, d] = split(address);
        let previous = self.root
            .get_or_insert_with(a, new_page)
            .get_or_insert_with(b, new_page)
            .get_or_insert_with(c, new_page)
            .swap(d, Some(value));

        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Clears `address`, returning the previous occupant. Pages are kept even once they are empty.
    pub fn clear(&mut self, address: Address) -> Option<V> {
        let [a, b, c, d] = split(address);
        let previous = self.root.get_mut(a)?.get_mut(b)?.get_mut(c)?.take(d);

        if previous.is_some() {
            self.len -= 1;
        }
        previous
    }
}

impl<V> Default for AddressSpace<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for AddressSpace<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressSpace")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Splits an address into its four page indices, most significant byte first.
const fn split(address: Address) -> [usize; 4] {
    let [a, b, c, d] = address.to_be_bytes();
    [a as usize, b as usize, c as usize, d as usize]
}

fn new_page<T>() -> Page<T> {
    Memory::with_size(PAGE_SIZE)
}
