use std::fmt::{self, Debug, Formatter};

use super::{Address, AddressSpace};

/// A mapping from string keys to values, where each key is hashed directly to one [`Address`].
///
/// There is no collision resolution: the table only ever stores values, never keys, so two keys
/// which hash to the same address share a single slot and the later [`set`](HashTable::set)
/// silently overwrites the earlier one. This is a known degradation of the structure rather than a
/// bug, and it is what makes every operation constant time.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `k`: The length of the key.
///
/// | Method | Complexity |
/// |-|-|
/// | `hash_key` | `O(k)` |
/// | `get` | `O(k)` |
/// | `set` | `O(k)` |
/// | `remove` | `O(k)` |
/// | `len` | `O(1)` |
///
/// Treating the key length as bounded, all of these are `O(1)`.
pub struct HashTable<V> {
    pub(crate) memory: AddressSpace<V>,
}

impl<V> HashTable<V> {
    /// Creates a new, empty HashTable.
    pub fn new() -> HashTable<V> {
        HashTable {
            memory: AddressSpace::new(),
        }
    }

    /// Hashes `key` into an [`Address`].
    ///
    /// Starting from zero, each UTF-16 code unit of the key is folded in as
    /// `hash = (hash << 5) - hash + code`, with 32-bit wrapping arithmetic. The shift and subtract
    /// is a multiplication by 31. The result is reproducible, but far from collision free.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::hash::HashTable;
    /// assert_eq!(HashTable::<()>::hash_key(""), 0);
    /// assert_eq!(HashTable::<()>::hash_key("abc"), 96354);
    /// assert_eq!(HashTable::<()>::hash_key("xyz"), 119193);
    /// assert_eq!(HashTable::<()>::hash_key("Aa"), HashTable::<()>::hash_key("BB"));
    /// ```
    pub fn hash_key(key: &str) -> Address {
        key.encode_utf16().fold(0, |hash: Address, code| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(Address::from(code))
        })
    }

    /// Returns the number of occupied addresses. Colliding keys only count once.
    pub const fn len(&self) -> usize {
        self.memory.len()
    }

    /// Returns true if no address is occupied.
    pub const fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Returns a reference to whatever occupies the address of `key`. If another key collides with
    /// `key`, this may be that key's value.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.memory.get(Self::hash_key(key))
    }

    /// Returns a mutable reference to whatever occupies the address of `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.memory.get_mut(Self::hash_key(key))
    }

    /// Returns true if the address of `key` is occupied.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Stores `value` at the address of `key`, unconditionally overwriting any existing occupant,
    /// which is returned.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::hash::HashTable;
    /// let mut table = HashTable::new();
    /// table.set("Aa", 1);
    /// // "BB" collides with "Aa", so it takes over the same address.
    /// assert_eq!(table.set("BB", 2), Some(1));
    /// assert_eq!(table.get("Aa"), Some(&2));
    /// ```
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        let address = Self::hash_key(key);
        let previous = self.memory.put(address, value);

        if previous.is_some() {
            log::trace!("key {key:?} overwrote the occupant of address {address}");
        }
        previous
    }

    /// Clears the address of `key` if it is occupied, returning the value that was there.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.memory.clear(Self::hash_key(key))
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for HashTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
