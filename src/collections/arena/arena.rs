use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

use derive_more::Display;

use crate::collections::contiguous::{Memory, Stack};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

const MIN_SIZE: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A stable index identifying a node within an [`Arena`].
///
/// An id stays valid until its node is released, after which the Arena may hand the same address
/// out again.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("#{_0}")]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the address of the node within its Arena.
    pub const fn address(self) -> usize {
        self.0
    }
}

/// A flat pool of nodes, backed by [`Memory`] and keyed by [`NodeId`].
///
/// Released addresses are kept on a [`Stack`] and reused by subsequent allocations, most recently
/// released first.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `alloc` | `O(1)`* |
/// | `release` | `O(1)` |
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* If the Arena has to grow, `alloc` will take `O(n)`.
pub struct Arena<N> {
    pub(crate) memory: Memory<N>,
    /// The first address which has never been handed out.
    pub(crate) fresh: usize,
    pub(crate) vacant: Stack<usize>,
    pub(crate) len: usize,
}

impl<N> Arena<N> {
    /// Creates a new, empty Arena without allocating.
    pub const fn new() -> Arena<N> {
        Arena {
            memory: Memory::new(),
            fresh: 0,
            vacant: Stack::new(),
            len: 0,
        }
    }

    /// Returns the number of live nodes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Arena holds no live nodes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves `node` into the Arena, returning the id it can be found under.
    ///
    /// # Panics
    /// Panics if the memory layout of the Arena would have a size that exceeds [`isize::MAX`].
    pub fn alloc(&mut self, node: N) -> NodeId {
        let address = match self.vacant.pop() {
            Some(address) => address,
            None => {
                if self.fresh == self.memory.size() {
                    let new_size = (self.memory.size().saturating_mul(GROWTH_FACTOR)).max(MIN_SIZE);
                    self.memory.resize(new_size);
                }
                self.fresh += 1;
                self.fresh - 1
            },
        };

        self.memory.swap(address, Some(node));
        self.len += 1;
        NodeId(address)
    }

    /// Removes the node with the provided id from the Arena and returns it, or None if the id
    /// doesn't refer to a live node.
    pub fn release(&mut self, id: NodeId) -> Option<N> {
        let node = self.memory.take(id.0)?;
        self.vacant.push(id.0);
        self.len -= 1;
        Some(node)
    }

    /// Returns a reference to the node with the provided id, if it is live.
    pub fn get(&self, id: NodeId) -> Option<&N> {
        self.memory.get(id.0)
    }

    /// Returns a mutable reference to the node with the provided id, if it is live.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.memory.get_mut(id.0)
    }

    /// Returns true if the provided id refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.memory.is_occupied(id.0)
    }

    /// Returns an iterator over every live node and its id, in address order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NodeId, &N)> + '_ {
        (0..self.fresh).filter_map(|address| {
            self.memory.get(address).map(|node| (NodeId(address), node))
        })
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &Self::Output {
        let len = self.fresh;
        self.get(id).ok_or(IndexOutOfBounds { index: id.0, len }).throw()
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        let len = self.fresh;
        self.get_mut(id).ok_or(IndexOutOfBounds { index: id.0, len }).throw()
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Debug> Debug for Arena<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
