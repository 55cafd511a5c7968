use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The contents of a single address in [`Memory`]: either vacant or holding one value.
pub type Slot<T> = Option<T>;

/// A fixed-size block of slots, allocated manually and addressed by position. Every slot is
/// always initialized, as either vacant or populated, so reading any address within the size is
/// sound.
///
/// This is the flat memory model that every other collection in the crate is built on. It doesn't
/// track which slots are populated, that is left to the owner.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The size of the Memory.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `take` | `O(1)` |
/// | `size` | `O(1)` |
/// | `resize` | `O(n)` |
pub struct Memory<T> {
    pub(crate) ptr: NonNull<Slot<T>>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Memory<T> {
    /// Creates a new Memory with size 0. No allocation is made until it is resized.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::Memory;
    /// let memory: Memory<u8> = Memory::new();
    /// assert_eq!(memory.size(), 0);
    /// assert_eq!(memory.get(0), None);
    /// ```
    pub const fn new() -> Memory<T> {
        Memory {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a new Memory with `size` vacant slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_size(size: usize) -> Memory<T> {
        let ptr = Self::make_ptr(Self::make_layout(size));

        for address in 0..size {
            // SAFETY: The allocation is valid for size slots and address < size.
            unsafe { ptr.add(address).write(None) }
        }

        Memory {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of slots in the Memory, whether they are populated or not.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns a reference to the value at `address`, or None if the slot is vacant or outside of
    /// the Memory.
    pub fn get(&self, address: usize) -> Option<&T> {
        if address >= self.size {
            return None;
        }

        // SAFETY: address < size, so the slot lies inside of the allocation and was initialized
        // when the Memory was allocated or resized.
        unsafe { self.ptr.add(address).as_ref() }.as_ref()
    }

    /// Returns a mutable reference to the value at `address`, or None if the slot is vacant or
    /// outside of the Memory.
    pub fn get_mut(&mut self, address: usize) -> Option<&mut T> {
        if address >= self.size {
            return None;
        }

        // SAFETY: As in get, with exclusivity guaranteed by the &mut self borrow.
        unsafe { self.ptr.add(address).as_mut() }.as_mut()
    }

    /// Returns true if the slot at `address` holds a value.
    pub fn is_occupied(&self, address: usize) -> bool {
        self.get(address).is_some()
    }

    /// Exchanges the contents of the slot at `address` with `slot`, returning what was there
    /// before.
    ///
    /// # Panics
    /// Panics if `address` is outside of the Memory.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::Memory;
    /// let mut memory = Memory::with_size(2);
    /// assert_eq!(memory.swap(1, Some('a')), None);
    /// assert_eq!(memory.swap(1, Some('b')), Some('a'));
    /// assert_eq!(memory.swap(1, None), Some('b'));
    /// ```
    pub fn swap(&mut self, address: usize, slot: Slot<T>) -> Slot<T> {
        mem::replace(self.slot_mut(address), slot)
    }

    /// Vacates the slot at `address`, returning its value if there was one. Addresses outside of
    /// the Memory are always vacant.
    pub fn take(&mut self, address: usize) -> Slot<T> {
        if address >= self.size {
            return None;
        }

        self.slot_mut(address).take()
    }

    /// Returns the value at `address`, populating the slot with the result of `f` first if it is
    /// vacant.
    ///
    /// # Panics
    /// Panics if `address` is outside of the Memory.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, address: usize, f: F) -> &mut T {
        self.slot_mut(address).get_or_insert_with(f)
    }

    /// Returns an iterator over every slot, vacant or not, in address order.
    pub fn slots(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        (0..self.size).map(|address| self.get(address))
    }

    /// Reallocates the Memory with `new_size` slots. Values in truncated slots are dropped and any
    /// new slots start vacant.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn resize(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }

        let old_layout = Self::make_layout(self.size);
        let new_layout = Self::make_layout(new_size);

        for address in new_size..self.size {
            // SAFETY: address < size, so the slot is inside of the allocation and initialized. It
            // is never read again because the size is reduced below.
            unsafe { ptr::drop_in_place(self.ptr.add(address).as_ptr()) }
        }

        let ptr = match (old_layout.size(), new_layout.size()) {
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: The old layout is non-zero, so ptr was allocated with it.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, bytes) => NonNull::new(
                // SAFETY: ptr was allocated with old_layout, bytes is non-zero and make_layout
                // has checked that it doesn't overflow isize::MAX.
                unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, bytes) }.cast()
            ).unwrap_or_else(|| alloc::handle_alloc_error(new_layout)),
        };

        for address in self.size..new_size {
            // SAFETY: The new allocation is valid for new_size slots and address < new_size.
            unsafe { ptr.add(address).write(None) }
        }

        self.ptr = ptr;
        self.size = new_size;
    }

    /// Returns a mutable reference to the slot at `address` itself.
    ///
    /// # Panics
    /// Panics if `address` is outside of the Memory.
    pub(crate) fn slot_mut(&mut self, address: usize) -> &mut Slot<T> {
        self.check_address(address);

        // SAFETY: address has just been checked to be inside of the allocation, every slot inside
        // of it is initialized and &mut self guarantees exclusivity.
        unsafe { self.ptr.add(address).as_mut() }
    }

    /// Checks that the provided address is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided address is out of bounds.
    pub(crate) fn check_address(&self, address: usize) {
        if address >= self.size {
            Err(IndexOutOfBounds {
                index: address,
                len: self.size,
            }).throw()
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size`
    /// slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<Slot<T>>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<Slot<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Memory<T> {
    fn drop(&mut self) {
        // Resizing to zero drops every populated slot and releases the allocation.
        self.resize(0);
    }
}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Memory<T> {
    fn clone(&self) -> Self {
        let mut memory = Memory::with_size(self.size);

        for (address, value) in self.slots().enumerate() {
            memory.swap(address, value.cloned());
        }

        memory
    }
}

impl<T: Debug> Debug for Memory<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots()).finish()
    }
}

// SAFETY: Memory uniquely owns its allocation, so sending it is the same as sending the values.
unsafe impl<T: Send> Send for Memory<T> {}
// SAFETY: Memory's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs.
unsafe impl<T: Sync> Sync for Memory<T> {}
