#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_slots_start_vacant() {
    let memory = Memory::<u32>::with_size(4);
    assert_eq!(memory.size(), 4);
    assert!(
        memory.slots().all(|slot| slot.is_none()),
        "Every slot of a fresh allocation should be vacant."
    );
    assert_eq!(memory.get(4), None, "Reading outside of the Memory should be vacant.");
}

#[test]
fn test_swap_and_take() {
    let mut memory = Memory::with_size(3);
    assert_eq!(memory.swap(0, Some("a")), None);
    assert_eq!(memory.swap(2, Some("c")), None);
    assert!(memory.is_occupied(0));
    assert!(!memory.is_occupied(1));

    assert_eq!(memory.take(0), Some("a"));
    assert_eq!(memory.take(0), None, "A taken slot should be left vacant.");
    assert_eq!(memory.take(10), None, "Taking outside of the Memory should be a no-op.");
    assert_eq!(*memory.get_or_insert_with(1, || "b"), "b");
    assert_eq!(*memory.get_or_insert_with(1, || "z"), "b", "A populated slot shouldn't change.");

    assert_panics!({
        let mut memory = Memory::with_size(3);
        memory.swap(3, Some(1));
    }, contains "Index 3 out of bounds");
}

#[test]
fn test_resize() {
    let mut memory = Memory::new();
    memory.resize(2);
    memory.swap(0, Some(0_usize));
    memory.swap(1, Some(1));

    memory.resize(8);
    assert_eq!(memory.get(0), Some(&0), "Growing should keep existing values.");
    assert_eq!(memory.get(1), Some(&1), "Growing should keep existing values.");
    assert!(memory.slots().skip(2).all(|slot| slot.is_none()), "New slots should be vacant.");

    let counter = CountedDrop::new();
    let mut memory = Memory::with_size(10);
    for (address, value) in iter::repeat_with(|| counter.clone()).take(10).enumerate() {
        memory.swap(address, Some(value));
    }

    memory.resize(4);
    assert_eq!(
        counter.dropped(),
        6,
        "6 values should have been dropped during shrinking reallocation."
    );

    memory.resize(0);
    assert_eq!(counter.dropped(), 10, "Resizing to 0 should drop everything.");

    assert_panics!({
        let mut memory = Memory::<u64>::new();
        memory.resize(isize::MAX as usize);
    }, contains "Capacity overflow");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut memory = Memory::with_size(6);
    for address in [0, 2, 5] {
        memory.swap(address, Some(counter.clone()));
    }

    drop(memory);
    assert_eq!(counter.dropped(), 3, "Only populated slots should be dropped.");
}

#[test]
fn test_clone() {
    let mut memory = Memory::with_size(3);
    memory.swap(1, Some(String::from("one")));

    let cloned = memory.clone();
    assert_eq!(cloned.size(), 3);
    assert_eq!(cloned.get(0), None);
    assert_eq!(cloned.get(1).map(String::as_str), Some("one"));
}
