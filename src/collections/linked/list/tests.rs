#![cfg(test)]

use super::*;
use crate::collections::contiguous::List;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

/// Walks the chain by hand, returning the number of links followed before reaching the end.
fn chain_length<T>(list: &LinkedList<T>) -> usize {
    let mut steps = 0;
    let mut current = list.head;
    while let Some(id) = current {
        current = list.nodes[id].next;
        steps += 1;
        assert!(steps <= list.len(), "The chain should never be longer than the length.");
    }
    steps
}

fn values<T: Copy>(list: &LinkedList<T>) -> List<T> {
    list.iter().copied().collect()
}

#[test]
fn test_get() {
    let list: LinkedList<_> = (0..5).collect();
    for position in 0..5 {
        assert_eq!(list.get(position), &position);
    }
    assert_eq!(list.try_get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(list.front(), Some(&0));

    assert_panics!({
        let list: LinkedList<u8> = LinkedList::new();
        list.get(0);
    }, contains "Index 0 out of bounds for collection with 0 elements!");
}

#[test]
fn test_add() {
    let mut list = LinkedList::new();
    list.add(2, 0);
    list.add(0, 0);
    list.add(1, 1);
    list.add(3, 3);
    assert_eq!(values(&list), (0..4).collect());
    assert_eq!(list.len(), 4);

    assert_eq!(
        list.try_add(9, 5),
        Err(IndexOutOfBounds { index: 4, len: 4 }),
        "Adding past the end should fail looking up the previous node."
    );
    assert_eq!(list.len(), 4, "A failed add shouldn't change the length.");
    assert_eq!(chain_length(&list), 4);

    if let Ok(value) = list.try_get_mut(2) {
        *value = 20;
    }
    assert_eq!(values(&list), [0, 1, 20, 3].into_iter().collect());
}

#[test]
fn test_remove() {
    let mut list: LinkedList<_> = (0..5).collect();

    assert_eq!(list.remove(0), 0, "Removing position 0 should advance the head.");
    assert_eq!(list.remove(1), 2, "Removing from the middle should skip one node.");
    assert_eq!(list.remove(2), 4, "Removing the last node should leave its predecessor last.");
    assert_eq!(values(&list), [1, 3].into_iter().collect());
    assert_eq!(chain_length(&list), 2);

    assert_eq!(
        list.try_remove(2),
        Err(LinkedListError::IndexOutOfBounds(IndexOutOfBounds { index: 2, len: 2 })),
        "Removing at the length should fail rather than dereference a missing node."
    );
    assert_eq!(values(&list), [1, 3].into_iter().collect(), "A failed remove shouldn't mutate.");

    assert_eq!(list.remove(1), 3);
    assert_eq!(list.remove(0), 1);
    assert!(list.is_empty());
    assert_eq!(list.head, None);

    let error = list.try_remove(0).unwrap_err();
    assert!(error.is_empty_list(), "Removing from an empty list should report EmptyList.");
    assert!(matches!(EmptyList::try_from(error), Ok(EmptyList)));

    assert_panics!({
        let mut list: LinkedList<u8> = LinkedList::new();
        list.remove(0);
    }, contains "Removing from an empty list!");
}

#[test]
fn test_chain_invariant() {
    // A fixed pseudo-random sequence of valid operations.
    let mut list = LinkedList::new();
    let mut seed = 0x2545_f491_u32;
    for step in 0..200_u32 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        let position = seed as usize % (list.len() + 1);
        if seed % 3 == 0 && !list.is_empty() {
            list.remove(position.min(list.len() - 1));
        } else {
            list.add(step, position);
        }

        assert_eq!(
            chain_length(&list),
            list.len(),
            "Walking from the head should take exactly len steps."
        );
        assert_eq!(list.nodes.len(), list.len(), "The arena should hold exactly len nodes.");
    }
}

#[test]
fn test_slots_are_reused() {
    let mut list: LinkedList<_> = (0..4).collect();
    list.remove(1);
    list.remove(1);
    list.add(10, 1);
    list.add(11, 1);

    assert_eq!(values(&list), [0, 11, 10, 3].into_iter().collect());
    assert_eq!(list.nodes.fresh, 4, "Released nodes should be reused before fresh ones.");
}

#[test]
fn test_iterators_and_drop() {
    let list: LinkedList<_> = "abc".chars().collect();
    assert_eq!(list.iter().len(), 3);
    assert!(list.contains(&'b'));
    assert_eq!(format!("{list:?}"), "['a', 'b', 'c']");
    assert!(list.into_iter().eq("abc".chars()));

    let counter = CountedDrop::new();
    let mut list = LinkedList::new();
    for _ in 0..6 {
        list.push_front(counter.clone());
    }
    list.pop_front();
    list.remove(2);
    assert_eq!(counter.dropped(), 2);

    let mut iter = list.into_iter();
    iter.next();
    drop(iter);
    assert_eq!(counter.dropped(), 6, "Every value should be dropped exactly once.");

    let mut list: LinkedList<_> = (0..3).collect();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.pop_front(), None);
}
