#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_alloc_and_get() {
    let mut arena = Arena::new();
    let a = arena.alloc("a");
    let b = arena.alloc("b");
    let c = arena.alloc("c");

    assert_eq!(arena.len(), 3);
    assert_eq!((a.address(), b.address(), c.address()), (0, 1, 2));
    assert_eq!(arena.get(b), Some(&"b"));
    assert_eq!(arena[c], "c");

    arena[a] = "A";
    assert_eq!(arena.get(a), Some(&"A"));
    assert_eq!(a.to_string(), "#0");
}

#[test]
fn test_release_reuses_addresses() {
    let mut arena = Arena::new();
    let ids: [NodeId; 4] = [10, 11, 12, 13].map(|value| arena.alloc(value));

    assert_eq!(arena.release(ids[1]), Some(11));
    assert_eq!(arena.release(ids[1]), None, "Releasing twice should be a no-op.");
    assert!(!arena.contains(ids[1]));
    assert_eq!(arena.len(), 3);

    let reused = arena.alloc(20);
    assert_eq!(reused, ids[1], "A released address should be handed out again.");
    let fresh = arena.alloc(30);
    assert_eq!(fresh.address(), 4, "Fresh addresses follow once none are vacant.");

    assert!(
        arena.iter().map(|(_, value)| *value).eq([10, 20, 12, 13, 30]),
        "Iteration should follow address order."
    );

    assert_panics!({
        let mut arena = Arena::new();
        let id = arena.alloc(0_u8);
        arena.release(id);
        let _ = arena[id];
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut arena = Arena::new();
    for _ in 0..5 {
        arena.alloc(counter.clone());
    }
    let id = arena.alloc(counter.clone());
    drop(arena.release(id));
    assert_eq!(counter.dropped(), 1);

    drop(arena);
    assert_eq!(counter.dropped(), 6, "Every live node should be dropped with the Arena.");
}
