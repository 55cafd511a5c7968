#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_hash_key() {
    assert_eq!(HashTable::<()>::hash_key(""), 0);
    assert_eq!(HashTable::<()>::hash_key("a"), 97);
    assert_eq!(HashTable::<()>::hash_key("abc"), 96354);
    assert_eq!(
        HashTable::<()>::hash_key("polygenelubricants"),
        i32::MIN,
        "Hashing should wrap around 32 bits into negative addresses."
    );
    assert_eq!(
        HashTable::<()>::hash_key("😀"),
        1772899,
        "Characters outside of the BMP should hash as two UTF-16 code units."
    );
    assert_eq!(
        HashTable::<()>::hash_key("hello world, this is long"),
        HashTable::<()>::hash_key("hello world, this is long"),
        "Hashing should be deterministic."
    );
}

#[test]
fn test_get_set_remove() {
    let mut table = HashTable::new();
    assert_eq!(table.get("abc"), None);

    assert_eq!(table.set("abc", 1), None);
    assert_eq!(table.set("xyz", 2), None);
    assert_eq!(table.set("polygenelubricants", 3), None);
    assert_eq!(table.len(), 3);

    assert_eq!(table.get("abc"), Some(&1));
    assert_eq!(table.get("xyz"), Some(&2));
    assert_eq!(table.get("polygenelubricants"), Some(&3));

    assert_eq!(table.set("abc", 10), Some(1), "Setting a key again should overwrite it.");
    if let Some(value) = table.get_mut("xyz") {
        *value *= 10;
    }
    assert_eq!(table.get("xyz"), Some(&20));

    assert_eq!(table.remove("abc"), Some(10));
    assert_eq!(table.remove("abc"), None, "Removing a vacant address should be a no-op.");
    assert_eq!(table.remove("never set"), None);
    assert!(!table.contains_key("abc"));
    assert!(table.contains_key("polygenelubricants"));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_hash_collisions() {
    assert_eq!(
        HashTable::<()>::hash_key("Aa"),
        HashTable::<()>::hash_key("BB"),
        "These keys should be known to collide."
    );

    let mut table = HashTable::new();
    table.set("Aa", "first");
    table.set("BB", "second");

    assert_eq!(
        table.get("Aa"),
        Some(&"second"),
        "A colliding set should silently overwrite the earlier key's value."
    );
    assert_eq!(table.len(), 1, "Colliding keys should share one address.");

    table.remove("AaBB");
    assert_eq!(table.get("Aa"), Some(&"second"), "Removing another address shouldn't interfere.");

    table.set("BBBB", "third");
    assert_eq!(table.get("AaAa"), Some(&"third"));
    assert_eq!(table.remove("AaBB"), Some("third"), "Any colliding key should clear the address.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut table = HashTable::new();
    for key in ["a", "b", "c", "polygenelubricants"] {
        table.set(key, counter.clone());
    }
    let previous = table.set("a", counter.clone());
    assert!(previous.is_some());
    assert_eq!(counter.dropped(), 0, "An overwritten value is handed back, not dropped.");

    drop(previous);
    drop(table);
    assert_eq!(counter.dropped(), 5, "Dropping the table should drop every occupant.");
}
