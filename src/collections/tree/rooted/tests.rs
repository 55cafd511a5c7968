#![cfg(test)]

use super::*;
use crate::collections::contiguous::List;
use crate::util::panic::assert_panics;

fn pre_order<T: Copy>(tree: &Tree<T>) -> List<T> {
    let mut values = List::new();
    tree.traverse(|node| values.push(*node.value()));
    values
}

#[test]
fn test_traverse_pre_order() {
    let mut tree = Tree::new();
    tree.add(1, &0);
    tree.add(2, &1);
    tree.add(3, &1);
    tree.add(4, &2);
    tree.add(5, &2);
    tree.add(6, &3);
    tree.add(7, &1);

    assert_eq!(
        pre_order(&tree),
        [1, 2, 4, 5, 3, 6, 7].into_iter().collect(),
        "Each node should be visited before its children, which are visited in order."
    );
}

#[test]
fn test_empty_tree() {
    let tree = Tree::<u8>::new();
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.try_traverse(|_| unreachable!()), Err(EmptyTree));

    assert_panics!({
        let tree = Tree::<u8>::new();
        tree.traverse(|_| {});
    }, contains "Traversing a tree without a root!");
}

#[test]
fn test_first_add_becomes_root() {
    let mut tree = Tree::new();
    let root = tree.add('r', &'x');
    assert!(root.is_some(), "The first node should be stored regardless of its parent.");
    assert_eq!(tree.root().map(TreeNode::value), Some(&'r'));
    assert_eq!(tree.root.map(|id| id.address()), root.map(|id| id.address()));

    assert_eq!(tree.add('o', &'x'), None, "Adding under a missing parent should store nothing.");
    assert_eq!(tree.nodes.len(), 1);
}

#[test]
fn test_duplicate_parents_share_the_child() {
    let mut tree = Tree::new();
    tree.add("root", &"");
    tree.add("dup", &"root");
    tree.add("other", &"root");
    tree.add("dup", &"other");

    let Some(leaf) = tree.add("leaf", &"dup") else {
        panic!("Both nodes holding \"dup\" should have matched.");
    };

    let parents = tree.nodes.iter().filter(|(_, node)| node.child_ids().any(|id| id == leaf));
    assert_eq!(parents.count(), 2, "The new node should be attached to every matching parent.");
    assert_eq!(tree.nodes.len(), 5, "The shared node should only be stored once.");

    assert_eq!(
        pre_order(&tree),
        ["root", "dup", "leaf", "other", "dup", "leaf"].into_iter().collect(),
        "A shared node should be visited once through each parent."
    );
}

#[test]
fn test_new_node_is_not_its_own_parent() {
    let mut tree = Tree::new();
    tree.add(5, &0);
    tree.add(5, &5);
    tree.add(5, &5);

    // The second add matches only the root, the third matches both existing nodes.
    assert_eq!(pre_order(&tree), [5, 5, 5, 5].into_iter().collect());
    assert_eq!(tree.root().map(TreeNode::child_count), Some(2));

    let mut tree = Tree::new();
    tree.add('a', &'a');
    let root = tree.root().map(TreeNode::value).copied();
    let children = tree.root().map(|root| tree.children(root).count());
    assert_eq!(root, Some('a'));
    assert_eq!(children, Some(0));
}

#[test]
fn test_debug() {
    let mut tree = Tree::new();
    tree.add(1, &0);
    tree.add(2, &1);
    tree.add(3, &2);
    tree.add(4, &1);

    assert_eq!(format!("{tree:?}"), "1\n└ 2\n  └ 3\n└ 4\n");
    assert_eq!(format!("{:?}", Tree::<u8>::new()), "-");
}

#[test]
fn test_traverse_deep_chain() {
    let mut tree = Tree::new();
    for value in 0..2_000_u32 {
        tree.add(value, &value.wrapping_sub(1));
    }

    let mut visited = 0;
    let mut previous = None;
    tree.traverse(|node| {
        assert_eq!(previous.map(|value| value + 1).unwrap_or(0), *node.value());
        previous = Some(*node.value());
        visited += 1;
    });
    assert_eq!(visited, 2_000, "Every node of the chain should be visited once.");
}
