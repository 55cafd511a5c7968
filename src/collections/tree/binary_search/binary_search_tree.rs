use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use super::{Iter, Link, SearchNode};
use crate::collections::arena::{Arena, NodeId};

/// The outcome of a search through a [`BinarySearchTree`], along with the number of nodes that
/// were compared against the value on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Whether an equal value was found.
    pub found: bool,
    /// The number of nodes compared against before the search ended.
    pub comparisons: usize,
}

/// A binary tree where every value in a node's left subtree is less than the node's own value and
/// every value in its right subtree is greater.
///
/// Values are unique: adding a value that is already present leaves the Tree unchanged. The Tree
/// doesn't rebalance itself, so adding values in sorted order produces a chain.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the BinarySearchTree.
/// - `h`: The height of the BinarySearchTree, between `log2(n)` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `contains` | `O(h)` |
/// | `add` | `O(h)` |
/// | `min`/`max` | `O(h)` |
/// | `len` | `O(1)` |
/// | `iter` | `O(n)` |
pub struct BinarySearchTree<T: Ord> {
    pub(crate) nodes: Arena<SearchNode<T>>,
    pub(crate) root: Link,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Returns the number of values in the BinarySearchTree.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the BinarySearchTree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node, if there is one.
    pub fn root(&self) -> Option<&SearchNode<T>> {
        self.nodes.get(self.root?)
    }

    /// Returns the node with the provided id.
    pub fn node(&self, id: NodeId) -> Option<&SearchNode<T>> {
        self.nodes.get(id)
    }

    /// Returns true if the BinarySearchTree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.probe(value).found
    }

    /// Searches for `value` from the root, descending left when it is less than a node and right
    /// when it is greater, and reports how many nodes it was compared against.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    ///
    /// let probe = tree.probe(&5);
    /// assert!(probe.found);
    /// assert_eq!(probe.comparisons, 3);
    ///
    /// assert!(!tree.probe(&8).found);
    /// ```
    pub fn probe(&self, value: &T) -> Probe {
        let mut comparisons = 0;
        let mut current = self.root;

        while let Some(node) = current.and_then(|id| self.nodes.get(id)) {
            comparisons += 1;
            match value.cmp(&node.value) {
                Ordering::Equal => return Probe { found: true, comparisons },
                side => current = node.branch(side),
            }
        }

        Probe { found: false, comparisons }
    }

    /// Adds `value` to the BinarySearchTree as a new leaf, returning true if it was stored. If an
    /// equal value is already present, the Tree is left unchanged and false is returned.
    pub fn add(&mut self, value: T) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc(SearchNode::leaf(value)));
            return true;
        };

        let (parent, side) = loop {
            let node = &mut self.nodes[current];
            let side = value.cmp(&node.value);
            if side.is_eq() {
                log::debug!("BinarySearchTree dropped a duplicate value");
                return false;
            }

            match *node.branch_mut(side) {
                Some(next) => current = next,
                None => break (current, side),
            }
        };

        let id = self.nodes.alloc(SearchNode::leaf(value));
        *self.nodes[parent].branch_mut(side) = Some(id);
        true
    }

    /// Returns the least value in the BinarySearchTree, found by following left children from the
    /// root.
    pub fn min(&self) -> Option<&T> {
        self.extreme(|node| node.left)
    }

    /// Returns the greatest value in the BinarySearchTree, found by following right children from
    /// the root.
    pub fn max(&self) -> Option<&T> {
        self.extreme(|node| node.right)
    }

    fn extreme(&self, branch: impl Fn(&SearchNode<T>) -> Link) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(next) = branch(node).and_then(|id| self.nodes.get(id)) {
            node = next;
        }
        Some(&node.value)
    }

    /// Returns an iterator over the values of the BinarySearchTree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Debug> BinarySearchTree<T> {
    fn draw(&self, link: Link) -> String {
        let Some(node) = link.and_then(|id| self.nodes.get(id)) else {
            return String::from("-");
        };

        let mut out = String::new();
        for line in self.draw(node.left).lines() {
            out.push_str("┌    ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("({:?})", node.value));
        for line in self.draw(node.right).lines() {
            out.push_str("\n└    ");
            out.push_str(line);
        }
        out
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    /// Draws the BinarySearchTree sideways, with lesser branches above each node and greater
    /// branches below.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.draw(self.root))
    }
}
