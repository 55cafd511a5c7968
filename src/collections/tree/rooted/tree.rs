use std::fmt::{self, Debug, Formatter};

use crate::collections::arena::{Arena, NodeId};
use crate::collections::contiguous::{List, Stack};
#[doc(inline)]
pub use crate::util::error::EmptyTree;
use crate::util::result::ResultExtension;

/// A single value in a [`Tree`] and the ids of its children, in the order they were added.
pub struct TreeNode<T> {
    pub(crate) value: T,
    pub(crate) children: List<NodeId>,
}

impl<T> TreeNode<T> {
    pub(crate) const fn leaf(value: T) -> TreeNode<T> {
        TreeNode {
            value,
            children: List::new(),
        }
    }

    /// Returns the value held by the node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the ids of the node's children, in the order they were added.
    pub fn child_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.iter().copied()
    }

    /// Returns the number of children the node has.
    pub const fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// A tree with a single root, where each node holds a value and any number of ordered children.
///
/// The tree has no ordering rules and doesn't require unique values. When more than one node holds
/// the value passed as the parent to [`add`](Tree::add), the new node becomes a child of every one
/// of them, so a node can have several parents. No node is ever its own ancestor, since a node is
/// only ever attached as a new leaf.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of nodes reachable from the root, counting shared nodes once per parent.
///
/// | Method | Complexity |
/// |-|-|
/// | `traverse` | `O(n)` |
/// | `add` | `O(n)` |
/// | `root` | `O(1)` |
pub struct Tree<T> {
    pub(crate) nodes: Arena<TreeNode<T>>,
    pub(crate) root: Option<NodeId>,
}

impl<T> Tree<T> {
    /// Creates a new Tree without a root.
    pub const fn new() -> Tree<T> {
        Tree {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Returns true if the Tree has no root.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node, if there is one.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.nodes.get(self.root?)
    }

    /// Returns the node with the provided id.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id)
    }

    /// Returns an iterator over the children of `node`, in order. `node` has to belong to this
    /// Tree, as its child ids are resolved here.
    pub fn children<'a>(
        &'a self,
        node: &'a TreeNode<T>,
    ) -> impl DoubleEndedIterator<Item = &'a TreeNode<T>> + 'a {
        node.child_ids().filter_map(|id| self.nodes.get(id))
    }

    /// Walks the Tree depth first, calling `callback` on each node before any of its children,
    /// panicking on a failure.
    ///
    /// # Panics
    /// Panics if the Tree has no root.
    pub fn traverse<F: FnMut(&TreeNode<T>)>(&self, callback: F) {
        self.try_traverse(callback).throw()
    }

    /// Walks the Tree depth first, calling `callback` on each node before any of its children.
    /// Children are visited in the order they were added. Returns an [`Err`] rather than panicking
    /// if the Tree has no root.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::tree::Tree;
    /// let mut tree = Tree::new();
    /// tree.add(1, &0);
    /// tree.add(2, &1);
    /// tree.add(4, &2);
    /// tree.add(3, &1);
    ///
    /// let mut order = String::new();
    /// tree.try_traverse(|node| order.push_str(&node.value().to_string())).unwrap();
    /// assert_eq!(order, "1243");
    /// ```
    pub fn try_traverse<F: FnMut(&TreeNode<T>)>(&self, mut callback: F) -> Result<(), EmptyTree> {
        let root = self.root.ok_or(EmptyTree)?;
        self.walk(root, |_, node, _| callback(node));
        Ok(())
    }

    /// Visits every node reachable from `start` in pre-order, along with its id and depth below
    /// `start`.
    pub(crate) fn walk<F: FnMut(NodeId, &TreeNode<T>, usize)>(&self, start: NodeId, mut visit: F) {
        // Children are pushed in reverse so that the first child is popped first.
        let mut pending = Stack::new();
        pending.push((start, 0));

        while let Some((id, depth)) = pending.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };

            visit(id, node, depth);

            for child in node.child_ids().rev() {
                pending.push((child, depth + 1));
            }
        }
    }
}

impl<T: PartialEq> Tree<T> {
    /// Adds a node holding `value` as a child of every node holding `parent`. If the Tree has no
    /// root, the new node becomes the root and `parent` is ignored.
    ///
    /// Returns the id of the new node, or None if no node matched `parent`, in which case nothing
    /// is stored. A node reachable along several paths is matched once per path, and gains the
    /// new node as a child that many times.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::tree::Tree;
    /// let mut tree = Tree::new();
    /// tree.add("root", &"ignored");
    /// tree.add("child", &"root");
    /// tree.add("child", &"root");
    /// let shared = tree.add("grandchild", &"child");
    ///
    /// // Both nodes holding "child" share the same grandchild.
    /// let root = tree.root().unwrap();
    /// for child in tree.children(root) {
    ///     assert!(child.child_ids().eq(shared));
    /// }
    /// assert!(tree.add("orphan", &"missing").is_none());
    /// ```
    pub fn add(&mut self, value: T, parent: &T) -> Option<NodeId> {
        let Some(root) = self.root else {
            let id = self.nodes.alloc(TreeNode::leaf(value));
            self.root = Some(id);
            return Some(id);
        };

        // Parents are found before the node is attached, so the new node is never visited itself.
        let mut parents = List::new();
        self.walk(root, |id, node, _| {
            if node.value == *parent {
                parents.push(id);
            }
        });

        if parents.is_empty() {
            return None;
        }

        let id = self.nodes.alloc(TreeNode::leaf(value));
        for parent_id in parents {
            if let Some(parent_node) = self.nodes.get_mut(parent_id) {
                parent_node.children.push(id);
            }
        }
        Some(id)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for TreeNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("value", &self.value)
            .field("children", &self.children)
            .finish()
    }
}

impl<T: Debug> Debug for Tree<T> {
    /// Draws the Tree one node per line, indented by depth.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return write!(f, "-");
        };

        let mut result = Ok(());
        self.walk(root, |_, node, depth| {
            if result.is_ok() {
                let indent = if depth == 0 { "" } else { "└ " };
                result = writeln!(
                    f,
                    "{:width$}{indent}{:?}",
                    "",
                    node.value,
                    width = depth.saturating_sub(1) * 2,
                );
            }
        });
        result
    }
}
