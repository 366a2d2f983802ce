//! The actual splay tree implementation.
//!
//! Nothing in here knows about user comparators. Every search is driven by a
//! `&dyn CompareToNode` trait object, so the splaying code is instantiated
//! once per key type rather than once per key type and comparator pair. The
//! public `SplayTree<K, C>` wraps its key and comparator into a query and
//! calls in here. Therefore, it doesn't make sense to allow the larger
//! methods to be inlined.

use crate::node::Node;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;

/// Internal trait for anything that can be compared to a `Node`.
pub trait CompareToNode<K> {
    /// Where does the query fall relative to `node`'s key? Only the ordering
    /// is consulted while splaying.
    fn compare_to_node(&self, node: &Node<K>) -> cmp::Ordering;

    /// Is `node` the one being looked for? Consulted once, at the root, after
    /// splaying.
    fn matches(&self, node: &Node<K>) -> bool {
        self.compare_to_node(node) == cmp::Ordering::Equal
    }
}

/// Compares like the minimum key would, without looking at keys: along a
/// search for the minimum, the only node without a left child is the one
/// holding it.
pub struct MinNode;
impl<K> CompareToNode<K> for MinNode {
    fn compare_to_node(&self, node: &Node<K>) -> cmp::Ordering {
        if node.left.is_some() {
            cmp::Ordering::Less
        } else {
            cmp::Ordering::Equal
        }
    }
}

/// Compares like the maximum key would.
pub struct MaxNode;
impl<K> CompareToNode<K> for MaxNode {
    fn compare_to_node(&self, node: &Node<K>) -> cmp::Ordering {
        if node.right.is_some() {
            cmp::Ordering::Greater
        } else {
            cmp::Ordering::Equal
        }
    }
}

/// Where a key would go relative to the root after splaying toward it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The tree is empty.
    Vacant,
    /// The root already holds a matching key.
    Occupied,
    /// The key orders before the root.
    Before,
    /// The key orders after the root, or neither before nor after it without
    /// matching it.
    After,
}

pub struct SplayTree<K> {
    root: Option<Box<Node<K>>>,
    len: usize,
}

impl<K> Default for SplayTree<K> {
    #[inline]
    fn default() -> SplayTree<K> {
        SplayTree::new()
    }
}

impl<K> Drop for SplayTree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> SplayTree<K> {
    #[inline]
    pub const fn new() -> Self {
        SplayTree { root: None, len: 0 }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn root(&self) -> Option<&K> {
        self.root.as_ref().map(|r| &r.key)
    }

    #[inline(never)]
    pub fn find(&mut self, query: &dyn CompareToNode<K>) -> Option<&K> {
        let root = self.root.take()?;
        let root = self.root.insert(splay(root, query));
        if query.matches(root) {
            Some(&root.key)
        } else {
            None
        }
    }

    /// Splay toward `query` and report where a new key for it belongs.
    #[inline(never)]
    pub fn locate(&mut self, query: &dyn CompareToNode<K>) -> Slot {
        let root = match self.root.take() {
            Some(root) => root,
            None => return Slot::Vacant,
        };
        let root = self.root.insert(splay(root, query));
        if query.matches(root) {
            Slot::Occupied
        } else if let cmp::Ordering::Less = query.compare_to_node(root) {
            Slot::Before
        } else {
            Slot::After
        }
    }

    /// Make `node` the new root, splitting the current root's children
    /// around it. `slot` must come from a `locate` for `node`'s key with no
    /// mutation in between.
    pub fn insert(&mut self, mut node: Box<Node<K>>, slot: Slot) {
        debug_assert!(node.left.is_none() && node.right.is_none());
        debug_assert!(slot != Slot::Occupied);

        match self.root.take() {
            None => {}
            Some(mut root) => match slot {
                Slot::Before => {
                    node.left = root.left.take();
                    node.right = Some(root);
                }
                _ => {
                    node.right = root.right.take();
                    node.left = Some(root);
                }
            },
        }

        self.root = Some(node);
        self.len += 1;
    }

    #[inline(never)]
    pub fn remove(&mut self, query: &dyn CompareToNode<K>) -> Option<K> {
        let root = self.root.take()?;
        let root = self.root.insert(splay(root, query));
        if query.matches(root) {
            self.pop_root()
        } else {
            None
        }
    }

    #[inline]
    pub fn min(&mut self) -> Option<&K> {
        let root = self.root.take()?;
        Some(&self.root.insert(splay(root, &MinNode)).key)
    }

    #[inline]
    pub fn pop_min(&mut self) -> Option<K> {
        self.min()?;
        self.pop_root()
    }

    #[inline]
    pub fn max(&mut self) -> Option<&K> {
        let root = self.root.take()?;
        Some(&self.root.insert(splay(root, &MaxNode)).key)
    }

    #[inline]
    pub fn pop_max(&mut self) -> Option<K> {
        self.max()?;
        self.pop_root()
    }

    /// Delete the root. When it has a left subtree, that subtree's maximum is
    /// splayed up and takes over the root's right subtree. The user comparator
    /// is not consulted: keys that order equal to the removed one may sit in
    /// the left subtree, and splaying toward the removed key could stop on one
    /// of them while it still has a right child.
    fn pop_root(&mut self) -> Option<K> {
        let mut old_root = self.root.take()?;

        self.root = match old_root.left.take() {
            Some(old_root_left) => {
                let mut predecessor = splay(old_root_left, &MaxNode);
                debug_assert!(predecessor.right.is_none());
                predecessor.right = old_root.right.take();
                Some(predecessor)
            }
            None => old_root.right.take(),
        };

        self.len -= 1;
        let Node { key, .. } = *old_root;
        Some(key)
    }

    /// Drop every node without recursing: rotate left children up until the
    /// current node has none, then free it and move on to its right child.
    pub fn clear(&mut self) {
        let mut current = self.root.take();
        while let Some(mut node) = current {
            current = match node.left.take() {
                Some(mut left) => {
                    node.left = left.right.take();
                    left.right = Some(node);
                    Some(left)
                }
                None => node.right.take(),
            };
        }
        self.len = 0;
    }

    /// Visit every key in order. Iterative, since a splay tree may
    /// degenerate into a path as long as the tree.
    pub fn walk(&self, mut f: impl FnMut(&K)) {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    f(&node.key);
                    current = node.right.as_deref();
                }
                None => return,
            }
        }
    }
}

// The "simple top-down splay" routine from the paper.
//
// `left` collects nodes known to order before the query and `right` those
// known to order after it. `left_slot` is the empty right link of the
// largest node in `left`; `right_slot` is the empty left link of the
// smallest node in `right`.
#[inline(never)]
fn splay<K>(mut current: Box<Node<K>>, key: &dyn CompareToNode<K>) -> Box<Node<K>> {
    let mut left = None;
    let mut right = None;
    let mut left_slot = &mut left;
    let mut right_slot = &mut right;

    loop {
        match key.compare_to_node(&current) {
            cmp::Ordering::Less => {
                let mut current_left = match current.left.take() {
                    Some(l) => l,
                    None => break,
                };
                if let cmp::Ordering::Less = key.compare_to_node(&current_left) {
                    // Rotate right.
                    current.left = current_left.right.take();
                    current_left.right = Some(current);
                    current = current_left;
                    current_left = match current.left.take() {
                        Some(l) => l,
                        None => break,
                    };
                }
                // Link right.
                right_slot = &mut right_slot.insert(current).left;
                current = current_left;
            }
            cmp::Ordering::Greater => {
                let mut current_right = match current.right.take() {
                    Some(r) => r,
                    None => break,
                };
                if let cmp::Ordering::Greater = key.compare_to_node(&current_right) {
                    // Rotate left.
                    current.right = current_right.left.take();
                    current_right.left = Some(current);
                    current = current_right;
                    current_right = match current.right.take() {
                        Some(r) => r,
                        None => break,
                    };
                }
                // Link left.
                left_slot = &mut left_slot.insert(current).right;
                current = current_right;
            }
            cmp::Ordering::Equal => break,
        }
    }

    // Assemble.
    *left_slot = current.left.take();
    *right_slot = current.right.take();
    current.left = left;
    current.right = right;
    current
}
