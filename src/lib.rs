#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

extern crate alloc;

mod compare;
mod error;
mod internal;
mod node;

pub use compare::{Compare, ComparatorBuilder, DynComparator, LessThan, Natural, Predicates};
pub use error::{Error, Result};

use core::cmp;
use core::fmt;
use node::Node;

/// A search key paired with the tree's comparator, erased to a
/// `&dyn CompareToNode` before calling into `internal`.
struct Query<'a, K, C: ?Sized> {
    key: &'a K,
    comparator: &'a C,
}

impl<'a, K, C> Query<'a, K, C>
where
    C: ?Sized + Compare<K>,
{
    #[inline]
    fn new(key: &'a K, comparator: &'a C) -> Query<'a, K, C> {
        Query { key, comparator }
    }
}

impl<'a, K, C> internal::CompareToNode<K> for Query<'a, K, C>
where
    C: ?Sized + Compare<K>,
{
    #[inline]
    fn compare_to_node(&self, node: &Node<K>) -> cmp::Ordering {
        if self.comparator.less_than(self.key, &node.key) {
            cmp::Ordering::Less
        } else if self.comparator.less_than(&node.key, self.key) {
            cmp::Ordering::Greater
        } else {
            cmp::Ordering::Equal
        }
    }

    #[inline]
    fn matches(&self, node: &Node<K>) -> bool {
        self.comparator.equals(&node.key, self.key)
    }
}

/// A self-adjusting binary search tree of unique keys.
///
/// Every lookup, insertion, and removal first *splays* the tree: it restructures
/// it in a single top-down pass so that the key being looked for, or the last
/// key visited while searching for it, becomes the root. Recently and
/// frequently accessed keys therefore stay near the top, and any sequence of
/// operations costs amortized `O(log n)` each.
///
/// Keys are ordered by the comparator `C`, which defaults to [`Natural`]
/// ordering. See [`Compare`] for how ordering and equality interact.
///
/// ## Exclusive access
///
/// Splaying rewrites the tree's shape, so `find`, `find_min`, `find_max`, and
/// `contains` take `&mut self` just like `insert` and `remove` do, even though
/// they do not add or remove keys. A lookup that misses still splays. Sharing
/// a tree across threads requires external synchronization around every one
/// of these calls; only `is_empty`, `len`, and `root` work through `&self`.
pub struct SplayTree<K, C = Natural> {
    tree: internal::SplayTree<K>,
    comparator: C,
}

impl<K: Ord> Default for SplayTree<K> {
    #[inline]
    fn default() -> SplayTree<K> {
        SplayTree::new()
    }
}

impl<K, C> fmt::Debug for SplayTree<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let set = &mut f.debug_set();
        self.tree.walk(|k| {
            set.entry(k);
        });
        set.finish()
    }
}

impl<K: Ord> SplayTree<K> {
    /// Construct a new, empty tree ordered by `K`'s `Ord` implementation.
    #[inline]
    pub const fn new() -> Self {
        SplayTree {
            tree: internal::SplayTree::new(),
            comparator: Natural,
        }
    }
}

impl<K, F> SplayTree<K, LessThan<F>>
where
    F: Fn(&K, &K) -> bool,
{
    /// Construct a new, empty tree ordered by `less_than`, with equality
    /// derived from it.
    #[inline]
    pub fn with_less_than(less_than: F) -> Self {
        SplayTree::with_comparator(LessThan(less_than))
    }
}

impl<K, F, G> SplayTree<K, Predicates<F, G>>
where
    F: Fn(&K, &K) -> bool,
    G: Fn(&K, &K) -> bool,
{
    /// Construct a new, empty tree ordered by `less_than`, deciding key
    /// identity with `equals`.
    #[inline]
    pub fn with_predicates(less_than: F, equals: G) -> Self {
        SplayTree::with_comparator(Predicates::new(less_than, equals))
    }
}

impl<K, C> SplayTree<K, C> {
    /// Construct a new, empty tree ordered by `comparator`.
    ///
    /// The comparator is fixed for the lifetime of the tree.
    #[inline]
    pub fn with_comparator(comparator: C) -> Self {
        SplayTree {
            tree: internal::SplayTree::new(),
            comparator,
        }
    }

    /// The comparator this tree was constructed with.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Is this tree empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The number of keys in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Get a reference to the root key, if any exists, without splaying.
    #[inline]
    pub fn root(&self) -> Option<&K> {
        self.tree.root()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Get the minimum key in the tree.
    ///
    /// If the tree is non-empty, then the minimum key is splayed to the root
    /// and `Some(min)` is returned. Otherwise, `None` is returned. No
    /// comparisons are made.
    #[inline]
    pub fn find_min(&mut self) -> Option<&K> {
        self.tree.min()
    }

    /// Get the maximum key in the tree.
    ///
    /// If the tree is non-empty, then the maximum key is splayed to the root
    /// and `Some(max)` is returned. Otherwise, `None` is returned. No
    /// comparisons are made.
    #[inline]
    pub fn find_max(&mut self) -> Option<&K> {
        self.tree.max()
    }

    /// Pop the minimum key from the tree.
    #[inline]
    pub fn pop_min(&mut self) -> Option<K> {
        self.tree.pop_min()
    }

    /// Pop the maximum key from the tree.
    #[inline]
    pub fn pop_max(&mut self) -> Option<K> {
        self.tree.pop_max()
    }
}

impl<K, C> SplayTree<K, C>
where
    C: Compare<K>,
{
    /// Find a key in the tree.
    ///
    /// This operation splays the tree toward `key` whether or not it is
    /// found. On a hit the stored key (which `equals` `key`, but need not be
    /// identical to it) is returned from the root.
    #[inline]
    pub fn find(&mut self, key: &K) -> Option<&K> {
        let query = Query::new(key, &self.comparator);
        self.tree.find(&query)
    }

    /// Is there a key in the tree that `equals` `key`? Splays like `find`.
    #[inline]
    pub fn contains(&mut self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Insert a new key into this tree.
    ///
    /// Returns `Err(Error::DuplicateKey)` if the tree already holds a key
    /// that `equals` this one. In that case the tree keeps its existing key
    /// and `key` is dropped.
    ///
    /// On success the new key is the root of the tree.
    pub fn insert(&mut self, key: K) -> Result<()> {
        let slot = self.tree.locate(&Query::new(&key, &self.comparator));
        if let internal::Slot::Occupied = slot {
            tracing::trace!(len = self.tree.len(), "rejected duplicate key");
            return Err(Error::DuplicateKey);
        }

        self.tree.insert(Node::new(key), slot);
        tracing::trace!(len = self.tree.len(), "inserted key");
        Ok(())
    }

    /// Find and remove a key from the tree.
    ///
    /// If a key that `equals` `key` is found, it is removed and returned.
    /// Otherwise `Err(Error::KeyNotFound)` is returned; the tree has still
    /// been splayed toward `key`, but holds the same keys.
    pub fn remove(&mut self, key: &K) -> Result<K> {
        if self.tree.is_empty() {
            tracing::trace!("remove from empty tree");
            return Err(Error::KeyNotFound);
        }

        match self.tree.remove(&Query::new(key, &self.comparator)) {
            Some(removed) => {
                tracing::trace!(len = self.tree.len(), "removed key");
                Ok(removed)
            }
            None => {
                tracing::trace!(len = self.tree.len(), "key to remove not found");
                Err(Error::KeyNotFound)
            }
        }
    }
}
