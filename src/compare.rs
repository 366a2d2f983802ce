//! Orderings for `SplayTree` keys.
//!
//! A comparator is a pair of predicates: a strict ordering, `less_than`, and
//! an equality test, `equals`. When only the ordering is given, equality is
//! derived from it: `a` equals `b` iff neither is less than the other.
//!
//! The ordering steers every splay; the equality test only decides whether
//! the key that ended up at the root is the one that was asked for. The two
//! may therefore disagree, e.g. ordering strings by length while still
//! treating `"a"` and `"b"` as distinct keys.

use crate::error::{Error, Result};
use alloc::boxed::Box;
use core::fmt;

/// A strict ordering and an equality test over keys of type `K`.
///
/// Both predicates must be pure: for a given pair of keys they must always
/// return the same answer.
pub trait Compare<K: ?Sized> {
    /// Is `a` strictly less than `b`?
    fn less_than(&self, a: &K, b: &K) -> bool;

    /// Is `a` equal to `b`?
    ///
    /// Must be symmetric: the tree passes the stored key as `a` and the
    /// searched-for key as `b` for every operation, so an asymmetric test
    /// makes lookups and removals disagree with each other.
    ///
    /// Defaults to `!less_than(a, b) && !less_than(b, a)`.
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        !self.less_than(a, b) && !self.less_than(b, a)
    }
}

/// The natural ordering of keys: `<` and `==` from `Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: ?Sized + Ord> Compare<K> for Natural {
    #[inline]
    fn less_than(&self, a: &K, b: &K) -> bool {
        a < b
    }

    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// A custom ordering with equality derived from it.
#[derive(Clone, Copy)]
pub struct LessThan<F>(pub F);

impl<F> fmt::Debug for LessThan<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("LessThan").finish()
    }
}

impl<K, F> Compare<K> for LessThan<F>
where
    K: ?Sized,
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less_than(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b)
    }
}

/// A custom ordering paired with a custom equality test.
#[derive(Clone, Copy)]
pub struct Predicates<F, G> {
    less_than: F,
    equals: G,
}

impl<F, G> Predicates<F, G> {
    /// Pair up an ordering and an equality test.
    pub fn new(less_than: F, equals: G) -> Self {
        Predicates { less_than, equals }
    }
}

impl<F, G> fmt::Debug for Predicates<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Predicates").finish_non_exhaustive()
    }
}

impl<K, F, G> Compare<K> for Predicates<F, G>
where
    K: ?Sized,
    F: Fn(&K, &K) -> bool,
    G: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less_than(&self, a: &K, b: &K) -> bool {
        (self.less_than)(a, b)
    }

    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.equals)(a, b)
    }
}

type Predicate<K> = Box<dyn Fn(&K, &K) -> bool>;

/// Assemble a comparator at runtime from optional predicates.
///
/// | `less_than` | `equals` | result                                   |
/// |-------------|----------|------------------------------------------|
/// | -           | -        | the default: `Natural` for `build`       |
/// | yes         | -        | custom ordering, derived equality        |
/// | yes         | yes      | custom ordering, custom equality         |
/// | -           | yes      | `Err(Error::Configuration)`              |
///
/// `build` needs `K: Ord` for its natural default. Keys without a natural
/// ordering use `build_or` and name their own default.
///
/// ```
/// use splay_set::{ComparatorBuilder, Error};
///
/// let rejected = ComparatorBuilder::<u32>::new()
///     .equals(|a, b| a == b)
///     .build();
/// assert_eq!(rejected.err(), Some(Error::Configuration));
/// ```
pub struct ComparatorBuilder<K> {
    less_than: Option<Predicate<K>>,
    equals: Option<Predicate<K>>,
}

impl<K> Default for ComparatorBuilder<K> {
    fn default() -> Self {
        ComparatorBuilder {
            less_than: None,
            equals: None,
        }
    }
}

impl<K> fmt::Debug for ComparatorBuilder<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ComparatorBuilder")
            .field("less_than", &self.less_than.is_some())
            .field("equals", &self.equals.is_some())
            .finish()
    }
}

impl<K> ComparatorBuilder<K> {
    /// A builder with neither predicate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strict ordering.
    pub fn less_than<F>(mut self, less_than: F) -> Self
    where
        F: Fn(&K, &K) -> bool + 'static,
    {
        self.less_than = Some(Box::new(less_than));
        self
    }

    /// Set the equality test.
    pub fn equals<G>(mut self, equals: G) -> Self
    where
        G: Fn(&K, &K) -> bool + 'static,
    {
        self.equals = Some(Box::new(equals));
        self
    }

    /// Validate the configuration, falling back to natural ordering when no
    /// predicate was set.
    pub fn build(self) -> Result<DynComparator<K>>
    where
        K: Ord + 'static,
    {
        self.build_or(Natural)
    }

    /// Validate the configuration, falling back to `default` when no
    /// predicate was set.
    pub fn build_or<D>(self, default: D) -> Result<DynComparator<K>>
    where
        K: 'static,
        D: Compare<K> + 'static,
    {
        let inner: Box<dyn Compare<K>> = match (self.less_than, self.equals) {
            (None, Some(_)) => {
                tracing::debug!("rejecting comparator with equality but no ordering");
                return Err(Error::Configuration);
            }
            (None, None) => Box::new(default),
            (Some(less_than), None) => Box::new(LessThan(less_than)),
            (Some(less_than), Some(equals)) => Box::new(Predicates::new(less_than, equals)),
        };
        Ok(DynComparator { inner })
    }
}

/// A comparator produced by [`ComparatorBuilder`].
pub struct DynComparator<K> {
    inner: Box<dyn Compare<K>>,
}

impl<K> fmt::Debug for DynComparator<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DynComparator").finish_non_exhaustive()
    }
}

impl<K> Compare<K> for DynComparator<K> {
    #[inline]
    fn less_than(&self, a: &K, b: &K) -> bool {
        self.inner.less_than(a, b)
    }

    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        self.inner.equals(a, b)
    }
}
