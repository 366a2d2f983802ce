use thiserror::Error;

/// A `Result` whose error type is this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by `SplayTree` construction and mutation.
///
/// Lookups (`find`, `find_min`, `find_max`) never fail; absence is reported
/// with `None` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An equality predicate was supplied without an ordering predicate.
    #[error("cannot define an equality predicate without an ordering predicate")]
    Configuration,

    /// The key being inserted is already present. The tree is unchanged.
    #[error("key already exists in the splay tree")]
    DuplicateKey,

    /// The key being removed is not present, or the tree is empty.
    #[error("key not found in the splay tree")]
    KeyNotFound,
}
