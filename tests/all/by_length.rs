use splay_set::{Compare, SplayTree};

/// Orders strings by length only. Equality is derived, so two strings of the
/// same length are the same key.
#[derive(Debug, Default)]
pub struct ByLength;

impl Compare<String> for ByLength {
    fn less_than(&self, a: &String, b: &String) -> bool {
        a.len() < b.len()
    }
}

/// Orders strings by length, but only identical strings are the same key.
#[derive(Debug, Default)]
pub struct ByLengthDistinct;

impl Compare<String> for ByLengthDistinct {
    fn less_than(&self, a: &String, b: &String) -> bool {
        a.len() < b.len()
    }

    fn equals(&self, a: &String, b: &String) -> bool {
        a == b
    }
}

pub fn tree_from_strs<C>(comparator: C, strs: &[&str]) -> SplayTree<String, C>
where
    C: Compare<String>,
{
    let mut tree = SplayTree::with_comparator(comparator);
    for s in strs {
        tree.insert(s.to_string()).unwrap();
    }
    tree
}
