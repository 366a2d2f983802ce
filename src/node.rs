use alloc::boxed::Box;

/// A tree cell. Every node exclusively owns its children.
#[derive(Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<Box<Node<K>>>,
    pub(crate) right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    /// A leaf holding `key`.
    #[inline]
    pub(crate) fn new(key: K) -> Box<Node<K>> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}
