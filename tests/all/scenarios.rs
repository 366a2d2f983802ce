use crate::by_length::{tree_from_strs, ByLength, ByLengthDistinct};
use splay_set::{ComparatorBuilder, Error, SplayTree};

#[test]
fn insert_find_remove() {
    let mut tree = SplayTree::new();
    for k in [5, 3, 8, 1].iter().copied() {
        tree.insert(k).unwrap();
    }

    assert_eq!(tree.find_min(), Some(&1));
    assert_eq!(tree.find(&8), Some(&8));
    assert_eq!(tree.remove(&3), Ok(3));
    assert_eq!(tree.find(&3), None);
    assert!(!tree.is_empty());
    assert_eq!(tree.len(), 3);
    assert_eq!(format!("{:?}", tree), "{1, 5, 8}");
}

#[test]
fn empty_tree() {
    let mut tree = SplayTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.find(&42), None);
    assert_eq!(tree.remove(&42), Err(Error::KeyNotFound));
    assert_eq!(tree.find_min(), None);
    assert_eq!(tree.find_max(), None);
    assert_eq!(tree.pop_min(), None);
    assert_eq!(tree.root(), None);
    assert_eq!(format!("{:?}", tree), "{}");
}

#[test]
fn remove_last_key_empties_tree() {
    let mut tree = SplayTree::default();
    tree.insert("only").unwrap();
    assert_eq!(tree.remove(&"only"), Ok("only"));
    assert!(tree.is_empty());
    assert_eq!(tree.remove(&"only"), Err(Error::KeyNotFound));
}

#[test]
fn duplicate_insert_leaves_tree_unchanged() {
    let mut tree = SplayTree::new();
    for k in 0..10 {
        tree.insert(k).unwrap();
    }
    assert_eq!(tree.insert(4), Err(Error::DuplicateKey));
    assert_eq!(tree.len(), 10);
    for k in 0..10 {
        assert_eq!(tree.find(&k), Some(&k));
    }
}

#[test]
fn failed_remove_keeps_keys() {
    let mut tree = SplayTree::new();
    for k in [10, 20, 30].iter().copied() {
        tree.insert(k).unwrap();
    }
    assert_eq!(tree.remove(&25), Err(Error::KeyNotFound));
    assert_eq!(tree.len(), 3);
    assert_eq!(format!("{:?}", tree), "{10, 20, 30}");
}

#[test]
fn found_key_becomes_root() {
    let mut tree = SplayTree::new();
    for k in 0..100 {
        tree.insert(k).unwrap();
    }
    assert_eq!(tree.root(), Some(&99));
    assert!(tree.contains(&37));
    assert_eq!(tree.root(), Some(&37));
    assert_eq!(tree.find_max(), Some(&99));
    assert_eq!(tree.root(), Some(&99));
    assert_eq!(tree.find_min(), Some(&0));
    assert_eq!(tree.root(), Some(&0));
}

#[test]
fn miss_still_splays() {
    let mut tree = SplayTree::new();
    for k in [10, 20, 30, 40, 50].iter().copied() {
        tree.insert(k).unwrap();
    }
    tree.find_min();
    assert_eq!(tree.find(&35), None);
    let root = *tree.root().unwrap();
    assert!(root == 30 || root == 40, "root after miss: {}", root);
}

#[test]
fn pop_drains_in_order() {
    let mut tree = SplayTree::new();
    for k in [4, 9, 1, 7, 3].iter().copied() {
        tree.insert(k).unwrap();
    }
    assert_eq!(tree.pop_min(), Some(1));
    assert_eq!(tree.pop_max(), Some(9));
    assert_eq!(tree.pop_min(), Some(3));
    assert_eq!(tree.pop_min(), Some(4));
    assert_eq!(tree.pop_min(), Some(7));
    assert_eq!(tree.pop_min(), None);
    assert!(tree.is_empty());
}

#[test]
fn clear_and_reuse() {
    let mut tree = SplayTree::new();
    for k in 0..1000 {
        tree.insert(k).unwrap();
    }
    tree.clear();
    assert!(tree.is_empty());
    tree.insert(7).unwrap();
    assert_eq!(tree.find(&7), Some(&7));
}

#[test]
fn drop_long_path() {
    let mut tree = SplayTree::new();
    for k in 0..500_000u32 {
        tree.insert(k).unwrap();
    }
    drop(tree);
}

#[test]
fn derived_equality_by_length() {
    let mut tree = tree_from_strs(ByLength, &["a", "bb", "ccc"]);
    assert_eq!(tree.find_max().map(String::as_str), Some("ccc"));
    assert_eq!(tree.insert("d".to_string()), Err(Error::DuplicateKey));
    // Any string of a stored length finds the stored key.
    assert_eq!(tree.find(&"zz".to_string()).map(String::as_str), Some("bb"));
}

#[test]
fn custom_equality_by_length() {
    let mut tree = tree_from_strs(ByLengthDistinct, &["a", "bb", "ccc"]);
    assert_eq!(tree.find_max().map(String::as_str), Some("ccc"));
    assert_eq!(tree.insert("d".to_string()), Ok(()));
    assert_eq!(tree.insert("bb".to_string()), Err(Error::DuplicateKey));
    assert_eq!(tree.len(), 4);
}

#[test]
fn closure_comparators() {
    let mut reversed = SplayTree::with_less_than(|a: &i32, b: &i32| b < a);
    for k in 1..=5 {
        reversed.insert(k).unwrap();
    }
    assert_eq!(reversed.find_min(), Some(&5));
    assert_eq!(reversed.find_max(), Some(&1));
    assert_eq!(format!("{:?}", reversed), "{5, 4, 3, 2, 1}");

    let mut by_abs = SplayTree::with_predicates(
        |a: &i32, b: &i32| a.abs() < b.abs(),
        |a: &i32, b: &i32| a == b,
    );
    by_abs.insert(-3).unwrap();
    by_abs.insert(3).unwrap();
    by_abs.insert(5).unwrap();
    assert_eq!(by_abs.insert(5), Err(Error::DuplicateKey));
    assert_eq!(by_abs.len(), 3);
}

#[test]
fn runtime_comparator_configuration() {
    let err = ComparatorBuilder::<String>::new()
        .equals(|a, b| a == b)
        .build()
        .unwrap_err();
    assert_eq!(err, Error::Configuration);
    assert_eq!(
        err.to_string(),
        "cannot define an equality predicate without an ordering predicate"
    );

    let natural = ComparatorBuilder::<u8>::new().build().unwrap();
    let mut tree = SplayTree::with_comparator(natural);
    tree.insert(2).unwrap();
    tree.insert(1).unwrap();
    assert_eq!(tree.find_min(), Some(&1));

    let by_len = ComparatorBuilder::<String>::new()
        .less_than(|a, b| a.len() < b.len())
        .build()
        .unwrap();
    let mut tree = tree_from_strs(by_len, &["xy", "x"]);
    assert_eq!(tree.insert("z".to_string()), Err(Error::DuplicateKey));
}
