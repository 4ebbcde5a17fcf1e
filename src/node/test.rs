use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};
use std::cell::RefCell;
use std::rc::Rc;
use super::{KeyOrder, Tree};

/// An operation on a `Tree`.
#[derive(Clone, Debug)]
enum Op<K> {
    /// Insert a key into the tree.
    Insert(K),
    /// Remove the node holding the `n % tree.len()`th smallest key.
    Remove(usize),
}

impl<K> Arbitrary for Op<K> where K: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Op<K> {
        if bool::arbitrary(gen) {
            Op::Insert(Arbitrary::arbitrary(gen))
        } else {
            Op::Remove(Arbitrary::arbitrary(gen))
        }
    }
}

impl<K> Op<K> where K: Ord {
    /// Perform the operation on the given tree.
    fn exec(self, tree: &mut Tree<K, ()>) {
        match self {
            Op::Insert(key) => { tree.insert(&KeyOrder, key, ()); }
            Op::Remove(index) => if tree.len() > 0 {
                let order = tree.in_order();
                tree.remove(order[index % order.len()]);
            },
        }
    }
}

/// Checks BST order, that parent links invert child links and that the size matches.
fn assert_search_tree<K, V>(tree: &Tree<K, V>) where K: Ord {
    fn check<K, V>(tree: &Tree<K, V>, index: u32, min: Option<&K>, max: Option<&K>) -> usize
        where K: Ord {

        let node = &tree.nodes[index];
        if let Some(min) = min { assert!(*min < node.key); }
        if let Some(max) = max { assert!(node.key < *max); }

        let mut count = 1;

        if let Some(left) = node.left {
            assert_eq!(tree.nodes[left].parent, Some(index));
            count += check(tree, left, min, Some(&node.key));
        }

        if let Some(right) = node.right {
            assert_eq!(tree.nodes[right].parent, Some(index));
            count += check(tree, right, Some(&node.key), max);
        }

        count
    }

    match tree.root {
        None => assert_eq!(tree.len(), 0),
        Some(root) => {
            assert_eq!(tree.nodes[root].parent, None);
            assert_eq!(check(tree, root, None, None), tree.len());
        }
    }
}

fn build(keys: &[u32]) -> Tree<u32, ()> {
    let mut tree = Tree::new();
    for &key in keys { tree.insert(&KeyOrder, key, ()); }
    tree
}

fn keys(tree: &Tree<u32, ()>) -> Vec<u32> { tree.iter().map(|(&k, _)| k).collect() }

fn remove_key(tree: &mut Tree<u32, ()>, key: u32) {
    let index = tree.find(&KeyOrder, &key).unwrap();
    tree.remove(index);
    assert_search_tree(tree);
}

#[test]
fn test_search_tree() {
    fn check(ops: Vec<Op<u32>>) -> TestResult {
        let mut tree = Tree::new();
        for op in ops { op.exec(&mut tree); assert_search_tree(&tree); }
        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_iter_matches_sorted_keys() {
    fn check(ops: Vec<Op<u8>>) -> bool {
        let mut tree = Tree::new();
        for op in ops { op.exec(&mut tree); }

        let forward: Vec<u8> = tree.iter().map(|(&k, _)| k).collect();
        let mut backward: Vec<u8> = tree.iter().rev().map(|(&k, _)| k).collect();
        backward.reverse();

        forward.windows(2).all(|w| w[0] < w[1]) && forward == backward
            && forward.len() == tree.len()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_remove_leaf() {
    let mut tree = build(&[5, 3, 8]);
    remove_key(&mut tree, 3);
    assert_eq!(keys(&tree), [5, 8]);
    assert_eq!(tree.nodes[tree.root.unwrap()].left, None);
}

#[test]
fn test_remove_with_one_child() {
    let mut tree = build(&[5, 3, 1]);
    remove_key(&mut tree, 3);
    assert_eq!(keys(&tree), [1, 5]);

    // the root with a single child hands the root over
    remove_key(&mut tree, 5);
    assert_eq!(*tree.key(tree.root.unwrap()), 1);
}

#[test]
fn test_remove_successor_is_right_child() {
    let mut tree = build(&[5, 3, 8, 9]);
    remove_key(&mut tree, 5);
    assert_eq!(keys(&tree), [3, 8, 9]);

    let root = tree.root.unwrap();
    assert_eq!(*tree.key(root), 8);
    assert_eq!(tree.nodes[root].right.map(|i| *tree.key(i)), Some(9));
}

#[test]
fn test_remove_successor_is_deeper() {
    let mut tree = build(&[5, 3, 10, 7, 12, 6, 8]);
    remove_key(&mut tree, 5);
    assert_eq!(keys(&tree), [3, 6, 7, 8, 10, 12]);
    assert_eq!(*tree.key(tree.root.unwrap()), 6);

    // 7 had the successor as its left child and keeps its right child
    let seven = tree.find(&KeyOrder, &7).unwrap();
    assert_eq!(tree.nodes[seven].left, None);
    assert_eq!(tree.nodes[seven].right.map(|i| *tree.key(i)), Some(8));
}

#[test]
fn test_remove_keeps_node_indices() {
    let mut tree = build(&[5, 3, 8, 7]);
    let seven = tree.find(&KeyOrder, &7).unwrap();
    remove_key(&mut tree, 5);
    assert_eq!(tree.root, Some(seven));
}

#[test]
fn test_remove_last_node() {
    let mut tree = build(&[1]);
    remove_key(&mut tree, 1);
    assert_eq!(tree.root, None);
    assert_eq!(tree.len(), 0);
}

#[test]
fn test_clear_drops_children_first() {
    struct Noisy(u32, Rc<RefCell<Vec<u32>>>);

    impl Drop for Noisy {
        fn drop(&mut self) { self.1.borrow_mut().push(self.0); }
    }

    let log = Rc::new(RefCell::new(vec![]));
    let mut tree = Tree::new();
    for &key in &[4, 2, 6, 1, 3] { tree.insert(&KeyOrder, key, Noisy(key, log.clone())); }

    tree.clear();
    assert_eq!(*log.borrow(), [1, 3, 2, 6, 4]);
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root, None);
}

#[test]
fn test_clone_preserves_shape() {
    fn shape(tree: &Tree<u32, ()>) -> Vec<(u32, Option<u32>, Option<u32>)> {
        tree.iter().map(|(&key, _)| {
            let node = &tree.nodes[tree.find(&KeyOrder, &key).unwrap()];
            (key, node.left.map(|i| *tree.key(i)), node.right.map(|i| *tree.key(i)))
        }).collect()
    }

    let tree = build(&[5, 2, 9, 1, 4, 3, 7]);
    let copy = tree.clone();
    assert_search_tree(&copy);
    assert_eq!(shape(&copy), shape(&tree));
}

#[test]
fn test_merge_moves_absent_keys() {
    let mut tree = build(&[2, 4, 6]);
    let mut other = build(&[5, 4, 1, 7, 6, 3]);

    tree.merge(&KeyOrder, &mut other);
    assert_search_tree(&tree);
    assert_search_tree(&other);
    assert_eq!(keys(&tree), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(keys(&other), [4, 6]);
}

#[test]
fn test_step_through_parent_links() {
    use super::{Dir, Left, Right};

    let tree = build(&[8, 4, 12, 2, 6, 10, 14]);
    let six = tree.find(&KeyOrder, &6).unwrap();
    let ten = tree.find(&KeyOrder, &10).unwrap();

    assert_eq!(Right::step(&tree, six).map(|i| *tree.key(i)), Some(8));
    assert_eq!(Left::step(&tree, ten).map(|i| *tree.key(i)), Some(8));
    assert_eq!(Right::step(&tree, tree.last().unwrap()), None);
    assert_eq!(Left::step(&tree, tree.first().unwrap()), None);
}
