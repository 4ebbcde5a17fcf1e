use std::vec;
use super::super::arena::Arena;
use super::{Dir, Left, Link, Node, Right, Tree};

/// Walks a tree in order by stepping between neighbours through child and parent links.
pub struct Iter<'a, K: 'a, V: 'a> {
    tree: &'a Tree<K, V>,
    front: Link,
    back: Link,
    size: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(tree: &'a Tree<K, V>) -> Iter<'a, K, V> {
        Iter { tree: tree, front: tree.first(), back: tree.last(), size: tree.len() }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> {
        Iter { tree: self.tree, front: self.front, back: self.back, size: self.size }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.size == 0 { return None; }

        let tree = self.tree;
        let index = self.front?;
        self.size -= 1;
        self.front = Right::step(tree, index);
        Some(tree.key_value(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.size == 0 { return None; }

        let tree = self.tree;
        let index = self.back?;
        self.size -= 1;
        self.back = Left::step(tree, index);
        Some(tree.key_value(index))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// Hands out disjoint mutable borrows of the values in key order.
pub struct IterMut<'a, K: 'a, V: 'a> {
    entries: Vec<Option<(&'a K, &'a mut V)>>,
    order: vec::IntoIter<u32>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub fn new(tree: &'a mut Tree<K, V>) -> IterMut<'a, K, V> {
        let order = tree.in_order();
        let mut entries: Vec<_> = (0..tree.nodes.index_bound()).map(|_| None).collect();

        for (index, node) in tree.nodes.iter_mut() {
            let Node { ref key, ref mut value, .. } = *node;
            entries[index as usize] = Some((key, value));
        }

        IterMut { entries: entries, order: order.into_iter() }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let index = self.order.next()?;
        self.entries[index as usize].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
        let index = self.order.next_back()?;
        self.entries[index as usize].take()
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// Moves the entries out of a tree in key order.
pub struct IntoIter<K, V> {
    nodes: Arena<Node<K, V>>,
    order: vec::IntoIter<u32>,
}

impl<K, V> IntoIter<K, V> {
    pub fn new(nodes: Arena<Node<K, V>>, order: Vec<u32>) -> IntoIter<K, V> {
        IntoIter { nodes: nodes, order: order.into_iter() }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let node = self.nodes.remove(self.order.next()?);
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        let node = self.nodes.remove(self.order.next_back()?);
        Some((node.key, node.value))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
