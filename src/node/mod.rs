mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::borrow::Borrow;
use std::cmp::Ordering::{self, *};
use std::mem::replace;
use tracing::{debug, trace};
use super::arena::{Arena, Cursor};
use super::error::Result;
use super::map::Entry;

pub use self::iter::{IntoIter, Iter, IterMut};

pub type Link = Option<u32>;

pub struct Node<K, V> {
    left: Link,
    right: Link,
    parent: Link,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Link) -> Self {
        Node { left: None, right: None, parent: parent, key: key, value: value }
    }
}

/// Compares a probe with stored keys through `Borrow`, using the natural order.
pub struct KeyOrder;

impl<Q: ?Sized, K> Compare<Q, K> for KeyOrder where K: Borrow<Q>, Q: Ord {
    fn compare(&self, probe: &Q, key: &K) -> Ordering { probe.cmp(key.borrow()) }
}

/// The outcome of a descent from the root.
pub enum Search {
    Found(u32),
    /// The key is absent. It belongs below the given parent, on the left for `Less` and on
    /// the right for `Greater`, or at the root when there is no parent.
    Vacant(Option<(u32, Ordering)>),
}

/// An unbalanced binary search tree whose nodes live in an arena and link to their parents.
pub struct Tree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Link,
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self { Tree { nodes: Arena::new(), root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn max_size(&self) -> usize { Arena::<Node<K, V>>::max_len() }

    pub fn key(&self, index: u32) -> &K { &self.nodes[index].key }

    pub fn key_value(&self, index: u32) -> (&K, &V) {
        let node = &self.nodes[index];
        (&node.key, &node.value)
    }

    pub fn key_value_mut(&mut self, index: u32) -> (&K, &mut V) {
        let node = &mut self.nodes[index];
        (&node.key, &mut node.value)
    }

    pub fn first(&self) -> Link { self.root.map(|root| Left::extremum(self, root)) }

    pub fn last(&self) -> Link { self.root.map(|root| Right::extremum(self, root)) }

    pub fn cursor(&self, link: Link) -> Cursor { self.nodes.cursor(link) }

    pub fn locate(&self, cursor: Cursor) -> Result<Link> { self.nodes.locate(cursor) }

    pub fn element(&self, cursor: Cursor) -> Result<u32> { self.nodes.element(cursor) }

    /// Returns the arena indices of all nodes in ascending key order.
    pub fn in_order(&self) -> Vec<u32> {
        let mut order = Vec::with_capacity(self.len());
        let mut link = self.first();

        while let Some(index) = link {
            order.push(index);
            link = Right::step(self, index);
        }

        order
    }

    pub fn search<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Search where C: Compare<Q, K> {
        let mut link = self.root;
        let mut slot = None;

        while let Some(index) = link {
            let node = &self.nodes[index];

            match cmp.compare(key, &node.key) {
                Equal => return Search::Found(index),
                order => {
                    slot = Some((index, order));
                    link = if order == Less { node.left } else { node.right };
                }
            }
        }

        Search::Vacant(slot)
    }

    pub fn find<C, Q: ?Sized>(&self, cmp: &C, key: &Q) -> Link where C: Compare<Q, K> {
        match self.search(cmp, key) {
            Search::Found(index) => Some(index),
            Search::Vacant(_) => None,
        }
    }

    fn set_child(&mut self, slot: Option<(u32, Ordering)>, child: Link) {
        match slot {
            None => self.root = child,
            Some((parent, Less)) => self.nodes[parent].left = child,
            Some((parent, _)) => self.nodes[parent].right = child,
        }
    }

    /// Allocates a leaf for `key` at a vacant slot found by `search`.
    fn attach(&mut self, slot: Option<(u32, Ordering)>, key: K, value: V) -> u32 {
        let index = self.nodes.insert(Node::new(key, value, slot.map(|(parent, _)| parent)));
        self.set_child(slot, Some(index));
        index
    }

    /// Inserts `key` unless an equal key is present. Returns the index of the node holding
    /// the key and whether it was created; a rejected key and value are dropped.
    pub fn insert<C>(&mut self, cmp: &C, key: K, value: V) -> (u32, bool) where C: Compare<K> {
        match self.search(cmp, &key) {
            Search::Found(index) => (index, false),
            Search::Vacant(slot) => (self.attach(slot, key, value), true),
        }
    }

    /// Like `insert`, but an existing node gets its value overwritten.
    pub fn insert_or_assign<C>(&mut self, cmp: &C, key: K, value: V) -> (u32, bool)
        where C: Compare<K> {

        match self.search(cmp, &key) {
            Search::Found(index) => {
                self.nodes[index].value = value;
                (index, false)
            }
            Search::Vacant(slot) => (self.attach(slot, key, value), true),
        }
    }

    pub fn entry<C>(&mut self, cmp: &C, key: K) -> Entry<K, V> where C: Compare<K> {
        match self.search(cmp, &key) {
            Search::Found(index) => Entry::Occupied(OccupiedEntry { tree: self, index: index }),
            Search::Vacant(slot) => Entry::Vacant(VacantEntry { tree: self, key: key, slot: slot }),
        }
    }

    // Points whichever link of `parent` referred to `old` at `new` instead.
    fn replace_child(&mut self, parent: Link, old: u32, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) { node.left = new; } else { node.right = new; }
            }
        }
    }

    /// Unlinks the node at `index` and returns its key and value.
    ///
    /// A node with two children is replaced by its in-order successor, which is relinked
    /// into the node's place; no key or value is moved between nodes.
    pub fn remove(&mut self, index: u32) -> (K, V) {
        let (left, right, parent) = {
            let node = &self.nodes[index];
            (node.left, node.right, node.parent)
        };

        match (left, right) {
            (None, None) => {
                trace!(index, "erasing leaf");
                self.replace_child(parent, index, None);
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!(index, child, "erasing node with one child");
                self.nodes[child].parent = parent;
                self.replace_child(parent, index, Some(child));
            }
            (Some(left), Some(right)) => {
                let successor = Left::extremum(self, right);
                trace!(index, successor, "erasing node with two children");

                if successor != right {
                    // the successor has no left child; its right subtree takes its place
                    let (successor_parent, successor_right) = {
                        let node = &self.nodes[successor];
                        (node.parent, node.right)
                    };

                    self.replace_child(successor_parent, successor, successor_right);
                    if let Some(child) = successor_right { self.nodes[child].parent = successor_parent; }

                    self.nodes[successor].right = Some(right);
                    self.nodes[right].parent = Some(successor);
                }

                self.nodes[successor].left = Some(left);
                self.nodes[left].parent = Some(successor);
                self.nodes[successor].parent = parent;
                self.replace_child(parent, index, Some(successor));
            }
        }

        let node = self.nodes.remove(index);
        (node.key, node.value)
    }

    /// Drops every node, children before their parent, and returns how many were dropped.
    fn teardown(&mut self) -> usize {
        let mut pending: Vec<(u32, bool)> = self.root.take().map(|root| (root, false)).into_iter().collect();
        let mut dropped = 0;

        while let Some((index, expanded)) = pending.pop() {
            if expanded {
                drop(self.nodes.remove(index));
                dropped += 1;
                continue;
            }

            let node = &self.nodes[index];
            pending.push((index, true));
            pending.extend(node.right.map(|right| (right, false)));
            pending.extend(node.left.map(|left| (left, false)));
        }

        dropped
    }

    pub fn clear(&mut self) {
        let dropped = self.teardown();
        self.nodes.clear();
        debug!(dropped, "cleared tree");
    }

    /// Moves every node of `other` whose key is absent from `self` into `self`.
    ///
    /// Keys already present in `self` stay in `other`.
    pub fn merge<C>(&mut self, cmp: &C, other: &mut Tree<K, V>) where C: Compare<K> {
        let mut next = other.first();
        let mut moved = 0usize;
        let mut kept = 0usize;

        while let Some(index) = next {
            // surgery relinks nodes but keeps the in-order sequence of the survivors
            next = Right::step(other, index);

            match self.search(cmp, &other.nodes[index].key) {
                Search::Found(_) => kept += 1,
                Search::Vacant(slot) => {
                    let (key, value) = other.remove(index);
                    self.attach(slot, key, value);
                    moved += 1;
                }
            }
        }

        debug!(moved, kept, "merged trees");
    }

    pub fn iter(&self) -> Iter<K, V> { Iter::new(self) }

    pub fn iter_mut(&mut self) -> IterMut<K, V> { IterMut::new(self) }

    pub fn into_iter(mut self) -> IntoIter<K, V> {
        let order = self.in_order();
        self.root = None;
        IntoIter::new(::std::mem::take(&mut self.nodes), order)
    }
}

impl<K, V> Clone for Tree<K, V> where K: Clone, V: Clone {
    /// Copies the tree node by node in pre-order, so the copy has the same shape.
    fn clone(&self) -> Self {
        let mut tree = Tree { nodes: Arena::with_capacity(self.len()), root: None };
        let root = match self.root { None => return tree, Some(root) => root };

        let mut pending = vec![(root, None::<(u32, Ordering)>)];

        while let Some((index, slot)) = pending.pop() {
            let node = &self.nodes[index];
            let copy = tree.attach(slot, node.key.clone(), node.value.clone());

            pending.extend(node.right.map(|right| (right, Some((copy, Greater)))));
            pending.extend(node.left.map(|left| (left, Some((copy, Less)))));
        }

        tree
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self { Tree::new() }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) { self.teardown(); }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn forward<K, V>(node: &Node<K, V>) -> Link;

    /// Follows forward links from `index` as far as they go.
    fn extremum<K, V>(tree: &Tree<K, V>, mut index: u32) -> u32 {
        while let Some(child) = Self::forward(&tree.nodes[index]) { index = child; }
        index
    }

    /// Returns the in-order neighbour of `index` in this direction.
    ///
    /// With a forward subtree the neighbour is that subtree's opposite extremum. Otherwise it
    /// is the first ancestor reached from its opposite side.
    fn step<K, V>(tree: &Tree<K, V>, index: u32) -> Link {
        if let Some(child) = Self::forward(&tree.nodes[index]) {
            return Some(Self::Opposite::extremum(tree, child));
        }

        let mut current = index;

        while let Some(parent) = tree.nodes[current].parent {
            if Self::forward(&tree.nodes[parent]) != Some(current) { return Some(parent); }
            current = parent;
        }

        None
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<K, V>(node: &Node<K, V>) -> Link { node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<K, V>(node: &Node<K, V>) -> Link { node.right }
}

/// An occupied entry.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub struct OccupiedEntry<'a, K: 'a, V: 'a> {
    tree: &'a mut Tree<K, V>,
    index: u32,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K { self.tree.key(self.index) }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V { &self.tree.nodes[self.index].value }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V { &mut self.tree.nodes[self.index].value }

    /// Returns a mutable reference to the entry's value with the same lifetime as the map.
    pub fn into_mut(self) -> &'a mut V {
        let OccupiedEntry { tree, index } = self;
        &mut tree.nodes[index].value
    }

    /// Replaces the entry's value with the given value, returning the old one.
    pub fn insert(&mut self, value: V) -> V { replace(self.get_mut(), value) }

    /// Returns a cursor to the entry.
    pub fn cursor(&self) -> Cursor { self.tree.cursor(Some(self.index)) }

    /// Removes the entry from the map and returns its key and value.
    pub fn remove(self) -> (K, V) { self.tree.remove(self.index) }
}

/// A vacant entry.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub struct VacantEntry<'a, K: 'a, V: 'a> {
    tree: &'a mut Tree<K, V>,
    key: K,
    slot: Option<(u32, Ordering)>,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Returns a reference to the key that would be inserted.
    pub fn key(&self) -> &K { &self.key }

    /// Returns the entry's key, leaving the map unchanged.
    pub fn into_key(self) -> K { self.key }

    /// Inserts the entry into the map with its key and the given value, returning a mutable
    /// reference to the value with the same lifetime as the map.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { tree, key, slot } = self;
        let index = tree.attach(slot, key, value);
        &mut tree.nodes[index].value
    }
}
