//! An ordered map based on a binary search tree.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::mem;
use std::ops;
use super::arena::Cursor;
use super::error::{Error, Result};
use super::node::{self, Dir, KeyOrder, Left, Right, Tree};

pub use super::node::{OccupiedEntry, VacantEntry};

/// An ordered map based on an unbalanced binary search tree.
///
/// Every node links to its parent, so the map can be walked in either direction from any
/// position without auxiliary storage. Positions are exposed as [`Cursor`]s that stay valid
/// until their entry is erased.
///
/// The behavior of this map is unspecified if a key's ordering relative to any other key
/// changes while the key is in the map. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Map<K, V> {
    tree: Tree<K, V>,
}

impl<K, V> Map<K, V> {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map { tree: Tree::new() } }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.len() == 0 }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns the largest number of entries the map can hold.
    pub fn max_size(&self) -> usize { self.tree.max_size() }

    /// Removes all entries from the map.
    ///
    /// Nodes are dropped children first. Every cursor into the map becomes invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// map.insert(2, "b");
    /// let (cursor, _) = map.insert(1, "a");
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// assert!(map.get_at(cursor).is_err());
    /// ```
    pub fn clear(&mut self) { self.tree.clear() }

    /// Exchanges the contents of two maps. Cursors follow their entries.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut a = tree_containers::Map::from([(1, "a")]);
    /// let mut b = tree_containers::Map::from([(2, "b"), (3, "c")]);
    /// let cursor = a.begin();
    ///
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(b.get_at(cursor), Ok((&1, &"a")));
    /// ```
    pub fn swap(&mut self, other: &mut Map<K, V>) { mem::swap(self, other) }

    /// Returns the entry with the smallest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    /// assert_eq!(map.first(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// ```
    pub fn first(&self) -> Option<(&K, &V)> { self.tree.first().map(|index| self.tree.key_value(index)) }

    /// Returns the entry with the largest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    /// assert_eq!(map.last(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.last(), Some((&3, &"c")));
    /// ```
    pub fn last(&self) -> Option<(&K, &V)> { self.tree.last().map(|index| self.tree.key_value(index)) }

    /// Returns a cursor to the entry with the smallest key, or the end cursor if the map is
    /// empty.
    pub fn begin(&self) -> Cursor { self.tree.cursor(self.tree.first()) }

    /// Returns the end cursor, which follows the entry with the largest key.
    pub fn end(&self) -> Cursor { self.tree.cursor(None) }

    /// Returns a cursor to the entry that follows the given one in key order.
    ///
    /// The entry with the largest key is followed by the end cursor. Advancing the end cursor
    /// fails with `Error::EndCursor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_containers::{Error, Map};
    ///
    /// let map = Map::from([(2, "b"), (1, "a")]);
    ///
    /// let first = map.begin();
    /// let second = map.next_cursor(first).unwrap();
    /// assert_eq!(map.get_at(second), Ok((&2, &"b")));
    ///
    /// let end = map.next_cursor(second).unwrap();
    /// assert!(end.is_end());
    /// assert_eq!(map.next_cursor(end), Err(Error::EndCursor));
    /// ```
    pub fn next_cursor(&self, cursor: Cursor) -> Result<Cursor> {
        let index = self.tree.element(cursor)?;
        Ok(self.tree.cursor(Right::step(&self.tree, index)))
    }

    /// Returns a cursor to the entry that precedes the given one in key order.
    ///
    /// The end cursor is preceded by the entry with the largest key. Stepping back from the
    /// entry with the smallest key, or from the end of an empty map, fails with
    /// `Error::BeforeBegin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_containers::{Error, Map};
    ///
    /// let map = Map::from([(2, "b"), (1, "a")]);
    ///
    /// let last = map.prev_cursor(map.end()).unwrap();
    /// assert_eq!(map.get_at(last), Ok((&2, &"b")));
    /// assert_eq!(map.prev_cursor(map.begin()), Err(Error::BeforeBegin));
    /// ```
    pub fn prev_cursor(&self, cursor: Cursor) -> Result<Cursor> {
        let prev = match self.tree.locate(cursor)? {
            None => self.tree.last(),
            Some(index) => Left::step(&self.tree, index),
        };

        prev.map(|index| self.tree.cursor(Some(index))).ok_or(Error::BeforeBegin)
    }

    /// Returns the entry at the given cursor.
    pub fn get_at(&self, cursor: Cursor) -> Result<(&K, &V)> {
        let index = self.tree.element(cursor)?;
        Ok(self.tree.key_value(index))
    }

    /// Returns the entry at the given cursor with a mutable reference to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    /// let (cursor, _) = map.insert(1, "a");
    ///
    /// *map.get_at_mut(cursor).unwrap().1 = "b";
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_at_mut(&mut self, cursor: Cursor) -> Result<(&K, &mut V)> {
        let index = self.tree.element(cursor)?;
        Ok(self.tree.key_value_mut(index))
    }

    /// Removes the entry at the given cursor and returns its key and value.
    ///
    /// Fails with `Error::EndCursor` for the end cursor and with `Error::InvalidCursor` for a
    /// cursor whose entry is already gone. Cursors to other entries stay valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_containers::{Error, Map};
    ///
    /// let mut map = Map::from([(2, "b"), (1, "a"), (3, "c")]);
    /// let cursor = map.find(&2);
    ///
    /// assert_eq!(map.erase(cursor), Ok((2, "b")));
    /// assert_eq!(map.erase(cursor), Err(Error::InvalidCursor));
    /// assert_eq!(map.erase(map.end()), Err(Error::EndCursor));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<(K, V)> {
        let index = self.tree.element(cursor)?;
        Ok(self.tree.remove(index))
    }

    /// Returns an iterator that consumes the map.
    ///
    /// The iterator yields the entries in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), Some((3, "c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn into_iter(self) -> IntoIter<K, V> { IntoIter(self.tree.into_iter()) }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next_back(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V> { Iter(self.tree.iter()) }

    /// Returns an iterator over the map's entries with mutable references to the values.
    ///
    /// The iterator yields the entries in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// let mut i = 1;
    ///
    /// for (_, value) in map.iter_mut() {
    ///     assert_eq!(i, *value);
    ///     *value *= 2;
    ///     i += 1;
    /// }
    ///
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map[&"b"], 4);
    /// assert_eq!(map[&"c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> { IterMut(self.tree.iter_mut()) }

    /// Returns an iterator over the map's keys in ascending order.
    pub fn keys(&self) -> Keys<K, V> { Keys(self.iter()) }

    /// Returns an iterator over the map's values in ascending order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let map = tree_containers::Map::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&1, &2]);
    /// assert_eq!(map.values().collect::<Vec<_>>(), [&"a", &"b"]);
    /// ```
    pub fn values(&self) -> Values<K, V> { Values(self.iter()) }
}

impl<K, V> Map<K, V> where K: Ord {
    /// Inserts an entry into the map unless the map already contains the key.
    ///
    /// Returns a cursor to the entry holding the key and whether the entry was created. When
    /// the key is already present, the map is unchanged and the given key and value are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// let (cursor, inserted) = map.insert(1, "a");
    /// assert!(inserted);
    ///
    /// assert_eq!(map.insert(1, "b"), (cursor, false));
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Cursor, bool) {
        let (index, inserted) = self.tree.insert(&KeyOrder, key, value);
        (self.tree.cursor(Some(index)), inserted)
    }

    /// Inserts an entry into the map, overwriting the value of an existing entry.
    ///
    /// The flag is `true` if a new entry was created and `false` if an existing value was
    /// overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// assert!(map.insert_or_assign(1, "a").1);
    /// assert!(!map.insert_or_assign(1, "b").1);
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Cursor, bool) {
        let (index, inserted) = self.tree.insert_or_assign(&KeyOrder, key, value);
        (self.tree.cursor(Some(index)), inserted)
    }

    /// Inserts every entry of the iterator in order and returns the result of each insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// let results = map.insert_many(vec![(1, "a"), (2, "b"), (1, "c")]);
    /// let flags: Vec<bool> = results.iter().map(|&(_, inserted)| inserted).collect();
    ///
    /// assert_eq!(flags, [true, true, false]);
    /// assert_eq!(results[2].0, results[0].0);
    /// assert_eq!(map[&1], "a");
    /// ```
    pub fn insert_many<I>(&mut self, entries: I) -> Vec<(Cursor, bool)>
        where I: IntoIterator<Item=(K, V)> {

        entries.into_iter().map(|(key, value)| self.insert(key, value)).collect()
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), None);
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where K: Borrow<Q>, Q: Ord {
        self.tree.find(&KeyOrder, key).map(|index| self.tree.remove(index))
    }

    /// Returns the map's entry corresponding to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut counts = tree_containers::Map::new();
    ///
    /// for s in vec!["a", "b", "a", "c", "a", "b"] {
    ///     *counts.entry(s).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(counts[&"a"], 3);
    /// assert_eq!(counts[&"b"], 2);
    /// assert_eq!(counts[&"c"], 1);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<K, V> { self.tree.entry(&KeyOrder, key) }

    /// Returns a mutable reference to the value for the given key, inserting the default
    /// value first if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: tree_containers::Map<&str, i32> = tree_containers::Map::new();
    ///
    /// *map.get_or_insert_default("a") += 2;
    /// *map.get_or_insert_default("a") += 3;
    ///
    /// assert_eq!(map[&"a"], 5);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V where V: Default {
        self.entry(key).or_default()
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where K: Borrow<Q>, Q: Ord {
        self.tree.find(&KeyOrder, key).is_some()
    }

    /// Returns a cursor to the entry with the given key, or the end cursor if the map does
    /// not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let map = tree_containers::Map::from([(1, "a")]);
    ///
    /// assert_eq!(map.get_at(map.find(&1)), Ok((&1, &"a")));
    /// assert!(map.find(&2).is_end());
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor where K: Borrow<Q>, Q: Ord {
        self.tree.cursor(self.tree.find(&KeyOrder, key))
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where K: Borrow<Q>, Q: Ord {
        self.tree.find(&KeyOrder, key).map(|index| self.tree.key_value(index).1)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = tree_containers::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    ///
    /// {
    ///     let value = map.get_mut(&1).unwrap();
    ///     assert_eq!(*value, "a");
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where K: Borrow<Q>, Q: Ord {
        match self.tree.find(&KeyOrder, key) {
            None => None,
            Some(index) => Some(self.tree.key_value_mut(index).1),
        }
    }

    /// Returns a reference to the value associated with the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_containers::{Error, Map};
    ///
    /// let map = Map::from([(1, "a")]);
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn at<Q: ?Sized>(&self, key: &Q) -> Result<&V> where K: Borrow<Q>, Q: Ord {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the given key.
    pub fn at_mut<Q: ?Sized>(&mut self, key: &Q) -> Result<&mut V> where K: Borrow<Q>, Q: Ord {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Moves every entry of `other` whose key is absent from this map into this map.
    ///
    /// Keys and values are moved, never cloned. Entries whose keys this map already contains
    /// remain in `other`, and cursors to them stay valid; cursors to moved entries are
    /// invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut a = tree_containers::Map::from([(1, "a"), (3, "c")]);
    /// let mut b = tree_containers::Map::from([(2, "b"), (3, "x")]);
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// assert_eq!(b.iter().collect::<Vec<_>>(), [(&3, &"x")]);
    /// ```
    pub fn merge(&mut self, other: &mut Map<K, V>) { self.tree.merge(&KeyOrder, &mut other.tree) }
}

impl<K, V> Debug for Map<K, V> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self { Map::new() }
}

impl<K, V> Extend<(K, V)> for Map<K, V> where K: Ord {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V> FromIterator<(K, V)> for Map<K, V> where K: Ord {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map = Map::new();
        map.extend(it);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Map<K, V> where K: Ord {
    fn from(entries: [(K, V); N]) -> Self { entries.into_iter().collect() }
}

impl<K, V> Hash for Map<K, V> where K: Hash, V: Hash {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        self.len().hash(h);
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, Q: ?Sized> ops::Index<&'a Q> for Map<K, V> where K: Ord + Borrow<Q>, Q: Ord {
    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V> IntoIterator for &'a mut Map<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.into_iter() }
}

impl<K, V> PartialEq for Map<K, V> where K: PartialEq, V: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for Map<K, V> where K: Eq, V: Eq {}

impl<K, V> PartialOrd for Map<K, V> where K: PartialOrd, V: PartialOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.iter().partial_cmp(other.iter()) }
}

impl<K, V> Ord for Map<K, V> where K: Ord, V: Ord {
    fn cmp(&self, other: &Self) -> Ordering { self.iter().cmp(other.iter()) }
}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order.
///
/// # Examples
///
/// Acquire through [`Map::into_iter`](struct.Map.html#method.into_iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = tree_containers::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct IntoIter<K, V>(node::IntoIter<K, V>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the values.
///
/// The iterator yields the entries in ascending order.
///
/// # Examples
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut map = tree_containers::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<'a, K, V>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// The iterator yields the entries in ascending order.
///
/// # Examples
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = tree_containers::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &mut map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct IterMut<'a, K: 'a, V: 'a>(node::IterMut<'a, K, V>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator over the map's keys in ascending order.
///
/// Acquire through [`Map::keys`](struct.Map.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Keys<'a, K, V> { Keys(self.0.clone()) }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a K> { self.0.next_back().map(|e| e.0) }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over the map's values in ascending order of their keys.
///
/// Acquire through [`Map::values`](struct.Map.html#method.values).
pub struct Values<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Values<'a, K, V> { Values(self.0.clone()) }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> { self.0.next_back().map(|e| e.1) }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

/// An entry in the map.
///
/// See [`Map::entry`](struct.Map.html#method.entry) for an example.
pub enum Entry<'a, K: 'a, V: 'a> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns the entry's key.
    pub fn key(&self) -> &K {
        match *self {
            Entry::Occupied(ref e) => e.key(),
            Entry::Vacant(ref e) => e.key(),
        }
    }

    /// Returns the entry's value, inserting the given default if the entry is vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Returns the entry's value, inserting the given function's result if the entry is vacant.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V where F: FnOnce() -> V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default()),
        }
    }

    /// Returns the entry's value, inserting the default value if the entry is vacant.
    pub fn or_default(self) -> &'a mut V where V: Default {
        self.or_insert_with(V::default)
    }
}
