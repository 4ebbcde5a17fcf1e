//! An ordered set based on a binary search tree.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::mem;
use super::arena::Cursor;
use super::error::Result;
use super::map::{self, Map};

/// An ordered set based on an unbalanced binary search tree.
///
/// The behavior of this set is unspecified if an item's ordering relative to any other item
/// changes while the item is in the set. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Set<T> {
    map: Map<T, ()>,
}

impl<T> Set<T> {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tree_containers::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set { map: Map::new() } }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tree_containers::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tree_containers::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.map.len() }

    /// Returns the largest number of items the set can hold.
    pub fn max_size(&self) -> usize { self.map.max_size() }

    /// Removes all items from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tree_containers::Set::from([2, 1, 3]);
    ///
    /// assert_eq!(set.len(), 3);
    /// set.clear();
    ///
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.map.clear(); }

    /// Exchanges the contents of two sets.
    pub fn swap(&mut self, other: &mut Set<T>) { mem::swap(self, other) }

    /// Returns the set's smallest item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let set = tree_containers::Set::from([2, 1, 3]);
    /// assert_eq!(set.first(), Some(&1));
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn first(&self) -> Option<&T> { self.map.first().map(|e| e.0) }

    /// Returns the set's largest item, or `None` if the set is empty.
    pub fn last(&self) -> Option<&T> { self.map.last().map(|e| e.0) }

    /// Returns a cursor to the smallest item, or the end cursor if the set is empty.
    pub fn begin(&self) -> Cursor { self.map.begin() }

    /// Returns the end cursor.
    pub fn end(&self) -> Cursor { self.map.end() }

    /// Returns a cursor to the item that follows the given one.
    ///
    /// See [`Map::next_cursor`](../map/struct.Map.html#method.next_cursor).
    pub fn next_cursor(&self, cursor: Cursor) -> Result<Cursor> { self.map.next_cursor(cursor) }

    /// Returns a cursor to the item that precedes the given one.
    ///
    /// See [`Map::prev_cursor`](../map/struct.Map.html#method.prev_cursor).
    ///
    /// # Examples
    ///
    /// ```
    /// let set = tree_containers::Set::from([3, 1, 2]);
    ///
    /// let mut items = vec![];
    /// let mut cursor = set.end();
    ///
    /// while let Ok(prev) = set.prev_cursor(cursor) {
    ///     items.push(*set.get_at(prev).unwrap());
    ///     cursor = prev;
    /// }
    ///
    /// assert_eq!(items, [3, 2, 1]);
    /// ```
    pub fn prev_cursor(&self, cursor: Cursor) -> Result<Cursor> { self.map.prev_cursor(cursor) }

    /// Returns the item at the given cursor.
    pub fn get_at(&self, cursor: Cursor) -> Result<&T> { self.map.get_at(cursor).map(|e| e.0) }

    /// Removes the item at the given cursor and returns it.
    ///
    /// Fails with `Error::EndCursor` for the end cursor and with `Error::InvalidCursor` for a
    /// cursor whose item is already gone.
    pub fn erase(&mut self, cursor: Cursor) -> Result<T> { self.map.erase(cursor).map(|e| e.0) }

    /// Returns an iterator over the set's items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tree_containers::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter(self.map.iter()) }
}

impl<T> Set<T> where T: Ord {
    /// Inserts an item into the set unless an equal item is already present.
    ///
    /// Returns a cursor to the item in the set and whether the given item was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tree_containers::Set::new();
    ///
    /// assert!(set.insert(1).1);
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1).1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> (Cursor, bool) { self.map.insert(item, ()) }

    /// Inserts every item of the iterator in order and returns the result of each insertion.
    pub fn insert_many<I>(&mut self, items: I) -> Vec<(Cursor, bool)> where I: IntoIterator<Item=T> {
        self.map.insert_many(items.into_iter().map(|item| (item, ())))
    }

    /// Removes the item equal to the given item from the set and returns it, or `None` if the
    /// set does not contain such an item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tree_containers::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.remove(&1), Some(1));
    ///
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> Option<T> where T: Borrow<Q>, Q: Ord {
        self.map.remove(item).map(|e| e.0)
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = tree_containers::Set::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where T: Borrow<Q>, Q: Ord {
        self.map.contains_key(item)
    }

    /// Returns a cursor to the item equal to the given item, or the end cursor if the set
    /// does not contain such an item.
    pub fn find<Q: ?Sized>(&self, item: &Q) -> Cursor where T: Borrow<Q>, Q: Ord {
        self.map.find(item)
    }

    /// Returns a reference to the set's item equal to the given item.
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where T: Borrow<Q>, Q: Ord {
        self.map.get_at(self.map.find(item)).ok().map(|e| e.0)
    }

    /// Moves every item of `other` that is absent from this set into this set.
    ///
    /// Items this set already contains remain in `other`. Cursors to moved items are
    /// invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut a = tree_containers::Set::from([1, 3, 5]);
    /// let mut b = tree_containers::Set::from([2, 3, 4]);
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.iter().cloned().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    /// assert_eq!(b.iter().cloned().collect::<Vec<_>>(), [3]);
    /// ```
    pub fn merge(&mut self, other: &mut Set<T>) { self.map.merge(&mut other.map) }
}

impl<T> Debug for Set<T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self { Set::new() }
}

impl<T> Extend<T> for Set<T> where T: Ord {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T> FromIterator<T> for Set<T> where T: Ord {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut set = Set::new();
        set.extend(it);
        set
    }
}

impl<T, const N: usize> From<[T; N]> for Set<T> where T: Ord {
    fn from(items: [T; N]) -> Self { items.into_iter().collect() }
}

impl<T> Hash for Set<T> where T: Hash {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { self.map.hash(h); }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.map.into_iter()) }
}

impl<T> PartialEq for Set<T> where T: PartialEq {
    fn eq(&self, other: &Self) -> bool { self.map == other.map }
}

impl<T> Eq for Set<T> where T: Eq {}

impl<T> PartialOrd for Set<T> where T: PartialOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.map.partial_cmp(&other.map) }
}

impl<T> Ord for Set<T> where T: Ord {
    fn cmp(&self, other: &Self) -> Ordering { self.map.cmp(&other.map) }
}

/// An iterator that consumes the set.
///
/// The iterator yields the items in ascending order.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut set = tree_containers::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in set {
///     println!("{:?}", item);
/// }
/// ```
pub struct IntoIter<T>(map::IntoIter<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back().map(|e| e.0) }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator over the set's items.
///
/// The iterator yields the items in ascending order.
///
/// # Examples
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut set = tree_containers::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in &set {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T: 'a>(map::Iter<'a, T, ()>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back().map(|e| e.0) }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
