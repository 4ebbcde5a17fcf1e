//! A doubly linked list.

use compare::{self, Compare};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::mem;
use std::vec;
use tracing::debug;
use super::arena::{Arena, Cursor};
use super::error::{Error, Result};

type Link = Option<u32>;

struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

/// A doubly linked list.
///
/// Elements can be inserted and erased anywhere in constant time through [`Cursor`]s, which
/// stay valid until their element is erased.
pub struct List<T> {
    nodes: Arena<Node<T>>,
    head: Link,
    tail: Link,
}

impl<T> List<T> {
    /// Creates an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::new();
    ///
    /// list.push_back(2);
    /// list.push_front(1);
    /// list.push_back(3);
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn new() -> Self { List { nodes: Arena::new(), head: None, tail: None } }

    /// Creates a list of `len` default values.
    ///
    /// # Examples
    ///
    /// ```
    /// let list: tree_containers::List<u8> = tree_containers::List::with_len(3);
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&0, &0, &0]);
    /// ```
    pub fn with_len(len: usize) -> Self where T: Default {
        (0..len).map(|_| T::default()).collect()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool { self.head.is_none() }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns the largest number of elements the list can hold.
    pub fn max_size(&self) -> usize { Arena::<Node<T>>::max_len() }

    /// Removes all elements from the list. Every cursor into the list becomes invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Exchanges the contents of two lists. Cursors follow their elements.
    pub fn swap(&mut self, other: &mut List<T>) { mem::swap(self, other) }

    // Links a new node in front of `next`, or at the back for `None`.
    fn link_before(&mut self, next: Link, value: T) -> u32 {
        let prev = match next { Some(next) => self.nodes[next].prev, None => self.tail };
        let index = self.nodes.insert(Node { value: value, prev: prev, next: next });

        match prev { Some(prev) => self.nodes[prev].next = Some(index), None => self.head = Some(index) }
        match next { Some(next) => self.nodes[next].prev = Some(index), None => self.tail = Some(index) }

        index
    }

    fn unlink(&mut self, index: u32) -> T {
        let node = self.nodes.remove(index);

        match node.prev { Some(prev) => self.nodes[prev].next = node.next, None => self.head = node.next }
        match node.next { Some(next) => self.nodes[next].prev = node.prev, None => self.tail = node.prev }

        node.value
    }

    /// Inserts an element at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let head = self.head;
        self.link_before(head, value);
    }

    /// Inserts an element at the back of the list.
    pub fn push_back(&mut self, value: T) { self.link_before(None, value); }

    /// Removes the first element and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_containers::{Error, List};
    ///
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::Empty)?;
        Ok(self.unlink(head))
    }

    /// Removes the last element and returns it.
    pub fn pop_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::Empty)?;
        Ok(self.unlink(tail))
    }

    /// Returns a reference to the first element.
    pub fn front(&self) -> Result<&T> {
        self.head.map(|head| &self.nodes[head].value).ok_or(Error::Empty)
    }

    /// Returns a reference to the last element.
    pub fn back(&self) -> Result<&T> {
        self.tail.map(|tail| &self.nodes[tail].value).ok_or(Error::Empty)
    }

    /// Returns a mutable reference to the first element.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        let head = self.head.ok_or(Error::Empty)?;
        Ok(&mut self.nodes[head].value)
    }

    /// Returns a mutable reference to the last element.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let tail = self.tail.ok_or(Error::Empty)?;
        Ok(&mut self.nodes[tail].value)
    }

    /// Returns a cursor to the first element, or the end cursor if the list is empty.
    pub fn begin(&self) -> Cursor { self.nodes.cursor(self.head) }

    /// Returns the end cursor, which follows the last element.
    pub fn end(&self) -> Cursor { self.nodes.cursor(None) }

    /// Returns a cursor to the element after the given one.
    pub fn next_cursor(&self, cursor: Cursor) -> Result<Cursor> {
        let index = self.nodes.element(cursor)?;
        Ok(self.nodes.cursor(self.nodes[index].next))
    }

    /// Returns a cursor to the element before the given one.
    ///
    /// The end cursor is preceded by the last element. Stepping back from the first element
    /// fails with `Error::BeforeBegin`.
    pub fn prev_cursor(&self, cursor: Cursor) -> Result<Cursor> {
        let prev = match self.nodes.locate(cursor)? {
            None => self.tail,
            Some(index) => self.nodes[index].prev,
        };

        prev.map(|index| self.nodes.cursor(Some(index))).ok_or(Error::BeforeBegin)
    }

    /// Returns the element at the given cursor.
    pub fn get_at(&self, cursor: Cursor) -> Result<&T> {
        let index = self.nodes.element(cursor)?;
        Ok(&self.nodes[index].value)
    }

    /// Returns a mutable reference to the element at the given cursor.
    pub fn get_at_mut(&mut self, cursor: Cursor) -> Result<&mut T> {
        let index = self.nodes.element(cursor)?;
        Ok(&mut self.nodes[index].value)
    }

    /// Inserts an element before the one at the given cursor and returns a cursor to it.
    ///
    /// Inserting before the end cursor appends the element.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::from([1, 3]);
    ///
    /// let three = list.next_cursor(list.begin()).unwrap();
    /// let two = list.insert(three, 2).unwrap();
    /// list.insert(list.end(), 4).unwrap();
    ///
    /// assert_eq!(list.get_at(two), Ok(&2));
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2, &3, &4]);
    /// ```
    pub fn insert(&mut self, cursor: Cursor, value: T) -> Result<Cursor> {
        let next = self.nodes.locate(cursor)?;
        let index = self.link_before(next, value);
        Ok(self.nodes.cursor(Some(index)))
    }

    /// Inserts the values in order before the element at the given cursor and returns the
    /// given cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::from([1, 5]);
    ///
    /// let five = list.next_cursor(list.begin()).unwrap();
    /// assert_eq!(list.insert_many(five, vec![2, 3, 4]), Ok(five));
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2, &3, &4, &5]);
    /// ```
    pub fn insert_many<I>(&mut self, cursor: Cursor, values: I) -> Result<Cursor>
        where I: IntoIterator<Item=T> {

        let next = self.nodes.locate(cursor)?;
        for value in values { self.link_before(next, value); }
        Ok(cursor)
    }

    /// Appends the values in order.
    pub fn insert_many_back<I>(&mut self, values: I) where I: IntoIterator<Item=T> {
        for value in values { self.push_back(value); }
    }

    /// Pushes each value to the front in order, so the last value ends up first.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::from([1, 2]);
    /// list.insert_many_front(vec![7, 8, 9]);
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&9, &8, &7, &1, &2]);
    /// ```
    pub fn insert_many_front<I>(&mut self, values: I) where I: IntoIterator<Item=T> {
        for value in values { self.push_front(value); }
    }

    /// Removes the element at the given cursor and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_containers::{Error, List};
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let two = list.next_cursor(list.begin()).unwrap();
    ///
    /// assert_eq!(list.erase(two), Ok(2));
    /// assert_eq!(list.erase(two), Err(Error::InvalidCursor));
    /// assert_eq!(list.erase(list.end()), Err(Error::EndCursor));
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &3]);
    /// ```
    pub fn erase(&mut self, cursor: Cursor) -> Result<T> {
        let index = self.nodes.element(cursor)?;
        Ok(self.unlink(index))
    }

    /// Reverses the order of the elements by swapping values pairwise from both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::from([1, 2, 3, 4, 5]);
    /// list.reverse();
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&5, &4, &3, &2, &1]);
    /// ```
    pub fn reverse(&mut self) {
        let mut ends = (self.head, self.tail);

        for _ in 0..self.len() / 2 {
            let (front, back) = match ends {
                (Some(front), Some(back)) => (front, back),
                _ => break,
            };

            if let Some((a, b)) = self.nodes.pair_mut(front, back) { mem::swap(&mut a.value, &mut b.value); }
            ends = (self.nodes[front].next, self.nodes[back].prev);
        }
    }

    /// Removes every element that is equal to the element before it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::from([1, 1, 2, 2, 2, 1, 3, 3]);
    /// list.unique();
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2, &1, &3]);
    /// ```
    pub fn unique(&mut self) where T: PartialEq {
        let mut link = self.head;

        while let Some(index) = link {
            match self.nodes[index].next {
                Some(next) if self.nodes[next].value == self.nodes[index].value => {
                    self.unlink(next);
                }
                next => link = next,
            }
        }
    }

    /// Merges a sorted list into this sorted list, leaving `other` empty.
    ///
    /// An element of `other` is placed before an element of this list only if it is strictly
    /// less, so equal elements of this list come first. Values are moved, never cloned, and
    /// cursors into `other` are invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut a = tree_containers::List::from([1, 3, 5]);
    /// let mut b = tree_containers::List::from([2, 3, 6]);
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [&1, &2, &3, &3, &5, &6]);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut List<T>) where T: Ord {
        let cmp = compare::natural::<T>();
        let mut current = self.head;
        let moved = other.len();

        while let Some(head) = other.head {
            match current {
                Some(index) if !cmp.compares_lt(&other.nodes[head].value, &self.nodes[index].value) => {
                    current = self.nodes[index].next;
                }
                _ => {
                    let value = other.unlink(head);
                    self.link_before(current, value);
                }
            }
        }

        debug!(moved, len = self.len(), "merged lists");
    }

    /// Inserts clones of every element of `other`, in order, before the element at the given
    /// cursor. `other` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::from([1]);
    /// let other = tree_containers::List::from([2, 3, 4, 5]);
    ///
    /// list.splice(list.begin(), &other).unwrap();
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&2, &3, &4, &5, &1]);
    /// assert_eq!(other.len(), 4);
    /// ```
    pub fn splice(&mut self, cursor: Cursor, other: &List<T>) -> Result<()> where T: Clone {
        let next = self.nodes.locate(cursor)?;
        for value in other.iter() { self.link_before(next, value.clone()); }
        debug!(copied = other.len(), "spliced list");
        Ok(())
    }

    /// Sorts the list in ascending order with a stable merge sort.
    ///
    /// Nodes are relinked, so cursors keep referring to their elements.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::from([5, 1, 4, 2, 3]);
    /// list.sort();
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2, &3, &4, &5]);
    /// ```
    pub fn sort(&mut self) where T: Ord {
        let head = sort_chain(&mut self.nodes, self.head, &compare::natural::<T>());

        // only the forward links survive sorting
        let mut prev = None;
        let mut link = head;

        while let Some(index) = link {
            self.nodes[index].prev = prev;
            prev = Some(index);
            link = self.nodes[index].next;
        }

        self.head = head;
        self.tail = prev;
        debug!(len = self.len(), "sorted list");
    }

    /// Returns an iterator over the list's elements.
    pub fn iter(&self) -> Iter<T> {
        Iter { list: self, front: self.head, back: self.tail, len: self.len() }
    }

    /// Returns an iterator over the list's elements with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = tree_containers::List::from([1, 2, 3]);
    /// for value in list.iter_mut() { *value *= 10; }
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&10, &20, &30]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let mut order = Vec::with_capacity(self.len());
        let mut link = self.head;

        while let Some(index) = link {
            order.push(index);
            link = self.nodes[index].next;
        }

        let mut values: Vec<_> = (0..self.nodes.index_bound()).map(|_| None).collect();
        for (index, node) in self.nodes.iter_mut() { values[index as usize] = Some(&mut node.value); }

        IterMut { values: values, order: order.into_iter() }
    }
}

/// Sorts the chain of forward links starting at `head` and returns the new head.
fn sort_chain<T, C>(nodes: &mut Arena<Node<T>>, head: Link, cmp: &C) -> Link where C: Compare<T> {
    let head = match head { None => return None, Some(head) => head };

    let second = split(nodes, head);
    if second.is_none() { return Some(head); }

    let left = sort_chain(nodes, Some(head), cmp);
    let right = sort_chain(nodes, second, cmp);
    merge_chains(nodes, left, right, cmp)
}

/// Cuts the chain after its middle node and returns the head of the second half.
fn split<T>(nodes: &mut Arena<Node<T>>, head: u32) -> Link {
    let mut slow = head;
    let mut fast = nodes[head].next;

    while let Some(step) = fast.and_then(|fast| nodes[fast].next) {
        fast = nodes[step].next;
        if let Some(next) = nodes[slow].next { slow = next; }
    }

    nodes[slow].next.take()
}

fn merge_chains<T, C>(nodes: &mut Arena<Node<T>>, mut left: Link, mut right: Link, cmp: &C) -> Link
    where C: Compare<T> {

    let mut head = None;
    let mut tail: Link = None;

    loop {
        let index = match (left, right) {
            (Some(l), Some(r)) if cmp.compares_lt(&nodes[r].value, &nodes[l].value) => {
                right = nodes[r].next;
                r
            }
            (Some(l), Some(_)) => {
                left = nodes[l].next;
                l
            }
            (rest, None) | (None, rest) => {
                match tail { Some(tail) => nodes[tail].next = rest, None => head = rest }
                return head;
            }
        };

        match tail { Some(tail) => nodes[tail].next = Some(index), None => head = Some(index) }
        tail = Some(index);
    }
}

impl<T> Clone for List<T> where T: Clone {
    fn clone(&self) -> Self { self.iter().cloned().collect() }
}

impl<T> Debug for List<T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self { List::new() }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) { self.insert_many_back(it) }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut list = List::new();
        list.extend(it);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self { values.into_iter().collect() }
}

impl<T> Hash for List<T> where T: Hash {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        self.len().hash(h);
        for value in self.iter() { value.hash(h); }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> { self.iter_mut() }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self) }
}

impl<T> PartialEq for List<T> where T: PartialEq {
    fn eq(&self, other: &Self) -> bool { self.len() == other.len() && self.iter().eq(other.iter()) }
}

impl<T> Eq for List<T> where T: Eq {}

impl<T> PartialOrd for List<T> where T: PartialOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.iter().partial_cmp(other.iter()) }
}

impl<T> Ord for List<T> where T: Ord {
    fn cmp(&self, other: &Self) -> Ordering { self.iter().cmp(other.iter()) }
}

/// An iterator over the list's elements.
///
/// Acquire through [`List::iter`](struct.List.html#method.iter) or the `IntoIterator` trait.
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: Link,
    back: Link,
    len: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter { list: self.list, front: self.front, back: self.back, len: self.len }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 { return None; }

        let list = self.list;
        let node = &list.nodes[self.front?];
        self.len -= 1;
        self.front = node.next;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 { return None; }

        let list = self.list;
        let node = &list.nodes[self.back?];
        self.len -= 1;
        self.back = node.prev;
        Some(&node.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator over the list's elements with mutable references.
///
/// Acquire through [`List::iter_mut`](struct.List.html#method.iter_mut) or the `IntoIterator`
/// trait.
pub struct IterMut<'a, T: 'a> {
    values: Vec<Option<&'a mut T>>,
    order: vec::IntoIter<u32>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let index = self.order.next()?;
        self.values[index as usize].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.order.size_hint() }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        let index = self.order.next_back()?;
        self.values[index as usize].take()
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

/// An iterator that consumes the list.
///
/// Acquire through the `IntoIterator` trait.
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.pop_front().ok() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.0.len(), Some(self.0.len())) }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.pop_back().ok() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::List;

    /// Checks that the links agree in both directions and cover every node.
    fn assert_linked<T>(list: &List<T>) {
        let mut count = 0;
        let mut prev = None;
        let mut link = list.head;

        while let Some(index) = link {
            assert_eq!(list.nodes[index].prev, prev);
            prev = link;
            link = list.nodes[index].next;
            count += 1;
        }

        assert_eq!(list.tail, prev);
        assert_eq!(count, list.len());
    }

    fn values<T: Clone>(list: &List<T>) -> Vec<T> { list.iter().cloned().collect() }

    #[test]
    fn sort_is_stable() {
        // ordered by the number only, the letter tags the original position
        #[derive(Clone, Debug)]
        struct Key(u8, char);

        impl PartialEq for Key { fn eq(&self, other: &Key) -> bool { self.0 == other.0 } }
        impl Eq for Key {}
        impl PartialOrd for Key {
            fn partial_cmp(&self, other: &Key) -> Option<::std::cmp::Ordering> { Some(self.cmp(other)) }
        }
        impl Ord for Key { fn cmp(&self, other: &Key) -> ::std::cmp::Ordering { self.0.cmp(&other.0) } }

        let mut list = List::from([Key(3, 'a'), Key(1, 'b'), Key(3, 'c'), Key(2, 'd'), Key(1, 'e')]);
        list.sort();
        assert_linked(&list);

        let tags: Vec<char> = list.iter().map(|key| key.1).collect();
        assert_eq!(tags, ['b', 'e', 'd', 'a', 'c']);
    }

    #[test]
    fn sort_keeps_cursors() {
        let mut list = List::from([4, 2, 3, 1]);
        let two = list.next_cursor(list.begin()).unwrap();

        list.sort();
        assert_linked(&list);
        assert_eq!(list.get_at(two), Ok(&2));
        assert_eq!(list.get_at(list.next_cursor(two).unwrap()), Ok(&3));
        assert_eq!(list.back(), Ok(&4));
    }

    #[test]
    fn sort_small_lists() {
        let mut empty: List<u8> = List::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut one = List::from([1]);
        one.sort();
        assert_linked(&one);
        assert_eq!(values(&one), [1]);

        let mut two = List::from([2, 1]);
        two.sort();
        assert_linked(&two);
        assert_eq!(values(&two), [1, 2]);
    }

    #[test]
    fn merge_prefers_own_elements_on_ties() {
        let mut list = List::from([(1, 'a'), (2, 'a')]);
        let mut other = List::from([(1, 'a'), (0, 'b'), (3, 'b')]);

        // `other` is not sorted; only strictly smaller heads move in front
        list.merge(&mut other);
        assert_linked(&list);
        assert_linked(&other);
        assert_eq!(values(&list), [(1, 'a'), (1, 'a'), (0, 'b'), (2, 'a'), (3, 'b')]);
        assert!(other.is_empty());
    }

    #[test]
    fn reverse_keeps_middle() {
        let mut list = List::from([1, 2, 3]);
        let middle = list.next_cursor(list.begin()).unwrap();

        list.reverse();
        assert_linked(&list);
        assert_eq!(values(&list), [3, 2, 1]);
        assert_eq!(list.get_at(middle), Ok(&2));
    }

    #[test]
    fn erase_rewires_neighbours() {
        let mut list = List::from([1, 2, 3]);
        let first = list.begin();
        let last = list.prev_cursor(list.end()).unwrap();

        assert_eq!(list.erase(last), Ok(3));
        assert_linked(&list);
        assert_eq!(list.erase(first), Ok(1));
        assert_linked(&list);
        assert_eq!(values(&list), [2]);
        assert_eq!(list.front(), list.back());
    }

    #[test]
    fn unique_and_splice_keep_links() {
        let mut list = List::from([1, 1, 1]);
        list.unique();
        assert_linked(&list);
        assert_eq!(values(&list), [1]);

        let other = List::from([7, 8]);
        list.splice(list.end(), &other).unwrap();
        assert_linked(&list);
        assert_eq!(values(&list), [1, 7, 8]);
        assert_eq!(values(&other), [7, 8]);
    }

    #[test]
    fn iter_mut_in_list_order() {
        let mut list = List::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        let mut it = list.iter_mut();
        assert_eq!(it.len(), 3);
        *it.next_back().unwrap() = 30;
        *it.next().unwrap() = 10;
        drop(it);

        assert_eq!(values(&list), [10, 2, 30]);
    }
}
