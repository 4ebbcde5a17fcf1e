//! A first-in, first-out queue.

use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::mem;
use super::arena::Arena;
use super::error::{Error, Result};

type Link = Option<u32>;

struct Node<T> {
    value: T,
    next: Link,
}

/// A first-in, first-out queue over a chain of singly linked nodes.
///
/// # Examples
///
/// ```
/// use tree_containers::{Error, Queue};
///
/// let mut queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.front(), Ok(&1));
/// assert_eq!(queue.back(), Ok(&2));
/// assert_eq!(queue.pop(), Ok(1));
/// assert_eq!(queue.pop(), Ok(2));
/// assert_eq!(queue.pop(), Err(Error::Empty));
/// ```
pub struct Queue<T> {
    nodes: Arena<Node<T>>,
    head: Link,
    tail: Link,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self { Queue { nodes: Arena::new(), head: None, tail: None } }

    /// Checks if the queue is empty.
    pub fn is_empty(&self) -> bool { self.head.is_none() }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Exchanges the contents of two queues.
    pub fn swap(&mut self, other: &mut Queue<T>) { mem::swap(self, other) }

    /// Adds an element at the back of the queue.
    pub fn push(&mut self, value: T) {
        let index = self.nodes.insert(Node { value: value, next: None });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }

        self.tail = Some(index);
    }

    /// Removes the element at the front of the queue and returns it.
    pub fn pop(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::Empty)?;
        let node = self.nodes.remove(head);

        self.head = node.next;
        if self.head.is_none() { self.tail = None; }

        Ok(node.value)
    }

    /// Returns a reference to the element at the front of the queue.
    pub fn front(&self) -> Result<&T> {
        self.head.map(|head| &self.nodes[head].value).ok_or(Error::Empty)
    }

    /// Returns a reference to the element at the back of the queue.
    pub fn back(&self) -> Result<&T> {
        self.tail.map(|tail| &self.nodes[tail].value).ok_or(Error::Empty)
    }

    /// Pushes the values in order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut queue = tree_containers::Queue::from([1]);
    /// queue.insert_many_back(vec![2, 3]);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn insert_many_back<I>(&mut self, values: I) where I: IntoIterator<Item=T> {
        for value in values { self.push(value); }
    }

    /// Returns an iterator over the queue's elements from front to back.
    pub fn iter(&self) -> Iter<T> { Iter { queue: self, next: self.head, len: self.len() } }
}

impl<T> Clone for Queue<T> where T: Clone {
    fn clone(&self) -> Self { self.iter().cloned().collect() }
}

impl<T> Debug for Queue<T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self { Queue::new() }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) { self.insert_many_back(it) }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(it);
        queue
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(values: [T; N]) -> Self { values.into_iter().collect() }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T> PartialEq for Queue<T> where T: PartialEq {
    fn eq(&self, other: &Self) -> bool { self.len() == other.len() && self.iter().eq(other.iter()) }
}

impl<T> Eq for Queue<T> where T: Eq {}

/// An iterator over the queue's elements from front to back.
pub struct Iter<'a, T: 'a> {
    queue: &'a Queue<T>,
    next: Link,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let queue = self.queue;
        let node = &queue.nodes[self.next?];
        self.next = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::Queue;
    use crate::Error;

    #[test]
    fn fifo_order() {
        let mut queue = Queue::from([1, 2, 3]);
        queue.push(4);

        let mut popped = vec![];
        while let Ok(value) = queue.pop() { popped.push(value); }

        assert_eq!(popped, [1, 2, 3, 4]);
        assert!(queue.is_empty());
        assert_eq!(queue.front(), Err(Error::Empty));
        assert_eq!(queue.back(), Err(Error::Empty));
    }

    #[test]
    fn reuse_after_draining() {
        let mut queue = Queue::new();
        queue.push("a");
        assert_eq!(queue.pop(), Ok("a"));

        queue.push("b");
        queue.push("c");
        assert_eq!(queue.front(), Ok(&"b"));
        assert_eq!(queue.back(), Ok(&"c"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn clone_and_swap() {
        let mut a = Queue::from([1, 2]);
        let mut b = a.clone();
        b.push(3);
        assert_ne!(a, b);

        a.swap(&mut b);
        assert_eq!(a.len(), 3);
        assert_eq!(b.iter().collect::<Vec<_>>(), [&1, &2]);
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
    }
}
