//! A last-in, first-out stack.

use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::mem;
use super::error::{Error, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A last-in, first-out stack over a singly linked chain of boxed nodes.
///
/// # Examples
///
/// ```
/// use tree_containers::{Error, Stack};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(Error::Empty));
/// ```
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self { Stack { top: None, len: 0 } }

    /// Checks if the stack is empty.
    pub fn is_empty(&self) -> bool { self.top.is_none() }

    /// Returns the number of elements in the stack.
    pub fn len(&self) -> usize { self.len }

    /// Exchanges the contents of two stacks.
    pub fn swap(&mut self, other: &mut Stack<T>) { mem::swap(self, other) }

    /// Pushes an element onto the stack.
    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value: value, next: next }));
        self.len += 1;
    }

    /// Removes the top element and returns it.
    pub fn pop(&mut self) -> Result<T> {
        let node = *self.top.take().ok_or(Error::Empty)?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns a reference to the top element.
    pub fn top(&self) -> Result<&T> { self.top.as_ref().map(|node| &node.value).ok_or(Error::Empty) }

    /// Returns a mutable reference to the top element.
    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.top.as_mut().map(|node| &mut node.value).ok_or(Error::Empty)
    }

    /// Pushes the values in order, so the last value ends up on top.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut stack = tree_containers::Stack::new();
    /// stack.insert_many_back(vec![1, 2, 3]);
    /// assert_eq!(stack.top(), Ok(&3));
    /// assert_eq!(stack.len(), 3);
    /// ```
    pub fn insert_many_back<I>(&mut self, values: I) where I: IntoIterator<Item=T> {
        for value in values { self.push(value); }
    }

    /// Returns an iterator over the stack's elements from top to bottom.
    pub fn iter(&self) -> Iter<T> { Iter { next: self.top.as_deref(), len: self.len } }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link { link = node.next.take(); }
    }
}

impl<T> Clone for Stack<T> where T: Clone {
    fn clone(&self) -> Self {
        let values: Vec<&T> = self.iter().collect();
        values.into_iter().rev().cloned().collect()
    }
}

impl<T> Debug for Stack<T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self { Stack::new() }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) { self.insert_many_back(it) }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(it);
        stack
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(values: [T; N]) -> Self { values.into_iter().collect() }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T> PartialEq for Stack<T> where T: PartialEq {
    fn eq(&self, other: &Self) -> bool { self.len == other.len && self.iter().eq(other.iter()) }
}

impl<T> Eq for Stack<T> where T: Eq {}

/// An iterator over the stack's elements from top to bottom.
pub struct Iter<'a, T: 'a> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::Stack;
    use crate::Error;

    #[test]
    fn lifo_order() {
        let mut stack = Stack::from([1, 2, 3]);
        assert_eq!(stack.iter().collect::<Vec<_>>(), [&3, &2, &1]);

        *stack.top_mut().unwrap() = 30;
        assert_eq!(stack.pop(), Ok(30));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::Empty));
        assert_eq!(stack.top(), Err(Error::Empty));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn clone_keeps_order() {
        let stack = Stack::from(["a", "b", "c"]);
        let copy = stack.clone();

        assert_eq!(copy, stack);
        assert_eq!(copy.top(), Ok(&"c"));
        assert_eq!(format!("{:?}", copy), r#"["c", "b", "a"]"#);
    }

    #[test]
    fn long_stack_drops_without_recursion() {
        let mut stack = Stack::new();
        stack.insert_many_back(0..200_000);
        assert_eq!(stack.len(), 200_000);
        drop(stack);
    }
}
