//! A growable array.

use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::FromIterator;
use std::mem;
use std::ops;
use std::slice;
use std::vec;
use tracing::trace;
use super::error::{Error, Result};

/// A contiguous growable array that doubles its capacity when it runs out of room.
///
/// # Examples
///
/// ```
/// let mut vector = tree_containers::Vector::new();
///
/// vector.push_back(1);
/// assert_eq!(vector.capacity(), 1);
/// vector.push_back(2);
/// assert_eq!(vector.capacity(), 2);
/// vector.push_back(3);
/// assert_eq!(vector.capacity(), 4);
///
/// assert_eq!(vector.data(), [1, 2, 3]);
/// ```
pub struct Vector<T> {
    buf: Vec<T>,
    capacity: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector without allocating.
    pub fn new() -> Self { Vector { buf: Vec::new(), capacity: 0 } }

    /// Creates a vector of `len` default values.
    pub fn with_len(len: usize) -> Self where T: Default {
        (0..len).map(|_| T::default()).collect()
    }

    fn from_vec(mut buf: Vec<T>) -> Self {
        buf.shrink_to_fit();
        let capacity = buf.len();
        Vector { buf: buf, capacity: capacity }
    }

    /// Checks if the vector is empty.
    pub fn is_empty(&self) -> bool { self.buf.is_empty() }

    /// Returns the number of elements in the vector.
    pub fn len(&self) -> usize { self.buf.len() }

    /// Returns the number of elements the vector can hold without reallocating.
    pub fn capacity(&self) -> usize { self.capacity }

    /// Returns the largest number of elements the vector can hold.
    pub fn max_size(&self) -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    fn grow_to(&mut self, capacity: usize) {
        if capacity <= self.capacity { return; }

        self.buf.reserve_exact(capacity - self.buf.len());
        trace!(from = self.capacity, to = capacity, "reallocating vector");
        self.capacity = capacity;
    }

    fn grow_for_one(&mut self) {
        if self.buf.len() == self.capacity {
            let doubled = if self.capacity == 0 { 1 } else { self.capacity.saturating_mul(2) };
            let capacity = doubled.min(self.max_size());
            self.grow_to(capacity);
        }
    }

    /// Ensures the vector can hold at least `capacity` elements. Never shrinks.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_containers::{Error, Vector};
    ///
    /// let mut vector: Vector<u32> = Vector::new();
    /// vector.reserve(10).unwrap();
    /// assert_eq!(vector.capacity(), 10);
    ///
    /// vector.reserve(5).unwrap();
    /// assert_eq!(vector.capacity(), 10);
    ///
    /// let max = vector.max_size();
    /// assert_eq!(vector.reserve(max + 1), Err(Error::CapacityOverflow { requested: max + 1, max: max }));
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        let max = self.max_size();
        if capacity > max { return Err(Error::CapacityOverflow { requested: capacity, max: max }); }

        self.grow_to(capacity);
        Ok(())
    }

    /// Reduces the capacity to the number of elements.
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
        self.capacity = self.buf.len();
    }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(&mut self) { self.buf.clear() }

    /// Exchanges the contents of two vectors.
    pub fn swap(&mut self, other: &mut Vector<T>) { mem::swap(self, other) }

    /// Returns a reference to the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_containers::{Error, Vector};
    ///
    /// let vector = Vector::from([3, 8, 15]);
    /// assert_eq!(vector.at(1), Ok(&8));
    /// assert_eq!(vector.at(6), Err(Error::OutOfRange { index: 6, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.buf.len();
        self.buf.get(index).ok_or(Error::OutOfRange { index: index, len: len })
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.buf.len();
        self.buf.get_mut(index).ok_or(Error::OutOfRange { index: index, len: len })
    }

    /// Returns a reference to the first element.
    pub fn front(&self) -> Result<&T> { self.buf.first().ok_or(Error::Empty) }

    /// Returns a reference to the last element.
    pub fn back(&self) -> Result<&T> { self.buf.last().ok_or(Error::Empty) }

    /// Returns the elements as a slice.
    pub fn data(&self) -> &[T] { &self.buf }

    /// Inserts an element at `index`, shifting later elements back, and returns `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize> {
        let len = self.buf.len();
        if index > len { return Err(Error::OutOfRange { index: index, len: len }); }

        self.grow_for_one();
        self.buf.insert(index, value);
        Ok(index)
    }

    /// Removes the element at `index`, shifting later elements forward, and returns it.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        let len = self.buf.len();
        if index >= len { return Err(Error::OutOfRange { index: index, len: len }); }

        Ok(self.buf.remove(index))
    }

    /// Appends an element.
    pub fn push_back(&mut self, value: T) {
        self.grow_for_one();
        self.buf.push(value);
    }

    /// Removes the last element and returns it.
    pub fn pop_back(&mut self) -> Result<T> { self.buf.pop().ok_or(Error::Empty) }

    /// Inserts the values in order starting at `index` and returns the index after the last
    /// inserted value.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut vector = tree_containers::Vector::from([1, 2, 3, 7, 8]);
    ///
    /// assert_eq!(vector.insert_many(3, vec![4, 5, 6]), Ok(6));
    /// assert_eq!(vector.data(), [1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    pub fn insert_many<I>(&mut self, index: usize, values: I) -> Result<usize>
        where I: IntoIterator<Item=T> {

        let len = self.buf.len();
        if index > len { return Err(Error::OutOfRange { index: index, len: len }); }

        let mut position = index;

        for value in values {
            self.grow_for_one();
            self.buf.insert(position, value);
            position += 1;
        }

        Ok(position)
    }

    /// Appends the values in order.
    pub fn insert_many_back<I>(&mut self, values: I) where I: IntoIterator<Item=T> {
        for value in values { self.push_back(value); }
    }

    /// Returns an iterator over the vector's elements.
    pub fn iter(&self) -> slice::Iter<T> { self.buf.iter() }

    /// Returns an iterator over the vector's elements with mutable references.
    pub fn iter_mut(&mut self) -> slice::IterMut<T> { self.buf.iter_mut() }
}

impl<T> Clone for Vector<T> where T: Clone {
    fn clone(&self) -> Self { Vector::from_vec(self.buf.clone()) }
}

impl<T> Debug for Vector<T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.buf.fmt(f) }
}

impl<T> Default for Vector<T> {
    fn default() -> Self { Vector::new() }
}

impl<T> ops::Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &[T] { &self.buf }
}

impl<T> ops::DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] { &mut self.buf }
}

impl<T> ops::Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> ops::IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) { self.insert_many_back(it) }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self { Vector::from_vec(it.into_iter().collect()) }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self { values.into_iter().collect() }
}

impl<T> Hash for Vector<T> where T: Hash {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { self.buf.hash(h) }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> slice::Iter<'a, T> { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> slice::IterMut<'a, T> { self.iter_mut() }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> vec::IntoIter<T> { self.buf.into_iter() }
}

impl<T> PartialEq for Vector<T> where T: PartialEq {
    fn eq(&self, other: &Self) -> bool { self.buf == other.buf }
}

impl<T> Eq for Vector<T> where T: Eq {}

#[cfg(test)]
mod tests {
    use super::Vector;
    use crate::Error;

    #[test]
    fn capacity_doubles() {
        let mut vector = Vector::new();
        let mut capacities = vec![];

        for i in 0..9 {
            vector.push_back(i);
            capacities.push(vector.capacity());
        }

        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn literal_and_sized_construction() {
        let vector = Vector::from([1, 2, 3]);
        assert_eq!(vector.capacity(), 3);

        let zeros: Vector<i32> = Vector::with_len(4);
        assert_eq!(zeros.data(), [0, 0, 0, 0]);
        assert_eq!(zeros.capacity(), 4);
    }

    #[test]
    fn bounds_are_checked() {
        let mut vector = Vector::from([3, 8, 15]);

        assert_eq!(vector.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(vector.insert(4, 0), Err(Error::OutOfRange { index: 4, len: 3 }));
        assert_eq!(vector.erase(3), Err(Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(vector.data(), [3, 8, 15]);

        assert_eq!(vector.insert(3, 16), Ok(3));
        assert_eq!(vector.erase(0), Ok(3));
        assert_eq!(vector.data(), [8, 15, 16]);
    }

    #[test]
    fn empty_vector_fails_loudly() {
        let mut vector: Vector<char> = Vector::new();
        assert_eq!(vector.pop_back(), Err(Error::Empty));
        assert_eq!(vector.front(), Err(Error::Empty));
        assert_eq!(vector.back(), Err(Error::Empty));
    }

    #[test]
    #[should_panic(expected = "index 5 out of range for length 1")]
    fn index_panics_out_of_range() {
        let vector = Vector::from([1]);
        let _value = vector[5];
    }

    #[test]
    fn zero_sized_max_size() {
        let vector: Vector<()> = Vector::new();
        assert_eq!(vector.max_size(), usize::MAX);

        let bytes: Vector<u8> = Vector::new();
        assert_eq!(bytes.max_size(), isize::MAX as usize);
    }

    #[test]
    fn shrink_and_clear() {
        let mut vector = Vector::new();
        vector.insert_many_back(vec![1, 2, 3]);
        assert_eq!(vector.capacity(), 4);

        vector.shrink_to_fit();
        assert_eq!(vector.capacity(), 3);

        vector.clear();
        assert!(vector.is_empty());
        assert_eq!(vector.capacity(), 3);
    }
}
