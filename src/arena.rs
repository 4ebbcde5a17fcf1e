//! Slot storage for the node-based containers.
//!
//! Nodes live in a `Slab` and link to each other through `u32` slot indices. Every
//! stored value is stamped with a number that is unique within the process, so a
//! [`Cursor`] taken before its slot was freed, or taken from another container, no
//! longer matches and is rejected.

use slab::Slab;
use std::cmp;
use std::mem;
use std::ops;
use std::sync::atomic::{AtomicU64, Ordering};
use super::error::{Error, Result};

static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

fn fresh_stamp() -> u64 { NEXT_STAMP.fetch_add(1, Ordering::Relaxed) }

struct Stamped<T> {
    stamp: u64,
    value: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Handle {
    index: u32,
    stamp: u64,
}

/// A position in a node-based container: either an element or the end.
///
/// A cursor does not borrow its container. It stays usable while its element is
/// alive, follows the element through `swap` and moves of the container, and is
/// rejected with [`Error::InvalidCursor`] once the element has been erased or the
/// container cleared.
///
/// # Examples
///
/// ```
/// let mut set = tree_containers::Set::new();
/// let (cursor, _) = set.insert(7);
///
/// assert_eq!(set.get_at(cursor), Ok(&7));
/// assert_eq!(set.erase(cursor), Ok(7));
/// assert_eq!(set.get_at(cursor), Err(tree_containers::Error::InvalidCursor));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor(Option<Handle>);

impl Cursor {
    /// Checks if the cursor denotes the end of its container.
    pub fn is_end(&self) -> bool { self.0.is_none() }
}

pub struct Arena<T> {
    slots: Slab<Stamped<T>>,
}

impl<T> Arena<T> {
    pub fn new() -> Self { Arena { slots: Slab::new() } }

    pub fn with_capacity(capacity: usize) -> Self { Arena { slots: Slab::with_capacity(capacity) } }

    /// Returns the largest number of values an arena of `T` can hold.
    pub fn max_len() -> usize {
        let slot = cmp::max(1, mem::size_of::<Stamped<T>>());
        cmp::min(u32::MAX as usize, isize::MAX as usize / slot)
    }

    pub fn len(&self) -> usize { self.slots.len() }

    /// Stores `value` in a free slot and returns its index.
    pub fn insert(&mut self, value: T) -> u32 {
        let index = self.slots.insert(Stamped { stamp: fresh_stamp(), value: value });
        u32::try_from(index).expect("arena cannot address more than u32::MAX slots")
    }

    /// Frees the slot at `index` and returns its value.
    ///
    /// Panics if the slot is vacant.
    pub fn remove(&mut self, index: u32) -> T { self.slots.remove(index as usize).value }

    /// Frees every slot. Cursors issued before the call no longer resolve.
    pub fn clear(&mut self) { self.slots.clear() }

    /// Returns mutable references to two distinct occupied slots.
    pub fn pair_mut(&mut self, a: u32, b: u32) -> Option<(&mut T, &mut T)> {
        self.slots.get2_mut(a as usize, b as usize).map(|(a, b)| (&mut a.value, &mut b.value))
    }

    /// Returns the occupied slots with their indices.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
        self.slots.iter_mut().map(|(index, slot)| (index as u32, &mut slot.value))
    }

    /// Returns a bound that every occupied index is below.
    pub fn index_bound(&self) -> usize { self.slots.capacity() }

    /// Returns a cursor to the element at `link`, or the end cursor for `None`.
    pub fn cursor(&self, link: Option<u32>) -> Cursor {
        Cursor(link.map(|index| Handle { index: index, stamp: self.slots[index as usize].stamp }))
    }

    /// Resolves a cursor to a slot index, mapping the end cursor to `None`.
    pub fn locate(&self, cursor: Cursor) -> Result<Option<u32>> {
        match cursor.0 {
            None => Ok(None),
            Some(handle) => match self.slots.get(handle.index as usize) {
                Some(slot) if slot.stamp == handle.stamp => Ok(Some(handle.index)),
                _ => Err(Error::InvalidCursor),
            },
        }
    }

    /// Resolves a cursor that must denote an element.
    pub fn element(&self, cursor: Cursor) -> Result<u32> {
        self.locate(cursor)?.ok_or(Error::EndCursor)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self { Arena::new() }
}

impl<T> ops::Index<u32> for Arena<T> {
    type Output = T;
    fn index(&self, index: u32) -> &T { &self.slots[index as usize].value }
}

impl<T> ops::IndexMut<u32> for Arena<T> {
    fn index_mut(&mut self, index: u32) -> &mut T { &mut self.slots[index as usize].value }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Cursor};
    use crate::Error;

    #[test]
    fn reuses_freed_slots() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.remove(a), "a");

        let c = arena.insert("c");
        assert_eq!(c, a);
        assert_eq!(arena.len(), 2);
        assert!(arena.index_bound() >= 2);
        assert_eq!(arena[b], "b");
        assert_eq!(arena[c], "c");
    }

    #[test]
    fn stale_cursor_is_rejected() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let cursor = arena.cursor(Some(a));
        assert_eq!(arena.element(cursor), Ok(a));

        arena.remove(a);
        assert_eq!(arena.element(cursor), Err(Error::InvalidCursor));

        // the slot is reused under a new stamp
        let again = arena.insert(2);
        assert_eq!(again, a);
        assert_eq!(arena.element(cursor), Err(Error::InvalidCursor));
    }

    #[test]
    fn clear_invalidates_cursors() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let cursor = arena.cursor(Some(a));

        arena.clear();
        assert_eq!(arena.len(), 0);
        let b = arena.insert(1);
        assert_eq!(b, a);
        assert_eq!(arena.locate(cursor), Err(Error::InvalidCursor));
    }

    #[test]
    fn foreign_cursor_is_rejected() {
        let mut one = Arena::new();
        let mut two = Arena::new();
        let a = one.insert(1);
        let b = two.insert(1);

        assert_eq!(a, b);
        assert_eq!(two.locate(one.cursor(Some(a))), Err(Error::InvalidCursor));
    }

    #[test]
    fn end_cursor() {
        let arena: Arena<u8> = Arena::new();
        assert_eq!(arena.locate(Cursor(None)), Ok(None));
        assert_eq!(arena.element(Cursor(None)), Err(Error::EndCursor));
        assert!(arena.cursor(None).is_end());
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut arena = Arena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);

        if let Some((x, y)) = arena.pair_mut(b, a) {
            assert_eq!((*x, *y), (2, 1));
            ::std::mem::swap(x, y);
        }

        assert_eq!((arena[a], arena[b]), (2, 1));
    }
}
