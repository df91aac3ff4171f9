//! Traits providing genericity over the storage backing each half of a deque.

use core::ops::{Bound, Range, RangeBounds};

use crate::error::RangeOutOfBounds;

/// An ordered, growable, randomly indexable sequence usable as one half of a
/// [`Deque`](crate::Deque).
///
/// The deque algorithms depend only on this capability set, never on a
/// concrete storage type. Any implementor can back a deque, including
/// [`Deque`](crate::Deque) itself, which makes deques of deques expressible
/// through plain generic instantiation.
///
/// Implementors should report `len` in O(1), and `push` and `pop` should be
/// amortized O(1). `split_off` and `reverse` are only called while
/// rebalancing, so linear implementations are fine.
pub trait Sequence<T>: Default {
    /// The type produced by [`slice`](Sequence::slice).
    ///
    /// For storage with shared buffers this should be a view; otherwise an
    /// owned copy of the requested elements is acceptable.
    type Slice: Sequence<T>;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` exactly when the sequence contains zero elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is
    /// out of bounds.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns a mutable reference to the element at `index`, or [`None`] if
    /// it is out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Appends an element to the end of the sequence.
    fn push(&mut self, value: T);

    /// Removes the last element and returns it, or [`None`] if the sequence
    /// is empty.
    fn pop(&mut self) -> Option<T>;

    /// Inserts an element at position `index`, shifting all elements after
    /// it towards the end.
    ///
    /// # Panics
    /// Panics if `index > len`.
    fn insert(&mut self, index: usize, value: T);

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it towards the start, or returns [`None`] if `index`
    /// is out of bounds.
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Splits the sequence in two at the given index, returning the elements
    /// in `[at, len)` and keeping `[0, at)`.
    ///
    /// # Panics
    /// Panics if `at > len`.
    fn split_off(&mut self, at: usize) -> Self;

    /// Reverses the order of the elements in place.
    fn reverse(&mut self);

    /// Returns the elements in the physical range `range`.
    ///
    /// Must not modify `self`.
    ///
    /// # Panics
    /// Panics if `range` is inverted or extends past the end of the sequence.
    fn slice(&self, range: Range<usize>) -> Self::Slice
    where
        T: Clone;
}

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl<T> Sequence<T> for alloc::vec::Vec<T> {
    /// Slicing a `Vec` copies the requested elements.
    type Slice = alloc::vec::Vec<T>;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        alloc::vec::Vec::push(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        alloc::vec::Vec::pop(self)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        alloc::vec::Vec::insert(self, index, value)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        if index < <[T]>::len(self) {
            Some(alloc::vec::Vec::remove(self, index))
        } else {
            None
        }
    }

    #[inline]
    fn split_off(&mut self, at: usize) -> Self {
        alloc::vec::Vec::split_off(self, at)
    }

    #[inline]
    fn reverse(&mut self) {
        <[T]>::reverse(self)
    }

    fn slice(&self, range: Range<usize>) -> Self
    where
        T: Clone,
    {
        self[range].to_vec()
    }
}

/// Resolves any [`RangeBounds`] into a half-open range within `[0, len)`.
pub(crate) fn normalize_range<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<Range<usize>, RangeOutOfBounds> {
    let start = match range.start_bound() {
        Bound::Included(&start) => Some(start),
        Bound::Excluded(&start) => start.checked_add(1),
        Bound::Unbounded => Some(0),
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => Some(len),
    };

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= len => Ok(start..end),
        (start, end) => Err(RangeOutOfBounds {
            start: start.unwrap_or(usize::MAX),
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}
