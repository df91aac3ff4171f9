//! A reference-counted, copy-on-write sequence with constant-time slicing.
//!
//! A [`SharedVec`] is a window onto a buffer that may be shared with other
//! `SharedVec`s. Cloning, slicing and reversing only adjust the window, as
//! does splitting a shared buffer; the buffer is copied the first time a
//! shared window is written to. A uniquely owned buffer is split by moving
//! the tail out, and popping from one moves the element out.
//! This makes it the natural backing store for deques that are sliced often,
//! see [`SharedDeque`](crate::SharedDeque).

use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;
use core::ops::Range;

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::storage::Sequence;

/// A growable sequence over a shared, copy-on-write buffer.
///
/// # Examples
/// ```
/// use duodeque::storage::Sequence;
/// use duodeque::SharedVec;
///
/// let whole = SharedVec::from(vec![1, 2, 3, 4, 5]);
/// let mut part = whole.slice(1..4);
/// assert_eq!(part, [2, 3, 4]);
///
/// part.push(6);
/// assert_eq!(part, [2, 3, 4, 6]);
/// assert_eq!(whole, [1, 2, 3, 4, 5]);
/// ```
pub struct SharedVec<T> {
    buf: Rc<Vec<T>>,
    start: usize,
    end: usize,
    reversed: bool,
}

impl<T> SharedVec<T> {
    /// Constructs a new, empty `SharedVec`.
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Returns the number of elements visible through this window.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` exactly when the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the underlying buffer is shared with another
    /// `SharedVec`.
    ///
    /// # Examples
    /// ```
    /// use duodeque::SharedVec;
    ///
    /// let a = SharedVec::from(vec!['a', 'b']);
    /// assert!(!a.is_shared());
    /// let b = a.clone();
    /// assert!(a.is_shared() && b.is_shared());
    /// drop(b);
    /// assert!(!a.is_shared());
    /// ```
    #[inline]
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.buf) > 1
    }

    #[inline(always)]
    fn physical_index(&self, index: usize) -> usize {
        if self.reversed {
            self.end - 1 - index
        } else {
            self.start + index
        }
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is
    /// out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }

        self.buf.get(self.physical_index(index))
    }

    /// Returns a front-to-back iterator over the visible elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.buf[self.start..self.end].iter(),
            reversed: self.reversed,
        }
    }
}

impl<T: Clone> SharedVec<T> {
    /// Ensures the buffer is uniquely owned and holds exactly the visible
    /// elements in order, copying the window out of a shared buffer.
    fn make_mut(&mut self) -> &mut Vec<T> {
        if self.is_shared() {
            let copy = self.iter().cloned().collect::<Vec<T>>();
            *self = Self::from(copy);
        }

        let vec = Rc::make_mut(&mut self.buf);
        if !(self.start == 0 && self.end == vec.len() && !self.reversed) {
            vec.truncate(self.end);
            vec.drain(..self.start);
            if self.reversed {
                vec.reverse();
            }

            self.start = 0;
            self.end = vec.len();
            self.reversed = false;
        }

        vec
    }
}

impl<T> Default for SharedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedVec<T> {
    /// Clones the window; the buffer is shared, not copied.
    fn clone(&self) -> Self {
        SharedVec {
            buf: Rc::clone(&self.buf),
            start: self.start,
            end: self.end,
            reversed: self.reversed,
        }
    }
}

impl<T> From<Vec<T>> for SharedVec<T> {
    fn from(vec: Vec<T>) -> Self {
        SharedVec {
            start: 0,
            end: vec.len(),
            buf: Rc::new(vec),
            reversed: false,
        }
    }
}

impl<T> core::iter::FromIterator<T> for SharedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Clone> Sequence<T> for SharedVec<T> {
    type Slice = SharedVec<T>;

    #[inline]
    fn len(&self) -> usize {
        SharedVec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        SharedVec::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }

        self.make_mut().get_mut(index)
    }

    fn push(&mut self, value: T) {
        let vec = self.make_mut();
        vec.push(value);
        self.end += 1;
    }

    fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        if !self.is_shared() {
            let vec = self.make_mut();
            let result = vec.pop();
            let len = vec.len();
            self.end = len;
            return result;
        }

        // the buffer stays intact for the other windows onto it
        let result = SharedVec::get(self, self.len() - 1).cloned();
        if self.reversed {
            self.start += 1;
        } else {
            self.end -= 1;
        }

        result
    }

    fn insert(&mut self, index: usize, value: T) {
        let len = self.len();
        assert!(
            index <= len,
            "insertion index (is {}) should be <= len (is {})",
            index,
            len
        );

        let vec = self.make_mut();
        vec.insert(index, value);
        self.end += 1;
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }

        let vec = self.make_mut();
        let result = vec.remove(index);
        self.end -= 1;
        Some(result)
    }

    fn split_off(&mut self, at: usize) -> Self {
        let len = self.len();
        assert!(
            at <= len,
            "`at` split index (is {}) should be <= len (is {})",
            at,
            len
        );

        if !self.is_shared() {
            let vec = self.make_mut();
            let tail = vec.split_off(at);
            let len = vec.len();
            self.end = len;
            return Self::from(tail);
        }

        let mut other = self.clone();
        if self.reversed {
            other.end = self.end - at;
            self.start = self.end - at;
        } else {
            other.start = self.start + at;
            self.end = self.start + at;
        }

        other
    }

    #[inline]
    fn reverse(&mut self) {
        self.reversed = !self.reversed;
    }

    fn slice(&self, range: Range<usize>) -> Self
    where
        T: Clone,
    {
        let len = self.len();
        assert!(
            range.start <= range.end && range.end <= len,
            "range {}..{} out of bounds for sequence of length {}",
            range.start,
            range.end,
            len
        );

        let mut result = self.clone();
        if self.reversed {
            result.start = self.end - range.end;
            result.end = self.end - range.start;
        } else {
            result.start = self.start + range.start;
            result.end = self.start + range.end;
        }

        result
    }
}

impl<T: Debug> Debug for SharedVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<A, B> PartialEq<SharedVec<B>> for SharedVec<A>
where
    A: PartialEq<B>,
{
    fn eq(&self, other: &SharedVec<B>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SharedVec<T> {}

impl<T: PartialEq, R: AsRef<[T]>> PartialEq<R> for SharedVec<T> {
    fn eq(&self, other: &R) -> bool {
        let other = other.as_ref();
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// An iterator over the elements of a [`SharedVec`].
///
/// This `struct` is created by the [`iter`](SharedVec::iter) method on
/// [`SharedVec`].
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, T>,
    reversed: bool,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            reversed: self.reversed,
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SharedVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use alloc::vec;

    #[test]
    fn windows_share_one_buffer() {
        let base = SharedVec::from(vec![0, 1, 2, 3, 4, 5, 6, 7]);
        let mid = Sequence::slice(&base, 2..6);
        let inner = Sequence::slice(&mid, 1..3);

        assert_eq!(mid, [2, 3, 4, 5]);
        assert_eq!(inner, [3, 4]);
        assert_eq!(Rc::strong_count(&base.buf), 3);
        assert!(Rc::ptr_eq(&base.buf, &inner.buf));
    }

    #[test]
    fn reversed_windows_read_backwards() {
        let mut v = SharedVec::from(vec![0, 1, 2, 3, 4, 5]);
        Sequence::reverse(&mut v);
        assert_eq!(v, [5, 4, 3, 2, 1, 0]);
        assert_eq!(v.get(0), Some(&5));
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);

        let part = Sequence::slice(&v, 1..4);
        assert_eq!(part, [4, 3, 2]);

        let mut head = v.clone();
        let tail = Sequence::split_off(&mut head, 2);
        assert_eq!(head, [5, 4]);
        assert_eq!(tail, [3, 2, 1, 0]);
    }

    #[test]
    fn splitting_a_shared_buffer_does_not_copy() {
        let base = SharedVec::from(vec!['a', 'b', 'c', 'd']);
        let mut head = base.clone();
        let tail = Sequence::split_off(&mut head, 1);
        assert_eq!(head, ['a']);
        assert_eq!(tail, ['b', 'c', 'd']);
        assert!(Rc::ptr_eq(&head.buf, &tail.buf));
        assert!(Rc::ptr_eq(&base.buf, &tail.buf));
    }

    #[test]
    fn splitting_a_unique_buffer_moves_the_tail() {
        let counter = DropCounter::new();
        let mut head: SharedVec<_> = (0..6).map(|i| counter.new_droppable(i)).collect();
        Sequence::reverse(&mut head);

        let tail = Sequence::split_off(&mut head, 2);
        assert!(!head.is_shared());
        assert!(!tail.is_shared());
        assert_eq!(counter.dropped(), 0);
        assert_eq!(head.iter().map(|d| d.value).collect::<Vec<_>>(), [5, 4]);
        assert_eq!(tail.iter().map(|d| d.value).collect::<Vec<_>>(), [3, 2, 1, 0]);

        drop(tail);
        assert_eq!(counter.dropped(), 4);
        drop(head);
        assert_eq!(counter.dropped(), 6);
    }

    #[test]
    fn pop_from_a_unique_reversed_window_moves_out() {
        let counter = DropCounter::new();
        let mut v: SharedVec<_> = (0..4).map(|i| counter.new_droppable(i)).collect();
        v = Sequence::slice(&v, 1..4);
        Sequence::reverse(&mut v);

        let last = Sequence::pop(&mut v).unwrap();
        assert_eq!(last.value, 1);
        drop(last);
        // the element outside the window goes when the window is canonicalized
        assert_eq!(counter.dropped(), 2);

        while let Some(x) = Sequence::pop(&mut v) {
            drop(x);
        }
        drop(v);
        assert_eq!(counter.dropped(), 4);
    }

    #[test]
    fn writes_copy_only_shared_buffers() {
        let mut unique = SharedVec::from(vec![1, 2, 3]);
        let before = Rc::as_ptr(&unique.buf);
        unique.push(4);
        assert_eq!(Rc::as_ptr(&unique.buf), before);

        let snapshot = unique.clone();
        *Sequence::get_mut(&mut unique, 0).unwrap() = 10;
        assert_eq!(unique, [10, 2, 3, 4]);
        assert_eq!(snapshot, [1, 2, 3, 4]);
        assert!(!unique.is_shared());
        assert!(!snapshot.is_shared());
    }

    #[test]
    fn writes_through_a_window_canonicalize_it() {
        let mut v = SharedVec::from(vec![0, 1, 2, 3, 4, 5]);
        v = Sequence::slice(&v, 1..5);
        Sequence::reverse(&mut v);
        assert!(!v.is_shared());

        Sequence::insert(&mut v, 1, 9);
        assert_eq!(v, [4, 9, 3, 2, 1]);
        assert_eq!(*v.buf, [4, 9, 3, 2, 1]);
        assert_eq!(Sequence::remove(&mut v, 0), Some(4));
        assert_eq!(Sequence::remove(&mut v, 9), None);
        assert_eq!(v, [9, 3, 2, 1]);
    }

    #[test]
    fn pop_moves_out_of_unique_buffers() {
        let counter = DropCounter::new();
        let mut v: SharedVec<_> = (0..4).map(|i| counter.new_droppable(i)).collect();

        let last = Sequence::pop(&mut v).unwrap();
        assert_eq!(last.value, 3);
        assert_eq!(counter.dropped(), 0);
        drop(last);
        assert_eq!(counter.dropped(), 1);

        drop(v);
        assert_eq!(counter.dropped(), 4);
    }

    #[test]
    fn pop_from_shared_window_leaves_the_buffer_alone() {
        let base = SharedVec::from(vec![0, 1, 2, 3]);
        let mut tail = Sequence::slice(&base, 1..4);
        Sequence::reverse(&mut tail);

        assert_eq!(Sequence::pop(&mut tail), Some(1));
        assert_eq!(Sequence::pop(&mut tail), Some(2));
        assert_eq!(tail, [3]);
        assert_eq!(base, [0, 1, 2, 3]);
        assert!(Rc::ptr_eq(&base.buf, &tail.buf));

        assert_eq!(Sequence::pop(&mut tail), Some(3));
        assert_eq!(Sequence::pop(&mut tail), None);
    }

    #[test]
    #[should_panic]
    fn slice_past_the_end_panics() {
        let v = SharedVec::from(vec![1, 2]);
        let _ = Sequence::slice(&v, 1..3);
    }
}
