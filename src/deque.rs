//! A double-ended queue implemented with two growable sequences.
//!
//! The queue is split into a `front` and a `back` half. The back half holds
//! its elements in logical order, while the front half holds them in reverse,
//! so that both ends of the queue are at the end of some sequence:
//!
//! ```text
//!      front (reversed)        back
//!   +---+---+---+---+      +---+---+---+
//!   | 3 | 2 | 1 | 0 |      | 4 | 5 | 6 |
//!   +---+---+---+---+      +---+---+---+
//!                 ^                  ^
//!      push_front/pop_front   push_back/pop_back
//! ```
//!
//! This gives amortized O(1) inserts and removals at both ends, and O(1)
//! indexing like a vector. Whenever one half runs empty while the other holds
//! two or more elements, the nonempty half is split down the middle and one
//! part is moved over, so no sequence of operations can keep popping from a
//! starved half.

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Index, IndexMut, Range, RangeBounds};

use crate::error::{index_out_of_range, range_out_of_bounds, IndexOutOfRange, RangeOutOfBounds};
use crate::storage::{normalize_range, Sequence};

/// The physical position of a logical index within a [`Deque`].
///
/// Returned by [`Deque::translate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexLocation {
    /// The element lives at this index of the front half.
    Front(usize),
    /// The element lives at this index of the back half.
    Back(usize),
}

#[inline(always)]
fn locate(front_len: usize, index: usize) -> IndexLocation {
    if index < front_len {
        IndexLocation::Front(front_len - 1 - index)
    } else {
        IndexLocation::Back(index - front_len)
    }
}

#[inline]
fn locate_range(front_len: usize, range: Range<usize>) -> (Range<usize>, Range<usize>) {
    let Range { start, end } = range;

    // front is reversed, so logical [a, b) lives at physical [f - b, f - a)
    let a = start.min(front_len);
    let b = end.min(front_len);
    let front = front_len - b..front_len - a;

    let back = start.max(front_len) - front_len..end.max(front_len) - front_len;
    (front, back)
}

/// A double-ended queue implemented with two growable sequences.
///
/// The "default" usage of this type as a queue is to use [`push_back`](Deque::push_back)
/// to add to the queue, and [`pop_front`](Deque::pop_front) to remove from it.
///
/// `Deque` is generic over the storage `S` used for each of its halves; any
/// [`Sequence`] will do, including another `Deque`. See [`AllocDeque`],
/// [`SharedDeque`] and [`NestedDeque`] for the common choices.
///
/// Its halves never sit in a state where one is empty and the other holds
/// more than one element; every mutating method restores this before it
/// returns.
pub struct Deque<T, S: Sequence<T>> {
    front: S,
    back: S,
    elem: PhantomData<T>,
}

/// A deque whose halves are slices of another deque's halves.
///
/// This is the type returned by [`Deque::slice`]. Since it is a `Deque` in
/// its own right, everything that works on the source works on the slice.
pub type DequeSlice<T, S> = Deque<T, <S as Sequence<T>>::Slice>;

impl<T, S: Sequence<T>> Deque<T, S> {
    /// Constructs a new, empty `Deque`.
    ///
    /// # Examples
    /// ```
    /// let deque = duodeque::AllocDeque::<u32>::new();
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Deque {
            front: S::default(),
            back: S::default(),
            elem: PhantomData,
        }
    }

    /// Creates a `Deque` from its two halves, `front` holding its elements
    /// in reverse order.
    ///
    /// The halves are rebalanced if one of them is empty.
    ///
    /// # Examples
    /// ```
    /// let deque = duodeque::AllocDeque::from_parts(vec![2, 1, 0], vec![3, 4]);
    /// assert_eq!(deque, &[0, 1, 2, 3, 4]);
    ///
    /// let deque = duodeque::AllocDeque::from_parts(vec![], vec![0, 1, 2, 3]);
    /// assert_eq!(deque.as_parts(), (&vec![1, 0], &vec![2, 3]));
    /// ```
    pub fn from_parts(front: S, back: S) -> Self {
        let mut result = Deque {
            front,
            back,
            elem: PhantomData,
        };
        result.rebalance();
        result
    }

    /// Decomposes a `Deque` into its front and back halves.
    ///
    /// These are the same arguments in the same order as the arguments to
    /// [`from_parts`](Deque::from_parts).
    pub fn into_parts(self) -> (S, S) {
        (self.front, self.back)
    }

    /// Returns references to the front and back halves.
    ///
    /// The front half holds its elements in reverse order.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::new();
    /// deque.push_back(2);
    /// deque.push_front(1);
    /// deque.push_front(0);
    /// assert_eq!(deque.as_parts(), (&vec![1, 0], &vec![2]));
    /// ```
    #[inline]
    pub fn as_parts(&self) -> (&S, &S) {
        (&self.front, &self.back)
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Determines which half holds the element at logical position `index`,
    /// and where.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    /// ```
    /// use duodeque::{AllocDeque, IndexLocation, IndexOutOfRange};
    ///
    /// let deque = AllocDeque::from([0, 1, 2, 3, 4, 5]);
    /// assert_eq!(deque.translate(0), Ok(IndexLocation::Front(2)));
    /// assert_eq!(deque.translate(4), Ok(IndexLocation::Back(1)));
    /// assert_eq!(deque.translate(6), Err(IndexOutOfRange { index: 6, len: 6 }));
    /// ```
    #[inline]
    pub fn translate(&self, index: usize) -> Result<IndexLocation, IndexOutOfRange> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfRange { index, len });
        }

        Ok(locate(self.front.len(), index))
    }

    /// Maps a logical range onto the physical ranges of the front and back
    /// halves that hold its elements.
    ///
    /// The front range still has to be read in reverse. A half that holds
    /// none of the elements gets an empty range.
    ///
    /// # Errors
    /// Returns [`RangeOutOfBounds`] if the range is inverted or its end is
    /// past the end of the deque.
    ///
    /// # Examples
    /// ```
    /// let deque = duodeque::AllocDeque::from([0, 1, 2, 3, 4, 5]);
    /// assert_eq!(deque.translate_range(0..=2), Ok((0..3, 0..0)));
    /// assert_eq!(deque.translate_range(4..=5), Ok((0..0, 1..3)));
    /// assert_eq!(deque.translate_range(2..=5), Ok((0..1, 0..3)));
    /// assert_eq!(deque.translate_range(3..3), Ok((0..0, 0..0)));
    /// assert!(deque.translate_range(2..7).is_err());
    /// ```
    pub fn translate_range<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<(Range<usize>, Range<usize>), RangeOutOfBounds> {
        let range = normalize_range(range, self.len())?;
        Ok(locate_range(self.front.len(), range))
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.translate(index).ok()? {
            IndexLocation::Front(i) => self.front.get(i),
            IndexLocation::Back(i) => self.back.get(i),
        }
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.translate(index).ok()? {
            IndexLocation::Front(i) => self.front.get_mut(i),
            IndexLocation::Back(i) => self.back.get_mut(i),
        }
    }

    /// Returns a reference to the front element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the front element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the back element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Returns a mutable reference to the back element, or [`None`] if the `Deque` is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// Prepends an element to the front of the `Deque`.
    ///
    /// Like [`push_back`](Deque::push_back), a following
    /// [`pop_front`](Deque::pop_front) restores the logical contents but may
    /// leave the elements split differently between the halves.
    pub fn push_front(&mut self, value: T) {
        self.front.push(value);
        self.rebalance();
    }

    /// Appends an element to the back of the `Deque`.
    ///
    /// Following this with [`pop_back`](Deque::pop_back) restores the
    /// logical contents, though not necessarily the split between the halves:
    ///
    /// ```
    /// let mut deque = duodeque::AllocDeque::from([0]);
    /// assert_eq!(deque.as_parts(), (&vec![], &vec![0]));
    ///
    /// deque.push_back(1);
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque, &[0]);
    /// assert_eq!(deque.as_parts(), (&vec![0], &vec![]));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.back.push(value);
        self.rebalance();
    }

    /// Removes the first element and returns it, or [`None`] if the `Deque` is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let result = self.front.pop().or_else(|| self.back.pop());
        self.rebalance();
        result
    }

    /// Removes the last element and returns it, or [`None`] if the `Deque` is empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::new();
    /// deque.push_front(3);
    /// deque.push_front(1);
    /// assert_eq!(deque.pop_back(), Some(3));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let result = self.back.pop().or_else(|| self.front.pop());
        self.rebalance();
        result
    }

    /// Inserts an element at `index` within the `Deque`.
    ///
    /// The element is inserted into whichever half holds the elements around
    /// `index`, shifting that half's elements on the far side of it.
    ///
    /// # Panics
    /// Panics if `index` is greater than the deque's length.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::from(['a', 'b', 'c']);
    /// deque.insert(1, 'd');
    /// assert_eq!(deque, &['a', 'd', 'b', 'c']);
    /// deque.insert(4, 'e');
    /// assert_eq!(deque, &['a', 'd', 'b', 'c', 'e']);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.len();
        if index > len {
            index_out_of_range(index, len);
        }

        let front_len = self.front.len();
        if index < front_len {
            self.front.insert(front_len - index, value);
        } else {
            self.back.insert(index - front_len, value);
        }

        self.rebalance();
    }

    /// Removes and returns the element at `index` from the `Deque`, or [`None`]
    /// if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::from([1, 2, 3]);
    /// assert_eq!(deque.remove(1), Some(2));
    /// assert_eq!(deque.remove(5), None);
    /// assert_eq!(deque, &[1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let result = match self.translate(index).ok()? {
            IndexLocation::Front(i) => self.front.remove(i),
            IndexLocation::Back(i) => self.back.remove(i),
        };

        self.rebalance();
        result
    }

    /// Splits the `Deque` into two at the given index.
    ///
    /// Returns a newly allocated `Deque` containing the elements in the range
    /// `[at, len)`. Afterwards, `self` contains elements `[0, at)`.
    ///
    /// # Panics
    /// Panics if `at > len`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::from([1, 2, 3, 4, 5]);
    /// let tail = deque.split_off(2);
    /// assert_eq!(deque, &[1, 2]);
    /// assert_eq!(tail, &[3, 4, 5]);
    /// ```
    #[track_caller]
    pub fn split_off(&mut self, at: usize) -> Self {
        let len = self.len();
        assert!(
            at <= len,
            "`at` split index (is {}) should be <= len (is {})",
            at,
            len
        );

        let front_len = self.front.len();
        let mut other = if at <= front_len {
            let kept = self.front.split_off(front_len - at);
            let front = mem::replace(&mut self.front, kept);
            Deque {
                front,
                back: mem::take(&mut self.back),
                elem: PhantomData,
            }
        } else {
            Deque {
                front: S::default(),
                back: self.back.split_off(at - front_len),
                elem: PhantomData,
            }
        };

        self.rebalance();
        other.rebalance();
        other
    }

    /// Moves all the elements of `other` to the back of `self`, leaving
    /// `other` empty.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::from([1, 2]);
    /// let mut other = duodeque::AllocDeque::from([3, 4]);
    /// deque.append(&mut other);
    /// assert_eq!(deque, &[1, 2, 3, 4]);
    /// assert!(other.is_empty());
    /// ```
    pub fn append<O: Sequence<T>>(&mut self, other: &mut Deque<T, O>) {
        while let Some(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    /// Reverses the order of the elements in constant time.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::from([1, 2, 3]);
    /// deque.reverse();
    /// assert_eq!(deque, &[3, 2, 1]);
    /// ```
    #[inline]
    pub fn reverse(&mut self) {
        mem::swap(&mut self.front, &mut self.back);
    }

    /// Clears the `Deque`, dropping all values.
    pub fn clear(&mut self) {
        self.front = S::default();
        self.back = S::default();
    }

    /// Returns `true` if the `Deque` contains an element equal to the given value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|y| y == x)
    }

    /// Returns a deque holding the elements in the given range.
    ///
    /// Each half of the result is a [`slice`](Sequence::slice) of the
    /// corresponding half of `self`, so for storage with shared buffers such
    /// as [`SharedVec`](crate::SharedVec) nothing is copied. `self` is never
    /// modified.
    ///
    /// # Errors
    /// Returns [`RangeOutOfBounds`] if the range is inverted or its end is
    /// past the end of the deque.
    pub fn try_slice<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<DequeSlice<T, S>, RangeOutOfBounds>
    where
        T: Clone,
    {
        let (front, back) = self.translate_range(range)?;
        Ok(Deque::from_parts(self.front.slice(front), self.back.slice(back)))
    }

    /// Returns a deque holding the elements in the given range.
    ///
    /// See [`try_slice`](Deque::try_slice) for a checked version.
    ///
    /// # Panics
    /// Panics if the starting point is greater than the end point or if the
    /// end point is greater than the length of the deque.
    ///
    /// # Examples
    /// ```
    /// let deque = duodeque::AllocDeque::from([0, 1, 2, 3, 4, 5]);
    /// assert_eq!(deque.slice(0..3), &[0, 1, 2]);
    /// assert_eq!(deque.slice(4..), &[4, 5]);
    /// assert!(deque.slice(2..2).is_empty());
    /// ```
    #[track_caller]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> DequeSlice<T, S>
    where
        T: Clone,
    {
        match self.try_slice(range) {
            Ok(slice) => slice,
            Err(err) => range_out_of_bounds(err),
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    ///
    /// let mut it = deque.iter();
    /// assert_eq!(it.next(), Some(&4));
    /// assert_eq!(it.next(), Some(&5));
    /// assert_eq!(it.next(), Some(&3));
    /// assert!(it.next().is_none());
    /// ```
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter {
            deque: self,
            start: 0,
            end: self.len(),
        }
    }

    /// Creates an iterator that covers the specified range in the `Deque`.
    ///
    /// # Panics
    /// Panics if the starting point is greater than the end point or if the
    /// end point is greater than the length of the deque.
    ///
    /// # Examples
    /// ```
    /// let mut deque = duodeque::AllocDeque::new();
    /// deque.extend(1..=5);
    ///
    /// let mut it = deque.range(2..4);
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&4));
    /// assert!(it.next().is_none());
    /// ```
    #[track_caller]
    pub fn range<R: RangeBounds<usize>>(&self, range: R) -> Iter<'_, T, S> {
        match normalize_range(range, self.len()) {
            Ok(Range { start, end }) => Iter {
                deque: self,
                start,
                end,
            },
            Err(err) => range_out_of_bounds(err),
        }
    }

    fn rebalance(&mut self) {
        if self.front.is_empty() && self.back.len() > 1 {
            Self::refill(&mut self.back, &mut self.front);
        } else if self.back.is_empty() && self.front.len() > 1 {
            Self::refill(&mut self.front, &mut self.back);
        }
    }

    /// Moves the half of `full` nearest the middle of the deque over to the
    /// empty `starved` half.
    fn refill(full: &mut S, starved: &mut S) {
        debug_assert!(starved.is_empty());

        let rest = full.split_off(full.len() / 2);
        let mut moved = mem::replace(full, rest);
        moved.reverse();
        *starved = moved;
    }
}

impl<T, S: Sequence<T>> Index<usize> for Deque<T, S> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => index_out_of_range(index, self.len()),
        }
    }
}

impl<T, S: Sequence<T>> IndexMut<usize> for Deque<T, S> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => index_out_of_range(index, len),
        }
    }
}

impl<T, S: Sequence<T>> Sequence<T> for Deque<T, S> {
    type Slice = DequeSlice<T, S>;

    #[inline]
    fn len(&self) -> usize {
        Deque::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Deque::is_empty(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        Deque::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        Deque::get_mut(self, index)
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn insert(&mut self, index: usize, value: T) {
        Deque::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        Deque::remove(self, index)
    }

    fn split_off(&mut self, at: usize) -> Self {
        Deque::split_off(self, at)
    }

    #[inline]
    fn reverse(&mut self) {
        Deque::reverse(self);
    }

    fn slice(&self, range: Range<usize>) -> Self::Slice
    where
        T: Clone,
    {
        Deque::slice(self, range)
    }
}

impl<T, S: Sequence<T>> Default for Deque<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: Sequence<T> + Clone> Clone for Deque<T, S> {
    fn clone(&self) -> Self {
        Deque {
            front: self.front.clone(),
            back: self.back.clone(),
            elem: PhantomData,
        }
    }
}

impl<T: Debug, S: Sequence<T>> Debug for Deque<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, S: Sequence<T>> Hash for Deque<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<AT, AS, BT, BS> PartialEq<Deque<BT, BS>> for Deque<AT, AS>
where
    AT: PartialEq<BT>,
    AS: Sequence<AT>,
    BS: Sequence<BT>,
{
    fn eq(&self, other: &Deque<BT, BS>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, S: Sequence<T>> Eq for Deque<T, S> {}

impl<T: PartialEq, S: Sequence<T>, R: AsRef<[T]>> PartialEq<R> for Deque<T, S> {
    fn eq(&self, other: &R) -> bool {
        let other = other.as_ref();
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, AS, BS> PartialOrd<Deque<T, BS>> for Deque<T, AS>
where
    T: PartialOrd,
    AS: Sequence<T>,
    BS: Sequence<T>,
{
    fn partial_cmp(&self, other: &Deque<T, BS>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, S: Sequence<T>> Ord for Deque<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, S: Sequence<T>> Extend<T> for Deque<T, S> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Clone, S: Sequence<T>> Extend<&'a T> for Deque<T, S> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        iter.into_iter()
            .for_each(|item| self.push_back(item.clone()));
    }
}

impl<T, S: Sequence<T>> FromIterator<T> for Deque<T, S> {
    /// Collects all elements into the back half, then rebalances, which
    /// leaves the elements split evenly between the two halves.
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut back = S::default();
        iter.into_iter().for_each(|item| back.push(item));
        Deque::from_parts(S::default(), back)
    }
}

impl<T, S: Sequence<T>, const N: usize> From<[T; N]> for Deque<T, S> {
    fn from(array: [T; N]) -> Self {
        IntoIterator::into_iter(array).collect()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl<T> From<alloc::vec::Vec<T>> for Deque<T, alloc::vec::Vec<T>> {
    /// Uses the vector as the back half, then rebalances.
    fn from(vec: alloc::vec::Vec<T>) -> Self {
        Deque::from_parts(alloc::vec::Vec::new(), vec)
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](Deque::iter) and
/// [`range`](Deque::range) methods on [`Deque`]. See their documentation
/// for more.
pub struct Iter<'a, T, S: Sequence<T>> {
    deque: &'a Deque<T, S>,
    start: usize,
    end: usize,
}

impl<T, S: Sequence<T>> Clone for Iter<'_, T, S> {
    fn clone(&self) -> Self {
        Iter {
            deque: self.deque,
            start: self.start,
            end: self.end,
        }
    }
}

impl<T: Debug, S: Sequence<T>> Debug for Iter<'_, T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, S: Sequence<T>> Iterator for Iter<'a, T, S> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.start == self.end {
            return None;
        }

        let result = self.deque.get(self.start);
        debug_assert!(result.is_some());
        self.start += 1;
        result
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<'a, T, S: Sequence<T>> DoubleEndedIterator for Iter<'a, T, S> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        let result = self.deque.get(self.end);
        debug_assert!(result.is_some());
        result
    }
}

impl<T, S: Sequence<T>> ExactSizeIterator for Iter<'_, T, S> {}
impl<T, S: Sequence<T>> FusedIterator for Iter<'_, T, S> {}

/// An owning iterator over the elements of a deque.
///
/// This `struct` is created by the [`into_iter`](IntoIterator::into_iter)
/// method on [`Deque`] (provided by the [`IntoIterator`] trait).
pub struct IntoIter<T, S: Sequence<T>> {
    inner: Deque<T, S>,
}

impl<T: Debug, S: Sequence<T>> Debug for IntoIter<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T, S: Sequence<T>> Iterator for IntoIter<T, S> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, S: Sequence<T>> DoubleEndedIterator for IntoIter<T, S> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, S: Sequence<T>> ExactSizeIterator for IntoIter<T, S> {}
impl<T, S: Sequence<T>> FusedIterator for IntoIter<T, S> {}

impl<T, S: Sequence<T>> IntoIterator for Deque<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T, S: Sequence<T>> IntoIterator for &'a Deque<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A deque using two vectors for storage.
///
/// Slicing an `AllocDeque` copies the selected elements.
///
/// # Examples
/// ```
/// let mut deque = duodeque::AllocDeque::<char>::new();
/// deque.push_front('b');
/// deque.push_front('a');
/// deque.push_back('c');
/// deque.push_back('d');
/// assert_eq!(deque, &['a', 'b', 'c', 'd']);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub type AllocDeque<T> = Deque<T, alloc::vec::Vec<T>>;

/// A deque using two [`SharedVec`](crate::SharedVec)s for storage.
///
/// Slicing a `SharedDeque` takes constant time and shares the source's
/// buffers; whichever side is written to first makes its own copy.
///
/// # Examples
/// ```
/// let mut deque = duodeque::SharedDeque::from([0, 1, 2, 3, 4, 5]);
/// let mut slice = deque.slice(1..4);
/// deque.push_back(6);
/// slice.push_front(9);
/// assert_eq!(deque, &[0, 1, 2, 3, 4, 5, 6]);
/// assert_eq!(slice, &[9, 1, 2, 3]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub type SharedDeque<T> = Deque<T, crate::shared::SharedVec<T>>;

/// A deque whose halves are themselves [`AllocDeque`]s.
///
/// # Examples
/// ```
/// let deque = duodeque::NestedDeque::from([1, 2, 3, 4, 5, 6, 7, 8]);
/// let (front, back) = deque.as_parts();
/// assert_eq!(front, &[4, 3, 2, 1]);
/// assert_eq!(back, &[5, 6, 7, 8]);
/// assert_eq!(deque.slice(2..6), &[3, 4, 5, 6]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub type NestedDeque<T> = Deque<T, AllocDeque<T>>;
