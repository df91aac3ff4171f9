//! Error types returned by the checked deque operations.

use core::fmt::{self, Display, Formatter};

/// The error returned when a logical index does not refer to an element.
///
/// This is the error type for [`Deque::translate`](crate::Deque::translate);
/// indexing a deque out of bounds panics with the same message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexOutOfRange {
    /// The offending index.
    pub index: usize,
    /// The length of the deque at the time of the access.
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index out of range: the len is {} but the index is {}",
            self.len, self.index
        )
    }
}

/// The error returned when a logical range is inverted or extends past the
/// end of a deque.
///
/// This is the error type for [`Deque::translate_range`](crate::Deque::translate_range)
/// and [`Deque::try_slice`](crate::Deque::try_slice).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RangeOutOfBounds {
    /// The inclusive lower bound of the requested range.
    pub start: usize,
    /// The exclusive upper bound of the requested range.
    pub end: usize,
    /// The length of the deque at the time of the access.
    pub len: usize,
}

impl Display for RangeOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.start > self.end {
            write!(f, "range starts at {} but ends at {}", self.start, self.end)
        } else {
            write!(
                f,
                "range end index {} out of range for deque of length {}",
                self.end, self.len
            )
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for IndexOutOfRange {}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for RangeOutOfBounds {}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("{}", IndexOutOfRange { index, len })
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn range_out_of_bounds(error: RangeOutOfBounds) -> ! {
    panic!("{}", error)
}
