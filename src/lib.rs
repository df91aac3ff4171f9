#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/duodeque/0.1.0")]

//! A double-ended queue built from two growable sequences, generic over the
//! storage backing each of them.
//!
//! [`Deque`] keeps its elements in a `front` half stored in reverse and a
//! `back` half stored in order, giving amortized constant-time operations at
//! both ends and constant-time random access. The halves can be any type
//! implementing [`Sequence`](storage::Sequence):
//!
//! * [`AllocDeque`] uses two [`Vec`](alloc::vec::Vec)s; slicing it copies.
//! * [`SharedDeque`] uses two [`SharedVec`]s; slicing it takes constant time
//!   and shares the buffers until either side is modified.
//! * [`NestedDeque`] uses two `AllocDeque`s, and any deque can be nested in
//!   the same way.
//!
//! # Examples
//! ```
//! use duodeque::{AllocDeque, IndexLocation};
//!
//! let mut deque = AllocDeque::from([0usize, 1, 2, 3, 4, 5]);
//! assert_eq!(deque.as_parts(), (&vec![2, 1, 0], &vec![3, 4, 5]));
//! assert_eq!(deque.translate(4), Ok(IndexLocation::Back(1)));
//!
//! let front = deque.slice(..3);
//! assert_eq!(front, &[0, 1, 2]);
//!
//! while let Some(x) = deque.pop_back() {
//!     assert_eq!(x, deque.len());
//! }
//! ```
//!
//! # Features
//! * `alloc` (enabled by default): [`Sequence`](storage::Sequence) for
//!   [`Vec`](alloc::vec::Vec), [`SharedVec`], and the deque aliases.
//! * `std`: implements `std::error::Error` for the error types.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod deque;
pub mod error;
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub mod shared;
pub mod storage;

#[cfg(test)]
mod test_utils;

pub use crate::deque::{Deque, DequeSlice, IndexLocation};
pub use crate::error::{IndexOutOfRange, RangeOutOfBounds};

#[cfg(feature = "alloc")]
pub use crate::deque::{AllocDeque, NestedDeque, SharedDeque};
#[cfg(feature = "alloc")]
pub use crate::shared::SharedVec;
