//! # bidirad
//!
//! `bidirad` is a bidirectional eight-bit radix sort for fixed-width unsigned
//! integer keys (`u16`, `u64`). It sorts an entire array in place using a
//! single auxiliary buffer of the same size, distributing each digit pass
//! from both ends of the array toward the middle so that every pass writes
//! to both halves of its destination in parallel rather than walking it
//! left to right.
//!
//! ## Key Features
//!
//! - **Byte-wide digits**: keys are partitioned eight bits at a time, so a
//!   `u16` sorts in at most two passes and a `u64` in at most eight.
//! - **Skip-mask elision**: a digit position where every key shares the same
//!   byte contributes nothing to the final order and is skipped entirely,
//!   including in the parity calculation that picks the initial source
//!   array.
//! - **Single auxiliary buffer**: one allocation, sized to the input and
//!   acquired through a pluggable [`core::Allocator`], lives for the
//!   duration of the call and is released on every exit path, success or
//!   error.
//! - **Trivial-size fast paths**: zero, one, and two element inputs never
//!   allocate.
//!
//! ## Usage
//!
//! ```rust
//! use bidirad::sort_u64;
//!
//! let mut data = vec![9u64, 1, 800, 3, 64000000000];
//! sort_u64(&mut data, 1);
//! assert_eq!(data, vec![1, 3, 9, 800, 64000000000]);
//! ```
//!
//! For a result type that distinguishes allocation failure from success, or
//! to supply a custom [`core::Allocator`], use [`sort`] / [`sort_with_allocator`]
//! directly:
//!
//! ```rust
//! use bidirad::{sort, SortConfig};
//!
//! let mut data = vec![5u16, 2, 8, 1];
//! sort(&mut data, SortConfig::default()).expect("system allocator should not fail here");
//! assert_eq!(data, vec![1, 2, 5, 8]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(N · D) where D is the number of active (non-skipped) digit
//!   passes (at most 2 for `u16`, 8 for `u64`).
//! - **Space**: one auxiliary buffer of N elements, plus O(D · 256) for the
//!   histogram and offset tables.
//! - **Stability**: the sort is stable on keys. Within a bucket, the low
//!   cursor writes elements in the order it encountered them from the front
//!   of the source and the high cursor writes elements in the order it
//!   encountered them from the back; the two streams tile the bucket's
//!   destination range without gap or overlap, so original relative order is
//!   preserved even though each pass reads from both ends at once.

pub mod algo;
pub mod core;
pub mod error;
pub mod variants;

pub use algo::{sort, sort_u16, sort_u64, sort_with_allocator, SortConfig};
pub use core::{Allocator, RadixKey, SystemAllocator};
pub use error::SortError;

pub mod prelude {
    pub use crate::algo::{sort, sort_u16, sort_u64, sort_with_allocator, SortConfig};
    pub use crate::core::{Allocator, RadixKey, SystemAllocator};
    pub use crate::error::SortError;
}
