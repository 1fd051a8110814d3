//! Stable Priority Queue for Rust
//!
//! This crate provides [`StableHeap`], a binary min-heap that returns values
//! the comparator considers equal in the order they were inserted (FIFO).
//! `std::collections::BinaryHeap` makes no such promise.
//!
//! # Features
//!
//! - **Stable ordering**: ties are broken by insertion order, so draining the
//!   heap reproduces a stable sort
//! - **Caller-supplied order**: any [`Compare`] implementation, including plain
//!   closures; ascending `Ord` by default
//! - **Bounded counters, unbounded use**: the tie-break counter renumbers itself
//!   before it can wrap
//! - **Fallible insertion**: [`StableHeap::try_push`] reports allocation failure
//!   without disturbing the heap
//!
//! # Example
//!
//! ```rust
//! use stable_heap::compare::by_key;
//! use stable_heap::StableHeap;
//!
//! let mut heap = StableHeap::with_comparator(by_key(|p: &(&'static str, u32)| p.1));
//! heap.push(("A", 10));
//! heap.push(("B", 10));
//! heap.push(("C", 10));
//!
//! assert_eq!(heap.peek(), Some(&("A", 10)));
//! let names: Vec<_> = heap.drain_sorted().map(|p| p.0).collect();
//! assert_eq!(names, ["A", "B", "C"]);
//! ```

pub mod compare;
pub mod counter;
pub mod stable;
pub mod traits;

// Re-export the main types for convenience
pub use compare::Natural;
pub use counter::Counter;
pub use stable::{DrainSorted, StableHeap};
pub use traits::{Compare, HeapError};
