//! Common traits and error type for the stable heap
//!
//! - [`Compare`]: the comparison capability a [`StableHeap`](crate::StableHeap)
//!   stores and consults for every ordering decision
//! - [`HeapError`]: failures reported by the fallible insertion path
//!
//! Any closure `Fn(&T, &T) -> Ordering` is a [`Compare<T>`], so most callers
//! never name the trait directly.

use std::cmp::Ordering;
use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HeapError {
    /// Growing the backing storage failed; the heap was left untouched
    #[error("failed to grow heap storage: {0}")]
    AllocationFailed(#[from] TryReserveError),
    /// More live entries than the tie-break counter type can number
    #[error("tie-break counter exhausted: {len} live entries leave no counter value free")]
    CounterExhausted {
        /// Number of live entries when the insert was attempted
        len: usize,
    },
}

/// A total order over `T` supplied by the caller
///
/// Implementations must be a valid weak ordering: consistent across calls for
/// the same pair of values, transitive, and returning `Equal` for a value
/// compared with itself. The heap does not check this. A comparator that breaks
/// the contract never causes memory unsafety or non-termination (every sift loop
/// is bounded by the heap height), but the order values come out in is
/// unspecified.
///
/// # Example
///
/// ```rust
/// use stable_heap::{Compare, StableHeap};
///
/// struct ByLen;
///
/// impl Compare<String> for ByLen {
///     fn compare(&self, a: &String, b: &String) -> std::cmp::Ordering {
///         a.len().cmp(&b.len())
///     }
/// }
///
/// let mut heap = StableHeap::with_comparator(ByLen);
/// heap.push("ccc".to_string());
/// heap.push("a".to_string());
/// heap.push("b".to_string());
/// assert_eq!(heap.pop().as_deref(), Some("a"));
/// assert_eq!(heap.pop().as_deref(), Some("b"));
/// assert_eq!(heap.pop().as_deref(), Some("ccc"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares two values, returning their relative order
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
